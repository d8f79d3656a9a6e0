//! Static HTML for the landing page and the guide.

use axum::response::Html;

const LANDING: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>JSONPlaceholder - Free Fake REST API</title>
  </head>
  <body>
    <nav>
      <a href="/">JSONPlaceholder</a>
      <a href="/guide">Guide</a>
    </nav>
    <main>
      <h1>{JSON} Placeholder</h1>
      <p>Free fake and reliable API for testing and prototyping.</p>
      <p>Not sure where to start? Read the <a href="/guide">Guide</a>.</p>
      <h2>Resources</h2>
      <ul>
        <li><a href="/posts">/posts</a></li>
        <li><a href="/comments">/comments</a></li>
        <li><a href="/albums">/albums</a></li>
        <li><a href="/photos">/photos</a></li>
        <li><a href="/todos">/todos</a></li>
      </ul>
    </main>
  </body>
</html>
"#;

const GUIDE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>JSONPlaceholder - Guide</title>
  </head>
  <body>
    <nav>
      <a href="/">JSONPlaceholder</a>
      <a href="/guide">Guide</a>
    </nav>
    <main>
      <h1>Guide</h1>
      <p>Every resource supports GET, POST, PUT and DELETE.</p>
    </main>
  </body>
</html>
"#;

pub async fn landing() -> Html<&'static str> {
    Html(LANDING)
}

pub async fn guide() -> Html<&'static str> {
    Html(GUIDE)
}
