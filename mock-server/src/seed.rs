//! Records every fresh mock starts with, copied from the public service.

use crate::records::{Album, Comment, Photo, Post, Todo};

pub fn albums() -> Vec<Album> {
    [
        (1, "quidem molestiae enim"),
        (2, "sunt qui excepturi placeat culpa"),
        (3, "omnis laborum odio"),
    ]
    .into_iter()
    .map(|(id, title)| Album {
        user_id: 1,
        id,
        title: title.to_string(),
    })
    .collect()
}

pub fn comments() -> Vec<Comment> {
    [
        (
            1,
            "id labore ex et quam laborum",
            "Eliseo@gardner.biz",
            "laudantium enim quasi est quidem magnam voluptate ipsam eos\ntempora quo necessitatibus\ndolor quam autem quasi\nreiciendis et nam sapiente accusantium",
        ),
        (
            2,
            "quo vero reiciendis velit similique earum",
            "Jayne_Kuhic@sydney.com",
            "est natus enim nihil est dolore omnis voluptatem numquam\net omnis occaecati quod ullam at\nvoluptatem error expedita pariatur\nnihil sint nostrum voluptatem reiciendis et",
        ),
        (
            5,
            "vero eaque aliquid doloribus et culpa",
            "Hayden@althea.biz",
            "harum non quasi et ratione\ntempore iure ex voluptates in ratione\nharum architecto fugit inventore cupiditate\nvoluptates magni quo et",
        ),
    ]
    .into_iter()
    .map(|(id, name, email, body)| Comment {
        post_id: 1,
        id,
        name: name.to_string(),
        email: email.to_string(),
        body: body.to_string(),
    })
    .collect()
}

pub fn photos() -> Vec<Photo> {
    [
        (1, "accusamus beatae ad facilis cum similique qui sunt", "92c952"),
        (2, "reprehenderit est deserunt velit ipsam", "771796"),
        (3, "officia porro iure quia iusto qui ipsa ut modi", "24f355"),
    ]
    .into_iter()
    .map(|(id, title, color)| Photo {
        album_id: 1,
        id,
        title: title.to_string(),
        url: format!("https://via.placeholder.com/600/{color}"),
        thumbnail_url: format!("https://via.placeholder.com/150/{color}"),
    })
    .collect()
}

pub fn posts() -> Vec<Post> {
    [
        (
            1,
            "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
            "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\nreprehenderit molestiae ut ut quas totam\nnostrum rerum est autem sunt rem eveniet architecto",
        ),
        (
            2,
            "qui est esse",
            "est rerum tempore vitae\nsequi sint nihil reprehenderit dolor beatae ea dolores neque\nfugiat blanditiis voluptate porro vel nihil molestiae ut reiciendis\nqui aperiam non debitis possimus qui neque nisi nulla",
        ),
        (
            7,
            "magnam facilis autem",
            "dolore placeat quibusdam ea quo vitae\nmagni quis enim qui quis quo nemo aut saepe\nquidem repellat excepturi ut quia\nsunt ut sequi eos ea sed quas",
        ),
    ]
    .into_iter()
    .map(|(id, title, body)| Post {
        user_id: 1,
        id,
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

pub fn todos() -> Vec<Todo> {
    [
        (1, "delectus aut autem", false),
        (2, "quis ut nam facilis et officia qui", false),
        (3, "fugiat veniam minus", false),
        (4, "et porro tempora", true),
    ]
    .into_iter()
    .map(|(id, title, completed)| Todo {
        user_id: 1,
        id,
        title: title.to_string(),
        completed,
    })
    .collect()
}
