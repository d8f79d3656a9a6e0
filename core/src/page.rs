//! Minimal HTML inspection for the landing page smoke test.

use scraper::{ElementRef, Html};

const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// A fetched HTML document.
#[derive(Debug, Clone)]
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Trimmed text of the first `<title>` element.
    pub fn title(&self) -> Option<String> {
        self.elements()
            .find(|el| el.value().name() == "title")
            .map(|el| text_of(&el))
    }

    /// `href`s of every link whose text is exactly `name`, in document order.
    pub fn links_named(&self, name: &str) -> Vec<String> {
        self.elements()
            .filter(|el| el.value().name() == "a" && text_of(el) == name)
            .filter_map(|el| el.value().attr("href").map(str::to_string))
            .collect()
    }

    pub fn has_heading(&self, name: &str) -> bool {
        self.elements()
            .any(|el| HEADINGS.contains(&el.value().name()) && text_of(&el) == name)
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }
}

fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
