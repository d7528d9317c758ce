use std::sync::OnceLock;

use scraper::node::Element;
use scraper::{Html, Selector};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageDescriptor {
    pub src: String,
    pub alt: String,
    pub width: String,
    pub height: String,
}

// MediaWiki thumbnails carry the original file size in
// data-file-width/data-file-height, the plain attributes only
// hold the scaled-down thumb size.
fn dimension(el: &Element, full: &str, plain: &str) -> String {
    el.attr(full)
        .or_else(|| el.attr(plain))
        .unwrap_or("unknown")
        .to_string()
}

fn img_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("img").unwrap())
}

pub fn scan_images(html: &str) -> Vec<ImageDescriptor> {
    let document = Html::parse_document(html);

    let mut res = Vec::new();
    for element in document.select(img_selector()) {
        let el = element.value();

        res.push(ImageDescriptor {
            src: el.attr("src").unwrap_or("").to_string(),
            alt: el.attr("alt").unwrap_or("").to_string(),
            width: dimension(el, "data-file-width", "width"),
            height: dimension(el, "data-file-height", "height"),
        });
    }

    res
}

pub fn filter_models(images: Vec<ImageDescriptor>) -> Vec<ImageDescriptor> {
    images
        .into_iter()
        .filter(|img| {
            img.alt.to_lowercase().contains("model")
                || img.src.to_lowercase().contains("model")
        })
        .collect()
}
