use crate::parsers::Document;
use crate::parsers::html::{attr_or, non_empty_attr};
use crate::resolver::resolve_against;
use crate::results::Image;
use scraper::Selector;
use std::sync::LazyLock;
use url::Url;

static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("`img` is a valid selector"));

/// Collects every `<img>` with a `src`, resolved against `base`
pub fn extract(doc: &Document, base: &Url) -> Vec<Image> {
    doc.select(&IMG_SELECTOR)
        .filter_map(|element| {
            let src = resolve_against(base, non_empty_attr(&element, "src")?)?;

            Some(Image {
                src,
                alt: attr_or(&element, "alt", ""),
                title: attr_or(&element, "title", ""),
                width: attr_or(&element, "width", ""),
                height: attr_or(&element, "height", ""),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images() {
        let base = Url::parse("https://example.com/gallery/").unwrap();
        let doc = Document::parse(
            r#"<body>
                <img src="cat.jpg" alt="A cat" width="640" height="480">
                <img data-src="lazy.jpg" alt="Lazy, no src">
                <img src="https://images.example.net/dog.png" title="Dog">
            </body>"#,
        );

        let images = extract(&doc, &base);
        assert_eq!(images.len(), 2);

        assert_eq!(images[0].src, "https://example.com/gallery/cat.jpg");
        assert_eq!(images[0].alt, "A cat");
        assert_eq!(images[0].width, "640");
        assert_eq!(images[0].height, "480");
        assert_eq!(images[0].title, "");

        assert_eq!(images[1].src, "https://images.example.net/dog.png");
        assert_eq!(images[1].title, "Dog");
        assert_eq!(images[1].alt, "");
        assert_eq!(images[1].width, "");
    }

    #[test]
    fn test_unresolvable_src_is_dropped() {
        let base = Url::parse("https://example.com/").unwrap();
        let doc = Document::parse(r#"<img src="http://"><img src=" logo.png ">"#);

        let srcs: Vec<_> = extract(&doc, &base).into_iter().map(|i| i.src).collect();
        assert_eq!(srcs, vec!["https://example.com/logo.png"]);
    }
}
