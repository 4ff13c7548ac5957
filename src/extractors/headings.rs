use crate::parsers::Document;
use crate::parsers::html::{attr_or, token_list};
use crate::parsers::text::collapsed_text;
use crate::results::{Heading, HeadingLevel};
use scraper::Selector;
use std::sync::LazyLock;

static LEVEL_SELECTORS: LazyLock<Vec<(HeadingLevel, Selector)>> = LazyLock::new(|| {
    HeadingLevel::ALL
        .iter()
        .map(|level| {
            let selector = Selector::parse(level.tag()).expect("heading tags are valid selectors");
            (*level, selector)
        })
        .collect()
});

/// Collects headings grouped by level.
///
/// Every `h1` comes first (in document order), then every `h2`, and so on
/// down to `h6`. Output is level-major, not document order.
pub fn extract(doc: &Document) -> Vec<Heading> {
    LEVEL_SELECTORS
        .iter()
        .flat_map(|(level, selector)| {
            doc.select(selector).map(move |element| Heading {
                level: *level,
                text: collapsed_text(element),
                id: attr_or(&element, "id", ""),
                classes: token_list(&element, "class"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_major_order() {
        let doc = Document::parse(
            "<body><h2>Second level</h2><h1>Top</h1><h3>Deep</h3><h1>Another top</h1></body>",
        );

        let headings = extract(&doc);
        let summary: Vec<_> = headings
            .iter()
            .map(|h| (h.level, h.text.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (HeadingLevel::H1, "Top"),
                (HeadingLevel::H1, "Another top"),
                (HeadingLevel::H2, "Second level"),
                (HeadingLevel::H3, "Deep"),
            ]
        );
    }

    #[test]
    fn test_heading_fields() {
        let doc = Document::parse(
            r#"<h4 id="faq" class="title  muted">
                 Frequently
                 <em>asked</em>   questions
               </h4><h5></h5>"#,
        );

        let headings = extract(&doc);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].text, "Frequently asked questions");
        assert_eq!(headings[0].id, "faq");
        assert_eq!(headings[0].classes, vec!["title", "muted"]);

        assert_eq!(headings[1].level, HeadingLevel::H5);
        assert_eq!(headings[1].text, "");
        assert!(headings[1].classes.is_empty());
    }
}
