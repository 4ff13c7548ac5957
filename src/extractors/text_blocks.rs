use crate::parsers::Document;
use crate::parsers::html::{attr_or, token_list};
use crate::parsers::text::trimmed_text;
use crate::results::TextBlock;
use scraper::Selector;
use std::sync::LazyLock;

/// Tags whose text is collected as blocks
pub const TEXT_BLOCK_TAGS: [&str; 5] = ["p", "div", "span", "article", "section"];

static TEXT_BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&TEXT_BLOCK_TAGS.join(", ")).expect("text block tags are valid selectors")
});

/// Collects non-empty text from block-ish elements in one document-order pass.
///
/// Nested elements each produce their own block, so a `<span>` inside a `<p>`
/// contributes its text twice: once through the paragraph, once on its own.
pub fn extract(doc: &Document) -> Vec<TextBlock> {
    doc.select(&TEXT_BLOCK_SELECTOR)
        .filter_map(|element| {
            let text = trimmed_text(element);
            if text.is_empty() {
                return None;
            }

            Some(TextBlock {
                tag: element.value().name().to_string(),
                text,
                classes: token_list(&element, "class"),
                id: attr_or(&element, "id", ""),
            })
        })
        .collect()
}
