use crate::parsers::Document;
use crate::parsers::html::{attr_or, non_empty_attr, token_list};
use crate::parsers::text::trimmed_text;
use crate::resolver::resolve_against;
use crate::results::Link;
use scraper::Selector;
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("`a` is a valid selector"));

/// Collects every anchor with an `href`, resolved against `base`
pub fn extract(doc: &Document, base: &Url) -> Vec<Link> {
    doc.select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let href = non_empty_attr(&element, "href")?;
            let url = resolve_against(base, href)?;

            Some(Link {
                text: trimmed_text(element),
                url,
                title: attr_or(&element, "title", ""),
                rel: token_list(&element, "rel"),
                classes: token_list(&element, "class"),
            })
        })
        .collect()
}
