use crate::parsers::Document;
use crate::results::PageMetadata;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta").expect("`meta` is a valid selector"));

/// What a single `<meta>` element contributes
#[derive(Debug, Clone, PartialEq, Eq)]
enum MetaEntry {
    Description(Option<String>),
    Keywords(Option<String>),
    Charset(String),
}

/// Builds page metadata from `<title>` and a single pass over `<meta>` elements.
///
/// Entries are folded in document order and each one replaces the field it
/// names, so the last matching element wins. A `description` or `keywords`
/// element without `content` clears the field.
pub fn extract(doc: &Document) -> PageMetadata {
    let initial = PageMetadata {
        title: doc.title(),
        ..PageMetadata::default()
    };

    doc.select(&META_SELECTOR)
        .filter_map(classify)
        .fold(initial, merge)
}

fn classify(element: ElementRef<'_>) -> Option<MetaEntry> {
    let meta = element.value();
    let content = || meta.attr("content").map(|c| c.trim().to_string());

    match meta.attr("name") {
        Some("description") => Some(MetaEntry::Description(content())),
        Some("keywords") => Some(MetaEntry::Keywords(content())),
        _ => meta
            .attr("charset")
            .map(str::trim)
            .filter(|charset| !charset.is_empty())
            .map(|charset| MetaEntry::Charset(charset.to_string())),
    }
}

fn merge(mut meta: PageMetadata, entry: MetaEntry) -> PageMetadata {
    match entry {
        MetaEntry::Description(value) => meta.description = value,
        MetaEntry::Keywords(value) => meta.keywords = value,
        MetaEntry::Charset(value) => meta.charset = Some(value),
    }
    meta
}
