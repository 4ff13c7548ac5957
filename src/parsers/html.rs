use crate::parsers::text;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("`title` is a valid selector"));

/// A parsed HTML document.
///
/// Read-only: extraction only ever queries it.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML permissively; malformed markup is recovered, never rejected
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// Elements matching `selector`, in document order
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// Trimmed text of the first `<title>` element, if there is one
    pub fn title(&self) -> Option<String> {
        self.html.select(&TITLE_SELECTOR).next().map(text::trimmed_text)
    }
}

/// Attribute value, or `default` when the attribute is missing
pub fn attr_or(element: &ElementRef<'_>, name: &str, default: &str) -> String {
    element.value().attr(name).unwrap_or(default).to_string()
}

/// Whether the attribute is present at all, whatever its value
pub fn has_attr(element: &ElementRef<'_>, name: &str) -> bool {
    element.value().attr(name).is_some()
}

/// Whitespace-separated tokens of an attribute such as `class` or `rel`
pub fn token_list(element: &ElementRef<'_>, name: &str) -> Vec<String> {
    element
        .value()
        .attr(name)
        .map(|value| value.split_ascii_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Non-empty attribute value, treating `href=""` the same as a missing `href`
pub fn non_empty_attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|value| !value.is_empty())
}
