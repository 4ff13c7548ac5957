use scraper::ElementRef;

/// All descendant text of an element, trimmed at both ends.
///
/// Internal whitespace is kept as it appears in the source.
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Descendant text with every whitespace run collapsed to a single space
pub fn collapsed_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Collapses whitespace runs to single spaces and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b   c "), "a b c");
        assert_eq!(collapse_whitespace("\n \t"), "");
    }

    #[test]
    fn test_element_text() {
        let html = Html::parse_fragment("<p>\n  Hello <b>big</b>\n  world  </p>");
        let selector = Selector::parse("p").unwrap();
        let p = html.select(&selector).next().unwrap();

        assert_eq!(trimmed_text(p), "Hello big\n  world");
        assert_eq!(collapsed_text(p), "Hello big world");
    }
}
