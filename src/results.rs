use serde::{Deserialize, Serialize};
use std::fmt;

/// Page-level metadata from `<title>` and `<meta>` elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub charset: Option<String>,
}

/// Heading level, serialized as the lowercase tag name (`"h1"` .. `"h6"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels in the order they are extracted
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    pub id: String,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    /// Always absolute
    pub url: String,
    pub title: String,
    pub rel: Vec<String>,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Always absolute
    pub src: String,
    pub alt: String,
    pub title: String,
    pub width: String,
    pub height: String,
}

/// Non-empty text found in a block-ish element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// One of `p`, `div`, `span`, `article`, `section`
    pub tag: String,
    pub text: String,
    pub classes: Vec<String>,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(rename = "type")]
    pub field_type: String,
    pub name: String,
    pub id: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub action: String,
    pub method: String,
    pub fields: Vec<FormField>,
}

/// Everything extracted from one page.
///
/// Built once by [`crate::extractors::extract`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub meta: PageMetadata,
    pub headings: Vec<Heading>,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
    #[serde(rename = "text_content")]
    pub text_blocks: Vec<TextBlock>,
    pub forms: Vec<Form>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let result = ExtractionResult {
            headings: vec![Heading {
                level: HeadingLevel::H2,
                text: "Intro".to_string(),
                id: String::new(),
                classes: vec![],
            }],
            forms: vec![Form {
                action: "/search".to_string(),
                method: "get".to_string(),
                fields: vec![FormField {
                    field_type: "text".to_string(),
                    name: "q".to_string(),
                    id: String::new(),
                    required: true,
                }],
            }],
            ..ExtractionResult::default()
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["headings"][0]["level"], "h2");
        assert_eq!(value["forms"][0]["fields"][0]["type"], "text");
        assert!(value["text_content"].is_array());
        assert!(value["meta"]["title"].is_null());
    }

    #[test]
    fn test_heading_levels_in_order() {
        let tags: Vec<_> = HeadingLevel::ALL.iter().map(|l| l.tag()).collect();
        assert_eq!(tags, ["h1", "h2", "h3", "h4", "h5", "h6"]);
        assert_eq!(HeadingLevel::H3.to_string(), "h3");
    }
}
