//! The six extractors and the combinator that runs them over one document.
//!
//! Every extractor is a pure function of the document (and base URL where
//! references are resolved). None of them can fail: missing attributes map
//! to empty strings, empty lists or `false`.

pub mod forms;
pub mod headings;
pub mod images;
pub mod links;
pub mod meta;
pub mod text_blocks;

#[cfg(test)]
mod tests;

use crate::parsers::Document;
use crate::results::ExtractionResult;
use url::Url;

/// Runs every extractor over `doc`.
///
/// `base_url` is the address the document was fetched from. If it is not an
/// absolute URL no link or image can be resolved, so both lists stay empty.
pub fn extract(doc: &Document, base_url: &str) -> ExtractionResult {
    let (links, images) = match Url::parse(base_url) {
        Ok(base) => (links::extract(doc, &base), images::extract(doc, &base)),
        Err(e) => {
            ::log::warn!("Base URL {:?} is not absolute ({}), skipping links and images", base_url, e);
            (Vec::new(), Vec::new())
        }
    };

    let result = ExtractionResult {
        meta: meta::extract(doc),
        headings: headings::extract(doc),
        links,
        images,
        text_blocks: text_blocks::extract(doc),
        forms: forms::extract(doc),
    };

    ::log::debug!(
        "Extracted {} headings, {} links, {} images, {} text blocks, {} forms",
        result.headings.len(),
        result.links.len(),
        result.images.len(),
        result.text_blocks.len(),
        result.forms.len()
    );

    result
}
