use crate::results::ExtractionResult;
use serde::{Deserialize, Serialize};

/// Summary counts for one extraction.
///
/// Always derived from an [`ExtractionResult`], never stored on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_headings: usize,
    pub total_links: usize,
    pub total_images: usize,
    pub total_forms: usize,
    pub total_text_blocks: usize,
}

pub fn aggregate(result: &ExtractionResult) -> Statistics {
    Statistics {
        total_headings: result.headings.len(),
        total_links: result.links.len(),
        total_images: result.images.len(),
        total_forms: result.forms.len(),
        total_text_blocks: result.text_blocks.len(),
    }
}
