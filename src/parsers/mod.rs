pub mod html;
pub mod text;

pub use html::Document;

use crate::error::{Result, ScrapeError};
use crate::fetch::RawPage;
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use regex::bytes::Regex;
use std::sync::LazyLock;

/// How many leading bytes are inspected for binary content and `<meta>` charsets
const PRESCAN_LEN: usize = 1024;

/// Matches both `<meta charset="...">` and `<meta http-equiv content="...; charset=...">`
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("valid meta charset regex")
});

/// Decodes a fetched page and parses it into a [`Document`].
///
/// Markup problems never fail here; html5ever recovers from anything that
/// is text. Only content that is clearly not text is rejected.
pub fn parse_page(page: &RawPage) -> Result<Document> {
    let source = decode(&page.bytes, page.encoding.as_deref())?;
    ::log::debug!(
        "Parsing {} bytes of HTML from {}",
        source.len(),
        page.url
    );
    Ok(Document::parse(&source))
}

/// Decodes raw bytes to text.
///
/// The encoding is picked from, in order: a byte order mark, the charset the
/// server declared, a `<meta>` charset in the first kilobyte, then UTF-8.
/// Unknown labels are skipped. Malformed sequences become U+FFFD.
pub fn decode(bytes: &[u8], declared: Option<&str>) -> Result<String> {
    let head = &bytes[..bytes.len().min(PRESCAN_LEN)];

    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| declared.and_then(lookup))
        .or_else(|| sniff_meta_charset(head).and_then(|label| lookup(&label)))
        .unwrap_or(UTF_8);

    let wide = encoding == UTF_16LE || encoding == UTF_16BE;
    if !wide && head.contains(&0) {
        return Err(ScrapeError::Parse(
            "content contains NUL bytes and does not look like HTML".to_string(),
        ));
    }

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        ::log::debug!("Replaced malformed {} sequences while decoding", used.name());
    }
    Ok(text.into_owned())
}

/// Charset label from the first `<meta>` that declares one
pub fn sniff_meta_charset(head: &[u8]) -> Option<String> {
    let captures = META_CHARSET.captures(head)?;
    Some(String::from_utf8_lossy(&captures[1]).into_owned())
}

fn lookup(label: &str) -> Option<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes());
    if encoding.is_none() {
        ::log::warn!("Unknown charset {:?}, ignoring it", label);
    }
    encoding
}
