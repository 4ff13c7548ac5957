use crate::extractors::extract;
use crate::parsers::Document;
use crate::results::{ExtractionResult, HeadingLevel};
use crate::stats::aggregate;

const BASE: &str = "https://shop.example.com/catalog/index.html";

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Catalog</title>
    <meta name="description" content="Old description">
    <meta name="keywords" content="shop, catalog">
    <meta name="description" content="Everything we sell">
</head>
<body>
    <h2 class="section">Featured</h2>
    <h1 id="top">Catalog</h1>
    <div class="grid">
        <article>
            <a href="items/1" title="First item" rel="bookmark">Item one</a>
            <img src="/img/1.png" alt="Item one" width="100" height="80">
        </article>
        <article>
            <a href="https://partner.example.org/2">Item two</a>
            <img src="//cdn.example.com/2.png">
        </article>
    </div>
    <p>   </p>
    <a>Not a link</a>
    <form action="/search">
        <input name="q" required="">
        <select name="sort"></select>
    </form>
</body>
</html>"#;

#[test]
fn test_full_page_extraction() {
    let doc = Document::parse(PAGE);
    let result = extract(&doc, BASE);

    assert_eq!(result.meta.title.as_deref(), Some("Catalog"));
    assert_eq!(result.meta.description.as_deref(), Some("Everything we sell"));
    assert_eq!(result.meta.keywords.as_deref(), Some("shop, catalog"));
    assert_eq!(result.meta.charset.as_deref(), Some("utf-8"));

    let levels: Vec<_> = result.headings.iter().map(|h| h.level).collect();
    assert_eq!(levels, vec![HeadingLevel::H1, HeadingLevel::H2]);

    let urls: Vec<_> = result.links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://shop.example.com/catalog/items/1",
            "https://partner.example.org/2",
        ]
    );

    let srcs: Vec<_> = result.images.iter().map(|i| i.src.as_str()).collect();
    assert_eq!(
        srcs,
        vec![
            "https://shop.example.com/img/1.png",
            "https://cdn.example.com/2.png",
        ]
    );

    let tags: Vec<_> = result.text_blocks.iter().map(|b| b.tag.as_str()).collect();
    assert_eq!(tags, vec!["div", "article", "article"]);

    assert_eq!(result.forms.len(), 1);
    assert_eq!(result.forms[0].fields.len(), 2);
    assert!(result.forms[0].fields[0].required);
}

#[test]
fn test_extraction_is_deterministic() {
    let doc = Document::parse(PAGE);
    assert_eq!(extract(&doc, BASE), extract(&doc, BASE));

    let reparsed = Document::parse(PAGE);
    assert_eq!(extract(&doc, BASE), extract(&reparsed, BASE));
}

#[test]
fn test_counts_match_document() {
    let doc = Document::parse(PAGE);
    let stats = aggregate(&extract(&doc, BASE));

    assert_eq!(stats.total_headings, 2);
    assert_eq!(stats.total_links, 2);
    assert_eq!(stats.total_images, 2);
    assert_eq!(stats.total_text_blocks, 3);
    assert_eq!(stats.total_forms, 1);
}

#[test]
fn test_empty_document() {
    let doc = Document::parse("");
    let result = extract(&doc, BASE);

    assert_eq!(result, ExtractionResult::default());

    let stats = aggregate(&result);
    assert_eq!(stats.total_headings, 0);
    assert_eq!(stats.total_links, 0);
    assert_eq!(stats.total_images, 0);
    assert_eq!(stats.total_forms, 0);
    assert_eq!(stats.total_text_blocks, 0);
}

#[test]
fn test_relative_base_yields_no_links() {
    let doc = Document::parse(r#"<a href="/x">x</a><img src="y.png"><p>kept</p>"#);
    let result = extract(&doc, "/not/absolute");

    assert!(result.links.is_empty());
    assert!(result.images.is_empty());
    assert_eq!(result.text_blocks.len(), 1);
}
