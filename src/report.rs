use crate::results::ExtractionResult;
use crate::stats::Statistics;
use std::fmt::Write;

const RULE_WIDTH: usize = 80;
const SECTION_RULE_WIDTH: usize = 40;
const ITEM_RULE_WIDTH: usize = 20;

/// Renders an extraction as a human-readable report.
///
/// Sections always appear in the same order: header, statistics, meta,
/// headings, links, images, then forms (only when the page has any).
pub fn format_report(result: &ExtractionResult, stats: &Statistics, source_url: &str) -> String {
    let mut out = String::new();
    write_report(&mut out, result, stats, source_url).expect("writing to a String cannot fail");
    out
}

fn write_report(
    out: &mut String,
    result: &ExtractionResult,
    stats: &Statistics,
    source_url: &str,
) -> std::fmt::Result {
    writeln!(out, "Scraping Results for {}", source_url)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    section(out, "STATISTICS")?;
    writeln!(out, "Total Headings: {}", stats.total_headings)?;
    writeln!(out, "Total Links: {}", stats.total_links)?;
    writeln!(out, "Total Images: {}", stats.total_images)?;
    writeln!(out, "Total Forms: {}", stats.total_forms)?;
    writeln!(out, "Total Text Blocks: {}", stats.total_text_blocks)?;
    writeln!(out)?;

    let meta = &result.meta;
    section(out, "META INFORMATION")?;
    writeln!(out, "Title: {}", or_none(&meta.title))?;
    writeln!(out, "Description: {}", or_none(&meta.description))?;
    writeln!(out, "Keywords: {}", or_none(&meta.keywords))?;
    writeln!(out, "Charset: {}", or_none(&meta.charset))?;
    writeln!(out)?;

    section(out, "HEADINGS")?;
    for heading in &result.headings {
        writeln!(out, "{}: {}", heading.level, heading.text)?;
    }
    writeln!(out)?;

    section(out, "LINKS")?;
    for link in &result.links {
        writeln!(out, "Text: {}", link.text)?;
        writeln!(out, "URL: {}", link.url)?;
        if !link.title.is_empty() {
            writeln!(out, "Title: {}", link.title)?;
        }
        item_rule(out)?;
    }
    writeln!(out)?;

    section(out, "IMAGES")?;
    for image in &result.images {
        writeln!(out, "Source: {}", image.src)?;
        writeln!(out, "Alt Text: {}", image.alt)?;
        if !image.title.is_empty() {
            writeln!(out, "Title: {}", image.title)?;
        }
        item_rule(out)?;
    }

    if !result.forms.is_empty() {
        writeln!(out)?;
        section(out, "FORMS")?;
        for (i, form) in result.forms.iter().enumerate() {
            writeln!(out, "Form {}:", i + 1)?;
            writeln!(out, "Action: {}", form.action)?;
            writeln!(out, "Method: {}", form.method)?;
            writeln!(out, "Fields:")?;
            for field in &form.fields {
                let required = if field.required { " (required)" } else { "" };
                writeln!(out, "  - {}: {}{}", field.field_type, field.name, required)?;
            }
            item_rule(out)?;
        }
    }

    Ok(())
}

fn section(out: &mut String, label: &str) -> std::fmt::Result {
    writeln!(out, "{}", label)?;
    writeln!(out, "{}", "-".repeat(SECTION_RULE_WIDTH))
}

fn item_rule(out: &mut String) -> std::fmt::Result {
    writeln!(out, "{}", "-".repeat(ITEM_RULE_WIDTH))
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(none)")
}
