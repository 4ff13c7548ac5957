use crate::parsers::Document;
use crate::parsers::html::{attr_or, has_attr};
use crate::results::{Form, FormField};
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static FORM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("form").expect("`form` is a valid selector"));

static FIELD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("input, textarea, select").expect("form field tags are valid selectors")
});

/// Collects forms and their `input`/`textarea`/`select` descendants
pub fn extract(doc: &Document) -> Vec<Form> {
    doc.select(&FORM_SELECTOR)
        .map(|form| Form {
            action: attr_or(&form, "action", ""),
            method: attr_or(&form, "method", "get"),
            fields: form.select(&FIELD_SELECTOR).map(field).collect(),
        })
        .collect()
}

/// `required` only depends on the attribute being present
fn field(element: ElementRef<'_>) -> FormField {
    FormField {
        field_type: attr_or(&element, "type", "text"),
        name: attr_or(&element, "name", ""),
        id: attr_or(&element, "id", ""),
        required: has_attr(&element, "required"),
    }
}
