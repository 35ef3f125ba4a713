//! # metalens-html: HTML Selector Primitives
//!
//! Small wrappers around `scraper` for the metadata lookups the extractor
//! performs: `<meta>` content by `name` or `property`, `<link>` hrefs by
//! `rel`, and the handful of document-level attributes (`<title>`,
//! `<meta charset>`, `<html lang>`).
//!
//! Empty attribute values are treated as absent, so callers never see an
//! empty string where a field should simply be missing.

use scraper::{ElementRef, Selector};
use std::collections::BTreeMap;

pub use scraper::Html;

/// Which attribute a `<meta>` tag is keyed by.
///
/// Standard SEO tags use `name="..."`, while the Open Graph and article
/// vocabularies use `property="..."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

/// Returns the first element matching `selector`, or `None` if the selector
/// fails to parse or nothing matches.
fn select_first<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector).next()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Looks up the `content` of the first `<meta>` tag keyed by `key`.
pub fn meta_content(doc: &Html, key: &str, attr: MetaAttr) -> Option<String> {
    let selector = format!("meta[{}=\"{}\"]", attr.as_str(), key);
    select_first(doc, &selector)
        .and_then(|el| el.value().attr("content"))
        .and_then(non_empty)
}

/// Looks up the `href` of the first `<link>` tag with the given `rel`.
pub fn link_href(doc: &Html, rel: &str) -> Option<String> {
    let selector = format!("link[rel=\"{rel}\"]");
    select_first(doc, &selector)
        .and_then(|el| el.value().attr("href"))
        .and_then(non_empty)
}

/// The text content of the document's `<title>` element.
pub fn page_title(doc: &Html) -> Option<String> {
    select_first(doc, "title").and_then(|el| non_empty(&el.text().collect::<String>()))
}

/// The declared charset from `<meta charset=...>`.
pub fn charset(doc: &Html) -> Option<String> {
    select_first(doc, "meta[charset]")
        .and_then(|el| el.value().attr("charset"))
        .and_then(non_empty)
}

/// The `lang` attribute of the root `<html>` element.
pub fn html_lang(doc: &Html) -> Option<String> {
    select_first(doc, "html")
        .and_then(|el| el.value().attr("lang"))
        .and_then(non_empty)
}

/// Collects every `<link rel="alternate">` carrying both `hreflang` and
/// `href` into a locale → URL map. Entries missing either attribute are
/// skipped.
pub fn alternate_links(doc: &Html) -> BTreeMap<String, String> {
    let mut alternates = BTreeMap::new();
    let Ok(selector) = Selector::parse("link[rel=\"alternate\"]") else {
        return alternates;
    };
    for el in doc.select(&selector) {
        let hreflang = el.value().attr("hreflang").and_then(non_empty);
        let href = el.value().attr("href").and_then(non_empty);
        if let (Some(hreflang), Some(href)) = (hreflang, href) {
            alternates.insert(hreflang, href);
        }
    }
    alternates
}
