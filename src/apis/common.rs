use crate::contacts::extract_emails;
use crate::error::{Result, ScraperError};
use crate::types::DetailInfo;
use scraper::{ElementRef, Html, Selector};

/// Compile a CSS selector, mapping the parse error into a crate error.
pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(format!("{css}: {e}")))
}

/// Text nodes under an element, skipping script and style contents.
pub fn visible_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> + 'a {
    element.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map_or(false, |el| matches!(el.name(), "script" | "style"));
        (!hidden).then(|| &**text)
    })
}

/// Each text node trimmed, empty pieces dropped, the rest joined by single spaces.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    visible_text(element)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-document text with one text node per line, so adjacent nodes
/// never fuse into a single email-looking token.
pub fn page_text(document: &Html) -> String {
    visible_text(document.root_element())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve an href against a site origin.
///
/// Root-relative paths get the origin prefixed, scheme-relative ones get `https:`,
/// everything else passes through untouched. Blank hrefs resolve to nothing.
pub fn resolve_link(base_url: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        None
    } else if href.starts_with("//") {
        Some(format!("https:{href}"))
    } else if href.starts_with('/') {
        Some(format!("{}{}", base_url.trim_end_matches('/'), href))
    } else {
        Some(href.to_string())
    }
}

/// Detail-page heuristics shared by every site.
///
/// Sponsors are whatever sits in elements classed `sponsor` or `partner`;
/// contacts are email-like strings anywhere in the page text. Both silently
/// come back empty when the markup does not carry those shapes.
pub struct DetailExtractor {
    sponsor_selector: Selector,
}

impl DetailExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            sponsor_selector: parse_selector(".sponsor, .partner")?,
        })
    }

    pub fn extract(&self, html: &str) -> DetailInfo {
        let document = Html::parse_document(html);

        let sponsors = document
            .select(&self.sponsor_selector)
            .map(stripped_text)
            .filter(|s| !s.is_empty())
            .collect();

        let contacts = extract_emails(&page_text(&document));

        DetailInfo { sponsors, contacts }
    }
}
