//! HTML parser for extracting searchable text and links
//!
//! This module handles parsing HTML content to extract:
//! - The visible text of the page, case-folded for matching
//! - The raw targets of every `<a href>` in document order

use scraper::{Html, Node, Selector};

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracted information from a fetched document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Visible text, lowercased
    pub text: String,

    /// Link targets exactly as written in the document
    pub links: Vec<String>,
}

impl ExtractedPage {
    /// Returns true if the text contains `word`, ignoring case
    pub fn contains_word(&self, word: &str) -> bool {
        self.text.contains(&word.to_lowercase())
    }
}

/// Converts a fetched document into text and outgoing links
pub trait ContentExtractor: Send + Sync {
    fn extract(&self, body: &str) -> ExtractedPage;
}

/// `ContentExtractor` for HTML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl ContentExtractor for HtmlExtractor {
    fn extract(&self, body: &str) -> ExtractedPage {
        parse_html(body)
    }
}

/// Parses HTML content and extracts text and links
///
/// # Text Extraction
///
/// All text nodes are concatenated in document order, except those inside
/// `<script>`, `<style>`, `<noscript>` and `<template>`. The result is
/// lowercased.
///
/// # Link Extraction
///
/// Every `href` of an `<a>` element, untrimmed and unresolved. Nothing is
/// filtered here; resolution and scope checks happen in the coordinator.
///
/// # Example
///
/// ```
/// use word_ripple::crawler::parse_html;
///
/// let html = r#"<html><body><h1>Hello Rust</h1><a href="/next">Next</a></body></html>"#;
/// let page = parse_html(html);
/// assert!(page.text.contains("hello rust"));
/// assert_eq!(page.links, vec!["/next".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        text: extract_text(&document),
        links: extract_links(&document),
    }
}

/// Concatenates the visible text nodes of the document
fn extract_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(chunk) = node.value() {
            let hidden = node
                .ancestors()
                .filter_map(|ancestor| ancestor.value().as_element())
                .any(|element| HIDDEN_ELEMENTS.contains(&element.name()));
            if !hidden {
                text.push_str(chunk);
            }
        }
    }

    text.to_lowercase()
}

/// Collects the `href` of every anchor element
fn extract_links(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
