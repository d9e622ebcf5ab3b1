//! Structural auditing of generated HTML pages.
//!
//! [`PageAudit`] parses a written page back in and exposes the pieces the
//! acceptance checks care about: metadata, navigation links, images,
//! section structure and the raw source for pattern-level assertions.

use std::fs;
use std::path::Path;

use scraper::{Html, Selector};

use crate::error::{Error, Result};

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("static selector")
}

/// A hyperlink with its visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// An `<img>` element's audit-relevant attributes.
#[derive(Debug, Clone)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub has_onerror: bool,
}

/// Parsed view of one generated page.
pub struct PageAudit {
    /// Raw source, for checks the DOM view cannot express.
    pub raw: String,
    doc: Html,
}

impl PageAudit {
    /// Read and parse a page from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MissingPage(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        Ok(Self::from_source(raw))
    }

    pub fn from_source(raw: String) -> Self {
        let doc = Html::parse_document(&raw);
        Self { raw, doc }
    }

    pub fn has_doctype(&self) -> bool {
        self.raw.trim_start().to_lowercase().starts_with("<!doctype")
    }

    /// `lang` attribute of the root `<html>` element.
    pub fn html_lang(&self) -> Option<String> {
        self.doc
            .select(&sel("html"))
            .next()
            .and_then(|e| e.value().attr("lang"))
            .map(str::to_string)
    }

    pub fn title(&self) -> String {
        self.doc
            .select(&sel("title"))
            .next()
            .map(|e| e.text().collect::<String>())
            .unwrap_or_default()
    }

    pub fn has_utf8_charset(&self) -> bool {
        self.doc
            .select(&sel("meta[charset]"))
            .any(|e| {
                e.value()
                    .attr("charset")
                    .is_some_and(|c| c.eq_ignore_ascii_case("utf-8"))
            })
    }

    pub fn has_viewport_meta(&self) -> bool {
        self.doc.select(&sel("meta[name=\"viewport\"]")).next().is_some()
    }

    pub fn h1_text(&self) -> String {
        self.doc
            .select(&sel("h1"))
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    pub fn has_canvas(&self) -> bool {
        self.doc.select(&sel("canvas")).next().is_some()
    }

    /// Links inside the header `<nav>`.
    pub fn nav_links(&self) -> Vec<Link> {
        self.links_in("nav a")
    }

    /// Links inside the `<footer>`.
    pub fn footer_links(&self) -> Vec<Link> {
        self.links_in("footer a")
    }

    fn links_in(&self, selector: &str) -> Vec<Link> {
        self.doc
            .select(&sel(selector))
            .map(|e| Link {
                href: e.value().attr("href").unwrap_or_default().to_string(),
                text: e.text().collect::<String>().trim().to_string(),
            })
            .collect()
    }

    pub fn images(&self) -> Vec<ImageRef> {
        self.doc
            .select(&sel("img"))
            .map(|e| ImageRef {
                src: e.value().attr("src").unwrap_or_default().to_string(),
                alt: e.value().attr("alt").unwrap_or_default().to_string(),
                has_onerror: e.value().attr("onerror").is_some(),
            })
            .collect()
    }

    /// Whether a `<section>` with the given id exists.
    pub fn has_section(&self, id: &str) -> bool {
        self.doc
            .select(&sel(&format!("section#{}", id)))
            .next()
            .is_some()
    }

    /// Text of every `<h3>` in document order.
    pub fn h3_texts(&self) -> Vec<String> {
        self.doc
            .select(&sel("h3"))
            .map(|e| e.text().collect::<String>().trim().to_string())
            .collect()
    }

    /// Occurrences of a class attribute value in the raw source.
    pub fn class_count(&self, class: &str) -> usize {
        self.raw.matches(&format!("class=\"{}\"", class)).count()
    }

    /// Raw source of the footer, for substring checks the chain tests use.
    pub fn footer_raw(&self) -> &str {
        let start = match self.raw.find("<footer>") {
            Some(i) => i,
            None => return "",
        };
        let end = self.raw[start..]
            .find("</footer>")
            .map(|i| start + i)
            .unwrap_or(self.raw.len());
        &self.raw[start..end]
    }
}
