//! Host document and mount point resolution.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Page served when no host document is configured.
pub const DEFAULT_DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <title>Fidelity</title>
    <base href="/" />
</head>
<body>
    <div id="app">Loading...</div>
</body>
</html>
"#;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("valid comment regex"));
static ID_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<[a-z][^>]*?\sid\s*=\s*["']([^"']+)["']"#).expect("valid id regex")
});
static HEAD_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head[\s>]").expect("valid head regex"));
static BODY_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body[\s>]").expect("valid body regex"));

/// Where a root component is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountSelector {
    /// `#id`: the element with that id.
    Id(String),
    /// `head::after`: appended to the end of `<head>`.
    HeadAfter,
    /// `body`: the document body.
    Body,
}

impl MountSelector {
    /// Parses a selector, returning `None` for unsupported forms.
    #[must_use]
    pub fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        match selector {
            "head::after" => Some(Self::HeadAfter),
            "body" => Some(Self::Body),
            _ => selector
                .strip_prefix('#')
                .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
                .map(|id| Self::Id(id.to_string())),
        }
    }
}

impl fmt::Display for MountSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::HeadAfter => write!(f, "head::after"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// The mount points a hosting page offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostDocument {
    ids: BTreeSet<String>,
    has_head: bool,
    has_body: bool,
}

impl HostDocument {
    /// Scans HTML for element ids and the head and body elements.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        let uncommented = COMMENT.replace_all(html, "");
        let html: &str = &uncommented;

        let ids = ID_ATTRIBUTE
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        Self {
            ids,
            has_head: HEAD_ELEMENT.is_match(html),
            has_body: BODY_ELEMENT.is_match(html),
        }
    }

    /// Reads and scans an HTML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        Ok(Self::from_html(&std::fs::read_to_string(path)?))
    }

    /// Returns whether `selector` names a mount point of this document.
    #[must_use]
    pub fn resolves(&self, selector: &MountSelector) -> bool {
        match selector {
            MountSelector::Id(id) => self.ids.contains(id),
            MountSelector::HeadAfter => self.has_head,
            MountSelector::Body => self.has_body,
        }
    }

    /// Returns the element ids found in the document.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
