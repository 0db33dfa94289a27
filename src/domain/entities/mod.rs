//
// Copyright (c) 2026 Nathan Fiedler
//
use anyhow::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

/// Identifier of the presentations page within the site navigation.
pub static PAGE_ID: &str = "presentations";

///
/// Conditions that prevent the page from being assembled.
///
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SiteError {
    /// The link target is not a valid absolute URL.
    #[error("invalid url {0:?}: {1}")]
    InvalidUrl(String, String),
    /// A heading, group label, or link text was blank.
    #[error("empty text in {0}")]
    EmptyText(String),
    /// Two entries share the same link target.
    #[error("duplicate url {0:?}")]
    DuplicateUrl(String),
    /// A shared page include was never provided.
    #[error("missing include {0}")]
    MissingInclude(String),
}

///
/// A single hyperlink on the page, with optional trailing text.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Text of the anchor element.
    pub text: String,
    /// Target of the anchor element.
    pub url: String,
    /// Text that follows the anchor, such as the venue and date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Withdrawn links are kept in the catalog but never rendered.
    #[serde(default, skip_serializing_if = "is_false")]
    pub retired: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl LinkEntry {
    /// Construct a link with no annotation.
    pub fn new<T: Into<String>, U: Into<String>>(text: T, url: U) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            annotation: None,
            retired: false,
        }
    }

    /// Set the trailing annotation.
    pub fn annotation<S: Into<String>>(mut self, annotation: S) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Mark the link as withdrawn.
    pub fn retire(mut self) -> Self {
        self.retired = true;
        self
    }

    ///
    /// Return the annotation as it appears after the anchor. Annotations that
    /// begin with punctuation attach directly to the anchor, all others are
    /// separated by a single space.
    ///
    pub fn trailer(&self) -> Option<String> {
        let note = self.annotation.as_deref()?.trim();
        if note.is_empty() {
            None
        } else if note.starts_with([',', '.', ';', ':']) {
            Some(note.to_owned())
        } else {
            Some(format!(" {}", note))
        }
    }
}

///
/// One entry in a section list.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    /// A single anchor.
    Link(LinkEntry),
    /// A labelled sub-list of anchors.
    Group { label: String, links: Vec<LinkEntry> },
    /// Authors and an italicized title, followed by the anchor.
    Citation {
        authors: String,
        title: String,
        link: LinkEntry,
    },
}

impl Item {
    /// All of the links held by this item, in authored order.
    pub fn links(&self) -> Vec<&LinkEntry> {
        match self {
            Item::Link(link) => vec![link],
            Item::Group { links, .. } => links.iter().collect(),
            Item::Citation { link, .. } => vec![link],
        }
    }

    /// Return `true` if this item would produce any output.
    pub fn is_visible(&self) -> bool {
        match self {
            Item::Link(link) => !link.retired,
            Item::Group { links, .. } => links.iter().any(|l| !l.retired),
            Item::Citation { link, .. } => !link.retired,
        }
    }
}

impl From<LinkEntry> for Item {
    fn from(link: LinkEntry) -> Self {
        Item::Link(link)
    }
}

///
/// A headed list of items.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub items: Vec<Item>,
}

impl Section {
    pub fn new<S: Into<String>>(heading: S, items: Vec<Item>) -> Self {
        Self {
            heading: heading.into(),
            items,
        }
    }
}

///
/// The complete, ordered content of the presentations page.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Document title shown in the browser.
    pub title: String,
    /// Top-level heading of the page content.
    pub heading: String,
    pub sections: Vec<Section>,
}

impl Catalog {
    /// Every link in the catalog, retired or not, in page order.
    pub fn links(&self) -> Vec<&LinkEntry> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .flat_map(|i| i.links())
            .collect()
    }

    /// Links that will appear on the rendered page.
    pub fn visible_links(&self) -> Vec<&LinkEntry> {
        self.links().into_iter().filter(|l| !l.retired).collect()
    }

    ///
    /// Ensure every link target is a valid absolute URL, that no text is
    /// blank, and that no two entries share a target.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(SiteError::EmptyText("title".into()).into());
        }
        if self.heading.trim().is_empty() {
            return Err(SiteError::EmptyText("heading".into()).into());
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for (idx, section) in self.sections.iter().enumerate() {
            if section.heading.trim().is_empty() {
                return Err(SiteError::EmptyText(format!("section {}", idx)).into());
            }
            for item in section.items.iter() {
                if let Item::Group { label, .. } = item {
                    if label.trim().is_empty() {
                        let place = format!("group in {}", section.heading);
                        return Err(SiteError::EmptyText(place).into());
                    }
                }
                for link in item.links() {
                    if link.text.trim().is_empty() {
                        let place = format!("link in {}", section.heading);
                        return Err(SiteError::EmptyText(place).into());
                    }
                    if let Err(err) = Url::parse(&link.url) {
                        return Err(SiteError::InvalidUrl(link.url.clone(), err.to_string()).into());
                    }
                    if !seen.insert(link.url.as_str()) {
                        return Err(SiteError::DuplicateUrl(link.url.clone()).into());
                    }
                }
            }
        }
        Ok(())
    }
}
