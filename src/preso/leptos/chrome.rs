//
// Copyright (c) 2026 Nathan Fiedler
//

//! Shared page chrome: the stylesheet, navigation, and footer includes that
//! surround the content of every page on the site.

use crate::domain::entities::SiteError;
use anyhow::Error;
use leptos::prelude::*;
use std::sync::Arc;

/// Emits the stylesheet references for the document head.
pub trait StyleLoader: Send + Sync {
    fn render(&self, root: &str) -> Result<AnyView, Error>;
}

/// Emits the site menu, highlighting the page with the given identifier.
pub trait Navigation: Send + Sync {
    fn render(&self, page_id: &str, root: &str) -> Result<AnyView, Error>;
}

/// Emits the closing footer of the page.
pub trait Footer: Send + Sync {
    fn render(&self) -> Result<AnyView, Error>;
}

///
/// The set of includes that a page is wrapped in.
///
#[derive(Clone)]
pub struct Chrome {
    pub style: Arc<dyn StyleLoader>,
    pub navigation: Arc<dyn Navigation>,
    pub footer: Arc<dyn Footer>,
}

impl Chrome {
    pub fn builder() -> ChromeBuilder {
        ChromeBuilder::default()
    }

    /// Chrome made of the site's standard stylesheet, menu, and footer.
    pub fn site() -> Self {
        Self {
            style: Arc::new(SiteStylesheet::default()),
            navigation: Arc::new(super::nav::SiteNavigation::default()),
            footer: Arc::new(SiteFooter::default()),
        }
    }
}

#[derive(Default)]
pub struct ChromeBuilder {
    style: Option<Arc<dyn StyleLoader>>,
    navigation: Option<Arc<dyn Navigation>>,
    footer: Option<Arc<dyn Footer>>,
}

impl ChromeBuilder {
    pub fn style(mut self, style: Arc<dyn StyleLoader>) -> Self {
        self.style = Some(style);
        self
    }

    pub fn navigation(mut self, navigation: Arc<dyn Navigation>) -> Self {
        self.navigation = Some(navigation);
        self
    }

    pub fn footer(mut self, footer: Arc<dyn Footer>) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Fails with `SiteError::MissingInclude` if any include was not given.
    pub fn build(self) -> Result<Chrome, Error> {
        let style = self
            .style
            .ok_or_else(|| SiteError::MissingInclude("load_style".into()))?;
        let navigation = self
            .navigation
            .ok_or_else(|| SiteError::MissingInclude("make_navigation".into()))?;
        let footer = self
            .footer
            .ok_or_else(|| SiteError::MissingInclude("make_footer".into()))?;
        Ok(Chrome {
            style,
            navigation,
            footer,
        })
    }
}

/// Links the site stylesheet found relative to the root path.
pub struct SiteStylesheet {
    href: String,
}

impl SiteStylesheet {
    pub fn new<S: Into<String>>(href: S) -> Self {
        Self { href: href.into() }
    }
}

impl Default for SiteStylesheet {
    fn default() -> Self {
        Self::new("styles.css")
    }
}

impl StyleLoader for SiteStylesheet {
    fn render(&self, root: &str) -> Result<AnyView, Error> {
        let href = format!("{}{}", root, self.href);
        Ok(view! { <link rel="stylesheet" type="text/css" href=href /> }.into_any())
    }
}

/// Standard footer crediting the project host.
#[derive(Default)]
pub struct SiteFooter {}

impl Footer for SiteFooter {
    fn render(&self) -> Result<AnyView, Error> {
        Ok(view! {
            <div id="footer">
                <p>
                    "libMesh is hosted by "
                    <a href="http://sourceforge.net/projects/libmesh">"SourceForge"</a>
                    "."
                </p>
            </div>
        }
        .into_any())
    }
}
