//
// Copyright (c) 2026 Nathan Fiedler
//
use crate::domain::entities::{Catalog, PAGE_ID};
use anyhow::Error;
use leptos::prelude::*;

pub mod chrome;
pub mod nav;
mod presentations;

pub use chrome::{Chrome, Footer, Navigation, StyleLoader};

// Static lists are joined ahead of time and set as inner HTML, since
// collected views carry hydration markers that this page never uses.
pub(crate) fn join_html<V, I>(views: I) -> String
where
    V: RenderHtml,
    I: IntoIterator<Item = V>,
{
    views.into_iter().map(|view| view.to_html()).collect()
}

///
/// Renders the presentations page: the catalog wrapped in the site chrome.
///
#[derive(Clone)]
pub struct PresentationsPage {
    chrome: Chrome,
}

impl PresentationsPage {
    pub fn new(chrome: Chrome) -> Self {
        Self { chrome }
    }

    ///
    /// Produce the complete HTML document for the catalog, resolving shared
    /// assets against `root`. Any include that fails to render fails the
    /// whole page.
    ///
    pub fn render(&self, catalog: &Catalog, root: &str) -> Result<String, Error> {
        let style = self.chrome.style.render(root)?;
        let navigation = self.chrome.navigation.render(PAGE_ID, root)?;
        let footer = self.chrome.footer.render()?;
        let title = catalog.title.clone();
        let heading = view! { <h1>{catalog.heading.clone()}</h1> }.to_html();
        let content = heading + &presentations::render_sections(catalog.sections.clone());
        let html = view! {
            <!DOCTYPE html>
            <html>
                <head>
                    <meta charset="utf-8" />
                    <title>{title}</title>
                    {style}
                </head>
                <body>
                    {navigation}
                    <div class="content" inner_html=content></div>
                    <br />
                    <br />
                    <br />
                    {footer}
                </body>
            </html>
        }
        .to_html();
        Ok(html)
    }
}
