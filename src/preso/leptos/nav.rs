//
// Copyright (c) 2026 Nathan Fiedler
//
use super::chrome::Navigation;
use super::join_html;
use anyhow::Error;
use leptos::prelude::*;
use url::Url;

/// An entry in the site menu.
#[derive(Clone, Debug)]
pub struct NavPage {
    pub id: String,
    pub label: String,
    pub href: String,
}

impl NavPage {
    pub fn new(id: &str, label: &str, href: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            href: href.to_owned(),
        }
    }

    /// Site-relative pages are resolved against the root path, absolute
    /// URLs are used as-is.
    pub fn resolve(&self, root: &str) -> String {
        if Url::parse(&self.href).is_ok() {
            self.href.clone()
        } else {
            format!("{}{}", root, self.href)
        }
    }
}

/// Menu of the pages that make up the documentation site.
pub struct SiteNavigation {
    pages: Vec<NavPage>,
}

impl SiteNavigation {
    pub fn new(pages: Vec<NavPage>) -> Self {
        Self { pages }
    }
}

impl Default for SiteNavigation {
    fn default() -> Self {
        Self::new(vec![
            NavPage::new("home", "Home", "index.php"),
            NavPage::new("about", "About Us", "about.php"),
            NavPage::new("publications", "Publications", "publications.php"),
            NavPage::new("presentations", "Presentations", "presentations.php"),
            NavPage::new("developers", "Developers", "developers.php"),
            NavPage::new("installation", "Installation", "installation.php"),
            NavPage::new("documentation", "Documentation", "documentation.php"),
            NavPage::new("examples", "Examples", "examples.php"),
            NavPage::new(
                "sourceforge",
                "SourceForge",
                "http://sourceforge.net/projects/libmesh",
            ),
        ])
    }
}

impl Navigation for SiteNavigation {
    fn render(&self, page_id: &str, root: &str) -> Result<AnyView, Error> {
        let items = join_html(self.pages.iter().map(|page| {
            let class = if page.id == page_id {
                "navItem active"
            } else {
                "navItem"
            };
            let href = page.resolve(root);
            let label = page.label.clone();
            view! {
                <li class=class>
                    <a href=href>{label}</a>
                </li>
            }
        }));
        Ok(view! {
            <div id="navBar">
                <ul inner_html=items></ul>
            </div>
        }
        .into_any())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_and_absolute() {
        let page = NavPage::new("home", "Home", "index.php");
        assert_eq!(page.resolve(""), "index.php");
        assert_eq!(page.resolve("../"), "../index.php");
        let page = NavPage::new("sf", "SF", "http://sourceforge.net/projects/libmesh");
        assert_eq!(page.resolve("../"), "http://sourceforge.net/projects/libmesh");
    }

    #[test]
    fn test_active_page_highlighted() {
        let nav = SiteNavigation::default();
        let html = nav.render("presentations", "").unwrap().to_html();
        assert!(html.starts_with(r#"<div id="navBar">"#));
        assert_eq!(html.matches("navItem active").count(), 1);
        let active = html.find("navItem active").unwrap();
        let link = html.find(r#"href="presentations.php""#).unwrap();
        assert!(active < link);
        assert!(!html[active..link].contains("<li"));
        assert!(html.ends_with("</a></li></ul></div>"));
    }

    #[test]
    fn test_unknown_page_has_no_highlight() {
        let nav = SiteNavigation::default();
        let html = nav.render("nowhere", "../").unwrap().to_html();
        assert_eq!(html.matches("navItem active").count(), 0);
        assert!(html.contains(r#"href="../index.php""#));
    }
}
