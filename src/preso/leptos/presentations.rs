//
// Copyright (c) 2026 Nathan Fiedler
//
use super::join_html;
use crate::domain::entities::{Item, LinkEntry, Section};
use leptos::prelude::*;

/// Headed lists of links, one per section, in catalog order.
pub fn render_sections(sections: Vec<Section>) -> String {
    join_html(sections.into_iter().map(|section| {
        let items = join_html(
            section
                .items
                .into_iter()
                .filter(Item::is_visible)
                .map(item_view),
        );
        view! {
            <h2>{section.heading}</h2>
            <ul inner_html=items></ul>
        }
    }))
}

fn item_view(item: Item) -> AnyView {
    match item {
        Item::Link(link) => view! {
            <li>
                <LinkAnchor link=link />
            </li>
        }
        .into_any(),
        Item::Group { label, links } => {
            let links = join_html(links.into_iter().filter(|link| !link.retired).map(|link| {
                view! {
                    <li>
                        <LinkAnchor link=link />
                    </li>
                }
            }));
            view! {
                <li>
                    {label}
                    <ul inner_html=links></ul>
                </li>
            }
            .into_any()
        }
        Item::Citation {
            authors,
            title,
            link,
        } => {
            let authors = format!("{}, ", authors);
            view! {
                <li>
                    {authors}
                    <i>{title}</i>
                    " "
                    <LinkAnchor link=link />
                </li>
            }
            .into_any()
        }
    }
}

/// The anchor for a link followed by its annotation, if any.
#[component]
fn LinkAnchor(link: LinkEntry) -> impl IntoView {
    match link.trailer() {
        Some(trailer) => view! {
            <a href=link.url>{link.text}</a>
            {trailer}
        }
        .into_any(),
        None => view! { <a href=link.url>{link.text}</a> }.into_any(),
    }
}
