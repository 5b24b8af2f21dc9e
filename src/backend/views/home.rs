//! Home page template
//!
//! The page binds the session display name and five named slots,
//! `feature0` .. `feature4`. A slot without an item renders nothing.

use maud::{html, Markup};
use uuid::Uuid;

use crate::backend::views::layout::page;
use crate::shared::{format_cents, FEATURED_SLOTS};

/// One featured row, already prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct HomeItem {
    pub id: Uuid,
    pub title: String,
    /// Price in cents
    pub price: i64,
    pub seller: String,
    /// Relative post date, e.g. "3 days ago"
    pub post_date: String,
    pub photo_url: String,
}

/// Template variables for the home page
#[derive(Debug)]
pub struct HomeView<'a> {
    pub username: Option<&'a str>,
    pub features: [Option<&'a HomeItem>; FEATURED_SLOTS],
}

/// Render the home page
pub fn home_page(view: &HomeView<'_>) -> Markup {
    let content = html! {
        h1 { "Featured books" }
        @if view.features.iter().all(Option::is_none) {
            p.empty { "No featured books right now. Check back soon!" }
        } @else {
            section.featured {
                @for (slot, feature) in view.features.iter().enumerate() {
                    @if let Some(item) = feature {
                        (feature_card(slot, item))
                    }
                }
            }
        }
    };

    page("Home", view.username, content)
}

fn feature_card(slot: usize, item: &HomeItem) -> Markup {
    html! {
        article.feature id=(format!("feature{}", slot)) {
            a href=(format!("/books/{}", item.id)) {
                img src=(item.photo_url) alt=(item.title);
                h2 { (item.title) }
            }
            p.price { (format_cents(item.price)) }
            p.meta { "Sold by " (item.seller) ", posted " (item.post_date) }
        }
    }
}
