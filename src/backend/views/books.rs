use maud::{html, Markup};

use crate::backend::books::ItemSummary;
use crate::backend::views::layout::page;
use crate::shared::format_cents;

/// Detail page for one item
pub fn book_page(username: Option<&str>, item: &ItemSummary, posted: &str) -> Markup {
    let content = html! {
        article.book {
            h1 { (item.title) }
            @if item.sold_status {
                p.sold { "Sold" }
            }
            p.price { (format_cents(item.price)) }
            p.meta { "Sold by " (item.seller) ", posted " (posted) }
            @if !item.description.is_empty() {
                p.description { (item.description) }
            }
            @if item.photos.is_empty() {
                p.empty { "No photos yet." }
            } @else {
                div.photos {
                    @for url in &item.photos {
                        img src=(url) alt=(item.title);
                    }
                }
            }
        }
    };
    page(&item.title, username, content)
}
