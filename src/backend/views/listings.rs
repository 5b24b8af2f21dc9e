//! "My listings" page: the session user's items plus the new-listing form

use maud::{html, Markup};

use crate::backend::books::ItemSummary;
use crate::backend::views::layout::page;
use crate::shared::format_cents;

/// Values echoed back into the form after a failed submission
#[derive(Debug, Default, Clone)]
pub struct ListingFormValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: &'a str,
    pub photo_url: &'a str,
}

pub fn listings_page(
    username: &str,
    items: &[ItemSummary],
    error: Option<&str>,
    values: &ListingFormValues<'_>,
) -> Markup {
    let content = html! {
        h1 { "My listings" }
        section.new-listing {
            h2 { "List a book" }
            @if let Some(error) = error {
                p.error { (error) }
            }
            form method="post" action="/listings" {
                label for="title" { "Title" }
                input id="title" type="text" name="title" maxlength="200" value=(values.title) required;
                label for="description" { "Description" }
                textarea id="description" name="description" { (values.description) }
                label for="price" { "Price ($)" }
                input id="price" type="text" name="price" inputmode="decimal" value=(values.price) required;
                label for="photo_url" { "Photo URL" }
                input id="photo_url" type="url" name="photo_url" value=(values.photo_url);
                button type="submit" { "Create listing" }
            }
        }
        @if items.is_empty() {
            p.empty { "You have not listed anything yet." }
        } @else {
            ul.listings {
                @for item in items {
                    (listing_row(item))
                }
            }
        }
    };
    page("My listings", Some(username), content)
}

fn listing_row(item: &ItemSummary) -> Markup {
    html! {
        li.listing {
            a href=(format!("/books/{}", item.id)) { (item.title) }
            " "
            span.price { (format_cents(item.price)) }
            @if item.sold_status {
                " "
                span.sold { "Sold" }
            } @else {
                form method="post" action=(format!("/listings/{}/sold", item.id)) {
                    button type="submit" { "Mark sold" }
                }
            }
            form method="post" action=(format!("/listings/{}/delete", item.id)) {
                button type="submit" { "Delete" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn item(title: &str, sold: bool) -> ItemSummary {
        ItemSummary {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            seller: "owner".to_string(),
            title: title.to_string(),
            description: String::new(),
            price: 1200,
            sold_status: sold,
            created_at: Utc::now(),
            photos: Vec::new(),
        }
    }

    #[test]
    fn test_sold_items_have_no_sold_button() {
        let unsold = item("Kindred", false);
        let sold = item("Beloved", true);
        let html = listings_page("owner", &[unsold.clone(), sold.clone()], None, &ListingFormValues::default())
            .into_string();

        assert!(html.contains(&format!("/listings/{}/sold", unsold.id)));
        assert!(!html.contains(&format!("/listings/{}/sold", sold.id)));
        assert!(html.contains(&format!("/listings/{}/delete", sold.id)));
    }

    #[test]
    fn test_error_echoes_values() {
        let values = ListingFormValues { title: "Ulysses", price: "abc", ..Default::default() };
        let html = listings_page("owner", &[], Some("Price must be a number"), &values).into_string();
        assert!(html.contains("Price must be a number"));
        assert!(html.contains(r#"value="Ulysses""#));
        assert!(html.contains(r#"value="abc""#));
        assert!(html.contains("You have not listed anything yet."));
    }
}
