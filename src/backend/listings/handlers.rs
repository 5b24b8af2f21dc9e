//! Listing management handlers
//!
//! All routes require a session. Mutations check ownership first: a missing
//! item is 404, someone else's item is 403.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::db::{self, NewListing};
use crate::backend::books::db::item_owner;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiForm, ApiPath, AuthUser};
use crate::backend::views::listings::{listings_page, ListingFormValues};
use crate::shared::{parse_price, SharedError};

pub const MAX_TITLE_LEN: usize = 200;

/// New listing form as posted by the browser
#[derive(Deserialize, Debug, Default)]
pub struct ListingForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Dollars, e.g. "12.50"
    pub price: String,
    #[serde(default)]
    pub photo_url: String,
}

impl ListingForm {
    /// Validate the form into an insertable listing
    pub fn validate(&self) -> Result<NewListing, SharedError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SharedError::validation("title", "Title is required"));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(SharedError::validation(
                "title",
                "Title must be at most 200 characters",
            ));
        }

        let price = parse_price(&self.price)?;

        let photo_url = match self.photo_url.trim() {
            "" => None,
            url if url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/') => {
                Some(url.to_string())
            }
            _ => {
                return Err(SharedError::validation(
                    "photo_url",
                    "Photo URL must start with http://, https:// or /",
                ))
            }
        };

        Ok(NewListing {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            price,
            photo_url,
        })
    }

    fn values(&self) -> ListingFormValues<'_> {
        ListingFormValues {
            title: &self.title,
            description: &self.description,
            price: &self.price,
            photo_url: &self.photo_url,
        }
    }
}

/// Show the user's listings
pub async fn my_listings(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Html<String>, BackendError> {
    let items = db::list_owned_items(&pool, user.user_id).await?;
    Ok(Html(
        listings_page(&user.name, &items, None, &ListingFormValues::default()).into_string(),
    ))
}

/// Create a listing, or re-render the page with the validation error
pub async fn create_listing(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiForm(form): ApiForm<ListingForm>,
) -> Result<Response, BackendError> {
    let listing = match form.validate() {
        Ok(listing) => listing,
        Err(err) => {
            tracing::warn!("Invalid listing from {}: {}", user.name, err);
            let items = db::list_owned_items(&pool, user.user_id).await?;
            let page = listings_page(&user.name, &items, Some(err.user_message()), &form.values());
            return Ok((StatusCode::BAD_REQUEST, Html(page.into_string())).into_response());
        }
    };

    let item_id = db::create_item(&pool, user.user_id, &listing).await?;
    tracing::info!("User {} listed item {} ({})", user.name, item_id, listing.title);

    Ok(Redirect::to("/listings").into_response())
}

/// Mark one of the user's items sold
pub async fn mark_listing_sold(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiPath(item_id): ApiPath<Uuid>,
) -> Result<Redirect, BackendError> {
    require_owner(&pool, user.user_id, item_id).await?;

    if !db::mark_sold(&pool, item_id).await? {
        return Err(BackendError::not_found("Item"));
    }

    tracing::info!("User {} marked item {} sold", user.name, item_id);
    Ok(Redirect::to("/listings"))
}

/// Delete one of the user's items
pub async fn delete_listing(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    ApiPath(item_id): ApiPath<Uuid>,
) -> Result<Redirect, BackendError> {
    require_owner(&pool, user.user_id, item_id).await?;

    if !db::delete_item(&pool, item_id).await? {
        return Err(BackendError::not_found("Item"));
    }

    tracing::info!("User {} deleted item {}", user.name, item_id);
    Ok(Redirect::to("/listings"))
}

async fn require_owner(pool: &PgPool, user_id: Uuid, item_id: Uuid) -> Result<(), BackendError> {
    match item_owner(pool, item_id).await? {
        None => Err(BackendError::not_found("Item")),
        Some(owner) if owner != user_id => {
            Err(BackendError::forbidden("You can only change your own listings"))
        }
        Some(_) => Ok(()),
    }
}
