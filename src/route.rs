//! Hash Routes
//!
//! Logical navigation targets for the single-page app. Parsing is pure so it
//! can be tested without a browser; the routing side effects live on
//! `AppContext`.

use crate::models::Wishlist;

/// Logical navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `#/wishlists` — the wishlist table
    WishlistList,
    /// `#/wishlists/create` — the form in create mode
    WishlistCreate,
    /// `#/wishlists/edit/{id}` — the form in edit mode
    WishlistEdit(String),
}

impl Route {
    /// Parse a `window.location.hash` value.
    ///
    /// Anything unrecognized (including the empty hash on first load) falls
    /// back to the wishlist table.
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["wishlists"] => Route::WishlistList,
            ["wishlists", "create"] => Route::WishlistCreate,
            ["wishlists", "edit", id] => Route::WishlistEdit((*id).to_string()),
            _ => Route::WishlistList,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::WishlistList => "#/wishlists".to_string(),
            Route::WishlistCreate => "#/wishlists/create".to_string(),
            Route::WishlistEdit(id) => format!("#/wishlists/edit/{}", id),
        }
    }

    /// Target of the edit action for a wishlist row.
    pub fn edit_for(wishlist: &Wishlist) -> Route {
        Route::WishlistEdit(wishlist.id.clone())
    }
}
