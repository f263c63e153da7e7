//! UI Components
//!
//! Reusable Leptos components.

mod layout;
mod modal;
mod toast;
mod wishlist_form;
mod wishlist_list;
mod wishlist_table;

pub use layout::{Footer, Header, Sidebar};
pub use modal::{DialogButton, DialogChoice, ModalDialog};
pub use toast::ToastStack;
pub use wishlist_form::{FormMode, WishlistForm};
pub use wishlist_list::WishlistList;
pub use wishlist_table::WishlistTable;
