//! List and Form State Machines
//!
//! Pure reducers over tagged-union events. The components own the signals
//! and the side effects; everything here is testable without a rendering
//! layer or a backend.

use crate::models::Wishlist;

/// A wishlist tentatively selected for removal, awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingDeletion {
    pub is_dialog_visible: bool,
    pub pending_wishlist: Option<Wishlist>,
}

/// State owned by the list view, reset on every mount.
///
/// `data` and `error_message` are never both present: a fetch ends in
/// exactly one of them. `pending_deletion` is an overlay orthogonal to the
/// fetch state; selecting a delete target never touches `data`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    pub data: Option<Vec<Wishlist>>,
    pub error_message: Option<String>,
    pub loading: bool,
    pub pending_deletion: PendingDeletion,
}

/// Events that transition the list view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A fetch has started.
    SetLoading,
    /// The fetch resolved with the backend collection.
    SetSuccess(Vec<Wishlist>),
    /// The fetch failed; the payload is the user-visible message.
    SetError(String),
    /// A wishlist was selected for deletion, pending confirmation.
    /// Selecting another one while the dialog is open replaces the target.
    SetDeletionPending(Wishlist),
    /// The confirmation dialog was resolved (either way); clears the overlay.
    ResetDeletionPending,
}

pub fn reduce_list(state: ListState, event: ListEvent) -> ListState {
    match event {
        ListEvent::SetLoading => ListState {
            data: None,
            error_message: None,
            loading: true,
            ..state
        },
        ListEvent::SetSuccess(items) => ListState {
            data: Some(items),
            error_message: None,
            loading: false,
            ..state
        },
        ListEvent::SetError(message) => ListState {
            data: None,
            error_message: Some(message),
            loading: false,
            ..state
        },
        ListEvent::SetDeletionPending(wishlist) => ListState {
            pending_deletion: PendingDeletion {
                is_dialog_visible: true,
                pending_wishlist: Some(wishlist),
            },
            ..state
        },
        ListEvent::ResetDeletionPending => ListState {
            pending_deletion: PendingDeletion::default(),
            ..state
        },
    }
}

/// State owned by the wishlist form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub wishlist_id: String,
    pub wishlist_name: String,
}

/// Events that transition the form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Edit-mode preload: populate both fields from the fetched wishlist.
    SetWishlistData(Wishlist),
    SetWishlistId(String),
    SetWishlistName(String),
}

pub fn reduce_form(state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::SetWishlistData(wishlist) => FormState {
            wishlist_id: wishlist.id,
            wishlist_name: wishlist.name,
        },
        FormEvent::SetWishlistId(id) => FormState {
            wishlist_id: id,
            ..state
        },
        FormEvent::SetWishlistName(name) => FormState {
            wishlist_name: name,
            ..state
        },
    }
}

/// Build the entity submitted by the form from its current field values.
pub fn wishlist_from_state(state: &FormState) -> Wishlist {
    Wishlist {
        id: state.wishlist_id.clone(),
        name: state.wishlist_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wishlist(id: &str, name: &str) -> Wishlist {
        Wishlist {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_loading_clears_data_and_error() {
        let state = ListState {
            data: Some(vec![wishlist("1", "Books")]),
            error_message: None,
            loading: false,
            pending_deletion: PendingDeletion::default(),
        };

        let state = reduce_list(state, ListEvent::SetLoading);
        assert_eq!(state.data, None);
        assert_eq!(state.error_message, None);
        assert!(state.loading);
    }

    #[test]
    fn test_success_stores_data_and_stops_loading() {
        let state = reduce_list(ListState::default(), ListEvent::SetLoading);
        let items = vec![wishlist("1", "Books"), wishlist("2", "Games")];

        let state = reduce_list(state, ListEvent::SetSuccess(items.clone()));
        assert_eq!(state.data, Some(items));
        assert_eq!(state.error_message, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_error_stores_message_and_clears_data() {
        let state = reduce_list(ListState::default(), ListEvent::SetLoading);

        let state = reduce_list(state, ListEvent::SetError("boom".to_string()));
        assert_eq!(state.data, None);
        assert_eq!(state.error_message, Some("boom".to_string()));
        assert!(!state.loading);
    }

    #[test]
    fn test_data_and_error_are_mutually_exclusive() {
        let mut state = ListState::default();
        let events = [
            ListEvent::SetLoading,
            ListEvent::SetSuccess(vec![wishlist("1", "Books")]),
            ListEvent::SetError("boom".to_string()),
            ListEvent::SetSuccess(vec![]),
            ListEvent::SetLoading,
        ];
        for event in events {
            state = reduce_list(state, event);
            assert!(
                state.data.is_none() || state.error_message.is_none(),
                "data and error_message must never both be present"
            );
        }
    }

    #[test]
    fn test_deletion_pending_leaves_data_untouched() {
        let items = vec![wishlist("1", "Books")];
        let state = reduce_list(ListState::default(), ListEvent::SetSuccess(items.clone()));

        let state = reduce_list(state, ListEvent::SetDeletionPending(wishlist("1", "Books")));
        assert_eq!(state.data, Some(items));
        assert!(state.pending_deletion.is_dialog_visible);
        assert_eq!(
            state.pending_deletion.pending_wishlist,
            Some(wishlist("1", "Books"))
        );
    }

    #[test]
    fn test_second_deletion_pending_replaces_target() {
        let state = reduce_list(
            ListState::default(),
            ListEvent::SetDeletionPending(wishlist("1", "Books")),
        );
        let state = reduce_list(state, ListEvent::SetDeletionPending(wishlist("2", "Games")));

        assert!(state.pending_deletion.is_dialog_visible);
        assert_eq!(
            state.pending_deletion.pending_wishlist,
            Some(wishlist("2", "Games"))
        );
    }

    #[test]
    fn test_reset_deletion_pending_clears_overlay() {
        let state = reduce_list(
            ListState::default(),
            ListEvent::SetDeletionPending(wishlist("1", "Books")),
        );
        let state = reduce_list(state, ListEvent::ResetDeletionPending);

        assert!(!state.pending_deletion.is_dialog_visible);
        assert_eq!(state.pending_deletion.pending_wishlist, None);
    }

    #[test]
    fn test_dialog_visible_iff_target_present() {
        let mut state = ListState::default();
        let events = [
            ListEvent::SetDeletionPending(wishlist("1", "Books")),
            ListEvent::SetDeletionPending(wishlist("2", "Games")),
            ListEvent::ResetDeletionPending,
            ListEvent::ResetDeletionPending,
        ];
        for event in events {
            state = reduce_list(state, event);
            assert_eq!(
                state.pending_deletion.is_dialog_visible,
                state.pending_deletion.pending_wishlist.is_some()
            );
        }
    }

    #[test]
    fn test_refetch_with_unchanged_collection_is_idempotent() {
        let items = vec![wishlist("1", "Books")];
        let first = reduce_list(ListState::default(), ListEvent::SetSuccess(items.clone()));

        let second = reduce_list(
            reduce_list(first.clone(), ListEvent::SetLoading),
            ListEvent::SetSuccess(items),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_form_preload_populates_both_fields() {
        let state = reduce_form(
            FormState::default(),
            FormEvent::SetWishlistData(wishlist("11", "Gadgets")),
        );
        assert_eq!(state.wishlist_id, "11");
        assert_eq!(state.wishlist_name, "Gadgets");
    }

    #[test]
    fn test_form_fields_replace_independently() {
        let state = reduce_form(
            FormState::default(),
            FormEvent::SetWishlistId("abc".to_string()),
        );
        let state = reduce_form(state, FormEvent::SetWishlistName("Test".to_string()));
        assert_eq!(state.wishlist_id, "abc");
        assert_eq!(state.wishlist_name, "Test");

        let state = reduce_form(state, FormEvent::SetWishlistName("Test 2".to_string()));
        assert_eq!(state.wishlist_id, "abc");
        assert_eq!(state.wishlist_name, "Test 2");
    }

    #[test]
    fn test_wishlist_from_state_uses_current_values() {
        let state = FormState {
            wishlist_id: "abc".to_string(),
            wishlist_name: "Test".to_string(),
        };
        assert_eq!(wishlist_from_state(&state), wishlist("abc", "Test"));
    }
}
