//! Wishlist List Component
//!
//! The list view: fetches the collection on mount, renders it as a table,
//! and drives the delete-with-confirmation flow. All transitions go through
//! the pure reducer in `crate::state`; this module owns the side effects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, HttpWishlistApi, WishlistApi};
use crate::components::modal::{DialogButton, DialogChoice, ModalDialog};
use crate::components::wishlist_table::WishlistTable;
use crate::context::AppContext;
use crate::models::Wishlist;
use crate::route::Route;
use crate::state::{reduce_list, ListEvent, ListState};

/// Fetch the collection and fold the outcome into a state event.
pub(crate) async fn fetch_wishlists<A: WishlistApi>(api: &A) -> ListEvent {
    match api.list_all().await {
        Ok(items) => ListEvent::SetSuccess(items),
        Err(err) => ListEvent::SetError(err.to_string()),
    }
}

/// Confirmed delete: exactly one delete call and, once it resolves, the full
/// fetch sequence again. A failed delete aborts before the re-fetch so the
/// last fetched data stays on screen.
pub(crate) async fn run_confirmed_delete<A, D>(
    api: &A,
    id: &str,
    dispatch: D,
) -> Result<(), ApiError>
where
    A: WishlistApi,
    D: Fn(ListEvent),
{
    api.delete(id).await?;
    dispatch(ListEvent::SetLoading);
    dispatch(fetch_wishlists(api).await);
    Ok(())
}

pub(crate) fn delete_confirmation_text(wishlist: &Wishlist) -> String {
    format!(
        "Are you sure you want to delete the wishlist \"{}\" (ID = {})?",
        wishlist.name, wishlist.id
    )
}

#[component]
pub fn WishlistList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = HttpWishlistApi::new();

    let (state, set_state) = signal(ListState::default());
    let dispatch = move |event: ListEvent| {
        set_state.update(|s| *s = reduce_list(std::mem::take(s), event));
    };

    // Initial fetch on mount.
    let fetch_api = api.clone();
    Effect::new(move |_| {
        dispatch(ListEvent::SetLoading);
        let api = fetch_api.clone();
        spawn_local(async move {
            dispatch(fetch_wishlists(&api).await);
        });
    });

    let on_create_clicked = move |_| ctx.navigate(Route::WishlistCreate);
    let on_edit_wishlist =
        Callback::new(move |wishlist: Wishlist| ctx.navigate(Route::edit_for(&wishlist)));
    let on_delete_wishlist =
        Callback::new(move |wishlist: Wishlist| dispatch(ListEvent::SetDeletionPending(wishlist)));

    // The reset below clears the pending wishlist, so it has to be taken out
    // first, and only when the user actually confirmed.
    let delete_api = api.clone();
    let on_confirmation_closed = Callback::new(move |delete_confirmed: bool| {
        let pending = state.with_untracked(|s| s.pending_deletion.pending_wishlist.clone());
        dispatch(ListEvent::ResetDeletionPending);

        let Some(wishlist) = pending else { return };
        if !delete_confirmed {
            return;
        }

        let api = delete_api.clone();
        spawn_local(async move {
            if let Err(err) = run_confirmed_delete(&api, &wishlist.id, dispatch).await {
                web_sys::console::error_1(
                    &format!("[WISHLIST] delete of {} failed: {}", wishlist.id, err).into(),
                );
                ctx.push_error(format!(
                    "Could not delete wishlist \"{}\": {}",
                    wishlist.name, err
                ));
            }
        });
    });

    let dialog_visible =
        Signal::derive(move || state.with(|s| s.pending_deletion.is_dialog_visible));
    let pending_wishlist =
        Signal::derive(move || state.with(|s| s.pending_deletion.pending_wishlist.clone()));
    let table_data = Signal::derive(move || state.with(|s| s.data.clone().unwrap_or_default()));

    view! {
        <DeleteConfirmationDialog
            show=dialog_visible
            data=pending_wishlist
            on_close=on_confirmation_closed
        />

        <Show when=move || state.with(|s| s.loading)>
            <p class="loading-indicator">"Loading..."</p>
        </Show>

        {move || state.with(|s| s.error_message.clone()).map(|message| view! {
            <p class="error-message">{message}</p>
        })}

        <Show when=move || state.with(|s| s.data.is_some())>
            <WishlistTable
                data=table_data
                on_edit_clicked=on_edit_wishlist
                on_delete_clicked=on_delete_wishlist
            />
        </Show>

        <button class="btn btn-primary" on:click=on_create_clicked>
            "Add Wishlist"
        </button>
    }
}

/// Confirmation dialog for a pending deletion.
///
/// Reports back a single boolean: whether the user confirmed with "Yes".
#[component]
fn DeleteConfirmationDialog(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] data: Signal<Option<Wishlist>>,
    #[prop(into)] on_close: Callback<bool>,
) -> impl IntoView {
    let body_text = Signal::derive(move || {
        data.get()
            .map(|wishlist| delete_confirmation_text(&wishlist))
            .unwrap_or_default()
    });

    let handle_click = Callback::new(move |choice: DialogChoice| {
        on_close.run(choice == DialogChoice::Button(DialogButton::Yes));
    });

    view! {
        <ModalDialog
            show=show
            title="Confirmation"
            text=body_text
            show_close_button=false
            buttons_displayed=vec![DialogButton::Yes, DialogButton::No]
            on_click=handle_click
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn wishlist(id: &str, name: &str) -> Wishlist {
        Wishlist {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// Test double recording every call against the remote client.
    struct RecordingApi {
        list_response: Result<Vec<Wishlist>, ApiError>,
        delete_response: Result<(), ApiError>,
        list_calls: RefCell<u32>,
        deleted_ids: RefCell<Vec<String>>,
    }

    impl RecordingApi {
        fn new(list_response: Result<Vec<Wishlist>, ApiError>) -> Self {
            Self {
                list_response,
                delete_response: Ok(()),
                list_calls: RefCell::new(0),
                deleted_ids: RefCell::new(Vec::new()),
            }
        }
    }

    impl WishlistApi for RecordingApi {
        async fn list_all(&self) -> Result<Vec<Wishlist>, ApiError> {
            *self.list_calls.borrow_mut() += 1;
            self.list_response.clone()
        }

        async fn get_one(&self, _id: &str) -> Result<Wishlist, ApiError> {
            unimplemented!("not exercised by the list view")
        }

        async fn create(&self, _wishlist: &Wishlist) -> Result<(), ApiError> {
            unimplemented!("not exercised by the list view")
        }

        async fn update(&self, _wishlist: &Wishlist) -> Result<(), ApiError> {
            unimplemented!("not exercised by the list view")
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.deleted_ids.borrow_mut().push(id.to_string());
            self.delete_response.clone()
        }
    }

    #[test]
    fn test_fetch_success_becomes_set_success() {
        let items = vec![wishlist("1", "Books")];
        let api = RecordingApi::new(Ok(items.clone()));

        let event = block_on(fetch_wishlists(&api));
        assert_eq!(event, ListEvent::SetSuccess(items));
        assert_eq!(*api.list_calls.borrow(), 1);
    }

    #[test]
    fn test_fetch_failure_becomes_set_error() {
        let api = RecordingApi::new(Err(ApiError::Server(500)));

        let event = block_on(fetch_wishlists(&api));
        assert_eq!(
            event,
            ListEvent::SetError("server responded with status 500".to_string())
        );
    }

    #[test]
    fn test_confirmed_delete_issues_one_delete_then_one_refetch() {
        let api = RecordingApi::new(Ok(vec![]));
        let events = RefCell::new(Vec::new());

        let result = block_on(run_confirmed_delete(&api, "1", |event| {
            events.borrow_mut().push(event)
        }));

        assert!(result.is_ok());
        assert_eq!(*api.deleted_ids.borrow(), vec!["1".to_string()]);
        assert_eq!(*api.list_calls.borrow(), 1);
        assert_eq!(
            *events.borrow(),
            vec![ListEvent::SetLoading, ListEvent::SetSuccess(vec![])]
        );
    }

    #[test]
    fn test_failed_delete_skips_the_refetch() {
        let mut api = RecordingApi::new(Ok(vec![]));
        api.delete_response = Err(ApiError::NotFound);
        let events = RefCell::new(Vec::new());

        let result = block_on(run_confirmed_delete(&api, "1", |event| {
            events.borrow_mut().push(event)
        }));

        assert_eq!(result, Err(ApiError::NotFound));
        assert_eq!(*api.list_calls.borrow(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_delete_confirmation_text() {
        assert_eq!(
            delete_confirmation_text(&wishlist("1", "Books")),
            r#"Are you sure you want to delete the wishlist "Books" (ID = 1)?"#
        );
    }
}
