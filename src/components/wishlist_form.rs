//! Wishlist Form Component
//!
//! Create/edit form over the two wishlist fields. Edit mode preloads the
//! entity by id and keeps the id field disabled; create mode starts empty.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{HttpWishlistApi, WishlistApi};
use crate::context::AppContext;
use crate::state::{reduce_form, wishlist_from_state, FormEvent, FormState};

/// Which operation the form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Edit the wishlist with this id.
    Edit(String),
}

#[component]
pub fn WishlistForm(mode: FormMode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = HttpWishlistApi::new();

    let (state, set_state) = signal(FormState::default());
    let dispatch = move |event: FormEvent| {
        set_state.update(|s| *s = reduce_form(std::mem::take(s), event));
    };

    let is_edit = matches!(mode, FormMode::Edit(_));

    // Edit mode: preload both fields from the backend on mount.
    let preload_api = api.clone();
    let preload_mode = mode.clone();
    Effect::new(move |_| {
        let FormMode::Edit(id) = preload_mode.clone() else {
            return;
        };
        let api = preload_api.clone();
        spawn_local(async move {
            match api.get_one(&id).await {
                Ok(wishlist) => dispatch(FormEvent::SetWishlistData(wishlist)),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WISHLIST] load of {} failed: {}", id, err).into(),
                    );
                    ctx.push_error(format!("Could not load wishlist {}: {}", id, err));
                }
            }
        });
    });

    // No redirect on success; the fields stay as submitted so the user can
    // keep editing or retry after a failure.
    let submit_api = api.clone();
    let submit_mode = mode.clone();
    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let wishlist = wishlist_from_state(&state.get_untracked());
        let api = submit_api.clone();
        let mode = submit_mode.clone();
        spawn_local(async move {
            let result = match mode {
                FormMode::Create => api.create(&wishlist).await,
                FormMode::Edit(_) => api.update(&wishlist).await,
            };
            match result {
                Ok(()) => {
                    web_sys::console::log_1(
                        &format!("[WISHLIST] saved wishlist {}", wishlist.id).into(),
                    );
                    ctx.push_success(format!("Wishlist \"{}\" saved", wishlist.name));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[WISHLIST] save of {} failed: {}", wishlist.id, err).into(),
                    );
                    ctx.push_error(format!(
                        "Could not save wishlist \"{}\": {}",
                        wishlist.name, err
                    ));
                }
            }
        });
    };

    view! {
        <form on:submit=handle_submit>
            <div class="mb-3">
                <label for="wishlist-form-id" class="form-label">
                    "Amazon Wishlist ID"
                </label>
                <input
                    id="wishlist-form-id"
                    type="text"
                    class="form-control"
                    disabled=is_edit
                    prop:value=move || state.with(|s| s.wishlist_id.clone())
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        dispatch(FormEvent::SetWishlistId(input.value()));
                    }
                />
            </div>
            <div class="mb-3">
                <label for="wishlist-form-name" class="form-label">
                    "Wishlist Name"
                </label>
                <input
                    id="wishlist-form-name"
                    type="text"
                    class="form-control"
                    prop:value=move || state.with(|s| s.wishlist_name.clone())
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        dispatch(FormEvent::SetWishlistName(input.value()));
                    }
                />
            </div>
            <button type="submit" class="btn btn-primary">
                "Submit"
            </button>
        </form>
    }
}
