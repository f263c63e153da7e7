//! Wishlist Table Component
//!
//! Renders the fetched collection: one header row plus one row per wishlist,
//! each with edit and delete action buttons.

use leptos::prelude::*;

use crate::models::Wishlist;

#[component]
pub fn WishlistTable(
    #[prop(into)] data: Signal<Vec<Wishlist>>,
    #[prop(into)] on_edit_clicked: Callback<Wishlist>,
    #[prop(into)] on_delete_clicked: Callback<Wishlist>,
) -> impl IntoView {
    view! {
        <table class="table table-striped">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th class="text-end">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || data.get().into_iter().map(|item| view! {
                    <WishlistRow
                        data=item
                        on_edit_clicked=on_edit_clicked
                        on_delete_clicked=on_delete_clicked
                    />
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn WishlistRow(
    data: Wishlist,
    on_edit_clicked: Callback<Wishlist>,
    on_delete_clicked: Callback<Wishlist>,
) -> impl IntoView {
    let edit_target = data.clone();
    let delete_target = data.clone();

    view! {
        <tr>
            <td>{data.id}</td>
            <td>{data.name}</td>
            <td class="text-end">
                <button
                    class="btn btn-secondary me-1"
                    on:click=move |_| on_edit_clicked.run(edit_target.clone())
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_delete_clicked.run(delete_target.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
