//! Wishlist Manager App
//!
//! Root component: layout chrome around the routed content.

use leptos::prelude::*;

use crate::components::{
    Footer, FormMode, Header, Sidebar, ToastStack, WishlistForm, WishlistList,
};
use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn App() -> impl IntoView {
    let initial_route = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::WishlistList);

    let ctx = AppContext::new(initial_route);
    provide_context(ctx);

    view! {
        <div class="container-fluid">
            <Header />
            <Sidebar />

            <div id="content-container" class="content-container">
                {move || match ctx.route.get() {
                    Route::WishlistList => view! { <WishlistList /> }.into_any(),
                    Route::WishlistCreate => {
                        view! { <WishlistForm mode=FormMode::Create /> }.into_any()
                    }
                    Route::WishlistEdit(id) => {
                        view! { <WishlistForm mode=FormMode::Edit(id) /> }.into_any()
                    }
                }}
            </div>

            <ToastStack />
            <Footer />
        </div>
    }
}
