//! Layout Components
//!
//! Header, sidebar, and footer chrome around the routed content.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="navbar navbar-expand bg-dark navbar-dark fixed-top">
            <div class="d-flex align-items-center">
                <a
                    href="#/wishlists"
                    class="navbar-brand ms-2 me-1 my-0 p-1"
                    on:click=move |_| ctx.navigate(Route::WishlistList)
                >
                    "{amazing}"
                </a>

                <ul class="navbar-nav ms-1 me-auto my-0 p-1">
                    <li class="nav-item">
                        <a
                            class="nav-link"
                            href="#/wishlists"
                            on:click=move |_| ctx.navigate(Route::WishlistList)
                        >
                            "Home"
                        </a>
                    </li>
                </ul>
            </div>
        </nav>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar-container p-0 pt-3 pb-3 bg-light text-dark">
            <ul class="nav nav-pills d-grid gap-1">
                <SidebarItem label="Wishlists" target=Route::WishlistList />
            </ul>
        </div>
    }
}

#[component]
fn SidebarItem(#[prop(into)] label: String, target: Route) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (hovered, set_hovered) = signal(false);
    let href = target.to_hash();

    view! {
        <li
            class="nav-item"
            class:sidebar-item-hovered=move || hovered.get()
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <a
                href=href
                class="nav-link fw-bold text-decoration-none"
                on:click=move |_| ctx.navigate(target.clone())
            >
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <nav class="navbar navbar-expand bg-dark navbar-dark justify-content-center fixed-bottom">
            <ul class="navbar-nav">
                <li>"About"</li>
            </ul>
        </nav>
    }
}
