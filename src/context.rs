//! Application Context
//!
//! Shared capabilities provided via the Leptos Context API: navigation
//! between logical routes and the toast notification queue.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::route::Route;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 4000;

/// Toast category, shown in the toast header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastCategory {
    Success,
    Error,
}

impl ToastCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ToastCategory::Success => "Success",
            ToastCategory::Error => "Error",
        }
    }
}

/// A queued toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub category: ToastCategory,
    pub text: String,
}

/// App-wide capabilities provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current logical route - read
    pub route: ReadSignal<Route>,
    /// Current logical route - write
    set_route: WriteSignal<Route>,
    /// Queued toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Queued toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    /// Monotonic toast id source
    next_toast_id: RwSignal<u32>,
}

impl AppContext {
    pub fn new(initial_route: Route) -> Self {
        let (route, set_route) = signal(initial_route);
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            route,
            set_route,
            toasts,
            set_toasts,
            next_toast_id: RwSignal::new(0),
        }
    }

    /// Request navigation to a logical route.
    ///
    /// Updates the route signal and mirrors it into `window.location.hash`
    /// so the address bar stays shareable.
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.to_hash());
        }
        self.set_route.set(route);
    }

    pub fn push_success(&self, text: impl Into<String>) {
        self.push_toast(ToastCategory::Success, text.into());
    }

    pub fn push_error(&self, text: impl Into<String>) {
        self.push_toast(ToastCategory::Error, text.into());
    }

    fn push_toast(&self, category: ToastCategory, text: String) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id.wrapping_add(1));

        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, category, text });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }

    /// Remove a toast before its timeout (the toast's close button).
    pub fn dismiss_toast(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}
