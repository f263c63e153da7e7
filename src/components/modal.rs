//! Modal Dialog Component
//!
//! Generic confirmation/notification modal with a fixed button vocabulary.
//! The dialog holds no state of its own; every interaction is reported
//! through the `on_click` callback.

use leptos::prelude::*;

/// The buttons a dialog can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Yes,
    No,
    Ok,
    Cancel,
}

impl DialogButton {
    pub fn label(&self) -> &'static str {
        match self {
            DialogButton::Yes => "Yes",
            DialogButton::No => "No",
            DialogButton::Ok => "OK",
            DialogButton::Cancel => "Cancel",
        }
    }
}

/// What the user chose to close the dialog with.
///
/// The close affordance is deliberately not a button value, so callers can
/// tell "closed without choice" apart from every button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Button(DialogButton),
    Closed,
}

/// Generic modal dialog
///
/// Renders nothing while `show` is false. Each requested button becomes one
/// actionable control; the optional close affordance reports
/// [`DialogChoice::Closed`].
#[component]
pub fn ModalDialog(
    #[prop(into)] show: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] text: Signal<String>,
    #[prop(default = true)] show_close_button: bool,
    buttons_displayed: Vec<DialogButton>,
    #[prop(into)] on_click: Callback<DialogChoice>,
) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <div class="modal-dialog" role="dialog">
                    <div class="modal-header">
                        <h5 class="modal-title">{title.clone()}</h5>
                        <Show when=move || show_close_button>
                            <button
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| on_click.run(DialogChoice::Closed)
                            >
                                "×"
                            </button>
                        </Show>
                    </div>
                    <div class="modal-body">
                        <p>{move || text.get()}</p>
                    </div>
                    <div class="modal-footer">
                        {buttons_displayed.iter().copied().map(|button| view! {
                            <button
                                class="btn btn-primary"
                                on:click=move |_| on_click.run(DialogChoice::Button(button))
                            >
                                {button.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_labels() {
        assert_eq!(DialogButton::Yes.label(), "Yes");
        assert_eq!(DialogButton::No.label(), "No");
        assert_eq!(DialogButton::Ok.label(), "OK");
        assert_eq!(DialogButton::Cancel.label(), "Cancel");
    }

    #[test]
    fn test_closed_is_distinct_from_every_button() {
        for button in [
            DialogButton::Yes,
            DialogButton::No,
            DialogButton::Ok,
            DialogButton::Cancel,
        ] {
            assert_ne!(DialogChoice::Closed, DialogChoice::Button(button));
        }
    }
}
