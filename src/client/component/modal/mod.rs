pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog toggled by `show`. Escape & backdrop clicks close it unless `prevent_close`.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    #[props(default = false)] prevent_close: bool,
    /// Widens the box for larger forms
    #[props(default = false)]
    wide: bool,
    children: Element,
) -> Element {
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let width = if wide { "max-w-3xl" } else { "max-w-lg" };

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape && !prevent_close {
                    show.set(false);
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 {width} max-h-[90vh]",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| show.set(false),
                            "✕"
                        }
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| {
                    if !prevent_close {
                        show.set(false);
                    }
                },
            }
        }
    )
}
