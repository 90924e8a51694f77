use dioxus::prelude::*;

use crate::client::store::toast::{ToastKind, Toaster};

/// Stack of active toasts in the bottom right corner.
#[component]
pub fn ToastRegion() -> Element {
    let mut toaster = use_context::<Toaster>();

    rsx! {
        div {
            class: "toast toast-end z-50",
            for toast in toaster.toasts() {
                {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "alert alert-success",
                        ToastKind::Error => "alert alert-error",
                    };
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{class} cursor-pointer",
                            onclick: move |_| toaster.dismiss(id),
                            span { "{toast.message}" }
                        }
                    }
                }
            }
        }
    }
}
