use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue provided at the app root.
///
/// Every toast removes itself after `TOAST_TIMEOUT_MS`.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.read();
        *self.next_id.write() = id.wrapping_add(1);
        self.toasts.write().push(Toast { id, kind, message });

        // The component raising a toast may unmount right after, e.g. on navigation
        #[cfg(any(feature = "web", test))]
        {
            let mut toaster = *self;
            dioxus::core::spawn_forever(async move {
                toast_delay().await;
                toaster.dismiss(id);
            });
        }
    }
}

#[cfg(all(feature = "web", not(test)))]
async fn toast_delay() {
    gloo_timers::future::TimeoutFuture::new(crate::client::constant::TOAST_TIMEOUT_MS).await;
}

#[cfg(test)]
async fn toast_delay() {
    let millis = u64::from(crate::client::constant::TOAST_TIMEOUT_MS);
    tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::client::component::ToastRegion;

    #[component]
    fn LoginForm(show: Signal<bool>) -> Element {
        let mut toaster = use_context::<Toaster>();
        let mut show = show;

        use_future(move || async move {
            toaster.success("Welcome back");
            // Leave the page like a successful login does
            show.set(false);
        });

        rsx! { p { "login form" } }
    }

    #[component]
    fn ToastHost() -> Element {
        use_context_provider(Toaster::new);
        let show = use_signal(|| true);

        rsx! {
            if show() {
                LoginForm { show }
            }
            ToastRegion {}
        }
    }

    /// Tests that a toast raised right before its component unmounts is shown and
    /// still dismissed after the timeout.
    #[tokio::test(start_paused = true)]
    async fn toast_outlives_raising_component() {
        let mut dom = VirtualDom::new(ToastHost);
        dom.rebuild_in_place();

        dom.wait_for_work().await;
        dom.render_immediate_to_vec();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Welcome back"));
        assert!(!html.contains("login form"));

        let fired = tokio::time::timeout(Duration::from_secs(10), dom.wait_for_work()).await;
        assert!(fired.is_ok(), "dismiss timer was dropped with the component");
        dom.render_immediate_to_vec();

        assert!(!dioxus_ssr::render(&dom).contains("Welcome back"));
    }
}
