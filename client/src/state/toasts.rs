//! Transient notifications and the port components use to raise them.
//!
//! DESIGN
//! ======
//! Components receive a `Toasts` handle as a prop instead of reaching for a
//! global. Anything that only needs to raise notifications takes `&impl
//! Notify`, which keeps that logic testable with a recording notifier.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays up before it dismisses itself in the browser.
pub const TOAST_DURATION_MS: u64 = 5_000;

/// Visual weight of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A notification to be shown, before it is assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self { title: "Success".to_owned(), description: description.into(), variant: ToastVariant::Default }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self { title: "Error".to_owned(), description: description.into(), variant: ToastVariant::Destructive }
    }

    pub fn validation(description: impl Into<String>) -> Self {
        Self {
            title: "Validation Error".to_owned(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Anything that can surface a notification to the user.
pub trait Notify {
    fn notify(&self, notice: Notice);
}

/// Reactive handle to the page's toast list.
#[derive(Clone, Copy, Debug)]
pub struct Toasts(RwSignal<ToastState>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(ToastState::default()))
    }

    pub fn state(self) -> RwSignal<ToastState> {
        self.0
    }

    pub fn dismiss(self, id: u64) {
        self.0.update(|s| s.dismiss(id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for Toasts {
    fn notify(&self, notice: Notice) {
        let mut id = 0;
        self.0.update(|s| id = s.push(notice));

        #[cfg(feature = "hydrate")]
        {
            let toasts = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
                toasts.dismiss(id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
