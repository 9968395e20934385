//! User-facing notifications
//!
//! Widgets report results through the [`Notifier`] trait instead of reaching
//! for a page-global helper. [`NotificationCenter`] is the implementation the
//! app provides via context; [`NotificationHost`] renders it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sink for success and error messages shown to the user
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Reactive list of live notifications, dismissed after `timeout_ms`
///
/// A timeout of zero keeps notifications until they are clicked away.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl NotificationCenter {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            timeout_ms,
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn push(&self, kind: NotificationKind, message: &str) {
        let Some(id) = self.next_id.try_update_value(|next| {
            let id = *next;
            *next += 1;
            id
        }) else {
            log::debug!("notification dropped, host is gone: {}", message);
            return;
        };
        let pushed = self.items.try_update(|items| {
            items.push(Notification {
                id,
                kind,
                message: message.to_string(),
            })
        });
        if pushed.is_none() || self.timeout_ms == 0 {
            return;
        }

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.timeout_ms).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // the host may already be gone when the timer fires
        let _ = self
            .items
            .try_update(|items| items.retain(|notification| notification.id != id));
    }
}

impl Notifier for NotificationCenter {
    fn success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}

/// Renders the notifications of the [`NotificationCenter`] from context
#[component]
pub fn NotificationHost() -> impl IntoView {
    let center =
        use_context::<NotificationCenter>().expect("NotificationCenter not provided in context");
    let items = center.items();

    view! {
        <div class="notifications">
            <For
                each=move || items.get()
                key=|notification| notification.id
                children=move |notification| {
                    let id = notification.id;
                    view! {
                        <div
                            class=notification.kind.css_class()
                            role="status"
                            on:click=move |_| center.dismiss(id)
                        >
                            {notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
