use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    domain::{Notice, NoticeKind},
    util::generate_id,
};

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_TOASTS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: NoticeKind,
    pub text: String,
}

impl From<Notice> for ToastMessage {
    fn from(notice: Notice) -> Self {
        Self {
            id: generate_id("toast"),
            kind: notice.kind,
            text: notice.text,
        }
    }
}

pub fn push_toast(mut toasts: Signal<Vec<ToastMessage>>, notice: Notice) {
    toasts.with_mut(|entries| {
        if entries.len() >= MAX_TOASTS {
            entries.remove(0);
        }
        entries.push(ToastMessage::from(notice));
    });
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let messages = toasts();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toast-stack",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts: toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts;
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let (class, icon) = match message.kind {
        NoticeKind::Success => ("toast toast-success", "✅"),
        NoticeKind::Warning => ("toast toast-warning", "⚠️"),
        NoticeKind::Error => ("toast toast-error", "⛔"),
    };
    let dismiss_id = message.id.clone();

    rsx! {
        li { class: "{class}",
            span { class: "toast-icon", "{icon}" }
            p { class: "toast-text", "{message.text}" }
            button {
                class: "toast-dismiss",
                onclick: move |_| {
                    let mut toasts = toasts;
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "閉じる"
            }
        }
    }
}
