//! Small building blocks shared by the list and search panes. Text passed in
//! is rendered as text, never as markup.

use crate::model::User;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported banner styles.
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a message banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "error-message",
        AlertKind::Info => "no-data",
    };

    view! { <div class=class role="alert">{message}</div> }
}

#[component]
pub fn Spinner(message: &'static str) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            {message}
        </div>
    }
}

/// One user as a card; the search result is the highlighted variant.
#[component]
pub fn UserCard(user: User, highlighted: bool) -> impl IntoView {
    let class = if highlighted {
        "user-card highlighted"
    } else {
        "user-card"
    };

    view! {
        <div class=class>
            <div class="user-id">{format!("ID: {}", user.id)}</div>
            <div class="user-info">
                <h3>{user.name}</h3>
                <p><strong>"Email:"</strong>{format!(" {}", user.email)}</p>
                <p><strong>"Age:"</strong>{format!(" {}", user.age)}</p>
            </div>
        </div>
    }
}
