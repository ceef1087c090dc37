//! Server-side rendering of [`PageState`]. Nothing here touches the network or
//! the stored state; the same state always renders the same markup.

use super::{
    components::{Alert, AlertKind, Spinner, UserCard},
    PageState, ViewState, LOADING_USERS_MESSAGE, NO_USERS_MESSAGE, SEARCHING_MESSAGE,
};
use crate::model::User;
use leptos::{prelude::*, tachys::view::RenderHtml};

const STYLESHEET: &str = r"
body { font-family: sans-serif; margin: 2rem auto; max-width: 960px; color: #1f2937; }
.search { display: flex; gap: .5rem; margin-bottom: 1rem; }
.user-card { border: 1px solid #e5e7eb; border-radius: .5rem; padding: 1rem; margin: .5rem 0; }
.user-card.highlighted { border-color: #2563eb; background: #eff6ff; }
.user-id { font-weight: bold; color: #2563eb; }
.error-message { color: #b91c1c; }
.info-message, .loading, .no-data { color: #6b7280; }
";

/// The whole page: search form and result pane, then the user list.
#[component]
pub fn UserDirectoryPage(page: PageState) -> impl IntoView {
    let PageState {
        input,
        focus_input,
        list,
        search,
    } = page;

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <title>"User Directory"</title>
                <style>{STYLESHEET}</style>
            </head>
            <body>
                <h1>"User Directory"</h1>
                <section id="search">
                    <h2>"Search by ID"</h2>
                    <form class="search" action="/search" method="get">
                        <input
                            id="searchInput"
                            name="id"
                            type="text"
                            placeholder="User ID"
                            value=input
                            autofocus=focus_input
                        />
                        <button id="searchBtn" type="submit">"Search"</button>
                        <button id="clearBtn" type="submit" formaction="/clear">"Clear"</button>
                    </form>
                    <div id="searchResult">
                        <SearchResult state={search.state().clone()} />
                    </div>
                </section>
                <section id="users">
                    <h2>"All Users"</h2>
                    <form action="/refresh" method="get">
                        <button id="refreshBtn" type="submit">"Refresh"</button>
                    </form>
                    <UserList state={list.state().clone()} />
                </section>
            </body>
        </html>
    }
}

/// Loading indicator, error banner and list pane. The list pane is hidden
/// while loading or erroring.
#[component]
pub fn UserList(state: ViewState<Vec<User>>) -> impl IntoView {
    let loading = state.is_loading();
    let list_hidden = matches!(state, ViewState::Loading | ViewState::Error(_));
    let (error, users) = match state {
        ViewState::Loaded(users) => (None, Some(users)),
        ViewState::Error(message) => (Some(message), None),
        ViewState::Idle | ViewState::Loading => (None, None),
    };
    let error_hidden = error.is_none();

    view! {
        <div id="loadingMessage" hidden={!loading}>
            <Spinner message=LOADING_USERS_MESSAGE />
        </div>
        <div id="errorMessage" hidden=error_hidden>
            {error.map(|message| view! { <Alert kind=AlertKind::Error message=message /> })}
        </div>
        <div id="usersList" hidden=list_hidden>
            {users.map(|users| view! { <UserCards users=users /> })}
        </div>
    }
}

/// One card per user, or the placeholder for an empty collection.
#[component]
pub fn UserCards(users: Vec<User>) -> impl IntoView {
    if users.is_empty() {
        return view! { <Alert kind=AlertKind::Info message={NO_USERS_MESSAGE.to_string()} /> }
            .into_any();
    }

    users
        .into_iter()
        .map(|user| view! { <UserCard user=user highlighted=false /> })
        .collect_view()
        .into_any()
}

/// The search pane: empty, in progress, highlighted card or message.
#[component]
pub fn SearchResult(state: ViewState<User>) -> impl IntoView {
    match state {
        ViewState::Idle => ().into_any(),
        ViewState::Loading => view! { <Spinner message=SEARCHING_MESSAGE /> }.into_any(),
        ViewState::Loaded(user) => view! { <UserCard user=user highlighted=true /> }.into_any(),
        ViewState::Error(message) => {
            view! { <Alert kind=AlertKind::Error message=message /> }.into_any()
        }
    }
}

fn render_html<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
    Owner::new().with(|| view().to_html())
}

/// Renders the whole page as an HTML document.
#[must_use]
pub fn render_page(page: &PageState) -> String {
    let page = page.clone();
    let body = render_html(move || view! { <UserDirectoryPage page=page /> });
    format!("<!DOCTYPE html>{body}")
}

#[must_use]
pub fn render_list(state: &ViewState<Vec<User>>) -> String {
    let state = state.clone();
    render_html(move || view! { <UserList state=state /> })
}

#[must_use]
pub fn render_users(users: &[User]) -> String {
    let users = users.to_vec();
    render_html(move || view! { <UserCards users=users /> })
}

#[must_use]
pub fn render_user_card(user: &User, highlighted: bool) -> String {
    let user = user.clone();
    render_html(move || view! { <UserCard user=user highlighted=highlighted /> })
}

#[must_use]
pub fn render_search_result(state: &ViewState<User>) -> String {
    let state = state.clone();
    render_html(move || view! { <SearchResult state=state /> })
}
