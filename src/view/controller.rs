//! Event handling for one page. Each handler mutates [`PageState`] under a
//! short lock, releases it for the network call, then settles the result with
//! the ticket it was issued.
//!
//! Every handler returns the page its own request produced: the view it
//! drove shows its own outcome, the other view its last settled state. The
//! stored state still only accepts the newest response per view.

use super::{
    not_found_message, PageState, ViewSlot, ViewState, LIST_ERROR_MESSAGE, SEARCH_ERROR_MESSAGE,
};
use crate::{client::ApiClient, model::UserId};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

/// User-initiated events the page reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    PageLoaded,
    InputChanged(String),
    SearchClicked,
    /// A key pressed in the search box; only `Enter` triggers a search.
    KeyPressed(String),
    ClearClicked,
    RefreshClicked,
}

#[derive(Clone, Debug)]
pub struct Controller {
    client: ApiClient,
    page: Arc<Mutex<PageState>>,
}

impl Controller {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            page: Arc::new(Mutex::new(PageState::default())),
        }
    }

    /// Copy of the stored page state, in-flight requests included.
    pub async fn snapshot(&self) -> PageState {
        self.page.lock().await.clone()
    }

    pub async fn dispatch(&self, event: UiEvent) -> PageState {
        match event {
            UiEvent::PageLoaded | UiEvent::RefreshClicked => self.load_all_users().await,
            UiEvent::InputChanged(input) => self.set_input(input).await,
            UiEvent::SearchClicked => self.search_user_by_id().await,
            UiEvent::KeyPressed(key) if key == "Enter" => self.search_user_by_id().await,
            UiEvent::KeyPressed(_) => self.page.lock().await.at_rest(),
            UiEvent::ClearClicked => self.clear_search().await,
        }
    }

    pub async fn set_input(&self, input: String) -> PageState {
        let mut page = self.page.lock().await;
        page.input = input;
        page.at_rest()
    }

    /// Fetches the full list and replaces the list view.
    #[instrument(skip(self))]
    pub async fn load_all_users(&self) -> PageState {
        let ticket = {
            let mut page = self.page.lock().await;
            page.focus_input = false;
            page.list.begin()
        };

        let state = match self.client.list_users().await {
            Ok(users) => {
                info!(count = users.len(), "loaded users");
                ViewState::Loaded(users)
            }
            Err(err) => {
                error!("Failed to load users: {err}");
                ViewState::Error(LIST_ERROR_MESSAGE.to_string())
            }
        };

        let mut page = self.page.lock().await;
        if !page.list.settle(ticket, state.clone()) {
            debug!("dropping stale user list response");
        }

        let mut shown = page.at_rest();
        shown.focus_input = false;
        shown.list = ViewSlot::showing(state);
        shown
    }

    /// Re-runs the list flow exactly as page load does.
    pub async fn refresh(&self) -> PageState {
        self.load_all_users().await
    }

    /// Validates the current input and looks the user up.
    ///
    /// Invalid input never reaches the network.
    pub async fn search_user_by_id(&self) -> PageState {
        self.run_search(None).await
    }

    /// Sets the input and searches in one step, the way a form submission does.
    pub async fn search(&self, input: &str) -> PageState {
        self.run_search(Some(input)).await
    }

    #[instrument(skip(self))]
    async fn run_search(&self, input: Option<&str>) -> PageState {
        let (ticket, id, input) = {
            let mut page = self.page.lock().await;
            if let Some(input) = input {
                page.input = input.to_string();
            }
            page.focus_input = false;

            match UserId::parse(&page.input) {
                Ok(id) => (page.search.begin(), id, page.input.clone()),
                Err(err) => {
                    debug!("rejected search input: {err}");
                    page.search.replace(ViewState::Error(err.message().to_string()));
                    return page.at_rest();
                }
            }
        };

        let state = match self.client.get_user(&id).await {
            Ok(user) => ViewState::Loaded(user),
            Err(err) if err.is_not_found() => {
                info!(%id, "user not found");
                ViewState::Error(not_found_message(&id))
            }
            Err(err) => {
                error!(%id, "Search failed: {err}");
                ViewState::Error(SEARCH_ERROR_MESSAGE.to_string())
            }
        };

        let mut page = self.page.lock().await;
        if !page.search.settle(ticket, state.clone()) {
            debug!(%id, "dropping stale search response");
        }

        let mut shown = page.at_rest();
        shown.input = input;
        shown.focus_input = false;
        shown.search = ViewSlot::showing(state);
        shown
    }

    /// Empties the input and result pane and puts focus back on the input.
    pub async fn clear_search(&self) -> PageState {
        let mut page = self.page.lock().await;
        page.input.clear();
        page.search.replace(ViewState::Idle);
        page.focus_input = true;
        page.at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::model::InputError;

    /// A client pointed at a closed port; any request would fail with a network error.
    fn offline_controller() -> anyhow::Result<Controller> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        drop(listener);

        let client = ApiClient::new(&ClientConfig {
            api_base_url: format!("http://127.0.0.1:{port}/api"),
            ..ClientConfig::default()
        })?;
        Ok(Controller::new(client))
    }

    #[tokio::test]
    async fn empty_input_shows_inline_message() -> anyhow::Result<()> {
        let controller = offline_controller()?;
        controller.search("   ").await;

        let page = controller.snapshot().await;
        assert_eq!(
            page.search.state(),
            &ViewState::Error(InputError::Empty.message().to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_shows_inline_message() -> anyhow::Result<()> {
        let controller = offline_controller()?;
        for input in ["-4", "abc", "0", "2.5"] {
            controller.search(input).await;
            let page = controller.snapshot().await;
            assert_eq!(
                page.search.state(),
                &ViewState::Error(InputError::NotPositive.message().to_string()),
                "input {input:?}"
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_backend_shows_generic_messages() -> anyhow::Result<()> {
        let controller = offline_controller()?;

        controller.dispatch(UiEvent::PageLoaded).await;
        controller.search("5").await;

        let page = controller.snapshot().await;
        assert!(!page.list.state().is_loading());
        assert_eq!(page.list.state().error(), Some(LIST_ERROR_MESSAGE));
        assert_eq!(page.search.state().error(), Some(SEARCH_ERROR_MESSAGE));
        Ok(())
    }

    #[tokio::test]
    async fn only_enter_key_triggers_search() -> anyhow::Result<()> {
        let controller = offline_controller()?;
        controller
            .dispatch(UiEvent::InputChanged(String::new()))
            .await;

        controller.dispatch(UiEvent::KeyPressed("a".to_string())).await;
        assert_eq!(controller.snapshot().await.search.state(), &ViewState::Idle);

        controller
            .dispatch(UiEvent::KeyPressed("Enter".to_string()))
            .await;
        assert_eq!(
            controller.snapshot().await.search.state().error(),
            Some(InputError::Empty.message())
        );
        Ok(())
    }

    #[tokio::test]
    async fn returned_page_matches_stored_state_when_idle() -> anyhow::Result<()> {
        let controller = offline_controller()?;

        let shown = controller.search("abc").await;
        assert_eq!(shown.input, "abc");
        assert_eq!(
            shown.search.state(),
            controller.snapshot().await.search.state()
        );

        let shown = controller.load_all_users().await;
        assert_eq!(shown.list.state().error(), Some(LIST_ERROR_MESSAGE));
        assert_eq!(shown.search.state(), controller.snapshot().await.search.state());
        Ok(())
    }

    #[tokio::test]
    async fn clear_resets_input_result_and_focus() -> anyhow::Result<()> {
        let controller = offline_controller()?;
        controller.search("abc").await;
        controller.dispatch(UiEvent::ClearClicked).await;

        let page = controller.snapshot().await;
        assert_eq!(page.input, "");
        assert_eq!(page.search.state(), &ViewState::Idle);
        assert!(page.focus_input);
        Ok(())
    }
}
