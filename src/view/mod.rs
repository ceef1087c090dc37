//! Page state, rendering and the controller that drives both.
//!
//! The page has two independent views: the full user list and the search
//! result. Each view is a [`ViewSlot`] holding a [`ViewState`] and its own
//! generation counter; the views never share loading or error indicators.

mod components;
mod controller;
mod render;
mod state;

pub use controller::{Controller, UiEvent};
pub use components::{Alert, AlertKind, Spinner, UserCard};
pub use render::{
    render_list, render_page, render_search_result, render_user_card, render_users, SearchResult,
    UserCards, UserDirectoryPage, UserList,
};
pub use state::{Ticket, ViewSlot, ViewState};

use crate::model::{User, UserId};
use serde::Serialize;

pub const LIST_ERROR_MESSAGE: &str =
    "Failed to load users. Please check if the backend server is running.";
pub const SEARCH_ERROR_MESSAGE: &str =
    "Search failed. Please check if the backend server is running.";
pub const NO_USERS_MESSAGE: &str = "No users found";
pub const LOADING_USERS_MESSAGE: &str = "Loading users...";
pub const SEARCHING_MESSAGE: &str = "Searching...";

#[must_use]
pub fn not_found_message(id: &UserId) -> String {
    format!("User with ID {id} not found")
}

/// Everything the page renders from.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PageState {
    /// Current text of the search box.
    pub input: String,
    /// Set by clear so the next render puts the cursor back in the search box.
    pub focus_input: bool,
    pub list: ViewSlot<Vec<User>>,
    pub search: ViewSlot<User>,
}

impl PageState {
    /// Copy fit for a finished page: views with a request in flight show
    /// their last settled state instead of a loading indicator.
    #[must_use]
    pub fn at_rest(&self) -> Self {
        Self {
            input: self.input.clone(),
            focus_input: self.focus_input,
            list: self.list.at_rest(),
            search: self.search.at_rest(),
        }
    }
}
