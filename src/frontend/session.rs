//! Per-visitor page state. Each browser gets its own [`Controller`], found
//! again on later requests through a session cookie.

use crate::{client::ApiClient, view::Controller};
use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::debug;
use ulid::Ulid;

pub const SESSION_COOKIE_NAME: &str = "userdir_session";

/// Oldest sessions are dropped beyond this many.
const MAX_SESSIONS: usize = 1024;

#[derive(Clone, Debug)]
pub struct Sessions {
    client: ApiClient,
    controllers: Arc<Mutex<BTreeMap<Ulid, Controller>>>,
}

/// The controller serving one request, and whether its cookie must be set.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: Ulid,
    pub controller: Controller,
    pub is_new: bool,
}

impl Sessions {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            controllers: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Finds the session named by the request cookie, or starts a new one when
    /// the cookie is missing, malformed or no longer known.
    pub async fn resolve(&self, headers: &HeaderMap) -> Session {
        let mut controllers = self.controllers.lock().await;

        if let Some(id) = extract_session_id(headers) {
            if let Some(controller) = controllers.get(&id) {
                return Session {
                    id,
                    controller: controller.clone(),
                    is_new: false,
                };
            }
        }

        // Ulids sort by creation time, so the first key is the oldest session.
        while controllers.len() >= MAX_SESSIONS {
            if let Some((evicted, _)) = controllers.pop_first() {
                debug!(%evicted, "evicting oldest session");
            }
        }

        let id = Ulid::new();
        let controller = Controller::new(self.client.clone());
        controllers.insert(id, controller.clone());
        debug!(%id, "started session");

        Session {
            id,
            controller,
            is_new: true,
        }
    }

    pub async fn count(&self) -> usize {
        self.controllers.lock().await.len()
    }
}

impl Session {
    /// `Set-Cookie` value for a session the browser does not know yet.
    ///
    /// # Errors
    /// Returns an error if the cookie cannot be encoded as a header value.
    pub fn cookie(&self) -> Result<Option<HeaderValue>, InvalidHeaderValue> {
        if !self.is_new {
            return Ok(None);
        }
        HeaderValue::from_str(&format!(
            "{SESSION_COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
            self.id
        ))
        .map(Some)
    }
}

fn extract_session_id(headers: &HeaderMap) -> Option<Ulid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key.trim() == SESSION_COOKIE_NAME).then_some(value.trim())
        })
        .and_then(|value| Ulid::from_string(value).ok())
}
