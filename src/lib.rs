//! # Userdir (user directory frontend and JSON user API)
//!
//! `userdir` ships two cooperating HTTP services:
//!
//! - **frontend**: a server-rendered page that lists every user as a card and
//!   looks a single user up by ID. The page is driven by an explicit
//!   [`view::PageState`] value rendered by leptos components; every click,
//!   key press and page load is an HTTP request handled by the caller's own
//!   [`view::Controller`], found through a session cookie.
//! - **backend**: the JSON user API the frontend talks to, loaded once from a
//!   `users.json` file.
//!
//! ## Envelopes
//!
//! Successful responses are wrapped as `{ "success": true, "data": ... }`.
//! Failures are `{ "success": false, "message": ..., "code": ... }`; the
//! client classifies failures by `code` (then by HTTP status), never by the
//! wording of `message`.
//!
//! ## Overlapping requests
//!
//! Each view keeps a generation counter. A response is applied only if no
//! newer request (or clear) was started for the same view after it was sent.

pub mod backend;
pub mod cli;
pub mod client;
pub mod config;
pub mod frontend;
pub mod model;
pub mod server;
pub mod view;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
