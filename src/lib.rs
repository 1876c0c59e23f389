//! A notepad that mirrors one text field and two display preferences (dark
//! mode and a background tint) into a small key-value store.
//!
//! [`store::KeyValueStore`] is the storage contract, backed by SQLite in
//! [`db::SqliteStore`] and degrading to memory through
//! [`store::FallbackStore`]. [`notepad::Notepad`] applies the editing policy on
//! top of any store, which keeps the terminal front end in `main.rs` thin.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod notepad;
pub mod store;
pub mod theme;
