//! # srcview — annotated source rendering for a code browser
//!
//! Turns records fetched from a code-search query service into display-ready
//! structures: hyperlinked HTML for annotated source, line anchors, symbol
//! outlines, lazy directory trees and paginated search results. Every
//! component is a pure, synchronous transformation; fetching, routing and
//! templating belong to the caller.
//!
//! ## Architecture
//!
//! - **[`annotate`]** — Annotated markup → typed nodes → inline HTML fragment
//! - **[`lines`]** — Byte offset → line number, scroll target, gutter anchors
//! - **[`names`]** — Qualified-name shorteners for labels
//! - **[`listing`]** — Display names for classes, fields and methods
//! - **[`layout`]** — One-level directory tree rows and path breadcrumbs
//! - **[`search`]** — Rank windows and search result pages
//! - **[`complete`]** — Search-box completion entries
//! - **[`view`]** — The composed "view source" response
//! - **[`links`]** — Route URL builders with percent-escaping
//! - **[`model`]** — Upstream records (serde)
//! - **[`error`]** — Upstream status codes and the shared error type
//! - **[`config`]** — JSON configuration loading and validation

pub mod annotate;
pub mod complete;
pub mod config;
pub mod error;
pub mod layout;
pub mod lines;
pub mod links;
pub mod listing;
pub mod model;
pub mod names;
pub mod search;
pub mod view;

pub use error::{BrowseError, StatusCode, Upstream};
