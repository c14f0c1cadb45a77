//! Client and terminal view for a section scheduling service.
//!
//! Fetches a course, its sections, and the viewer's enrollment status from
//! the scheduler API, groups sections by weekday, and supports enrolling in
//! a section. State is always the latest fetched snapshot; any change goes
//! through a round trip and a full re-fetch.

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod view;
