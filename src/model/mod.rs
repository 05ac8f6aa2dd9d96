//! Data transfer objects returned by the HTTP API.
//!
//! These are the view models handed to the presentation layer. They carry no
//! database types and serialize to JSON.

pub mod api;
pub mod member;
pub mod notice;
pub mod page;
pub mod research;
