//! HTTP request handlers.
//!
//! Handlers convert requests into service calls and service results into DTOs or
//! redirects. Public pages return the view data as JSON; admin actions follow the
//! form flow of the admin panel and answer with a 303 redirect.

pub mod admin;
pub mod auth;
pub mod home;
pub mod member;
pub mod notice;
pub mod research;

#[cfg(test)]
mod test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/admin";
