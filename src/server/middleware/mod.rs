//! Session handling and request authorization.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
