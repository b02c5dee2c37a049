//! Business logic use cases
//!
//! Each use case holds the ports it needs and converts collaborator failures
//! into a notification plus a typed error at its boundary.

pub mod links;
pub mod preview;
pub mod profile;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
