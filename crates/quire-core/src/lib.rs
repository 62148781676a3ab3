//! # Quire Core
//!
//! The domain layer of the Quire publishing service.
//! This crate contains the listing, validation and submission logic with zero
//! infrastructure dependencies: storage and rendering are reached through the
//! traits in [`ports`].

pub mod blog;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod validation;
pub mod view;

#[cfg(test)]
mod testing;

pub use blog::BlogService;
pub use error::{RenderError, RepoError};
