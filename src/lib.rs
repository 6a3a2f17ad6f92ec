//! docdex: offline documentation index cache and local file browser for
//! editor integrations.
//!
//! The host editor invokes operations through the [`boundary`] module; the
//! core resolves documentation indices cache-first ([`docs`]), persists them
//! on disk ([`cache`]), and materializes local directory trees ([`tree`]).

pub mod boundary;
pub mod cache;
pub mod docs;
pub mod error;
pub mod files;
pub mod service;
pub mod tree;

pub use error::{DocdexError, Result};
pub use service::DocdexService;
