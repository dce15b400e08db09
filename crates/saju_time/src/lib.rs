//! Zone-aware instants behind a swappable adapter contract.
//!
//! This crate provides:
//! - [`DateAdapter`], the capability contract over an opaque instant type
//!   that every higher layer is generic over
//! - [`ChronoTzBackend`], the single concrete backend (chrono + chrono-tz)
//! - A process-wide memoized [`backend`] accessor
//!
//! The core algorithms never name a concrete time library; swapping the
//! backend means providing another `DateAdapter` implementation and running
//! the shared contract suite in `tests/adapter_contract.rs` against it.

pub mod adapter;
pub mod backend;
pub mod error;

pub use adapter::DateAdapter;
pub use backend::{ChronoTzBackend, backend};
pub use error::TimeError;
