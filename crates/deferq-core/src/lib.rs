#![forbid(unsafe_code)]
//! deferq-core: error taxonomy and canonical `Result` shared by the operator
//! crates.
//!
//! Deliberately tiny: the operators themselves live in `deferq-operators`;
//! this crate only carries the failure surface so that downstream layers can
//! depend on it without pulling in the adapters.

pub mod error;
pub mod prelude;

pub use error::{Error, Result};
