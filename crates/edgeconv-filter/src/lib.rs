#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Weight tables of the shipped kernels.
pub mod kernels;

/// Filter identifiers and the kernel registry.
pub mod registry;

/// Filter dispatch operations.
mod ops;
pub use ops::*;

/// Apply filters to many images in parallel.
pub mod parallel;

/// Error types for the filter module.
pub mod error;

pub use crate::error::FilterError;
pub use crate::registry::{standard_registry, FilterKind, KernelRegistry};
