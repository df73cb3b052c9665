//! # Dense Core Library
//!
//! Strided, row-major dense matrix storage for linear-algebra kernels.
//!
//! A [`General`] matrix is a `rows x cols` grid addressed as `data[i * stride + j]`.
//! Sub-blocks are taken with [`General::view`] without copying: the view shares the
//! parent's storage, and writes through either one are visible through both.
//!
//! Geometry is validated on demand with [`General::check`]. Bounds and shape
//! preconditions on the hot path are asserted only in diagnostic builds; see
//! [`debug_checks_enabled`].

// Declare modules
mod assert;
pub mod buffer;
pub mod error;
pub mod general;
pub mod traits;

// Re-export public types
pub use assert::debug_checks_enabled;
pub use buffer::SharedBuffer;
pub use error::DenseCoreError;
pub use general::General;
pub use traits::{Matrix, Scalar};
