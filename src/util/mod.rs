//! Browser-facing helpers and client-side validation.

pub mod browser;
pub mod storage;
pub mod validate;
