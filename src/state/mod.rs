//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `gallery`, `edit`, `upload`) so
//! individual pages can depend on small focused models. Everything here is
//! plain data with pure transition methods; pages wrap the structs in
//! `RwSignal`s and the network layer stays out entirely.

pub mod edit;
pub mod gallery;
pub mod session;
pub mod upload;
