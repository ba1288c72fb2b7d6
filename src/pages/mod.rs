//! One module per routed screen. Each page is stateless between mounts:
//! read calls are issued on mount, writes on user action, and nothing
//! outlives navigation except the shared session.

pub mod edit;
pub mod gallery;
pub mod login;
pub mod register;
pub mod upload;
