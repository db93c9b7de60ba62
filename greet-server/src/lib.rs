//! Library portion of `greet-server`: exposes the HTTP surface so
//! integration tests can drive the real router.

pub mod http;
