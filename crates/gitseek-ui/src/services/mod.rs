//! Browser-backed implementations of the core seams.

pub(crate) mod github;
pub(crate) mod storage;
