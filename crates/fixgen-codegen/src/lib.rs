//! Code emitters and CLI plumbing for the `fixgen` binary, split into a
//! library so integration tests can exercise emission without going through
//! `main`.

pub mod cli;
pub mod emit;
pub mod error;
pub mod identifiers;
pub mod template;
