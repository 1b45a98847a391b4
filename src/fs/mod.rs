//! Filesystem utilities for promptsmith.
//!
//! Prompt capture goes through an atomic write so a reader never observes a
//! half-written `system.md`.

pub mod atomic;

pub use atomic::atomic_write_file;
