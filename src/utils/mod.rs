//! Shared helpers for the sllist binaries.

pub mod bootstrap;
