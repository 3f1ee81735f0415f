//! lib target
//!
//! Logging goes through the log facade; executables and tests install their
//! own env_logger (see the log_init_test helpers and src/bin/densest.rs).

pub mod io;

pub mod tools;

pub mod gens;

pub mod flow;

pub mod density;

pub mod error;

pub mod prelude;
