//! small shared utilities

pub mod degrees;
