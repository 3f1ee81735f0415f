//! graph loading utilities

pub mod csv;
