//!
//! Utility functions
//!

pub mod btreemap;
