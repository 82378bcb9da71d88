//! Integration tests

pub mod api;
