//! Test suite for the social media API
//!
//! Integration tests drive the full router in-process with `axum-test`;
//! property tests exercise hashing and token handling with `proptest`.

#![cfg(feature = "ssr")]

pub mod common;
pub mod integration;
pub mod property;
