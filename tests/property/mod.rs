//! Property-based tests

mod token_proptest;
