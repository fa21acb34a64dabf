//! Property-based tests
//!
//! Uses proptest to generate random prop sets and filters

mod store_proptest;
