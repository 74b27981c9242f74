//! Shared test helpers
//!
//! Each integration test target compiles this module independently, so not
//! every helper is used everywhere.
#![allow(dead_code)]

pub mod database;
pub mod fixtures;
