//! charcoal library crate.
//!
//! This module exposes the conversion pipeline for integration testing.

pub mod ascii;
pub mod capture;
pub mod cli;
pub mod color;
pub mod export;
pub mod loader;
