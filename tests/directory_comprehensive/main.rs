//! Directory Comprehensive Test Suite
//!
//! End-to-end coverage of the public API: contact lifecycle, field
//! validation at the directory boundary, and the process-wide shared
//! instance.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test directory_comprehensive
//!
//! # Run lifecycle tests only
//! cargo test --test directory_comprehensive lifecycle::
//!
//! # Run with output
//! cargo test --test directory_comprehensive -- --nocapture
//! ```

mod common;

mod registry;
