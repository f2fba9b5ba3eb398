//! Shared test utilities for the directory comprehensive suite.

#![allow(dead_code)]

use rolodex::{ContactId, Directory};
use std::sync::Once;

// ============================================================================
// Sample Data
// ============================================================================

pub const FIRST: &str = "FirstName";
pub const LAST: &str = "LastName";
pub const PHONE: &str = "0123456789";
pub const ADDRESS: &str = "123 Test Lane";

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber so directory events show under --nocapture.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Directory Builders
// ============================================================================

/// Add one contact with the sample field values.
pub fn add_sample(directory: &mut Directory) -> ContactId {
    directory
        .add_contact(FIRST, LAST, PHONE, ADDRESS)
        .expect("sample contact should validate")
}

/// Directory pre-populated with `count` sample contacts.
pub fn populated_directory(count: usize) -> Directory {
    let mut directory = Directory::new();
    for _ in 0..count {
        add_sample(&mut directory);
    }
    directory
}
