//! Process-wide directory instance
//!
//! Gives every caller in the process the same [`Directory`] behind a
//! mutex, so separately written components observe one shared contact
//! list.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::directory::Directory;

// =============================================================================
// Global Directory
// =============================================================================
//
// One directory per process: callers that never hand each other a
// Directory value still see the same contacts. Created lazily on first
// access, empty.
//
// Uses parking_lot::Mutex instead of std::sync::Mutex to avoid cascading
// panics from mutex poisoning.

static PROCESS_DIRECTORY: Lazy<Mutex<Directory>> = Lazy::new(|| Mutex::new(Directory::new()));

/// The process-wide shared directory
///
/// The first call creates an empty directory; every later call returns
/// the same instance. Lock it to operate:
///
/// ```
/// use rolodex_directory::registry;
///
/// let mut directory = registry::global().lock();
/// let before = directory.len();
///
/// let id = directory
///     .add_contact("Fred", "Smith", "0123456789", "123 Test Lane")
///     .unwrap();
/// assert_eq!(directory.len(), before + 1);
///
/// directory.delete_contact(id.as_str()).unwrap();
/// assert_eq!(directory.len(), before);
/// ```
pub fn global() -> &'static Mutex<Directory> {
    &PROCESS_DIRECTORY
}
