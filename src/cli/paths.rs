//! Path resolution for the store.
//!
//! The database belongs to the shop-management application and lives next
//! to it: `<exe dir>/../database/app.db`. Resolving against the executable
//! keeps the target stable no matter where the tool is invoked from. The
//! tool never creates that directory; a missing parent surfaces as a
//! connection error.

use std::path::PathBuf;

/// Returns the default database path (`<exe dir>/../database/app.db`).
pub fn default_database() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    exe_dir.join("..").join("database").join("app.db")
}
