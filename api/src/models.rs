//! API target paths, relative to the configured base URL.

/// Library collections endpoint root
pub const LIBRARIES: &str = "biblib/libraries";
