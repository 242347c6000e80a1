//! Compile-time build metadata for the version flag.

/// Body of `themesync --version`; clap prefixes the binary name.
///
/// Commit and timestamp come from `build.rs`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("THEMESYNC_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("THEMESYNC_BUILD_TIMESTAMP")
);
