//! Core traits defined in `invite-core` and implemented by other crates.

pub mod directory;

pub use directory::UserDirectory;
