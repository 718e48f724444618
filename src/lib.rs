//! # pubsync
//!
//! Core library for the dev/pub scene version synchronization tool.
//!
//! Staged scene files live under the fixed convention
//! `<...>/<stage>/<wip>/scenes/<base>_v<NNNN>.<ext>`, with a private `dev`
//! tier, a shared `pub` tier, and a floating `v9999` "latest" alias kept
//! next to the numbered pub versions. This library parses that
//! convention, finds the highest version on disk, allocates the next one,
//! and distributes the currently open document to the dev/pub/alias
//! triple.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// File comparison and consistency checking
pub mod comparison;

/// Configuration file parsing and discovery
pub mod config;

/// Core error types for the pubsync library
pub mod error;

/// Notes log kept beside the published versions
pub mod notes;

/// Directory scanning for versioned scene files
pub mod scanner;

/// Scene path parsing under the naming convention
pub mod scene_path;

/// Save-and-distribute synchronization engine
pub mod sync;

/// Version tokens, comparison and allocation
pub mod version;
