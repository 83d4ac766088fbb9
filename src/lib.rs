//! patch-react-dom - react-dom server exports patcher
//!
//! This crate provides a small maintenance utility that edits the `package.json`
//! manifest of an installed `react-dom` dependency, removing the `"bun"`
//! conditional export key under `exports["./server"]`.
//!
//! Bun's built-in `react-dom/server` does not export `renderToPipeableStream`,
//! which the SSR prerender step requires. Removing the `"bun"` condition makes
//! conditional export resolution fall through to the `"node"` entry point.
//!
//! ## Design Principles
//!
//! 1. **Single responsibility**: locate the manifest, delete one key, write it back
//! 2. **Lenient lookup**: a manifest without `exports` or `./server` is a no-op,
//!    not an error
//! 3. **Idempotent**: a second run performs no write and reports already-patched
//! 4. **Fail fast**: a missing or unparsable manifest aborts with a diagnostic

pub mod patch;
pub mod utils;

// Re-export the patcher surface
pub use patch::error::{PatchError, Result};
pub use patch::{default_manifest_path, patch_manifest, remove_bun_condition, PatchOutcome};
