//! Patcher for react-dom's conditional server exports
//!
//! Resolves the dependency manifest, removes the `"bun"` condition from
//! `exports["./server"]` if present, and writes the document back with
//! 2-space indentation and a trailing newline.
//!
//! The lookup is deliberately lenient: a manifest without an `exports`
//! field, or without a `./server` entry, is treated as already patched
//! rather than an error. Only the presence of the `"bun"` key triggers
//! a write.

pub mod error;

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::debug;

pub use error::{PatchError, Result};

/// Location of the react-dom manifest, relative to the executable's directory
const MANIFEST_RELATIVE: &str = "../node_modules/react-dom/package.json";

/// Outcome of a patch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The `"bun"` condition was present and has been removed
    Patched,
    /// The manifest was already in the desired state; no write occurred
    AlreadyPatched,
}

impl PatchOutcome {
    /// Whether this run modified the manifest
    pub fn is_patched(&self) -> bool {
        matches!(self, PatchOutcome::Patched)
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Patched => {
                write!(f, "Patched react-dom/server exports: removed bun condition")
            }
            PatchOutcome::AlreadyPatched => {
                write!(f, "react-dom/server exports already patched")
            }
        }
    }
}

/// Resolve the default manifest path relative to the running executable
///
/// Mirrors the fixed relative layout this tool is installed into:
/// the binary lives next to the project root, with `node_modules/` one
/// level up from the executable's directory.
pub fn default_manifest_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(normalize(&dir.join(MANIFEST_RELATIVE)))
}

/// Remove the `"bun"` key from `exports["./server"]` in-memory
///
/// Returns `true` if the key was present and removed. Missing `exports`
/// or `./server` entries (or non-object values at either level) leave the
/// document untouched and return `false`.
pub fn remove_bun_condition(doc: &mut Value) -> bool {
    doc.get_mut("exports")
        .and_then(|exports| exports.get_mut("./server"))
        .and_then(Value::as_object_mut)
        // shift_remove keeps the remaining condition keys in their on-disk
        // order (plain remove is swap_remove under preserve_order)
        .map(|server| server.shift_remove("bun").is_some())
        .unwrap_or(false)
}

/// Patch the manifest at `path`
///
/// Reads and parses the manifest, removes the `"bun"` condition if present,
/// and writes the document back with 2-space indentation plus a trailing
/// newline. At most one write per invocation; the already-patched branch
/// performs no write at all.
///
/// # Errors
///
/// * [`PatchError::MissingManifest`] if no file exists at `path`
/// * [`PatchError::MalformedManifest`] if the content is not valid JSON
pub fn patch_manifest(path: &Path) -> Result<PatchOutcome> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PatchError::MissingManifest {
                path: path.to_path_buf(),
            }
        } else {
            PatchError::Io(e)
        }
    })?;

    let mut doc: Value = serde_json::from_str(&content).map_err(|source| {
        PatchError::MalformedManifest {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if !remove_bun_condition(&mut doc) {
        debug!(path = %path.display(), "no bun condition present, leaving manifest untouched");
        return Ok(PatchOutcome::AlreadyPatched);
    }

    let mut serialized = serde_json::to_string_pretty(&doc)?;
    serialized.push('\n');
    fs::write(path, serialized)?;

    debug!(path = %path.display(), "removed bun condition from ./server exports");
    Ok(PatchOutcome::Patched)
}

/// Lexically normalize a path, resolving `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn removes_bun_when_present() {
        let mut doc = json!({
            "exports": {
                "./server": { "bun": "x.js", "node": "y.js" }
            }
        });
        assert!(remove_bun_condition(&mut doc));
        assert_eq!(doc["exports"]["./server"], json!({ "node": "y.js" }));
    }

    #[test]
    fn no_op_without_bun_key() {
        let mut doc = json!({
            "exports": {
                "./server": { "node": "y.js" }
            }
        });
        assert!(!remove_bun_condition(&mut doc));
        assert_eq!(doc["exports"]["./server"], json!({ "node": "y.js" }));
    }

    #[test]
    fn no_op_without_exports_field() {
        let mut doc = json!({ "name": "react-dom" });
        assert!(!remove_bun_condition(&mut doc));
        assert_eq!(doc, json!({ "name": "react-dom" }));
    }

    #[test]
    fn no_op_without_server_entry() {
        let mut doc = json!({ "exports": { ".": "./index.js" } });
        assert!(!remove_bun_condition(&mut doc));
    }

    #[test]
    fn no_op_when_server_entry_is_not_an_object() {
        let mut doc = json!({ "exports": { "./server": "./server.js" } });
        assert!(!remove_bun_condition(&mut doc));
        assert_eq!(doc["exports"]["./server"], json!("./server.js"));
    }

    #[test]
    fn normalize_resolves_parent_components() {
        let path = Path::new("/opt/app/bin/../node_modules/react-dom/package.json");
        assert_eq!(
            normalize(path),
            PathBuf::from("/opt/app/node_modules/react-dom/package.json")
        );
    }

    #[test]
    fn outcome_messages_are_stable() {
        assert_eq!(
            PatchOutcome::Patched.to_string(),
            "Patched react-dom/server exports: removed bun condition"
        );
        assert_eq!(
            PatchOutcome::AlreadyPatched.to_string(),
            "react-dom/server exports already patched"
        );
    }
}
