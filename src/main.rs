//! Command-line entry point
//!
//! With no arguments, patches the manifest at the fixed relative path
//! `../node_modules/react-dom/package.json` next to the executable.
//! Prints exactly one status line to stdout and exits 0; a missing or
//! unparsable manifest aborts with a non-zero exit and a diagnostic.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use patch_react_dom::{default_manifest_path, patch_manifest, utils::init_logging};

/// Remove the "bun" condition from react-dom's ./server exports
#[derive(Parser, Debug)]
#[command(name = "patch-react-dom", version, about)]
struct Args {
    /// Path to the react-dom package.json
    /// (defaults to ../node_modules/react-dom/package.json next to the executable)
    manifest: Option<PathBuf>,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(if args.verbose { Some("debug") } else { None });

    let path = match args.manifest {
        Some(path) => path,
        None => default_manifest_path()?,
    };

    let outcome = patch_manifest(&path)?;
    println!("{outcome}");
    Ok(())
}
