//! CDN gallery index generator
//!
//! Scans the current working directory and overwrites `index.html` with a
//! gallery page linking every image and video to its CDN URL.

use std::path::Path;

use randpic::index;

/// CDN that serves the scanned tree
const BASE_URL: &str = "https://photo.api.kafuchino.top";
/// Output document, overwritten on every run
const OUTPUT_FILE: &str = "index.html";
/// Relative-path prefixes excluded from the gallery
const IGNORE_LIST: [&str; 4] = [".git", ".edgeone", "target", "index.html"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = std::env::current_dir()?;
    let count = index::generate(&root, BASE_URL, &IGNORE_LIST, Path::new(OUTPUT_FILE))?;
    println!("Generated {OUTPUT_FILE} with {count} gallery entries");
    Ok(())
}
