//! Shared test utilities for the simple-folio test suite.
//!
//! Provides the fixture content directory, a parsed sample record, and
//! assertions over rendered markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = sample_content();
//! let html = render_career(&content).into_string();
//! assert_eq!(count(&html, r#"class="timeline-item""#), 3);
//! assert_in_order(&html, &["Senior ML Engineer", "Data Scientist"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::{Content, parse_content};
use crate::document::{Document, MountPoint, Section};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The fixture `content.toml`, parsed.
pub fn sample_content() -> Content {
    parse_content(include_str!("../fixtures/content/content.toml")).unwrap()
}

/// A document declaring every mount point.
pub fn full_document() -> Document {
    let mounts = [MountPoint::NavLinks, MountPoint::MenuToggle]
        .into_iter()
        .chain(Section::ALL.iter().flat_map(|s| s.mounts().iter().copied()));
    Document::with_mounts(mounts)
}

// =========================================================================
// Markup assertions
// =========================================================================

/// Non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Assert that every needle appears in `html`, in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(at) => from += at + needle.len(),
            None => {
                let present = html.contains(needle);
                panic!("'{needle}' not found after byte {from} (present anywhere: {present})")
            }
        }
    }
}
