//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each entity (education
//! entry, job, skill category, project, page) leads with its positional index
//! and title; supporting details follow on indented lines. This makes the
//! output readable as a content inventory.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Profile
//!     Alex Morgan
//!     Roles: 3
//!     Source: content.toml
//!
//! Career
//! 001 Senior ML Engineer @ TechCorp AI
//!     Period: 2022 - Present
//!     Tech: PyTorch, Kubernetes, MLflow
//!
//! Skills
//! 001 Programming Languages (4 skills)
//!     Python 95%
//!
//! Warnings
//!     Skills / Rust: level 120 shown as 100%
//! ```
//!
//! ## Build
//!
//! ```text
//! Pages (single-page)
//! 001 index.html
//!     Sections: hero, education, career, skills, projects, contact
//!     Mount points: 10
//!
//! Assets
//!     3 files → assets/
//!
//! Generated 1 page in dist
//! ```
//!
//! ## Typing
//!
//! ```text
//!       0 ms  "M"
//!     100 ms  "Ma"
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions do no I/O beyond checking which source files exist.

use crate::config::{NavigationMode, SiteConfig};
use crate::content::{CONTENT_FILE, Content};
use crate::generate::GenerateReport;
use crate::nav::nav_entries;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

fn mode_name(mode: NavigationMode) -> &'static str {
    match mode {
        NavigationMode::SinglePage => "single-page",
        NavigationMode::MultiPage => "multi-page",
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

// ============================================================================
// check
// ============================================================================

/// Format the content inventory shown by `check`.
pub fn format_check_output(content: &Content, config: &SiteConfig, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    lines.push(format!("{}{}", indent(1), content.profile.name));
    lines.push(format!("{}Roles: {}", indent(1), content.profile.roles.len()));
    if source_root.join(CONTENT_FILE).is_file() {
        lines.push(format!("{}Source: {}", indent(1), CONTENT_FILE));
    } else {
        lines.push(format!("{}Source: stock content", indent(1)));
    }

    if !content.education.is_empty() {
        lines.push(String::new());
        lines.push("Education".to_string());
        for (i, entry) in content.education.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), entry.degree));
            lines.push(format!("{}{}, {}", indent(1), entry.institution, entry.year));
        }
    }

    if !content.career.is_empty() {
        lines.push(String::new());
        lines.push("Career".to_string());
        for (i, job) in content.career.iter().enumerate() {
            lines.push(format!("{} {} @ {}", format_index(i + 1), job.role, job.company));
            lines.push(format!("{}Period: {}", indent(1), job.period));
            if !job.tech_stack.is_empty() {
                lines.push(format!("{}Tech: {}", indent(1), job.tech_stack.join(", ")));
            }
        }
    }

    let skills = &content.skills;
    if !skills.categories.is_empty() || !skills.tag_groups.is_empty() {
        lines.push(String::new());
        lines.push("Skills".to_string());
        let mut pos = 0;
        for category in &skills.categories {
            pos += 1;
            lines.push(format!(
                "{} {} ({})",
                format_index(pos),
                category.name,
                plural(category.skills.len(), "skill", "skills")
            ));
            for skill in &category.skills {
                lines.push(format!("{}{} {}%", indent(1), skill.name, skill.display_level()));
            }
        }
        for group in &skills.tag_groups {
            pos += 1;
            lines.push(format!(
                "{} {} ({})",
                format_index(pos),
                group.name,
                plural(group.tags.len(), "tag", "tags")
            ));
        }
    }

    if !content.projects.is_empty() {
        lines.push(String::new());
        lines.push("Projects".to_string());
        for (i, project) in content.projects.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), project.title));
            if !project.description.is_empty() {
                lines.push(format!(
                    "{}Description: {}",
                    indent(1),
                    truncate_desc(&project.description, 40)
                ));
            }
        }
    }

    let mode = config.navigation.mode;
    lines.push(String::new());
    lines.push(format!("Navigation ({})", mode_name(mode)));
    for (i, entry) in nav_entries(&content.nav_links, mode, "index.html").iter().enumerate() {
        lines.push(format!("{} {} → {}", format_index(i + 1), entry.name, entry.href));
    }

    let out_of_range = content.out_of_range_skills();
    if !out_of_range.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for (category, skill) in out_of_range {
            lines.push(format!(
                "{}{} / {}: level {} shown as {}%",
                indent(1),
                category,
                skill.name,
                skill.level,
                skill.display_level()
            ));
        }
    }

    let config_path = source_root.join("config.toml");
    let assets_path = source_root.join(&config.assets_dir);
    if config_path.is_file() || assets_path.is_dir() {
        lines.push(String::new());
        lines.push("Config".to_string());
        if config_path.is_file() {
            lines.push(format!("{}config.toml", indent(1)));
        }
        if assets_path.is_dir() {
            lines.push(format!("{}{}/", indent(1), config.assets_dir));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(content: &Content, config: &SiteConfig, source_root: &Path) {
    for line in format_check_output(content, config, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the summary of a finished build.
pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Pages ({})", mode_name(report.mode)));
    for (i, page) in report.pages.iter().enumerate() {
        let sections: Vec<&str> = page.sections.iter().map(|s| s.id()).collect();
        lines.push(format!("{} {}", format_index(i + 1), page.file_name));
        lines.push(format!("{}Sections: {}", indent(1), sections.join(", ")));
        lines.push(format!("{}Mount points: {}", indent(1), page.filled_mounts));
    }

    if report.assets_copied > 0 {
        lines.push(String::new());
        lines.push("Assets".to_string());
        lines.push(format!(
            "{}{} → {}/",
            indent(1),
            plural(report.assets_copied, "file", "files"),
            report.assets_dir
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} in {}",
        plural(report.pages.len(), "page", "pages"),
        report.output_dir.display()
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// typing
// ============================================================================

/// Format a typing timeline: one line per displayed text, stamped with its
/// virtual time.
pub fn format_typing_timeline(frames: &[(Duration, String)]) -> Vec<String> {
    frames
        .iter()
        .map(|(at, text)| format!("{:>7} ms  \"{}\"", at.as_millis(), text))
        .collect()
}

/// Print a typing timeline to stdout.
pub fn print_typing_timeline(frames: &[(Duration, String)]) {
    for line in format_typing_timeline(frames) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
