//! # Simple Folio
//!
//! A static site generator for a personal portfolio: profile, education,
//! career timeline, skills, projects and contact details, rendered from a
//! single `content.toml` into an animated site with no build-time JavaScript
//! tooling.
//!
//! # Architecture: Load, Render, Animate
//!
//! ```text
//! 1. Load      content.toml + config.toml  →  Content, SiteConfig
//! 2. Render    Content  →  section markup  →  Document mount points  →  dist/*.html
//! 3. Animate   boot JSON + runtime.js      →  typing, reveal, nav, effects in the browser
//! ```
//!
//! Stage 2 is pure: each section renderer is a function from `&Content` to
//! markup, and only the [`document::Document`] boundary holds state. Stage 3
//! runs in the visitor's browser, but its behavior is modeled here as small
//! steppable state machines ([`effects`], [`nav`]) driven by virtual time, so
//! the timing rules are unit-tested rather than eyeballed.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | The Content Record: `content.toml` loading and the stock sample |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`document`] | Sections, mount points, and the write boundary for rendered markup |
//! | [`render`] | Pure section renderers using Maud |
//! | [`nav`] | Link resolution per navigation mode, scroll spy, mobile menu |
//! | [`effects`] | Typing animation, scroll reveal, parallax and cursor glow state machines |
//! | [`particles`] | Particle background options and their particles.js shape |
//! | [`runtime`] | Boot payload handed to the embedded browser runtime |
//! | [`generate`] | Page planning, assembly, and writing the site |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Every string from
//! `content.toml` is auto-escaped; the only raw HTML is the profile bio, which
//! is authored as markdown and rendered with `pulldown-cmark`.
//!
//! ## Two Navigation Modes
//!
//! The same `nav_links` drive both layouts. In single-page mode every section
//! lives in `index.html` and links become anchors; in multi-page mode each
//! section gets its own file. See [`nav`].
//!
//! ## Out-of-Range Skill Levels
//!
//! Skill levels are percentages. Values outside `0..=100` load with a warning
//! and are clamped wherever they are displayed.

pub mod config;
pub mod content;
pub mod document;
pub mod effects;
pub mod generate;
pub mod nav;
pub mod output;
pub mod particles;
pub mod render;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_helpers;
