//! HTML site generation.
//!
//! Takes the loaded [`Content`] record and [`SiteConfig`] and writes the
//! finished static site.
//!
//! ## Generated Pages
//!
//! Depends on `navigation.mode`:
//!
//! - **single-page**: one `index.html` carrying every section; navigation
//!   links are in-page anchors and the active link follows scrolling.
//! - **multi-page**: one file per section (`index.html` for the hero,
//!   `education.html`, `career.html`, ...); the active link is fixed per page
//!   at build time.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Hero (and every section in single-page mode)
//! ├── education.html      # multi-page only
//! ├── ...
//! └── assets/             # copied verbatim from the source directory
//! ```
//!
//! ## Page Assembly
//!
//! Each page is a [`Document`] declaring the mount points of its sections plus
//! the navigation. Every section renderer runs against every page; renderers
//! whose mount points a page lacks are skipped. The filled mount points are
//! then spliced into the page shell.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/runtime.js`: Typing, reveal, navigation and decorative effects,
//!   configured by the inline boot JSON (see [`crate::runtime`])

use crate::config::{self, ConfigError, NavigationMode, SiteConfig};
use crate::content::{self, Content, ContentError};
use crate::document::{Document, MountPoint, Section};
use crate::nav::nav_entries;
use crate::particles::PARTICLES_ELEMENT_ID;
use crate::render::{RenderOptions, mount_navigation, mount_section};
use crate::runtime::{BOOT_ELEMENT_ID, Boot, boot_json};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Content(#[from] ContentError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/runtime.js");

/// particles.js build loaded when particles are enabled. The runtime skips
/// the call if the script never arrives.
const PARTICLES_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/particles.js@2.0.0/particles.min.js";

/// One output file and the sections it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    pub file_name: &'static str,
    pub sections: Vec<Section>,
}

/// The pages a navigation mode produces, in nav order.
pub fn plan_pages(mode: NavigationMode) -> Vec<PagePlan> {
    match mode {
        NavigationMode::SinglePage => vec![PagePlan {
            file_name: Section::Hero.page_file(),
            sections: Section::ALL.to_vec(),
        }],
        NavigationMode::MultiPage => Section::ALL
            .into_iter()
            .map(|section| PagePlan {
                file_name: section.page_file(),
                sections: vec![section],
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub file_name: String,
    pub sections: Vec<Section>,
    /// Mount points that received non-empty markup.
    pub filled_mounts: usize,
}

/// What a build produced, for the `build` command's summary.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub mode: NavigationMode,
    pub pages: Vec<GeneratedPage>,
    /// Assets directory name, relative to both the source and output roots.
    pub assets_dir: String,
    pub assets_copied: usize,
}

/// Load `config.toml` and `content.toml` from `source_dir` and generate the
/// site into `output_dir`.
pub fn build(source_dir: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source_dir)?;
    let content = content::load_content(source_dir)?;
    generate(&content, &config, source_dir, output_dir)
}

pub fn generate(
    content: &Content,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let boot = boot_json(&Boot::new(content, config))?;
    let opts = RenderOptions::from_config(config);
    let mode = config.navigation.mode;

    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::new();
    for plan in plan_pages(mode) {
        let doc = assemble_document(&plan, content, mode, &opts);
        let page = render_page(&plan, &doc, content, config, &css, &boot);
        fs::write(output_dir.join(plan.file_name), page.into_string())?;
        log::info!("Generated {}", plan.file_name);
        pages.push(GeneratedPage {
            file_name: plan.file_name.to_string(),
            filled_mounts: doc.filled(),
            sections: plan.sections,
        });
    }

    let assets_copied = copy_assets(
        &source_dir.join(&config.assets_dir),
        &output_dir.join(&config.assets_dir),
    )?;

    log::info!("Site generated at {}", output_dir.display());
    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        mode,
        pages,
        assets_dir: config.assets_dir.clone(),
        assets_copied,
    })
}

/// Build the page's document and run every renderer against it.
pub fn assemble_document(
    plan: &PagePlan,
    content: &Content,
    mode: NavigationMode,
    opts: &RenderOptions,
) -> Document {
    let mounts = [MountPoint::NavLinks, MountPoint::MenuToggle]
        .into_iter()
        .chain(plan.sections.iter().flat_map(|s| s.mounts().iter().copied()));
    let mut doc = Document::with_mounts(mounts);

    mount_navigation(&mut doc, &nav_entries(&content.nav_links, mode, plan.file_name));
    for section in Section::ALL {
        mount_section(&mut doc, section, content, opts);
    }
    doc
}

/// Copy the assets directory verbatim. A missing directory copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> std::io::Result<usize> {
    if !src.is_dir() {
        log::debug!("no assets directory at {}", src.display());
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, boot: &str, particles: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                div id=(PARTICLES_ELEMENT_ID) {}
                (content)
                script id=(BOOT_ELEMENT_ID) type="application/json" { (PreEscaped(boot)) }
                @if particles {
                    script src=(PARTICLES_SCRIPT) {}
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the fixed navbar around the navigation mount points
fn navbar(doc: &Document, name: &str, home_href: &str) -> Markup {
    html! {
        nav.navbar {
            div.nav-container {
                a.nav-logo href=(home_href) { (name) }
                div.nav-links { (doc.slot(MountPoint::NavLinks)) }
                button.menu-toggle type="button" aria-label="Toggle menu" {
                    (doc.slot(MountPoint::MenuToggle))
                }
            }
        }
    }
}

/// Renders a section shell with its mount point containers filled in
fn section_shell(section: Section, doc: &Document) -> Markup {
    let mounts = html! {
        @for mount in section.mounts() {
            div class=(mount.class_name()) { (doc.slot(*mount)) }
        }
    };
    match section {
        Section::Hero => html! {
            section id="hero" class="hero" {
                div.hero-content { (mounts) }
            }
        },
        Section::Contact => html! {
            section id="contact" class="section" {
                div.container {
                    @if let Some(heading) = section.heading() {
                        (section_heading(heading))
                    }
                    div.contact-content { (mounts) }
                }
            }
        },
        _ => html! {
            section id=(section.id()) class="section" {
                div.container {
                    @if let Some(heading) = section.heading() {
                        (section_heading(heading))
                    }
                    (mounts)
                }
            }
        },
    }
}

/// The reveal slide sits on the wrapper so the heading's own transform is
/// free for parallax.
fn section_heading(heading: &str) -> Markup {
    html! {
        div.section-heading.reveal {
            h2.section-title { (heading) }
        }
    }
}

fn render_page(
    plan: &PagePlan,
    doc: &Document,
    content: &Content,
    config: &SiteConfig,
    css: &str,
    boot: &str,
) -> Markup {
    let name = &content.profile.name;
    let home_href = match config.navigation.mode {
        NavigationMode::SinglePage => format!("#{}", Section::Hero.id()),
        NavigationMode::MultiPage => Section::Hero.page_file().to_string(),
    };
    let site_title = config.page_title(name);
    let title = match plan.sections.as_slice() {
        [section] => match section.heading() {
            Some(heading) => format!("{} | {}", heading, site_title),
            None => site_title,
        },
        _ => site_title,
    };

    let body = html! {
        (navbar(doc, name, &home_href))
        main {
            @for section in &plan.sections {
                (section_shell(*section, doc))
            }
        }
        footer.footer {
            p { "\u{a9} " (name) }
        }
    };

    base_document(&title, css, boot, config.particles.enabled, body)
}
