//! Section renderers.
//!
//! One pure function per mount point: it reads a slice of the [`Content`]
//! record and returns markup. Nothing here knows about files or pages; the
//! [`mount_section`] boundary writes the markup into a [`Document`], and
//! silently skips mount points the document does not have.
//!
//! Rendering is deterministic: the same content always produces
//! byte-identical markup, and every list is emitted in content order.
//!
//! Class names are the contract with `static/style.css` and
//! `static/runtime.js` (e.g. `typing-text`, `skill-progress`, `reveal`).

use crate::config::{NavigationMode, SiteConfig};
use crate::content::{Content, Project, Skill};
use crate::document::{Document, MountPoint, Section};
use crate::nav::NavEntry;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Presentation choices the renderers need from the site config.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Target of the hero's "Get in Touch" button.
    pub contact_href: String,
    /// Hex (without `#`) used for generated avatars.
    pub avatar_background: String,
    pub placeholder_background: String,
    pub placeholder_foreground: String,
}

impl RenderOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        let hex = |c: &str| c.trim_start_matches('#').to_string();
        Self {
            contact_href: match config.navigation.mode {
                NavigationMode::SinglePage => format!("#{}", Section::Contact.id()),
                NavigationMode::MultiPage => Section::Contact.page_file().to_string(),
            },
            avatar_background: hex(&config.colors.accent_deep),
            placeholder_background: hex(&config.colors.surface),
            placeholder_foreground: hex(&config.colors.accent),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

// ============================================================================
// Mount boundary
// ============================================================================

/// Markup for each of the section's mount points.
pub fn render_section(section: Section, content: &Content, opts: &RenderOptions) -> Vec<(MountPoint, Markup)> {
    match section {
        Section::Hero => vec![
            (MountPoint::HeroText, render_hero_text(content, opts)),
            (MountPoint::HeroImage, render_hero_image(content, opts)),
        ],
        Section::Education => vec![(MountPoint::EducationGrid, render_education(content))],
        Section::Career => vec![(MountPoint::CareerTimeline, render_career(content))],
        Section::Skills => vec![(MountPoint::SkillsContainer, render_skills(content))],
        Section::Projects => vec![(MountPoint::ProjectsGrid, render_projects(content, opts))],
        Section::Contact => vec![
            (MountPoint::ContactList, render_contact_list(content)),
            (MountPoint::SocialLinks, render_social_links(content)),
        ],
    }
}

/// Render `section` into `doc`, replacing previous content.
///
/// Mount points missing from the document are skipped. Returns how many
/// mount points were written.
pub fn mount_section(doc: &mut Document, section: Section, content: &Content, opts: &RenderOptions) -> usize {
    if !section.mounts().iter().any(|m| doc.has(*m)) {
        log::debug!("no mount point for section '{}', skipping", section.id());
        return 0;
    }
    let mut written = 0;
    for (mount, markup) in render_section(section, content, opts) {
        if doc.write(mount, markup) {
            written += 1;
        } else {
            log::debug!("mount point '{}' absent", mount.class_name());
        }
    }
    written
}

/// Render the navigation links and menu toggle into `doc`.
pub fn mount_navigation(doc: &mut Document, entries: &[NavEntry]) {
    doc.write(MountPoint::NavLinks, render_nav_links(entries));
    doc.write(MountPoint::MenuToggle, render_menu_toggle());
}

// ============================================================================
// Navigation
// ============================================================================

pub fn render_nav_links(entries: &[NavEntry]) -> Markup {
    html! {
        @for entry in entries {
            a.nav-link.active[entry.active] href=(entry.href) { (entry.name) }
        }
    }
}

pub fn render_menu_toggle() -> Markup {
    html! {
        span.bar {}
        span.bar {}
        span.bar {}
    }
}

// ============================================================================
// Hero
// ============================================================================

pub fn render_hero_text(content: &Content, opts: &RenderOptions) -> Markup {
    let profile = &content.profile;
    html! {
        p.hero-greeting { (profile.greeting) }
        h1.hero-name { (profile.name) }
        p.hero-roles { span.typing-text {} }
        div.hero-bio { (PreEscaped(markdown_to_html(&profile.bio))) }
        div.hero-cta {
            a.btn.btn-primary href=(profile.resume_link) {
                (outline_icon("btn-icon", 24, DOWNLOAD_ICON))
                "Download Resume"
            }
            a.btn.btn-secondary href=(opts.contact_href) { "Get in Touch" }
        }
    }
}

pub fn render_hero_image(content: &Content, opts: &RenderOptions) -> Markup {
    let profile = &content.profile;
    let fallback = avatar_fallback_url(&profile.name, &opts.avatar_background);
    html! {
        div.profile-container {
            div.profile-glow {}
            div.profile-ring {}
            img.profile-image src=(profile.photo) alt=(profile.name) onerror=(fallback_handler(&fallback));
        }
    }
}

// ============================================================================
// Education, career
// ============================================================================

pub fn render_education(content: &Content) -> Markup {
    html! {
        @for (i, entry) in content.education.iter().enumerate() {
            div class=(format!("card education-card reveal stagger-{}", i + 1)) {
                div.education-icon { (entry.icon) }
                div.education-content {
                    h3.card-title { (entry.degree) }
                    p.card-subtitle { (entry.institution) }
                    p.card-text { (entry.description) }
                    div.card-meta {
                        (outline_icon("meta-icon", 16, CALENDAR_ICON))
                        span { (entry.year) }
                    }
                }
            }
        }
    }
}

pub fn render_career(content: &Content) -> Markup {
    html! {
        @for job in &content.career {
            div.timeline-item {
                div.timeline-dot {}
                span.timeline-date { (job.period) }
                div.card.timeline-card {
                    h3.card-title { (job.role) }
                    p.card-subtitle { (job.company) " \u{2022} " (job.location) }
                    p.card-text { (job.description) }
                    (tech_badges(&job.tech_stack))
                }
            }
        }
    }
}

fn tech_badges(stack: &[String]) -> Markup {
    html! {
        div.project-tech {
            @for tech in stack {
                span.tech-badge { (tech) }
            }
        }
    }
}

// ============================================================================
// Skills
// ============================================================================

pub fn render_skills(content: &Content) -> Markup {
    let skills = &content.skills;
    let groups_offset = skills.categories.len();
    html! {
        @for (i, category) in skills.categories.iter().enumerate() {
            div class=(format!("card skill-category reveal {}", stagger(i, 4))) {
                h3.skill-category-title { (titled(&category.icon, &category.name)) }
                @for skill in &category.skills {
                    (skill_item(skill))
                }
            }
        }
        @for (i, group) in skills.tag_groups.iter().enumerate() {
            div class=(format!("card skill-category reveal {}", stagger(groups_offset + i, 4))) {
                h3.skill-category-title { (titled(&group.icon, &group.name)) }
                div.skill-tags {
                    @for tag in &group.tags {
                        span.skill-tag { (tag) }
                    }
                }
            }
        }
    }
}

/// A skill row. The bar starts empty; the runtime fills it to `data-level`
/// once the item is revealed.
fn skill_item(skill: &Skill) -> Markup {
    let level = skill.display_level();
    html! {
        div.skill-item {
            div.skill-header {
                span.skill-name { (skill.name) }
                span.skill-level { (level) "%" }
            }
            div.skill-bar {
                div.skill-progress data-level=(level) {}
            }
        }
    }
}

fn titled(icon: &str, name: &str) -> String {
    if icon.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", icon, name)
    }
}

// ============================================================================
// Projects
// ============================================================================

pub fn render_projects(content: &Content, opts: &RenderOptions) -> Markup {
    html! {
        @for (i, project) in content.projects.iter().enumerate() {
            div class=(format!("card project-card reveal {}", stagger(i, 3))) {
                img.project-image src=(project.image) alt=(project.title) loading="lazy"
                    onerror=(fallback_handler(&project_placeholder(project, opts)));
                div.project-content {
                    h3.project-title { (project.title) }
                    p.project-description { (project.description) }
                    (tech_badges(&project.tech_stack))
                    div.project-links {
                        a.btn.btn-primary href=(project.demo_link) { "Live Demo" }
                        a.btn.btn-secondary href=(project.code_link) target="_blank" rel="noopener" { "View Code" }
                    }
                }
            }
        }
    }
}

fn project_placeholder(project: &Project, opts: &RenderOptions) -> String {
    project_placeholder_url(
        &project.title,
        &opts.placeholder_background,
        &opts.placeholder_foreground,
    )
}

// ============================================================================
// Contact
// ============================================================================

pub fn render_contact_list(content: &Content) -> Markup {
    let contact = &content.contact;
    html! {
        div.contact-item {
            div.contact-icon { "📧" }
            div.contact-text {
                h4 { "Email" }
                p { a href={ "mailto:" (contact.email) } { (contact.email) } }
            }
        }
        @if !contact.phone.is_empty() {
            div.contact-item {
                div.contact-icon { "📱" }
                div.contact-text {
                    h4 { "Phone" }
                    p { (contact.phone) }
                }
            }
        }
        @if !contact.location.is_empty() {
            div.contact-item {
                div.contact-icon { "📍" }
                div.contact-text {
                    h4 { "Location" }
                    p { (contact.location) }
                }
            }
        }
    }
}

pub fn render_social_links(content: &Content) -> Markup {
    let social = &content.contact.social;
    let links = [
        ("GitHub", social.github.as_deref(), GITHUB_ICON),
        ("LinkedIn", social.linkedin.as_deref(), LINKEDIN_ICON),
        ("Twitter", social.twitter.as_deref(), TWITTER_ICON),
    ];
    html! {
        @for (title, url, icon) in links {
            @if let Some(url) = url {
                a.social-link href=(url) target="_blank" rel="noopener" title=(title) {
                    svg width="24" height="24" fill="currentColor" viewBox="0 0 24 24" {
                        path d=(icon) {}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// `stagger-N` animation-delay class, cycling through `columns` values.
fn stagger(index: usize, columns: usize) -> String {
    format!("stagger-{}", index % columns + 1)
}

fn outline_icon(class: &str, size: u32, d: &str) -> Markup {
    html! {
        svg class=(class) width=(size) height=(size) fill="none" stroke="currentColor" viewBox="0 0 24 24" {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(d) {}
        }
    }
}

fn markdown_to_html(text: &str) -> String {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    out
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
///
/// Stricter than JavaScript's `encodeURIComponent`: quotes are encoded too,
/// so the result is safe inside a single-quoted `onerror` string.
pub fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Generated initials avatar used when the profile photo fails to load.
pub fn avatar_fallback_url(name: &str, background: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/initials/svg?seed={}&backgroundColor={}",
        encode_component(name),
        encode_component(background)
    )
}

/// Titled placeholder used when a project image fails to load.
pub fn project_placeholder_url(title: &str, background: &str, foreground: &str) -> String {
    format!(
        "https://placehold.co/600x400/{}/{}?text={}",
        encode_component(background),
        encode_component(foreground),
        encode_component(title)
    )
}

/// `onerror` handler swapping in `url` once.
fn fallback_handler(url: &str) -> String {
    format!("this.onerror=null;this.src='{}'", url)
}

const DOWNLOAD_ICON: &str = "M12 10v6m0 0l-3-3m3 3l3-3m2 8H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z";
const CALENDAR_ICON: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";
const GITHUB_ICON: &str = "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z";
const LINKEDIN_ICON: &str = "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z";
const TWITTER_ICON: &str = "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z";
