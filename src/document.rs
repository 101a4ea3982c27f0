//! Page documents and their mount points.
//!
//! A [`Document`] is the write boundary between the pure renderers and the
//! page being assembled. It declares which [`MountPoint`]s the page contains;
//! writing markup to a declared mount point replaces whatever was there,
//! writing to an undeclared one does nothing. This lets every renderer run
//! against every page, and pages that only carry some sections simply ignore
//! the rest.

use maud::{Markup, PreEscaped};
use std::collections::BTreeMap;

/// A named place in the page that exactly one renderer fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MountPoint {
    NavLinks,
    MenuToggle,
    HeroText,
    HeroImage,
    EducationGrid,
    CareerTimeline,
    SkillsContainer,
    ProjectsGrid,
    ContactList,
    SocialLinks,
}

impl MountPoint {
    /// Class of the container element, which is also the runtime's selector.
    pub fn class_name(self) -> &'static str {
        match self {
            MountPoint::NavLinks => "nav-links",
            MountPoint::MenuToggle => "menu-toggle",
            MountPoint::HeroText => "hero-text",
            MountPoint::HeroImage => "hero-image",
            MountPoint::EducationGrid => "education-grid",
            MountPoint::CareerTimeline => "timeline",
            MountPoint::SkillsContainer => "skills-container",
            MountPoint::ProjectsGrid => "projects-grid",
            MountPoint::ContactList => "contact-list",
            MountPoint::SocialLinks => "social-links",
        }
    }
}

/// The page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Hero,
    Education,
    Career,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Education,
        Section::Career,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id, and the anchor single-page navigation links to.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Education => "education",
            Section::Career => "career",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// File name of the section's page in multi-page mode.
    pub fn page_file(self) -> &'static str {
        match self {
            Section::Hero => "index.html",
            Section::Education => "education.html",
            Section::Career => "career.html",
            Section::Skills => "skills.html",
            Section::Projects => "projects.html",
            Section::Contact => "contact.html",
        }
    }

    /// Visible section title. The hero has none.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Section::Hero => None,
            Section::Education => Some("Education"),
            Section::Career => Some("Career Journey"),
            Section::Skills => Some("Skills & Expertise"),
            Section::Projects => Some("Featured Projects"),
            Section::Contact => Some("Get in Touch"),
        }
    }

    /// Mount points this section's renderer writes to.
    pub fn mounts(self) -> &'static [MountPoint] {
        match self {
            Section::Hero => &[MountPoint::HeroText, MountPoint::HeroImage],
            Section::Education => &[MountPoint::EducationGrid],
            Section::Career => &[MountPoint::CareerTimeline],
            Section::Skills => &[MountPoint::SkillsContainer],
            Section::Projects => &[MountPoint::ProjectsGrid],
            Section::Contact => &[MountPoint::ContactList, MountPoint::SocialLinks],
        }
    }

    /// The section whose page is `href` (`"career.html"` → `Career`).
    pub fn from_page_file(href: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.page_file() == href)
    }
}

/// A page under construction: a fixed set of mount points and their content.
#[derive(Debug, Clone, Default)]
pub struct Document {
    slots: BTreeMap<MountPoint, String>,
}

impl Document {
    /// A document declaring exactly `mounts`, all empty.
    pub fn with_mounts(mounts: impl IntoIterator<Item = MountPoint>) -> Self {
        Self {
            slots: mounts.into_iter().map(|m| (m, String::new())).collect(),
        }
    }

    pub fn has(&self, mount: MountPoint) -> bool {
        self.slots.contains_key(&mount)
    }

    /// Replace the content of `mount`. Returns `false` (and changes nothing)
    /// when the document has no such mount point.
    pub fn write(&mut self, mount: MountPoint, markup: Markup) -> bool {
        match self.slots.get_mut(&mount) {
            Some(slot) => {
                *slot = markup.into_string();
                true
            }
            None => false,
        }
    }

    /// Current content of `mount`, if declared.
    pub fn content(&self, mount: MountPoint) -> Option<&str> {
        self.slots.get(&mount).map(String::as_str)
    }

    /// Content of `mount` ready to splice into a template; empty when absent.
    pub fn slot(&self, mount: MountPoint) -> PreEscaped<&str> {
        PreEscaped(self.content(mount).unwrap_or_default())
    }

    pub fn mounts(&self) -> impl Iterator<Item = MountPoint> + '_ {
        self.slots.keys().copied()
    }

    /// Mount points that have content.
    pub fn filled(&self) -> usize {
        self.slots.values().filter(|s| !s.is_empty()).count()
    }
}
