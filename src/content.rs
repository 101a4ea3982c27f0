//! The Content Record: everything the site displays.
//!
//! Content lives in a single hand-authored `content.toml` at the source root.
//! It is loaded once, before any rendering, and is never mutated afterwards:
//! renderers receive `&Content` and only read from it.
//!
//! ```text
//! content/
//! ├── content.toml     # Content Record (falls back to the stock record)
//! ├── config.toml      # Site configuration (optional)
//! └── assets/          # Photo, project images, resume → copied to output
//! ```
//!
//! ## Shape
//!
//! ```toml
//! [profile]
//! name = "Alex Morgan"
//! greeting = "Hello, I'm"
//! roles = ["Machine Learning Engineer", "Data Scientist"]
//! bio = "Building **intelligent** systems."   # inline markdown
//! photo = "assets/profile.jpg"
//! resume_link = "assets/resume.pdf"
//! email = "alex@example.com"
//!
//! [[education]]
//! degree = "MSc Machine Learning"
//! institution = "Example University"
//! year = "2021 - 2023"
//! description = "Deep learning and computer vision."
//! icon = "🎓"
//!
//! [[skills.categories]]
//! name = "Programming Languages"
//! icon = "💻"
//! skills = [{ name = "Rust", level = 90 }]
//!
//! [[skills.tag_groups]]
//! name = "Tools & Platforms"
//! icon = "🛠"
//! tags = ["Docker", "Git"]
//! ```
//!
//! Unknown keys are rejected, the same way `config.toml` rejects them.
//!
//! ## Skill Levels
//!
//! Levels are percentages. Values outside `0..=100` are accepted at load time
//! (a warning is logged) and clamped wherever they are displayed, so a typo
//! produces a full or empty bar rather than a broken page.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content.toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// File name of the Content Record inside the source directory.
pub const CONTENT_FILE: &str = "content.toml";

/// The complete, immutable Content Record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub career: Vec<CareerEntry>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    /// Navigation order. Destinations are page file names (`career.html`);
    /// in single-page mode they are mapped onto in-page anchors.
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    /// Rotating role strings shown by the typing animation, in cycle order.
    #[serde(default)]
    pub roles: Vec<String>,
    /// Short biography; inline markdown is allowed.
    pub bio: String,
    pub photo: String,
    #[serde(default = "default_link")]
    pub resume_link: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareerEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Skills {
    /// Leveled skills, rendered as progress bars.
    pub categories: Vec<SkillCategory>,
    /// Free-text tags (domains, tools), rendered as chips.
    pub tag_groups: Vec<SkillTagGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Percentage. Stored as authored; see [`Skill::display_level`].
    pub level: i64,
}

impl Skill {
    /// The level clamped to `0..=100`, as used for bar widths and labels.
    pub fn display_level(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }

    pub fn is_out_of_range(&self) -> bool {
        !(0..=100).contains(&self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillTagGroup {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default = "default_link")]
    pub demo_link: String,
    #[serde(default = "default_link")]
    pub code_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub social: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

fn default_link() -> String {
    "#".to_string()
}

impl Content {
    /// The stock Content Record shipped with the binary.
    pub fn stock() -> Self {
        toml::from_str(stock_content_toml()).expect("stock content must parse")
    }

    /// Every skill whose level falls outside `0..=100`, with its category.
    pub fn out_of_range_skills(&self) -> Vec<(&str, &Skill)> {
        self.skills
            .categories
            .iter()
            .flat_map(|c| c.skills.iter().map(move |s| (c.name.as_str(), s)))
            .filter(|(_, s)| s.is_out_of_range())
            .collect()
    }
}

/// Parse a Content Record from TOML text.
pub fn parse_content(text: &str) -> Result<Content, ContentError> {
    let content: Content = toml::from_str(text)?;
    for (category, skill) in content.out_of_range_skills() {
        log::warn!(
            "skill '{}' in '{}' has level {} outside 0-100; displaying {}%",
            skill.name,
            category,
            skill.level,
            skill.display_level()
        );
    }
    Ok(content)
}

/// Load `content.toml` from the source directory.
///
/// Falls back to the stock record when the file does not exist, so a bare
/// `simple-folio build` produces a complete demo site.
pub fn load_content(root: &Path) -> Result<Content, ContentError> {
    let path = root.join(CONTENT_FILE);
    if !path.exists() {
        log::info!(
            "no {} in {}, using the stock content record",
            CONTENT_FILE,
            root.display()
        );
        return parse_content(stock_content_toml());
    }
    let text = fs::read_to_string(&path)?;
    parse_content(&text)
}

/// A complete, commented `content.toml` to start from.
///
/// Used by the `gen-content` CLI command and as the built-in fallback.
pub fn stock_content_toml() -> &'static str {
    r##"# Simple Folio Content
# ====================
# Everything the site displays. Arrays render in the order written here.

nav_links = [
    { name = "About", href = "index.html" },
    { name = "Education", href = "education.html" },
    { name = "Career", href = "career.html" },
    { name = "Skills", href = "skills.html" },
    { name = "Projects", href = "projects.html" },
    { name = "Contact", href = "contact.html" },
]

[profile]
name = "Alex Morgan"
greeting = "Hello, I'm"
# Cycled by the typing animation, in this order.
roles = ["Machine Learning Engineer", "Data Scientist", "AI Researcher"]
# Inline markdown is allowed.
bio = "Passionate about building intelligent systems. I specialize in computer vision, NLP, and deploying ML models at scale."
photo = "assets/profile.jpg"
resume_link = "#"
email = "alex@example.com"

# ---------------------------------------------------------------------------
# Education (display order = file order)
# ---------------------------------------------------------------------------
[[education]]
degree = "Master of Science in Machine Learning"
institution = "Stanford University"
year = "2021 - 2023"
description = "Specialized in Deep Learning and Computer Vision."
icon = "🎓"

[[education]]
degree = "Bachelor of Technology in Computer Science"
institution = "Indian Institute of Technology"
year = "2017 - 2021"
description = "First Class with Distinction. Focus on AI fundamentals."
icon = "📚"

# ---------------------------------------------------------------------------
# Career (most recent first)
# ---------------------------------------------------------------------------
[[career]]
role = "Senior ML Engineer"
company = "Google DeepMind"
period = "2023 - Present"
location = "San Francisco, CA"
description = "Leading development of multimodal AI systems. Building scalable training pipelines for LLMs."
tech_stack = ["Python", "JAX", "TPUs", "Transformers", "Kubernetes"]

[[career]]
role = "Machine Learning Engineer"
company = "OpenAI"
period = "2022 - 2023"
location = "San Francisco, CA"
description = "Developed fine-tuning pipelines for GPT models. Implemented RLHF systems."
tech_stack = ["Python", "PyTorch", "CUDA", "Redis", "Docker"]

[[career]]
role = "Data Scientist"
company = "Meta AI"
period = "2021 - 2022"
location = "Menlo Park, CA"
description = "Built recommendation systems serving billions of users."
tech_stack = ["Python", "PyTorch", "SQL", "Spark", "Presto"]

# ---------------------------------------------------------------------------
# Skills: leveled categories render as bars (level 0-100), tag groups as chips
# ---------------------------------------------------------------------------
[[skills.categories]]
name = "Programming Languages"
icon = "💻"
skills = [
    { name = "Python", level = 95 },
    { name = "JavaScript", level = 75 },
    { name = "SQL", level = 85 },
    { name = "C++", level = 70 },
]

[[skills.categories]]
name = "ML Frameworks"
icon = "🧠"
skills = [
    { name = "PyTorch", level = 95 },
    { name = "TensorFlow", level = 85 },
    { name = "JAX", level = 80 },
    { name = "Hugging Face", level = 90 },
]

[[skills.tag_groups]]
name = "ML Domains"
icon = "🎯"
tags = ["Computer Vision", "NLP", "Generative AI", "Reinforcement Learning", "MLOps"]

[[skills.tag_groups]]
name = "Tools & Platforms"
icon = "🛠"
tags = ["Docker", "Kubernetes", "MLflow", "W&B", "Git", "AWS", "GCP"]

# ---------------------------------------------------------------------------
# Projects
# ---------------------------------------------------------------------------
[[projects]]
title = "Neural Style Transfer App"
description = "Real-time style transfer using optimized VGG networks with live camera processing."
image = "assets/project1.jpg"
tech_stack = ["PyTorch", "FastAPI", "React"]
demo_link = "#"
code_link = "https://github.com/username/style-transfer"

[[projects]]
title = "Conversational AI Assistant"
description = "Domain-specific chatbot using fine-tuned LLaMA with RAG architecture."
image = "assets/project2.jpg"
tech_stack = ["LangChain", "Pinecone", "FastAPI"]
demo_link = "#"
code_link = "https://github.com/username/ai-assistant"

[[projects]]
title = "Medical Image Segmentation"
description = "U-Net model for tumor detection in MRI scans with 0.92 Dice score."
image = "assets/project3.jpg"
tech_stack = ["PyTorch", "MONAI", "Docker"]
demo_link = "#"
code_link = "https://github.com/username/medical-seg"

# ---------------------------------------------------------------------------
# Contact
# ---------------------------------------------------------------------------
[contact]
email = "alex@example.com"
phone = "+1 (555) 123-4567"
location = "San Francisco, California"

[contact.social]
github = "https://github.com/username"
linkedin = "https://linkedin.com/in/username"
twitter = "https://twitter.com/username"
"##
}
