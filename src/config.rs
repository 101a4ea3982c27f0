//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # title = "Alex Morgan | Portfolio"  # <title>; defaults to "<name> | Portfolio"
//! assets_dir = "assets"                # Copied verbatim into the output root
//!
//! [navigation]
//! mode = "single-page"      # or "multi-page": one file per section
//!
//! [colors]
//! background = "#0a1628"
//! surface = "#0d1f3c"       # Cards, project image placeholders
//! text = "#e2e8f0"
//! text_muted = "#94a3b8"
//! accent = "#00d4ff"
//! accent_alt = "#5eead4"
//! accent_deep = "#0891b2"   # Generated avatar background
//!
//! [typing]
//! type_ms = 100             # Delay after each typed character
//! delete_ms = 50            # Delay after each deleted character
//! full_pause_ms = 2000      # Pause once a role is fully typed
//! empty_pause_ms = 500      # Pause once a role is fully deleted
//!
//! [reveal]
//! threshold = 0.1           # Fraction of an element that must be visible
//! bottom_margin = 50.0      # Pixels shaved off the viewport bottom
//! bar_delay_ms = 200        # Skill bar fill delay after reveal
//!
//! [effects]
//! background_parallax = 0.3
//! profile_parallax = 0.15
//! heading_parallax = 0.05
//! cursor_glow = true
//! cursor_outer_ease = 0.08
//! cursor_inner_ease = 0.15
//! scrolled_offset = 50.0    # Navbar gets `scrolled` past this offset
//! section_lookahead = 100.0 # Single-page nav switches this early
//!
//! [particles]
//! enabled = true
//! count = 80
//! # ... see `simple-folio gen-config` for every particle option
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::particles::ParticlesConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document title. Falls back to `"<profile name> | Portfolio"`.
    pub title: Option<String>,
    /// Directory (relative to the source root) copied into the output root.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    pub navigation: NavigationConfig,
    pub colors: ColorScheme,
    pub typing: TypingConfig,
    pub reveal: RevealConfig,
    pub effects: EffectsConfig,
    pub particles: ParticlesConfig,
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            assets_dir: default_assets_dir(),
            navigation: NavigationConfig::default(),
            colors: ColorScheme::default(),
            typing: TypingConfig::default(),
            reveal: RevealConfig::default(),
            effects: EffectsConfig::default(),
            particles: ParticlesConfig::default(),
        }
    }
}

impl SiteConfig {
    /// The document title for a given profile name.
    pub fn page_title(&self, name: &str) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} | Portfolio", name))
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.typing;
        if t.type_ms == 0 || t.delete_ms == 0 || t.full_pause_ms == 0 || t.empty_pause_ms == 0 {
            return Err(ConfigError::Validation(
                "typing delays must be non-zero".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be between 0 and 1".into(),
            ));
        }
        if self.reveal.bottom_margin < 0.0 {
            return Err(ConfigError::Validation(
                "reveal.bottom_margin must not be negative".into(),
            ));
        }
        for (key, factor) in [
            ("effects.cursor_outer_ease", self.effects.cursor_outer_ease),
            ("effects.cursor_inner_ease", self.effects.cursor_inner_ease),
        ] {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be in (0, 1]"
                )));
            }
        }
        for (key, value) in self.colors.entries() {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} must be a hex color like #00d4ff, got '{value}'"
                )));
            }
        }
        self.particles.validate().map_err(ConfigError::Validation)?;
        Ok(())
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// How the sections are laid out across pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    /// Every section on `index.html`; nav links are anchors highlighted on scroll.
    #[default]
    SinglePage,
    /// One file per section; the current page's link is highlighted at build time.
    MultiPage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    pub mode: NavigationMode,
}

/// The site palette. A single dark scheme; the decorative effects assume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and placeholder background.
    pub surface: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_alt: String,
    /// Avatar fallback background.
    pub accent_deep: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#0a1628".to_string(),
            surface: "#0d1f3c".to_string(),
            text: "#e2e8f0".to_string(),
            text_muted: "#94a3b8".to_string(),
            accent: "#00d4ff".to_string(),
            accent_alt: "#5eead4".to_string(),
            accent_deep: "#0891b2".to_string(),
        }
    }
}

impl ColorScheme {
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("accent", self.accent.as_str()),
            ("accent_alt", self.accent_alt.as_str()),
            ("accent_deep", self.accent_deep.as_str()),
        ]
    }
}

/// Typing animation timings in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub full_pause_ms: u64,
    pub empty_pause_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            full_pause_ms: 2000,
            empty_pause_ms: 500,
        }
    }
}

/// Scroll reveal observer options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Fraction of the element that must intersect the viewport.
    pub threshold: f64,
    /// Pixels removed from the bottom of the viewport before testing.
    pub bottom_margin: f64,
    /// Delay between a skill item's reveal and its bar fill.
    pub bar_delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
            bar_delay_ms: 200,
        }
    }
}

/// Scroll- and pointer-driven effect factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EffectsConfig {
    pub background_parallax: f64,
    pub profile_parallax: f64,
    pub heading_parallax: f64,
    pub cursor_glow: bool,
    pub cursor_outer_ease: f64,
    pub cursor_inner_ease: f64,
    pub scrolled_offset: f64,
    pub section_lookahead: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            background_parallax: 0.3,
            profile_parallax: 0.15,
            heading_parallax: 0.05,
            cursor_glow: true,
            cursor_outer_ease: 0.08,
            cursor_inner_ease: 0.15,
            scrolled_offset: 50.0,
            section_lookahead: 100.0,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    if overlay.is_none() {
        log::debug!("no config.toml in {}, using defaults", root.display());
    }
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Document <title>. Defaults to "<profile name> | Portfolio".
# title = "Alex Morgan | Portfolio"

# Directory (inside the source directory) copied verbatim to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Navigation
# ---------------------------------------------------------------------------
[navigation]
# "single-page": all sections in index.html, nav highlights on scroll.
# "multi-page": one HTML file per section, nav highlights the current file.
mode = "single-page"

# ---------------------------------------------------------------------------
# Colors (hex only: #rgb or #rrggbb)
# ---------------------------------------------------------------------------
[colors]
background = "#0a1628"
surface = "#0d1f3c"       # Cards, project image placeholders
text = "#e2e8f0"
text_muted = "#94a3b8"
accent = "#00d4ff"
accent_alt = "#5eead4"
accent_deep = "#0891b2"   # Generated avatar background

# ---------------------------------------------------------------------------
# Typing animation (milliseconds, all non-zero)
# ---------------------------------------------------------------------------
[typing]
type_ms = 100
delete_ms = 50
full_pause_ms = 2000
empty_pause_ms = 500

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# Fraction of an element that must be visible before it is revealed.
threshold = 0.1
# Pixels shaved off the bottom of the viewport before testing.
bottom_margin = 50.0
# Delay before a revealed skill bar fills to its level.
bar_delay_ms = 200

# ---------------------------------------------------------------------------
# Parallax, cursor glow, navigation offsets
# ---------------------------------------------------------------------------
[effects]
background_parallax = 0.3
profile_parallax = 0.15
heading_parallax = 0.05
cursor_glow = true
# Exponential smoothing factors in (0, 1]; smaller trails further behind.
cursor_outer_ease = 0.08
cursor_inner_ease = 0.15
scrolled_offset = 50.0
section_lookahead = 100.0

# ---------------------------------------------------------------------------
# Particle background (requires particles.js to be loaded by the page)
# ---------------------------------------------------------------------------
[particles]
enabled = true
count = 80
density_area = 800
colors = ["#00d4ff", "#5eead4", "#0891b2"]
shape = "circle"
opacity = 0.5
opacity_min = 0.1
opacity_speed = 1.0
size = 3.0
size_min = 0.5
size_speed = 2.0
link_distance = 150.0
link_color = "#00d4ff"
link_opacity = 0.2
link_width = 1.0
move_speed = 1.5
out_mode = "out"
hover_mode = "grab"
click_mode = "push"
grab_distance = 140.0
grab_opacity = 0.5
push_count = 4
retina_detect = true
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorScheme) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-accent: {accent};
    --color-accent-alt: {accent_alt};
    --color-accent-deep: {accent_deep};
}}"#,
        background = colors.background,
        surface = colors.surface,
        text = colors.text,
        text_muted = colors.text_muted,
        accent = colors.accent,
        accent_alt = colors.accent_alt,
        accent_deep = colors.accent_deep,
    )
}
