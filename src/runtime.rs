//! Boot payload for the embedded browser runtime.
//!
//! `static/runtime.js` is the page-time half of [`crate::effects`] and
//! [`crate::nav`]. It never hardcodes a delay or factor: everything it needs
//! is serialized here into a JSON block inside the page,
//!
//! ```html
//! <script id="folio-boot" type="application/json">{"mode":"single-page",...}</script>
//! ```
//!
//! which the runtime parses on `DOMContentLoaded`.

use crate::config::{EffectsConfig, NavigationMode, RevealConfig, SiteConfig, TypingConfig};
use crate::content::Content;
use crate::effects::cursor::INTERACTIVE_SELECTORS;
use crate::effects::reveal::{OBSERVED_CLASSES, VISIBLE_CLASS};
use crate::particles::PARTICLES_ELEMENT_ID;
use serde::Serialize;
use serde_json::Value;

/// Element id of the boot JSON block.
pub const BOOT_ELEMENT_ID: &str = "folio-boot";

/// Everything the runtime reads at startup.
#[derive(Debug, Serialize)]
pub struct Boot<'a> {
    pub mode: NavigationMode,
    pub roles: &'a [String],
    pub typing: &'a TypingConfig,
    pub reveal: RevealBoot<'a>,
    pub effects: &'a EffectsConfig,
    pub interactive: &'static [&'static str],
    /// particles.js argument pair, absent when particles are disabled.
    pub particles: Option<ParticlesBoot>,
}

#[derive(Debug, Serialize)]
pub struct RevealBoot<'a> {
    #[serde(flatten)]
    pub options: &'a RevealConfig,
    pub observed: &'static [&'static str],
    pub visible_class: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ParticlesBoot {
    pub element: &'static str,
    pub config: Value,
}

impl<'a> Boot<'a> {
    pub fn new(content: &'a Content, config: &'a SiteConfig) -> Self {
        Self {
            mode: config.navigation.mode,
            roles: &content.profile.roles,
            typing: &config.typing,
            reveal: RevealBoot {
                options: &config.reveal,
                observed: OBSERVED_CLASSES,
                visible_class: VISIBLE_CLASS,
            },
            effects: &config.effects,
            interactive: INTERACTIVE_SELECTORS,
            particles: config.particles.to_particles_js().map(|config| ParticlesBoot {
                element: PARTICLES_ELEMENT_ID,
                config,
            }),
        }
    }
}

/// Serialize the boot payload for inlining in a `<script>` element.
///
/// `<` is written as `\u003c` so content strings can never close the
/// script element early.
pub fn boot_json(boot: &Boot<'_>) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(boot)?.replace('<', "\\u003c"))
}
