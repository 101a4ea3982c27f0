//! Particle background adapter.
//!
//! The animated background is drawn by particles.js, which the page loads on
//! its own. This module owns nothing but the configuration object handed to
//! `particlesJS('particles-js', …)`: a flat, TOML-friendly struct that is
//! reshaped into the nested JSON layout the library expects.
//!
//! The runtime only calls the library when `typeof particlesJS !== 'undefined'`,
//! so a page without the script simply has no particles.

use crate::config::is_hex_color;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Id of the element particles.js draws into.
pub const PARTICLES_ELEMENT_ID: &str = "particles-js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticlesConfig {
    pub enabled: bool,
    pub count: u32,
    pub density_area: u32,
    pub colors: Vec<String>,
    pub shape: String,
    pub opacity: f64,
    pub opacity_min: f64,
    pub opacity_speed: f64,
    pub size: f64,
    pub size_min: f64,
    pub size_speed: f64,
    pub link_distance: f64,
    pub link_color: String,
    pub link_opacity: f64,
    pub link_width: f64,
    pub move_speed: f64,
    pub out_mode: String,
    pub hover_mode: String,
    pub click_mode: String,
    pub grab_distance: f64,
    pub grab_opacity: f64,
    pub push_count: u32,
    pub retina_detect: bool,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 80,
            density_area: 800,
            colors: vec![
                "#00d4ff".to_string(),
                "#5eead4".to_string(),
                "#0891b2".to_string(),
            ],
            shape: "circle".to_string(),
            opacity: 0.5,
            opacity_min: 0.1,
            opacity_speed: 1.0,
            size: 3.0,
            size_min: 0.5,
            size_speed: 2.0,
            link_distance: 150.0,
            link_color: "#00d4ff".to_string(),
            link_opacity: 0.2,
            link_width: 1.0,
            move_speed: 1.5,
            out_mode: "out".to_string(),
            hover_mode: "grab".to_string(),
            click_mode: "push".to_string(),
            grab_distance: 140.0,
            grab_opacity: 0.5,
            push_count: 4,
            retina_detect: true,
        }
    }
}

impl ParticlesConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.colors.is_empty() {
            return Err("particles.colors must not be empty".into());
        }
        if let Some(bad) = self
            .colors
            .iter()
            .chain(std::iter::once(&self.link_color))
            .find(|c| !is_hex_color(c))
        {
            return Err(format!("particles colors must be hex, got '{bad}'"));
        }
        for (key, value) in [
            ("opacity", self.opacity),
            ("opacity_min", self.opacity_min),
            ("link_opacity", self.link_opacity),
            ("grab_opacity", self.grab_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("particles.{key} must be between 0 and 1"));
            }
        }
        if self.opacity_min > self.opacity || self.size_min > self.size {
            return Err("particles minimums must not exceed their base values".into());
        }
        Ok(())
    }

    /// The configuration object in particles.js layout, or `None` when disabled.
    pub fn to_particles_js(&self) -> Option<Value> {
        if !self.enabled {
            return None;
        }
        Some(json!({
            "particles": {
                "number": {
                    "value": self.count,
                    "density": { "enable": true, "value_area": self.density_area }
                },
                "color": { "value": self.colors },
                "shape": { "type": self.shape },
                "opacity": {
                    "value": self.opacity,
                    "random": true,
                    "anim": {
                        "enable": true,
                        "speed": self.opacity_speed,
                        "opacity_min": self.opacity_min,
                        "sync": false
                    }
                },
                "size": {
                    "value": self.size,
                    "random": true,
                    "anim": {
                        "enable": true,
                        "speed": self.size_speed,
                        "size_min": self.size_min,
                        "sync": false
                    }
                },
                "line_linked": {
                    "enable": true,
                    "distance": self.link_distance,
                    "color": self.link_color,
                    "opacity": self.link_opacity,
                    "width": self.link_width
                },
                "move": {
                    "enable": true,
                    "speed": self.move_speed,
                    "direction": "none",
                    "random": true,
                    "straight": false,
                    "out_mode": self.out_mode,
                    "bounce": false
                }
            },
            "interactivity": {
                "detect_on": "canvas",
                "events": {
                    "onhover": { "enable": true, "mode": self.hover_mode },
                    "onclick": { "enable": true, "mode": self.click_mode },
                    "resize": true
                },
                "modes": {
                    "grab": {
                        "distance": self.grab_distance,
                        "line_linked": { "opacity": self.grab_opacity }
                    },
                    "push": { "particles_nb": self.push_count }
                }
            },
            "retina_detect": self.retina_detect
        }))
    }
}
