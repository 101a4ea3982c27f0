//! Scroll-linked parallax offsets.
//!
//! Scroll events can arrive many times per paint. A busy flag makes sure at
//! most one frame is requested until that frame has run; the frame then
//! reads the current geometry and computes every offset at once.

use crate::config::EffectsConfig;

/// Geometry of an element relative to the viewport (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub top: f64,
    pub bottom: f64,
}

/// Everything a frame needs to read.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// The hero section, if the page has one.
    pub hero: Option<ClientRect>,
    /// Section headings in document order.
    pub headings: &'a [ClientRect],
}

/// Vertical translations to apply, in pixels.
///
/// `None` means "leave the element's current transform alone".
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxFrame {
    pub background: f64,
    pub profile: Option<f64>,
    pub headings: Vec<Option<f64>>,
}

pub struct Parallax {
    background_factor: f64,
    profile_factor: f64,
    heading_factor: f64,
    ticking: bool,
}

impl Parallax {
    pub fn new(effects: &EffectsConfig) -> Self {
        Self {
            background_factor: effects.background_parallax,
            profile_factor: effects.profile_parallax,
            heading_factor: effects.heading_parallax,
            ticking: false,
        }
    }

    /// Whether a frame is requested and not yet run.
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Handle a scroll event. Returns `true` when a new frame must be
    /// requested, `false` when one is already pending.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Run the requested frame.
    pub fn frame(&mut self, input: FrameInput<'_>) -> ParallaxFrame {
        self.ticking = false;

        let profile = input
            .hero
            .filter(|hero| hero.bottom > 0.0)
            .map(|_| input.scroll_y * self.profile_factor);

        let headings = input
            .headings
            .iter()
            .map(|rect| {
                (rect.top < input.viewport_height && rect.bottom > 0.0)
                    .then(|| -(input.viewport_height - rect.top) * self.heading_factor)
            })
            .collect();

        ParallaxFrame {
            background: input.scroll_y * self.background_factor,
            profile,
            headings,
        }
    }
}

/// CSS transform for a vertical offset.
pub fn translate_y(px: f64) -> String {
    format!("translateY({}px)", px)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parallax() -> Parallax {
        Parallax::new(&EffectsConfig::default())
    }

    fn input<'a>(scroll_y: f64, hero: Option<ClientRect>, headings: &'a [ClientRect]) -> FrameInput<'a> {
        FrameInput {
            scroll_y,
            viewport_height: 800.0,
            hero,
            headings,
        }
    }

    #[test]
    fn busy_flag_limits_frame_requests() {
        let mut p = parallax();
        assert!(p.on_scroll());
        assert!(!p.on_scroll());
        assert!(!p.on_scroll());
        assert!(p.is_ticking());
        p.frame(input(0.0, None, &[]));
        assert!(!p.is_ticking());
        assert!(p.on_scroll());
    }

    #[test]
    fn background_moves_at_thirty_percent() {
        let frame = parallax().frame(input(1000.0, None, &[]));
        assert!((frame.background - 300.0).abs() < 1e-9);
    }

    #[test]
    fn profile_follows_while_hero_visible() {
        let hero = ClientRect {
            top: -200.0,
            bottom: 400.0,
        };
        let frame = parallax().frame(input(200.0, Some(hero), &[]));
        assert!((frame.profile.unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn profile_frozen_once_hero_scrolled_past() {
        let hero = ClientRect {
            top: -900.0,
            bottom: -100.0,
        };
        assert_eq!(parallax().frame(input(900.0, Some(hero), &[])).profile, None);
        assert_eq!(parallax().frame(input(900.0, None, &[])).profile, None);
    }

    #[test]
    fn headings_offset_only_in_viewport() {
        let headings = [
            ClientRect {
                top: 600.0,
                bottom: 650.0,
            },
            ClientRect {
                top: 900.0,
                bottom: 950.0,
            },
            ClientRect {
                top: -100.0,
                bottom: -50.0,
            },
        ];
        let frame = parallax().frame(input(0.0, None, &headings));
        assert_eq!(frame.headings.len(), 3);
        // (800 - 600) * 0.05 = 10, applied upwards.
        assert!((frame.headings[0].unwrap() + 10.0).abs() < 1e-9);
        assert_eq!(frame.headings[1], None);
        assert_eq!(frame.headings[2], None);
    }

    #[test]
    fn translate_y_formats_css() {
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
        assert_eq!(translate_y(-10.0), "translateY(-10px)");
    }
}
