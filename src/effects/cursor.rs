//! Cursor glow: two soft markers trailing the pointer.
//!
//! Every frame each marker moves a fixed fraction of the way toward the
//! pointer (`p += (target - p) * ease`). The outer marker uses the smaller
//! factor, so it lags further behind. Both grow while the pointer is over an
//! interactive element, and both are hidden on touch-only devices.

use crate::config::EffectsConfig;

/// Selectors that enlarge the markers on hover.
pub const INTERACTIVE_SELECTORS: &[&str] = &["a", "button", ".card", ".skill-tag", ".social-link"];

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// One smoothing step toward `target`.
    pub fn ease_toward(self, target: Point, factor: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * factor,
            y: self.y + (target.y - self.y) * factor,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Marker positions after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowFrame {
    pub outer: Point,
    pub inner: Point,
}

pub struct CursorGlow {
    outer_ease: f64,
    inner_ease: f64,
    pointer: Point,
    outer: Point,
    inner: Point,
    hovering: bool,
    hidden: bool,
}

impl CursorGlow {
    /// `None` when the glow is disabled in config.
    pub fn new(effects: &EffectsConfig, touch_only: bool) -> Option<Self> {
        if !effects.cursor_glow {
            return None;
        }
        Some(Self {
            outer_ease: effects.cursor_outer_ease,
            inner_ease: effects.cursor_inner_ease,
            pointer: Point::default(),
            outer: Point::default(),
            inner: Point::default(),
            hovering: false,
            hidden: touch_only,
        })
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    /// Pointer entered (`true`) or left (`false`) an interactive element.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn frame(&mut self) -> GlowFrame {
        self.outer = self.outer.ease_toward(self.pointer, self.outer_ease);
        self.inner = self.inner.ease_toward(self.pointer, self.inner_ease);
        GlowFrame {
            outer: self.outer,
            inner: self.inner,
        }
    }
}
