//! Scroll reveal.
//!
//! Elements with one of the [`OBSERVED_CLASSES`] start hidden and are
//! revealed the first time enough of them scrolls into view. A reveal is
//! permanent: scrolling away and back does nothing. Skill items also fill
//! their progress bar to the skill level, a short delay after the reveal.
//!
//! Intersection follows the browser's `IntersectionObserver` with
//! `threshold` and `rootMargin: 0px 0px -<bottom_margin>px 0px`: the
//! viewport's bottom edge is pulled up before the visible fraction is
//! measured.

use super::scheduler::VirtualScheduler;
use crate::config::RevealConfig;
use std::time::Duration;

/// Class names the observer attaches to.
pub const OBSERVED_CLASSES: &[&str] = &[
    "reveal",
    "reveal-left",
    "reveal-right",
    "timeline-item",
    "card",
    "skill-item",
];

/// Class added on reveal.
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Plain fade/slide-in element.
    Element,
    /// Skill item whose bar fills to `level` percent once revealed.
    SkillItem { level: u8 },
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

/// Fraction of `rect` inside the viewport after shrinking its bottom edge.
///
/// Zero-height elements count as fully visible while they sit inside the
/// shrunk viewport.
pub fn intersection_ratio(rect: Rect, viewport: Viewport, bottom_margin: f64) -> f64 {
    let root_top = viewport.scroll_y;
    let root_bottom = viewport.scroll_y + (viewport.height - bottom_margin).max(0.0);
    if rect.top > root_bottom || rect.bottom() < root_top {
        return 0.0;
    }
    if rect.height <= 0.0 {
        return 1.0;
    }
    let overlap = rect.bottom().min(root_bottom) - rect.top.max(root_top);
    (overlap / rect.height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
struct Target {
    id: String,
    kind: RevealKind,
    rect: Rect,
    visible: bool,
    bar_width: Option<String>,
}

/// Tracks reveal state for a set of elements.
pub struct RevealObserver {
    options: RevealConfig,
    targets: Vec<Target>,
    fills: VirtualScheduler<usize>,
}

impl RevealObserver {
    pub fn new(options: RevealConfig) -> Self {
        Self {
            options,
            targets: Vec::new(),
            fills: VirtualScheduler::new(),
        }
    }

    /// Start watching an element. Re-observing an id replaces its geometry
    /// but keeps its reveal state.
    pub fn observe(&mut self, id: impl Into<String>, kind: RevealKind, rect: Rect) {
        let id = id.into();
        match self.targets.iter_mut().find(|t| t.id == id) {
            Some(existing) => existing.rect = rect,
            None => self.targets.push(Target {
                id,
                kind,
                rect,
                visible: false,
                bar_width: None,
            }),
        }
    }

    /// Handle a scroll or resize. Returns the ids revealed by this call, in
    /// observation order.
    pub fn on_scroll(&mut self, viewport: Viewport) -> Vec<String> {
        let bar_delay = Duration::from_millis(self.options.bar_delay_ms);
        let mut revealed = Vec::new();
        for (index, target) in self.targets.iter_mut().enumerate() {
            if target.visible {
                continue;
            }
            let ratio = intersection_ratio(target.rect, viewport, self.options.bottom_margin);
            if ratio > 0.0 && ratio >= self.options.threshold {
                target.visible = true;
                if let RevealKind::SkillItem { .. } = target.kind {
                    self.fills.schedule(bar_delay, index);
                }
                revealed.push(target.id.clone());
            }
        }
        revealed
    }

    /// Let `elapsed` pass. Returns the ids whose bars filled.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<String> {
        let deadline = self.fills.now() + elapsed;
        let mut filled = Vec::new();
        while let Some((_, index)) = self.fills.pop_due(deadline) {
            let target = &mut self.targets[index];
            if let RevealKind::SkillItem { level } = target.kind {
                target.bar_width = Some(format!("{}%", level));
                filled.push(target.id.clone());
            }
        }
        self.fills.advance_to(deadline);
        filled
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.find(id).is_some_and(|t| t.visible)
    }

    /// Applied bar width (`"73%"`), once the fill delay has passed.
    pub fn bar_width(&self, id: &str) -> Option<&str> {
        self.find(id).and_then(|t| t.bar_width.as_deref())
    }

    pub fn visible_count(&self) -> usize {
        self.targets.iter().filter(|t| t.visible).count()
    }

    fn find(&self, id: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }
}
