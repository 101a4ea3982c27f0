//! Typing animation for the hero's role line.
//!
//! Cycles through the profile's roles forever: type a role one character at
//! a time, pause, delete it one character at a time, pause, move to the next
//! role (wrapping around).
//!
//! ```text
//!            type char (100ms)            delete char (50ms)
//!             ┌──────┐                     ┌──────┐
//!             ▼      │   full (2000ms)     ▼      │   empty (500ms)
//!  ──▶ Typing ───────┴──▶ PausingFull ──▶ Deleting ┴──▶ PausingEmpty ──┐
//!        ▲                                                            │
//!        └──────────────────── next role ─────────────────────────────┘
//! ```
//!
//! [`TypingAnimator::step`] is the pure transition; [`TypingDriver`] runs it
//! on a [`VirtualScheduler`] so a timeline can be produced for any span of
//! virtual time.

use super::scheduler::VirtualScheduler;
use crate::config::TypingConfig;
use std::time::Duration;

/// Longest stretch one [`TypingDriver::advance`] call simulates.
pub const MAX_ADVANCE: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// Appending characters to the current role.
    Typing,
    /// The role is fully typed; deletion starts after the long pause.
    PausingFull,
    /// Removing characters.
    Deleting,
    /// The role is fully deleted and the index has advanced.
    PausingEmpty,
}

/// Output of a single step: the text to display and the wait before the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    roles: Vec<String>,
    timings: TypingConfig,
    role_index: usize,
    char_index: usize,
    phase: TypingPhase,
}

impl TypingAnimator {
    /// `None` when there are no roles to show.
    pub fn new(roles: Vec<String>, timings: TypingConfig) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            roles,
            timings,
            role_index: 0,
            char_index: 0,
            phase: TypingPhase::Typing,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    /// Characters of the current role that are on screen.
    pub fn displayed(&self) -> String {
        self.roles[self.role_index]
            .chars()
            .take(self.char_index)
            .collect()
    }

    /// Perform one transition.
    ///
    /// An empty role satisfies both "fully typed" and "fully deleted" at
    /// once, so it shows as an empty line for the two pauses.
    pub fn step(&mut self) -> TypingFrame {
        let role_len = self.roles[self.role_index].chars().count();
        let delay_ms = match self.phase {
            TypingPhase::Typing | TypingPhase::PausingEmpty => {
                if self.char_index < role_len {
                    self.char_index += 1;
                }
                if self.char_index == role_len {
                    self.phase = TypingPhase::PausingFull;
                    self.timings.full_pause_ms
                } else {
                    self.phase = TypingPhase::Typing;
                    self.timings.type_ms
                }
            }
            TypingPhase::PausingFull | TypingPhase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.phase = TypingPhase::PausingEmpty;
                    self.timings.empty_pause_ms
                } else {
                    self.phase = TypingPhase::Deleting;
                    self.timings.delete_ms
                }
            }
        };

        // After the wrap the index already points at the next role; the text
        // on screen is empty either way.
        let text = if self.phase == TypingPhase::PausingEmpty {
            String::new()
        } else {
            self.displayed()
        };
        TypingFrame {
            text,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Drives a [`TypingAnimator`] on virtual time.
pub struct TypingDriver {
    animator: TypingAnimator,
    scheduler: VirtualScheduler<()>,
}

impl TypingDriver {
    /// The first step is due immediately.
    pub fn new(animator: TypingAnimator) -> Self {
        let mut scheduler = VirtualScheduler::new();
        scheduler.schedule(Duration::ZERO, ());
        Self {
            animator,
            scheduler,
        }
    }

    pub fn animator(&self) -> &TypingAnimator {
        &self.animator
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Advance virtual time by `elapsed`, returning every text change with
    /// the instant it happened. `elapsed` is capped at [`MAX_ADVANCE`].
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(Duration, String)> {
        let deadline = self.scheduler.now().saturating_add(elapsed.min(MAX_ADVANCE));
        let mut frames = Vec::new();
        while let Some((at, ())) = self.scheduler.pop_due(deadline) {
            let frame = self.animator.step();
            self.scheduler.schedule(frame.delay, ());
            frames.push((at, frame.text));
        }
        self.scheduler.advance_to(deadline);
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(roles: &[&str]) -> TypingAnimator {
        TypingAnimator::new(
            roles.iter().map(|r| r.to_string()).collect(),
            TypingConfig::default(),
        )
        .unwrap()
    }

    fn texts(animator: &mut TypingAnimator, steps: usize) -> Vec<String> {
        (0..steps).map(|_| animator.step().text).collect()
    }

    #[test]
    fn empty_role_list_has_no_animator() {
        assert!(TypingAnimator::new(vec![], TypingConfig::default()).is_none());
    }

    #[test]
    fn full_cycle_wraps_to_first_role() {
        let mut a = animator(&["A", "BB"]);
        assert_eq!(
            texts(&mut a, 7),
            vec!["A", "", "B", "BB", "B", "", "A"]
        );
    }

    #[test]
    fn delays_follow_phase() {
        let mut a = animator(&["A", "BB"]);
        let delays: Vec<u64> = (0..6)
            .map(|_| a.step().delay.as_millis() as u64)
            .collect();
        // "A" typed → full pause; deleted → empty pause; "B" → type delay;
        // "BB" → full pause; "B" → delete delay; "" → empty pause.
        assert_eq!(delays, vec![2000, 500, 100, 2000, 50, 500]);
    }

    #[test]
    fn phases_visit_all_states() {
        let mut a = animator(&["AB"]);
        assert_eq!(a.phase(), TypingPhase::Typing);
        a.step();
        assert_eq!(a.phase(), TypingPhase::Typing);
        a.step();
        assert_eq!(a.phase(), TypingPhase::PausingFull);
        a.step();
        assert_eq!(a.phase(), TypingPhase::Deleting);
        a.step();
        assert_eq!(a.phase(), TypingPhase::PausingEmpty);
    }

    #[test]
    fn role_index_wraps() {
        let mut a = animator(&["A", "B", "C"]);
        let mut seen = Vec::new();
        for _ in 0..8 {
            a.step();
            if a.phase() == TypingPhase::PausingEmpty {
                seen.push(a.role_index());
            }
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn empty_role_is_handled() {
        let mut a = animator(&["", "X"]);
        let first = a.step();
        assert_eq!(first.text, "");
        assert_eq!(a.phase(), TypingPhase::PausingFull);
        assert_eq!(first.delay, Duration::from_millis(2000));
        let second = a.step();
        assert_eq!(second.text, "");
        assert_eq!(a.phase(), TypingPhase::PausingEmpty);
        assert_eq!(a.role_index(), 1);
        assert_eq!(a.step().text, "X");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut a = animator(&["héé"]);
        assert_eq!(texts(&mut a, 4), vec!["h", "hé", "héé", "hé"]);
    }

    #[test]
    fn custom_timings() {
        let timings = TypingConfig {
            type_ms: 10,
            delete_ms: 5,
            full_pause_ms: 20,
            empty_pause_ms: 15,
        };
        let mut a = TypingAnimator::new(vec!["ab".into()], timings).unwrap();
        assert_eq!(a.step().delay, Duration::from_millis(10));
        assert_eq!(a.step().delay, Duration::from_millis(20));
        assert_eq!(a.step().delay, Duration::from_millis(5));
        assert_eq!(a.step().delay, Duration::from_millis(15));
    }

    // =========================================================================
    // Driver on virtual time
    // =========================================================================

    #[test]
    fn driver_first_step_is_immediate() {
        let mut d = TypingDriver::new(animator(&["Hi"]));
        let frames = d.advance(Duration::ZERO);
        assert_eq!(frames, vec![(Duration::ZERO, "H".to_string())]);
    }

    #[test]
    fn driver_timeline_for_two_roles() {
        let mut d = TypingDriver::new(animator(&["A", "BB"]));
        let frames = d.advance(Duration::from_millis(5000));
        let ms = |n| Duration::from_millis(n);
        assert_eq!(
            frames,
            vec![
                (ms(0), "A".to_string()),
                (ms(2000), String::new()),
                (ms(2500), "B".to_string()),
                (ms(2600), "BB".to_string()),
                (ms(4600), "B".to_string()),
                (ms(4650), String::new()),
            ]
        );
        assert_eq!(d.now(), ms(5000));
        // Next role after the empty pause: "A" again at 5150.
        assert_eq!(d.advance(ms(150)), vec![(ms(5150), "A".to_string())]);
    }

    #[test]
    fn driver_never_terminates() {
        let mut d = TypingDriver::new(animator(&["abc", "de"]));
        for _ in 0..50 {
            assert!(!d.advance(Duration::from_secs(10)).is_empty());
        }
    }

    #[test]
    fn driver_split_advances_match_single_advance() {
        let mut whole = TypingDriver::new(animator(&["Rust", "Go"]));
        let mut split = TypingDriver::new(animator(&["Rust", "Go"]));
        let expected = whole.advance(Duration::from_millis(9000));
        let mut actual = Vec::new();
        for _ in 0..90 {
            actual.extend(split.advance(Duration::from_millis(100)));
        }
        assert_eq!(actual, expected);
    }

    #[test]
    fn driver_caps_one_advance() {
        let mut d = TypingDriver::new(animator(&["Hi"]));
        let frames = d.advance(Duration::MAX);
        assert_eq!(d.now(), MAX_ADVANCE);
        assert!(frames.iter().all(|(at, _)| *at <= MAX_ADVANCE));

        d.advance(Duration::MAX);
        assert_eq!(d.now(), MAX_ADVANCE * 2);
    }
}
