//! Decorative page effects as steppable state machines.
//!
//! Each effect owns its state in a small struct and advances only when told
//! to: by a step, a virtual-time advance, a scroll, or a frame. Nothing here
//! touches the DOM or a real clock. The embedded browser runtime
//! (`static/runtime.js`) performs the same transitions with the same
//! constants, which it receives from [`crate::runtime`].
//!
//! | Module | Effect |
//! |--------|--------|
//! | [`scheduler`] | Virtual-time task queue shared by the timed effects |
//! | [`typing`] | Role-cycling typing animation |
//! | [`reveal`] | One-way scroll reveal and skill bar fill |
//! | [`parallax`] | Scroll-linked offsets with a per-frame busy flag |
//! | [`cursor`] | Eased cursor-follow glow |

pub mod cursor;
pub mod parallax;
pub mod reveal;
pub mod scheduler;
pub mod typing;
