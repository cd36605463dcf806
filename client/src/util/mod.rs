//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clock, DOM, `localStorage`)
//! from the session controller and components so both stay testable.

pub mod clock;
pub mod dom;
pub mod format;
pub mod storage;
