//! Cronometro: small developer utilities for measuring and batching work.
//!
//! Two independent pieces:
//!
//! - [`chunkify`]: a lazy iterator adaptor that splits any iterable into
//!   fixed-size groups.
//! - [`Timer`]: a hierarchical scope stopwatch. Entering a scope returns an
//!   RAII guard; dropping it records the elapsed time and appends a formatted
//!   line to the timer's report. Child timers nest under a parent and their
//!   lines are interleaved chronologically into the root timer's transcript.
//!
//! Duration rendering lives in [`format`] and is usable on its own.

pub mod chunk;
pub mod format;
pub mod timer;

pub use chunk::{chunkify, chunkify_at, Chunkify};
pub use format::{format_hours, format_mins, format_ms, format_time, DurationStyle};
pub use timer::{Timer, TimerGuard, TimerSnapshot};
