//! Hierarchical scope stopwatch.
//!
//! A [`Timer`] measures one scope. Entering it with [`Timer::enter`] returns
//! an RAII [`TimerGuard`]; when the guard drops (on any exit path, including
//! unwinding) the elapsed time is recorded and an end line is appended to the
//! timer's report. Timers nest: [`Timer::child`] creates a node one level
//! deeper, and every line a descendant produces is also appended to the root
//! timer's report, yielding one flat chronological transcript at the root.
//!
//! ```
//! use cronometro::Timer;
//!
//! let timer = Timer::new("load").verbose(false);
//! {
//!     let scope = timer.enter();
//!     let parse = scope.child("parse").verbose(false);
//!     parse.scope(|| { /* work */ });
//! }
//! assert!(timer.report().contains("parse start"));
//! ```
//!
//! Handles are `Rc`-backed: cloning a `Timer` clones a handle to the same
//! node, not the node itself. Nothing here is `Send`; timers belong to the
//! thread that created them.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::trace;

use crate::format::{format_mins, format_ms, format_stamp, format_time, DurationStyle};


/// Column width reserved for the `[<elapsed>]` stamp in report lines.
const STAMP_WIDTH: usize = 11;
/// Indentation added per nesting level.
const INDENT: &str = "      ";
/// Glyph marking a nested entry; replaces the last two indent spaces.
const BRANCH: &str = "↳ ";

struct TimerInner {
    label: String,
    verbose: bool,
    style: DurationStyle,
    parent: Option<Weak<RefCell<TimerInner>>>,
    level: usize,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    report: String,
}

/// Handle to one timed scope node. Cloning shares the node.
#[derive(Clone)]
pub struct Timer {
    inner: Rc<RefCell<TimerInner>>,
}

impl Timer {
    /// Creates a root timer in the "not started" state.
    ///
    /// Verbose by default: start/end lines print to stdout as they are
    /// produced. Use [`Timer::verbose`] to silence stdout; the report string
    /// accumulates either way.
    pub fn new(label: impl Into<String>) -> Self {
        Self::build(label.into(), None)
    }

    fn build(label: String, parent: Option<&Timer>) -> Self {
        let level = parent.map_or(0, |p| p.level() + 1);
        Timer {
            inner: Rc::new(RefCell::new(TimerInner {
                label,
                verbose: true,
                style: DurationStyle::Auto,
                parent: parent.map(|p| Rc::downgrade(&p.inner)),
                level,
                started_at: None,
                finished_at: None,
                report: String::new(),
            })),
        }
    }

    /// Sets whether start/end lines print to stdout immediately.
    pub fn verbose(self, verbose: bool) -> Self {
        self.inner.borrow_mut().verbose = verbose;
        self
    }

    /// Sets how [`Timer::total`] renders the measured duration.
    pub fn duration_style(self, style: DurationStyle) -> Self {
        self.inner.borrow_mut().style = style;
        self
    }

    /// Creates a timer nested directly under this node.
    ///
    /// The child starts with default verbosity and duration style; its level
    /// is this node's level plus one. The child holds only a weak back-link,
    /// so it never keeps its parent alive.
    pub fn child(&self, label: impl Into<String>) -> Timer {
        Self::build(label.into(), Some(self))
    }

    /// Starts the scope: records the start instant and emits the start line.
    ///
    /// The returned guard ends the scope when dropped, on every exit path.
    /// It derefs to the timer so the scope body can read fields or create
    /// children.
    pub fn enter(&self) -> TimerGuard {
        {
            let mut inner = self.inner.borrow_mut();
            inner.started_at = Some(Instant::now());
            inner.finished_at = None;
        }
        let label = self.label();
        trace!(label = %label, level = self.level(), "scope start");
        self.emit(&format!("{label} start"));
        TimerGuard {
            timer: self.clone(),
        }
    }

    /// Runs `f` inside this timer's scope and returns its result.
    ///
    /// End-of-scope bookkeeping runs before the result (including an `Err` or
    /// a panic) reaches the caller.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }

    /// Wraps a callable so every invocation runs inside this timer's scope.
    ///
    /// When the timer's label is empty at wrap time, it takes the callable's
    /// name (the last path segment of its type name; exact for `fn` items,
    /// closures should be named explicitly). Each invocation reuses the same
    /// node, so
    /// only the most recent call's timing is retained, while the report keeps
    /// every line.
    pub fn wrap<R, F>(&self, mut f: F) -> impl FnMut() -> R
    where
        F: FnMut() -> R,
    {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.label.is_empty() {
                inner.label = callable_name::<F>().to_string();
            }
        }
        let timer = self.clone();
        move || {
            let _guard = timer.enter();
            f()
        }
    }

    /// The topmost ancestor, found by walking parent links.
    ///
    /// A root returns itself. If every strong handle to an ancestor has been
    /// dropped, the walk stops at the last node still alive.
    pub fn root(&self) -> Timer {
        let mut node = Rc::clone(&self.inner);
        loop {
            let parent = node.borrow().parent.as_ref().and_then(Weak::upgrade);
            match parent {
                Some(p) => node = p,
                None => break,
            }
        }
        Timer { inner: node }
    }

    /// The direct parent, if it is still alive.
    pub fn parent(&self) -> Option<Timer> {
        let parent = self.inner.borrow().parent.as_ref().and_then(Weak::upgrade);
        parent.map(|inner| Timer { inner })
    }

    /// True when this node has no (live) parent.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Display name of this node.
    pub fn label(&self) -> String {
        self.inner.borrow().label.clone()
    }

    /// Nesting depth; zero for a root.
    pub fn level(&self) -> usize {
        self.inner.borrow().level
    }

    /// Whether lines print to stdout as they are produced.
    pub fn is_verbose(&self) -> bool {
        self.inner.borrow().verbose
    }

    /// Instant the scope was last entered, if it has been.
    pub fn started_at(&self) -> Option<Instant> {
        self.inner.borrow().started_at
    }

    /// Instant the scope last exited, if it has.
    pub fn finished_at(&self) -> Option<Instant> {
        self.inner.borrow().finished_at
    }

    /// Accumulated transcript of this node's lines.
    ///
    /// For a root this also contains every descendant's lines, interleaved in
    /// the order they were produced. Intermediate nodes hold only their own
    /// lines.
    pub fn report(&self) -> String {
        self.inner.borrow().report.clone()
    }

    /// Measured duration of the last completed scope, zero before that.
    pub fn total_time(&self) -> Duration {
        let inner = self.inner.borrow();
        match (inner.started_at, inner.finished_at) {
            (Some(started), Some(finished)) => finished.duration_since(started),
            _ => Duration::ZERO,
        }
    }

    /// Measured duration rendered per this timer's [`DurationStyle`].
    pub fn total(&self) -> String {
        let style = self.inner.borrow().style;
        format_time(self.total_time().as_secs_f64(), style)
    }

    /// Measured duration forced into millisecond rendering.
    pub fn total_in_ms(&self) -> String {
        format_ms(self.total_time().as_secs_f64())
    }

    /// Measured duration forced into minutes/seconds rendering.
    pub fn total_in_mins(&self) -> String {
        format_mins(self.total_time().as_secs_f64())
    }

    /// Serializable record of this node's state.
    pub fn snapshot(&self) -> TimerSnapshot {
        let seconds = self.total_time().as_secs_f64();
        TimerSnapshot {
            label: self.label(),
            parent: self.parent().map(|p| p.label()),
            level: self.level(),
            seconds,
            total: self.total(),
        }
    }

    /// Appends one report line, mirrors it to the root, prints when verbose.
    fn emit(&self, text: &str) {
        let root = self.root();
        let since_root = root
            .started_at()
            .map(|started| Instant::now().saturating_duration_since(started))
            .unwrap_or_default();
        let line = format!("{} {}\n", line_prefix(since_root, self.level()), text);

        self.inner.borrow_mut().report.push_str(&line);
        if !Rc::ptr_eq(&self.inner, &root.inner) {
            root.inner.borrow_mut().report.push_str(&line);
        }
        if self.is_verbose() {
            print!("{line}");
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new("")
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self.parent().map(|p| p.label());
        f.debug_struct("Timer")
            .field("label", &self.label())
            .field("parent", &parent)
            .finish()
    }
}

/// Ends the scope of the [`Timer`] it was created from when dropped.
///
/// Records the finish instant and emits the end line with the formatted
/// total. Runs during unwinding too, so a panicking scope still gets its
/// duration recorded before the panic continues.
pub struct TimerGuard {
    timer: Timer,
}

impl Deref for TimerGuard {
    type Target = Timer;

    fn deref(&self) -> &Timer {
        &self.timer
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.timer.inner.borrow_mut().finished_at = Some(Instant::now());
        let label = self.timer.label();
        let total = self.timer.total();
        trace!(
            label = %label,
            elapsed_ms = self.timer.total_time().as_millis() as u64,
            "scope end"
        );
        self.timer.emit(&format!("{label} end ({total})"));
    }
}

/// One node's state, flattened for serialization into JSON reports.
#[derive(Debug, Clone, Serialize)]
pub struct TimerSnapshot {
    pub label: String,
    pub parent: Option<String>,
    pub level: usize,
    pub seconds: f64,
    pub total: String,
}

/// `[<elapsed since root start>]` padded to a fixed column, then one indent
/// block per nesting level with the branch glyph replacing the final two
/// spaces.
fn line_prefix(since_root: Duration, level: usize) -> String {
    let stamp = format!("[{}]", format_stamp(since_root.as_secs_f64()));
    let mut prefix = format!("{:<width$}", stamp, width = STAMP_WIDTH);
    if level >= 1 {
        let mut indent = INDENT.repeat(level);
        indent.truncate(indent.len() - 2);
        prefix.push_str(&indent);
        prefix.push_str(BRANCH);
    }
    prefix
}

/// Last path segment of a callable's type name: `crate::mod::foo` → `foo`.
fn callable_name<F>() -> &'static str {
    let full = std::any::type_name::<F>();
    full.rsplit("::").next().unwrap_or(full)
}
