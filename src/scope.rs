//! Per-thread registry of installed handlers.
//!
//! Every handler installs an [`Installed`] guard for the duration of its
//! body. [`Unwind::raise`](crate::Unwind::raise) consults the registry to
//! decide whether a native unwind can still be claimed on this thread.

use std::cell::Cell;
use std::fmt;

use crate::signal::Unwind;

/// One of the three handler directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Directive {
    Handle,
    HandleError,
    HandleReturn,
}

impl Directive {
    /// Whether this directive converts an `Unwind::Error` into its output.
    #[inline]
    pub(crate) fn claims_errors(self) -> bool {
        !matches!(self, Directive::HandleReturn)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Directive::Handle => "handle",
            Directive::HandleError => "handle_error",
            Directive::HandleReturn => "handle_return",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Depth {
    /// Handlers of any kind.
    pub(crate) returns: usize,
    /// Handlers that also claim error signals.
    pub(crate) errors: usize,
}

thread_local! {
    static ACTIVE: Cell<Depth> = const { Cell::new(Depth { returns: 0, errors: 0 }) };
}

/// Current depth of installed handlers on this thread.
pub(crate) fn depth() -> Depth {
    ACTIVE.with(Cell::get)
}

/// Whether some handler on this thread's stack would claim `signal`.
pub(crate) fn can_claim(signal: &Unwind) -> bool {
    let depth = depth();
    match signal {
        Unwind::Return(_) => depth.returns > 0,
        Unwind::Error(_) => depth.errors > 0,
    }
}

/// Scope guard registering a handler until it is dropped.
///
/// Dropping runs on every exit path, including unwinds that the handler
/// doesn't claim.
#[must_use]
pub(crate) struct Installed {
    directive: Directive,
}

impl Installed {
    pub(crate) fn new(directive: Directive) -> Self {
        ACTIVE.with(|active| {
            let mut depth = active.get();
            depth.returns += 1;
            if directive.claims_errors() {
                depth.errors += 1;
            }
            active.set(depth);
        });
        Self { directive }
    }
}

impl Drop for Installed {
    fn drop(&mut self) {
        let directive = self.directive;
        ACTIVE.with(|active| {
            let mut depth = active.get();
            depth.returns -= 1;
            if directive.claims_errors() {
                depth.errors -= 1;
            }
            active.set(depth);
        });
    }
}
