//! `Status`: ok, or an error.

use std::fmt;

use crate::base::impl_base;
use crate::error::Error;
use crate::handlers::Receiver;
use crate::signal::Unwind;

/// The simplest result: ok, or an error.
///
/// Most useful as the return value of a function that produces nothing but
/// may fail:
///
/// ```
/// use handle_result::{handle, Status};
///
/// #[handle]
/// fn flush(pending: usize) -> Status {
///     if pending > 3 {
///         Status::errorf(format_args!("{} writes pending", pending)).or_error("flush")?;
///     }
///     Status::ok()
/// }
///
/// assert!(flush(1).is_ok());
/// assert_eq!(flush(5).message(), "flush: 5 writes pending");
/// ```
#[derive(Clone, Debug)]
#[must_use = "a Status may hold an error that should be handled"]
pub struct Status(pub(crate) Result<(), Error>);

impl_base!(Status<>, ());

impl Status {
    /// A new ok `Status`.
    #[inline]
    pub fn ok() -> Self {
        Self(Ok(()))
    }

    /// A new `Status` holding `err`.
    #[inline]
    pub fn error(err: impl Into<Error>) -> Self {
        Self(Err(err.into()))
    }

    /// A new `Status` holding an error built from format arguments.
    pub fn errorf(args: fmt::Arguments<'_>) -> Self {
        Self(Err(Error::msg(args)))
    }

    /// Adapt a conventional result: `Err` gives an error `Status`, `Ok` an
    /// ok one.
    #[inline]
    pub fn from_result<E: Into<Error>>(r: Result<(), E>) -> Self {
        r.into()
    }

    /// If this holds an error, call `f` with it. Never unwinds.
    pub fn or_do(self, f: impl FnOnce(&Error)) {
        if let Err(e) = &self.0 {
            f(e);
        }
    }

    /// Panic with `"{ctx}: {err}"` if this holds an error.
    ///
    /// No handler claims this panic.
    #[track_caller]
    pub fn or_panic(self, ctx: &str) {
        if let Err(e) = self.0 {
            panic!("{}: {}", ctx, e);
        }
    }

    /// If this holds an error, call `f` with it and produce
    /// `Unwind::Return`. Use with `?` under any handler.
    pub fn or_do_and_return(self, f: impl FnOnce(&Error)) -> Result<(), Unwind> {
        self.0.map_err(|e| {
            f(&e);
            Unwind::Return(e)
        })
    }

    /// If this holds an error, produce `Unwind::Error` carrying
    /// `"{ctx}: {err}"`. Use with `?` under `handle` or `handle_error`.
    pub fn or_error(self, ctx: impl fmt::Display) -> Result<(), Unwind> {
        self.0.map_err(|e| Unwind::Error(e.context(ctx)))
    }
}

impl Receiver for Status {
    #[inline]
    fn receive(err: Error) -> Self {
        Self(Err(err))
    }

    #[inline]
    fn returned() -> Self {
        Self::ok()
    }
}

impl Default for Status {
    #[inline]
    fn default() -> Self {
        Self::ok()
    }
}
