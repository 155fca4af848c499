//! `Vals<T, U>`: a pair of values, or an error.

use std::fmt;

use crate::base::impl_base;
use crate::error::Error;
use crate::handlers::Receiver;
use crate::signal::Unwind;

/// A result holding two values when ok, otherwise an error.
#[derive(Clone, Debug)]
#[must_use = "a Vals may hold an error that should be handled"]
pub struct Vals<T, U>(pub(crate) Result<(T, U), Error>);

impl_base!(Vals<T, U>, (T, U));

impl<T, U> Vals<T, U> {
    /// A new ok `Vals` holding `v0` and `v1`.
    #[inline]
    pub fn new(v0: T, v1: U) -> Self {
        Self(Ok((v0, v1)))
    }

    /// A new `Vals` holding `err`.
    #[inline]
    pub fn error(err: impl Into<Error>) -> Self {
        Self(Err(err.into()))
    }

    /// A new `Vals` holding an error built from format arguments.
    pub fn errorf(args: fmt::Arguments<'_>) -> Self {
        Self(Err(Error::msg(args)))
    }

    /// Adapt a conventional result over a pair.
    #[inline]
    pub fn from_result<E: Into<Error>>(r: Result<(T, U), E>) -> Self {
        r.into()
    }

    /// The held values, or the defaults if this holds an error.
    #[inline]
    pub fn or_use(self, d0: T, d1: U) -> (T, U) {
        self.0.unwrap_or((d0, d1))
    }

    /// The held values. Panics with `"{ctx}: {err}"` if this holds an error.
    #[track_caller]
    pub fn or_panic(self, ctx: &str) -> (T, U) {
        match self.0 {
            Ok(v) => v,
            Err(e) => panic!("{}: {}", ctx, e),
        }
    }

    /// The held values. If this holds an error, call `f` with it and
    /// produce `Unwind::Return`.
    pub fn or_do_and_return(self, f: impl FnOnce(&Error)) -> Result<(T, U), Unwind> {
        self.0.map_err(|e| {
            f(&e);
            Unwind::Return(e)
        })
    }

    /// The held values. If this holds an error, produce `Unwind::Error`
    /// carrying `"{ctx}: {err}"`.
    pub fn or_error(self, ctx: impl fmt::Display) -> Result<(T, U), Unwind> {
        self.0.map_err(|e| Unwind::Error(e.context(ctx)))
    }
}

impl<T: Default, U: Default> Receiver for Vals<T, U> {
    #[inline]
    fn receive(err: Error) -> Self {
        Self(Err(err))
    }

    #[inline]
    fn returned() -> Self {
        Self::default()
    }
}

impl<T: Default, U: Default> Default for Vals<T, U> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default(), U::default())
    }
}
