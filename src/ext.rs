//! Extension trait for conventional `Result` types.

use std::fmt;

use crate::error::Error;
use crate::signal::Unwind;
use crate::{Status, Val, Vals};

/// Adapters from a conventional `Result` into this crate's containers and
/// signals.
pub trait HandleExt<T> {
    /// Wrap into a [`Val`].
    fn into_val(self) -> Val<T>;

    /// Produce `Unwind::Error` carrying `"{ctx}: {err}"` on `Err`.
    ///
    /// Shorthand for `Val::from_result(r).or_error(ctx)`.
    fn or_error(self, ctx: impl fmt::Display) -> Result<T, Unwind>;
}

impl<T, E: Into<Error>> HandleExt<T> for Result<T, E> {
    #[inline]
    fn into_val(self) -> Val<T> {
        Val::from_result(self)
    }

    fn or_error(self, ctx: impl fmt::Display) -> Result<T, Unwind> {
        self.map_err(|e| Unwind::Error(e.into().context(ctx)))
    }
}

/// Adapter into [`Status`] for results without a value.
pub trait StatusExt {
    /// Wrap into a [`Status`].
    fn into_status(self) -> Status;
}

impl<E: Into<Error>> StatusExt for Result<(), E> {
    #[inline]
    fn into_status(self) -> Status {
        Status::from_result(self)
    }
}

/// Adapter into [`Vals`] for results over a pair.
pub trait ValsExt<T, U> {
    /// Wrap into a [`Vals`].
    fn into_vals(self) -> Vals<T, U>;
}

impl<T, U, E: Into<Error>> ValsExt<T, U> for Result<(T, U), E> {
    #[inline]
    fn into_vals(self) -> Vals<T, U> {
        Vals::from_result(self)
    }
}
