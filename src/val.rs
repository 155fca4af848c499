//! `Val<T>`: one value, or an error.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::base::impl_base;
use crate::error::Error;
use crate::handlers::Receiver;
use crate::signal::Unwind;

/// A result holding one value when ok, otherwise an error.
///
/// ```
/// use handle_result::{handle, Val};
///
/// fn calc_a() -> Val<i32> {
///     Val::new(2)
/// }
///
/// #[handle]
/// fn a_plus_1() -> Val<i32> {
///     let a = calc_a().or_error("couldn't calculate a")?;
///     Val::new(a + 1)
/// }
///
/// assert_eq!(a_plus_1().or_use(-1), 3);
/// ```
#[derive(Clone, Debug)]
#[must_use = "a Val may hold an error that should be handled"]
pub struct Val<T>(pub(crate) Result<T, Error>);

impl_base!(Val<T>, T);

impl<T> Val<T> {
    /// A new ok `Val` holding `v`.
    #[inline]
    pub fn new(v: T) -> Self {
        Self(Ok(v))
    }

    /// A new `Val` holding `err`.
    #[inline]
    pub fn error(err: impl Into<Error>) -> Self {
        Self(Err(err.into()))
    }

    /// A new `Val` holding an error built from format arguments.
    pub fn errorf(args: fmt::Arguments<'_>) -> Self {
        Self(Err(Error::msg(args)))
    }

    /// Adapt a conventional result: `Err` gives an error `Val`, `Ok` wraps
    /// the value.
    #[inline]
    pub fn from_result<E: Into<Error>>(r: Result<T, E>) -> Self {
        r.into()
    }

    /// The element of `items` at `index`, or an error stating the index and
    /// the slice length when out of bounds.
    pub fn from_slice(items: &[T], index: usize) -> Self
    where
        T: Clone,
    {
        match items.get(index) {
            Some(v) => Self::new(v.clone()),
            None => Self::errorf(format_args!(
                "Index {} out of bounds for slice of len {}",
                index,
                items.len()
            )),
        }
    }

    /// The value stored in `map` under `key`, or an error naming the key.
    pub fn from_map<K, Q, S>(map: &HashMap<K, T, S>, key: &Q) -> Self
    where
        T: Clone,
        K: Borrow<Q> + Hash + Eq,
        Q: Hash + Eq + fmt::Display + ?Sized,
        S: BuildHasher,
    {
        match map.get(key) {
            Some(v) => Self::new(v.clone()),
            None => Self::errorf(format_args!("Map had no value for key {}", key)),
        }
    }

    /// The held value, or `default` if this holds an error.
    #[inline]
    pub fn or_use(self, default: T) -> T {
        self.0.unwrap_or(default)
    }

    /// The held value. Panics with `"{ctx}: {err}"` if this holds an error.
    ///
    /// No handler claims this panic.
    #[track_caller]
    pub fn or_panic(self, ctx: &str) -> T {
        match self.0 {
            Ok(v) => v,
            Err(e) => panic!("{}: {}", ctx, e),
        }
    }

    /// The held value. If this holds an error, call `f` with it and produce
    /// `Unwind::Return`.
    pub fn or_do_and_return(self, f: impl FnOnce(&Error)) -> Result<T, Unwind> {
        self.0.map_err(|e| {
            f(&e);
            Unwind::Return(e)
        })
    }

    /// The held value. If this holds an error, produce `Unwind::Error`
    /// carrying `"{ctx}: {err}"`.
    pub fn or_error(self, ctx: impl fmt::Display) -> Result<T, Unwind> {
        self.0.map_err(|e| Unwind::Error(e.context(ctx)))
    }
}

impl<T: Default> Receiver for Val<T> {
    #[inline]
    fn receive(err: Error) -> Self {
        Self(Err(err))
    }

    #[inline]
    fn returned() -> Self {
        Self::default()
    }
}

impl<T: Default> Default for Val<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}
