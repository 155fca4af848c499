//! Attribute macros for the handle-result crate.
//!
//! Each attribute installs one handler around a function body:
//!
//! - `#[handle]` -> `::handle_result::handle(|| ...)`
//! - `#[handle_error]` -> `::handle_result::handle_error(|| ...)`
//! - `#[handle_return]` -> `::handle_result::handle_return(|| ...)`
//!
//! The body becomes a closure yielding `Result<R, Unwind>` where `R` is the
//! function's return type, so `?` on a signal leaves the body and lands in
//! the handler.

use proc_macro::TokenStream;

mod codegen;
mod directive;
mod transform;

use directive::Directive;

/// Claim both signal kinds into the function's result container.
#[proc_macro_attribute]
pub fn handle(attr: TokenStream, item: TokenStream) -> TokenStream {
    directive::expand(Directive::Handle, attr.into(), item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Claim both signal kinds into the function's `Result<T, E>`.
#[proc_macro_attribute]
pub fn handle_error(attr: TokenStream, item: TokenStream) -> TokenStream {
    directive::expand(Directive::HandleError, attr.into(), item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Claim early-return signals in a function without a return value.
#[proc_macro_attribute]
pub fn handle_return(attr: TokenStream, item: TokenStream) -> TokenStream {
    directive::expand(Directive::HandleReturn, attr.into(), item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
