//! Code generation for the wrapped body.

use syn::{parse_quote, Block};

use crate::directive::Directive;

/// Wrap `body` in the directive's installer:
///
/// ```text
/// { ::handle_result::<installer>(|| ::core::result::Result::Ok({ body })) }
/// ```
///
/// The closure's signature is deduced from the installer's bound, which pins
/// the error type of every `?` in the body to `Unwind`.
pub fn wrap(directive: Directive, body: Block) -> Block {
    let installer = directive.installer();
    parse_quote!({
        ::handle_result::#installer(|| ::core::result::Result::Ok(#body))
    })
}
