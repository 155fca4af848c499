//! Directive parsing and signature checks.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, ToTokens};
use syn::{Error, ItemFn, Result, ReturnType, Signature, Type};

use crate::{codegen, transform};

/// Which handler an attribute installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Handle,
    HandleError,
    HandleReturn,
}

impl Directive {
    /// Attribute name as written by the user.
    pub fn name(self) -> &'static str {
        match self {
            Directive::Handle => "handle",
            Directive::HandleError => "handle_error",
            Directive::HandleReturn => "handle_return",
        }
    }

    /// Installer function in the runtime crate.
    pub fn installer(self) -> Ident {
        Ident::new(self.name(), Span::call_site())
    }
}

/// Expand `#[directive] fn ...` into a fn whose body runs under the
/// directive's installer.
pub fn expand(directive: Directive, attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    if !attr.is_empty() {
        return Err(Error::new_spanned(
            attr,
            format!("`#[{}]` takes no arguments", directive.name()),
        ));
    }

    let mut func: ItemFn = syn::parse2(item)?;
    check_signature(directive, &func.sig)?;

    let body = transform::rewrite_returns(*func.block);
    func.block = Box::new(codegen::wrap(directive, body));

    Ok(quote!(#func))
}

fn check_signature(directive: Directive, sig: &Signature) -> Result<()> {
    let name = directive.name();

    if let Some(asyncness) = &sig.asyncness {
        return Err(Error::new_spanned(
            asyncness,
            format!("`#[{}]` cannot be applied to an async fn", name),
        ));
    }
    if let Some(constness) = &sig.constness {
        return Err(Error::new_spanned(
            constness,
            format!("`#[{}]` cannot be applied to a const fn", name),
        ));
    }

    let returns_value = !is_unit(&sig.output);
    match directive {
        Directive::HandleReturn if returns_value => Err(Error::new_spanned(
            sig.output.to_token_stream(),
            "`#[handle_return]` is for fns without a return value; use `#[handle]` or `#[handle_error]`",
        )),
        Directive::Handle | Directive::HandleError if !returns_value => Err(Error::new_spanned(
            &sig.ident,
            format!(
                "`#[{}]` needs a return type that can receive an error; use `#[handle_return]` for fns without one",
                name
            ),
        )),
        _ => Ok(()),
    }
}

fn is_unit(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => true,
        ReturnType::Type(_, ty) => matches!(&**ty, Type::Tuple(t) if t.elems.is_empty()),
    }
}
