//! `return` rewriting for wrapped bodies.
//!
//! Once the body runs inside a closure yielding `Result<R, Unwind>`, a
//! `return x` must become `return Ok(x)`. Closures, async blocks and nested
//! items have their own return scope and are left alone, as are macro
//! invocations whose tokens are never parsed.

use quote::quote_spanned;
use syn::spanned::Spanned;
use syn::visit_mut::{self, VisitMut};
use syn::{parse_quote_spanned, Block, Expr, Item};

/// Rewrite every `return` that exits `body` itself.
pub fn rewrite_returns(mut body: Block) -> Block {
    ReturnRewriter.visit_block_mut(&mut body);
    body
}

struct ReturnRewriter;

impl VisitMut for ReturnRewriter {
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Closure(_) | Expr::Async(_) => {}
            Expr::Return(ret) => {
                let span = ret.span();
                let value = match ret.expr.take() {
                    Some(mut inner) => {
                        self.visit_expr_mut(&mut inner);
                        quote_spanned!(span=> #inner)
                    }
                    None => quote_spanned!(span=> ()),
                };
                ret.expr = Some(Box::new(parse_quote_spanned!(span=>
                    ::core::result::Result::Ok(#value)
                )));
            }
            _ => visit_mut::visit_expr_mut(self, expr),
        }
    }

    fn visit_item_mut(&mut self, _item: &mut Item) {}
}
