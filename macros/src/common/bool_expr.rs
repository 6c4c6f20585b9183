// Predicate expressions for `pred!`

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Token, Type};

// =============================================================================
// Predicate Expression
// =============================================================================

/// A predicate combination as written in `pred!(..)`.
#[derive(Clone, Debug)]
pub enum BoolExpr {
    /// A type implementing `Bool` (`S::SaBoundary`, `Present`, ...)
    Pred(Type),
    /// `true` / `false`
    Lit(bool),
    /// `{ const expr }`
    Const(syn::Block),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut expr = input.parse::<Conjunction>()?.0;
        while eat(input, Op::Or)? {
            let rhs = input.parse::<Conjunction>()?.0;
            expr = BoolExpr::Or(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }
}

struct Conjunction(BoolExpr);

impl Parse for Conjunction {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut expr = input.parse::<Operand>()?.0;
        while eat(input, Op::And)? {
            let rhs = input.parse::<Operand>()?.0;
            expr = BoolExpr::And(Box::new(expr), Box::new(rhs));
        }
        Ok(Conjunction(expr))
    }
}

#[derive(Clone, Copy)]
enum Op {
    And,
    Or,
}

/// Consume a binary operator. `&&` and `||` read the same as `&` and `|`.
fn eat(input: ParseStream, op: Op) -> syn::Result<bool> {
    match op {
        Op::And if input.peek(Token![&&]) => input.parse::<Token![&&]>().map(|_| true),
        Op::And if input.peek(Token![&]) => input.parse::<Token![&]>().map(|_| true),
        Op::Or if input.peek(Token![||]) => input.parse::<Token![||]>().map(|_| true),
        Op::Or if input.peek(Token![|]) => input.parse::<Token![|]>().map(|_| true),
        _ => Ok(false),
    }
}

/// `!operand`, `( expr )`, a literal, a const block or a type.
struct Operand(BoolExpr);

impl Parse for Operand {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expr = if input.peek(Token![!]) {
            input.parse::<Token![!]>()?;
            BoolExpr::Not(Box::new(input.parse::<Operand>()?.0))
        } else if input.peek(syn::token::Paren) {
            let inner;
            syn::parenthesized!(inner in input);
            inner.parse()?
        } else if input.peek(syn::LitBool) {
            BoolExpr::Lit(input.parse::<syn::LitBool>()?.value)
        } else if input.peek(syn::token::Brace) {
            BoolExpr::Const(input.parse()?)
        } else {
            BoolExpr::Pred(input.parse()?)
        };
        Ok(Operand(expr))
    }
}

// =============================================================================
// Lowering
// =============================================================================

/// The `Bool` type an expression denotes.
pub fn bool_expr_to_type(expr: &BoolExpr) -> TokenStream {
    match expr {
        BoolExpr::Pred(ty) => quote! { #ty },
        BoolExpr::Lit(true) => quote! { ::cond_params::Present },
        BoolExpr::Lit(false) => quote! { ::cond_params::Absent },
        BoolExpr::Const(block) => quote! { ::cond_params::Truth<#block> },
        BoolExpr::Not(operand) => {
            let operand = bool_expr_to_type(operand);
            quote! { <#operand as ::cond_params::Bool>::Not }
        }
        BoolExpr::And(lhs, rhs) | BoolExpr::Or(lhs, rhs) => {
            let op = if matches!(expr, BoolExpr::And(..)) { quote!(And) } else { quote!(Or) };
            let (lhs, rhs) = (bool_expr_to_type(lhs), bool_expr_to_type(rhs));
            quote! { <#lhs as ::cond_params::Bool>::#op<#rhs> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> BoolExpr {
        syn::parse_str(src).expect("predicate should parse")
    }

    #[test]
    fn test_precedence() {
        // `&` binds tighter than `|`
        match parse("A | B & !C") {
            BoolExpr::Or(lhs, rhs) => {
                assert!(matches!(*lhs, BoolExpr::Pred(_)));
                match *rhs {
                    BoolExpr::And(_, not_c) => assert!(matches!(*not_c, BoolExpr::Not(_))),
                    other => panic!("expected And, got {other:?}"),
                }
            }
            other => panic!("expected Or, got {other:?}"),
        }
    }

    #[test]
    fn test_doubled_operators() {
        match parse("A && !B || C") {
            BoolExpr::Or(lhs, rhs) => {
                assert!(matches!(*lhs, BoolExpr::And(_, _)));
                assert!(matches!(*rhs, BoolExpr::Pred(_)));
            }
            other => panic!("expected Or, got {other:?}"),
        }
        let out = bool_expr_to_type(&parse("S::A && S::B")).to_string().replace(' ', "");
        assert_eq!(out, "<S::Aas::cond_params::Bool>::And<S::B>");
    }

    #[test]
    fn test_literals_and_blocks() {
        assert!(matches!(parse("true"), BoolExpr::Lit(true)));
        assert!(matches!(parse("{ N > 2 }"), BoolExpr::Const(_)));
        assert!(matches!(parse("(S::Sa)"), BoolExpr::Pred(_)));
    }

    #[test]
    fn test_lowering() {
        let out = bool_expr_to_type(&parse("!false")).to_string().replace(' ', "");
        assert_eq!(out, "<::cond_params::Absentas::cond_params::Bool>::Not");
    }
}
