//! `pred!` - combine predicates into one `Bool` type.
//!
//! ```ignore
//! pred!(S::SaBoundary & !S::Planes)     // <<.. as Bool>::Not ..>
//! pred!(S::Dem | { MAX_PLANES > 0 })
//! ```

use proc_macro2::TokenStream as TokenStream2;

use crate::common::{bool_expr_to_type, BoolExpr};

pub fn expand_pred(expr: BoolExpr) -> TokenStream2 {
    bool_expr_to_type(&expr)
}
