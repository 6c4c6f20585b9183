// Common utilities shared between the user-facing macros
//
// This module contains:
// - bool_expr: Boolean expression parsing and lowering to type-level Bool
// - parse_utils: Field extraction and where-clause helpers

mod bool_expr;
mod parse_utils;

pub use bool_expr::*;
pub use parse_utils::*;
