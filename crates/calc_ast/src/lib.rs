//! Expression tree for the arithmetic subset understood by selcalc.

pub mod expression;

pub use expression::{AddOp, Expr, MulOp};
