/// Canonical printing.
///
/// Renders every compound expression fully parenthesized. The output parses
/// back to an equal tree and is what `Display` for `Expr` produces.
pub mod canonical;
/// Pretty printing.
///
/// Renders expressions with the fewest parentheses the grammar allows and
/// lays out `_let`, `_if` and `_fun` over several lines, indenting each
/// continuation line relative to the column its keyword was printed at.
pub mod pretty;
