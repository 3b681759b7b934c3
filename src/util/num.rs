/// Parses the text of an integer literal into an `i64`.
///
/// The lexer only hands over runs of ASCII digits, so the only failure mode
/// is a literal that does not fit in 64 bits.
///
/// ## Errors
/// Returns `Err(error)` if the literal is out of range (or otherwise not a
/// valid decimal integer).
///
/// ## Example
/// ```
/// use fortall::util::num::parse_literal_checked;
///
/// assert_eq!(parse_literal_checked("42", "too big!"), Ok(42));
/// assert!(parse_literal_checked("99999999999999999999", "too big!").is_err());
/// ```
pub fn parse_literal_checked<E>(literal: &str, error: E) -> Result<i64, E> {
    literal.parse::<i64>().map_err(|_| error)
}

/// Divides `lhs` by `rhs`, rounding the quotient toward negative infinity.
///
/// This is the semantics of the language's `/` operator: `7 / 2` is `3` and
/// `-7 / 2` is `-4`.
///
/// ## Returns
/// - `Some(quotient)` on success.
/// - `None` if `rhs` is zero or the quotient overflows (`i64::MIN / -1`).
///
/// ## Example
/// ```
/// use fortall::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(-8, 2), Some(-4));
/// assert_eq!(floor_div(7, 0), None);
/// assert_eq!(floor_div(i64::MIN, -1), None);
/// ```
#[must_use]
pub const fn floor_div(lhs: i64, rhs: i64) -> Option<i64> {
    let Some(quotient) = lhs.checked_div(rhs) else {
        return None;
    };
    if lhs % rhs != 0 && ((lhs < 0) != (rhs < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
