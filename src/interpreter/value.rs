/// The runtime value type and its conversions.
///
/// Variables only ever hold integers; strings exist as literal operands of
/// `write` and of comparisons.
pub mod core;
