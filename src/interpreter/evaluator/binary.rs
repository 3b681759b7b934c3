/// Operator dispatch.
pub mod core;

/// Checked integer arithmetic for `+`, `-`, `*` and `/`.
pub mod arithmetic;

/// Relational operators over integers and strings.
pub mod comparison;
