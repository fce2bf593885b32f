/// Decides how evaluation reacts to malformed or suspicious input.
///
/// The permissive policy never fails after lexing: missing operands evaluate
/// to the empty value, reading an unknown variable defines it as the empty
/// value, and non-canonical operands are used as they are. The strict policy
/// reports each of these as an error instead.
///
/// # Example
/// ```
/// use digitwise::{Policy, run};
///
/// assert_eq!(run("y;", Policy::Permissive).unwrap().value.to_string(), "");
/// assert!(run("y;", Policy::Strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// Degrade silently to the empty value.
    #[default]
    Permissive,
    /// Report malformed input as an error.
    Strict,
}

impl Policy {
    /// Returns `true` for [`Policy::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
