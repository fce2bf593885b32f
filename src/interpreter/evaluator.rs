/// Core evaluation logic.
///
/// Defines the `Evaluator`, the `EvalResult` alias, and the handling of
/// leaves and missing operands.
pub mod core;

/// Operator evaluation.
///
/// Implements `+`, `-`, assignment and statement sequencing.
pub mod operators;

/// The variable table.
///
/// Stores the values bound by assignments during one program run.
pub mod variables;
