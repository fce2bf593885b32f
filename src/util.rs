/// Stack growth for deep recursion.
///
/// Provides a wrapper around `stacker` that recursive passes call at every
/// level, so that nesting depth is bounded by heap memory rather than by the
/// size of the thread's stack.
pub mod stack;
