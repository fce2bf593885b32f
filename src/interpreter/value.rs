/// The arbitrary-precision integer type.
///
/// Defines `BigInt`, a non-negative base-10 integer stored as a sequence of
/// digits, together with construction, canonical-form helpers, ordering and
/// rendering.
pub mod big_int;
/// Digit-wise arithmetic on `BigInt`.
///
/// Implements schoolbook addition and absolute-difference subtraction, and
/// wires them to the `+` and `-` operators.
pub mod arithmetic;
