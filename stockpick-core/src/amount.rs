use serde::{de::DeserializeOwned, Serialize};
use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign},
};

/// Numeric type for costs, percentages and budgets.
///
/// Two pipelines exist: integer amounts keep cost sums exact for the
/// exhaustive search, floating-point amounts serve the greedy pipeline.
/// Benefit values are always `f64` because the percentage division is
/// real-valued in both pipelines.
pub trait Amount:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + AddAssign
    + Sum
    + Serialize
    + DeserializeOwned
{
    const ZERO: Self;

    /// Parses one CSV field. `None` on anything non-numeric.
    fn parse_field(field: &str) -> Option<Self>;

    fn to_f64(&self) -> f64;
}

impl Amount for i64 {
    const ZERO: Self = 0;

    fn parse_field(field: &str) -> Option<Self> {
        field.trim().parse().ok()
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Amount for f64 {
    const ZERO: Self = 0.0;

    fn parse_field(field: &str) -> Option<Self> {
        // NaN or infinite amounts would poison every comparison downstream.
        field.trim().parse().ok().filter(|v: &f64| v.is_finite())
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}
