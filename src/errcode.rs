// Status codes shared by the flat solver entry points.

use thiserror::Error;

/// The solve completed and the output buffers hold `min(nr, nc)` pairs.
pub const STATUS_OK: i32 = 0;
/// No complete assignment of finite cost exists.
pub const ERROR_INFEASIBLE: i32 = -1;
/// The cost matrix contains NaN, or an infinity that unbounds the objective.
pub const ERROR_INVALID: i32 = -2;
/// A subscript index lies outside the matrix.
pub const ERROR_SUBSCRIPT_INVALID: i32 = -3;
/// Unrecognized element-type tag.
pub const ERROR_DTYPE_INVALID: i32 = -4;

/// Typed failure returned by [`linear_sum_assignment`](crate::linear_sum_assignment).
///
/// Each variant maps onto one of the stable integer statuses used by the
/// flat entry points; [`LsapError::code`] performs the translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LsapError {
    #[error("no complete assignment of finite cost exists")]
    Infeasible,
    #[error("cost matrix contains NaN or an infinity that unbounds the objective")]
    InvalidCost,
    #[error("subscript index out of bounds")]
    InvalidSubscript,
    #[error("unrecognized element-type tag")]
    InvalidDtype,
}

impl LsapError {
    /// The stable integer status for this error.
    pub fn code(self) -> i32 {
        match self {
            LsapError::Infeasible => ERROR_INFEASIBLE,
            LsapError::InvalidCost => ERROR_INVALID,
            LsapError::InvalidSubscript => ERROR_SUBSCRIPT_INVALID,
            LsapError::InvalidDtype => ERROR_DTYPE_INVALID,
        }
    }
}
