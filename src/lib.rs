//! This package solves the rectangular **linear sum assignment problem**.
//!
//! Given a dense cost matrix `C` with `nr` rows and `nc` columns, it
//! finds an assignment of rows to pairwise distinct columns
//! ```text
//! minimize sum_k C[a_k, b_k]
//! ```
//!
//! (or maximize, on request) over all injective assignments. When
//! `nr > nc` the problem is solved on the transpose, so every column is
//! assigned a distinct row; the `min(nr, nc)` resulting pairs are always
//! reported in the caller's coordinate system, ordered by row.
//!
//! The solver runs the shortest augmenting path algorithm of Crouse in
//! `O(n^3)` time with `O(n^2)` memory, maintaining dual variables so
//! that every Dijkstra-like search walks only equality-tight edges.
//!
//! Three entry points are provided:
//!
//! * [solve] for `f64` cost matrices with caller-provided output buffers,
//! * [solve_dtype] for any supported element kind ([CostArray]), with
//!   optional row/column subscripts that reshape the problem without
//!   copying the matrix,
//! * [linear_sum_assignment] for an allocating, `Result`-returning API.

mod dtype;
mod errcode;
mod matrix_view;
mod solver;

#[cfg(test)]
mod tests;

pub use dtype::*;
pub use errcode::*;
pub use matrix_view::CostScalar;
pub use solver::*;
