// Shortest augmenting path solver for the rectangular linear sum
// assignment problem.
//
// The implementation follows the pseudocode on pages 1685-1686 of:
//
//     DF Crouse. On implementing 2D rectangular assignment algorithms.
//     IEEE Transactions on Aerospace and Electronic Systems
//     52(4):1679-1696, August 2016
//     doi: 10.1109/TAES.2016.140952

use std::iter::zip;

use log::{debug, trace};

use crate::dtype::CostArray;
use crate::errcode::{LsapError, STATUS_OK};
use crate::matrix_view::{CostMatrix, CostScalar};

// Sentinel for a row or column not yet in the matching.
const UNASSIGNED: isize = -1;

// Find a shortest augmenting path from `start_row` to an unassigned
// column over the reduced costs implied by the duals `u` and `v`.
//
// Returns the sink column and the accumulated path length, or `None`
// when every remaining column sits at infinite reduced cost. On return
// `path` holds the predecessor row for each visited column and `sr`/`sc`
// mark the rows and columns reached by the search.
fn augmenting_path<T: CostScalar>(
    nc: usize,
    cost: &CostMatrix<'_, T>,
    u: &[f64],
    v: &[f64],
    path: &mut [usize],
    row4col: &[isize],
    shortest_path_costs: &mut [f64],
    start_row: usize,
    sr: &mut [bool],
    sc: &mut [bool],
    remaining: &mut [usize],
) -> Option<(usize, f64)> {
    let mut min_val = 0.0;

    // Crouse's pseudocode tracks the unscanned columns as a set
    // complement; a compacted vector with swap-with-last removal gives
    // the same O(1) deletion. Filling it in reverse order makes the
    // solution of a constant cost matrix the identity assignment.
    let mut num_remaining = nc;
    for (it, r) in remaining.iter_mut().enumerate() {
        *r = nc - it - 1;
    }

    sr.fill(false);
    sc.fill(false);
    shortest_path_costs.fill(f64::INFINITY);

    let mut i = start_row;
    loop {
        let mut index = usize::MAX;
        let mut lowest = f64::INFINITY;
        sr[i] = true;

        for it in 0..num_remaining {
            let j = remaining[it];

            let r = min_val + cost.get(i, j) - u[i] - v[j];
            if r < shortest_path_costs[j] {
                path[j] = i;
                shortest_path_costs[j] = r;
            }

            // Among columns tied for the minimum, prefer one that gives
            // a new sink node. This matters for integer cost matrices
            // with small coefficients, where ties are the common case.
            if shortest_path_costs[j] < lowest
                || (shortest_path_costs[j] == lowest && row4col[j] == UNASSIGNED)
            {
                lowest = shortest_path_costs[j];
                index = it;
            }
        }

        min_val = lowest;
        if min_val == f64::INFINITY {
            // infeasible cost matrix
            return None;
        }

        let j = remaining[index];
        let at_sink = row4col[j] == UNASSIGNED;
        if !at_sink {
            i = row4col[j] as usize;
        }

        sc[j] = true;
        num_remaining -= 1;
        remaining[index] = remaining[num_remaining];

        if at_sink {
            return Some((j, min_val));
        }
    }
}

// One solve, monomorphized over the element type of the cost buffer.
fn solve_view<T: CostScalar>(
    nr: usize,
    nc: usize,
    cost: &[T],
    maximize: bool,
    subrows: Option<&[usize]>,
    subcols: Option<&[usize]>,
    a_out: &mut [i64],
    b_out: &mut [i64],
) -> Result<(), LsapError> {
    // handle trivial inputs
    if nr == 0 || nc == 0 {
        return Ok(());
    }

    assert!(cost.len() >= nr * nc, "cost buffer shorter than nr * nc");

    // Reject NaN anywhere, and the infinity that would unbound the
    // objective in the requested direction.
    for c in &cost[..nr * nc] {
        let x = c.cost();
        if x.is_nan()
            || (x == f64::NEG_INFINITY && !maximize)
            || (x == f64::INFINITY && maximize)
        {
            return Err(LsapError::InvalidCost);
        }
    }

    // An empty selector means no subscript on that axis. Selector
    // lengths may exceed the axis and indices may repeat; both are
    // legal.
    let subrows = subrows.filter(|s| !s.is_empty());
    let subcols = subcols.filter(|s| !s.is_empty());
    if let Some(rows) = subrows {
        if rows.iter().any(|&i| i >= nr) {
            return Err(LsapError::InvalidSubscript);
        }
    }
    if let Some(cols) = subcols {
        if cols.iter().any(|&j| j >= nc) {
            return Err(LsapError::InvalidSubscript);
        }
    }

    let mut view = CostMatrix::new(cost, nc);
    view.subscript(subrows, subcols);
    let mut nr = subrows.map_or(nr, |s| s.len());
    let mut nc = subcols.map_or(nc, |s| s.len());

    assert!(
        a_out.len() >= usize::min(nr, nc) && b_out.len() >= usize::min(nr, nc),
        "output buffers shorter than min(nr, nc)"
    );

    // The search assumes a wide orientation; a tall cost matrix is
    // solved on its transpose.
    let transpose = nc < nr;
    if transpose {
        view.transpose();
        std::mem::swap(&mut nr, &mut nc);
    }
    if maximize {
        view.negate();
    }
    debug!(
        "solving {}x{} assignment (transpose = {}, maximize = {})",
        nr, nc, transpose, maximize
    );

    let mut u = vec![0.0; nr];
    let mut v = vec![0.0; nc];
    let mut shortest_path_costs = vec![0.0; nc];
    let mut path = vec![usize::MAX; nc];
    let mut col4row = vec![UNASSIGNED; nr];
    let mut row4col = vec![UNASSIGNED; nc];
    let mut sr = vec![false; nr];
    let mut sc = vec![false; nc];
    let mut remaining = vec![0; nc];

    // iteratively build the solution
    for cur_row in 0..nr {
        let (sink, min_val) = augmenting_path(
            nc,
            &view,
            &u,
            &v,
            &mut path,
            &row4col,
            &mut shortest_path_costs,
            cur_row,
            &mut sr,
            &mut sc,
            &mut remaining,
        )
        .ok_or(LsapError::Infeasible)?;
        trace!("row {}: sink column {}, path length {}", cur_row, sink, min_val);

        // update dual variables
        u[cur_row] += min_val;
        for i in 0..nr {
            if sr[i] && i != cur_row {
                u[i] += min_val - shortest_path_costs[col4row[i] as usize];
            }
        }
        for j in 0..nc {
            if sc[j] {
                v[j] -= min_val - shortest_path_costs[j];
            }
        }

        // augment previous solution
        let mut j = sink as isize;
        loop {
            let i = path[j as usize];
            row4col[j as usize] = i as isize;
            std::mem::swap(&mut col4row[i], &mut j);
            if i == cur_row {
                break;
            }
        }
    }

    if transpose {
        // Undo the transpose: order by the original row axis.
        let mut order: Vec<usize> = (0..nr).collect();
        order.sort_unstable_by_key(|&i| col4row[i]);
        for (k, &i) in order.iter().enumerate() {
            a_out[k] = col4row[i] as i64;
            b_out[k] = i as i64;
        }
    } else {
        for i in 0..nr {
            a_out[i] = i as i64;
            b_out[i] = col4row[i] as i64;
        }
    }

    // Map subscripted indices back to the caller's coordinates.
    if subrows.is_some() || subcols.is_some() {
        for k in 0..nr {
            if let Some(rows) = subrows {
                a_out[k] = rows[a_out[k] as usize] as i64;
            }
            if let Some(cols) = subcols {
                b_out[k] = cols[b_out[k] as usize] as i64;
            }
        }
    }

    Ok(())
}

/// Solve the rectangular linear sum assignment problem for an `f64` cost
/// matrix of shape `(nr, nc)`, laid out row-major.
///
/// On success writes the `min(nr, nc)` optimal (row, column) pairs to
/// `a_out`/`b_out` in ascending row order and returns [`STATUS_OK`]. On
/// failure returns a negative status and leaves the output buffers
/// unspecified.
pub fn solve(
    nr: usize,
    nc: usize,
    cost: &[f64],
    maximize: bool,
    a_out: &mut [i64],
    b_out: &mut [i64],
) -> i32 {
    match solve_view(nr, nc, cost, maximize, None, None, a_out, b_out) {
        Ok(()) => STATUS_OK,
        Err(e) => e.code(),
    }
}

/// Solve for a cost matrix of any supported element kind, optionally
/// restricted to a row/column subscript.
///
/// Elements are promoted to `f64` at the point of read; integer kinds up
/// to 53 bits promote exactly. `subrows`/`subcols` restrict the problem
/// to the selected indices in the given order (repetition is allowed and
/// lengths may exceed the axis); `None` or an empty selector leaves that
/// axis untouched. Output pairs are reported in the caller's coordinate
/// system, after unwinding any transpose and subscript.
pub fn solve_dtype(
    nr: usize,
    nc: usize,
    cost: &CostArray<'_>,
    maximize: bool,
    subrows: Option<&[usize]>,
    subcols: Option<&[usize]>,
    a_out: &mut [i64],
    b_out: &mut [i64],
) -> i32 {
    let result = match *cost {
        CostArray::Bool(data) => {
            solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out)
        }
        CostArray::I8(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::U8(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::I16(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::U16(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::I32(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::U32(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::I64(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::U64(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::F32(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
        CostArray::F64(data) => solve_view(nr, nc, data, maximize, subrows, subcols, a_out, b_out),
    };
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => e.code(),
    }
}

/// An optimal assignment: the k-th pair is `(row_ind[k], col_ind[k])`,
/// ordered ascending by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub row_ind: Vec<i64>,
    pub col_ind: Vec<i64>,
}

impl Assignment {
    /// Number of assigned pairs, `min(nr, nc)` for a feasible problem.
    pub fn len(&self) -> usize {
        self.row_ind.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ind.is_empty()
    }

    /// Iterator over the `(row, column)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        zip(self.row_ind.iter().copied(), self.col_ind.iter().copied())
    }
}

/// Solve and allocate the result, for any supported element kind.
///
/// Equivalent to [`solve`]/[`solve_dtype`] without subscripts, returning
/// owned index vectors instead of filling caller buffers.
pub fn linear_sum_assignment<T: CostScalar>(
    nr: usize,
    nc: usize,
    cost: &[T],
    maximize: bool,
) -> Result<Assignment, LsapError> {
    let n = usize::min(nr, nc);
    let mut row_ind = vec![0; n];
    let mut col_ind = vec![0; n];
    solve_view(nr, nc, cost, maximize, None, None, &mut row_ind, &mut col_ind)?;
    Ok(Assignment { row_ind, col_ind })
}
