use rand::rngs::StdRng;
use rand::Rng;


/// Generate a dense row-major matrix with uniform random costs.
fn gen_random_dense(nr: usize, nc: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..nr * nc).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

/// Generate a dense row-major matrix with small integer costs. Small
/// coefficients make degenerate minima common, which exercises the
/// tie-break rules of the search.
fn gen_random_int(nr: usize, nc: usize, rng: &mut StdRng) -> Vec<i32> {
    (0..nr * nc).map(|_| rng.gen_range(0..5)).collect()
}

/// Total cost of an assignment over the raw matrix.
fn assignment_cost(nc: usize, cost: &[f64], a: &[i64], b: &[i64]) -> f64 {
    std::iter::zip(a, b)
        .map(|(&i, &j)| cost[i as usize * nc + j as usize])
        .sum()
}

/// Check that the output is a valid partial matching: rows strictly
/// ascending, columns pairwise distinct, all indices in range.
fn assert_valid_assignment(nr: usize, nc: usize, a: &[i64], b: &[i64]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), usize::min(nr, nc));
    for k in 0..a.len() {
        assert!(a[k] >= 0 && (a[k] as usize) < nr, "a[{}] = {}", k, a[k]);
        assert!(b[k] >= 0 && (b[k] as usize) < nc, "b[{}] = {}", k, b[k]);
        if k > 0 {
            assert!(a[k] > a[k - 1], "rows not ascending at {}", k);
        }
    }
    let mut seen = vec![false; nc];
    for &j in b {
        assert!(!seen[j as usize], "column {} assigned twice", j);
        seen[j as usize] = true;
    }
}

/// Optimal total over all injections of rows into columns, by exhaustive
/// search. Oracle for small problems only.
fn brute_force_total(nr: usize, nc: usize, cost: &[f64], maximize: bool) -> f64 {
    if nr > nc {
        // solve on the transpose
        let mut t = vec![0.0; nr * nc];
        for i in 0..nr {
            for j in 0..nc {
                t[j * nr + i] = cost[i * nc + j];
            }
        }
        return brute_force_total(nc, nr, &t, maximize);
    }

    assert!(nc < 32, "oracle uses a u32 column mask");

    fn descend(row: usize, nr: usize, nc: usize, cost: &[f64], used: u32, maximize: bool) -> f64 {
        if row == nr {
            return 0.0;
        }
        let mut best = if maximize {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for j in 0..nc {
            if used & (1 << j) != 0 {
                continue;
            }
            let total =
                cost[row * nc + j] + descend(row + 1, nr, nc, cost, used | (1 << j), maximize);
            if (maximize && total > best) || (!maximize && total < best) {
                best = total;
            }
        }
        best
    }

    descend(0, nr, nc, cost, 0, maximize)
}
