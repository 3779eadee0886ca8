// Logical view over a dense row-major cost matrix.

use num_traits::AsPrimitive;

/// A matrix element that can be promoted to the `f64` working type.
///
/// Promotion is exact for every integer kind whose width fits the 53-bit
/// `f64` mantissa; wider integer values round to the nearest representable
/// double.
pub trait CostScalar: Copy + 'static {
    fn cost(self) -> f64;
}

macro_rules! impl_cost_scalar {
    ($($t:ty),*) => {$(
        impl CostScalar for $t {
            #[inline]
            fn cost(self) -> f64 {
                AsPrimitive::<f64>::as_(self)
            }
        }
    )*};
}

impl_cost_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl CostScalar for bool {
    #[inline]
    fn cost(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }
}

/// Read-only view of a row-major cost matrix with optional subscript,
/// transpose and negation applied at read time.
///
/// The underlying data is never copied; the flags compose in a fixed
/// order on every read. Toggling transpose twice restores the original
/// orientation. Subscripts are installed once and stay read-only for the
/// lifetime of the view.
pub(crate) struct CostMatrix<'a, T> {
    data: &'a [T],
    // raw column count, fixed at construction
    nc: usize,
    transposed: bool,
    negated: bool,
    subrows: Option<&'a [usize]>,
    subcols: Option<&'a [usize]>,
}

impl<'a, T: CostScalar> CostMatrix<'a, T> {
    pub(crate) fn new(data: &'a [T], nc: usize) -> Self {
        CostMatrix {
            data,
            nc,
            transposed: false,
            negated: false,
            subrows: None,
            subcols: None,
        }
    }

    /// The element at logical position `(i, j)`, promoted to the working
    /// type. Transpose swaps the indices, then the subscripts translate
    /// them, then the raw element is read and negated.
    #[inline]
    pub(crate) fn get(&self, mut i: usize, mut j: usize) -> f64 {
        if self.transposed {
            std::mem::swap(&mut i, &mut j);
        }
        if let Some(subrows) = self.subrows {
            i = subrows[i];
        }
        if let Some(subcols) = self.subcols {
            j = subcols[j];
        }
        let r = self.data[i * self.nc + j].cost();
        if self.negated {
            -r
        } else {
            r
        }
    }

    pub(crate) fn transpose(&mut self) {
        self.transposed = !self.transposed;
    }

    pub(crate) fn negate(&mut self) {
        self.negated = !self.negated;
    }

    pub(crate) fn subscript(&mut self, subrows: Option<&'a [usize]>, subcols: Option<&'a [usize]>) {
        self.subrows = subrows;
        self.subcols = subcols;
    }
}
