// Element kinds accepted by the dtype-dispatching entry point.

/// Stable element-kind tags, as exchanged with language bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Dtype {
    Bool = 0,
    I8 = 1,
    U8 = 2,
    I16 = 3,
    U16 = 4,
    I32 = 5,
    U32 = 6,
    I64 = 7,
    U64 = 8,
    F32 = 9,
    F64 = 10,
}

impl Dtype {
    /// Decode a raw tag. Unknown tags have no element kind; a binding
    /// translating its own tag space reports
    /// [`ERROR_DTYPE_INVALID`](crate::ERROR_DTYPE_INVALID) when this
    /// returns `None`.
    pub fn from_tag(tag: i32) -> Option<Dtype> {
        match tag {
            0 => Some(Dtype::Bool),
            1 => Some(Dtype::I8),
            2 => Some(Dtype::U8),
            3 => Some(Dtype::I16),
            4 => Some(Dtype::U16),
            5 => Some(Dtype::I32),
            6 => Some(Dtype::U32),
            7 => Some(Dtype::I64),
            8 => Some(Dtype::U64),
            9 => Some(Dtype::F32),
            10 => Some(Dtype::F64),
            _ => None,
        }
    }

    pub fn tag(self) -> i32 {
        self as i32
    }
}

/// A borrowed cost buffer together with its element kind.
///
/// The variant plays the role of the element-type tag:
/// [`solve_dtype`](crate::solve_dtype) matches on it to instantiate the
/// solver at the corresponding element type.
#[derive(Debug, Clone, Copy)]
pub enum CostArray<'a> {
    Bool(&'a [bool]),
    I8(&'a [i8]),
    U8(&'a [u8]),
    I16(&'a [i16]),
    U16(&'a [u16]),
    I32(&'a [i32]),
    U32(&'a [u32]),
    I64(&'a [i64]),
    U64(&'a [u64]),
    F32(&'a [f32]),
    F64(&'a [f64]),
}

impl CostArray<'_> {
    pub fn dtype(&self) -> Dtype {
        match self {
            CostArray::Bool(_) => Dtype::Bool,
            CostArray::I8(_) => Dtype::I8,
            CostArray::U8(_) => Dtype::U8,
            CostArray::I16(_) => Dtype::I16,
            CostArray::U16(_) => Dtype::U16,
            CostArray::I32(_) => Dtype::I32,
            CostArray::U32(_) => Dtype::U32,
            CostArray::I64(_) => Dtype::I64,
            CostArray::U64(_) => Dtype::U64,
            CostArray::F32(_) => Dtype::F32,
            CostArray::F64(_) => Dtype::F64,
        }
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            CostArray::Bool(data) => data.len(),
            CostArray::I8(data) => data.len(),
            CostArray::U8(data) => data.len(),
            CostArray::I16(data) => data.len(),
            CostArray::U16(data) => data.len(),
            CostArray::I32(data) => data.len(),
            CostArray::U32(data) => data.len(),
            CostArray::I64(data) => data.len(),
            CostArray::U64(data) => data.len(),
            CostArray::F32(data) => data.len(),
            CostArray::F64(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
