//! Integer element types for gradient bookkeeping kernels.
//!
//! # Example
//! ```
//! use gradops::types::{DType, Element};
//! assert_eq!(<i64 as Element>::DTYPE, DType::I64);
//! ```

use std::fmt;

use num_traits::PrimInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    I32,
    I64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::I32 => write!(f, "i32"),
            DType::I64 => write!(f, "i64"),
        }
    }
}

/// Element types a kernel can be instantiated with.
///
/// Each implementor names its [`DType`] so the op registry can constrain
/// which instantiations are dispatchable; see [`crate::ops`].
pub trait Element: PrimInt {
    const DTYPE: DType;
}

impl Element for i32 {
    const DTYPE: DType = DType::I32;
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;
}
