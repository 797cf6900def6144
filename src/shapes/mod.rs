// Copyright 2025 STARGA Inc.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared tensor shape helpers for backward-pass bookkeeping.

pub mod grad;

use std::collections::BTreeSet;
use std::fmt;

/// A rank-N tensor shape represented as a list of concrete extents.
///
/// Shapes are read left-to-right from outermost to innermost axis. The
/// empty shape is a rank-0 scalar.
pub type Shape = Vec<usize>;

/// Error type returned by the shape helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    AxisOutOfRange {
        axis: i64,
        rank: usize,
    },
    DuplicateAxis {
        axis: i64,
    },
    BroadcastIncompatible {
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },
    /// A virtual axis index did not fit the requested integer representation.
    AxisOverflow {
        axis: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::AxisOutOfRange { axis, rank } => {
                write!(f, "axis {axis} out of range for rank {rank}")
            }
            ShapeError::DuplicateAxis { axis } => {
                write!(f, "duplicate axis {axis}")
            }
            ShapeError::BroadcastIncompatible { lhs, rhs } => {
                write!(f, "cannot broadcast shapes {:?} and {:?}", lhs, rhs)
            }
            ShapeError::AxisOverflow { axis } => {
                write!(f, "axis index {axis} overflows the output element type")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

fn normalize_axis(axis: i64, rank: usize) -> Result<usize, ShapeError> {
    let rank_i = rank as i64;
    let idx = if axis < 0 { rank_i + axis } else { axis };
    if idx < 0 || idx >= rank_i {
        Err(ShapeError::AxisOutOfRange { axis, rank })
    } else {
        Ok(idx as usize)
    }
}

fn normalize_axes_list(axes: &[i64], rank: usize) -> Result<Vec<usize>, ShapeError> {
    let mut seen = BTreeSet::new();
    let mut normalized = Vec::new();
    for &axis in axes {
        let idx = normalize_axis(axis, rank)?;
        if !seen.insert(idx) {
            return Err(ShapeError::DuplicateAxis { axis });
        }
        normalized.push(idx);
    }
    normalized.sort_unstable();
    Ok(normalized)
}

/// Compute the broadcast result shape for two input shapes following the
/// standard right-aligned broadcasting rules.
///
/// Extents are matched from the innermost axis outward; at every aligned
/// position the two extents must be equal or one of them must be 1. The
/// shorter shape is treated as padded with leading 1s.
pub fn broadcast_output_shape(lhs: &[usize], rhs: &[usize]) -> Result<Shape, ShapeError> {
    let mut out = Vec::new();
    let mut i = lhs.len() as isize - 1;
    let mut j = rhs.len() as isize - 1;

    while i >= 0 || j >= 0 {
        let da = if i >= 0 { lhs[i as usize] } else { 1 };
        let db = if j >= 0 { rhs[j as usize] } else { 1 };

        let dim = if da == db {
            da
        } else if da == 1 {
            db
        } else if db == 1 {
            da
        } else {
            return Err(ShapeError::BroadcastIncompatible {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
            });
        };

        out.push(dim);
        i -= 1;
        j -= 1;
    }

    out.reverse();
    Ok(out)
}

/// Shape left after summing `input` over `axes`.
///
/// Negative axes count back from the innermost dimension. An empty axis
/// list reduces over every axis. Duplicate axes are rejected.
pub fn reduce_shape(input: &[usize], axes: &[i64], keepdims: bool) -> Result<Shape, ShapeError> {
    let axes = if axes.is_empty() {
        (0..input.len() as i64).collect::<Vec<_>>()
    } else {
        axes.to_vec()
    };
    let normalized = normalize_axes_list(&axes, input.len())?;
    if keepdims {
        let mut out = input.to_vec();
        for &axis in &normalized {
            out[axis] = 1;
        }
        Ok(out)
    } else {
        let axis_set: BTreeSet<usize> = normalized.into_iter().collect();
        let mut out = Vec::new();
        for (idx, &dim) in input.iter().enumerate() {
            if !axis_set.contains(&idx) {
                out.push(dim);
            }
        }
        Ok(out)
    }
}
