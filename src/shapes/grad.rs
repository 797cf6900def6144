// Copyright 2025 STARGA Inc.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Part of the MIND project (Machine Intelligence Native Design).

//! Reduction-axis resolution for gradients of broadcast elementwise ops.

use num_traits::PrimInt;

use super::ShapeError;

/// Resolve the axes along which each operand's gradient must be summed
/// after a broadcast elementwise operation.
///
/// `a_dims` and `b_dims` are the operands' forward shapes. The returned
/// lists hold axis indices into the virtual result shape of rank
/// `max(a_dims.len(), b_dims.len())`, innermost axis first: each list is
/// strictly descending, and consumers may rely on that order. An axis
/// appears in an operand's list wherever that operand's extent was 1, or
/// absent entirely, while the broadcast result was wider; summing the
/// upstream gradient over those axes shrinks it back to the operand shape.
///
/// The two shapes are assumed broadcast-compatible. That precondition is
/// established by the forward op's shape inference and is deliberately not
/// re-checked here: a malformed pair still resolves to completion, it just
/// names no axes for the mismatched positions. Use
/// [`broadcast_output_shape`](super::broadcast_output_shape) to validate
/// untrusted shape pairs.
///
/// Fails only when a virtual axis index does not fit in `T`.
///
/// # Example
/// ```
/// use gradops::shapes::grad::broadcast_gradient_axes;
///
/// let (a_axes, b_axes) = broadcast_gradient_axes::<i64>(&[2, 1, 4], &[2, 5, 4]).unwrap();
/// assert_eq!(a_axes, vec![1]);
/// assert!(b_axes.is_empty());
/// ```
pub fn broadcast_gradient_axes<T: PrimInt>(
    a_dims: &[T],
    b_dims: &[T],
) -> Result<(Vec<T>, Vec<T>), ShapeError> {
    let ndim = a_dims.len().max(b_dims.len());

    let mut a_axes: Vec<T> = Vec::new();
    let mut b_axes: Vec<T> = Vec::new();

    let mut i = a_dims.len() as isize - 1;
    let mut j = b_dims.len() as isize - 1;
    let mut k = ndim as isize - 1;

    let one = T::one();

    while i >= 0 && j >= 0 {
        let a_dim = a_dims[i as usize];
        let b_dim = b_dims[j as usize];

        // Equal extents broadcast nowhere; a differing pair replicates the
        // side whose extent is 1 along this axis.
        if a_dim != b_dim {
            if a_dim == one {
                a_axes.push(axis_index(k as usize)?);
            }
            if b_dim == one {
                b_axes.push(axis_index(k as usize)?);
            }
        }

        i -= 1;
        j -= 1;
        k -= 1;
    }

    // The side that ran out of explicit dimensions first was implicitly
    // padded with leading 1s; every remaining virtual axis reduces it.
    let shorter = if i < 0 { &mut a_axes } else { &mut b_axes };
    while k >= 0 {
        shorter.push(axis_index(k as usize)?);
        k -= 1;
    }

    Ok((a_axes, b_axes))
}

fn axis_index<T: PrimInt>(k: usize) -> Result<T, ShapeError> {
    T::from(k).ok_or(ShapeError::AxisOverflow { axis: k })
}
