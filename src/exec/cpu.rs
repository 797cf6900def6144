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

//! CPU kernels for training-support ops.

use crate::ops::{self, Arity};
use crate::shapes::grad::broadcast_gradient_axes;
use crate::types::Element;

use super::{KernelContext, KernelError};

/// Kernel computing per-operand reduction axes for the gradients of a
/// broadcast elementwise op.
///
/// Inputs 0 and 1 are the operands' forward shapes as 1-D integer arrays.
/// Outputs 0 and 1 receive the corresponding axis lists, innermost axis
/// first, each sized by the computed result and possibly empty. Writing
/// any requested subset of the outputs is success; a context with no
/// requested outputs is rejected.
pub struct BroadcastGradientArgs;

impl BroadcastGradientArgs {
    /// Registered operator name.
    pub const NAME: &'static str = "grad.broadcast_args";

    pub fn compute<T: Element>(ctx: &mut KernelContext<'_, T>) -> Result<(), KernelError> {
        let sig = ops::training_op_signature(Self::NAME)
            .ok_or(KernelError::UnknownOp { op: Self::NAME })?;

        if let Arity::Fixed(expected) = sig.arity {
            if ctx.input_count() != expected {
                return Err(KernelError::ArityMismatch {
                    op: Self::NAME,
                    expected,
                    found: ctx.input_count(),
                });
            }
        }
        if !sig.allowed_dtypes.contains(&T::DTYPE) {
            return Err(KernelError::UnsupportedDType {
                op: Self::NAME,
                dtype: T::DTYPE,
            });
        }

        let a_dims = ctx.input(0);
        let b_dims = ctx.input(1);

        let (a_axes, b_axes) = broadcast_gradient_axes(a_dims, b_dims)?;

        let wrote_a = ctx.write_output(0, a_axes);
        let wrote_b = ctx.write_output(1, b_axes);
        if !wrote_a && !wrote_b {
            return Err(KernelError::NoOutputs { op: Self::NAME });
        }

        Ok(())
    }
}
