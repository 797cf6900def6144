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

use crate::types::DType;

/// Fixed-function metadata for a training-support operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpSignature {
    /// Canonical operator name as it appears in backward-pass graphs.
    pub name: &'static str,
    /// Number of inputs expected by the op.
    pub arity: Arity,
    /// Element types the op's kernel is registered for.
    pub allowed_dtypes: &'static [DType],
    /// Whether the op participates in further differentiation.
    pub differentiable: bool,
    /// Short description of the op contract.
    pub summary: &'static str,
}

/// Arity description for ops that accept a fixed or variadic input count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic { min: usize },
}

/// The curated, auditable list of training-support ops.
///
/// Keep the ordering stable so tooling output stays deterministic.
pub const fn training_ops() -> &'static [OpSignature] {
    use Arity::*;
    &[OpSignature {
        name: "grad.broadcast_args",
        arity: Fixed(2),
        allowed_dtypes: &[DType::I64],
        differentiable: false,
        summary: "Per-operand reduction axes for gradients of broadcast elementwise ops.",
    }]
}

/// Returns true if the provided name is a registered training-support op.
pub fn is_training_op(name: &str) -> bool {
    training_ops().iter().any(|op| op.name == name)
}

/// Looks up the metadata for a training-support op.
pub fn training_op_signature(name: &str) -> Option<&'static OpSignature> {
    training_ops().iter().find(|op| op.name == name)
}
