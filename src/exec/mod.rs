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

//! Kernel dispatch surface for training-support operators.
//!
//! A kernel invocation is mediated by a [`KernelContext`]: positional
//! borrowed inputs and positional output slots. The surrounding execution
//! engine decides which outputs a backward graph actually consumes; slots
//! for unconsumed outputs stay unrequested and kernels skip them. Requested
//! outputs are allocated by the kernel itself, sized by the computed
//! result.
//!
//! A context is owned by exactly one invocation for the duration of one
//! call. Nothing here blocks, shares state, or synchronizes; the engine is
//! free to schedule independent invocations concurrently.

pub mod cpu;

use crate::shapes::ShapeError;
use crate::types::DType;

/// Structured error for kernel execution.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Operator name not present in the registry.
    #[error("unknown op '{op}'")]
    UnknownOp { op: &'static str },
    /// Input count does not match the registered arity.
    #[error("op '{op}' expects {expected} inputs but got {found}")]
    ArityMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    /// The kernel instantiation is not registered for this element type.
    #[error("op '{op}' is not registered for element type {dtype}")]
    UnsupportedDType { op: &'static str, dtype: DType },
    /// Every output slot was unrequested. A well-formed engine always
    /// consumes at least one output, so this signals an engine bug.
    #[error("no outputs available for op '{op}'")]
    NoOutputs { op: &'static str },
    /// Shape computation failed.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Positional inputs and outputs for one kernel invocation.
pub struct KernelContext<'a, T> {
    inputs: Vec<&'a [T]>,
    outputs: Vec<Option<Vec<T>>>,
    requested: Vec<bool>,
}

impl<'a, T> KernelContext<'a, T> {
    /// Build a context with every output requested.
    pub fn new(inputs: Vec<&'a [T]>, output_count: usize) -> Self {
        Self::with_requested(inputs, vec![true; output_count])
    }

    /// Build a context where `requested[i]` marks whether output `i` has a
    /// consumer in the backward graph.
    pub fn with_requested(inputs: Vec<&'a [T]>, requested: Vec<bool>) -> Self {
        let outputs = requested.iter().map(|_| None).collect();
        Self {
            inputs,
            outputs,
            requested,
        }
    }

    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Borrow positional input `index`.
    ///
    /// Panics when `index` is out of range; kernels validate arity against
    /// the registry before reading.
    pub fn input(&self, index: usize) -> &'a [T] {
        self.inputs[index]
    }

    /// Materialize positional output `index`, returning `false` when the
    /// slot is unrequested.
    pub fn write_output(&mut self, index: usize, data: Vec<T>) -> bool {
        match self.requested.get(index) {
            Some(true) => {
                self.outputs[index] = Some(data);
                true
            }
            _ => false,
        }
    }

    /// Borrow a materialized output, if any.
    pub fn output(&self, index: usize) -> Option<&[T]> {
        self.outputs.get(index).and_then(|slot| slot.as_deref())
    }

    /// Consume the context, yielding the materialized outputs.
    pub fn into_outputs(self) -> Vec<Option<Vec<T>>> {
        self.outputs
    }
}
