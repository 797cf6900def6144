use gradops::exec::cpu::BroadcastGradientArgs;
use gradops::exec::{KernelContext, KernelError};
use gradops::types::DType;

#[test]
fn writes_both_requested_outputs() {
    let a_shape = [2i64, 1, 4];
    let b_shape = [2i64, 5, 4];
    let mut ctx = KernelContext::new(vec![a_shape.as_slice(), b_shape.as_slice()], 2);

    BroadcastGradientArgs::compute(&mut ctx).expect("kernel should succeed");

    assert_eq!(ctx.output(0), Some(&[1i64][..]));
    assert_eq!(ctx.output(1), Some(&[][..]));
}

#[test]
fn outputs_are_sized_by_the_result() {
    let a_shape: [i64; 0] = [];
    let b_shape = [3i64, 4];
    let mut ctx = KernelContext::new(vec![a_shape.as_slice(), b_shape.as_slice()], 2);

    BroadcastGradientArgs::compute(&mut ctx).expect("kernel should succeed");

    let outputs = ctx.into_outputs();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].as_deref(), Some(&[1i64, 0][..]));
    assert_eq!(outputs[1].as_deref(), Some(&[][..]));
}

#[test]
fn skips_unrequested_output() {
    let a_shape = [3i64, 1];
    let b_shape = [1i64, 3];
    let mut ctx = KernelContext::with_requested(
        vec![a_shape.as_slice(), b_shape.as_slice()],
        vec![false, true],
    );

    BroadcastGradientArgs::compute(&mut ctx).expect("one requested output is enough");

    assert_eq!(ctx.output(0), None);
    assert_eq!(ctx.output(1), Some(&[0i64][..]));
}

#[test]
fn rejects_context_with_no_requested_outputs() {
    let a_shape = [2i64];
    let b_shape = [2i64];
    let mut ctx = KernelContext::with_requested(
        vec![a_shape.as_slice(), b_shape.as_slice()],
        vec![false, false],
    );

    let err = BroadcastGradientArgs::compute(&mut ctx).unwrap_err();
    match err {
        KernelError::NoOutputs { op } => assert_eq!(op, BroadcastGradientArgs::NAME),
        other => panic!("expected NoOutputs, got {other:?}"),
    }
}

#[test]
fn rejects_unregistered_element_type() {
    let a_shape = [2i32, 1];
    let b_shape = [2i32, 5];
    let mut ctx = KernelContext::new(vec![a_shape.as_slice(), b_shape.as_slice()], 2);

    let err = BroadcastGradientArgs::compute(&mut ctx).unwrap_err();
    match err {
        KernelError::UnsupportedDType { op, dtype } => {
            assert_eq!(op, BroadcastGradientArgs::NAME);
            assert_eq!(dtype, DType::I32);
        }
        other => panic!("expected UnsupportedDType, got {other:?}"),
    }
}

#[test]
fn rejects_wrong_input_count() {
    let a_shape = [2i64, 1];
    let mut ctx = KernelContext::new(vec![a_shape.as_slice()], 2);

    let err = BroadcastGradientArgs::compute(&mut ctx).unwrap_err();
    match err {
        KernelError::ArityMismatch { expected, found, .. } => {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected ArityMismatch, got {other:?}"),
    }
}

#[test]
fn error_messages_name_the_op() {
    let a_shape = [2i64];
    let b_shape = [2i64];
    let mut ctx = KernelContext::with_requested(
        vec![a_shape.as_slice(), b_shape.as_slice()],
        vec![false, false],
    );

    let err = BroadcastGradientArgs::compute(&mut ctx).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no outputs available for op 'grad.broadcast_args'"
    );
}
