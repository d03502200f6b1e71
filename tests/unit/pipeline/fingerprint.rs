use super::*;
use crate::composition::presets;
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::FrameIndex;

fn tree(frame: u64) -> RenderTree {
    let comp = presets::prompt_to_video().unwrap();
    Evaluator::eval_frame(&comp, FrameIndex(frame)).unwrap()
}

#[test]
fn deterministic_for_same_tree() {
    let t = tree(100);
    assert_eq!(fingerprint_tree(&t), fingerprint_tree(&t.clone()));
    assert_eq!(fingerprint_tree(&t), fingerprint_tree(&tree(100)));
}

#[test]
fn changes_with_visible_state() {
    let a = tree(100);
    let mut b = a.clone();
    b.scenes[0].opacity *= 0.5;
    assert_ne!(fingerprint_tree(&a), fingerprint_tree(&b));
    assert_ne!(fingerprint_tree(&tree(100)), fingerprint_tree(&tree(101)));
}

#[test]
fn ignores_frame_index() {
    let a = tree(100);
    let mut b = a.clone();
    b.frame = FrameIndex(7);
    assert_eq!(fingerprint_tree(&a), fingerprint_tree(&b));
}

#[test]
fn sequence_is_order_sensitive() {
    let x = fingerprint_tree(&tree(10));
    let y = fingerprint_tree(&tree(20));
    assert_ne!(fingerprint_sequence(&[x, y]), fingerprint_sequence(&[y, x]));
    assert_ne!(fingerprint_sequence(&[x]), fingerprint_sequence(&[x, x]));
    assert_eq!(format!("{x}").len(), 32);
}
