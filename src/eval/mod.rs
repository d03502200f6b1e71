pub mod evaluator;
pub(crate) mod particles;
pub mod tree;
