pub mod ease;
pub mod interpolate;
pub mod ops;
pub mod spring;
