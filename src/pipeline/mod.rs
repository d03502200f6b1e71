pub mod fingerprint;
pub mod frames;
