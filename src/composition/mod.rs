pub mod dsl;
pub mod model;
pub mod presets;
pub mod registry;
