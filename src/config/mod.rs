//! Configuration module

mod params;

pub use params::{load_overrides, value_text, ParamMap, Params, PARAMS_FILE};
