mod load;
mod save;
mod types;

pub use load::{LoadedConfig, resolve_inputs};
pub use save::save_config;
pub use types::{AnimationConfig, ControlSpec, LayoutConfig};
