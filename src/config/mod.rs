//! Configuration loading from `.geoscore.toml`.

mod core;
mod loader;

pub use core::{AggregationConfig, GeoscoreConfig, OutputConfig, SyntheticConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
