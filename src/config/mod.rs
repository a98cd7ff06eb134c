//! Config module.
//! Provides configuration types, config file location, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path, path_has_symlink_ancestor, resolve_config_path};
pub use types::{Config, LogLevel};
pub use xml::{FileConfig, load_config_file, load_config_from_xml_path, parse_config_xml};

/// Defaults for the filename filters and numbering.
pub const PREFIX_DEFAULT: &str = "DSCF";
pub const SUFFIX_DEFAULT: &str = ".JPG";
pub const START_INDEX_DEFAULT: u64 = 1;
