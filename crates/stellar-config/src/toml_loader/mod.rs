//! TOML config file loading.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{default_config_path, load_from_path, load_from_str};
