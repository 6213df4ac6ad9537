//! Configuration for bundle-delta
//!
//! Settings come from an optional `.bundle-delta.toml` in the project root,
//! with command-line flags layered on top.

pub mod file;
pub mod loader;

pub use file::{ConfigFile, ConfigOverrides, CONFIG_FILE_NAME, DEFAULT_APP_DIR, DEFAULT_BUILD_DIR};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".bundle-delta.toml");
    }
}
