//! Configuration module.
//!
//! TOML file, environment and command-line settings resolved into a single
//! [`ResolvedConfig`], plus the default key bindings.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

/// Resolve the full precedence chain: defaults, config file, env vars, CLI.
///
/// # Errors
///
/// Returns `ConfigError` if a config file exists but is invalid, or an
/// environment override holds an unusable value.
pub fn resolve(
    config_path: Option<std::path::PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file);
    let with_env = apply_env_overrides(merged)?;
    Ok(apply_cli_overrides(with_env, cli))
}
