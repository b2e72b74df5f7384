use anyhow::Result;

use ringslider_core::AppConfig;

/// Write the current (usually default) configuration to the config file.
pub fn init(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    config.save()?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Print the config file path.
pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
