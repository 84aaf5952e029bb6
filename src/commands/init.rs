use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Pricemap Configuration

[output]
default_format = "terminal"

[simulation]
presets = ["-20%", "-10%", "-5%", "+5%", "+10%", "+20%"]
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
