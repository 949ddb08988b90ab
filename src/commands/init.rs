use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# geoscore configuration

[aggregation]
# Risk signal: "mpe", "grader" or "consensus"
mode = "mpe"
# Samples sharing a country: "last-wins", "first-wins" or "average"
duplicate_policy = "last-wins"
# Report samples handled on a best-effort basis
strict = false
# Score model answers into a missing mpe_scorer entry
rescore = false

[synthetic]
# seed = 42
# countries = ["France", "Japan", "Brazil"]

[output]
default_format = "terminal"
# use_color = true
"#;

/// Write the default configuration into `dir`.
pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}
