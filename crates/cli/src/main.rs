use std::path::PathBuf;

use dispatch_cli::DispatchConfig;

fn main() -> anyhow::Result<()> {
    let manifest_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DispatchConfig::from_env(manifest_arg)?;

    dispatch_observability::init(config.log_format);

    let report = dispatch_cli::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
