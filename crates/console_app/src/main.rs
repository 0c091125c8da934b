mod platform;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = platform::config::load(config_path)?;
    platform::run_app(config)
}
