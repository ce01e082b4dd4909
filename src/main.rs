use anyhow::{bail, Result};
use log::info;

use dashboard_config::{load, Mode};

const DEFAULT_CONFIG_PATH: &str = "dashboard/config.js";
const USAGE: &str = "usage: dashboard-config [--production] [PATH]";

fn main() -> Result<()> {
    env_logger::init();

    let mut mode = Mode::Development;
    let mut path = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--production" => mode = Mode::Production,
            "--development" => mode = Mode::Development,
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if arg.starts_with('-') => bail!("unknown option '{}'\n{}", arg, USAGE),
            _ => path = Some(arg),
        }
    }

    let path = path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let config = load(&path, mode)?;
    info!("Config: {:?}", config);

    Ok(())
}
