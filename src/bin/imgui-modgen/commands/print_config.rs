//! `imgui-modgen print-config` command

use anyhow::Result;

use crate::cli::ConfigArgs;
use imgui_modgen::Config;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = Config::discover(&args.root, args.config.as_deref())?;
    print!("{}", config.to_toml()?);
    Ok(())
}
