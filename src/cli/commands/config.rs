use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config { print_config } = cmd else {
        return Err(AppError::Other("wrong command routed to config".into()));
    };

    if *print_config {
        print!("{}", cfg.to_yaml()?);
    } else {
        info(format!(
            "Configuration file: {}",
            Config::config_file().display()
        ));
        info("Use --print to show the effective configuration");
    }

    Ok(())
}
