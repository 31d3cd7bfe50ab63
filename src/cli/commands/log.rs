use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let pool = open_pool(cfg)?;
            LogLogic::print_log(&pool)?;
        } else {
            info("Nothing to do: use --print.");
        }
    }
    Ok(())
}
