use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{note, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let rows = ImportLogic::read_file(&expand_tilde(file))?;
        let mut pool = open_pool(cfg)?;

        let summary = ImportLogic::apply(&mut pool, &rows)?;

        for n in &summary.notes {
            note(n);
        }

        success(format!(
            "Imported {} new and {} updated entries ({} rows read).",
            summary.inserted,
            summary.updated,
            rows.len()
        ));
    }
    Ok(())
}
