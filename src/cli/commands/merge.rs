use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::join;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Merge {
        files,
        format,
        file,
        force,
    } = cmd
    {
        let dataset = join::merge_sessions(files, cfg)?;
        ExportLogic::export(&dataset, format, file, *force)?;
    }
    Ok(())
}
