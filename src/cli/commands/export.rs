use crate::cli::commands::Context;
use crate::cli::commands::top::resolve_count;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::progress::ProgressDocument;
use crate::utils::input::load_json;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        kind,
        count,
        period,
        force,
    } = cmd
    {
        let doc: ProgressDocument = load_json(input)?;
        let window = doc.select(period.unwrap_or(ctx.cfg.default_period))?;
        let count = resolve_count(*count, ctx)?;
        ExportLogic::export(
            window,
            *kind,
            count,
            *format,
            file,
            *force,
            ctx.style.color,
        )?;
    }
    Ok(())
}
