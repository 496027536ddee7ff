use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::progress::rank_top_gains;
use crate::errors::{AppError, AppResult};
use crate::models::gain::Gain;
use crate::models::progress::ProgressDocument;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_gain;
use crate::utils::formatting::format_gain;
use crate::utils::input::load_json;
use crate::utils::table::{Cell, Column, Table};

/// Row count from the command line, falling back to the configuration.
pub(crate) fn resolve_count(count: Option<usize>, ctx: &Context) -> AppResult<usize> {
    match count {
        Some(0) => Err(AppError::InvalidArgument("--count must be at least 1".into())),
        Some(n) => Ok(n),
        None => Ok(ctx.cfg.top_count),
    }
}

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Top {
        file,
        kind,
        count,
        period,
    } = cmd
    {
        let doc: ProgressDocument = load_json(file)?;
        let window = doc.select(period.unwrap_or(ctx.cfg.default_period))?;
        let count = resolve_count(*count, ctx)?;

        let gains = rank_top_gains(window.progress.gains(*kind), count);

        header(
            format!("{} (last {} days)", kind.label(), window.period_days),
            ctx.style.color,
        );

        if gains.is_empty() {
            info("No gains in this window", ctx.style.color);
            return Ok(());
        }

        print!("{}", render(&gains, ctx));
    }

    Ok(())
}

fn render(gains: &[Gain], ctx: &Context) -> String {
    let style = &ctx.style;
    let mut t = Table::new(vec![
        Column::right("#"),
        Column::left("Name"),
        Column::right("Gained"),
    ]);

    for (i, g) in gains.iter().enumerate() {
        t.add_row(vec![
            Cell::from((i + 1).to_string()),
            Cell::from(g.name.as_str()),
            Cell::colored(format_gain(g.amount, &style.thousands), color_for_gain(g.amount)),
        ]);
    }

    t.render(style.separator, style.color)
}
