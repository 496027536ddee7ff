use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::progress::{SkillEta, skill_etas};
use crate::errors::{AppError, AppResult};
use crate::models::player::PlayerStats;
use crate::models::progress::ProgressDocument;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_eta, color_for_level};
use crate::utils::input::load_json;
use crate::utils::table::{Cell, Column, Table};
use tracing::debug;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Eta {
        file,
        progress,
        skill,
        period,
    } = cmd
    {
        let stats: PlayerStats = load_json(file)?;
        let doc: ProgressDocument = load_json(progress)?;

        let period = period.unwrap_or(ctx.cfg.default_period);
        let window = doc.select(period)?;
        let rate = window.progress.daily_experience_rate;
        debug!(period_days = window.period_days, rate, "daily rate selected");

        let mut rows = skill_etas(&stats, rate);

        if let Some(wanted) = skill {
            let (name, _) = stats
                .snapshot(wanted)
                .ok_or_else(|| AppError::UnknownSkill(wanted.clone()))?;
            rows.retain(|r| r.name == name);
        }

        header(
            format!(
                "{} | {} xp/day over {} days",
                stats.username,
                ctx.style.number(rate.floor() as i64),
                window.period_days
            ),
            ctx.style.color,
        );
        print!("{}", render(&rows, ctx));
    }

    Ok(())
}

fn render(rows: &[SkillEta], ctx: &Context) -> String {
    let style = &ctx.style;
    let mut t = Table::new(vec![
        Column::left("Skill"),
        Column::right("Level"),
        Column::right("To next"),
        Column::left("Next level in"),
        Column::left("99 in"),
    ]);

    for r in rows {
        t.add_row(vec![
            Cell::from(r.name.as_str()),
            Cell::colored(r.level.to_string(), color_for_level(r.level)),
            Cell::from(style.number(r.to_next as i64)),
            Cell::colored(r.eta_next.clone(), color_for_eta(&r.eta_next)),
            Cell::colored(r.eta_max.clone(), color_for_eta(&r.eta_max)),
        ]);
    }

    t.render(style.separator, style.color)
}
