use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::experience::{experience_to_next_level, level_progress};
use crate::errors::AppResult;
use crate::models::player::PlayerStats;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_level;
use crate::utils::format_percent;
use crate::utils::input::load_json;
use crate::utils::table::{Cell, Column, Table};
use tracing::debug;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Stats { file } = cmd {
        let stats: PlayerStats = load_json(file)?;
        debug!(
            username = %stats.username,
            skills = stats.skills.len(),
            bosses = stats.bosses.len(),
            "player statistics decoded"
        );
        print_stats(&stats, ctx);
    }
    Ok(())
}

fn print_stats(stats: &PlayerStats, ctx: &Context) {
    let style = &ctx.style;

    header(&stats.username, style.color);
    println!(
        "Overall: level {} | {} xp | rank {}\n",
        stats.overall.level,
        style.number(stats.overall.experience as i64),
        style.number(stats.overall.rank)
    );

    let mut skills = Table::new(vec![
        Column::left("Skill"),
        Column::right("Level"),
        Column::right("Experience"),
        Column::right("To next"),
        Column::right("Progress"),
        Column::right("Rank"),
    ]);

    for (name, s) in stats.skills.iter() {
        skills.add_row(vec![
            Cell::from(name.as_str()),
            Cell::colored(s.level.to_string(), color_for_level(s.level)),
            Cell::from(style.number(s.experience as i64)),
            Cell::from(style.number(experience_to_next_level(s.level, s.experience) as i64)),
            Cell::from(format_percent(level_progress(s.level, s.experience))),
            Cell::from(s.rank.map(|r| style.number(r)).unwrap_or_else(|| "-".into())),
        ]);
    }
    print!("{}", skills.render(style.separator, style.color));

    let mut bosses = Table::new(vec![
        Column::left("Boss"),
        Column::right("Kills"),
        Column::right("Rank"),
    ]);
    for (name, b) in stats.killed_bosses() {
        bosses.add_row(vec![
            Cell::from(name),
            Cell::from(style.number(b.kc)),
            Cell::from(style.number(b.rank)),
        ]);
    }

    println!();
    if bosses.is_empty() {
        info("No boss kills recorded", style.color);
    } else {
        print!("{}", bosses.render(style.separator, style.color));
    }
}
