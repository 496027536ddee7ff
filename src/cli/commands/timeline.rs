use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::timeline::{BossTimeline, SkillTimeline};
use crate::ui::messages::info;
use crate::utils::colors::color_for_gain;
use crate::utils::formatting::{Style, format_gain};
use crate::utils::input::read_document;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Timeline { file, boss } = cmd {
        let raw = read_document(file)?;
        let style = &ctx.style;

        let (table, total) = if *boss {
            let tl = BossTimeline::from_json(&raw)?;
            (boss_table(&tl, style), tl.total_gained())
        } else {
            let tl = SkillTimeline::from_json(&raw)?;
            (skill_table(&tl, style), tl.total_gained())
        };

        if table.is_empty() {
            info("Timeline is empty", style.color);
            return Ok(());
        }

        print!("{}", table.render(style.separator, style.color));
        println!("\nTotal gained: {}", format_gain(total, &style.thousands));
    }

    Ok(())
}

fn opt_number(v: Option<i64>, style: &Style) -> Cell {
    match v {
        Some(n) => Cell::from(style.number(n)),
        None => Cell::colored("-", crate::utils::colors::GREY),
    }
}

fn delta_cell(d: Option<i64>, style: &Style) -> Cell {
    match d {
        Some(n) => Cell::colored(format_gain(n, &style.thousands), color_for_gain(n)),
        None => Cell::from(""),
    }
}

fn skill_table(tl: &SkillTimeline, style: &Style) -> Table {
    let mut t = Table::new(vec![
        Column::left("Date"),
        Column::right("Level"),
        Column::right("Experience"),
        Column::right("Change"),
    ]);

    for (e, d) in tl.entries.iter().zip(tl.experience_deltas()) {
        t.add_row(vec![
            Cell::from(e.date.to_string()),
            opt_number(e.level.map(i64::from), style),
            opt_number(e.experience.map(|x| x as i64), style),
            delta_cell(d, style),
        ]);
    }
    t
}

fn boss_table(tl: &BossTimeline, style: &Style) -> Table {
    let mut t = Table::new(vec![
        Column::left("Date"),
        Column::right("Kills"),
        Column::right("Change"),
    ]);

    for (e, d) in tl.entries.iter().zip(tl.kill_deltas()) {
        t.add_row(vec![
            Cell::from(e.date.to_string()),
            opt_number(e.kc, style),
            delta_cell(d, style),
        ]);
    }
    t
}
