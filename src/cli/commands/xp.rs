use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::experience::{
    MAX_LEVEL, experience_for_level, experience_table, level_for_experience, level_progress,
};
use crate::errors::{AppError, AppResult};
use crate::utils::format_percent;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Xp {
        level,
        experience,
        table,
    } = cmd
    {
        let style = &ctx.style;

        if level.is_none() && experience.is_none() && !table {
            return Err(AppError::InvalidArgument(
                "use --level, --experience or --table".into(),
            ));
        }

        if let Some(l) = level {
            if !(1..=MAX_LEVEL).contains(l) {
                return Err(AppError::InvalidArgument(format!(
                    "level must be between 1 and {MAX_LEVEL}, got {l}"
                )));
            }
            println!(
                "Level {}: {} xp",
                l,
                style.number(experience_for_level(*l) as i64)
            );
        }

        if let Some(x) = experience {
            let l = level_for_experience(*x);
            println!(
                "{} xp: level {} ({} to level {})",
                style.number(*x as i64),
                l,
                format_percent(level_progress(l, *x)),
                (l + 1).min(MAX_LEVEL)
            );
        }

        if *table {
            let mut t = Table::new(vec![
                Column::right("Level"),
                Column::right("Experience"),
                Column::right("Difference"),
            ]);
            let mut previous = 0;
            for (l, xp) in experience_table() {
                t.add_row(vec![
                    Cell::from(l.to_string()),
                    Cell::from(style.number(xp as i64)),
                    Cell::from(style.number((xp - previous) as i64)),
                ]);
                previous = xp;
            }
            print!("{}", t.render(style.separator, style.color));
        }
    }

    Ok(())
}
