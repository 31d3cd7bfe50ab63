use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;

/// Colour per audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "clock_in" => Colour::Green,
        "clock_out" => Colour::Cyan,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "import" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + 1 + target.chars().take(8).count())
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            // target: uuid accorciato
            let short: String = target.chars().take(8).collect();
            let cell = if short.is_empty() {
                color.paint(operation.as_str()).to_string()
            } else {
                format!("{} {}", color.paint(operation.as_str()), short)
            };

            // padding calcolato SENZA ANSI
            let padding = " ".repeat(op_w.saturating_sub(visible_width(&cell)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                cell,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
