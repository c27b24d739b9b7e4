use super::{open_state, resolve_month};
use crate::cli::parser::Commands;
use crate::cli::render;
use crate::config::Config;
use crate::core::calendar::materialize;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::format_quantity;
use crate::utils::formatting::format_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let month = resolve_month(month)?;
        let state = open_state(cfg)?;

        let days = materialize(month, state.days());
        let total: f64 = days.iter().map(|d| d.total_time()).sum();

        header(format!("Activity report - {}", format_month(month)));
        print!("{}", render::timesheet(&days, cfg));
        println!("\nTotal: {} day(s)", format_quantity(total));
    }
    Ok(())
}
