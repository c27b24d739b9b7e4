use super::{open_state, resolve_month};
use crate::cli::parser::Commands;
use crate::cli::render;
use crate::config::Config;
use crate::core::billing::aggregate;
use crate::core::calendar::materialize;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::format_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bill { month } = cmd {
        let month = resolve_month(month)?;
        let state = open_state(cfg)?;

        let breakdown = aggregate(&materialize(month, state.days()));

        header(format!("Billing - {}", format_month(month)));
        print!(
            "{}",
            render::billing(
                &breakdown,
                state.rate(),
                state.currency(),
                state.taxes(),
                cfg
            )
        );
    }
    Ok(())
}
