use super::{audit, open_state, parse_day, report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::Scope;

/// Append an empty activity line to a scope.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, scope } = cmd {
        let d = parse_day(date)?;
        let name = scope.as_deref().unwrap_or(Scope::DEFAULT_NAME);

        let mut state = open_state(cfg)?;
        let changed = state.update_days(|days| AddLogic::apply(days, d, Some(name)));

        audit(&state, "add", &d.to_string(), &format!("New line in scope '{name}'"));
        report(&mut state, d, changed, &format!("Line added to '{name}' on {d}."), cfg);
    }

    Ok(())
}
