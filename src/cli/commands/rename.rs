use super::{audit, open_state, parse_day, report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename {
        date,
        scope,
        new_name,
    } = cmd
    {
        let d = parse_day(date)?;

        let mut state = open_state(cfg)?;

        let clash = scope != new_name
            && state
                .days()
                .iter()
                .find(|r| r.date == d)
                .is_some_and(|r| r.scope(scope).is_some() && r.scope(new_name).is_some());
        if clash {
            warning(format!("Scope '{new_name}' already exists on {d}."));
        }

        let changed = state.update_days(|days| EditLogic::rename(days, d, scope, new_name));

        if changed {
            audit(
                &state,
                "rename",
                &d.to_string(),
                &format!("Scope '{scope}' renamed to '{new_name}'"),
            );
        }
        report(
            &mut state,
            d,
            changed,
            &format!("'{scope}' renamed to '{new_name}' on {d}."),
            cfg,
        );
    }

    Ok(())
}
