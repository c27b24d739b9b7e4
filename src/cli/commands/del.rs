use super::{audit, line_index, open_state, parse_day, report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, scope, line } = cmd {
        let d = parse_day(date)?;
        let idx = line_index(*line)?;

        let mut state = open_state(cfg)?;
        let changed = state.update_days(|days| DeleteLogic::apply(days, d, scope, idx));

        if changed {
            audit(
                &state,
                "del",
                &d.to_string(),
                &format!("Line {line} of scope '{scope}' deleted"),
            );
        }
        report(
            &mut state,
            d,
            changed,
            &format!("Line {line} of '{scope}' deleted on {d}."),
            cfg,
        );
    }

    Ok(())
}
