use super::{audit, line_index, open_state, parse_day, report};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date,
        scope,
        line,
        text,
    } = cmd
    {
        let d = parse_day(date)?;
        let idx = line_index(*line)?;

        let mut state = open_state(cfg)?;
        let changed = state.update_days(|days| EditLogic::set_line(days, d, scope, idx, text));

        if changed {
            audit(
                &state,
                "edit",
                &d.to_string(),
                &format!("Line {line} of scope '{scope}' updated"),
            );
        }
        report(
            &mut state,
            d,
            changed,
            &format!("Line {line} of '{scope}' updated on {d}."),
            cfg,
        );
    }

    Ok(())
}
