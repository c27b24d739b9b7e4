use super::{State, audit, open_state, report_write_errors};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::parse_quantity;
use crate::errors::AppResult;
use crate::models::Currency;
use crate::ui::messages::success;
use crate::utils::{format_money, format_quantity};

fn print_settings(state: &State) {
    let currency = state.currency();
    let name = Currency::from_code(currency)
        .map(|c| c.display_name())
        .unwrap_or(currency);

    println!("Daily rate : {}", format_money(state.rate(), currency));
    println!("Currency   : {currency} ({name})");
    println!(
        "Taxes      : {}",
        if state.taxes() { "20% applied" } else { "none" }
    );
}

/// Show or update the billing settings.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        rate,
        clear_rate,
        currency,
        taxes,
    } = cmd
    {
        let mut state = open_state(cfg)?;

        if let Some(raw) = rate {
            let value = parse_quantity(raw);
            state.set_rate(Some(value));
            if value.is_finite() {
                let shown = format_quantity(value);
                audit(&state, "set", "rate", &format!("Daily rate set to {shown}"));
                success(format!("Daily rate set to {shown}."));
            } else {
                audit(&state, "set", "rate", "Daily rate reset");
                success("Daily rate reset to the default.");
            }
        }

        if *clear_rate {
            state.set_rate(None);
            audit(&state, "set", "rate", "Daily rate reset");
            success("Daily rate reset to the default.");
        }

        if let Some(c) = currency {
            state.set_currency(c.code());
            audit(&state, "set", "currency", &format!("Currency set to {}", c.code()));
            success(format!("Currency set to {}.", c.code()));
        }

        if let Some(t) = taxes {
            state.set_taxes(*t);
            audit(&state, "set", "taxes", &format!("Taxes set to {t}"));
            success(format!("Taxes {}.", if *t { "enabled" } else { "disabled" }));
        }

        report_write_errors(&mut state);

        println!();
        print_settings(&state);
    }

    Ok(())
}
