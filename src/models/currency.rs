use clap::ValueEnum;
use serde::Serialize;

/// Currencies offered by the CLI. Storage keeps any ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Currency {
    #[value(name = "EUR", alias = "eur")]
    Eur,
    #[value(name = "USD", alias = "usd")]
    Usd,
    #[value(name = "JPY", alias = "jpy")]
    Jpy,
}

impl Currency {
    pub const DEFAULT_CODE: &'static str = "EUR";

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Jpy => "JPY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "EUR" => Some(Currency::Eur),
            "USD" => Some(Currency::Usd),
            "JPY" => Some(Currency::Jpy),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$US",
            Currency::Jpy => "¥",
        }
    }

    /// Plural display name, as shown next to the currency selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Eur => "euros",
            Currency::Usd => "dollars des États-Unis",
            Currency::Jpy => "yens japonais",
        }
    }

    pub fn minor_digits(&self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }
}
