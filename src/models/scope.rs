use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A named unit of work within a day: quantity in days plus activity lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "time_or_zero")]
    pub time: f64,
    #[serde(default)]
    pub content: Vec<String>,
}

/// Non-finite numbers were persisted as `null`; they read back as 0, and so
/// does anything else that is not a number. Numeric strings (`"1.5"`) count.
fn time_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let time = match &value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(time.filter(|v| v.is_finite()).unwrap_or(0.0))
}

impl Scope {
    pub const DEFAULT_NAME: &'static str = "x";
    pub const DEFAULT_TIME: f64 = 1.0;

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            time: Self::DEFAULT_TIME,
            content: Vec::new(),
        }
    }
}
