use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient amount coercion: JSON numbers pass through, numeric strings
/// parse, and anything else becomes 0.0 so the minimum-amount rule rejects
/// it instead of a deserialization error. Non-finite values also collapse
/// to 0.0; NaN compares false against every guard and must not get past
/// the validation sequence.
pub fn deserialize_lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let amount = match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    };

    Ok(amount)
}
