//! Lenient deserialization of free-text fields.
//!
//! YAML reads `name: 2024` or `description: 3` as numbers. Text fields
//! accept any scalar and keep its written form.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            // Keep "1.0" rather than "1"
            Scalar::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.1}"),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Deserializes any scalar into its string form.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(String::from)
}

/// Like [`scalar_string`], with `null` read as `None`.
pub fn optional_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer).map(|scalar| scalar.map(String::from))
}
