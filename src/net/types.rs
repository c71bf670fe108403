//! Card list DTOs as they appear in the static JSON file.
//!
//! DESIGN
//! ======
//! Only `category` and `image_path` are structural; every other field is
//! optional and a missing key, `null`, or blank string all read as absent.
//! Nothing here validates records: bad data produces degenerate markup.
//! Every field accepts any JSON value and reads it as text, so one odd
//! record never fails the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One trading card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Filter key (e.g. `"rookie"`). Compared case-sensitively.
    #[serde(default, deserialize_with = "deserialize_text_or_empty")]
    pub category: String,
    /// Player name, rendered as the card heading.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub player: Option<String>,
    /// Print year; the source data uses both numbers and strings.
    #[serde(default, deserialize_with = "deserialize_optional_year")]
    pub year: Option<CardYear>,
    /// Grading note such as `"Mint"`.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub condition: Option<String>,
    /// Free-form price text such as `"$100"`.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub market_value: Option<String>,
    /// Image URL, relative to the page.
    #[serde(default, deserialize_with = "deserialize_text_or_empty")]
    pub image_path: String,
}

/// A card year as written in the data file.
///
/// Whole numbers (including `1989.0`) read as `Number`; anything else keeps
/// its text form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CardYear {
    Number(i64),
    Text(String),
}

impl fmt::Display for CardYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl CardRecord {
    /// Player name, if present and not blank.
    #[must_use]
    pub fn player(&self) -> Option<&str> {
        non_blank(self.player.as_deref())
    }

    /// Year as display text, if present and not blank.
    #[must_use]
    pub fn year(&self) -> Option<String> {
        self.year
            .as_ref()
            .map(ToString::to_string)
            .filter(|s| !s.trim().is_empty())
    }

    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        non_blank(self.condition.as_deref())
    }

    #[must_use]
    pub fn market_value(&self) -> Option<&str> {
        non_blank(self.market_value.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Text form of a JSON value; `null` has none.
fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        // `1989.0` reads as `1989`.
        Value::Number(number) if number.is_f64() => number.as_f64().map(|float| format!("{float}")),
        other => Some(other.to_string()),
    }
}

fn deserialize_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(value).unwrap_or_default())
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(value))
}

fn deserialize_optional_year<'de, D>(deserializer: D) -> Result<Option<CardYear>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Value::Number(number) = &value {
        if let Some(int) = number.as_i64() {
            return Ok(Some(CardYear::Number(int)));
        }
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::float_cmp)]
        if let Some(float) = number.as_f64()
            && float.is_finite()
            && float.fract() == 0.0
            && float >= i64::MIN as f64
            && float <= i64::MAX as f64
        {
            return Ok(Some(CardYear::Number(float as i64)));
        }
    }
    Ok(value_text(value).map(CardYear::Text))
}

/// Parse the card list document.
///
/// # Errors
///
/// Returns the serde error if the document is not a JSON array of objects.
pub fn parse_cards(json: &str) -> Result<Vec<CardRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
