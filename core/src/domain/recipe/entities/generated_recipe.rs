use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex is valid"));

/// One recipe as returned by the generative model, before it is persisted.
///
/// Every field is read leniently. Numbers may arrive as strings such as
/// `"30 minutes"` and non-string list entries keep their JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedRecipe {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(alias = "cooking_time", deserialize_with = "lenient_number")]
    pub cooking_time: Option<i32>,
    #[serde(deserialize_with = "lenient_number")]
    pub servings: Option<i32>,
    #[serde(deserialize_with = "lenient_string")]
    pub cuisine: String,
    #[serde(deserialize_with = "lenient_list")]
    pub ingredients: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub instructions: Vec<String>,
    #[serde(alias = "extra_ingredients", deserialize_with = "lenient_list")]
    pub extra_ingredients: Vec<String>,
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn value_to_number(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => LEADING_NUMBER
            .find(s)
            .and_then(|m| m.as_str().parse::<i32>().ok()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_string)
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| value_to_number(&v))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(values) => values.into_iter().map(value_to_string).collect(),
        Value::String(s) => s.lines().map(|line| line.trim().to_string()).collect(),
        _ => Vec::new(),
    };

    Ok(items.into_iter().filter(|item: &String| !item.is_empty()).collect())
}
