use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::filter::MetricFilter;

/// Accepts a list of metric filters either inline (YAML) or as a JSON string
/// (environment variables).
///
/// Unlike most settings, a malformed entry is an error: running with part of
/// an exclusion list would silently keep or drop the wrong data.
pub fn deserialize_metric_filters<'de, D>(deserializer: D) -> Result<Vec<MetricFilter>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: JsonValue = Deserialize::deserialize(deserializer)?;

    match value {
        JsonValue::String(s) if s.trim().is_empty() => Ok(Vec::new()),
        JsonValue::String(s) => serde_json::from_str(&s).map_err(|e| {
            tracing::error!("CONFIG | Failed to parse metric filters: {}", e);
            serde::de::Error::custom(e)
        }),
        JsonValue::Array(_) => serde_json::from_value(value).map_err(|e| {
            tracing::error!("CONFIG | Failed to parse metric filter: {}", e);
            serde::de::Error::custom(e)
        }),
        JsonValue::Null => Ok(Vec::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a list of metric filters, got {other}"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_array() {
        let input = json!([
            {"metric_names": ["cpu.*", "!cpu.idle"]},
            {"metric_name": "disk.used", "dimensions": {"device": "sda*"}}
        ]);

        let result = deserialize_metric_filters(input).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].metric_names, vec!["cpu.*", "!cpu.idle"]);
        assert_eq!(result[1].metric_name, "disk.used");
        assert_eq!(result[1].dimensions["device"], json!("sda*"));
    }

    #[test]
    fn test_deserialize_json_string() {
        let input = json!(r#"[{"metric_names": ["m1", "m2"]}]"#);

        let result = deserialize_metric_filters(input).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].metric_names, vec!["m1", "m2"]);
    }

    #[test]
    fn test_deserialize_empty() {
        assert!(deserialize_metric_filters(json!("")).unwrap().is_empty());
        assert!(deserialize_metric_filters(json!(null)).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_malformed_entry() {
        let input = json!([{"metric_names": "not-a-list"}]);
        assert!(deserialize_metric_filters(input).is_err());

        assert!(deserialize_metric_filters(json!("[{")).is_err());
        assert!(deserialize_metric_filters(json!(42)).is_err());
    }
}
