//! Query string encoding for GET parameters
//!
//! Parameters are any serialisable struct or map. Fields that serialise to
//! `null` are left out, everything else becomes a single `key=value` pair.

use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;

/// Flatten `params` into query pairs, sorted by key.
///
/// # Errors
/// `ApiError::Config` if `params` does not serialise to a JSON object (or
/// to `null`, meaning no parameters).
pub fn encode_query<P>(params: &P) -> Result<Vec<(String, String)>, ApiError>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params)
        .map_err(|e| ApiError::Config(format!("Failed to serialize query parameters: {e}")))?;

    match value {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => Ok(map
            .into_iter()
            .filter_map(|(key, value)| stringify(value).map(|value| (key, value)))
            .collect()),
        other => Err(ApiError::Config(format!("Query parameters must be an object, got {other}"))),
    }
}

fn stringify(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| stringify(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Filters {
        category: Option<String>,
        export_ready: Option<bool>,
        limit: Option<u32>,
        search: Option<String>,
    }

    #[test]
    fn drops_none_and_stringifies_the_rest() {
        let filters = Filters {
            category: Some("food".into()),
            export_ready: Some(true),
            limit: Some(20),
            search: None,
        };

        assert_eq!(
            encode_query(&filters).unwrap(),
            vec![
                ("category".to_string(), "food".to_string()),
                ("export_ready".to_string(), "true".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn arrays_are_comma_joined() {
        let pairs = encode_query(&json!({ "ids": ["a", 2, null] })).unwrap();
        assert_eq!(pairs, vec![("ids".to_string(), "a,2,".to_string())]);
    }

    #[test]
    fn unit_means_no_parameters() {
        assert!(encode_query(&()).unwrap().is_empty());
    }

    #[test]
    fn scalar_is_rejected() {
        assert!(matches!(encode_query(&5), Err(ApiError::Config(_))));
    }
}
