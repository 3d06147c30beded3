//! Hydration of loosely typed bridge payloads into typed shapes.
//!
//! The GUI bridge hands over JSON that is sometimes already decoded into a
//! [`serde_json::Value`] and sometimes still text. [`Hydrate`] accepts
//! either form: blank or null payloads become default instances, sequence
//! payloads hydrate one element at a time in order, and malformed JSON
//! text propagates as an error to the calling binding layer. Each shape
//! declares its scalar and nested-sequence fields statically through its
//! serde derive, so hydration never inspects runtime type information.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::state::{ActionResponse, BrewData, BrewPackage, ServiceInfo};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Conversion from raw bridge payloads into a typed shape.
///
/// Implementors only opt in; every entry point is provided by the trait.
pub trait Hydrate: DeserializeOwned + Default {
    /// What: Hydrate a single shape from an already decoded JSON value.
    ///
    /// Inputs:
    /// - `raw`: Decoded payload; `Null` stands for an absent payload.
    ///
    /// Output:
    /// - The typed instance, or a default instance when `raw` is `Null`.
    ///
    /// # Errors
    /// - Returns `Err` when `raw` does not match the shape's field types
    ///   (e.g., a scalar where a mapping is declared).
    ///
    /// Details:
    /// - Never attempts a JSON parse; text payloads go through
    ///   [`Hydrate::from_json`] instead.
    fn from_value(raw: Value) -> Result<Self> {
        match raw {
            Value::Null => {
                tracing::debug!("hydrating absent payload into default shape");
                Ok(Self::default())
            }
            other => Ok(serde_json::from_value(other)?),
        }
    }

    /// What: Hydrate a single shape from JSON text.
    ///
    /// Inputs:
    /// - `raw`: JSON text as received from the bridge.
    ///
    /// Output:
    /// - The typed instance; blank text yields a default instance.
    ///
    /// # Errors
    /// - Returns `Err` when `raw` is non-blank but not valid JSON.
    /// - Returns `Err` when the decoded value does not match the shape.
    fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            tracing::debug!("hydrating blank payload into default shape");
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// What: Hydrate an ordered sequence of shapes from a decoded value.
    ///
    /// Inputs:
    /// - `raw`: Decoded payload; `Null`, an array, or a lone mapping.
    ///
    /// Output:
    /// - One hydrated instance per array element, input order preserved.
    ///   `Null` yields an empty vector; a lone mapping is wrapped as a
    ///   one-element vector.
    ///
    /// # Errors
    /// - Returns `Err` when any element fails to hydrate, or when `raw`
    ///   is a scalar that cannot stand for a sequence.
    fn vec_from_value(raw: Value) -> Result<Vec<Self>> {
        match raw {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            Value::Object(map) => {
                tracing::debug!("wrapping lone mapping as a one-element sequence");
                Ok(vec![Self::from_value(Value::Object(map))?])
            }
            other => Ok(serde_json::from_value(other)?),
        }
    }

    /// What: Hydrate an ordered sequence of shapes from JSON text.
    ///
    /// Inputs:
    /// - `raw`: JSON text as received from the bridge.
    ///
    /// Output:
    /// - Hydrated instances in input order; blank text yields an empty
    ///   vector.
    ///
    /// # Errors
    /// - Returns `Err` when `raw` is non-blank but not valid JSON.
    /// - Returns `Err` when any element fails to hydrate.
    fn vec_from_json(raw: &str) -> Result<Vec<Self>> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let value: Value = serde_json::from_str(raw)?;
        Self::vec_from_value(value)
    }
}

impl Hydrate for ActionResponse {}
impl Hydrate for BrewPackage {}
impl Hydrate for BrewData {}
impl Hydrate for ServiceInfo {}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Valid JSON text hydrates into an `ActionResponse` verbatim.
    ///
    /// - Input: `{"success":true,"message":"done"}`
    /// - Output: `success == true`, `message == "done"`
    #[test]
    fn action_response_from_json_text() {
        let resp = ActionResponse::from_json(r#"{"success":true,"message":"done"}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.message, "done");
    }

    /// What: Blank text hydrates into a default instance instead of erroring
    ///
    /// - Input: Empty and whitespace-only payload text
    /// - Output: Default shape with zero-valued fields
    #[test]
    fn blank_text_yields_default_instance() {
        let resp = ActionResponse::from_json("").unwrap();
        assert_eq!(resp, ActionResponse::default());
        let pkg = BrewPackage::from_json("  \n").unwrap();
        assert!(pkg.name.is_empty() && pkg.version.is_empty() && pkg.status.is_empty());
    }

    /// What: Malformed JSON text propagates as an error
    ///
    /// - Input: Truncated object text
    /// - Output: `Err` from the text entry point
    #[test]
    fn malformed_json_text_is_an_error() {
        assert!(ActionResponse::from_json(r#"{"success":tru"#).is_err());
        assert!(BrewData::from_json("not json").is_err());
    }

    /// What: Already decoded values hydrate without a JSON parse
    ///
    /// - Input: A `Value` whose string fields hold text that is not valid JSON
    /// - Output: Fields taken verbatim, no parse attempted
    #[test]
    fn decoded_value_is_never_reparsed() {
        let raw = serde_json::json!({"success": false, "message": "{not json"});
        let resp = ActionResponse::from_value(raw).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, "{not json");
    }

    /// What: Null payloads hydrate into defaults at both arities
    ///
    /// - Input: `Value::Null`
    /// - Output: Default instance / empty vector
    #[test]
    fn null_value_yields_default_or_empty() {
        let data = BrewData::from_value(Value::Null).unwrap();
        assert!(data.formulae.is_empty() && data.casks.is_empty());
        let pkgs = BrewPackage::vec_from_value(Value::Null).unwrap();
        assert!(pkgs.is_empty());
    }

    /// What: Sequence hydration preserves length, order, and field values
    ///
    /// - Input: Three raw package objects
    /// - Output: Three instances, field-by-field equal, in input order
    #[test]
    fn sequence_hydration_preserves_order() {
        let raw = serde_json::json!([
            {"name": "git", "version": "2.40", "status": "none_tool"},
            {"name": "postgresql", "version": "16.1", "status": "started"},
            {"name": "wget", "version": "1.24", "status": "none_tool"},
        ]);
        let pkgs = BrewPackage::vec_from_value(raw).unwrap();
        assert_eq!(pkgs.len(), 3);
        assert_eq!(pkgs[0].name, "git");
        assert_eq!(pkgs[1].status, "started");
        assert_eq!(pkgs[2].version, "1.24");
    }

    /// What: A lone mapping hydrates as a one-element sequence
    ///
    /// - Input: A single raw object where a sequence is expected
    /// - Output: Vector of length one holding the hydrated instance
    #[test]
    fn lone_mapping_wraps_as_single_element() {
        let raw = serde_json::json!({"name": "redis", "version": "7.2", "status": "stopped"});
        let pkgs = BrewPackage::vec_from_value(raw).unwrap();
        assert_eq!(pkgs.len(), 1);
        assert_eq!(pkgs[0].name, "redis");
    }

    /// What: Missing payload fields hydrate to zero values, extras are ignored
    ///
    /// - Input: Object with one declared field missing and one unknown field
    /// - Output: Declared field defaulted, unknown field dropped
    #[test]
    fn missing_and_unknown_fields_degrade_silently() {
        let pkg =
            BrewPackage::from_json(r#"{"name":"htop","pid":412,"version":"3.3"}"#).unwrap();
        assert_eq!(pkg.name, "htop");
        assert_eq!(pkg.version, "3.3");
        assert!(pkg.status.is_empty());
    }

    /// What: Nested sequences hydrate recursively inside `BrewData`
    ///
    /// - Input: The aggregate payload with one formula and no casks
    /// - Output: `formulae.len() == 1`, `formulae[0].name == "git"`, empty casks
    #[test]
    fn brew_data_hydrates_nested_packages() {
        let raw = r#"{"formulae":[{"name":"git","version":"2.40","status":"installed"}],"casks":[]}"#;
        let data = BrewData::from_json(raw).unwrap();
        assert_eq!(data.formulae.len(), 1);
        assert_eq!(data.formulae[0].name, "git");
        assert_eq!(data.formulae[0].status, "installed");
        assert!(data.casks.is_empty());
    }

    /// What: A scalar where a sequence is declared fails to hydrate
    ///
    /// - Input: Number payload passed to sequence hydration
    /// - Output: `Err` describing the type mismatch
    #[test]
    fn scalar_in_place_of_sequence_is_an_error() {
        assert!(BrewPackage::vec_from_value(serde_json::json!(42)).is_err());
    }
}
