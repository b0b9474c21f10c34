//! Request payloads for creating and updating users

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

/// Field name -> message, keyed by the JSON field name the client sent
pub type ValidationErrors = BTreeMap<String, String>;

/// Payload for `POST /user`
///
/// Missing fields deserialize as empty strings so they surface as validation
/// errors rather than as a malformed body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserParams {
    #[validate(length(
        min = 2,
        message = "firstName length should be at least 2 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 2,
        message = "lastName length should be at least 2 characters"
    ))]
    pub last_name: String,

    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(
        min = 7,
        message = "password length should be at least 7 characters"
    ))]
    pub password: String,
}

impl CreateUserParams {
    /// Run field validation, returning every failing field
    ///
    /// An empty map means the params are valid.
    pub fn validation_errors(&self) -> ValidationErrors {
        let Err(errors) = self.validate() else {
            return ValidationErrors::new();
        };

        errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, field_errors)| {
                let message = field_errors
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))?;
                Some((wire_name(&field).to_string(), message))
            })
            .collect()
    }
}

/// Payload for `PUT /user/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserParams {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UpdateUserParams {
    /// Fields to overwrite in the stored document
    ///
    /// Keys match the stored [`User`](super::User) document. Absent and empty
    /// fields are left out so they keep their current value.
    pub fn to_document(&self) -> Map<String, Value> {
        let mut document = Map::new();

        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
        ];

        for (key, value) in fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                document.insert(key.to_string(), Value::String(value.to_string()));
            }
        }

        document
    }
}

/// JSON name the client used for a struct field
fn wire_name(field: &str) -> &str {
    match field {
        "first_name" => "firstName",
        "last_name" => "lastName",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> CreateUserParams {
        CreateUserParams {
            first_name: "James".to_string(),
            last_name: "Foo".to_string(),
            email: "james@foo.com".to_string(),
            password: "supersecret".to_string(),
        }
    }

    #[test]
    fn test_valid_params() {
        assert!(valid_params().validation_errors().is_empty());
    }

    #[test]
    fn test_empty_names() {
        let params = CreateUserParams {
            first_name: String::new(),
            last_name: String::new(),
            ..valid_params()
        };

        let errors = params.validation_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors["firstName"],
            "firstName length should be at least 2 characters"
        );
        assert_eq!(
            errors["lastName"],
            "lastName length should be at least 2 characters"
        );
    }

    #[test]
    fn test_short_password() {
        let params = CreateUserParams {
            password: "123456".to_string(),
            ..valid_params()
        };

        let errors = params.validation_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn test_password_at_minimum_length() {
        let params = CreateUserParams {
            password: "1234567".to_string(),
            ..valid_params()
        };

        assert!(params.validation_errors().is_empty());
    }

    #[test]
    fn test_invalid_email() {
        let params = CreateUserParams {
            email: "not-an-email".to_string(),
            ..valid_params()
        };

        let errors = params.validation_errors();
        assert_eq!(errors.get("email").map(String::as_str), Some("email is invalid"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let params: CreateUserParams = serde_json::from_str(r#"{"firstName": "James"}"#).unwrap();

        assert_eq!(params.first_name, "James");
        assert!(params.last_name.is_empty());

        let errors = params.validation_errors();
        assert!(errors.contains_key("lastName"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
        assert!(!errors.contains_key("firstName"));
    }

    #[test]
    fn test_update_document_only_present_fields() {
        let params: UpdateUserParams = serde_json::from_str(r#"{"firstName": "Jim"}"#).unwrap();
        let document = params.to_document();

        assert_eq!(document.len(), 1);
        assert_eq!(document["first_name"], "Jim");
    }

    #[test]
    fn test_update_document_skips_empty_strings() {
        let params = UpdateUserParams {
            first_name: Some(String::new()),
            last_name: Some("Bar".to_string()),
        };
        let document = params.to_document();

        assert!(!document.contains_key("first_name"));
        assert_eq!(document["last_name"], "Bar");
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let params: UpdateUserParams =
            serde_json::from_str(r#"{"isAdmin": true, "email": "x@y.z"}"#).unwrap();
        assert!(params.to_document().is_empty());
    }

    #[test]
    fn test_wire_name() {
        assert_eq!(wire_name("first_name"), "firstName");
        assert_eq!(wire_name("last_name"), "lastName");
        assert_eq!(wire_name("password"), "password");
    }
}
