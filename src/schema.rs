use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ApiError;

/// Three-state patch field for partial updates: a key that is absent keeps
/// the stored value, an explicit `null` clears it, and a value replaces it.
/// Relying on a bare `Option` would collapse the first two cases.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Resolves the patch against the currently stored value.
    pub fn resolve(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => current,
            Patch::Clear => None,
            Patch::Set(value) => Some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; #[serde(default)] on the
        // field covers the absent case with Keep.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            // Keep is skipped via skip_serializing_if; Clear is an explicit null
            _ => serializer.serialize_none(),
        }
    }
}

// Struct representing the request body for creating a new Todo
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateTodoSchema {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateTodoSchema {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }
}

// Struct representing the request body for partially updating a Todo
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateTodoSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoSchema {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ApiError::Validation("title must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

// Response body for the delete operation
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_schema_defaults_description_to_null() {
        let input: CreateTodoSchema = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.description, None);
    }

    #[test]
    fn create_schema_rejects_missing_title() {
        let result: Result<CreateTodoSchema, _> =
            serde_json::from_str(r#"{"description":"no title"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_schema_rejects_blank_title() {
        let input = CreateTodoSchema {
            title: "   ".to_string(),
            description: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_schema_absent_description_keeps() {
        let input: UpdateTodoSchema = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("New"));
        assert_eq!(input.description, Patch::Keep);
        assert_eq!(input.completed, None);
    }

    #[test]
    fn update_schema_null_description_clears() {
        let input: UpdateTodoSchema = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(input.description, Patch::Clear);
    }

    #[test]
    fn update_schema_present_description_sets() {
        let input: UpdateTodoSchema =
            serde_json::from_str(r#"{"description":"details"}"#).unwrap();
        assert_eq!(input.description, Patch::Set("details".to_string()));
    }

    #[test]
    fn update_schema_empty_body_keeps_everything() {
        let input: UpdateTodoSchema = serde_json::from_str("{}").unwrap();
        assert_eq!(input.title, None);
        assert_eq!(input.description, Patch::Keep);
        assert_eq!(input.completed, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_schema_rejects_blank_title() {
        let input = UpdateTodoSchema {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_schema_serializes_clear_as_null_and_skips_keep() {
        let cleared = UpdateTodoSchema {
            description: Patch::Clear,
            ..Default::default()
        };
        let json = serde_json::to_value(&cleared).unwrap();
        assert!(json["description"].is_null());
        assert!(json.get("title").is_none());

        let untouched = UpdateTodoSchema::default();
        let json = serde_json::to_value(&untouched).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn patch_resolves_against_current_value() {
        let current = Some("old".to_string());
        assert_eq!(Patch::Keep.resolve(current.clone()), current);
        assert_eq!(Patch::<String>::Clear.resolve(current.clone()), None);
        assert_eq!(
            Patch::Set("new".to_string()).resolve(current),
            Some("new".to_string())
        );
    }
}
