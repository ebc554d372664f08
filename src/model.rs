use chrono::{DateTime, Utc};

// Data model representing a Todo item
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn todo_serializes_null_description_explicitly() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: None,
            completed: false,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&todo).unwrap();
        // The wire shape always carries the description key, null or not
        assert!(json.get("description").is_some());
        assert!(json["description"].is_null());
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: 7,
            title: "Roundtrip".to_string(),
            description: Some("with description".to_string()),
            completed: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        };

        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }
}
