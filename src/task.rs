//! Task records as exchanged with the remote task store.

use serde::{Deserialize, Serialize};

/// A task persisted by the remote store.
///
/// `id` and `created_at` are assigned by the store and never change.
/// `completed` is the only field mutated after creation.
///
/// Stores may spell the identifier `id` or `_id` and the timestamp
/// `created_at` or `createdAt`, and some send both spellings at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    /// Store-assigned identifier.
    pub id: String,
    /// Short title, never empty.
    pub title: String,
    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// ISO-8601 creation timestamp as reported by the store.
    pub created_at: String,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
}

/// Wire shape accepted for [`Task`] before the field spellings are merged.
#[derive(Deserialize)]
struct RawTask {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    underscore_id: Option<String>,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default, rename = "createdAt")]
    camel_created_at: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<RawTask> for Task {
    type Error = String;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let id = raw.id.or(raw.underscore_id).ok_or("missing field `id` or `_id`")?;
        let created_at = raw
            .created_at
            .or(raw.camel_created_at)
            .ok_or("missing field `created_at` or `createdAt`")?;
        Ok(Self { id, title: raw.title, description: raw.description, created_at, completed: raw.completed })
    }
}

impl Task {
    /// Returns the calendar-date part of `created_at` (`YYYY-MM-DD`).
    ///
    /// Falls back to the whole timestamp when it is shorter than a date.
    #[must_use]
    pub fn created_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Title of the new task.
    pub title: String,
    /// Description; sent as an empty string when omitted.
    #[serde(default)]
    pub description: String,
}

impl NewTask {
    /// Builds a creation payload, defaulting a missing description to `""`.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self { title: title.into(), description: description.unwrap_or_default() }
    }
}

/// Partial update for a task. Only fields that are `Some` go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New completion flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that sets only the completion flag.
    #[must_use]
    pub fn completed(value: bool) -> Self {
        Self { completed: Some(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_store_shape_with_underscore_id() {
        let task: Task = serde_json::from_value(json!({
            "_id": "66a1",
            "title": "Buy milk",
            "description": "2%",
            "created_at": "2024-07-24T09:12:00.000Z",
            "completed": false
        }))
        .unwrap();

        assert_eq!(task.id, "66a1");
        assert_eq!(task.created_date(), "2024-07-24");
        assert!(!task.completed);
    }

    #[test]
    fn decodes_camel_case_timestamp_and_defaults() {
        let task: Task = serde_json::from_value(json!({
            "id": "t-1",
            "title": "Call mom",
            "createdAt": "2024-01-02T03:04:05Z"
        }))
        .unwrap();

        assert_eq!(task.created_at, "2024-01-02T03:04:05Z");
        assert_eq!(task.description, "");
        assert!(!task.completed);
    }

    #[test]
    fn decodes_record_carrying_both_spellings() {
        let task: Task = serde_json::from_value(json!({
            "_id": "66a1",
            "id": "66a1",
            "title": "Buy milk",
            "description": "",
            "created_at": "2024-07-24T09:12:00.000Z",
            "createdAt": "2024-07-24T09:12:00.000Z",
            "completed": false
        }))
        .unwrap();

        assert_eq!(task.id, "66a1");
        assert_eq!(task.created_at, "2024-07-24T09:12:00.000Z");
    }

    #[test]
    fn listing_with_mixed_spellings_decodes_every_record() {
        let tasks: Vec<Task> = serde_json::from_value(json!([
            {"_id": "a", "id": "a", "title": "One", "createdAt": "2024-01-01T00:00:00Z"},
            {"id": "b", "title": "Two", "created_at": "2024-01-02T00:00:00Z", "createdAt": "2024-01-02T00:00:00Z"}
        ]))
        .unwrap();

        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(tasks[1].created_date(), "2024-01-02");
    }

    #[test]
    fn missing_identifier_is_rejected() {
        let err = serde_json::from_value::<Task>(json!({
            "title": "Orphan",
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `id` or `_id`"), "{err}");
    }

    #[test]
    fn serializes_with_canonical_field_names() {
        let task = Task {
            id: "a".into(),
            title: "t".into(),
            description: String::new(),
            created_at: "2024-01-01T00:00:00Z".into(),
            completed: true,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["created_at"], "2024-01-01T00:00:00Z");
        assert_eq!(serde_json::from_value::<Task>(value).unwrap(), task);
    }

    #[test]
    fn short_timestamp_is_shown_whole() {
        let task = Task {
            id: "x".into(),
            title: "t".into(),
            description: String::new(),
            created_at: "2024".into(),
            completed: false,
        };
        assert_eq!(task.created_date(), "2024");
    }

    #[test]
    fn new_task_defaults_description_to_empty() {
        let body = serde_json::to_value(NewTask::new("Write report", None)).unwrap();
        assert_eq!(body, json!({"title": "Write report", "description": ""}));
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        assert_eq!(serde_json::to_value(TaskPatch::completed(true)).unwrap(), json!({"completed": true}));
        assert_eq!(serde_json::to_value(TaskPatch::default()).unwrap(), json!({}));
    }
}
