use serde_json::{Map, Value};

use crate::domain::{
    ActionItem, DomainError, MeetingMinutes, Priority, TopicDiscussed, DEFAULT_TITLE, UNASSIGNED,
};

pub const UNKNOWN_TOPIC: &str = "Unknown Topic";

/// Turn the model's loosely typed JSON into [`MeetingMinutes`].
///
/// Missing fields are defaulted; `null` counts as missing for defaulted
/// strings and lists. `priority` is the exception: an absent priority becomes
/// `medium`, but any present value outside `high|medium|low` (including
/// `null`) is rejected with [`DomainError::InvalidPriority`].
///
/// Order of topics and action items is preserved.
pub fn coerce_minutes(data: &Map<String, Value>) -> Result<MeetingMinutes, DomainError> {
    let root = Fields::new(data, "");

    let topics = root
        .objects("topics_discussed")?
        .into_iter()
        .map(|topic| coerce_topic(&topic))
        .collect::<Result<Vec<_>, _>>()?;

    let action_items = root
        .objects("action_items")?
        .into_iter()
        .map(|item| coerce_action_item(&item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MeetingMinutes::builder(root.string_or("title", DEFAULT_TITLE)?)
        .date(root.optional_string("date")?)
        .attendees(root.strings("attendees")?)
        .topics_discussed(topics)
        .action_items(action_items)
        .next_meeting(root.optional_string("next_meeting")?)
        .build())
}

fn coerce_topic(fields: &Fields<'_>) -> Result<TopicDiscussed, DomainError> {
    Ok(TopicDiscussed::new(
        fields.string_or("topic", UNKNOWN_TOPIC)?,
        fields.string_or("summary", "")?,
    )
    .with_decisions(fields.strings("decisions")?))
}

fn coerce_action_item(fields: &Fields<'_>) -> Result<ActionItem, DomainError> {
    Ok(ActionItem::new(
        fields.string_or("task", "")?,
        fields.string_or("assignee", UNASSIGNED)?,
    )
    .with_deadline(fields.optional_string("deadline")?)
    .with_priority(coerce_priority(fields.get("priority"))?))
}

fn coerce_priority(value: Option<&Value>) -> Result<Priority, DomainError> {
    match value {
        None => Ok(Priority::default()),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(DomainError::InvalidPriority(other.to_string())),
    }
}

/// Typed field access over one JSON object, with a path prefix for errors.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    fn new(map: &'a Map<String, Value>, path: impl Into<String>) -> Self {
        Self {
            map,
            path: path.into(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn type_error(&self, key: &str, expected: &str, found: &Value) -> DomainError {
        DomainError::invalid_model_output(format!(
            "{} must be {}, got {}",
            self.field_path(key),
            expected,
            found
        ))
    }

    fn string_or(&self, key: &str, default: &str) -> Result<String, DomainError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(default.to_string()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.type_error(key, "a string", other)),
        }
    }

    fn optional_string(&self, key: &str) -> Result<Option<String>, DomainError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.type_error(key, "a string or null", other)),
        }
    }

    fn array(&self, key: &str) -> Result<&'a [Value], DomainError> {
        match self.get(key) {
            None | Some(Value::Null) => Ok(&[]),
            Some(Value::Array(values)) => Ok(values.as_slice()),
            Some(other) => Err(self.type_error(key, "an array", other)),
        }
    }

    fn strings(&self, key: &str) -> Result<Vec<String>, DomainError> {
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::String(s) => Ok(s.clone()),
                other => Err(self.type_error(&format!("{key}[{i}]"), "a string", other)),
            })
            .collect()
    }

    fn objects(&self, key: &str) -> Result<Vec<Fields<'a>>, DomainError> {
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let item_key = format!("{key}[{i}]");
                match value {
                    Value::Object(map) => Ok(Fields::new(map, self.field_path(&item_key))),
                    other => Err(self.type_error(&item_key, "an object", other)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn coerce(value: Value) -> Result<MeetingMinutes, DomainError> {
        match value {
            Value::Object(map) => coerce_minutes(&map),
            _ => panic!("test payload must be an object"),
        }
    }

    #[test]
    fn empty_object_gets_all_defaults() {
        let minutes = coerce(json!({})).unwrap();

        assert_eq!(minutes.title(), "Untitled Meeting");
        assert_eq!(minutes.date(), None);
        assert!(minutes.attendees().is_empty());
        assert!(minutes.topics_discussed().is_empty());
        assert!(minutes.action_items().is_empty());
        assert_eq!(minutes.next_meeting(), None);
    }

    #[test]
    fn missing_assignee_becomes_tbd() {
        let minutes = coerce(json!({
            "action_items": [{"task": "Send the deck", "priority": "low"}]
        }))
        .unwrap();

        let item = &minutes.action_items()[0];
        assert_eq!(item.assignee(), "TBD");
        assert_eq!(item.priority(), Priority::Low);
        assert_eq!(item.deadline(), None);
    }

    #[test]
    fn topic_and_item_defaults() {
        let minutes = coerce(json!({
            "topics_discussed": [{}],
            "action_items": [{}]
        }))
        .unwrap();

        let topic = &minutes.topics_discussed()[0];
        assert_eq!(topic.topic(), "Unknown Topic");
        assert_eq!(topic.summary(), "");
        assert!(topic.decisions().is_empty());

        let item = &minutes.action_items()[0];
        assert_eq!(item.task(), "");
        assert_eq!(item.priority(), Priority::Medium);
    }

    #[test]
    fn unknown_priority_is_rejected_with_value() {
        let err = coerce(json!({
            "action_items": [{"task": "Fix prod", "assignee": "Rahul", "priority": "urgent"}]
        }))
        .unwrap_err();

        assert!(matches!(err, DomainError::InvalidPriority(ref v) if v == "urgent"));
    }

    #[test]
    fn null_priority_is_rejected() {
        let err = coerce(json!({"action_items": [{"priority": null}]})).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPriority(ref v) if v == "null"));
    }

    #[test]
    fn optional_fields_pass_through() {
        let minutes = coerce(json!({
            "date": "January 15, 2026",
            "next_meeting": null,
            "action_items": [{"task": "t", "assignee": "a", "deadline": "Friday"}]
        }))
        .unwrap();

        assert_eq!(minutes.date(), Some("January 15, 2026"));
        assert_eq!(minutes.next_meeting(), None);
        assert_eq!(minutes.action_items()[0].deadline(), Some("Friday"));
    }

    #[test]
    fn preserves_model_order() {
        let minutes = coerce(json!({
            "action_items": [
                {"task": "b", "assignee": "x"},
                {"task": "a", "assignee": "x"},
                {"task": "b", "assignee": "x"}
            ]
        }))
        .unwrap();

        let tasks: Vec<&str> = minutes.action_items().iter().map(|i| i.task()).collect();
        assert_eq!(tasks, vec!["b", "a", "b"]);
    }

    #[test]
    fn preserves_topic_order() {
        let minutes = coerce(json!({
            "topics_discussed": [
                {"topic": "Budget", "summary": "first pass"},
                {"topic": "Hiring", "summary": "two openings"},
                {"topic": "Budget", "summary": "revisited"}
            ]
        }))
        .unwrap();

        let topics: Vec<(&str, &str)> = minutes
            .topics_discussed()
            .iter()
            .map(|t| (t.topic(), t.summary()))
            .collect();
        assert_eq!(
            topics,
            vec![
                ("Budget", "first pass"),
                ("Hiring", "two openings"),
                ("Budget", "revisited")
            ]
        );
    }

    #[test]
    fn wrong_type_names_the_field() {
        let err = coerce(json!({"topics_discussed": [{"topic": "x", "decisions": [1]}]}))
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidModelOutput(_)));
        assert!(err.to_string().contains("topics_discussed[0].decisions[0]"));
    }
}
