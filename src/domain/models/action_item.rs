use serde::Serialize;

use super::Priority;

/// Assignee used when the model does not name an owner.
pub const UNASSIGNED: &str = "TBD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    task: String,
    assignee: String,
    deadline: Option<String>,
    priority: Priority,
}

impl ActionItem {
    /// An empty or whitespace-only assignee is replaced with [`UNASSIGNED`]
    /// so that every item has an owner.
    pub fn new(task: impl Into<String>, assignee: impl Into<String>) -> Self {
        let assignee = assignee.into();
        let assignee = if assignee.trim().is_empty() {
            UNASSIGNED.to_string()
        } else {
            assignee
        };

        Self {
            task: task.into(),
            assignee,
            deadline: None,
            priority: Priority::default(),
        }
    }

    pub fn with_deadline(mut self, deadline: Option<String>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    pub fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_unassigned(&self) -> bool {
        self.assignee == UNASSIGNED
    }
}
