use serde::Serialize;

use super::{ActionItem, TopicDiscussed};

pub const DEFAULT_TITLE: &str = "Untitled Meeting";

/// Structured minutes for one meeting. Built once per request and never
/// mutated afterwards; only read accessors are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingMinutes {
    title: String,
    date: Option<String>,
    attendees: Vec<String>,
    topics_discussed: Vec<TopicDiscussed>,
    action_items: Vec<ActionItem>,
    next_meeting: Option<String>,
}

impl MeetingMinutes {
    pub fn builder(title: impl Into<String>) -> MeetingMinutesBuilder {
        MeetingMinutesBuilder {
            title: title.into(),
            date: None,
            attendees: Vec::new(),
            topics_discussed: Vec::new(),
            action_items: Vec::new(),
            next_meeting: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    pub fn topics_discussed(&self) -> &[TopicDiscussed] {
        &self.topics_discussed
    }

    pub fn action_items(&self) -> &[ActionItem] {
        &self.action_items
    }

    pub fn next_meeting(&self) -> Option<&str> {
        self.next_meeting.as_deref()
    }

    pub fn decision_count(&self) -> usize {
        self.topics_discussed
            .iter()
            .map(|t| t.decisions().len())
            .sum()
    }
}

pub struct MeetingMinutesBuilder {
    title: String,
    date: Option<String>,
    attendees: Vec<String>,
    topics_discussed: Vec<TopicDiscussed>,
    action_items: Vec<ActionItem>,
    next_meeting: Option<String>,
}

impl MeetingMinutesBuilder {
    pub fn date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn attendees(mut self, attendees: Vec<String>) -> Self {
        self.attendees = attendees;
        self
    }

    pub fn topics_discussed(mut self, topics: Vec<TopicDiscussed>) -> Self {
        self.topics_discussed = topics;
        self
    }

    pub fn action_items(mut self, items: Vec<ActionItem>) -> Self {
        self.action_items = items;
        self
    }

    pub fn next_meeting(mut self, next_meeting: Option<String>) -> Self {
        self.next_meeting = next_meeting;
        self
    }

    pub fn build(self) -> MeetingMinutes {
        MeetingMinutes {
            title: self.title,
            date: self.date,
            attendees: self.attendees,
            topics_discussed: self.topics_discussed,
            action_items: self.action_items,
            next_meeting: self.next_meeting,
        }
    }
}
