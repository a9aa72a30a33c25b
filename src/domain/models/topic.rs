use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDiscussed {
    topic: String,
    summary: String,
    decisions: Vec<String>,
}

impl TopicDiscussed {
    pub fn new(topic: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            summary: summary.into(),
            decisions: Vec::new(),
        }
    }

    pub fn with_decisions(mut self, decisions: Vec<String>) -> Self {
        self.decisions = decisions;
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn decisions(&self) -> &[String] {
        &self.decisions
    }
}
