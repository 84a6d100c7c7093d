use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tag::Tag;

pub type CardId = String;

/// A unit of work. Every mutation refreshes `updated_at`; `created_at` is
/// fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    title: String,
    description: Option<String>,
    priority: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tags: Vec<Tag>,
}

impl Card {
    pub fn new(id: CardId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            priority: 0,
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
        self.touch();
    }

    /// Any integer is accepted; higher means more urgent by convention.
    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
        self.touch();
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Appends the tag unless one with the same id is already attached.
    pub fn add_tag(&mut self, tag: Tag) {
        if !self.has_tag(tag.id()) {
            self.tags.push(tag);
            self.touch();
        }
    }

    /// Returns whether a tag was found and removed.
    pub fn remove_tag(&mut self, tag_id: &str) -> bool {
        match self.tags.iter().position(|tag| tag.id() == tag_id) {
            Some(index) => {
                self.tags.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|tag| tag.id() == tag_id)
    }

    pub fn clear_tags(&mut self) {
        if !self.tags.is_empty() {
            self.tags.clear();
            self.touch();
        }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Presentation order: higher priority first, older card first on ties.
    /// Columns keep insertion order; callers sort a copy when they want this.
    pub fn compare_priority(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.created_at.cmp(&other.created_at))
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}
