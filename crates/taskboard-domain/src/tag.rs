use serde::{Deserialize, Serialize};

pub type TagId = String;

/// A named label attachable to a card. Identity is the id; the name is free
/// to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    name: String,
}

impl Tag {
    pub fn new(id: TagId, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_name() {
        let mut tag = Tag::new("tag_1".to_string(), "urgent".to_string());
        assert_eq!(tag.name(), "urgent");

        tag.set_name("blocked".to_string());
        assert_eq!(tag.name(), "blocked");
        assert_eq!(tag.id(), "tag_1");
    }
}
