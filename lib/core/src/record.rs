use serde::{Deserialize, Serialize};

/// A catalog item with optional extra attributes
///
/// The core only reads `id`, `title` and `author`. Any further
/// columns from the source table ride along in `payload` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            payload: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// A user record. Fields beyond the identifier are unused by the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl User {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            payload: None,
        }
    }
}

/// A single rating event
///
/// Duplicate (user, item) pairs are allowed and treated as
/// independent samples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingEvent {
    pub user_id: String,
    pub item_id: String,
    pub rating: f32,
}

impl RatingEvent {
    #[inline]
    #[must_use]
    pub fn new(user_id: impl Into<String>, item_id: impl Into<String>, rating: f32) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
            rating,
        }
    }
}

/// A user judged similar to a target user, with its average similarity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Neighbor {
    pub user_id: String,
    pub similarity: f32,
}

/// An item annotated with a similarity score in [0, 1]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredItem {
    pub item: Item,
    pub score: f32,
}

impl ScoredItem {
    #[inline]
    #[must_use]
    pub fn new(item: Item, score: f32) -> Self {
        Self { item, score }
    }

    /// Score expressed as a percentage
    #[inline]
    #[must_use]
    pub fn percent(&self) -> f32 {
        self.score * 100.0
    }
}
