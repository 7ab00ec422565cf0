use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of one list entry; only meaningful inside its own list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An editable entry in a [`RecordList`].
pub trait ListRecord: Clone {
    /// A single field replacement, carrying the new value.
    type Field;

    fn blank(id: RecordId) -> Self;
    fn id(&self) -> &RecordId;
    fn apply(&mut self, field: Self::Field);
    /// Whether the entry shows up in the preview.
    fn has_content(&self) -> bool;
}

/// Ordered list with add / remove / update by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordList<T> {
    items: Vec<T>,
    #[serde(skip)]
    last_issued: i64,
}

impl<T: ListRecord> RecordList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            last_issued: 0,
        }
    }

    /// A list holding one blank entry with id `"1"`.
    pub fn with_placeholder() -> Self {
        Self {
            items: vec![T::blank(RecordId::from("1"))],
            last_issued: 0,
        }
    }

    /// Appends a blank entry and returns its fresh id.
    pub fn add(&mut self) -> RecordId {
        self.add_at(Utc::now().timestamp_millis())
    }

    /// [`RecordList::add`] with an explicit clock reading in milliseconds.
    pub fn add_at(&mut self, now_millis: i64) -> RecordId {
        let id = self.fresh_id(now_millis);
        self.items.push(T::blank(id.clone()));
        id
    }

    /// Drops the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Replaces one field of the entry with `id`; other entries are untouched.
    pub fn update(&mut self, id: &RecordId, field: T::Field) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.apply(field);
                true
            }
            None => false,
        }
    }

    /// The builder only offers removal while more than one entry is left.
    pub fn can_remove(&self) -> bool {
        self.items.len() > 1
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn any_content(&self) -> bool {
        self.items.iter().any(T::has_content)
    }

    pub fn with_content(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.has_content())
    }

    fn fresh_id(&mut self, now_millis: i64) -> RecordId {
        let mut candidate = now_millis.max(self.last_issued + 1);
        loop {
            let id = RecordId(candidate.to_string());
            if self.get(&id).is_none() {
                self.last_issued = candidate;
                return id;
            }
            candidate += 1;
        }
    }
}

impl<T: ListRecord> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
