//! Field-level checks for submitted posts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::NewPost;

/// A form field that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Body,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Body => "body",
        }
    }
}

/// Raw form input, exactly as typed. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostSubmission {
    pub title: String,
    pub body: String,
}

impl PostSubmission {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Check every field in one pass.
    ///
    /// On success the post keeps the untrimmed text; trimming only decides blankness.
    pub fn validate(&self) -> Result<NewPost, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if is_blank(&self.title) {
            errors.add(Field::Title, "title is required");
        }
        if is_blank(&self.body) {
            errors.add(Field::Body, "body is required");
        }

        if errors.is_empty() {
            Ok(NewPost::new(self.title.clone(), self.body.clone()))
        } else {
            Err(errors)
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Per-field error messages. A field without an entry passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    fn add(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}
