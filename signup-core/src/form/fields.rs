use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const REQUIRED_MESSAGE: &str = "This Field Is Required";

/// The required inputs of the personal info step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "e.g. Stephen King",
            Field::Email => "e.g. stephenking@lorem.com",
            Field::Phone => "e.g. +1 234 567 890",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl PersonalInfo {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
    }
}

/// Fields currently marked as failing the presence check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    marked: BTreeSet<Field>,
}

impl FieldErrors {
    pub fn is_marked(&self, field: Field) -> bool {
        self.marked.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    pub fn marked(&self) -> impl Iterator<Item = Field> + '_ {
        self.marked.iter().copied()
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }

    /// Marks each empty field and unmarks each filled one. Presence only:
    /// no trimming, no format checks.
    pub fn check(&mut self, info: &PersonalInfo) -> bool {
        for field in Field::ALL {
            if info.get(field).is_empty() {
                self.marked.insert(field);
            } else {
                self.marked.remove(&field);
            }
        }
        self.marked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_marks_only_empty_fields() {
        let mut info = PersonalInfo::default();
        info.set(Field::Email, "a@b.c");

        let mut errors = FieldErrors::default();
        assert!(!errors.check(&info));
        assert!(errors.is_marked(Field::Name));
        assert!(!errors.is_marked(Field::Email));
        assert!(errors.is_marked(Field::Phone));
    }

    #[test]
    fn filling_fields_clears_marks_on_next_check() {
        let mut info = PersonalInfo::default();
        let mut errors = FieldErrors::default();
        errors.check(&info);

        info.set(Field::Name, "Ada");
        info.set(Field::Email, "ada@example.com");
        info.set(Field::Phone, "+44 1");
        assert!(errors.check(&info));
        assert!(errors.is_empty());
    }

    #[test]
    fn whitespace_counts_as_present() {
        let info = PersonalInfo {
            name: " ".into(),
            email: "x".into(),
            phone: "y".into(),
        };
        assert!(FieldErrors::default().check(&info));
    }
}
