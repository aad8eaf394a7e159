//! Form field value objects

use crate::dates;

/// What kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line of free text
    Text,
    /// Free text where Enter inserts a newline
    Multiline,
    /// `YYYY-MM-DD` date
    Date,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub placeholder: String,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(label: &str, placeholder: &str) -> Self {
        Self::new(label, placeholder, FieldKind::Text)
    }

    /// Create a new multi-line text field
    pub fn multiline(label: &str, placeholder: &str) -> Self {
        Self::new(label, placeholder, FieldKind::Multiline)
    }

    /// Create a new date field
    pub fn date(label: &str) -> Self {
        Self::new(label, "YYYY-MM-DD", FieldKind::Date)
    }

    fn new(label: &str, placeholder: &str, kind: FieldKind) -> Self {
        Self {
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind,
            value: String::new(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// A required field is filled once it has non-whitespace content
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Replace the value, applying the same filtering as typed input
    #[cfg(test)]
    pub fn set_text(&mut self, value: &str) {
        self.value.clear();
        for c in value.chars() {
            self.push_char(c);
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text => {
                if !c.is_control() {
                    self.value.push(c);
                }
            }
            FieldKind::Multiline => {
                if c == '\n' || !c.is_control() {
                    self.value.push(c);
                }
            }
            FieldKind::Date => {
                if dates::is_input_char(c) && self.value.len() < dates::INPUT_MAX_LEN {
                    self.value.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Preview line shown under date fields, if any
    pub fn date_preview(&self) -> Option<String> {
        if self.kind != FieldKind::Date || !self.is_filled() {
            return None;
        }
        Some(match dates::format_date(&self.value) {
            Ok(formatted) => format!("Selected: {formatted}"),
            Err(_) => "Expected YYYY-MM-DD".to_string(),
        })
    }
}
