//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Text that is rendered masked (passwords)
    Secret(String),
    /// Digits-only text, parsed by the schema
    Number(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form input with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Secret(String::new()),
        }
    }

    /// Create a new numeric field
    pub fn number(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(String::new()),
        }
    }

    /// Raw text of the field, whatever its kind
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) | FieldValue::Number(s) => s,
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self.value, FieldValue::Secret(_))
    }

    /// Replace the value, keeping the field kind.
    /// Numeric fields drop anything that is not an ASCII digit.
    pub fn set_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => *s = value,
            FieldValue::Number(s) => *s = value.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
            FieldValue::Number(s) => {
                if c.is_ascii_digit() {
                    s.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) | FieldValue::Number(s) => {
                s.pop();
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, mask_secrets: bool) -> String {
        let text = self.as_text();
        if mask_secrets && self.is_secret() {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_accepts_any_char() {
        let mut field = FormField::text("name", "Name");
        for c in "Ana B".chars() {
            field.push_char(c);
        }
        assert_eq!(field.as_text(), "Ana B");
    }

    #[test]
    fn test_number_field_ignores_non_digits() {
        let mut field = FormField::number("knowledge", "Knowledge");
        field.push_char('4');
        field.push_char('x');
        field.push_char('2');
        assert_eq!(field.as_text(), "42");
    }

    #[test]
    fn test_number_field_set_text_filters() {
        let mut field = FormField::number("knowledge", "Knowledge");
        field.set_text("1a0-0");
        assert_eq!(field.as_text(), "100");
    }

    #[test]
    fn test_secret_display_is_masked() {
        let mut field = FormField::secret("password", "Password");
        field.set_text("hunter2");
        assert!(field.is_secret());
        assert_eq!(field.display_value(true), "•••••••");
        assert_eq!(field.display_value(false), "hunter2");
    }

    #[test]
    fn test_pop_char() {
        let mut field = FormField::text("email", "E-mail");
        field.set_text("ab");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
        field.pop_char();
        assert_eq!(field.as_text(), "");
        // Popping an empty field is a no-op
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }
}
