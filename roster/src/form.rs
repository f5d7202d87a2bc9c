//! Add-character form state

use roster_core::{validate, Draft, ValidationError, SUGGESTED_CLASSES};

/// Single-line text buffer with a character-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct TextField {
    buffer: String,
    cursor: usize,
}

impl TextField {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replace content and move cursor to end (unicode-safe)
    pub fn set(&mut self, content: impl Into<String>) {
        self.buffer = content.into();
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor (unicode-safe)
    pub fn type_char(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor);
        self.buffer.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at_cursor();
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.remove_at_cursor();
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.buffer.chars().count();
        self.cursor = (self.cursor + 1).min(char_count);
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn remove_at_cursor(&mut self) {
        if let Some((byte_pos, ch)) = self.buffer.char_indices().nth(self.cursor) {
            self.buffer
                .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
        }
    }
}

/// Which form input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Class,
    Level,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Class, FormField::Level];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Class => "Class",
            FormField::Level => "Level",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Character name",
            FormField::Class => "Class (e.g. Guerreiro, Mago...)",
            FormField::Level => "Level (1-100)",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Class,
            FormField::Class => FormField::Level,
            FormField::Level => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Level,
            FormField::Level => FormField::Class,
            FormField::Class => FormField::Name,
        }
    }
}

/// The three inputs of the add form
#[derive(Debug, Clone, Default)]
pub struct AddForm {
    pub name: TextField,
    pub class: TextField,
    pub level: TextField,
    pub focus: FormField,
    suggestion: Option<usize>,
}

impl AddForm {
    pub fn field(&self, field: FormField) -> &TextField {
        match field {
            FormField::Name => &self.name,
            FormField::Class => &self.class,
            FormField::Level => &self.level,
        }
    }

    /// The input that receives typed characters
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Class => &mut self.class,
            FormField::Level => &mut self.level,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Fill the class input with the next suggested class
    pub fn next_suggestion(&mut self) {
        let index = match self.suggestion {
            Some(i) => (i + 1) % SUGGESTED_CLASSES.len(),
            None => 0,
        };
        self.apply_suggestion(index);
    }

    /// Fill the class input with the previous suggested class
    pub fn prev_suggestion(&mut self) {
        let index = match self.suggestion {
            Some(0) | None => SUGGESTED_CLASSES.len() - 1,
            Some(i) => i - 1,
        };
        self.apply_suggestion(index);
    }

    fn apply_suggestion(&mut self, index: usize) {
        self.suggestion = Some(index);
        self.class.set(SUGGESTED_CLASSES[index]);
    }

    /// Validate the current inputs
    pub fn draft(&self) -> Result<Draft, ValidationError> {
        validate(self.name.as_str(), self.class.as_str(), self.level.as_str())
    }

    /// Reset all inputs after a successful add
    pub fn clear(&mut self) {
        self.name.clear();
        self.class.clear();
        self.level.clear();
        self.focus = FormField::Name;
        self.suggestion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Field;

    #[test]
    fn test_text_field_unicode_editing() {
        let mut field = TextField::default();
        for c in "Clérigo".chars() {
            field.type_char(c);
        }
        assert_eq!(field.cursor(), 7);

        field.cursor_home();
        field.cursor_right();
        field.cursor_right();
        field.delete(); // removes 'é'
        assert_eq!(field.as_str(), "Clrigo");

        field.type_char('e');
        field.cursor_end();
        field.backspace();
        assert_eq!(field.as_str(), "Clerig");
        assert_eq!(field.cursor(), 6);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut field = TextField::default();
        field.set("ab");
        field.cursor_home();
        field.backspace();
        assert_eq!(field.as_str(), "ab");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_field_cycling() {
        let mut form = AddForm::default();
        assert_eq!(form.focus, FormField::Name);
        form.next_field();
        form.next_field();
        assert_eq!(form.focus, FormField::Level);
        form.next_field();
        assert_eq!(form.focus, FormField::Name);
        form.prev_field();
        assert_eq!(form.focus, FormField::Level);
    }

    #[test]
    fn test_suggestions_wrap() {
        let mut form = AddForm::default();
        form.next_suggestion();
        assert_eq!(form.class.as_str(), "Guerreiro");
        form.prev_suggestion();
        assert_eq!(form.class.as_str(), "Paladino");
        form.next_suggestion();
        assert_eq!(form.class.as_str(), "Guerreiro");
    }

    #[test]
    fn test_draft_validates_and_clear_resets() {
        let mut form = AddForm::default();
        form.name.set("Gimli");
        form.class.set("Guerreiro");
        assert_eq!(
            form.draft().unwrap_err(),
            ValidationError::EmptyField(Field::Level)
        );

        form.level.set("10");
        form.focus = FormField::Level;
        let draft = form.draft().unwrap();
        assert_eq!(draft.name(), "Gimli");
        assert_eq!(draft.level(), 10);

        form.clear();
        assert!(form.name.is_empty() && form.class.is_empty() && form.level.is_empty());
        assert_eq!(form.focus, FormField::Name);
    }
}
