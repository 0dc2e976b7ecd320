/// Which command a prompt collects input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    AddDocument,
    Upload,
    Replace,
}

impl PromptKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::AddDocument => "Add New Document",
            Self::Upload => "Upload Document",
            Self::Replace => "Text Replacement",
        }
    }

    /// Field labels, paired with whether the field takes several lines.
    const fn labels(self) -> &'static [(&'static str, bool)] {
        match self {
            Self::AddDocument => &[
                ("Document Title", false),
                ("Document Content", true),
            ],
            Self::Upload => &[("Text file path", false)],
            Self::Replace => &[("Find", false), ("Replace with", false)],
        }
    }
}

/// One labelled text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptField {
    pub label: &'static str,
    pub value: String,
    /// Accepts newlines (Alt+Enter / Ctrl+J) instead of only a single line
    pub multiline: bool,
}

/// A small form shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub fields: Vec<PromptField>,
    /// Index of the field receiving input
    pub focused: usize,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        let fields = kind
            .labels()
            .iter()
            .map(|&(label, multiline)| PromptField {
                label,
                value: String::new(),
                multiline,
            })
            .collect();
        Self {
            kind,
            fields,
            focused: 0,
        }
    }

    /// Start a replace prompt with the find field pre-filled.
    pub fn replace_with_find(find: &str) -> Self {
        let mut prompt = Self::new(PromptKind::Replace);
        prompt.fields[0].value = find.to_string();
        prompt
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", |f| f.value.as_str())
    }

    pub fn focused_is_multiline(&self) -> bool {
        self.fields.get(self.focused).is_some_and(|f| f.multiline)
    }

    /// Append to the focused field. Newlines are dropped by single-line fields.
    pub fn push(&mut self, ch: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if ch == '\n' && !field.multiline {
                return;
            }
            field.value.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prompt_has_one_field_per_label() {
        let prompt = Prompt::new(PromptKind::Replace);
        assert_eq!(prompt.fields.len(), 2);
        assert_eq!(prompt.fields[0].label, "Find");
        assert_eq!(prompt.focused, 0);
    }

    #[test]
    fn test_input_goes_to_focused_field() {
        let mut prompt = Prompt::new(PromptKind::AddDocument);
        prompt.push('T');
        prompt.next_field();
        prompt.push('C');
        prompt.push('x');
        prompt.backspace();
        assert_eq!(prompt.value(0), "T");
        assert_eq!(prompt.value(1), "C");
    }

    #[test]
    fn test_only_content_field_takes_newlines() {
        let mut prompt = Prompt::new(PromptKind::AddDocument);
        assert!(!prompt.focused_is_multiline());
        prompt.push('\n');
        assert_eq!(prompt.value(0), "");

        prompt.next_field();
        assert!(prompt.focused_is_multiline());
        for ch in "line1\nline2".chars() {
            prompt.push(ch);
        }
        assert_eq!(prompt.value(1), "line1\nline2");
        prompt.backspace();
        assert_eq!(prompt.value(1), "line1\nline");
    }

    #[test]
    fn test_next_field_wraps() {
        let mut prompt = Prompt::new(PromptKind::Upload);
        prompt.next_field();
        assert_eq!(prompt.focused, 0);
    }
}
