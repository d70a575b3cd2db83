//! State of a single form input.

/// A validation rule attached to a [`Field`].
#[derive(Clone, Debug, PartialEq)]
pub enum Validator {
    /// The value must not be the empty string.
    NotEmptyString(String),
    /// The value must contain something other than whitespace.
    NotEmpty(String),
    /// The value must have at most this many characters.
    MaxLength(usize, String),
}

impl Validator {
    pub fn not_empty_string(message: impl Into<String>) -> Self {
        Validator::NotEmptyString(message.into())
    }

    pub fn not_empty(message: impl Into<String>) -> Self {
        Validator::NotEmpty(message.into())
    }

    pub fn max_length(limit: usize, message: impl Into<String>) -> Self {
        Validator::MaxLength(limit, message.into())
    }

    /// The error message if `value` breaks this rule.
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Validator::NotEmptyString(message) if value.is_empty() => Some(message.clone()),
            Validator::NotEmpty(message) if value.trim().is_empty() => Some(message.clone()),
            Validator::MaxLength(limit, message) if value.chars().count() > *limit => {
                Some(message.clone())
            }
            _ => None,
        }
    }
}

/// Value, validation rules and current error of one input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Field {
    initial: String,
    value: String,
    error: Option<String>,
    dirty: bool,
    validates: Vec<Validator>,
}

impl Field {
    /// A field without validation.
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_rules(initial, Vec::new())
    }

    pub fn with_rules(initial: impl Into<String>, validates: Vec<Validator>) -> Self {
        let initial = initial.into();
        Self {
            value: initial.clone(),
            initial,
            error: None,
            dirty: false,
            validates,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the value was edited since the last reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the value.
    ///
    /// A visible error is re-checked so it disappears once the input is fixed.
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.dirty = true;
        if self.error.is_some() {
            self.run_validation();
        }
    }

    /// Validate when the user leaves an edited input.
    pub fn on_blur(&mut self) {
        if self.dirty {
            self.run_validation();
        }
    }

    /// Check every rule against the current value and keep the first error.
    pub fn run_validation(&mut self) -> Option<&str> {
        self.error = self.validates.iter().find_map(|rule| rule.check(&self.value));
        self.error.as_deref()
    }

    /// Back to the initial value with no error.
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.error = None;
        self.dirty = false;
    }
}
