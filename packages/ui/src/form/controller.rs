use std::collections::BTreeMap;

use super::field::Field;

/// Field values captured when a submission starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    /// Value of `name`, or the empty string for unknown fields.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Why [`Form::begin_submit`] refused to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already in flight.
    AlreadySubmitting,
    /// At least one field has a validation error.
    Invalid,
}

/// Named fields plus the submit lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Form {
    fields: Vec<(String, Field)>,
    submitting: bool,
    submit_error: Option<String>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a named field.
    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, field)| field)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, field)| field)
    }

    /// Forward an input change to the named field.
    pub fn on_change(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.on_change(value);
        }
    }

    /// Forward a blur to the named field.
    pub fn on_blur(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.on_blur();
        }
    }

    pub fn values(&self) -> FieldValues {
        FieldValues(
            self.fields
                .iter()
                .map(|(name, field)| (name.clone(), field.value().to_string()))
                .collect(),
        )
    }

    pub fn submitting(&self) -> bool {
        self.submitting
    }

    /// Message of the last failed submission, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Whether any field was edited.
    pub fn dirty(&self) -> bool {
        self.fields.iter().any(|(_, field)| field.is_dirty())
    }

    /// Validate every field so all errors become visible. True when none failed.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for (_, field) in self.fields.iter_mut() {
            if field.run_validation().is_some() {
                valid = false;
            }
        }
        valid
    }

    /// Start a submission: validate, mark as submitting and capture the values.
    ///
    /// Does nothing while another submission is in flight.
    pub fn begin_submit(&mut self) -> Result<FieldValues, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if !self.validate_all() {
            return Err(SubmitRejected::Invalid);
        }
        self.submitting = true;
        self.submit_error = None;
        Ok(self.values())
    }

    /// Finish a submission started by [`begin_submit`](Self::begin_submit).
    ///
    /// Success resets the form. Failure keeps the entered values and records
    /// the message so the user can retry.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.submitting = false;
        match result {
            Ok(()) => self.reset(),
            Err(message) => self.submit_error = Some(message),
        }
    }

    /// Every field back to its initial value, errors cleared.
    pub fn reset(&mut self) {
        for (_, field) in self.fields.iter_mut() {
            field.reset();
        }
        self.submit_error = None;
    }
}
