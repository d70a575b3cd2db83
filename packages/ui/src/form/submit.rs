//! Async submit lifecycle shared by every form.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use dioxus::prelude::*;

use super::controller::{FieldValues, Form, SubmitRejected};

/// Somewhere a [`Form`] lives while a submission is in flight.
pub trait FormState {
    /// Apply `f` to the form, or return `None` if the form is gone
    /// (for example the owning component was unmounted).
    fn update<R>(&mut self, f: impl FnOnce(&mut Form) -> R) -> Option<R>;
}

impl FormState for Signal<Form> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Form) -> R) -> Option<R> {
        let mut form = self.try_write().ok()?;
        Some(f(&mut *form))
    }
}

impl FormState for Rc<RefCell<Form>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Form) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}

impl FormState for Weak<RefCell<Form>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Form) -> R) -> Option<R> {
        let form = self.upgrade()?;
        let result = f(&mut *form.borrow_mut());
        Some(result)
    }
}

/// How a call to [`submit`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The action succeeded and the form was reset.
    Submitted,
    /// Validation failed; the action was not called.
    Invalid,
    /// Another submission was in flight; the action was not called.
    AlreadySubmitting,
    /// The action failed; values are kept and the message is on the form.
    Failed(String),
    /// The form went away before the submission finished.
    Detached,
}

/// Validate the form and, if it passes, run `action` with its values.
///
/// `action` is called at most once. Its result is written back to the form
/// unless the form has been dropped in the meantime.
pub async fn submit<S, A, Fut>(mut state: S, action: A) -> SubmitOutcome
where
    S: FormState,
    A: FnOnce(FieldValues) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let values = match state.update(Form::begin_submit) {
        None => return SubmitOutcome::Detached,
        Some(Err(SubmitRejected::AlreadySubmitting)) => {
            tracing::debug!("submit ignored, already submitting");
            return SubmitOutcome::AlreadySubmitting;
        }
        Some(Err(SubmitRejected::Invalid)) => {
            tracing::debug!("submit blocked by validation");
            return SubmitOutcome::Invalid;
        }
        Some(Ok(values)) => values,
    };

    let result = action(values).await;
    let outcome = match &result {
        Ok(()) => SubmitOutcome::Submitted,
        Err(message) => SubmitOutcome::Failed(message.clone()),
    };

    match state.update(|form| form.finish_submit(result)) {
        Some(()) => outcome,
        None => {
            tracing::debug!("form dropped during submit, result ignored");
            SubmitOutcome::Detached
        }
    }
}
