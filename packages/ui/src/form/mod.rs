//! # Form state — fields, validation and the submit lifecycle
//!
//! Plain data types that hold what the user typed, independent of any
//! component. Components keep a [`Form`] in a `Signal<Form>` and drive it
//! with [`submit`].
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Field`] | Value, initial value, dirty flag and error of one input, plus its [`Validator`] rules. |
//! | [`Form`] | Named fields in declaration order, the `submitting` flag and the last submit failure. |
//! | [`submit`] | Validates, runs the caller's async action once, then resets on success or keeps values on failure. |
//! | [`FormState`] | Access to a form that may disappear mid-submit (`Signal`, `Rc<RefCell>`, `Weak<RefCell>`). |

mod controller;
mod field;
mod submit;

pub use controller::{FieldValues, Form, SubmitRejected};
pub use field::{Field, Validator};
pub use submit::{submit, FormState, SubmitOutcome};
