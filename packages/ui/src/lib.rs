//! This crate contains all shared UI for the workspace.

pub mod components;
pub mod form;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_backend, use_backend, AppBackend, BackendProvider};

mod add_post;
pub use add_post::{create_post, post_form, AddPost};
