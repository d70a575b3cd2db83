use dioxus::prelude::*;
use store::{Backend, NewPost, POSTS};

use crate::backend::use_backend;
use crate::components::{TextArea, TextInput};
use crate::form::{submit, Field, Form, FormState, SubmitOutcome, Validator};

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";

/// Fields of the new-post form: a required title and free-form content.
pub fn post_form() -> Form {
    Form::new()
        .with_field(
            TITLE,
            Field::with_rules("", vec![Validator::not_empty_string("Title is required")]),
        )
        .with_field(CONTENT, Field::new(""))
}

/// Submit the form in `state` as a new post in the `posts` collection.
pub async fn create_post<S: FormState, B: Backend>(state: S, backend: &B) -> SubmitOutcome {
    submit(state, |values| async move {
        let post = NewPost::new(values.get(TITLE), values.get(CONTENT));
        match backend.create_record(POSTS, post).await {
            Ok(_) => Ok(()),
            Err(error) => {
                tracing::error!(%error, "failed to create post");
                Err(error.user_message())
            }
        }
    })
    .await
}

/// Form for adding a post.
#[component]
pub fn AddPost() -> Element {
    let form = use_signal(post_form);
    rsx! {
        PostForm { form: form }
    }
}

/// The new-post form bound to `form`. Submitting creates the post through
/// the backend in context.
#[component]
fn PostForm(form: Signal<Form>) -> Element {
    let backend = use_backend();
    let mut form = form;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            create_post(form, &backend).await;
        });
    };

    let state = form.read();
    let submitting = state.submitting();
    let title = state.field(TITLE).cloned().unwrap_or_default();
    let content = state.field(CONTENT).cloned().unwrap_or_default();
    let submit_error = state.submit_error().map(str::to_string);
    drop(state);

    rsx! {
        form {
            onsubmit: onsubmit,
            div {
                class: "space-y-4",
                TextInput {
                    id: "post-title",
                    label: "Title",
                    value: title.value(),
                    error: title.error().map(str::to_string),
                    disabled: submitting,
                    oninput: move |value: String| form.write().on_change(TITLE, value),
                    onblur: move |_| form.write().on_blur(TITLE),
                }
                TextArea {
                    id: "post-content",
                    label: "Content",
                    value: content.value(),
                    disabled: submitting,
                    oninput: move |value: String| form.write().on_change(CONTENT, value),
                }
            }
            if let Some(message) = submit_error {
                p { class: "mt-4 text-sm text-red-600", role: "alert", "{message}" }
            }
            div {
                class: "flex justify-end mt-4",
                button {
                    r#type: "submit",
                    disabled: submitting,
                    class: "inline-flex items-center px-4 py-2 border border-gray-300 shadow-sm text-base font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-indigo-500 disabled:opacity-50",
                    if submitting { "Posting..." } else { "Post" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::backend::AppBackend;
    use crate::test_support::{mount, render, settle};
    use store::{query, BackendError, MemoryBackend};

    fn filled(title: &str, content: &str) -> Rc<RefCell<Form>> {
        let mut form = post_form();
        form.on_change(TITLE, title);
        form.on_change(CONTENT, content);
        Rc::new(RefCell::new(form))
    }

    #[tokio::test]
    async fn test_creates_post_and_clears_fields() {
        let backend = MemoryBackend::new();
        let mut posts = backend.watch_query(query(POSTS).order_by("title"));
        assert_eq!(posts.next().await, Some(vec![]));

        let form = filled("Hello", "");
        let outcome = create_post(form.clone(), &backend).await;

        assert_eq!(outcome, SubmitOutcome::Submitted);
        let records = backend.records(POSTS);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Hello");
        assert_eq!(records[0].content, "");
        assert_eq!(posts.next().await, Some(records));

        let form = form.borrow();
        assert_eq!(form.field(TITLE).unwrap().value(), "");
        assert_eq!(form.field(CONTENT).unwrap().value(), "");
        assert!(form.field(TITLE).unwrap().error().is_none());
    }

    #[tokio::test]
    async fn test_empty_title_does_not_reach_backend() {
        let backend = MemoryBackend::new();
        let form = filled("", "some content");

        let outcome = create_post(form.clone(), &backend).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(backend.records(POSTS).is_empty());
        assert_eq!(
            form.borrow().field(TITLE).unwrap().error(),
            Some("Title is required")
        );
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_input() {
        let backend = MemoryBackend::new();
        backend.fail_next_create(BackendError::Rejected {
            status: 400,
            message: "title too long".to_string(),
        });
        let form = filled("Hello", "World");

        let outcome = create_post(form.clone(), &backend).await;

        assert_eq!(outcome, SubmitOutcome::Failed("title too long".to_string()));
        {
            let form = form.borrow();
            assert_eq!(form.field(TITLE).unwrap().value(), "Hello");
            assert_eq!(form.field(CONTENT).unwrap().value(), "World");
            assert_eq!(form.submit_error(), Some("title too long"));
            assert!(!form.submitting());
        }

        // Retrying with the kept values succeeds.
        assert_eq!(
            create_post(form.clone(), &backend).await,
            SubmitOutcome::Submitted
        );
        assert_eq!(backend.records(POSTS).len(), 1);
    }

    fn filled_form(title: &str, content: &str) -> Form {
        let mut form = post_form();
        form.on_change(TITLE, title);
        form.on_change(CONTENT, content);
        form
    }

    /// Number of `disabled` attributes, ignoring the button's Tailwind variant.
    fn disabled_count(html: &str) -> usize {
        html.replace("disabled:opacity-50", "")
            .matches(" disabled")
            .count()
    }

    #[test]
    fn test_idle_form_is_enabled() {
        fn app() -> Element {
            let form = use_signal(|| filled_form("Hello", ""));
            rsx! { PostForm { form: form } }
        }
        let html = render(app);

        assert_eq!(disabled_count(&html), 0);
        assert!(html.contains(r#"value="Hello""#));
        assert!(html.contains("Post</button>"));
        assert!(!html.contains("Posting..."));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[test]
    fn test_submitting_form_disables_inputs() {
        fn app() -> Element {
            let form = use_signal(|| {
                let mut form = filled_form("Hello", "World");
                let _ = form.begin_submit();
                form
            });
            rsx! { PostForm { form: form } }
        }
        let html = render(app);

        // Title input, content textarea and the submit button.
        assert_eq!(disabled_count(&html), 3);
        assert!(html.contains("Posting..."));
        assert!(html.contains(r#"value="Hello""#));
    }

    #[tokio::test]
    async fn test_add_post_mounts_with_backend() {
        let memory = MemoryBackend::new();
        let mut dom = mount(AddPost, AppBackend::Memory(memory.clone()));
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("post-title"));
        assert!(html.contains("post-content"));
        assert!(html.contains("Post</button>"));
        assert!(memory.records(POSTS).is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_shows_alert_and_keeps_values() {
        fn app() -> Element {
            let backend = use_backend();
            let form = use_signal(|| filled_form("Hello", "World"));
            use_hook(move || {
                spawn(async move {
                    create_post(form, &backend).await;
                });
            });
            rsx! { PostForm { form: form } }
        }

        let memory = MemoryBackend::new();
        memory.fail_next_create(BackendError::Rejected {
            status: 400,
            message: "title too long".to_string(),
        });
        let mut dom = mount(app, AppBackend::Memory(memory.clone()));
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("title too long"));
        assert!(html.contains(r#"value="Hello""#));
        assert!(html.contains("World"));
        assert_eq!(disabled_count(&html), 0);
        assert!(memory.records(POSTS).is_empty());
    }

    #[tokio::test]
    async fn test_successful_submit_clears_rendered_form() {
        fn app() -> Element {
            let backend = use_backend();
            let form = use_signal(|| filled_form("Hello", "World"));
            use_hook(move || {
                spawn(async move {
                    create_post(form, &backend).await;
                });
            });
            rsx! { PostForm { form: form } }
        }

        let memory = MemoryBackend::new();
        let mut dom = mount(app, AppBackend::Memory(memory.clone()));
        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("Hello"));
        assert!(!html.contains("World"));
        assert!(!html.contains(r#"role="alert""#));
        assert_eq!(memory.records(POSTS).len(), 1);
        assert_eq!(memory.records(POSTS)[0].title, "Hello");
    }
}
