use dioxus::prelude::*;
use store::{query, Backend, CurrentUser, Post, POSTS};

use crate::add_post::AddPost;
use crate::backend::use_backend;

pub const NO_USER: &str = "No user";
pub const NO_POSTS: &str = "No posts";

/// Text shown in the page heading for the current session.
pub fn heading_text(user: Option<&CurrentUser>) -> &str {
    user.map(|u| u.email.as_str()).unwrap_or(NO_USER)
}

/// What the post list shows for a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum PostListing {
    /// No snapshot yet, or an empty one.
    Placeholder,
    /// Posts in query order.
    Posts(Vec<Post>),
}

impl PostListing {
    pub fn from_snapshot(posts: Option<&[Post]>) -> Self {
        match posts {
            Some(posts) if !posts.is_empty() => PostListing::Posts(posts.to_vec()),
            _ => PostListing::Placeholder,
        }
    }
}

/// Email of the signed-in user, or a placeholder.
#[component]
pub fn UserHeading(user: Option<CurrentUser>) -> Element {
    let text = heading_text(user.as_ref());
    rsx! {
        h1 { class: "text-xl mb-4 font-bold", "{text}" }
    }
}

/// Titles of `posts` in order, or a placeholder when there are none.
#[component]
pub fn PostList(posts: Option<Vec<Post>>) -> Element {
    match PostListing::from_snapshot(posts.as_deref()) {
        PostListing::Posts(posts) => rsx! {
            div {
                class: "mb-4",
                for post in posts {
                    div { key: "{post.id}", class: "post-title", "{post.title}" }
                }
            }
        },
        PostListing::Placeholder => rsx! {
            div { class: "post-placeholder", "{NO_POSTS}" }
        },
    }
}

/// The posts page: session heading, live post list ordered by title, and
/// the form for adding a post.
///
/// Both subscriptions live in component tasks, so they end when the page
/// unmounts.
#[component]
pub fn Home() -> Element {
    let backend = use_backend();
    let mut posts = use_signal(|| Option::<Vec<Post>>::None);
    let mut user = use_signal(|| Option::<CurrentUser>::None);

    let posts_backend = backend.clone();
    use_future(move || {
        let backend = posts_backend.clone();
        async move {
            let mut subscription = backend.watch_query(query(POSTS).order_by("title"));
            while let Some(snapshot) = subscription.next().await {
                tracing::debug!(count = snapshot.len(), "posts updated");
                posts.set(Some(snapshot));
            }
        }
    });

    use_future(move || {
        let backend = backend.clone();
        async move {
            let mut subscription = backend.watch_current_user();
            while let Some(current) = subscription.next().await {
                user.set(current);
            }
        }
    });

    rsx! {
        document::Title { "Posts" }
        main {
            class: "max-w-3xl mx-auto p-8",
            UserHeading { user: user() }
            div {
                class: "mb-4",
                PostList { posts: posts() }
            }
            div {
                AddPost {}
            }
        }
    }
}
