mod home;
pub use home::{heading_text, Home, PostList, PostListing, UserHeading, NO_POSTS, NO_USER};
