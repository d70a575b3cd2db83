//! Query builder for live collection queries.
//!
//! ```
//! use store::query;
//!
//! let q = query("posts").order_by("title");
//! assert_eq!(q.collection(), "posts");
//! ```

use crate::models::Post;

/// Sort direction of an ordered query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A query against one collection, optionally ordered and limited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    collection: String,
    order: Option<(String, Direction)>,
    limit: Option<usize>,
}

/// Start a query on `collection`.
pub fn query(collection: impl Into<String>) -> Query {
    Query {
        collection: collection.into(),
        order: None,
        limit: None,
    }
}

impl Query {
    /// Order ascending (lexicographic) by `field`.
    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order = Some((field.into(), Direction::Asc));
        self
    }

    /// Order descending by `field`.
    pub fn order_by_desc(mut self, field: impl Into<String>) -> Self {
        self.order = Some((field.into(), Direction::Desc));
        self
    }

    /// Keep at most `n` records.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn ordering(&self) -> Option<(&str, Direction)> {
        self.order.as_ref().map(|(f, d)| (f.as_str(), *d))
    }

    /// Order and truncate `records` the way the backend would.
    ///
    /// The sort is stable, so records with equal keys keep insertion order.
    /// Unknown fields sort as empty strings.
    pub fn apply(&self, records: &mut Vec<Post>) {
        if let Some((field, direction)) = &self.order {
            records.sort_by(|a, b| {
                let ord = a
                    .field(field)
                    .unwrap_or_default()
                    .cmp(b.field(field).unwrap_or_default());
                match direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            });
        }
        if let Some(n) = self.limit {
            records.truncate(n);
        }
    }

    /// HTTP query parameters describing the ordering and limit.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some((field, direction)) = &self.order {
            params.push(("orderBy", field.clone()));
            params.push(("direction", direction.as_str().to_string()));
        }
        if let Some(n) = self.limit {
            params.push(("limit", n.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
        }
    }

    fn titles(records: &[Post]) -> Vec<&str> {
        records.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_order_by_title_ascending() {
        let mut records = vec![post("1", "Beta"), post("2", "Alpha"), post("3", "alpha")];
        query("posts").order_by("title").apply(&mut records);
        // Lexicographic: uppercase sorts before lowercase.
        assert_eq!(titles(&records), vec!["Alpha", "Beta", "alpha"]);
    }

    #[test]
    fn test_order_by_desc_and_limit() {
        let mut records = vec![post("1", "A"), post("2", "C"), post("3", "B")];
        query("posts")
            .order_by_desc("title")
            .limit(2)
            .apply(&mut records);
        assert_eq!(titles(&records), vec!["C", "B"]);
    }

    #[test]
    fn test_unordered_keeps_insertion_order() {
        let mut records = vec![post("1", "B"), post("2", "A")];
        query("posts").apply(&mut records);
        assert_eq!(titles(&records), vec!["B", "A"]);
    }

    #[test]
    fn test_equal_keys_are_stable() {
        let mut records = vec![post("2", "Same"), post("1", "Same")];
        query("posts").order_by("title").apply(&mut records);
        assert_eq!(records[0].id, "2");
        assert_eq!(records[1].id, "1");
    }

    #[test]
    fn test_params() {
        let q = query("posts").order_by("title").limit(10);
        assert_eq!(
            q.to_params(),
            vec![
                ("orderBy", "title".to_string()),
                ("direction", "asc".to_string()),
                ("limit", "10".to_string()),
            ]
        );
        assert!(query("posts").to_params().is_empty());
    }
}
