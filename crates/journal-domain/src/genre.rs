//! Genre representation for classifying books

use serde::{Deserialize, Serialize};

/// Opaque genre identifier.
pub type GenreId = String;

/// A genre (folder) in the classification forest
///
/// `parent_id = None` marks a root. A parent id that names no existing
/// genre is tolerated; derived views treat such a genre as a root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub parent_id: Option<GenreId>,
}

impl Genre {
    /// Create a root genre
    pub fn new(id: impl Into<GenreId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
        }
    }

    /// Place this genre under a parent
    pub fn with_parent(mut self, parent_id: impl Into<GenreId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Whether this genre declares no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_new() {
        let genre = Genre::new("genre-fiction", "Fiction");
        assert_eq!(genre.name, "Fiction");
        assert!(genre.is_root());
    }

    #[test]
    fn test_genre_with_parent() {
        let parent = Genre::new("genre-fiction", "Fiction");
        let child = Genre::new("genre-speculative", "Speculative").with_parent(parent.id.clone());
        assert_eq!(child.parent_id, Some(parent.id));
        assert!(!child.is_root());
    }

    #[test]
    fn test_genre_serde_null_parent() {
        let json = r#"{"id":"a","name":"Z","parent_id":null}"#;
        let genre: Genre = serde_json::from_str(json).unwrap();
        assert_eq!(genre, Genre::new("a", "Z"));
    }
}
