//! Ancestor and descendant queries over the flat genre list.

use std::collections::{HashMap, HashSet};

use journal_domain::Genre;

/// Genres from the root down to `id`, inclusive.
///
/// Empty when `id` is unknown. The walk stops at a missing parent, so a
/// genre under a dangling parent starts its own path. A parent cycle ends
/// the walk before any genre repeats.
pub fn genre_path<'a>(id: &str, genres: &'a [Genre]) -> Vec<&'a Genre> {
    let by_id: HashMap<&str, &'a Genre> = genres.iter().map(|g| (g.id.as_str(), g)).collect();

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut current = by_id.get(id).copied();
    while let Some(genre) = current {
        if !visited.insert(genre.id.as_str()) {
            break;
        }
        path.push(genre);
        current = genre.parent_id.as_deref().and_then(|parent| by_id.get(parent).copied());
    }
    path.reverse();
    path
}

/// Ids of the selected genre and all of its descendants.
///
/// With no selection every genre is in scope, and an empty id counts as no
/// selection. A selected id that names no genre still scopes to itself (and
/// whatever declares it as a parent).
pub fn descendant_scope<'a>(selected: Option<&'a str>, genres: &'a [Genre]) -> HashSet<&'a str> {
    let Some(selected) = selected.filter(|id| !id.is_empty()) else {
        return genres.iter().map(|g| g.id.as_str()).collect();
    };

    let mut children_of: HashMap<&str, Vec<&'a str>> = HashMap::new();
    for genre in genres {
        if let Some(parent) = genre.parent_id.as_deref() {
            children_of.entry(parent).or_default().push(genre.id.as_str());
        }
    }

    let mut scope = HashSet::new();
    let mut stack = vec![selected];
    while let Some(id) = stack.pop() {
        if !scope.insert(id) {
            continue;
        }
        if let Some(children) = children_of.get(id) {
            stack.extend(children.iter().copied());
        }
    }
    scope
}
