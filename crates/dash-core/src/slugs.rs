//! Slug helpers
//!
//! Area and Magic Areas device names are turned into keys with the same
//! rules as the frontend: transliterate, lowercase, `_` as separator.

use dashmap::DashMap;

/// Slugify a display name (`"Living Room"` -> `"living_room"`)
///
/// Names that slugify to nothing become `"unknown"`, as in the frontend.
pub fn slugify(value: &str) -> String {
    let slugged = ::slug::slugify(value).replace('-', "_");
    if slugged.is_empty() {
        "unknown".to_string()
    } else {
        slugged
    }
}

/// Memoized `slugify`, safe to share between readers
#[derive(Debug, Default)]
pub struct SlugCache {
    cache: DashMap<String, String>,
}

impl SlugCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, value: &str) -> String {
        if let Some(hit) = self.cache.get(value) {
            return hit.clone();
        }
        let slugged = slugify(value);
        self.cache.insert(value.to_string(), slugged.clone());
        slugged
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Living Room"), "living_room");
        assert_eq!(slugify("Kitchen"), "kitchen");
        assert_eq!(slugify("Salle à manger"), "salle_a_manger");
        assert_eq!(slugify("  First - Floor  "), "first_floor");
        assert_eq!(slugify("!!!"), "unknown");
    }

    #[test]
    fn test_slug_cache_memoizes() {
        let cache = SlugCache::new();
        assert_eq!(cache.get("Living Room"), "living_room");
        assert_eq!(cache.get("Living Room"), "living_room");
        assert_eq!(cache.len(), 1);
    }
}
