//! Domain state: the project list, search filter, like counters and theme flag.
//! Owns the persistence store so the UI layer never touches it directly.

use crate::constants::{LIKES_KEY, THEME_KEY};
use crate::projects::{seed_projects, LikeEntry, Project};
use crate::store::KvStore;
use crate::theme::ThemeMode;
use tracing::{debug, warn};

pub struct ShowcaseState {
    pub projects: Vec<Project>,
    pub filtered_indices: Vec<usize>,
    pub search_query: String,
    pub theme_mode: ThemeMode,
    store: Box<dyn KvStore>,
}

impl ShowcaseState {
    /// Build the state from the seed list, then restore persisted likes
    /// and the theme flag.
    pub fn new(store: Box<dyn KvStore>) -> Self {
        let projects = seed_projects();
        let filtered_indices = (0..projects.len()).collect();

        let mut state = Self {
            projects,
            filtered_indices,
            search_query: String::new(),
            theme_mode: ThemeMode::Dark,
            store,
        };
        state.restore_likes();
        state.restore_theme();
        state
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Recompute the filtered set from the current query. Case-insensitive
    /// substring match over title, tech and description; an empty (or
    /// whitespace-only) query keeps every project.
    pub fn apply_filter(&mut self) {
        let query = self.search_query.trim().to_lowercase();

        self.filtered_indices = self
            .projects
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                if query.is_empty()
                    || p.title.to_lowercase().contains(&query)
                    || p.tech.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                {
                    Some(i)
                } else {
                    None
                }
            })
            .collect();
    }

    // ------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------

    /// Increment the like counter for the given project and persist the
    /// full list. Unknown ids are a no-op.
    pub fn like(&mut self, id: i64) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        project.likes += 1;
        debug!(id, likes = project.likes, "Project liked");
        self.save_likes();
        true
    }

    fn save_likes(&mut self) {
        let entries: Vec<LikeEntry> = self
            .projects
            .iter()
            .map(|p| LikeEntry { id: p.id, likes: p.likes })
            .collect();

        match serde_json::to_string(&entries) {
            Ok(json) => {
                if let Err(e) = self.store.set(LIKES_KEY, &json) {
                    warn!(error = %e, "Failed to persist likes");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize likes"),
        }
    }

    /// Overwrite in-memory counts from the store. Malformed data and
    /// unknown ids are ignored, leaving the seed defaults in place.
    fn restore_likes(&mut self) {
        let saved = match self.store.get(LIKES_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => return,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted likes");
                return;
            }
        };

        let entries: Vec<LikeEntry> = match serde_json::from_str(&saved) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed persisted likes");
                return;
            }
        };

        for entry in &entries {
            if let Some(project) = self.projects.iter_mut().find(|p| p.id == entry.id) {
                project.likes = entry.likes;
            }
        }
        debug!(count = entries.len(), "Likes restored");
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.theme_mode.as_flag()) {
            warn!(error = %e, "Failed to persist theme");
        }
    }

    fn restore_theme(&mut self) {
        match self.store.get(THEME_KEY) {
            Ok(flag) => self.theme_mode = ThemeMode::from_flag(flag.as_deref()),
            Err(e) => warn!(error = %e, "Failed to read persisted theme"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn state() -> ShowcaseState {
        ShowcaseState::new(Box::<MemoryStore>::default())
    }

    /// Clonable handle over one MemoryStore, so a test can hand the "same"
    /// store to two consecutive ShowcaseState instances.
    #[derive(Clone, Default)]
    struct SharedStore(std::rc::Rc<std::cell::RefCell<MemoryStore>>);

    impl KvStore for SharedStore {
        fn get(&self, key: &str) -> rusqlite::Result<Option<String>> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> rusqlite::Result<()> {
            self.0.borrow_mut().set(key, value)
        }
    }

    fn filtered_titles(state: &ShowcaseState) -> Vec<&str> {
        state
            .filtered_indices
            .iter()
            .map(|&i| state.projects[i].title.as_str())
            .collect()
    }

    #[test]
    fn empty_query_keeps_all_projects() {
        let mut state = state();
        state.search_query = String::new();
        state.apply_filter();
        assert_eq!(state.filtered_indices.len(), state.projects.len());

        state.search_query = "   ".to_owned();
        state.apply_filter();
        assert_eq!(state.filtered_indices.len(), state.projects.len());
    }

    #[test]
    fn unmatched_query_filters_everything_out() {
        let mut state = state();
        state.search_query = "zzz-no-such-project".to_owned();
        state.apply_filter();
        assert!(state.filtered_indices.is_empty());
    }

    #[test]
    fn laravel_matches_the_two_php_projects() {
        let mut state = state();
        state.search_query = "laravel".to_owned();
        state.apply_filter();
        assert_eq!(filtered_titles(&state), ["SudEst Market", "EVENTHarBor"]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut state = state();
        state.search_query = "DEVSYNC".to_owned();
        state.apply_filter();
        assert_eq!(filtered_titles(&state), ["DevSync"]);

        state.search_query = "ticket generation".to_owned();
        state.apply_filter();
        assert_eq!(filtered_titles(&state), ["EVENTHarBor"]);
    }

    #[test]
    fn filtered_project_keeps_its_url() {
        let mut state = state();
        state.search_query = "devsync".to_owned();
        state.apply_filter();

        assert_eq!(state.filtered_indices.len(), 1);
        let project = &state.projects[state.filtered_indices[0]];
        assert!(project.url.as_deref().is_some_and(|u| !u.is_empty()));
    }

    #[test]
    fn like_increments_only_the_target_and_persists() {
        let store = SharedStore::default();
        let mut state = ShowcaseState::new(Box::new(store.clone()));
        let before: Vec<u32> = state.projects.iter().map(|p| p.likes).collect();

        assert!(state.like(3));

        for p in &state.projects {
            let expected = before[(p.id - 1) as usize] + u32::from(p.id == 3);
            assert_eq!(p.likes, expected, "project {}", p.id);
        }

        let json = store.get(LIKES_KEY).unwrap().expect("likes persisted");
        let entries: Vec<LikeEntry> = serde_json::from_str(&json).unwrap();
        let saved = entries.iter().find(|e| e.id == 3).unwrap();
        assert_eq!(saved.likes, before[2] + 1);
    }

    #[test]
    fn like_on_unknown_id_is_a_noop() {
        let mut state = state();
        let before: Vec<u32> = state.projects.iter().map(|p| p.likes).collect();
        assert!(!state.like(999));
        let after: Vec<u32> = state.projects.iter().map(|p| p.likes).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn likes_survive_a_restart() {
        let store = SharedStore::default();
        {
            let mut state = ShowcaseState::new(Box::new(store.clone()));
            state.like(1);
            state.like(1);
            state.like(5);
        }

        let reloaded = ShowcaseState::new(Box::new(store));
        let get = |id: i64| reloaded.projects.iter().find(|p| p.id == id).unwrap().likes;
        assert_eq!(get(1), 26); // 24 seed + 2
        assert_eq!(get(5), 8); // 7 seed + 1
        assert_eq!(get(2), 18); // untouched
    }

    #[test]
    fn malformed_persisted_likes_keep_defaults() {
        let mut store = MemoryStore::default();
        store.set(LIKES_KEY, "{definitely not an array").unwrap();

        let state = ShowcaseState::new(Box::new(store));
        assert_eq!(state.projects[0].likes, 24);
    }

    #[test]
    fn persisted_likes_for_unknown_ids_are_ignored() {
        let mut store = MemoryStore::default();
        store
            .set(LIKES_KEY, r#"[{"id": 42, "likes": 100}, {"id": 2, "likes": 50}]"#)
            .unwrap();

        let state = ShowcaseState::new(Box::new(store));
        let get = |id: i64| state.projects.iter().find(|p| p.id == id).unwrap().likes;
        assert_eq!(get(2), 50);
        assert_eq!(get(1), 24);
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let store = SharedStore::default();
        let mut state = ShowcaseState::new(Box::new(store.clone()));
        assert_eq!(state.theme_mode, ThemeMode::Dark);

        state.toggle_theme();
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        state.toggle_theme();
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn theme_is_restored_from_store() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "light").unwrap();
        let state = ShowcaseState::new(Box::new(store));
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }
}
