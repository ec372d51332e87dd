use tracing::{debug, info, warn};

use crate::{
    data::models::{Wallpaper, WallpaperKind},
    storage::SettingsStore,
};

/// Owns the wallpaper list, the active selection and its persistence. The
/// shell reads `active_entry` each frame to style the backdrop, so applying
/// a wallpaper is just updating the index and telling the store.
pub struct WallpaperManager {
    entries: Vec<Wallpaper>,
    active: usize,
    store: SettingsStore,
}

impl WallpaperManager {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            entries: Vec::new(),
            active: 0,
            store,
        }
    }

    pub fn set_entries(&mut self, entries: Vec<Wallpaper>) {
        self.entries = entries;
    }

    pub fn entries(&self) -> &[Wallpaper] {
        &self.entries
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_entry(&self) -> Option<&Wallpaper> {
        self.entries.get(self.active)
    }

    /// Activates and persists the wallpaper at `index`. Out-of-range
    /// requests are rejected rather than clamped.
    pub fn set_wallpaper(&mut self, index: usize) -> bool {
        let Some(entry) = self.entries.get(index) else {
            debug!(index, len = self.entries.len(), "wallpaper index out of range");
            return false;
        };

        match entry.kind {
            WallpaperKind::Video => {
                info!(title = entry.title.as_str(), url = entry.url.as_str(), "motion backdrop")
            }
            WallpaperKind::Image => {
                info!(title = entry.title.as_str(), url = entry.url.as_str(), "static backdrop")
            }
        }

        self.active = index;
        if let Err(e) = self.store.set_selected_wallpaper(index) {
            warn!("could not persist wallpaper selection: {e}");
        }
        true
    }

    /// Restores the persisted selection once the gallery is known. Falls
    /// back to the first entry when nothing usable is stored, persisting
    /// the fallback like any other selection.
    pub fn load_saved(&mut self) {
        let saved = self.store.selected_wallpaper();
        let index = match saved {
            Some(index) if index < self.entries.len() => index,
            _ => 0,
        };
        self.set_wallpaper(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Vec<Wallpaper> {
        let doc = r#"[
            { "title": "Aurore", "url": "a.jpg", "type": "image" },
            { "title": "Nébuleuse", "url": "n.mp4", "type": "video" },
            { "title": "Dunes", "url": "d.jpg", "type": "image" }
        ]"#;
        serde_json::from_str(doc).unwrap()
    }

    fn manager_in(dir: &tempfile::TempDir) -> WallpaperManager {
        let store = SettingsStore::at(dir.path().join("settings.json"));
        let mut manager = WallpaperManager::new(store);
        manager.set_entries(gallery());
        manager
    }

    #[test]
    fn selection_survives_reload() {
        let dir = tempfile::tempdir().unwrap();

        for i in 0..3 {
            let mut manager = manager_in(&dir);
            assert!(manager.set_wallpaper(i));

            let mut reloaded = manager_in(&dir);
            reloaded.load_saved();
            assert_eq!(reloaded.active(), i);
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        manager.set_wallpaper(1);

        assert!(!manager.set_wallpaper(3));
        assert_eq!(manager.active(), 1);
    }

    #[test]
    fn load_saved_defaults_to_first_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        manager.load_saved();
        assert_eq!(manager.active(), 0);

        // The fallback itself was written through the store.
        let store = SettingsStore::at(dir.path().join("settings.json"));
        assert_eq!(store.selected_wallpaper(), Some(0));
    }

    #[test]
    fn stale_out_of_range_selection_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        store.set_selected_wallpaper(9).unwrap();

        let mut manager = manager_in(&dir);
        manager.load_saved();
        assert_eq!(manager.active(), 0);
    }

    #[test]
    fn active_entry_follows_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = manager_in(&dir);
        manager.set_wallpaper(1);
        assert_eq!(manager.active_entry().unwrap().title, "Nébuleuse");
        assert_eq!(manager.active_entry().unwrap().kind, WallpaperKind::Video);
    }
}
