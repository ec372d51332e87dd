use crate::data::models::{Category, Notification};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: AppData,
    pub ui: UiState,
}

/// Fixture-backed content, filled in as each resource arrives.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub notifications: Vec<Notification>,
    pub categories: Vec<Category>,
}

impl AppData {
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub clock: String,
    pub status: Option<String>,
}

/// Every panel the shell can show. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelId {
    #[default]
    Loading,
    Portal,
    Nexus,
    Calendar,
    Music,
    Wallpapers,
    Chat,
    Social,
    Arena,
    Habits,
    Videos,
}

impl PanelId {
    /// Panels reachable from a category id in the projects fixture.
    /// Unknown ids resolve to nothing and navigation ignores them.
    pub fn from_category(id: &str) -> Option<Self> {
        match id {
            "chat" => Some(PanelId::Chat),
            "social" => Some(PanelId::Social),
            "arena" => Some(PanelId::Arena),
            "habits" => Some(PanelId::Habits),
            "videos" => Some(PanelId::Videos),
            _ => None,
        }
    }

    pub fn category_id(self) -> Option<&'static str> {
        match self {
            PanelId::Chat => Some("chat"),
            PanelId::Social => Some("social"),
            PanelId::Arena => Some("arena"),
            PanelId::Habits => Some("habits"),
            PanelId::Videos => Some("videos"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_round_trip() {
        for id in ["chat", "social", "arena", "habits", "videos"] {
            let panel = PanelId::from_category(id).unwrap();
            assert_eq!(panel.category_id(), Some(id));
        }
    }

    #[test]
    fn unknown_category_ids_resolve_to_nothing() {
        assert_eq!(PanelId::from_category("animConnect"), None);
        assert_eq!(PanelId::from_category(""), None);
    }

    #[test]
    fn shell_panels_have_no_category() {
        assert_eq!(PanelId::Portal.category_id(), None);
        assert_eq!(PanelId::Music.category_id(), None);
    }
}
