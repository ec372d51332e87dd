use serde::Deserialize;

/// `portal.json`: `{ "notifications": [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalData {
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub title: String,
    pub summary: String,
}

/// `wallpapers.json`: a bare array of entries.
#[derive(Debug, Clone, Deserialize)]
pub struct Wallpaper {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: WallpaperKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperKind {
    Image,
    Video,
}

/// `playlist.json`: a bare array of tracks.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub url: String,
}

/// `projects.json`: `{ "categories": [...] }`. Each category drives one
/// panel, selected by `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsData {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub summary: String,
    pub items: Vec<CategoryItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub progress: Option<String>,
    #[serde(default)]
    pub views: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_fixture_shape() {
        let doc = r#"{ "notifications": [
            { "title": "Bienvenue", "summary": "Tout est prêt." }
        ] }"#;
        let data: PortalData = serde_json::from_str(doc).unwrap();
        assert_eq!(data.notifications.len(), 1);
        assert_eq!(data.notifications[0].title, "Bienvenue");
    }

    #[test]
    fn wallpaper_kind_comes_from_type_field() {
        let doc = r#"[
            { "title": "Aurore", "url": "a.jpg", "type": "image" },
            { "title": "Vagues", "url": "v.mp4", "type": "video" }
        ]"#;
        let list: Vec<Wallpaper> = serde_json::from_str(doc).unwrap();
        assert_eq!(list[0].kind, WallpaperKind::Image);
        assert_eq!(list[1].kind, WallpaperKind::Video);
    }

    #[test]
    fn unknown_wallpaper_kind_is_rejected() {
        let doc = r#"[ { "title": "X", "url": "x.gif", "type": "gif" } ]"#;
        assert!(serde_json::from_str::<Vec<Wallpaper>>(doc).is_err());
    }

    #[test]
    fn playlist_fixture_shape() {
        let doc = r#"[ { "title": "Circuits", "artist": "Velvet Machine", "url": "c.mp3" } ]"#;
        let tracks: Vec<Track> = serde_json::from_str(doc).unwrap();
        assert_eq!(tracks[0].artist, "Velvet Machine");
    }

    #[test]
    fn category_items_tolerate_missing_optionals() {
        let doc = r#"{ "categories": [ {
            "id": "habits",
            "name": "Aventures",
            "icon": "🧭",
            "summary": "Défis quotidiens",
            "items": [
                { "title": "Lecture", "description": "20 minutes" },
                { "title": "Marche", "description": "Un tour", "progress": "6/10", "tag": "matin" }
            ]
        } ] }"#;
        let data: ProjectsData = serde_json::from_str(doc).unwrap();
        let items = &data.categories[0].items;
        assert!(items[0].progress.is_none());
        assert!(items[0].icon.is_none());
        assert_eq!(items[1].progress.as_deref(), Some("6/10"));
        assert_eq!(items[1].tag.as_deref(), Some("matin"));
    }
}
