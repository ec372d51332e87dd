use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use flume::Sender;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::{
    data::{
        DataError,
        models::{PortalData, ProjectsData, Track, Wallpaper},
    },
    event::events::Event,
    util::task::BackgroundTasks,
};

const BASE_URL_ENV: &str = "PORTAL_DATA_URL";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/data";

const FETCH_ATTEMPTS: u32 = 3;
const FETCH_BACKOFF: Duration = Duration::from_millis(500);

/// The four fixture documents the portal is driven by. Each loads in its
/// own task so one failing resource leaves the other panels intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Portal,
    Wallpapers,
    Playlist,
    Projects,
}

impl Resource {
    pub fn file(self) -> &'static str {
        match self {
            Resource::Portal => "portal.json",
            Resource::Wallpapers => "wallpapers.json",
            Resource::Playlist => "playlist.json",
            Resource::Projects => "projects.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resource::Portal => "notifications",
            Resource::Wallpapers => "fonds d'écran",
            Resource::Playlist => "playlist",
            Resource::Projects => "projets",
        }
    }
}

pub struct DataService {
    client: reqwest::Client,
    base_url: String,
}

impl DataService {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base(base_url)
    }

    pub fn with_base(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}/{}", self.base_url, resource.file())
    }

    /// Fixture media URLs are relative to the static host root, one level
    /// above the fixture directory. Absolute URLs pass through untouched.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let root = self
            .base_url
            .rsplit_once('/')
            .map_or(self.base_url.as_str(), |(root, _)| root);
        format!("{}/{}", root, path.trim_start_matches('/'))
    }

    /// Fetches the body as text first so HTTP and JSON failures stay
    /// distinguishable in the error surface.
    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, DataError> {
        let body = self
            .client
            .get(self.url_for(resource))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn fetch_portal(&self) -> Result<PortalData, DataError> {
        self.get_json(Resource::Portal).await
    }

    pub async fn fetch_wallpapers(&self) -> Result<Vec<Wallpaper>, DataError> {
        self.get_json(Resource::Wallpapers).await
    }

    pub async fn fetch_playlist(&self) -> Result<Vec<Track>, DataError> {
        self.get_json(Resource::Playlist).await
    }

    pub async fn fetch_projects(&self) -> Result<ProjectsData, DataError> {
        self.get_json(Resource::Projects).await
    }

    /// Kicks off the four independent fixture loads. Results and terminal
    /// failures come back over the event channel; each load claims its
    /// resource's slot so a re-kick replaces the in-flight fetch.
    pub fn spawn_loads(self: Arc<Self>, tx: &Sender<Event>, tasks: &mut BackgroundTasks) {
        let service = self.clone();
        let sender = tx.clone();
        tasks.spawn_fetch(
            Resource::Portal,
            tokio::spawn(async move {
                let result =
                    with_retry(Resource::Portal, || service.fetch_portal()).await;
                send_outcome(&sender, Resource::Portal, result.map(|d| {
                    Event::NotificationsFetched(d.notifications)
                }));
            }),
        );

        let service = self.clone();
        let sender = tx.clone();
        tasks.spawn_fetch(
            Resource::Wallpapers,
            tokio::spawn(async move {
                let result =
                    with_retry(Resource::Wallpapers, || service.fetch_wallpapers()).await;
                send_outcome(&sender, Resource::Wallpapers, result.map(Event::WallpapersFetched));
            }),
        );

        let service = self.clone();
        let sender = tx.clone();
        tasks.spawn_fetch(
            Resource::Playlist,
            tokio::spawn(async move {
                let result =
                    with_retry(Resource::Playlist, || service.fetch_playlist()).await;
                send_outcome(&sender, Resource::Playlist, result.map(Event::PlaylistFetched));
            }),
        );

        let service = self.clone();
        let sender = tx.clone();
        tasks.spawn_fetch(
            Resource::Projects,
            tokio::spawn(async move {
                let result =
                    with_retry(Resource::Projects, || service.fetch_projects()).await;
                send_outcome(&sender, Resource::Projects, result.map(|d| {
                    Event::ProjectsFetched(d.categories)
                }));
            }),
        );
    }
}

async fn with_retry<T, F, Fut>(resource: Resource, mut op: F) -> Result<T, DataError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DataError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => {
                info!(resource = resource.file(), attempt, "fixture loaded");
                return Ok(value);
            }
            Err(e) if attempt < FETCH_ATTEMPTS => {
                warn!(resource = resource.file(), attempt, "fetch failed: {e}");
                tokio::time::sleep(FETCH_BACKOFF * attempt).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

fn send_outcome(tx: &Sender<Event>, resource: Resource, result: Result<Event, DataError>) {
    match result {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => {
            error!(resource = resource.file(), "giving up: {e}");
            let _ = tx.send(Event::FetchFailed(resource, e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_base_and_file() {
        let service = DataService::with_base("http://host/data");
        assert_eq!(service.url_for(Resource::Portal), "http://host/data/portal.json");
        assert_eq!(
            service.url_for(Resource::Wallpapers),
            "http://host/data/wallpapers.json"
        );
    }

    #[test]
    fn asset_url_resolves_against_the_host_root() {
        let service = DataService::with_base("http://host:8000/data");
        assert_eq!(
            service.asset_url("assets/audio/circuits.mp3"),
            "http://host:8000/assets/audio/circuits.mp3"
        );
        assert_eq!(
            service.asset_url("https://cdn.example/x.mp3"),
            "https://cdn.example/x.mp3"
        );
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let service = DataService::with_base("http://host/data//");
        assert_eq!(
            service.url_for(Resource::Playlist),
            "http://host/data/playlist.json"
        );
    }
}
