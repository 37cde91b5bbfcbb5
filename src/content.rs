use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::models::{AboutMe, Project};

/// Relative path of the biography resource.
pub const ABOUT_ME_PATH: &str = "data/aboutMeData.json";
/// Relative path of the project list resource.
pub const PROJECTS_PATH: &str = "data/projectsData.json";

/// Where the two page resources come from: a directory on disk or a
/// remote base URL. The relative resource paths are fixed either way.
#[derive(Debug, Clone)]
pub enum ContentSource {
    Local { root: PathBuf },
    Remote { base_url: String },
}

impl ContentSource {
    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self::Local { root: root.into() }
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self::Remote { base_url }
    }

    /// Fetch and parse the biography resource.
    pub async fn fetch_about_me(&self) -> Result<AboutMe> {
        self.fetch_json(ABOUT_ME_PATH).await
    }

    /// Fetch and parse the project list resource.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.fetch_json(PROJECTS_PATH).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, rel_path: &str) -> Result<T> {
        match self {
            Self::Local { root } => {
                let path = root.join(rel_path);
                let bytes = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_slice(&bytes)
                    .with_context(|| format!("failed to parse {}", path.display()))
            }
            Self::Remote { base_url } => {
                let url = format!("{base_url}/{rel_path}");
                let response = reqwest::get(&url)
                    .await
                    .and_then(|r| r.error_for_status())
                    .with_context(|| format!("failed to fetch {url}"))?;
                response
                    .json()
                    .await
                    .with_context(|| format!("failed to parse {url}"))
            }
        }
    }
}
