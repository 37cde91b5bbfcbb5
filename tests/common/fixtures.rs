use std::path::Path;

use folio::models::{AboutMe, Project};

/// Creates a fully populated biography record.
pub fn sample_about_me() -> AboutMe {
    AboutMe {
        about_me: Some("I build small tools.".to_string()),
        headshot: Some("./images/headshot.webp".to_string()),
    }
}

/// Creates a fully populated project with the given name and index-based id.
pub fn make_project(index: usize, name: &str) -> Project {
    Project {
        project_id: Some(format!("proj_{index}")),
        project_name: Some(name.to_string()),
        short_description: Some(format!("{name} in short")),
        long_description: Some(format!("{name} at length")),
        card_image: Some(format!("./images/{name}_card.webp")),
        spotlight_image: Some(format!("./images/{name}_spotlight.webp")),
        url: Some(format!("https://example.com/{name}")),
    }
}

/// Creates `count` fully populated projects named project0, project1, ...
pub fn sample_projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|i| make_project(i, &format!("project{i}")))
        .collect()
}

/// Writes both data resources under `root/data/`, the way the page
/// expects to find them.
pub fn write_data_dir(root: &Path, about_me: &AboutMe, projects: &[Project]) {
    let data_dir = root.join("data");
    std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    std::fs::write(
        data_dir.join("aboutMeData.json"),
        serde_json::to_vec_pretty(about_me).expect("Failed to serialize about-me"),
    )
    .expect("Failed to write about-me resource");
    std::fs::write(
        data_dir.join("projectsData.json"),
        serde_json::to_vec_pretty(projects).expect("Failed to serialize projects"),
    )
    .expect("Failed to write projects resource");
}
