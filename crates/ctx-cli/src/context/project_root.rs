use std::path::{Path, PathBuf};

/// Files whose presence marks a Laravel project root.
const ROOT_MARKERS: [&str; 2] = ["artisan", "composer.json"];

/// Walk upwards from `start` until a directory holding a root marker is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if ROOT_MARKERS
            .iter()
            .any(|marker| current.join(marker).is_file())
        {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
