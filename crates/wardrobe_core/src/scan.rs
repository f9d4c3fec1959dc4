use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions offered by the file picker and accepted from folder drops.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Options controlling how folder scanning behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// When true, scan subdirectories recursively.
    pub recursive: bool,
}

/// List image files in a folder, sorted by path.
pub fn collect_image_files(path: impl AsRef<Path>, opts: ScanOptions) -> Result<Vec<PathBuf>> {
    let root = path.as_ref();
    if !root.exists() {
        anyhow::bail!("Path does not exist: {}", root.display());
    }
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let walker = if opts.recursive {
        WalkDir::new(root).sort_by_file_name().into_iter()
    } else {
        WalkDir::new(root).max_depth(1).sort_by_file_name().into_iter()
    };

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("walkdir error: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_supported_image(path) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Expand dropped paths: files pass through untouched, folders are replaced
/// by the images directly inside them.
pub fn expand_dropped(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            match collect_image_files(&path, ScanOptions::default()) {
                Ok(files) => out.extend(files),
                Err(e) => tracing::warn!("cannot scan {}: {e}", path.display()),
            }
        } else {
            out.push(path);
        }
    }
    out
}

pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn empty_folder_returns_empty() -> Result<()> {
        let dir = tempdir()?;
        assert!(collect_image_files(dir.path(), ScanOptions::default())?.is_empty());
        Ok(())
    }

    #[test]
    fn lists_only_images_non_recursive() -> Result<()> {
        let dir = tempdir()?;
        File::create(dir.path().join("a.JPG"))?;
        File::create(dir.path().join("b.gif"))?;
        File::create(dir.path().join("c.bmp"))?;
        File::create(dir.path().join("notes.txt"))?;
        let nested = dir.path().join("nested");
        fs::create_dir(&nested)?;
        File::create(nested.join("d.png"))?;

        let files = collect_image_files(dir.path(), ScanOptions { recursive: false })?;
        assert_eq!(names(&files), vec!["a.JPG", "b.gif", "c.bmp"]);
        Ok(())
    }

    #[test]
    fn recursive_scan_descends() -> Result<()> {
        let dir = tempdir()?;
        File::create(dir.path().join("a.jpeg"))?;
        let nested = dir.path().join("nested");
        fs::create_dir(&nested)?;
        File::create(nested.join("b.PNG"))?;

        let files = collect_image_files(dir.path(), ScanOptions { recursive: true })?;
        assert_eq!(names(&files), vec!["a.jpeg", "b.PNG"]);
        Ok(())
    }

    #[test]
    fn scanning_a_file_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("a.png");
        File::create(&file)?;
        assert!(collect_image_files(&file, ScanOptions::default()).is_err());
        assert!(collect_image_files(dir.path().join("nope"), ScanOptions::default()).is_err());
        Ok(())
    }

    #[test]
    fn dropped_folders_are_expanded() -> Result<()> {
        let dir = tempdir()?;
        let folder = dir.path().join("closet");
        fs::create_dir(&folder)?;
        File::create(folder.join("x.png"))?;
        File::create(folder.join("y.txt"))?;
        let loose = dir.path().join("loose.jpg");
        File::create(&loose)?;

        let out = expand_dropped(vec![loose.clone(), folder]);
        assert_eq!(names(&out), vec!["loose.jpg", "x.png"]);
        Ok(())
    }
}
