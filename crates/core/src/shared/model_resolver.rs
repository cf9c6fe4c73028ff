use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("could not determine model cache directory")]
    NoCacheDir,
    #[error("failed to create model cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Resolve a detector model file by name.
///
/// Resolution order:
/// 1. User cache directory
/// 2. Bundled path (for pre-packaged installs)
/// 3. Download from URL into the cache
pub fn resolve(
    name: &str,
    url: &str,
    bundled_dir: Option<&Path>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    let cached_path = cache_dir.join(name);
    if cached_path.exists() {
        return Ok(cached_path);
    }

    if let Some(dir) = bundled_dir {
        let bundled_path = dir.join(name);
        if bundled_path.exists() {
            return Ok(bundled_path);
        }
    }

    fs::create_dir_all(&cache_dir).map_err(ModelResolveError::CacheDir)?;
    log::info!("downloading detector model {name} from {url}");
    download(url, &cached_path, progress)?;
    Ok(cached_path)
}

pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    dirs::cache_dir()
        .map(|d| d.join("facecapture").join("models"))
        .ok_or(ModelResolveError::NoCacheDir)
}

fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), ModelResolveError> {
    let download_err = |e| ModelResolveError::Download {
        url: url.to_string(),
        source: e,
    };
    let response = reqwest::blocking::get(url).map_err(download_err)?;
    let total = response.content_length().unwrap_or(0);
    let bytes = response.bytes().map_err(download_err)?;

    // Write to a temp file first, then rename for atomicity.
    let temp_path = dest.with_extension("part");
    let write_err = |path: &Path| {
        let path = path.to_path_buf();
        move |e| ModelResolveError::Write { path, source: e }
    };
    let mut file = fs::File::create(&temp_path).map_err(write_err(&temp_path))?;

    let mut downloaded: u64 = 0;
    for chunk in bytes.chunks(512 * 1024) {
        file.write_all(chunk).map_err(write_err(&temp_path))?;
        downloaded += chunk.len() as u64;
        if let Some(ref cb) = progress {
            cb(downloaded, total);
        }
    }
    file.flush().map_err(write_err(&temp_path))?;
    drop(file);

    fs::rename(&temp_path, dest).map_err(write_err(dest))?;
    Ok(())
}
