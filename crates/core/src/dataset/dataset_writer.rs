use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::encode::{encode_jpeg, EncodeError};
use crate::shared::frame::Frame;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to create dataset directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode face crop: {0}")]
    Encode(#[from] EncodeError),
    #[error("failed to write face crop {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists labeled face crops under a per-username directory.
///
/// Files are named `<username>_<i>.jpg` with `i` the zero-based crop
/// index within one request, so repeated requests for the same
/// username overwrite prior files at the same indices. Concurrent
/// requests for one username race on those paths with no locking; the
/// last writer wins. The naming scheme is an observable contract for
/// dataset consumers and must not change.
pub struct DatasetWriter {
    root: PathBuf,
}

impl DatasetWriter {
    /// `root` is injected so callers (and tests) control where the
    /// dataset tree lives; there is no ambient default here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes every crop as a JPEG and returns the number written.
    ///
    /// The username directory (and any missing parents) is created
    /// lazily, only when there is at least one crop to save.
    pub fn save_crops(&self, username: &str, crops: &[Frame]) -> Result<usize, DatasetError> {
        if crops.is_empty() {
            return Ok(0);
        }

        let user_dir = self.root.join(username);
        fs::create_dir_all(&user_dir).map_err(|e| DatasetError::CreateDir {
            path: user_dir.clone(),
            source: e,
        })?;

        for (i, crop) in crops.iter().enumerate() {
            let path = user_dir.join(format!("{username}_{i}.jpg"));
            let jpeg = encode_jpeg(crop)?;
            fs::write(&path, jpeg).map_err(|e| DatasetError::Write {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("saved face crop to {}", path.display());
        }
        Ok(crops.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_crop(width: u32, height: u32, fill: u8) -> Frame {
        Frame::new(vec![fill; (width * height * 3) as usize], width, height, 3)
    }

    #[test]
    fn test_saves_indexed_files_and_returns_count() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DatasetWriter::new(dir.path());

        let crops = vec![make_crop(30, 30, 10), make_crop(40, 40, 20)];
        let saved = writer.save_crops("alice", &crops).unwrap();

        assert_eq!(saved, 2);
        assert!(dir.path().join("alice/alice_0.jpg").exists());
        assert!(dir.path().join("alice/alice_1.jpg").exists());
        assert!(!dir.path().join("alice/alice_2.jpg").exists());
    }

    #[test]
    fn test_written_files_are_decodable_jpegs() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DatasetWriter::new(dir.path());
        writer.save_crops("bob", &[make_crop(24, 16, 99)]).unwrap();

        let img = image::open(dir.path().join("bob/bob_0.jpg")).unwrap();
        assert_eq!(img.width(), 24);
        assert_eq!(img.height(), 16);
    }

    #[test]
    fn test_empty_crop_list_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DatasetWriter::new(dir.path().join("dataset"));

        let saved = writer.save_crops("alice", &[]).unwrap();

        assert_eq!(saved, 0);
        assert!(!dir.path().join("dataset").exists());
    }

    #[test]
    fn test_repeat_request_overwrites_same_indices() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DatasetWriter::new(dir.path());

        writer
            .save_crops("carol", &[make_crop(20, 20, 1), make_crop(20, 20, 2)])
            .unwrap();
        writer.save_crops("carol", &[make_crop(32, 32, 3)]).unwrap();

        // Index 0 overwritten with the new 32x32 crop; index 1 untouched.
        let first = image::open(dir.path().join("carol/carol_0.jpg")).unwrap();
        assert_eq!(first.width(), 32);
        assert!(dir.path().join("carol/carol_1.jpg").exists());
    }

    #[test]
    fn test_missing_parents_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DatasetWriter::new(dir.path().join("deep/nested/dataset"));

        writer.save_crops("dave", &[make_crop(16, 16, 5)]).unwrap();

        assert!(dir
            .path()
            .join("deep/nested/dataset/dave/dave_0.jpg")
            .exists());
    }

    #[test]
    fn test_unwritable_root_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the dataset root should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file, not a directory").unwrap();

        let writer = DatasetWriter::new(&blocker);
        let result = writer.save_crops("eve", &[make_crop(16, 16, 0)]);

        assert!(matches!(result, Err(DatasetError::CreateDir { .. })));
    }
}
