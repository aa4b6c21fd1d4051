// ABOUTME: Opaque handle for the user's selected photo
// ABOUTME: Validates path, file type, and image extension without ever reading the bytes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize

//! Image selection
//!
//! The photo only gates processing. Its content does not influence any
//! measurement, so the token never opens the file.

use crate::constants::IMAGE_EXTENSIONS;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Selected image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageToken {
    path: PathBuf,
    file_name: String,
}

impl ImageToken {
    /// Validate a path and wrap it as a token
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` if the path does not exist
    /// - `InvalidInput` if it is not a regular file or lacks an image extension
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .map_err(|e| AppError::not_found(format!("image {}", path.display())).with_source(e))?;

        if !metadata.is_file() {
            return Err(AppError::invalid_input(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::invalid_input(format!(
                "{} is not an image (expected one of: {})",
                path.display(),
                IMAGE_EXTENSIONS.join(", ")
            )));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
        })
    }

    /// Path as given
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, for display
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
