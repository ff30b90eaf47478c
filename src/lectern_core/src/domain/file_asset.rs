use std::{fmt, path::Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    ids::{AccountId, CourseId, FileId},
    input_error::InputError,
    pagination::PageRequest,
};

/// Largest payload accepted by an upload: 50 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Category tag of a stored file. `Other` accepts any extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Video,
    Document,
    Audio,
    Other,
}

impl FileCategory {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        match raw {
            "image" => Ok(FileCategory::Image),
            "video" => Ok(FileCategory::Video),
            "document" => Ok(FileCategory::Document),
            "audio" => Ok(FileCategory::Audio),
            "other" => Ok(FileCategory::Other),
            "" => Err(InputError::Empty("file type")),
            unknown => Err(InputError::UnsupportedFileType(unknown.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Image => "image",
            FileCategory::Video => "video",
            FileCategory::Document => "document",
            FileCategory::Audio => "audio",
            FileCategory::Other => "other",
        }
    }

    /// Lowercase extensions, dot included. `None` means unrestricted.
    pub fn allowed_extensions(&self) -> Option<&'static [&'static str]> {
        match self {
            FileCategory::Image => Some(&[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"]),
            FileCategory::Video => Some(&[".mp4", ".avi", ".mov", ".wmv", ".flv", ".webm"]),
            FileCategory::Document => {
                Some(&[".pdf", ".doc", ".docx", ".ppt", ".pptx", ".txt", ".md"])
            }
            FileCategory::Audio => Some(&[".mp3", ".wav", ".flac", ".aac", ".ogg"]),
            FileCategory::Other => None,
        }
    }

    pub fn accepts(&self, file_name: &str) -> Result<(), InputError> {
        let Some(allowed) = self.allowed_extensions() else {
            return Ok(());
        };
        let extension = extension_of(file_name).to_lowercase();
        if allowed.contains(&extension.as_str()) {
            Ok(())
        } else {
            Err(InputError::ExtensionNotAllowed {
                category: self.as_str().to_string(),
                extension,
            })
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension including the leading dot, or the empty string.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAsset {
    pub id: FileId,
    pub course_id: CourseId,
    pub uploader_id: AccountId,
    pub file_name: String,
    pub file_path: String,
    pub file_url: String,
    pub file_size: i64,
    pub file_type: FileCategory,
    pub upload_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Metadata for a file whose bytes are already in object storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileAsset {
    pub course_id: CourseId,
    pub uploader_id: AccountId,
    pub file_name: String,
    pub file_path: String,
    pub file_url: String,
    pub file_size: i64,
    pub file_type: FileCategory,
}

impl NewFileAsset {
    pub fn into_file(self, id: FileId, now: DateTime<Utc>) -> FileAsset {
        FileAsset {
            id,
            course_id: self.course_id,
            uploader_id: self.uploader_id,
            file_name: self.file_name,
            file_path: self.file_path,
            file_url: self.file_url,
            file_size: self.file_size,
            file_type: self.file_type,
            upload_time: now,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An upload as received from the gateway, before any validation.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub file_type: String,
    pub course_id: CourseId,
    pub uploader_id: AccountId,
}

/// An upload that passed every check and may touch storage.
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub file_type: FileCategory,
    pub course_id: CourseId,
    pub uploader_id: AccountId,
}

impl UploadRequest {
    pub fn validate(self) -> Result<ValidatedUpload, InputError> {
        let size = self.bytes.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(InputError::PayloadTooLarge {
                size,
                max: MAX_UPLOAD_BYTES,
            });
        }
        if self.file_name.is_empty() {
            return Err(InputError::Empty("file name"));
        }
        let file_type = FileCategory::parse(&self.file_type)?;
        if self.course_id.is_unset() && file_type != FileCategory::Image {
            return Err(InputError::CourseRequired);
        }
        if self.uploader_id.is_unset() {
            return Err(InputError::MissingId("uploader id"));
        }
        file_type.accepts(&self.file_name)?;

        Ok(ValidatedUpload {
            bytes: self.bytes,
            file_name: self.file_name,
            file_type,
            course_id: self.course_id,
            uploader_id: self.uploader_id,
        })
    }
}

/// Filters for listing files. Absent fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    pub course_id: Option<CourseId>,
    pub file_type: Option<FileCategory>,
    pub uploader_id: Option<AccountId>,
}

impl FileFilter {
    pub fn matches(&self, file: &FileAsset) -> bool {
        self.course_id.is_none_or(|id| id == file.course_id)
            && self.file_type.is_none_or(|kind| kind == file.file_type)
            && self.uploader_id.is_none_or(|id| id == file.uploader_id)
    }
}

/// A file listing query, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    pub filter: FileFilter,
    pub page: PageRequest,
}
