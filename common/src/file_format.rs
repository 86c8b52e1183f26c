use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum FileFormatError {
    #[error("Failed to get file extension")]
    MissingFileExtension,
    #[error("Unsupported file extension for file: {0}")]
    UnsupportedFileExtension(String),
    #[error("YAML serialization failed")]
    Yaml(#[from] serde_yml::Error),
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type FileFormatResult<T> = Result<T, FileFormatError>;

pub fn get_file_extension(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(|os_str| os_str.to_str())
}

/// Text formats accepted for configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerdeFormat {
    Yaml,
    Json,
}

impl SerdeFormat {
    pub fn all_formats_for_testing() -> [Self; 2] {
        [Self::Yaml, Self::Json]
    }

    pub fn from_file_name(file_name: &str) -> FileFormatResult<Self> {
        let ext = get_file_extension(file_name).ok_or(FileFormatError::MissingFileExtension)?;

        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Ok(Self::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(FileFormatError::UnsupportedFileExtension(
                file_name.to_string(),
            ))
        }
    }
}

pub fn serialize<T: Serialize>(value: &T, format: SerdeFormat) -> FileFormatResult<String> {
    match format {
        SerdeFormat::Yaml => Ok(serde_yml::to_string(value)?),
        SerdeFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

pub fn deserialize<T: DeserializeOwned>(
    serialized: &str,
    format: SerdeFormat,
) -> FileFormatResult<T> {
    match format {
        SerdeFormat::Yaml => Ok(serde_yml::from_str(serialized)?),
        SerdeFormat::Json => Ok(serde_json::from_str(serialized)?),
    }
}

/// Reads and deserializes a file, picking the format from its extension.
pub fn load_file<T: DeserializeOwned>(file_name: &str) -> FileFormatResult<T> {
    let format = SerdeFormat::from_file_name(file_name)?;
    let text = std::fs::read_to_string(file_name).map_err(|source| FileFormatError::Io {
        path: file_name.to_string(),
        source,
    })?;

    deserialize(&text, format)
}
