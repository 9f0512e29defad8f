use crate::{AssistantError, AssistantResult};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// Standard alphabet, padding optional, like a browser's `atob`.
const EXPORT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Target format of an export job.
///
/// Tags the backend does not document are kept in `Other` and forwarded as
/// given; they decode as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExportFormat {
    Markdown,
    Pdf,
    Docx,
    Txt,
    Csv,
    Json,
    Html,
    Other(String),
}

impl ExportFormat {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Markdown => "markdown",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Html => "html",
            Self::Other(tag) => tag,
        }
    }

    /// PDF and DOCX come back base64 encoded; everything else is literal text.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Pdf | Self::Docx)
    }
}

impl From<String> for ExportFormat {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "markdown" => Self::Markdown,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" => Self::Txt,
            "csv" => Self::Csv,
            "json" => Self::Json,
            "html" => Self::Html,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ExportFormat {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ExportFormat> for String {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ExportRequest {
    pub content: String,
    #[cfg_attr(feature = "utoipa", schema(value_type = String))]
    pub format: ExportFormat,
    pub filename: String,
}

impl ExportRequest {
    pub fn new(
        content: impl Into<String>,
        format: impl Into<ExportFormat>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            format: format.into(),
            filename: filename.into(),
        }
    }
}

/// The JSON envelope the backend wraps every export in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ExportEnvelope {
    pub file: String,
    pub mime: String,
    pub filename: String,
}

/// Decoded export bytes, tagged by how they were decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPayload {
    Binary { bytes: Vec<u8>, mime: String },
    Text { bytes: Vec<u8>, mime: String },
}

impl ExportPayload {
    /// Decode `envelope.file` according to `format`.
    pub fn decode(format: &ExportFormat, envelope: ExportEnvelope) -> AssistantResult<Self> {
        let ExportEnvelope { file, mime, .. } = envelope;

        if format.is_binary() {
            let compact: Vec<u8> = file
                .bytes()
                .filter(|byte| !byte.is_ascii_whitespace())
                .collect();
            let bytes = EXPORT_BASE64.decode(compact).map_err(|error| {
                AssistantError::Decode(format!("Invalid base64 in {format} export: {error}"))
            })?;
            Ok(Self::Binary { bytes, mime })
        } else {
            Ok(Self::Text {
                bytes: file.into_bytes(),
                mime,
            })
        }
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Binary { bytes, .. } | Self::Text { bytes, .. } => bytes,
        }
    }

    #[must_use]
    pub fn mime(&self) -> &str {
        match self {
            Self::Binary { mime, .. } | Self::Text { mime, .. } => mime,
        }
    }

    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary { .. })
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Binary { bytes, .. } | Self::Text { bytes, .. } => bytes,
        }
    }
}

/// A decoded export ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub payload: ExportPayload,
    /// Filename from the export job.
    pub filename: String,
    /// Filename the backend proposed, usually with an extension appended.
    pub suggested_filename: String,
}

impl ExportedFile {
    /// Write the payload into `dir` under the backend's suggested name,
    /// falling back to the job filename when the suggestion is unusable.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let name = Path::new(&self.suggested_filename)
            .file_name()
            .or_else(|| Path::new(&self.filename).file_name())
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "export has no usable filename")
            })?;
        let path = dir.as_ref().join(name);
        fs::write(&path, self.payload.bytes())?;
        Ok(path)
    }
}
