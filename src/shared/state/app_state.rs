use crate::domain::models::{ChatMessage, Document, Theme};

/// Upload concern as a tagged union instead of a flag + separate progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading { progress: u8 },
}

/// Transient error shown under the header.
/// `generation` lets a stale auto-clear timer recognise it was superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    pub generation: u64,
}

/// Everything the root of the application owns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub documents: Vec<Document>,
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    pub upload: UploadStatus,
    pub is_deleting: bool,
    pub error: Option<ErrorBanner>,
    pub is_mobile_open: bool,
    error_generation: u64,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.upload, UploadStatus::Uploading { .. })
    }

    /// Upload percentage, 0 when idle
    pub fn upload_progress(&self) -> u8 {
        match self.upload {
            UploadStatus::Uploading { progress } => progress,
            UploadStatus::Idle => 0,
        }
    }

    pub fn has_documents(&self) -> bool {
        !self.documents.is_empty()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|banner| banner.message.as_str())
    }

    /// Replace the banner; returns the generation to hand to the clear timer
    pub fn set_error(&mut self, message: impl Into<String>) -> u64 {
        self.error_generation += 1;
        self.error = Some(ErrorBanner {
            message: message.into(),
            generation: self.error_generation,
        });
        self.error_generation
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Clear the banner only if no newer error replaced it
    pub fn expire_error(&mut self, generation: u64) -> bool {
        match &self.error {
            Some(banner) if banner.generation == generation => {
                self.error = None;
                true
            }
            _ => false,
        }
    }
}
