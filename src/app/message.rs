// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::generation::{GenerateResult, GeneratedImage};
use crate::ui::notifications;
use crate::ui::{drop_zone, gallery, resolution_picker};
use crate::workflow::{IncomingFile, Ticket};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    DropZone(drop_zone::Message),
    ResolutionPicker(resolution_picker::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// The generate button was pressed.
    GenerateRequested,
    /// A file is being dragged over the window.
    FileHovered,
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the open file dialog.
    FilePicked(Option<PathBuf>),
    /// A dropped or picked file has been read.
    FileLoaded {
        path: PathBuf,
        result: Result<IncomingFile, Error>,
    },
    /// The generation request issued for `ticket` completed.
    GenerationSettled {
        ticket: Ticket,
        result: GenerateResult<Vec<GeneratedImage>>,
    },
    /// Preview bytes for the gallery entry at `index`.
    PreviewLoaded {
        ticket: Ticket,
        index: usize,
        result: GenerateResult<Vec<u8>>,
    },
    /// Result from the download Save As dialog.
    DownloadTargetChosen {
        url: String,
        path: Option<PathBuf>,
    },
    DownloadCompleted(GenerateResult<PathBuf>),
    /// Result of the startup health probe.
    HealthChecked(GenerateResult<()>),
    Tick(Instant), // Periodic tick for toast auto-dismiss and the spinner
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to stage on startup.
    pub file_path: Option<String>,
    /// Optional service base URL, replacing `[service] base_url`.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `WALLGEN_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional comma-separated resolution identifiers replacing the offered options.
    pub resolutions: Option<String>,
}
