// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler translates one message into a [`Controller`] call plus the
//! side effects around it (dialogs, HTTP tasks, toasts). The workflow rules
//! themselves live in [`crate::workflow`].

use super::{notifications, Message};
use crate::error::Error;
use crate::generation::{
    suggested_file_name, GenerateError, GenerateResult, GeneratedImage, GenerationClient,
};
use crate::ui::gallery::{self, Preview};
use crate::ui::widgets::animated_spinner;
use crate::ui::{drop_zone, resolution_picker};
use crate::workflow::{
    Controller, IncomingFile, Settlement, SubmitError, Ticket, PICKER_EXTENSIONS,
};
use iced::widget::image::Handle;
use iced::Task;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Key of the warning shown while the service cannot be reached.
pub const SERVICE_UNREACHABLE_KEY: &str = "notification-service-unreachable";

/// File name offered by the save dialog when the URL has no usable segment.
pub const FALLBACK_DOWNLOAD_NAME: &str = "wallpaper.jpg";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub controller: &'a mut Controller,
    pub notifications: &'a mut notifications::Manager,
    pub previews: &'a mut Vec<Preview>,
    pub client: &'a Result<GenerationClient, GenerateError>,
    /// Configured service base URL, shown in connectivity warnings.
    pub service_url: &'a str,
    pub spinner_rotation: &'a mut f32,
    pub file_reads: &'a mut FileReads,
}

/// Files waiting to be read from disk.
///
/// One read runs at a time so files are acquired in the order they arrived:
/// after a multi-file drop the last accepted file in drop order is selected.
#[derive(Debug, Default)]
pub struct FileReads {
    reading: bool,
    queued: VecDeque<PathBuf>,
}

impl FileReads {
    /// Returns the path to read now, or `None` when it waits behind a
    /// running read.
    pub fn enqueue(&mut self, path: PathBuf) -> Option<PathBuf> {
        if self.reading {
            self.queued.push_back(path);
            None
        } else {
            self.reading = true;
            Some(path)
        }
    }

    /// Marks the running read as done and returns the next path to read.
    pub fn finish(&mut self) -> Option<PathBuf> {
        let next = self.queued.pop_front();
        self.reading = next.is_some();
        next
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.reading && self.queued.is_empty()
    }

    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued.len()
    }
}

/// Reads `path` now, or after the reads already queued.
pub fn read_in_order(file_reads: &mut FileReads, path: PathBuf) -> Task<Message> {
    file_reads.enqueue(path).map_or_else(Task::none, load_file)
}

/// Reads a file from disk in the background.
pub fn load_file(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = IncomingFile::read(&path).await;
            (path, result)
        },
        |(path, result)| Message::FileLoaded { path, result },
    )
}

/// Probes the service once so an unreachable endpoint is reported early.
pub fn check_health(client: &Result<GenerationClient, GenerateError>) -> Task<Message> {
    match client {
        Ok(client) => {
            let client = client.clone();
            Task::perform(
                async move { client.check_health().await },
                Message::HealthChecked,
            )
        }
        Err(err) => Task::done(Message::HealthChecked(Err(err.clone()))),
    }
}

pub fn handle_drop_zone_message(message: drop_zone::Message) -> Task<Message> {
    match message {
        drop_zone::Message::BrowseRequested => handle_open_file_dialog(),
    }
}

/// Opens the native file picker, filtered to image extensions.
fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            let dialog = rfd::AsyncFileDialog::new()
                .set_title("Select an image")
                .add_filter("Images", PICKER_EXTENSIONS);

            if let Some(dir) = dirs::picture_dir() {
                if dir.exists() {
                    return dialog
                        .set_directory(&dir)
                        .pick_file()
                        .await
                        .map(|h| h.path().to_path_buf());
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

pub fn handle_file_picked(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    // User cancelled: nothing to do
    match path {
        Some(path) => read_in_order(ctx.file_reads, path),
        None => Task::none(),
    }
}

pub fn handle_file_hovered(ctx: &mut UpdateContext<'_>, hovering: bool) -> Task<Message> {
    ctx.controller.set_drag_over(hovering);
    Task::none()
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    ctx.controller.set_drag_over(false);
    tracing::debug!(path = %path.display(), "file dropped");
    read_in_order(ctx.file_reads, path)
}

pub fn handle_file_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<IncomingFile, Error>,
) -> Task<Message> {
    match result {
        Ok(file) => {
            if let Err(err) = ctx.controller.acquire(file) {
                ctx.notifications
                    .push(notifications::Notification::warning(err.i18n_key()));
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read file");
            let filename = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            ctx.notifications.push(
                notifications::Notification::warning("notification-file-read-error")
                    .with_arg("filename", filename),
            );
        }
    }

    ctx.file_reads.finish().map_or_else(Task::none, load_file)
}

pub fn handle_resolution_picker_message(
    ctx: &mut UpdateContext<'_>,
    message: resolution_picker::Message,
) -> Task<Message> {
    match message {
        resolution_picker::Message::Toggled(index, checked) => {
            ctx.controller.toggle_resolution(index, checked);
        }
    }
    Task::none()
}

pub fn handle_generate_requested(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let submission = match ctx.controller.begin_submission() {
        Ok(submission) => submission,
        Err(SubmitError::ActionDisabled) => {
            tracing::debug!("generate ignored while a request is in flight");
            return Task::none();
        }
        Err(err @ SubmitError::Invalid(_)) => {
            if let Some(key) = err.i18n_key() {
                ctx.notifications
                    .push(notifications::Notification::warning(key));
            }
            return Task::none();
        }
    };

    ctx.previews.clear();
    let ticket = submission.ticket;

    match ctx.client {
        Ok(client) => {
            let client = client.clone();
            Task::perform(
                async move { client.generate(submission.request).await },
                move |result| Message::GenerationSettled { ticket, result },
            )
        }
        // An unusable endpoint fails the attempt like any other transport error
        Err(err) => Task::done(Message::GenerationSettled {
            ticket,
            result: Err(err.clone()),
        }),
    }
}

pub fn handle_generation_settled(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    result: GenerateResult<Vec<GeneratedImage>>,
) -> Task<Message> {
    match ctx.controller.settle(ticket, result) {
        Settlement::Rendered { count } => {
            *ctx.previews = vec![Preview::Loading; count];
            ctx.notifications.dismiss_key(SERVICE_UNREACHABLE_KEY);

            let mut tasks = Vec::with_capacity(count + 1);
            if ctx.controller.gallery_mut().take_scroll_request() {
                tasks.push(scroll_results_into_view());
            }
            if let Ok(client) = ctx.client {
                for (index, entry) in ctx.controller.gallery().entries().iter().enumerate() {
                    tasks.push(fetch_preview(client, ticket, index, entry.preview_url()));
                }
            }
            Task::batch(tasks)
        }
        Settlement::Failed => {
            ctx.notifications.push(notifications::Notification::error(
                "notification-generation-error",
            ));
            Task::none()
        }
        Settlement::Stale => Task::none(),
    }
}

fn scroll_results_into_view() -> Task<Message> {
    use iced::widget::scrollable::RelativeOffset;
    use iced::widget::{operation, Id};
    operation::snap_to(
        Id::new(gallery::SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 1.0 },
    )
}

fn fetch_preview(
    client: &GenerationClient,
    ticket: Ticket,
    index: usize,
    url: &str,
) -> Task<Message> {
    let client = client.clone();
    let url = url.to_string();
    Task::perform(
        async move { client.fetch_bytes(&url).await },
        move |result| Message::PreviewLoaded {
            ticket,
            index,
            result,
        },
    )
}

pub fn handle_preview_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    index: usize,
    result: GenerateResult<Vec<u8>>,
) -> Task<Message> {
    // Previews of an earlier submission arrive after the gallery was replaced
    if ctx.controller.results_ticket() != Some(ticket) {
        return Task::none();
    }
    let Some(slot) = ctx.previews.get_mut(index) else {
        return Task::none();
    };

    *slot = match result {
        Ok(bytes) => Preview::Ready(Handle::from_bytes(bytes)),
        Err(err) => {
            tracing::debug!(index, error = %err, "preview unavailable");
            Preview::Unavailable
        }
    };
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::DownloadRequested(index) => {
            let Some(entry) = ctx.controller.gallery().get(index) else {
                return Task::none();
            };
            handle_download_dialog(entry.download_url().to_string())
        }
    }
}

/// Opens the Save As dialog for a generated file.
fn handle_download_dialog(url: String) -> Task<Message> {
    let filename = suggested_file_name(&url, FALLBACK_DOWNLOAD_NAME);
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&filename);

            if let Some(dir) = dirs::download_dir() {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            let path = dialog.save_file().await.map(|h| h.path().to_path_buf());
            (url, path)
        },
        |(url, path)| Message::DownloadTargetChosen { url, path },
    )
}

pub fn handle_download_target_chosen(
    ctx: &mut UpdateContext<'_>,
    url: String,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    match ctx.client {
        Ok(client) => {
            let client = client.clone();
            Task::perform(
                async move {
                    let written = client
                        .download_to(&url, &path, |progress| {
                            tracing::debug!(progress, "download progress");
                        })
                        .await;
                    written.map(|_| path)
                },
                Message::DownloadCompleted,
            )
        }
        Err(err) => Task::done(Message::DownloadCompleted(Err(err.clone()))),
    }
}

pub fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: GenerateResult<PathBuf>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "download saved");
            let filename = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            ctx.notifications.push(
                notifications::Notification::success("notification-download-success")
                    .with_arg("filename", filename),
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "download failed");
            ctx.notifications.push(notifications::Notification::error(
                "notification-download-error",
            ));
        }
    }
    Task::none()
}

pub fn handle_health_checked(ctx: &mut UpdateContext<'_>, result: GenerateResult<()>) -> Task<Message> {
    match result {
        Ok(()) => tracing::info!(url = ctx.service_url, "generation service reachable"),
        Err(err) => {
            tracing::warn!(url = ctx.service_url, error = %err, "generation service unreachable");
            ctx.notifications.push(
                notifications::Notification::warning(SERVICE_UNREACHABLE_KEY)
                    .with_arg("url", ctx.service_url),
            );
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    if ctx.controller.is_progress_visible() {
        *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_file_is_read_immediately() {
        let mut reads = FileReads::default();
        assert_eq!(
            reads.enqueue(PathBuf::from("a.png")),
            Some(PathBuf::from("a.png"))
        );
        assert!(!reads.is_idle());
    }

    #[test]
    fn later_files_wait_and_come_out_in_arrival_order() {
        let mut reads = FileReads::default();
        let _ = reads.enqueue(PathBuf::from("a.png"));
        assert_eq!(reads.enqueue(PathBuf::from("b.png")), None);
        assert_eq!(reads.enqueue(PathBuf::from("c.png")), None);
        assert_eq!(reads.queued(), 2);

        assert_eq!(reads.finish(), Some(PathBuf::from("b.png")));
        assert_eq!(reads.finish(), Some(PathBuf::from("c.png")));
        assert_eq!(reads.finish(), None);
        assert!(reads.is_idle());
    }

    #[test]
    fn finish_without_a_running_read_stays_idle() {
        let mut reads = FileReads::default();
        assert_eq!(reads.finish(), None);
        assert!(reads.is_idle());
    }
}
