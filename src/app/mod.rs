// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the generation workflow.
//!
//! The `App` struct wires together the workflow controller, the generation
//! service client, localization, and toast notifications, and translates
//! messages into side effects like dialogs and HTTP requests.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::generation::{GenerateError, GenerationClient};
use crate::i18n::I18n;
use crate::ui::gallery::Preview;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::workflow::{Controller, ResolutionOptions};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: Controller,
    /// `Err` when the configured endpoint cannot be used; every request then fails.
    client: Result<GenerationClient, GenerateError>,
    service_url: String,
    theme_mode: ThemeMode,
    /// Preview state per gallery entry, indexed like the entries.
    previews: Vec<Preview>,
    spinner_rotation: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    file_reads: update::FileReads,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.controller.phase())
            .field("has_selection", &self.controller.selection().is_some())
            .field("service_url", &self.service_url)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and initializes application state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::from_config(flags, config, config_warning)
    }

    /// Initializes application state from an already loaded configuration.
    ///
    /// CLI flags take precedence over the configuration. The returned task
    /// probes the service and, when a file was given, stages it.
    fn from_config(
        flags: Flags,
        mut config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        if let Some(endpoint) = flags.endpoint {
            config.service.base_url = endpoint;
        }
        if let Some(list) = flags.resolutions.as_deref() {
            config.resolutions.set_options_from_list(list);
        }

        let i18n = I18n::new(flags.lang, &config);
        let options = ResolutionOptions::new(
            config.resolutions.options.iter().cloned(),
            &config.resolutions.checked,
        );

        let client = GenerationClient::new(&config.service);
        if let Err(err) = &client {
            tracing::error!(url = %config.service.base_url, error = %err, "unusable service endpoint");
        }

        let mut app = App {
            i18n,
            controller: Controller::new(options),
            client,
            service_url: config.service.base_url,
            theme_mode: config.general.theme_mode,
            previews: Vec::new(),
            spinner_rotation: 0.0,
            notifications: notifications::Manager::new(),
            file_reads: update::FileReads::default(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let mut tasks = vec![update::check_health(&app.client)];
        if let Some(path) = flags.file_path {
            tasks.push(update::read_in_order(
                &mut app.file_reads,
                PathBuf::from(path),
            ));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.controller.selection() {
            Some(selection) => format!("{} - {app_name}", selection.name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.controller.is_progress_visible(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            notifications: &mut self.notifications,
            previews: &mut self.previews,
            client: &self.client,
            service_url: &self.service_url,
            spinner_rotation: &mut self.spinner_rotation,
            file_reads: &mut self.file_reads,
        };

        match message {
            Message::DropZone(drop_zone_message) => {
                update::handle_drop_zone_message(drop_zone_message)
            }
            Message::ResolutionPicker(picker_message) => {
                update::handle_resolution_picker_message(&mut ctx, picker_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::GenerateRequested => update::handle_generate_requested(&mut ctx),
            Message::FileHovered => update::handle_file_hovered(&mut ctx, true),
            Message::FilesHoveredLeft => update::handle_file_hovered(&mut ctx, false),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::FilePicked(path) => update::handle_file_picked(&mut ctx, path),
            Message::FileLoaded { path, result } => {
                update::handle_file_loaded(&mut ctx, path, result)
            }
            Message::GenerationSettled { ticket, result } => {
                update::handle_generation_settled(&mut ctx, ticket, result)
            }
            Message::PreviewLoaded {
                ticket,
                index,
                result,
            } => update::handle_preview_loaded(&mut ctx, ticket, index, result),
            Message::DownloadTargetChosen { url, path } => {
                update::handle_download_target_chosen(&mut ctx, url, path)
            }
            Message::DownloadCompleted(result) => {
                update::handle_download_completed(&mut ctx, result)
            }
            Message::HealthChecked(result) => update::handle_health_checked(&mut ctx, result),
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            previews: &self.previews,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::generation::GeneratedImage;
    use crate::workflow::{IncomingFile, Phase};
    use std::time::Instant;

    fn flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    fn build_app(flags: Flags) -> App {
        let (app, _task) = App::from_config(flags, Config::default(), None);
        app
    }

    fn has_notification(app: &App, key: &str) -> bool {
        app.notifications.visible().any(|n| n.message_key() == key)
    }

    fn stage_png(app: &mut App) {
        let _ = app.update(Message::FileLoaded {
            path: PathBuf::from("/tmp/photo.png"),
            result: Ok(IncomingFile::new("photo.png", "image/png", vec![1, 2, 3])),
        });
    }

    fn image(res: &str, url: &str) -> GeneratedImage {
        GeneratedImage {
            resolution_label: res.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn new_app_starts_idle_with_configured_resolutions() {
        let app = build_app(flags());
        assert_eq!(app.controller.phase(), Phase::Idle);
        assert!(app.controller.selection().is_none());
        assert_eq!(
            app.controller.options().choices().as_slice(),
            &["1920x1080".to_string(), "2560x1440".to_string()]
        );
        assert!(app.client.is_ok());
    }

    #[test]
    fn resolutions_flag_replaces_offered_options() {
        let app = build_app(Flags {
            resolutions: Some("720p, 1080p".to_string()),
            ..flags()
        });
        let ids: Vec<&str> = app.controller.options().iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["720p", "1080p"]);
        assert_eq!(
            app.controller.options().choices().into_vec(),
            vec!["720p", "1080p"]
        );
    }

    #[test]
    fn endpoint_flag_overrides_configured_url() {
        let app = build_app(Flags {
            endpoint: Some("http://wallgen.test:9000".to_string()),
            ..flags()
        });
        assert_eq!(app.service_url, "http://wallgen.test:9000");
        let client = app.client.as_ref().expect("valid endpoint");
        assert_eq!(client.upload_url().as_str(), "http://wallgen.test:9000/upload");
    }

    #[test]
    fn config_warning_is_shown_as_toast() {
        let (app, _task) = App::from_config(
            flags(),
            Config::default(),
            Some("notification-config-load-error".to_string()),
        );
        assert!(has_notification(&app, "notification-config-load-error"));
    }

    #[test]
    fn title_shows_app_name_then_selection() {
        let mut app = build_app(flags());
        assert_eq!(app.title(), "WallGen");

        stage_png(&mut app);
        assert_eq!(app.title(), "photo.png - WallGen");
    }

    #[test]
    fn loaded_image_becomes_selection() {
        let mut app = build_app(flags());
        stage_png(&mut app);

        assert_eq!(app.controller.phase(), Phase::Ready);
        assert_eq!(app.controller.selection().map(|s| s.name()), Some("photo.png"));
    }

    #[test]
    fn loaded_non_image_is_rejected_with_warning() {
        let mut app = build_app(flags());
        let _ = app.update(Message::FileLoaded {
            path: PathBuf::from("/tmp/notes.txt"),
            result: Ok(IncomingFile::new("notes.txt", "text/plain", b"hi".to_vec())),
        });

        assert!(app.controller.selection().is_none());
        assert!(has_notification(&app, "notification-not-an-image"));
    }

    #[test]
    fn unreadable_file_shows_warning() {
        let mut app = build_app(flags());
        let _ = app.update(Message::FileLoaded {
            path: PathBuf::from("/tmp/missing.png"),
            result: Err(Error::Io("not found".to_string())),
        });

        assert!(app.controller.selection().is_none());
        assert!(has_notification(&app, "notification-file-read-error"));
    }

    #[test]
    fn multi_file_drop_selects_last_file_in_drop_order() {
        let mut app = build_app(flags());
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/a.png")));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/b.png")));
        assert_eq!(app.file_reads.queued(), 1);

        let _ = app.update(Message::FileLoaded {
            path: PathBuf::from("/tmp/a.png"),
            result: Ok(IncomingFile::new("a.png", "image/png", vec![1])),
        });
        assert_eq!(app.file_reads.queued(), 0);
        assert!(!app.file_reads.is_idle());

        let _ = app.update(Message::FileLoaded {
            path: PathBuf::from("/tmp/b.png"),
            result: Ok(IncomingFile::new("b.png", "image/png", vec![2])),
        });
        assert!(app.file_reads.is_idle());
        assert_eq!(app.controller.selection().map(|s| s.name()), Some("b.png"));
    }

    #[test]
    fn failed_read_still_starts_the_next_queued_file() {
        let mut app = build_app(flags());
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/gone.png")));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/b.png")));

        let _ = app.update(Message::FileLoaded {
            path: PathBuf::from("/tmp/gone.png"),
            result: Err(Error::Io("not found".to_string())),
        });

        assert_eq!(app.file_reads.queued(), 0);
        assert!(!app.file_reads.is_idle());
        assert!(has_notification(&app, "notification-file-read-error"));
    }

    #[test]
    fn hover_events_toggle_drag_affordance() {
        let mut app = build_app(flags());
        let _ = app.update(Message::FileHovered);
        assert!(app.controller.is_drag_over());
        let _ = app.update(Message::FilesHoveredLeft);
        assert!(!app.controller.is_drag_over());
    }

    #[test]
    fn generate_without_selection_warns_and_stays_interactive() {
        let mut app = build_app(flags());
        let _ = app.update(Message::GenerateRequested);

        assert!(has_notification(&app, "notification-no-selection"));
        assert!(app.controller.action().is_enabled());
        assert!(!app.controller.is_progress_visible());
    }

    #[test]
    fn generate_without_resolution_warns() {
        let mut app = build_app(flags());
        stage_png(&mut app);
        for index in 0..app.controller.options().len() {
            let _ = app.update(Message::ResolutionPicker(
                crate::ui::resolution_picker::Message::Toggled(index, false),
            ));
        }
        let _ = app.update(Message::GenerateRequested);

        assert!(has_notification(&app, "notification-no-resolution"));
        assert_eq!(app.controller.in_flight(), None);
    }

    #[test]
    fn successful_generation_renders_results_with_loading_previews() {
        let mut app = build_app(flags());
        stage_png(&mut app);
        let _ = app.update(Message::GenerateRequested);

        assert!(app.controller.phase().is_submitting());
        assert!(app.controller.is_progress_visible());
        let ticket = app.controller.in_flight().expect("request in flight");

        let _ = app.update(Message::GenerationSettled {
            ticket,
            result: Ok(vec![image("1920x1080", "/a.jpg"), image("2560x1440", "/b.jpg")]),
        });

        assert_eq!(app.controller.phase(), Phase::Ready);
        assert!(app.controller.action().is_enabled());
        assert!(!app.controller.is_progress_visible());
        assert_eq!(app.controller.gallery().len(), 2);
        assert_eq!(app.previews.len(), 2);
        assert!(app.previews.iter().all(|p| matches!(p, Preview::Loading)));
    }

    #[test]
    fn failed_generation_shows_generic_error() {
        let mut app = build_app(flags());
        stage_png(&mut app);
        let _ = app.update(Message::GenerateRequested);
        let ticket = app.controller.in_flight().expect("request in flight");

        let _ = app.update(Message::GenerationSettled {
            ticket,
            result: Err(GenerateError::Status(500)),
        });

        assert!(has_notification(&app, "notification-generation-error"));
        assert!(app.controller.action().is_enabled());
        assert!(!app.controller.gallery().is_visible());
    }

    #[test]
    fn successful_generation_dismisses_unreachable_warning() {
        let mut app = build_app(flags());
        let _ = app.update(Message::HealthChecked(Err(GenerateError::Transport(
            "refused".to_string(),
        ))));
        assert!(has_notification(&app, update::SERVICE_UNREACHABLE_KEY));

        stage_png(&mut app);
        let _ = app.update(Message::GenerateRequested);
        let ticket = app.controller.in_flight().expect("request in flight");
        let _ = app.update(Message::GenerationSettled {
            ticket,
            result: Ok(Vec::new()),
        });

        assert!(!has_notification(&app, update::SERVICE_UNREACHABLE_KEY));
    }

    #[test]
    fn preview_for_current_results_updates_slot() {
        let mut app = build_app(flags());
        stage_png(&mut app);
        let _ = app.update(Message::GenerateRequested);
        let ticket = app.controller.in_flight().expect("request in flight");
        let _ = app.update(Message::GenerationSettled {
            ticket,
            result: Ok(vec![image("1920x1080", "/a.jpg")]),
        });

        let _ = app.update(Message::PreviewLoaded {
            ticket,
            index: 0,
            result: Err(GenerateError::Status(404)),
        });
        assert!(matches!(app.previews[0], Preview::Unavailable));
    }

    #[test]
    fn preview_for_replaced_results_is_ignored() {
        let mut app = build_app(flags());
        stage_png(&mut app);
        let _ = app.update(Message::GenerateRequested);
        let first = app.controller.in_flight().expect("first request");
        let _ = app.update(Message::GenerationSettled {
            ticket: first,
            result: Ok(vec![image("1920x1080", "/a.jpg")]),
        });

        let _ = app.update(Message::GenerateRequested);
        let second = app.controller.in_flight().expect("second request");
        let _ = app.update(Message::GenerationSettled {
            ticket: second,
            result: Ok(vec![image("2560x1440", "/b.jpg")]),
        });

        let _ = app.update(Message::PreviewLoaded {
            ticket: first,
            index: 0,
            result: Err(GenerateError::Status(404)),
        });
        assert!(matches!(app.previews[0], Preview::Loading));
    }

    #[test]
    fn invalid_endpoint_fails_generation_with_generic_error() {
        let mut app = build_app(Flags {
            endpoint: Some("not a url".to_string()),
            ..flags()
        });
        assert!(app.client.is_err());

        stage_png(&mut app);
        let _ = app.update(Message::GenerateRequested);
        let ticket = app.controller.in_flight().expect("request in flight");
        let err = app.client.as_ref().expect_err("invalid endpoint").clone();
        let _ = app.update(Message::GenerationSettled {
            ticket,
            result: Err(err),
        });

        assert!(has_notification(&app, "notification-generation-error"));
        assert!(app.controller.action().is_enabled());
    }

    #[test]
    fn tick_advances_spinner_only_while_in_flight() {
        let mut app = build_app(flags());
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.spinner_rotation, 0.0);

        stage_png(&mut app);
        let _ = app.update(Message::GenerateRequested);
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.spinner_rotation > 0.0);
    }

    #[test]
    fn download_results_are_reported() {
        let mut app = build_app(flags());
        let _ = app.update(Message::DownloadCompleted(Ok(PathBuf::from(
            "/tmp/wallpaper_1920x1080.jpg",
        ))));
        assert!(has_notification(&app, "notification-download-success"));

        let _ = app.update(Message::DownloadCompleted(Err(GenerateError::Status(404))));
        assert!(has_notification(&app, "notification-download-error"));
    }

    #[test]
    fn cancelled_download_dialog_does_nothing() {
        let mut app = build_app(flags());
        let _ = app.update(Message::DownloadTargetChosen {
            url: "/a.jpg".to_string(),
            path: None,
        });
        assert!(!app.notifications.has_notifications());
    }
}
