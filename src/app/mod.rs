// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the gallery shell.
//!
//! The `App` owns one image element per configured slide plus the
//! carousel-wide services (master spinner, diagnostics collector) and routes
//! messages between them. Policy decisions (window sizing, tick cadence,
//! slide geometry) live close to the update loop so user-facing behavior is
//! easy to audit.

mod view;

use std::f32::consts::TAU;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::{time, window, Element, Subscription, Task, Theme};

use crate::config::{self, GalleryConfig, DEFAULT_DIAGNOSTICS_CAPACITY};
use crate::context::CarouselContext;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::master_spinner::MasterSpinner;
use crate::ui::design_tokens::sizing;
use crate::ui::image::{self, Props, RootTag};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1080;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Milliseconds between animation ticks while any slide is loading.
const TICK_INTERVAL_MS: u64 = 16;

/// Overlay spinner rotation speed in radians per tick.
const OVERLAY_SPINNER_SPEED: f32 = 0.08;

/// Launcher options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Explicit config file instead of the per-user default location.
    pub config_path: Option<PathBuf>,
    /// Render every slide in background-image mode.
    pub bg: bool,
    /// Keep slides off the master spinner even if the config enables it.
    pub no_master_spinner: bool,
    /// Slide sources given on the command line, overriding the config.
    pub sources: Vec<String>,
}

/// Root Iced application state for the gallery.
pub struct App {
    slides: Vec<image::State>,
    master: Arc<MasterSpinner>,
    collector: DiagnosticsCollector,
    overlay_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slides", &self.slides.len())
            .field("pending", &self.master.pending())
            .finish()
    }
}

/// Builds the window settings for the gallery shell.
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

    // Wrap flags in RefCell<Option<_>> so the boot closure satisfies the
    // Fn bound while still consuming the flags exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Messages handled by the gallery shell.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the slide at the given index.
    Slide(usize, image::Message),
    /// Periodic animation tick while any slide is loading.
    Tick(Instant),
}

impl App {
    /// Initializes the gallery from launcher flags and spawns one resolve
    /// task per configured slide.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_else(|error| {
                eprintln!("failed to load {}: {error}", path.display());
                GalleryConfig::default()
            }),
            None => config::load().unwrap_or_default(),
        };

        let sources = if flags.sources.is_empty() {
            config.sources.clone()
        } else {
            flags.sources
        };

        let capacity = BufferCapacity::new(
            config
                .diagnostics_capacity
                .unwrap_or(DEFAULT_DIAGNOSTICS_CAPACITY),
        );
        let collector = DiagnosticsCollector::new(capacity);
        let master = Arc::new(MasterSpinner::new());
        let context = CarouselContext::new(master.clone(), collector.handle());

        let use_master = !flags.no_master_spinner && config.master_spinner.unwrap_or(true);
        let bg_slides = flags.bg || config.bg_slides.unwrap_or(false);

        let mut slides = Vec::with_capacity(sources.len());
        let mut tasks = Vec::with_capacity(sources.len());
        for (index, src) in sources.iter().enumerate() {
            let mut props = Props::new(src)
                .master_spinner(use_master)
                .width(sizing::SLIDE_WIDTH)
                .height(sizing::SLIDE_HEIGHT);
            if bg_slides {
                props = props.tag(RootTag::Container).bg_image(true);
            }

            let (slide, task) = image::State::new(props, &context);
            slides.push(slide);
            tasks.push(task.map(move |message| Message::Slide(index, message)));
        }

        let app = App {
            slides,
            master,
            collector,
            overlay_rotation: 0.0,
        };

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let total = self.slides.len();
        let settled = self
            .slides
            .iter()
            .filter(|slide| slide.status().is_terminal())
            .count();

        if settled < total {
            format!("Iced Carousel ({settled}/{total} loaded)")
        } else {
            "Iced Carousel".to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let any_loading = self
            .slides
            .iter()
            .any(|slide| slide.status() == image::ImageStatus::Loading);

        if any_loading {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Slide(index, slide_message) => {
                if let Some(slide) = self.slides.get_mut(index) {
                    let effect = slide.handle(slide_message);
                    self.apply_slide_effect(index, effect);
                }
            }
            Message::Tick(_instant) => {
                for slide in &mut self.slides {
                    let _ = slide.handle(image::Message::SpinnerTick);
                }
                self.overlay_rotation += OVERLAY_SPINNER_SPEED;
                if self.overlay_rotation > TAU {
                    self.overlay_rotation -= TAU;
                }
            }
        }

        // Drain whatever diagnostics this message produced.
        self.collector.process_pending();
        Task::none()
    }

    fn apply_slide_effect(&mut self, index: usize, effect: image::Effect) {
        match effect {
            image::Effect::None => {}
            image::Effect::Loaded => self.settle_master(index),
            image::Effect::Failed(error) => {
                eprintln!("slide {index} failed to load: {error}");
                self.settle_master(index);
            }
        }
    }

    /// Reports one settled slide to the master spinner, if it subscribed.
    fn settle_master(&mut self, index: usize) {
        if self
            .slides
            .get(index)
            .is_some_and(image::State::has_master_spinner)
        {
            self.master.mark_settled();
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            slides: &self.slides,
            master_spinning: self.master.is_spinning(),
            overlay_rotation: self.overlay_rotation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::media::ImageData;
    use crate::ui::classes;
    use crate::ui::image::ImageStatus;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn sample_image() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255_u8; 4])
    }

    fn demo_flags() -> Flags {
        Flags {
            sources: vec!["a.png".to_string(), "b.png".to_string()],
            ..Flags::default()
        }
    }

    #[test]
    fn new_builds_one_slide_per_source() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(demo_flags());

            assert_eq!(app.slides.len(), 2);
            assert!(app
                .slides
                .iter()
                .all(|slide| slide.status() == ImageStatus::Loading));
            assert_eq!(app.master.pending(), 2);
        });
    }

    #[test]
    fn slide_settlement_drains_the_master_spinner() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(demo_flags());

            let _ = app.update(Message::Slide(
                0,
                image::Message::SourceLoaded(Ok(sample_image())),
            ));
            assert_eq!(app.master.pending(), 1);
            assert!(app.master.is_spinning());

            let _ = app.update(Message::Slide(
                1,
                image::Message::SourceLoaded(Err(LoadError::EmptySource.into())),
            ));
            assert_eq!(app.master.pending(), 0);
            assert!(!app.master.is_spinning());
        });
    }

    #[test]
    fn messages_for_unknown_slides_are_ignored() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(demo_flags());

            let _ = app.update(Message::Slide(
                99,
                image::Message::SourceLoaded(Ok(sample_image())),
            ));

            assert_eq!(app.master.pending(), 2);
        });
    }

    #[test]
    fn tick_advances_spinners_while_loading() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(demo_flags());

            let _ = app.update(Message::Tick(Instant::now()));

            assert!(app.slides[0].spinner_rotation() > 0.0);
            assert!(app.overlay_rotation > 0.0);
        });
    }

    #[test]
    fn config_file_supplies_sources_when_flags_are_empty() {
        with_temp_config_dir(|_| {
            let temp_dir = tempdir().expect("failed to create temp dir");
            let config_path = temp_dir.path().join("gallery.toml");
            fs::write(&config_path, "sources = [\"x.png\"]\nmaster_spinner = false\n")
                .expect("failed to write config");

            let (app, _task) = App::new(Flags {
                config_path: Some(config_path),
                ..Flags::default()
            });

            assert_eq!(app.slides.len(), 1);
            assert_eq!(app.master.pending(), 0);
        });
    }

    #[test]
    fn unreadable_config_falls_back_to_defaults() {
        with_temp_config_dir(|_| {
            let temp_dir = tempdir().expect("failed to create temp dir");
            let config_path = temp_dir.path().join("gallery.toml");
            fs::write(&config_path, "not = valid = toml").expect("failed to write config");

            let (app, _task) = App::new(Flags {
                config_path: Some(config_path),
                ..Flags::default()
            });

            assert!(app.slides.is_empty());
        });
    }

    #[test]
    fn cli_switches_override_the_config() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                bg: true,
                no_master_spinner: true,
                ..demo_flags()
            });

            assert_eq!(app.master.pending(), 0);
            assert!(app
                .slides
                .iter()
                .all(|slide| slide.view_model().has_marker(classes::WITH_BACKGROUND)));
        });
    }

    #[test]
    fn settled_loads_reach_the_collector() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(demo_flags());

            let _ = app.update(Message::Slide(
                0,
                image::Message::SourceLoaded(Ok(sample_image())),
            ));
            let _ = app.update(Message::Slide(
                1,
                image::Message::SourceLoaded(Ok(sample_image())),
            ));

            // Two load starts plus two settlements.
            assert_eq!(app.collector.len(), 4);
        });
    }

    #[test]
    fn title_reports_loading_progress() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(demo_flags());
            assert_eq!(app.title(), "Iced Carousel (0/2 loaded)");

            let _ = app.update(Message::Slide(
                0,
                image::Message::SourceLoaded(Ok(sample_image())),
            ));
            let _ = app.update(Message::Slide(
                1,
                image::Message::SourceLoaded(Ok(sample_image())),
            ));

            assert_eq!(app.title(), "Iced Carousel");
        });
    }
}
