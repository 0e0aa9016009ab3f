// SPDX-License-Identifier: MPL-2.0
//! Image element state machine.
//!
//! Owns the load lifecycle of one slide image. A resolve task is spawned at
//! construction; the element starts in [`ImageStatus::Loading`] and makes at
//! most one transition, to `Success` or `Error`, when the task's completion
//! message arrives. Notification callbacks fire on that transition and never
//! again.

use iced::Task;

use super::props::{Props, RootTag};
use super::status::ImageStatus;
use super::view::{Content, ViewModel};
use crate::context::CarouselContext;
use crate::diagnostics::{
    DiagnosticsHandle, ErrorEvent, ErrorType, LoadOutcome, WarningEvent, WarningType,
};
use crate::error::{Error, Result};
use crate::media::{self, ImageData, Source};
use crate::ui::classes;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// State of one image element.
#[derive(Debug)]
pub struct State {
    props: Props,
    status: ImageStatus,
    image: Option<ImageData>,
    load_error: Option<Error>,
    spinner_rotation: f32,
    diagnostics: DiagnosticsHandle,
}

/// Messages for the image element.
#[derive(Debug, Clone)]
pub enum Message {
    /// The resolve task settled.
    SourceLoaded(Result<ImageData>),
    /// Animate the loading spinner.
    SpinnerTick,
}

/// Effects the element reports back to its host.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The element reached `Success`.
    Loaded,
    /// The element reached `Error`.
    Failed(Error),
}

impl State {
    /// Creates an element from its configuration and spawns the resolve task.
    ///
    /// Construction performs the element's one-shot registrations: the
    /// invalid `bg_image` combination is reported exactly once, and the
    /// shared spinner is subscribed exactly once when requested.
    pub fn new(props: Props, context: &CarouselContext) -> (Self, Task<Message>) {
        if props.is_bg_image && props.tag == RootTag::Image {
            let warning = WarningEvent::new(
                WarningType::InvalidConfiguration,
                "bg_image requires a container root; rendering inline instead",
            )
            .with_source("image");
            eprintln!("warning: {}", warning.message);
            context.diagnostics().log_warning(warning);
        }

        if props.has_master_spinner {
            context.spinner().subscribe();
        }

        if let Ok(source) = Source::parse(&props.src) {
            context.diagnostics().log_load_started(source.kind());
        }

        let task = Task::perform(media::load(props.src.clone()), Message::SourceLoaded);

        let state = Self {
            props,
            status: ImageStatus::Loading,
            image: None,
            load_error: None,
            spinner_rotation: 0.0,
            diagnostics: context.diagnostics().clone(),
        };

        (state, task)
    }

    /// Handles an element message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SourceLoaded(result) => {
                if self.status.is_terminal() {
                    // Late or duplicate completion signals are dropped.
                    return Effect::None;
                }
                match result {
                    Ok(image) => {
                        self.status = ImageStatus::Success;
                        self.image = Some(image);
                        if let Some(on_load) = &self.props.on_load {
                            on_load();
                        }
                        self.diagnostics.log_load_settled(LoadOutcome::Success);
                        Effect::Loaded
                    }
                    Err(error) => {
                        self.status = ImageStatus::Error;
                        self.load_error = Some(error.clone());
                        if let Some(on_error) = &self.props.on_error {
                            on_error();
                        }
                        self.diagnostics.log_load_settled(LoadOutcome::Error);
                        let error_type = match &error {
                            Error::Load(load_error) => ErrorType::from(load_error),
                            _ => ErrorType::Other,
                        };
                        self.diagnostics
                            .log_error(ErrorEvent::new(error_type, error.to_string()));
                        Effect::Failed(error)
                    }
                }
            }
            Message::SpinnerTick => {
                if self.status == ImageStatus::Loading {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// Forces the lifecycle status from a raw literal.
    ///
    /// Embedders that resolve sources themselves use this to inject an
    /// externally determined outcome. The value passes through the same
    /// validation as any other status string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] for anything other than the three
    /// canonical literals; the current status is left untouched.
    pub fn set_status(&mut self, raw: &str) -> Result<()> {
        self.status = raw.parse::<ImageStatus>()?;
        Ok(())
    }

    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> ImageStatus {
        self.status
    }

    /// The decoded image, available once the status is `Success`.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// The failure that put the element in `Error`, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&Error> {
        self.load_error.as_ref()
    }

    /// Current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// True when this element defers to the carousel's shared spinner.
    #[must_use]
    pub fn has_master_spinner(&self) -> bool {
        self.props.has_master_spinner
    }

    /// The source string this element was configured with.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.props.src
    }

    /// Textual description of the image, if configured.
    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        self.props.alt.as_deref()
    }

    /// Derives the render-ready snapshot for the current state.
    ///
    /// Marker classes depend only on the status and the configuration:
    /// `bg_image` is honored on a container root and ignored (after the
    /// construction-time diagnostic) on an inline image root. An element
    /// whose caller handles errors itself carries no default error marker;
    /// in background mode the background marker doubles as the error
    /// presentation.
    #[must_use]
    pub fn view_model(&self) -> ViewModel<'_> {
        let bg_effective = self.props.is_bg_image && self.props.tag == RootTag::Container;

        let mut markers = vec![classes::IMAGE];
        if bg_effective {
            markers.push(classes::WITH_BACKGROUND);
        }
        match self.status {
            ImageStatus::Loading => markers.push(classes::IMAGE_LOADING),
            ImageStatus::Error => {
                if self.props.on_error.is_none() && !bg_effective {
                    markers.push(classes::IMAGE_ERROR);
                }
            }
            ImageStatus::Success => {}
        }

        let content = match self.status {
            ImageStatus::Loading => match &self.props.render_loading {
                Some(render) => Content::LoadingOverride(render),
                None => Content::LoadingPlaceholder {
                    rotation: self.spinner_rotation,
                },
            },
            ImageStatus::Error => match &self.props.render_error {
                Some(render) => Content::ErrorOverride(render),
                None => Content::ErrorPlaceholder,
            },
            ImageStatus::Success => {
                if bg_effective {
                    Content::Background(self.image.as_ref())
                } else {
                    Content::Inline(self.image.as_ref())
                }
            }
        };

        ViewModel {
            markers,
            user_class: self.props.class.as_deref(),
            alt: self.props.alt.as_deref(),
            width: self.props.width,
            height: self.props.height,
            content,
        }
    }
}
