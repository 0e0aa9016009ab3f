// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests exercising the carousel through its public API: element
//! lifecycle, marker classes, spinner coordination, diagnostics export, and
//! the config-to-slides path an embedder follows.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use iced_carousel::config::{self, GalleryConfig};
use iced_carousel::context::CarouselContext;
use iced_carousel::diagnostics::{
    BufferCapacity, DiagnosticEventKind, DiagnosticsCollector, DiagnosticsHandle, ErrorType,
    LoadOutcome,
};
use iced_carousel::error::{Error, LoadError};
use iced_carousel::master_spinner::MasterSpinner;
use iced_carousel::media::ImageData;
use iced_carousel::ui::classes;
use iced_carousel::ui::image::{self, Content, ImageStatus, Props, RootTag};
use tempfile::tempdir;

fn sample_image() -> ImageData {
    ImageData::from_rgba(2, 2, vec![128_u8; 16])
}

#[test]
fn successful_lifecycle_settles_element_and_master_spinner() {
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let master = Arc::new(MasterSpinner::new());
    let context = CarouselContext::new(master.clone(), collector.handle());

    let props = Props::new("slides/dawn.png")
        .master_spinner(true)
        .alt("Dawn over the bay");
    let (mut element, _task) = image::State::new(props, &context);

    assert_eq!(element.status(), ImageStatus::Loading);
    assert_eq!(master.pending(), 1);
    assert!(master.is_spinning());

    let effect = element.handle(image::Message::SourceLoaded(Ok(sample_image())));

    assert!(matches!(effect, image::Effect::Loaded));
    assert_eq!(element.status(), ImageStatus::Success);
    assert!(element.image().is_some());

    // The embedder reacts to the effect by settling its coordinator.
    master.mark_settled();
    assert!(!master.is_spinning());

    collector.process_pending();
    let kinds: Vec<_> = collector.iter().map(|event| &event.kind).collect();
    assert_eq!(kinds.len(), 2);
    assert!(matches!(kinds[0], DiagnosticEventKind::LoadStarted { .. }));
    assert!(matches!(
        kinds[1],
        DiagnosticEventKind::LoadSettled {
            outcome: LoadOutcome::Success
        }
    ));
}

#[test]
fn failed_lifecycle_records_a_categorized_error_event() {
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let context = CarouselContext::new(Arc::new(MasterSpinner::new()), collector.handle());

    let (mut element, _task) = image::State::new(Props::new("slides/broken.png"), &context);
    let failure = Error::Load(LoadError::Decode("bad magic".to_string()));

    let effect = element.handle(image::Message::SourceLoaded(Err(failure)));

    assert!(matches!(effect, image::Effect::Failed(_)));
    assert_eq!(element.status(), ImageStatus::Error);
    assert!(element.load_error().is_some());

    collector.process_pending();
    let error_event = collector
        .iter()
        .find_map(|event| match &event.kind {
            DiagnosticEventKind::Error { event } => Some(event),
            _ => None,
        })
        .expect("a decode failure should produce an error event");
    assert_eq!(error_event.error_type, ErrorType::DecodeError);
    assert!(error_event.message.contains("bad magic"));
}

#[test]
fn marker_classes_track_lifecycle_and_configuration() {
    let context = CarouselContext::default();

    // A plain element advertises the loading state.
    let (loading, _task) = image::State::new(Props::new("a.png"), &context);
    let model = loading.view_model();
    assert!(model.has_marker(classes::IMAGE));
    assert!(model.has_marker(classes::IMAGE_LOADING));
    assert_eq!(
        model.class_string(),
        "carousel__image carousel__image--loading"
    );

    // A failed background slide reuses the background marker as its error
    // marker instead of the dedicated one.
    let props = Props::new("b.png").tag(RootTag::Container).bg_image(true);
    let (mut background, _task) = image::State::new(props, &context);
    let _ = background.handle(image::Message::SourceLoaded(Err(
        LoadError::EmptySource.into(),
    )));
    let model = background.view_model();
    assert!(model.has_marker(classes::WITH_BACKGROUND));
    assert!(!model.has_marker(classes::IMAGE_ERROR));

    // A failed slide with an error callback suppresses the error marker.
    let (mut handled, _task) = image::State::new(Props::new("c.png").on_error(|| {}), &context);
    let _ = handled.handle(image::Message::SourceLoaded(Err(
        LoadError::EmptySource.into(),
    )));
    let model = handled.view_model();
    assert!(!model.has_marker(classes::IMAGE_ERROR));
    assert_eq!(model.class_string(), "carousel__image");
}

#[test]
fn caller_class_is_appended_after_markers() {
    let context = CarouselContext::default();
    let (element, _task) = image::State::new(Props::new("a.png").class("hero"), &context);

    assert_eq!(
        element.view_model().class_string(),
        "carousel__image carousel__image--loading hero"
    );
}

#[test]
fn status_is_validated_at_the_string_boundary() {
    let context = CarouselContext::default();
    let (mut element, _task) = image::State::new(Props::new("a.png"), &context);

    element
        .set_status("error")
        .expect("canonical literal should be accepted");
    assert_eq!(element.status(), ImageStatus::Error);

    let rejected = element.set_status("flying");
    assert!(matches!(rejected, Err(Error::InvalidState(_))));
    assert_eq!(element.status(), ImageStatus::Error);
}

#[test]
fn master_spinner_tracks_only_subscribed_elements() {
    let master = Arc::new(MasterSpinner::new());
    let context = CarouselContext::new(master.clone(), DiagnosticsHandle::detached());

    let (_a, _task_a) = image::State::new(Props::new("a.png").master_spinner(true), &context);
    let (_b, _task_b) = image::State::new(Props::new("b.png").master_spinner(true), &context);
    let (_c, _task_c) = image::State::new(Props::new("c.png"), &context);

    assert_eq!(master.pending(), 2);

    master.mark_settled();
    master.mark_settled();
    assert!(!master.is_spinning());

    // Settling more slides than subscribed must not underflow.
    master.mark_settled();
    assert_eq!(master.pending(), 0);
}

#[test]
fn render_overrides_replace_default_markup_only() {
    let context = CarouselContext::default();
    let invocations = Rc::new(Cell::new(0_u32));
    let seen = invocations.clone();

    let props = Props::new("a.png").render_loading(move || {
        seen.set(seen.get() + 1);
        iced::widget::Text::new("custom loading").into()
    });
    let (element, _task) = image::State::new(props, &context);

    let model = element.view_model();
    assert!(matches!(model.content, Content::LoadingOverride(_)));
    // Markers are unaffected by the override.
    assert!(model.has_marker(classes::IMAGE_LOADING));

    let _rendered = image::view(model);
    assert_eq!(invocations.get(), 1);
}

#[test]
fn config_driven_slides_render_background_content() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let config_path = temp_dir.path().join("gallery.toml");

    let written = GalleryConfig {
        sources: vec!["hall/panorama.png".to_string()],
        master_spinner: Some(false),
        bg_slides: Some(true),
        diagnostics_capacity: None,
    };
    config::save_to_path(&written, &config_path).expect("failed to save config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");

    let context = CarouselContext::default();
    let mut slides = Vec::new();
    for src in &loaded.sources {
        let mut props = Props::new(src);
        if loaded.bg_slides.unwrap_or(false) {
            props = props.tag(RootTag::Container).bg_image(true);
        }
        let (slide, _task) = image::State::new(props, &context);
        slides.push(slide);
    }

    let slide = &mut slides[0];
    let _ = slide.handle(image::Message::SourceLoaded(Ok(sample_image())));

    let model = slide.view_model();
    assert!(model.has_marker(classes::WITH_BACKGROUND));
    assert!(matches!(model.content, Content::Background(Some(_))));
}

#[test]
fn diagnostics_export_is_machine_readable() {
    let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
    let context = CarouselContext::new(Arc::new(MasterSpinner::new()), collector.handle());

    let (mut element, _task) = image::State::new(Props::new("a.png"), &context);
    let _ = element.handle(image::Message::SourceLoaded(Ok(sample_image())));
    collector.process_pending();

    let json = collector.export_json().expect("failed to export diagnostics");
    let parsed: serde_json::Value =
        serde_json::from_str(&json).expect("export should be valid JSON");

    let events = parsed.as_array().expect("export should be a JSON array");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["type"], "load_started");
    assert_eq!(events[1]["type"], "load_settled");
    assert!(events[0]["timestamp_ms"].is_u64());
}
