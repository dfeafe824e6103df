// SPDX-License-Identifier: MPL-2.0
use past_forward::app::Gallery;
use past_forward::application::port::{GeneratedImage, GenerationError};
use past_forward::config::{self, Config};
use past_forward::domain::card::{
    select_face, Affordance, Caption, CardIntent, CardState, CardStatus, Face, Transition,
};
use past_forward::i18n::fluent::I18n;
use past_forward::ui::polaroid_card::{CardLabels, FlipAnimation, PolaroidCard, FLIP_DURATION};
use std::time::Instant;
use tempfile::tempdir;

fn labels() -> CardLabels {
    CardLabels::new(&I18n::default())
}

fn presenter<'a>(state: &'a CardState, labels: &'a CardLabels) -> PolaroidCard<'a, CardIntent> {
    PolaroidCard::new(state, labels)
        .on_regenerate(CardIntent::Regenerate)
        .on_download(CardIntent::Download)
        .on_share(CardIntent::Share)
}

#[test]
fn card_lifecycle_flips_only_around_pending() {
    let labels = labels();
    let caption = Caption::new("1970s");
    let t0 = Instant::now();
    let mut state = CardState::pending(caption.clone());
    let mut flip = FlipAnimation::new(state.status(), t0);

    // pending: loading face, no actions
    assert_eq!(select_face(&state), Face::Loading);
    assert!(presenter(&state, &labels).affordances().is_empty());

    // done: image face with all three actions
    let t1 = t0 + FLIP_DURATION * 2;
    state.complete(Some("x".into()));
    assert_eq!(flip.observe(state.status(), t1), Transition::Flip);
    assert_eq!(select_face(&state), Face::Image { url: "x" });
    let shown: Vec<_> = presenter(&state, &labels).affordances().iter().collect();
    assert_eq!(
        shown,
        vec![Affordance::Regenerate, Affordance::Download, Affordance::Share]
    );

    // pending again: the image is hidden
    let t2 = t1 + FLIP_DURATION * 2;
    state.begin_regenerate();
    assert_eq!(flip.observe(state.status(), t2), Transition::Flip);
    assert_eq!(select_face(&state), Face::Loading);
    assert!(presenter(&state, &labels).affordances().is_empty());

    // error: message verbatim and a working retry
    let t3 = t2 + FLIP_DURATION * 2;
    state.fail(Some("network timeout".into()));
    assert_eq!(flip.observe(state.status(), t3), Transition::Flip);
    assert_eq!(
        select_face(&state),
        Face::Error {
            message: Some("network timeout")
        }
    );
    let card = presenter(&state, &labels);
    assert_eq!(card.affordances().len(), 1);
    assert_eq!(
        card.message_for(Affordance::Retry),
        Some(CardIntent::Regenerate(caption.clone()))
    );

    // done -> error swaps faces in place
    let mut swap = FlipAnimation::new(CardStatus::Done, t3);
    assert_eq!(swap.observe(CardStatus::Error, t3), Transition::Swap);
    assert!(!swap.is_animating(t3));
}

#[test]
fn every_callback_receives_the_card_caption() {
    let labels = labels();
    let caption = Caption::new("1980s");
    let states = [
        CardState::done(caption.clone(), Some("memory://a".into())),
        CardState::failed(caption.clone(), None),
    ];

    for state in &states {
        let card = presenter(state, &labels);
        for affordance in card.affordances().iter() {
            let intent = card.message_for(affordance).expect("shown actions emit");
            assert_eq!(intent.caption(), &caption);
        }
    }
}

#[test]
fn image_source_is_stable_across_renders_and_identical_regenerations() {
    let labels = labels();
    let now = Instant::now();
    let mut gallery = Gallery::new();
    let launches = gallery.start([Caption::new("1990s")], now);
    let (caption, attempt) = launches[0].clone();
    assert!(gallery.finish(
        &caption,
        attempt,
        Ok(GeneratedImage::from_bytes(vec![4u8, 5, 6])),
        now,
    ));

    let render = |gallery: &Gallery| {
        let entry = gallery.get(&caption).expect("card exists");
        let mut card = presenter(entry.state(), &labels);
        if let Some(handle) = entry.handle() {
            card = card.image(handle.clone());
        }
        (
            card.affordances(),
            card.image_source().map(|handle| handle.id()),
        )
    };

    let first = render(&gallery);
    let second = render(&gallery);
    assert!(first.1.is_some());
    assert_eq!(first, second);

    // Same bytes again: same content url, same source
    let retry = gallery.begin(&caption, now).expect("card exists");
    assert_eq!(render(&gallery).1, None);
    assert!(gallery.finish(
        &caption,
        retry,
        Ok(GeneratedImage::from_bytes(vec![4u8, 5, 6])),
        now,
    ));
    assert_eq!(render(&gallery), first);

    // Different bytes: a new source
    let next = gallery.begin(&caption, now).expect("card exists");
    assert!(gallery.finish(
        &caption,
        next,
        Ok(GeneratedImage::from_bytes(vec![7u8, 8, 9])),
        now,
    ));
    assert_ne!(render(&gallery).1, first.1);
}

#[test]
fn gallery_drops_results_from_superseded_attempts() {
    let now = Instant::now();
    let mut gallery = Gallery::new();
    let launches = gallery.start([Caption::new("1950s"), Caption::new("1960s")], now);
    let (caption, first) = launches[0].clone();

    let second = gallery.begin(&caption, now).expect("card exists");
    assert!(!gallery.finish(&caption, first, Err(GenerationError::Timeout), now));
    assert!(gallery.finish(
        &caption,
        second,
        Ok(GeneratedImage::from_bytes(vec![1u8])),
        now
    ));

    let entry = gallery.get(&caption).expect("card exists");
    assert_eq!(entry.state().status(), CardStatus::Done);
    assert_eq!(gallery.progress().rounded(), 50);
}

#[test]
fn config_round_trip_and_language_switch() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.generation.endpoint = Some("http://localhost:8080/generate".to_string());
    config.generation.captions = vec!["1920s".into(), "1930s".into()];
    config.display.compact_mode = Some(true);
    let content = toml::to_string_pretty(&config).expect("Failed to serialize config");
    std::fs::write(&path, content).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("card-retry"), "Réessayer");

    let cli_wins = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(cli_wins.current_locale().to_string(), "en-US");
}

#[test]
fn broken_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[generation\nbroken = ")
        .expect("Failed to write broken config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
