// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Card actions arrive here as [`CardIntent`]s. Regeneration and downloads
//! become Iced tasks whose results come back as messages; sharing is
//! synchronous and ends in a clipboard write plus a toast.

use super::gallery::{Attempt, Gallery};
use super::Message;
use crate::application::port::{
    share_with_fallback, GeneratedImage, GenerationError, GenerationRequest, ImageGenerator, ShareOutcome,
    SharePayload,
};
use crate::config::Config;
use crate::domain::card::{Caption, CardIntent};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{browser, download};
use crate::ui::notifications::{self, Notification};
use iced::{Size, Task};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Key prefix of toasts tied to a generation run.
const GENERATION_NOTIFICATION_PREFIX: &str = "notification-generation";

/// Mutable view over the application state needed by the update loop.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub gallery: &'a mut Gallery,
    pub generator: &'a Arc<dyn ImageGenerator>,
    pub notifications: &'a mut notifications::Manager,
    pub window_size: &'a mut Option<Size>,
}

/// Routes a message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Start => handle_start(ctx, now),
        Message::Reset => {
            ctx.gallery.clear();
            ctx.notifications.clear_prefixed(GENERATION_NOTIFICATION_PREFIX);
            Task::none()
        }
        Message::GenerationFinished {
            caption,
            attempt,
            result,
        } => handle_generation_finished(ctx, &caption, attempt, result, now),
        Message::Intent(intent) => handle_intent(ctx, intent, now),
        Message::SaveTargetChosen {
            caption,
            bytes,
            path,
        } => handle_save_target(caption, bytes, path),
        Message::DownloadFinished { caption, result } => {
            handle_download_finished(ctx, &caption, result);
            Task::none()
        }
        Message::ShareWebsite => {
            let payload = SharePayload {
                title: ctx.i18n.tr("app-title"),
                text: ctx.i18n.tr("app-tagline"),
                url: ctx.config.share.site_url.clone(),
            };
            share(ctx, &payload)
        }
        Message::OpenSite => {
            let url = ctx.config.share.site_url.clone();
            tracing::debug!(url = %url, "opening site");
            Task::perform(
                async move { browser::open_url(&url).map_err(|e| e.to_string()) },
                Message::SiteOpened,
            )
        }
        Message::SiteOpened(result) => {
            if let Err(err) = result {
                tracing::warn!(url = %ctx.config.share.site_url, error = %err, "could not open site");
                ctx.notifications.push(
                    Notification::warning("notification-open-site-failed")
                        .with_arg("site", ctx.config.share.site_label.clone())
                        .with_detail(err),
                );
            }
            Task::none()
        }
        Message::Notification(notification_message) => {
            ctx.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::WindowResized(size) => {
            *ctx.window_size = Some(size);
            Task::none()
        }
        Message::Tick(instant) => {
            ctx.notifications.tick(instant);
            Task::none()
        }
    }
}

fn handle_start(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.clear_prefixed(GENERATION_NOTIFICATION_PREFIX);

    let captions = ctx
        .config
        .generation
        .effective_captions()
        .into_iter()
        .map(Caption::new);
    let launches = ctx.gallery.start(captions, now);
    tracing::info!(cards = launches.len(), "starting generation run");

    let ctx: &UpdateContext<'_> = ctx;
    Task::batch(
        launches
            .into_iter()
            .map(|(caption, attempt)| generate(ctx, caption, attempt)),
    )
}

fn handle_intent(ctx: &mut UpdateContext<'_>, intent: CardIntent, now: Instant) -> Task<Message> {
    match intent {
        CardIntent::Regenerate(caption) => match ctx.gallery.begin(&caption, now) {
            Some(attempt) => generate(ctx, caption, attempt),
            None => {
                tracing::warn!(caption = %caption, "regenerate requested for unknown card");
                Task::none()
            }
        },
        CardIntent::Download(caption) => {
            let Some((file_name, bytes)) = download_snapshot(ctx.gallery, &caption) else {
                tracing::warn!(caption = %caption, "download requested without an image");
                return Task::none();
            };
            Task::perform(download::choose_target(file_name), move |path| {
                Message::SaveTargetChosen {
                    caption,
                    bytes,
                    path,
                }
            })
        }
        CardIntent::Share(caption) => {
            let payload = card_share_payload(ctx.i18n, ctx.config, &caption);
            share(ctx, &payload)
        }
    }
}

fn card_share_payload(i18n: &I18n, config: &Config, caption: &Caption) -> SharePayload {
    SharePayload {
        title: i18n.tr("app-title"),
        text: i18n.tr_with_args("card-share-text", &[("caption", caption.as_str())]),
        url: config.share.site_url.clone(),
    }
}

fn generate(ctx: &UpdateContext<'_>, caption: Caption, attempt: Attempt) -> Task<Message> {
    let request =
        GenerationRequest::from_template(caption.clone(), &ctx.config.generation.prompt_template);
    tracing::debug!(caption = %caption, attempt, "generation launched");

    Task::perform(ctx.generator.generate(request), move |result| {
        Message::GenerationFinished {
            caption,
            attempt,
            result,
        }
    })
}

fn handle_generation_finished(
    ctx: &mut UpdateContext<'_>,
    caption: &Caption,
    attempt: Attempt,
    result: Result<GeneratedImage, GenerationError>,
    now: Instant,
) -> Task<Message> {
    let not_configured = matches!(result, Err(GenerationError::NotConfigured));
    let outcome = match &result {
        Ok(image) => Ok(image.url().to_string()),
        Err(err) => Err(err.to_string()),
    };

    if !ctx.gallery.finish(caption, attempt, result, now) {
        tracing::debug!(caption = %caption, attempt, "dropping superseded generation result");
        return Task::none();
    }

    match outcome {
        Ok(url) => tracing::info!(caption = %caption, attempt, url = %url, "generation finished"),
        Err(error) => tracing::warn!(caption = %caption, attempt, error = %error, "generation failed"),
    }

    if not_configured {
        // One toast per run, not one per card.
        ctx.notifications
            .clear_prefixed("notification-generation-not-configured");
        ctx.notifications.push(Notification::warning(
            "notification-generation-not-configured",
        ));
    }

    Task::none()
}

/// File name and bytes to save, taken when Download is pressed so a later
/// regenerate cannot change what gets written.
fn download_snapshot(gallery: &Gallery, caption: &Caption) -> Option<(String, Arc<[u8]>)> {
    let image = gallery.get(caption)?.image()?;
    let bytes = Arc::clone(image.bytes());
    Some((download::suggested_file_name(caption, &bytes), bytes))
}

fn handle_save_target(caption: Caption, bytes: Arc<[u8]>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        tracing::debug!(caption = %caption, "download cancelled");
        return Task::none();
    };

    Task::perform(
        async move { download::write_image(&path, &bytes).map_err(|e| e.to_string()) },
        move |result| Message::DownloadFinished { caption, result },
    )
}

fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    caption: &Caption,
    result: Result<PathBuf, String>,
) {
    match result {
        Ok(path) => {
            tracing::info!(caption = %caption, path = %path.display(), "image saved");
            ctx.notifications.push(
                Notification::success("notification-download-success")
                    .with_arg("caption", caption.as_str())
                    .with_detail(path.display().to_string()),
            );
        }
        Err(err) => {
            tracing::warn!(caption = %caption, error = %err, "image download failed");
            ctx.notifications.push(
                Notification::error("notification-download-failed")
                    .with_arg("caption", caption.as_str())
                    .with_detail(err),
            );
        }
    }
}

/// Shares through the platform sheet, falling back to the clipboard.
///
/// Desktop targets have no native sheet, so the clipboard path is taken and
/// the user is told right away.
fn share(ctx: &mut UpdateContext<'_>, payload: &SharePayload) -> Task<Message> {
    match share_with_fallback(None, payload) {
        ShareOutcome::Shared => Task::none(),
        ShareOutcome::CopyToClipboard(text) => {
            ctx.notifications
                .push(Notification::info("notification-share-fallback"));
            iced::clipboard::write(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::GenerationFuture;
    use crate::domain::card::CardStatus;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct NullGenerator;

    impl ImageGenerator for NullGenerator {
        fn generate(&self, _request: GenerationRequest) -> GenerationFuture {
            Box::pin(async { Err(GenerationError::NotConfigured) })
        }
    }

    struct Harness {
        i18n: I18n,
        config: Config,
        gallery: Gallery,
        generator: Arc<dyn ImageGenerator>,
        notifications: notifications::Manager,
        window_size: Option<Size>,
    }

    impl Harness {
        fn new() -> Self {
            let mut config = Config::default();
            config.generation.captions = vec!["1950s".into(), "1960s".into()];
            Self {
                i18n: I18n::default(),
                config,
                gallery: Gallery::new(),
                generator: Arc::new(NullGenerator),
                notifications: notifications::Manager::new(),
                window_size: None,
            }
        }

        fn send(&mut self, message: Message) -> Task<Message> {
            let mut ctx = UpdateContext {
                i18n: &self.i18n,
                config: &self.config,
                gallery: &mut self.gallery,
                generator: &self.generator,
                notifications: &mut self.notifications,
                window_size: &mut self.window_size,
            };
            update(&mut ctx, message, Instant::now())
        }
    }

    #[test]
    fn start_creates_pending_cards_for_configured_captions() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::Start);

        assert_eq!(harness.gallery.len(), 2);
        assert!(harness
            .gallery
            .cards()
            .all(|entry| entry.state().status() == CardStatus::Pending));
    }

    #[test]
    fn not_configured_result_fails_card_and_warns_once() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::Start);

        for caption in ["1950s", "1960s"] {
            let _ = harness.send(Message::GenerationFinished {
                caption: Caption::new(caption),
                attempt: 1,
                result: Err(GenerationError::NotConfigured),
            });
        }

        assert!(harness
            .gallery
            .cards()
            .all(|entry| entry.state().status() == CardStatus::Error));
        assert_eq!(harness.notifications.visible_count(), 1);
    }

    #[test]
    fn regenerate_intent_bumps_attempt() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::Start);
        let caption = Caption::new("1950s");
        let _ = harness.send(Message::GenerationFinished {
            caption: caption.clone(),
            attempt: 1,
            result: Ok(GeneratedImage::from_bytes(vec![1u8, 2])),
        });

        let _ = harness.send(Message::Intent(CardIntent::Regenerate(caption.clone())));
        let entry = harness.gallery.get(&caption).expect("card exists");
        assert_eq!(entry.attempt(), 2);
        assert_eq!(entry.state().status(), CardStatus::Pending);
    }

    #[test]
    fn superseded_result_is_not_logged_as_finished() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::Start);
        let caption = Caption::new("1950s");
        let _ = harness.send(Message::Intent(CardIntent::Regenerate(caption.clone())));

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _ = harness.send(Message::GenerationFinished {
                caption: caption.clone(),
                attempt: 1,
                result: Ok(GeneratedImage::from_bytes(vec![1u8])),
            });
        });

        let output = logs.contents();
        assert!(output.contains("dropping superseded generation result"));
        assert!(!output.contains("generation finished"));
        assert_eq!(
            harness.gallery.get(&caption).map(|e| e.state().status()),
            Some(CardStatus::Pending)
        );
    }

    #[test]
    fn share_shows_fallback_toast() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::ShareWebsite);
        assert_eq!(harness.notifications.visible_count(), 1);
        assert_eq!(
            harness.notifications.visible().next().map(Notification::message_key),
            Some("notification-share-fallback")
        );
    }

    #[test]
    fn card_share_copies_caption_text_and_link() {
        let harness = Harness::new();
        let payload = card_share_payload(&harness.i18n, &harness.config, &Caption::new("1950s"));
        let copied = payload.clipboard_text();

        assert!(copied.contains("1950s"));
        assert!(copied.ends_with(&harness.config.share.site_url));
    }

    #[test]
    fn download_result_is_reported_with_caption() {
        let mut harness = Harness::new();
        let caption = Caption::new("1950s");
        let _ = harness.send(Message::DownloadFinished {
            caption: caption.clone(),
            result: Err("disk full".into()),
        });
        let _ = harness.send(Message::DownloadFinished {
            caption,
            result: Ok(PathBuf::from("/tmp/card.png")),
        });

        assert_eq!(harness.notifications.visible_count(), 2);
        for notification in harness.notifications.visible() {
            assert_eq!(
                notification.message_args(),
                &[("caption".to_string(), "1950s".to_string())]
            );
        }
    }

    #[test]
    fn download_snapshot_survives_a_later_regenerate() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::Start);
        let caption = Caption::new("1950s");
        let _ = harness.send(Message::GenerationFinished {
            caption: caption.clone(),
            attempt: 1,
            result: Ok(GeneratedImage::from_bytes(vec![1u8, 2, 3])),
        });

        let (file_name, bytes) =
            download_snapshot(&harness.gallery, &caption).expect("image present");
        assert!(file_name.starts_with("past-forward-1950s."));

        // A regenerate lands while the save dialog is open.
        let _ = harness.send(Message::Intent(CardIntent::Regenerate(caption.clone())));
        let _ = harness.send(Message::GenerationFinished {
            caption: caption.clone(),
            attempt: 2,
            result: Ok(GeneratedImage::from_bytes(vec![9u8, 9, 9])),
        });

        assert_eq!(&bytes[..], &[1u8, 2, 3]);
        let (_, latest) = download_snapshot(&harness.gallery, &caption).expect("image present");
        assert_eq!(&latest[..], &[9u8, 9, 9]);
    }

    #[test]
    fn download_snapshot_needs_an_image() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::Start);
        assert!(download_snapshot(&harness.gallery, &Caption::new("1950s")).is_none());
        assert!(download_snapshot(&harness.gallery, &Caption::new("2050s")).is_none());
    }

    #[test]
    fn failed_site_open_warns_with_site_label() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::SiteOpened(Ok(())));
        assert_eq!(harness.notifications.visible_count(), 0);

        let _ = harness.send(Message::SiteOpened(Err("no browser".into())));
        let notification = harness.notifications.visible().next().expect("warning shown");
        assert_eq!(notification.message_key(), "notification-open-site-failed");
        assert_eq!(notification.detail(), Some("no browser"));
    }

    #[test]
    fn reset_clears_cards() {
        let mut harness = Harness::new();
        let _ = harness.send(Message::Start);
        let _ = harness.send(Message::Reset);
        assert!(harness.gallery.is_empty());
    }
}
