//! End-to-end tests of the load-new-fact invocation with mocked network.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use factcard_core::{
    BackgroundOpacity, CardKind, DisplayOrder, DisplayPolicy, RevealStrategy, Timeouts,
    TranslationResult,
};
use factcard_fetch::{
    FactResolver, FactSource, FetchContext, FetchError, ImageApi, LoadedImage, TranslateApi,
};
use factcard_providers::local_fallback_pool;
use factcard_store::{KeyValueStore, MemoryStore, QuotaTracker, StoreError};
use factcard_widget::{CardRecorder, FactWidget, PresenterEvent, WidgetState};

// ============================================================================
// Mocks
// ============================================================================

struct MockSource {
    text: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl FactSource for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, _ctx: &FetchContext) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text
            .map(str::to_string)
            .ok_or_else(|| FetchError::ProviderUnavailable {
                source_id: "mock".to_string(),
                reason: "HTTP 503".to_string(),
            })
    }
}

struct HangingSource;

#[async_trait]
impl FactSource for HangingSource {
    fn id(&self) -> &str {
        "hanging"
    }

    async fn fetch(&self, _ctx: &FetchContext) -> Result<String, FetchError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("never".to_string())
    }
}

struct MockTranslator {
    reply: &'static str,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TranslateApi for MockTranslator {
    async fn translate(&self, _text: &str) -> TranslationResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.reply.to_string()
    }
}

struct MockImages {
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ImageApi for MockImages {
    async fn load(&self, url: &str) -> Result<LoadedImage, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(LoadedImage {
            url: url.to_string(),
            width: 1080,
            height: 1920,
            byte_len: 1,
        })
    }
}

struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Config("store offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Config("store offline".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Config("store offline".to_string()))
    }
}

// ============================================================================
// Harness
// ============================================================================

#[derive(Default)]
struct Calls {
    source: Arc<AtomicUsize>,
    translate: Arc<AtomicUsize>,
    image: Arc<AtomicUsize>,
}

impl Calls {
    fn total(&self) -> usize {
        self.source.load(Ordering::SeqCst)
            + self.translate.load(Ordering::SeqCst)
            + self.image.load(Ordering::SeqCst)
    }
}

struct Setup {
    fact: Option<&'static str>,
    hanging_before: usize,
    translation: &'static str,
    translate_delay: Duration,
    image_delay: Duration,
    limit: u32,
    policy: DisplayPolicy,
    store: Arc<dyn KeyValueStore>,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            fact: Some("Cats purr."),
            hanging_before: 0,
            translation: "Los gatos ronronean.",
            translate_delay: Duration::ZERO,
            image_delay: Duration::ZERO,
            limit: 10,
            policy: DisplayPolicy::default(),
            store: Arc::new(MemoryStore::new()),
        }
    }
}

fn build(setup: Setup) -> (FactWidget, Calls) {
    let calls = Calls::default();

    let source = MockSource {
        text: setup.fact,
        calls: Arc::clone(&calls.source),
    };
    let mut sources: Vec<Box<dyn FactSource>> = Vec::new();
    for _ in 0..setup.hanging_before {
        sources.push(Box::new(HangingSource));
    }
    sources.push(Box::new(source));
    let resolver = FactResolver::with_sources(sources, local_fallback_pool().unwrap());
    let quota = QuotaTracker::new(setup.store, setup.limit);

    let widget = FactWidget::new(resolver, quota, FetchContext::new(), setup.policy)
        .with_translator(Arc::new(MockTranslator {
            reply: setup.translation,
            delay: setup.translate_delay,
            calls: Arc::clone(&calls.translate),
        }))
        .with_image_api(Arc::new(MockImages {
            delay: setup.image_delay,
            calls: Arc::clone(&calls.image),
        }));

    (widget, calls)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn eleventh_invocation_is_gated_without_network() {
    let (mut widget, calls) = build(Setup::default());
    let mut presenter = CardRecorder::new();

    for n in 1..=10 {
        let outcome = widget.load_new_fact(&mut presenter).await;
        assert!(!outcome.is_gated(), "invocation {n} should be shown");
    }
    let before = calls.total();
    assert_eq!(calls.source.load(Ordering::SeqCst), 10);

    let outcome = widget.load_new_fact(&mut presenter).await;

    assert!(outcome.is_gated());
    assert_eq!(outcome.card().kind, CardKind::LimitReached);
    assert_eq!(presenter.primary(), "Vuelve mañana por más datos gatunos 🐱");
    assert_eq!(presenter.secondary(), "Come back tomorrow for more cat facts 🐱");
    assert!(!presenter.trigger_enabled());
    assert_eq!(widget.state(), WidgetState::Gated);
    assert_eq!(calls.total(), before, "gated invocation must not touch the network");
    assert_eq!(widget.quota().status().await.unwrap().count, 10);
}

#[tokio::test]
async fn success_puts_translation_first() {
    let (mut widget, calls) = build(Setup::default());
    let mut presenter = CardRecorder::new();

    let outcome = widget.load_new_fact(&mut presenter).await;
    let card = outcome.card();

    assert_eq!(card.kind, CardKind::Fetched);
    assert_eq!(card.primary, "Los gatos ronronean.");
    assert_eq!(card.secondary, "Cats purr.");
    assert_eq!(card.source.as_deref(), Some("mock"));
    assert_eq!(presenter.kind(), Some(CardKind::Fetched));
    assert_eq!(
        card.background.as_ref().map(|b| b.opacity),
        Some(BackgroundOpacity::Full)
    );
    assert_eq!(calls.translate.load(Ordering::SeqCst), 1);
    assert_eq!(widget.state(), WidgetState::Revealed);

    let events = presenter.events();
    assert_eq!(events.first(), Some(&PresenterEvent::Trigger { enabled: false }));
    assert_eq!(events.last(), Some(&PresenterEvent::Trigger { enabled: true }));
    assert!(presenter.is_revealed());
    assert!(!presenter.is_loading());
}

#[tokio::test]
async fn original_first_policy_swaps_slots() {
    let (mut widget, _) = build(Setup {
        policy: DisplayPolicy::default().with_order(DisplayOrder::ORIGINAL_FIRST),
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    widget.load_new_fact(&mut presenter).await;

    assert_eq!(presenter.primary(), "Cats purr.");
    assert_eq!(presenter.secondary(), "Los gatos ronronean.");
}

#[tokio::test]
async fn empty_translation_shows_placeholder() {
    let (mut widget, _) = build(Setup {
        translation: "",
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    let outcome = widget.load_new_fact(&mut presenter).await;

    assert_eq!(outcome.card().primary, "Traducción no disponible");
    assert_eq!(outcome.card().secondary, "Cats purr.");
}

#[tokio::test]
async fn provider_failure_uses_local_fact_and_skips_translation() {
    let (mut widget, calls) = build(Setup {
        fact: None,
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    let outcome = widget.load_new_fact(&mut presenter).await;
    let card = outcome.card();

    assert_eq!(card.kind, CardKind::Local);
    assert!(widget.resolver().fallback_pool().contains(&card.primary));
    assert_eq!(card.secondary, "— dato local —");
    assert_eq!(presenter.kind(), Some(CardKind::Local));
    assert_eq!(calls.translate.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.attempts().len(), 1);
    assert!(presenter.trigger_enabled());
}

#[tokio::test(start_paused = true)]
async fn slow_image_dims_background_but_reveals_text() {
    let (mut widget, _) = build(Setup {
        image_delay: Duration::from_secs(5),
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    widget.load_new_fact(&mut presenter).await;

    assert!(presenter.is_revealed());
    assert_eq!(presenter.primary(), "Los gatos ronronean.");
    assert_eq!(
        presenter.background().map(|(_, opacity)| opacity),
        Some(BackgroundOpacity::Dimmed)
    );
}

#[tokio::test]
async fn wait_then_show_sets_background_before_reveal() {
    let (mut widget, _) = build(Setup::default());
    let mut presenter = CardRecorder::new();

    widget.load_new_fact(&mut presenter).await;

    let background = presenter.position(|e| matches!(e, PresenterEvent::Background { .. }));
    let reveal = presenter.position(|e| matches!(e, PresenterEvent::Reveal));
    assert!(background < reveal);
}

#[tokio::test(start_paused = true)]
async fn show_then_reconcile_reveals_text_first() {
    let (mut widget, _) = build(Setup {
        image_delay: Duration::from_millis(300),
        policy: DisplayPolicy::default().with_reveal(RevealStrategy::ShowThenReconcile),
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    widget.load_new_fact(&mut presenter).await;

    let text = presenter.position(|e| matches!(e, PresenterEvent::Text { .. }));
    let reveal = presenter.position(|e| matches!(e, PresenterEvent::Reveal));
    let background = presenter.position(|e| matches!(e, PresenterEvent::Background { .. }));
    assert!(text < reveal);
    assert!(reveal < background);
    assert_eq!(
        presenter.background().map(|(_, opacity)| opacity),
        Some(BackgroundOpacity::Full)
    );
}

#[tokio::test(start_paused = true)]
async fn resolve_deadline_switches_to_local_fact() {
    let (mut widget, calls) = build(Setup {
        hanging_before: 1,
        policy: DisplayPolicy::default().with_timeouts(Timeouts {
            pipeline: Duration::from_millis(2000),
            ..Timeouts::default()
        }),
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    let outcome = widget.load_new_fact(&mut presenter).await;

    assert_eq!(outcome.card().kind, CardKind::Local);
    assert_eq!(outcome.card().secondary, "— dato local —");
    assert!(outcome.attempts().is_empty());
    assert_eq!(calls.source.load(Ordering::SeqCst), 0);
    assert_eq!(calls.translate.load(Ordering::SeqCst), 0);
    assert!(presenter.trigger_enabled());
}

#[tokio::test(start_paused = true)]
async fn late_provider_success_survives_slow_translation() {
    // Two providers time out (6000 ms), the third answers, and translation
    // takes 2500 ms: 8500 ms in total, past the resolve deadline.
    let (mut widget, calls) = build(Setup {
        hanging_before: 2,
        translate_delay: Duration::from_millis(2500),
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    let outcome = widget.load_new_fact(&mut presenter).await;
    let card = outcome.card();

    assert_eq!(card.kind, CardKind::Fetched);
    assert_eq!(card.primary, "Los gatos ronronean.");
    assert_eq!(card.secondary, "Cats purr.");
    assert_eq!(card.source.as_deref(), Some("mock"));
    assert_eq!(outcome.attempts().len(), 3);
    assert_eq!(calls.translate.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn hanging_translation_shows_placeholder_and_keeps_fact() {
    let (mut widget, _) = build(Setup {
        translate_delay: Duration::from_secs(60),
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    let outcome = widget.load_new_fact(&mut presenter).await;

    assert_eq!(outcome.card().kind, CardKind::Fetched);
    assert_eq!(outcome.card().primary, "Traducción no disponible");
    assert_eq!(outcome.card().secondary, "Cats purr.");
    assert_eq!(outcome.attempts().len(), 1);
    assert!(presenter.trigger_enabled());
}

#[tokio::test]
async fn broken_store_still_shows_fact() {
    let (mut widget, _) = build(Setup {
        store: Arc::new(BrokenStore),
        ..Setup::default()
    });
    let mut presenter = CardRecorder::new();

    let outcome = widget.load_new_fact(&mut presenter).await;

    assert!(!outcome.is_gated());
    assert!(matches!(
        outcome,
        factcard_widget::LoadOutcome::Shown { count: None, .. }
    ));
    assert!(presenter.trigger_enabled());
}
