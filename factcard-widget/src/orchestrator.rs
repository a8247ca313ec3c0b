//! The load-new-fact orchestrator.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use factcard_core::{
    Background, BackgroundOpacity, CardKind, DisplayPolicy, FactCard, FactResult, Presenter,
    RevealStrategy,
};
use factcard_fetch::{
    FactAttempt, FactResolver, FetchContext, FetchError, GoogleTranslator, HttpClient,
    HttpImageLoader, ImageApi, ImageHandle, TranslateApi, with_timeout,
};
use factcard_providers::SourceRegistry;
use factcard_store::{QuotaTracker, Settings};
use tracing::{debug, info, instrument, warn};

use crate::error::WidgetError;

// ============================================================================
// Widget State
// ============================================================================

/// Where the current (or last) invocation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Waiting for a trigger.
    #[default]
    Idle,
    /// Quota denied. Terminal for the invocation.
    Gated,
    /// Fact, translation and image in flight.
    Loading,
    /// Text assigned, waiting on the reveal.
    Rendering,
    /// Text visible, quota counted.
    Revealed,
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetState::Idle => write!(f, "idle"),
            WidgetState::Gated => write!(f, "gated"),
            WidgetState::Loading => write!(f, "loading"),
            WidgetState::Rendering => write!(f, "rendering"),
            WidgetState::Revealed => write!(f, "revealed"),
        }
    }
}

// ============================================================================
// Load Outcome
// ============================================================================

/// The result of one invocation.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// Daily limit reached; no network was touched.
    Gated {
        /// The limit message card.
        card: FactCard,
    },
    /// A fact was shown.
    Shown {
        /// The rendered card.
        card: FactCard,
        /// Provider attempts, empty if no fact resolved before the deadline.
        attempts: Vec<FactAttempt>,
        /// Count after this invocation, if the store accepted the write.
        count: Option<u32>,
        /// Wall time of the invocation.
        duration: Duration,
    },
}

impl LoadOutcome {
    /// The card shown.
    pub fn card(&self) -> &FactCard {
        match self {
            LoadOutcome::Gated { card } | LoadOutcome::Shown { card, .. } => card,
        }
    }

    /// Returns true if the invocation was gated.
    pub fn is_gated(&self) -> bool {
        matches!(self, LoadOutcome::Gated { .. })
    }

    /// Provider attempts, if any were made.
    pub fn attempts(&self) -> &[FactAttempt] {
        match self {
            LoadOutcome::Gated { .. } => &[],
            LoadOutcome::Shown { attempts, .. } => attempts,
        }
    }
}

/// Text ready for the slots.
struct RenderedText {
    kind: CardKind,
    primary: String,
    secondary: String,
    source: Option<String>,
    attempts: Vec<FactAttempt>,
}

// ============================================================================
// Fact Widget
// ============================================================================

/// Composes quota, resolver, translator and image loader.
pub struct FactWidget {
    resolver: FactResolver,
    translator: Arc<dyn TranslateApi>,
    images: Arc<dyn ImageApi>,
    quota: QuotaTracker,
    ctx: FetchContext,
    policy: DisplayPolicy,
    state: WidgetState,
}

impl FactWidget {
    /// Creates a widget that translates and loads images over `ctx.http`.
    pub fn new(
        resolver: FactResolver,
        quota: QuotaTracker,
        ctx: FetchContext,
        policy: DisplayPolicy,
    ) -> Self {
        let translator = Arc::new(GoogleTranslator::from_context(&ctx));
        let images = Arc::new(HttpImageLoader::new(Arc::clone(&ctx.http)));
        Self {
            resolver,
            translator,
            images,
            quota,
            ctx,
            policy,
            state: WidgetState::Idle,
        }
    }

    /// Builds a widget from persisted settings and the source registry.
    ///
    /// The HTTP client is restricted to the provider, translator and image
    /// hosts, and the fetch context's timeouts follow the policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the local fallback pool cannot be built.
    pub fn from_settings(settings: &Settings, quota: QuotaTracker) -> Result<Self, WidgetError> {
        let resolver = SourceRegistry::build_resolver(&settings.disabled_sources)?;
        let http = HttpClient::new().with_allowed_domains(SourceRegistry::allowed_domains());
        let ctx = FetchContext::builder()
            .http(Arc::new(http))
            .settings(settings.to_fetch_settings())
            .build();

        Ok(Self::new(resolver, quota, ctx, settings.to_policy()))
    }

    /// Replaces the translator.
    pub fn with_translator(mut self, translator: Arc<dyn TranslateApi>) -> Self {
        self.translator = translator;
        self
    }

    /// Replaces the image loader.
    pub fn with_image_api(mut self, images: Arc<dyn ImageApi>) -> Self {
        self.images = images;
        self
    }

    /// Current state.
    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Display policy in effect.
    pub fn policy(&self) -> &DisplayPolicy {
        &self.policy
    }

    /// The quota tracker.
    pub fn quota(&self) -> &QuotaTracker {
        &self.quota
    }

    /// The resolver.
    pub fn resolver(&self) -> &FactResolver {
        &self.resolver
    }

    /// Runs one "load new fact" invocation against `presenter`.
    ///
    /// Always ends with visible text. The trigger is re-enabled on every
    /// exit except the gated one.
    #[instrument(skip_all)]
    pub async fn load_new_fact(&mut self, presenter: &mut dyn Presenter) -> LoadOutcome {
        let start = Instant::now();
        self.state = WidgetState::Idle;

        // Gate first, before any network or quota mutation.
        if !self.quota_allows().await {
            return self.gate(presenter);
        }

        self.state = WidgetState::Loading;
        presenter.set_trigger_enabled(false);
        presenter.set_loading(true);

        let image = ImageHandle::spawn(
            Arc::clone(&self.images),
            self.ctx.settings.image.random_url(),
        );

        let resolve = async { Ok::<_, FetchError>(self.resolver.resolve(&self.ctx).await) };
        let text = match with_timeout(self.policy.timeouts.pipeline, resolve).await {
            Ok(outcome) => self.render(outcome.result, outcome.attempts).await,
            Err(error) => {
                warn!(error = %error, "No fact resolved before the deadline, using local fact");
                self.local_text(self.resolver.fallback(), Vec::new())
            }
        };

        self.state = WidgetState::Rendering;
        presenter.show_text(text.kind, &text.primary, &text.secondary);
        presenter.set_loading(false);

        let background = self.reveal(image, presenter).await;

        self.state = WidgetState::Revealed;
        let count = match self.quota.increment_count().await {
            Ok(count) => Some(count),
            Err(error) => {
                warn!(error = %error, "Failed to record quota");
                None
            }
        };
        presenter.set_trigger_enabled(true);

        let duration = start.elapsed();
        info!(kind = %text.kind, duration = ?duration, "Fact revealed");

        let mut card = FactCard::new(text.kind, text.primary, text.secondary);
        card.source = text.source;
        card.background = Some(background);

        LoadOutcome::Shown {
            card,
            attempts: text.attempts,
            count,
            duration,
        }
    }

    // ------------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------------

    async fn quota_allows(&self) -> bool {
        match self.quota.check_limit().await {
            Ok(allowed) => allowed,
            Err(error) => {
                // The counter is advisory; a broken store should not hide facts.
                warn!(error = %error, "Quota check failed, allowing");
                true
            }
        }
    }

    fn gate(&mut self, presenter: &mut dyn Presenter) -> LoadOutcome {
        info!("Daily limit reached");
        self.state = WidgetState::Gated;

        let labels = &self.policy.labels;
        presenter.set_loading(false);
        presenter.show_limit_reached(&labels.limit_primary, &labels.limit_secondary);
        presenter.set_trigger_enabled(false);

        LoadOutcome::Gated {
            card: FactCard::new(
                CardKind::LimitReached,
                labels.limit_primary.clone(),
                labels.limit_secondary.clone(),
            ),
        }
    }

    async fn render(&self, result: FactResult, attempts: Vec<FactAttempt>) -> RenderedText {
        match result {
            FactResult::Success { text, source } => {
                let translated = self.translate(&text).await;
                let translated = if translated.trim().is_empty() {
                    debug!("No translation, using placeholder");
                    self.policy.labels.translation_unavailable.clone()
                } else {
                    translated
                };

                let (primary, secondary) = self.policy.order.arrange(translated, text);
                RenderedText {
                    kind: CardKind::Fetched,
                    primary,
                    secondary,
                    source: Some(source),
                    attempts,
                }
            }
            fallback @ FactResult::Fallback { .. } => self.local_text(fallback, attempts),
        }
    }

    /// Translates under the per-provider limit. An expired limit reads as
    /// an empty translation, so a resolved fact is never discarded.
    async fn translate(&self, text: &str) -> String {
        let limit = self.policy.timeouts.per_provider;
        let translate = async { Ok::<_, FetchError>(self.translator.translate(text).await) };
        match with_timeout(limit, translate).await {
            Ok(translated) => translated,
            Err(error) => {
                warn!(error = %error, "Translation did not finish");
                String::new()
            }
        }
    }

    fn local_text(&self, result: FactResult, attempts: Vec<FactAttempt>) -> RenderedText {
        RenderedText {
            kind: CardKind::Local,
            primary: result.text().to_string(),
            secondary: self.policy.labels.fallback_label.clone(),
            source: None,
            attempts,
        }
    }

    async fn reveal(&self, image: ImageHandle, presenter: &mut dyn Presenter) -> Background {
        let url = image.url().to_string();
        let limit = self.policy.timeouts.image_reveal;

        let opacity = match self.policy.reveal {
            RevealStrategy::WaitThenShow => {
                let opacity = image_opacity(image, limit).await;
                presenter.set_background(&url, opacity);
                presenter.reveal();
                opacity
            }
            RevealStrategy::ShowThenReconcile => {
                presenter.reveal();
                let opacity = image_opacity(image, limit).await;
                presenter.set_background(&url, opacity);
                opacity
            }
        };

        Background { url, opacity }
    }
}

async fn image_opacity(image: ImageHandle, limit: Duration) -> BackgroundOpacity {
    match image.ready(limit).await {
        Ok(_) => BackgroundOpacity::Full,
        Err(_) => BackgroundOpacity::Dimmed,
    }
}

impl fmt::Debug for FactWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactWidget")
            .field("resolver", &self.resolver)
            .field("quota", &self.quota)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
