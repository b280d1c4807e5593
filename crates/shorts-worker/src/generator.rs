//! The generation pipeline.
//!
//! One request walks Scripting -> Voicing -> AcquiringScenes -> Ready, each
//! transition triggered only by completion of the corresponding external
//! call. The timeline engine receives its inputs only after acquisition has
//! fully resolved, so nothing downstream ever observes partial state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, warn};

use shorts_acquire::{
    acquire_all, AcquireConfig, AcquireProgress, HttpImageFetcher, ImageFetcher, RandomSeedSource,
};
use shorts_ai_client::{ArticleScraper, ScraperConfig, ScriptClient, SpeechClient};
use shorts_models::{GenerationPhase, GenerationStatus, RequestId, ScenePrompt};
use shorts_timeline::normalize_prompts;

use crate::config::GeneratorConfig;
use crate::error::WorkerResult;
use crate::plan::VideoPlan;

/// Orchestrates one article-to-video-plan generation.
pub struct VideoGenerator {
    config: GeneratorConfig,
    acquire_config: AcquireConfig,
    scraper: ArticleScraper,
    script: ScriptClient,
    speech: SpeechClient,
    fetcher: Arc<dyn ImageFetcher>,
    phase_tx: watch::Sender<GenerationPhase>,
}

impl VideoGenerator {
    /// Create a generator with explicit collaborators.
    pub fn new(
        config: GeneratorConfig,
        acquire_config: AcquireConfig,
        scraper: ArticleScraper,
        script: ScriptClient,
        speech: SpeechClient,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        let (phase_tx, _) = watch::channel(GenerationPhase::Idle);
        Self {
            config,
            acquire_config,
            scraper,
            script,
            speech,
            fetcher,
            phase_tx,
        }
    }

    /// Create a generator from environment variables with the given
    /// timing/geometry configuration.
    pub fn from_env_with(config: GeneratorConfig) -> WorkerResult<Self> {
        let fetcher = Arc::new(HttpImageFetcher::new(config.fetch_timeout)?);
        Ok(Self::new(
            config,
            AcquireConfig::from_env(),
            ArticleScraper::new(ScraperConfig::default())?,
            ScriptClient::from_env()?,
            SpeechClient::from_env()?,
            fetcher,
        ))
    }

    /// Create a generator entirely from environment variables.
    pub fn from_env() -> WorkerResult<Self> {
        Self::from_env_with(GeneratorConfig::from_env())
    }

    /// Observe phase transitions of running requests.
    pub fn subscribe_phase(&self) -> watch::Receiver<GenerationPhase> {
        self.phase_tx.subscribe()
    }

    /// Generate the video plan for `url`.
    ///
    /// Cancellation (flipping the watch flag) halts the acquisition
    /// pipeline cooperatively; there is no partial state to roll back.
    pub async fn generate(
        &self,
        url: &str,
        cancel: &mut watch::Receiver<bool>,
    ) -> WorkerResult<VideoPlan> {
        let mut status = GenerationStatus::new(RequestId::new());
        info!(request_id = %status.request_id, url = %url, "Starting video generation");

        match self.run(&mut status, url, cancel).await {
            Ok(plan) => {
                self.enter(&mut status, GenerationPhase::Ready, "Plan assembled")?;
                info!(
                    request_id = %status.request_id,
                    total_frames = plan.total_frames(),
                    scenes = plan.scene_count(),
                    "Video plan ready"
                );
                Ok(plan)
            }
            Err(e) => {
                let _ = status.fail(e.to_string());
                let _ = self.phase_tx.send(GenerationPhase::Failed);
                error!(request_id = %status.request_id, "Video generation failed: {}", e);
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        status: &mut GenerationStatus,
        url: &str,
        cancel: &mut watch::Receiver<bool>,
    ) -> WorkerResult<VideoPlan> {
        self.enter(status, GenerationPhase::Scripting, "Reading link and writing script")?;
        let article = self.scraper.scrape(url).await?;
        let script = self.script.generate_script(&article).await?;

        self.enter(status, GenerationPhase::Voicing, "Generating narration")?;
        let (audio, captions) = self.speech.narrate(&script.script_text).await?;
        if captions.is_empty() {
            warn!("Transcription returned no word timestamps, default duration applies");
        }

        self.enter(status, GenerationPhase::AcquiringScenes, "Acquiring scene images")?;
        let prompts: Vec<ScenePrompt> = normalize_prompts(
            script.visual_prompts.clone(),
            self.config.scene_count,
            &mut rand::rng(),
        )
        .into_iter()
        .map(ScenePrompt::new)
        .collect();

        let (progress_tx, mut progress_rx) = shorts_acquire::channel();
        let forwarder = tokio::spawn(async move {
            while let Some(event) = progress_rx.recv().await {
                match event {
                    AcquireProgress::SceneStarted { index, total } => {
                        info!(scene = index + 1, total, "Downloading scene");
                    }
                    AcquireProgress::SceneAcquired { index, placeholder } if placeholder => {
                        warn!(scene = index + 1, "Scene fell back to placeholder asset");
                    }
                    _ => {}
                }
            }
        });

        let mut seeds = RandomSeedSource;
        let assets = acquire_all(
            self.fetcher.as_ref(),
            &prompts,
            &self.acquire_config,
            &mut seeds,
            &progress_tx,
            cancel,
        )
        .await?;

        drop(progress_tx);
        let _ = forwarder.await;

        Ok(VideoPlan::assemble(
            script.script_text,
            audio.data_url,
            captions,
            assets,
            &self.config,
        ))
    }

    fn enter(
        &self,
        status: &mut GenerationStatus,
        phase: GenerationPhase,
        detail: &str,
    ) -> WorkerResult<()> {
        status.advance(phase)?;
        status.set_detail(detail);
        let _ = self.phase_tx.send(phase);
        info!(phase = %phase, "{}", detail);
        Ok(())
    }
}
