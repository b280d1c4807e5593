//! HTTP clients for the AutoShorts collaborators.
//!
//! The pipeline treats its upstream services as black boxes: an article
//! scraper, a script generator (chat-completions in JSON mode), and a
//! speech service producing audio plus word-level timestamps. This crate
//! holds those thin clients; the timeline engine consumes only their
//! outputs.

pub mod article;
pub mod error;
pub mod retry;
pub mod script;
pub mod speech;

pub use article::{ArticleScraper, ScraperConfig};
pub use error::{AiError, AiResult};
pub use script::{ScriptClient, ScriptConfig};
pub use speech::{NarrationAudio, SpeechClient, SpeechConfig};
