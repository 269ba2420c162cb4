use std::sync::mpsc;

use shared::config::{load_config, save_config, Config, ServerConfig, UiConfig};
use shared::types::{GenerateRequest, GenerateResponse, HistoryEntry};

use crate::server_comm;

/// Mutually exclusive display mode of the status line. Exactly one is
/// active at a time; the error variant carries the message to show.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Success,
    Error(String),
}

impl RequestStatus {
    pub fn message(&self) -> &str {
        match self {
            RequestStatus::Idle => "Ready",
            RequestStatus::Loading => "Generating audio...",
            RequestStatus::Success => "Audio generated successfully.",
            RequestStatus::Error(message) => message,
        }
    }
}

#[derive(Debug)]
pub enum UiMessage {
    GenerationComplete(GenerateResponse),
    GenerationFailed(String),
    PlaybackFinished,
    PlaybackFailed(String),
}

/// Draft of the settings window; edits live here until saved so an open
/// window survives repaints without losing changes.
pub struct SettingsDraft {
    pub base_url: String,
    pub default_lang: String,
    pub auto_play: bool,
}

impl SettingsDraft {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url(),
            default_lang: config.default_lang(),
            auto_play: config.auto_play(),
        }
    }
}

pub struct TtsApp {
    pub text: String,
    pub lang: String,
    pub base_url: String,

    pub status: RequestStatus,
    pub in_flight: bool,

    pub current_audio: Option<String>,
    pub credits: Option<i64>,
    pub history: Vec<HistoryEntry>,
    pub playing: bool,

    // UI state
    pub settings: Option<SettingsDraft>,

    // Config
    pub config: Config,

    pub rx: mpsc::Receiver<UiMessage>,
    pub tx: mpsc::Sender<UiMessage>,
}

impl TtsApp {
    pub fn new(initial_text: Option<String>, server: Option<String>) -> Self {
        let mut app = Self::from_config(load_config());

        if let Some(text) = initial_text {
            app.text = text;
        }
        if let Some(server) = server {
            app.base_url = server;
        }

        app
    }

    pub fn from_config(config: Config) -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            text: String::new(),
            lang: config.default_lang(),
            base_url: config.base_url(),

            status: RequestStatus::Idle,
            in_flight: false,

            current_audio: None,
            credits: None,
            history: Vec::new(),
            playing: false,

            settings: None,

            config,

            rx,
            tx,
        }
    }

    /// Dispatch the current form contents. The in-flight flag stays set
    /// until the terminal message for this submission is processed, on
    /// success and failure alike.
    pub fn submit(&mut self) {
        if self.in_flight {
            return;
        }

        let Some(request) = self.prepare_request() else {
            return;
        };

        log::info!(
            "Submitting generation request ({} chars, lang {})",
            request.text.len(),
            request.lang
        );

        self.status = RequestStatus::Loading;
        self.in_flight = true;
        server_comm::spawn_generate(self.tx.clone(), self.base_url.clone(), request);
    }

    fn prepare_request(&mut self) -> Option<GenerateRequest> {
        let text = self.text.trim();
        if text.is_empty() {
            self.status = RequestStatus::Error("Please enter some text first.".to_string());
            return None;
        }

        Some(GenerateRequest {
            text: text.to_string(),
            lang: self.lang.clone(),
        })
    }

    pub fn process_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            match message {
                UiMessage::GenerationComplete(response) => {
                    self.in_flight = false;
                    self.apply_response(response);
                }
                UiMessage::GenerationFailed(message) => {
                    log::error!("Generation failed: {}", message);
                    self.in_flight = false;
                    self.status = RequestStatus::Error(message);
                }
                UiMessage::PlaybackFinished => {
                    self.playing = false;
                }
                UiMessage::PlaybackFailed(message) => {
                    log::error!("{}", message);
                    self.playing = false;
                    self.status = RequestStatus::Error(message);
                }
            }
        }
    }

    /// Apply a settled 2xx response. A body-level `error` short-circuits to
    /// the error status and leaves audio, credits, and history untouched;
    /// otherwise each present field is applied independently.
    fn apply_response(&mut self, response: GenerateResponse) {
        if let Some(message) = response.error {
            self.status = RequestStatus::Error(message);
            return;
        }

        if let Some(audio_url) = response.audio_url {
            self.current_audio = Some(audio_url.clone());
            if self.config.auto_play() {
                self.play(audio_url);
            }
        }

        if let Some(credits) = response.remaining_credits {
            self.credits = Some(credits);
        }

        if let Some(history) = response.history {
            // Full replacement, rendered in server order
            self.history = history;
        }

        self.status = RequestStatus::Success;
    }

    pub fn play(&mut self, audio_url: String) {
        if self.playing {
            return;
        }

        self.playing = true;
        server_comm::spawn_playback(self.tx.clone(), self.base_url.clone(), audio_url);
    }

    pub fn save_settings(&mut self, draft: &SettingsDraft) {
        let mut new_config = self.config.clone();
        new_config.server = Some(ServerConfig {
            base_url: Some(draft.base_url.clone()),
            default_lang: Some(draft.default_lang.clone()),
        });
        new_config.ui = Some(UiConfig {
            auto_play: Some(draft.auto_play),
        });

        if let Err(e) = save_config(&new_config) {
            log::error!("Failed to save config: {}", e);
        } else {
            self.base_url = new_config.base_url();
            self.config = new_config;
            log::info!("Settings saved successfully");
        }
    }
}
