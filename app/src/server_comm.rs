use std::sync::mpsc;

use shared::api::ApiClient;
use shared::types::GenerateRequest;

use crate::app::UiMessage;
use crate::audio;

/// Run one generation request on a background thread and report the
/// outcome over the UI channel. Exactly one terminal message is sent per
/// call, so the submit control always comes back.
pub fn spawn_generate(tx: mpsc::Sender<UiMessage>, base_url: String, request: GenerateRequest) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let client = ApiClient::new(base_url);
            match client.generate_audio(&request).await {
                Ok(response) => {
                    let _ = tx.send(UiMessage::GenerationComplete(response));
                }
                Err(e) => {
                    let message = e.to_string();
                    let message = if message.trim().is_empty() {
                        "Something went wrong.".to_string()
                    } else {
                        message
                    };
                    let _ = tx.send(UiMessage::GenerationFailed(message));
                }
            }
        });
    });
}

/// Fetch audio bytes and play them to completion off the UI thread.
pub fn spawn_playback(tx: mpsc::Sender<UiMessage>, base_url: String, audio_url: String) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let fetched = rt.block_on(async {
            let client = ApiClient::new(base_url);
            client.fetch_audio(&audio_url).await
        });

        let result = fetched
            .map_err(anyhow::Error::from)
            .and_then(|bytes| audio::play_bytes(bytes.to_vec()));

        match result {
            Ok(()) => {
                let _ = tx.send(UiMessage::PlaybackFinished);
            }
            Err(e) => {
                let _ = tx.send(UiMessage::PlaybackFailed(format!("Playback failed: {}", e)));
            }
        }
    });
}
