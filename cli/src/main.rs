use anyhow::Result;
use clap::Parser;
use log::info;
use shared::api::ApiClient;
use shared::config::load_config;
use shared::types::GenerateRequest;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "audiogen")]
#[command(about = "Generate speech from text via an AI Audio Generator server")]
struct Args {
    /// Text to synthesize
    text: String,

    /// Language code (en, es, fr, ...)
    #[arg(short, long)]
    lang: Option<String>,

    /// Server base URL (overrides the configured one)
    #[arg(short, long)]
    server: Option<String>,

    /// Download the generated audio to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = args.text.trim();
    if text.is_empty() {
        anyhow::bail!("Please enter some text first.");
    }

    let config = load_config();
    let base_url = args.server.unwrap_or_else(|| config.base_url());
    let lang = args.lang.unwrap_or_else(|| config.default_lang());

    let client = ApiClient::new(base_url);
    let request = GenerateRequest {
        text: text.to_string(),
        lang,
    };

    info!("Requesting generation from {}", client.base_url());
    let response = client.generate_audio(&request).await?;

    // A 2xx body can still refuse the request
    if let Some(error) = response.error {
        anyhow::bail!(error);
    }

    if let Some(credits) = response.remaining_credits {
        println!("Credits: {}", credits);
    }

    match response.audio_url {
        Some(audio_url) => {
            println!("Audio: {}", audio_url);
            if let Some(output) = args.output {
                let bytes = client.fetch_audio(&audio_url).await?;
                std::fs::write(&output, &bytes)?;
                println!("Saved {} bytes to {}", bytes.len(), output.display());
            }
        }
        None => {
            if args.output.is_some() {
                anyhow::bail!("Server response did not include an audio URL.");
            }
        }
    }

    if let Some(history) = response.history {
        println!("Recent generations:");
        for entry in history {
            let lang = entry.lang.as_deref().unwrap_or("").to_uppercase();
            let timestamp = entry.timestamp.as_deref().unwrap_or("");
            println!(
                "  [{} {}] {} -> {}",
                lang, timestamp, entry.text_preview, entry.audio_url
            );
        }
    }

    Ok(())
}
