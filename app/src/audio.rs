use std::io::Cursor;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};

/// Decode and play an in-memory audio file, blocking until it finishes.
/// Callers run this on a dedicated thread.
pub fn play_bytes(bytes: Vec<u8>) -> Result<()> {
    let (_stream, handle) =
        OutputStream::try_default().context("No audio output device available")?;
    let sink = Sink::try_new(&handle)?;

    let source = Decoder::new(Cursor::new(bytes)).context("Could not decode audio")?;
    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}
