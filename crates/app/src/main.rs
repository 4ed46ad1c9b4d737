use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::style::Stylize;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use readvox_app::{render, session, Settings};
use readvox_audio::RecorderThread;
use readvox_foundation::CaptureConfig;
use readvox_stt::TranscriptionConfig;

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("logs")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "readvox.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    // File only; stdout stays clean for the interactive session.
    tracing_subscriber::fmt()
        .with_writer(non_blocking_file)
        .with_env_filter(log_level)
        .with_ansi(false)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

fn wait_for_enter(prompt: &str) -> io::Result<()> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;
    tracing::info!("Starting ReadVox session");

    let settings = Settings::new()?;

    // Build the transcriber first: a missing backend or model should fail
    // before the user is asked to read anything.
    let stt_config = TranscriptionConfig {
        model_path: settings.model_path.clone(),
    };
    let mut transcriber = readvox_stt_vosk::create_transcriber(&stt_config)?;

    render::print_reference(&settings.reference_text);

    wait_for_enter(&format!("Press {} to START recording...", "ENTER".green()))?;
    let capture_config = CaptureConfig {
        silence_threshold: settings.silence_threshold,
        ..Default::default()
    };
    let recorder = RecorderThread::spawn(
        capture_config,
        settings.device.clone(),
        PathBuf::from(&settings.output_wav),
    )?;
    render::print_recording_banner();

    wait_for_enter(&format!("Press {} again to STOP recording...", "ENTER".red()))?;
    render::print_processing();
    let take = recorder.stop()?;
    if take.looks_silent() {
        render::print_silent_take_warning();
    }

    match session::run(transcriber.as_mut(), &take.asset, &settings.reference_text) {
        Ok(report) => render::print_report(&report),
        Err(e) => {
            // Surface the engine's message verbatim and skip analysis;
            // no partial report, no retry.
            tracing::error!("Transcription failed: {}", e);
            render::print_transcription_error(&e.to_string());
        }
    }

    tracing::info!("Session complete");
    Ok(())
}
