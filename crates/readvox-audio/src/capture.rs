use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};
use crossbeam_channel::{bounded, unbounded, Receiver, RecvTimeoutError, Sender};

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use readvox_foundation::{AudioAsset, AudioError, CaptureConfig};

use crate::convert;
use crate::detector::SilenceMeter;
use crate::writer::write_wav;

/// Counters accumulated over one take.
#[derive(Debug, Default, Clone)]
pub struct CaptureStats {
    pub chunks_captured: u64,
    pub silent_chunks: u64,
    pub active_chunks: u64,
}

/// A finished recording: the flushed asset plus what the silence meter
/// saw along the way.
#[derive(Debug)]
pub struct RecordedTake {
    pub asset: AudioAsset,
    pub stats: CaptureStats,
}

impl RecordedTake {
    /// True when no chunk ever rose above the silence threshold; the take
    /// almost certainly contains no speech.
    pub fn looks_silent(&self) -> bool {
        self.stats.active_chunks == 0
    }
}

/// A handle to the dedicated capture thread.
///
/// The thread exclusively owns the sample buffer; the cpal callback only
/// hands converted chunks over a channel. Stopping is a single flag
/// transition observed through a blocking join, after which every
/// buffered sample has been flushed into the WAV.
pub struct RecorderThread {
    handle: JoinHandle<Result<RecordedTake, AudioError>>,
    stop: Arc<AtomicBool>,
}

impl RecorderThread {
    /// Open the input device and start capturing. Returns once the stream
    /// is live, so the caller knows audio is actually flowing before
    /// telling the user to read.
    pub fn spawn(
        config: CaptureConfig,
        device_name: Option<String>,
        output_path: PathBuf,
    ) -> Result<Self, AudioError> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let (startup_tx, startup_rx) = bounded::<Result<(), AudioError>>(1);

        let handle = thread::Builder::new()
            .name("readvox-capture".to_string())
            .spawn(move || capture_loop(config, device_name, output_path, stop_flag, startup_tx))
            .map_err(|e| AudioError::Fatal(format!("Failed to spawn capture thread: {}", e)))?;

        match startup_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(Ok(())) => Ok(Self { handle, stop }),
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(e)
            }
            Err(_) => {
                // Tell the thread to wind down rather than leaving it
                // capturing forever; nobody will join it now.
                stop.store(true, Ordering::SeqCst);
                Err(AudioError::Fatal(
                    "Timed out waiting for the capture stream to start".to_string(),
                ))
            }
        }
    }

    /// Stop capturing and wait for the finalized take. Blocks until the
    /// capture thread has drained its channel and written the WAV.
    pub fn stop(self) -> Result<RecordedTake, AudioError> {
        self.stop.store(true, Ordering::SeqCst);
        self.handle
            .join()
            .map_err(|_| AudioError::Fatal("Capture thread panicked".to_string()))?
    }
}

fn capture_loop(
    config: CaptureConfig,
    device_name: Option<String>,
    output_path: PathBuf,
    stop: Arc<AtomicBool>,
    startup_tx: Sender<Result<(), AudioError>>,
) -> Result<RecordedTake, AudioError> {
    let (stream, stream_config, chunk_rx) = match open_stream(&config, device_name.as_deref()) {
        Ok(parts) => {
            let _ = startup_tx.send(Ok(()));
            parts
        }
        Err(e) => {
            let msg = e.to_string();
            let _ = startup_tx.send(Err(e));
            return Err(AudioError::Fatal(msg));
        }
    };

    let channels = stream_config.channels;
    let sample_rate = stream_config.sample_rate.0;
    tracing::info!(
        "Capture started: {} Hz, {} channel(s), writing to {}",
        sample_rate,
        channels,
        output_path.display()
    );

    let mut samples: Vec<i16> = Vec::new();
    let mut meter = SilenceMeter::new(config.silence_threshold);
    let mut stats = CaptureStats::default();

    while !stop.load(Ordering::SeqCst) {
        match chunk_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(chunk) => ingest(&chunk, channels, &mut samples, &mut meter, &mut stats),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("Capture stream closed before stop was requested");
                break;
            }
        }
    }

    // Stop the callback before draining, so nothing arrives after the
    // drain and the asset really contains every captured sample.
    drop(stream);
    while let Ok(chunk) = chunk_rx.try_recv() {
        ingest(&chunk, channels, &mut samples, &mut meter, &mut stats);
    }

    stats.silent_chunks = meter.silent_chunks();
    stats.active_chunks = meter.active_chunks();
    if meter.all_silent() {
        tracing::warn!(
            "Recording never rose above the silence threshold ({} chunks)",
            stats.chunks_captured
        );
    }

    write_wav(&output_path, &samples, sample_rate)?;
    tracing::info!(
        "Capture finished: {} samples ({:.2}s), {} active / {} silent chunks",
        samples.len(),
        samples.len() as f32 / sample_rate as f32,
        stats.active_chunks,
        stats.silent_chunks
    );

    Ok(RecordedTake {
        asset: AudioAsset {
            path: output_path,
            sample_rate,
            channels: 1,
            sample_count: samples.len(),
        },
        stats,
    })
}

fn ingest(
    chunk: &[i16],
    channels: u16,
    samples: &mut Vec<i16>,
    meter: &mut SilenceMeter,
    stats: &mut CaptureStats,
) {
    let mono = convert::downmix_to_mono(chunk, channels);
    meter.observe(&mono);
    stats.chunks_captured += 1;
    samples.extend_from_slice(&mono);
}

type StreamParts = (Stream, StreamConfig, Receiver<Vec<i16>>);

fn open_stream(config: &CaptureConfig, device_name: Option<&str>) -> Result<StreamParts, AudioError> {
    let host = cpal::default_host();
    let device = open_device(&host, device_name)?;
    if let Ok(name) = device.name() {
        tracing::info!("Selected input device: {}", name);
    }

    let (stream_config, sample_format) = negotiate_config(&device, config)?;
    let (chunk_tx, chunk_rx) = unbounded::<Vec<i16>>();
    let stream = build_stream(&device, &stream_config, sample_format, chunk_tx)?;
    stream.play()?;

    Ok((stream, stream_config, chunk_rx))
}

fn open_device(host: &cpal::Host, name: Option<&str>) -> Result<cpal::Device, AudioError> {
    match name {
        Some(wanted) => host
            .input_devices()
            .map_err(|e| AudioError::Fatal(format!("Failed to enumerate input devices: {}", e)))?
            .find(|d| d.name().map(|n| n == wanted).unwrap_or(false))
            .ok_or_else(|| AudioError::DeviceNotFound {
                name: Some(wanted.to_string()),
            }),
        None => host
            .default_input_device()
            .ok_or(AudioError::DeviceNotFound { name: None }),
    }
}

/// Prefer the exact shape the asset contract asks for; otherwise take the
/// device default and let the capture thread downmix.
fn negotiate_config(
    device: &cpal::Device,
    config: &CaptureConfig,
) -> Result<(StreamConfig, SampleFormat), AudioError> {
    if let Ok(supported) = device.supported_input_configs() {
        for range in supported {
            if range.channels() == config.channels
                && range.min_sample_rate().0 <= config.sample_rate
                && config.sample_rate <= range.max_sample_rate().0
            {
                return Ok((
                    StreamConfig {
                        channels: config.channels,
                        sample_rate: cpal::SampleRate(config.sample_rate),
                        buffer_size: cpal::BufferSize::Default,
                    },
                    range.sample_format(),
                ));
            }
        }
    }

    if let Ok(default_config) = device.default_input_config() {
        tracing::warn!(
            "Device does not support {} Hz x{}; falling back to {} Hz x{}",
            config.sample_rate,
            config.channels,
            default_config.sample_rate().0,
            default_config.channels()
        );
        return Ok((
            StreamConfig {
                channels: default_config.channels(),
                sample_rate: default_config.sample_rate(),
                buffer_size: cpal::BufferSize::Default,
            },
            default_config.sample_format(),
        ));
    }

    Err(AudioError::FormatNotSupported {
        format: "No supported input configuration".to_string(),
    })
}

fn build_stream(
    device: &cpal::Device,
    config: &StreamConfig,
    sample_format: SampleFormat,
    chunk_tx: Sender<Vec<i16>>,
) -> Result<Stream, AudioError> {
    let err_fn = |err: cpal::StreamError| {
        tracing::error!("Audio stream error: {}", err);
    };

    let stream = match sample_format {
        SampleFormat::I16 => device.build_input_stream(
            config,
            move |data: &[i16], _: &_| {
                let _ = chunk_tx.send(data.to_vec());
            },
            err_fn,
            None,
        )?,
        SampleFormat::F32 => device.build_input_stream(
            config,
            move |data: &[f32], _: &_| {
                let _ = chunk_tx.send(convert::f32_to_i16(data));
            },
            err_fn,
            None,
        )?,
        SampleFormat::U16 => device.build_input_stream(
            config,
            move |data: &[u16], _: &_| {
                let _ = chunk_tx.send(convert::u16_to_i16(data));
            },
            err_fn,
            None,
        )?,
        SampleFormat::F64 => device.build_input_stream(
            config,
            move |data: &[f64], _: &_| {
                let _ = chunk_tx.send(convert::f64_to_i16(data));
            },
            err_fn,
            None,
        )?,
        other => {
            return Err(AudioError::FormatNotSupported {
                format: format!("{:?}", other),
            });
        }
    };

    Ok(stream)
}
