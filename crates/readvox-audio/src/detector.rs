/// Chunk-level silence accounting: classifies each chunk by RMS against a
/// fixed threshold so a take that never rose above the noise floor can be
/// flagged after capture ends.
pub struct SilenceMeter {
    threshold: i16,
    silent_chunks: u64,
    active_chunks: u64,
}

impl SilenceMeter {
    pub fn new(threshold: i16) -> Self {
        Self {
            threshold,
            silent_chunks: 0,
            active_chunks: 0,
        }
    }

    /// Classify one chunk and update the counters. Returns true when the
    /// chunk was silent. Empty chunks count as silent.
    pub fn observe(&mut self, samples: &[i16]) -> bool {
        let silent = rms(samples) < self.threshold;
        if silent {
            self.silent_chunks += 1;
        } else {
            self.active_chunks += 1;
        }
        tracing::trace!(
            "SilenceMeter: chunk of {} samples classified {}",
            samples.len(),
            if silent { "silent" } else { "active" }
        );
        silent
    }

    pub fn silent_chunks(&self) -> u64 {
        self.silent_chunks
    }

    pub fn active_chunks(&self) -> u64 {
        self.active_chunks
    }

    /// True when no observed chunk ever crossed the threshold.
    pub fn all_silent(&self) -> bool {
        self.active_chunks == 0
    }
}

fn rms(samples: &[i16]) -> i16 {
    if samples.is_empty() {
        return 0;
    }
    let sum: i64 = samples.iter().map(|&s| s as i64 * s as i64).sum();
    ((sum / samples.len() as i64) as f64).sqrt() as i16
}
