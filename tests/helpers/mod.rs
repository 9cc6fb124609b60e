use async_trait::async_trait;
use podcast_generator::domain::audio::GapSampler;
use podcast_generator::infrastructure::synthesis::{SpeechSynthesizer, SynthesisError};
use std::sync::Mutex;

/// Synthesizer double that records every (voice, text) pair and returns a
/// deterministic marker buffer, so the combined audio can be checked
/// byte-for-byte. Can be set up to fail on a specific call.
pub struct RecordingSynthesizer {
    calls: Mutex<Vec<(String, String)>>,
    fail_on_call: Option<usize>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on_call: None,
        }
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on_call: Some(call),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The marker bytes returned for a given call.
    pub fn speech_bytes(voice: &str, text: &str) -> Vec<u8> {
        format!("<{voice}:{text}>").into_bytes()
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(&self, voice: &str, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let mut calls = self.calls.lock().unwrap();
        let call_index = calls.len();
        calls.push((voice.to_string(), text.to_string()));
        if self.fail_on_call == Some(call_index) {
            return Err(SynthesisError("connection reset by peer".to_string()));
        }
        Ok(Self::speech_bytes(voice, text))
    }
}

/// Gap sampler returning a constant duration, for byte-exact assertions.
pub struct FixedGapSampler(pub f64);

impl GapSampler for FixedGapSampler {
    fn sample_secs(&self) -> f64 {
        self.0
    }
}
