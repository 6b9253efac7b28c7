use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
mod aliyun;
pub use aliyun::AliyunTtsClient;

#[cfg(test)]
mod tests;

pub const DEFAULT_MODEL: &str = "cosyvoice-v2";
pub const DEFAULT_ENDPOINT: &str = "wss://dashscope.aliyuncs.com/api-ws/v1/inference";

/// Provider tuning knobs. Defaults match the stock CosyVoice invocation:
/// mp3 output at 22050Hz, normal volume and speed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SynthesisOption {
    pub model: String,
    pub voice: String,
    pub format: String,
    pub sample_rate: u32,
    pub volume: u32,
    pub speed: f32,
    pub endpoint: String,
}

impl Default for SynthesisOption {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            voice: String::new(),
            format: "mp3".to_string(),
            sample_rate: 22050,
            volume: 50,
            speed: 1.0,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Text in, audio bytes out, or an error. The audio encoding is whatever the
/// provider returns for the configured format; callers write it verbatim.
#[async_trait]
pub trait SynthesisClient: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}
