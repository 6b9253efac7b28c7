use crate::error::Error;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the DashScope API credential.
pub const API_KEY_ENV: &str = "DASHSCOPE_API_KEY";

#[derive(Parser, Debug)]
#[command(version, about = "Synthesize speech with Aliyun CosyVoice")]
pub struct Cli {
    /// Voice profile id from the provider's catalog
    pub voice_id: String,
    /// Text to synthesize
    pub text: String,
    /// Destination file for the audio payload
    pub output_path: PathBuf,
}

/// Read the API key from the environment. Checked before any client is
/// constructed so a misconfigured run never reaches the network.
pub fn api_key_from_env() -> Result<String, Error> {
    validate_api_key(std::env::var(API_KEY_ENV).ok())
}

fn validate_api_key(value: Option<String>) -> Result<String, Error> {
    match value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::Configuration(format!(
            "{} is not set, please configure it in the environment or a .env file",
            API_KEY_ENV
        ))),
    }
}
