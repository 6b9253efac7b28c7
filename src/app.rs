use crate::config::{api_key_from_env, Cli};
use crate::error::Error;
use crate::synthesis::{AliyunTtsClient, SynthesisClient, SynthesisOption};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The whole pipeline: credential, client, one synthesis exchange, one file
/// write. The credential check happens before the client exists, so a
/// misconfigured run performs no network I/O.
pub async fn run(cli: Cli) -> Result<PathBuf, Error> {
    let api_key = api_key_from_env()?;
    let option = SynthesisOption {
        voice: cli.voice_id,
        ..Default::default()
    };
    let client = AliyunTtsClient::new(api_key, option);
    synthesize_to_file(&client, &cli.text, &cli.output_path).await
}

/// Synthesize `text` and persist the payload at `output_path`. The file is
/// only touched after the exchange has fully succeeded, so a failed run never
/// leaves a partial file behind.
pub async fn synthesize_to_file(
    client: &dyn SynthesisClient,
    text: &str,
    output_path: &Path,
) -> Result<PathBuf, Error> {
    let audio = client.synthesize(text).await.map_err(Error::Synthesis)?;
    debug!(
        "writing {} bytes of audio to {}",
        audio.len(),
        output_path.display()
    );
    std::fs::write(output_path, &audio).map_err(|source| Error::Io {
        path: output_path.to_path_buf(),
        source,
    })?;
    Ok(output_path.to_path_buf())
}
