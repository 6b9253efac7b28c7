use super::{SynthesisClient, SynthesisOption};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{client::IntoClientRequest, Message},
};
use tracing::{debug, warn};
use uuid::Uuid;

/// Aliyun CosyVoice WebSocket API client
/// https://help.aliyun.com/zh/model-studio/cosyvoice-websocket-api
///
/// The credential is held by the client instance; nothing is read from the
/// process environment once construction is done.
#[derive(Debug)]
pub struct AliyunTtsClient {
    api_key: String,
    option: SynthesisOption,
}

#[derive(Debug, Serialize)]
struct RunTaskCommand {
    header: CommandHeader,
    payload: RunTaskPayload,
}

#[derive(Debug, Serialize)]
struct CommandHeader {
    action: String,
    task_id: String,
    stream: String,
}

#[derive(Debug, Serialize)]
struct RunTaskPayload {
    task_group: String,
    task: String,
    function: String,
    model: String,
    parameters: RunTaskParameters,
    input: PayloadInput,
}

#[derive(Debug, Serialize)]
struct RunTaskParameters {
    text_type: String,
    voice: String,
    format: String,
    sample_rate: u32,
    volume: u32,
    rate: f32,
}

#[derive(Debug, Serialize)]
struct PayloadInput {
    text: String,
}

#[derive(Debug, Serialize)]
struct FinishTaskCommand {
    header: CommandHeader,
    payload: FinishTaskPayload,
}

#[derive(Debug, Serialize)]
struct FinishTaskPayload {
    input: EmptyInput,
}

#[derive(Debug, Serialize)]
struct EmptyInput {}

#[derive(Debug, Deserialize)]
struct WebSocketEvent {
    header: WebSocketEventHeader,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
struct WebSocketEventHeader {
    task_id: String,
    event: String,
    error_code: Option<String>,
    error_message: Option<String>,
}

impl AliyunTtsClient {
    pub fn new(api_key: String, option: SynthesisOption) -> Self {
        Self { api_key, option }
    }

    fn run_task_command(&self, task_id: &str, text: &str) -> RunTaskCommand {
        RunTaskCommand {
            header: CommandHeader {
                action: "run-task".to_string(),
                task_id: task_id.to_string(),
                stream: "duplex".to_string(),
            },
            payload: RunTaskPayload {
                task_group: "audio".to_string(),
                task: "tts".to_string(),
                function: "SpeechSynthesizer".to_string(),
                model: self.option.model.clone(),
                parameters: RunTaskParameters {
                    text_type: "PlainText".to_string(),
                    voice: self.option.voice.clone(),
                    format: self.option.format.clone(),
                    sample_rate: self.option.sample_rate,
                    volume: self.option.volume,
                    rate: self.option.speed,
                },
                input: PayloadInput {
                    text: text.to_string(),
                },
            },
        }
    }

    fn finish_task_command(&self, task_id: &str) -> FinishTaskCommand {
        FinishTaskCommand {
            header: CommandHeader {
                action: "finish-task".to_string(),
                task_id: task_id.to_string(),
                stream: "duplex".to_string(),
            },
            payload: FinishTaskPayload {
                input: EmptyInput {},
            },
        }
    }
}

#[async_trait]
impl SynthesisClient for AliyunTtsClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let task_id = Uuid::new_v4().to_string();
        let ws_url = self.option.endpoint.as_str();
        debug!("connecting to {}", ws_url);

        let mut request = ws_url.into_client_request()?;
        let headers = request.headers_mut();
        headers.insert("Authorization", format!("Bearer {}", self.api_key).parse()?);
        headers.insert("X-DashScope-DataInspection", "enable".parse()?);

        let (ws_stream, response) = connect_async(request).await?;
        if response.status() != StatusCode::SWITCHING_PROTOCOLS {
            return Err(anyhow!(
                "WebSocket connection failed: {}",
                response.status()
            ));
        }

        let (mut ws_sink, mut ws_stream) = ws_stream.split();

        let run_task_json = serde_json::to_string(&self.run_task_command(&task_id, text))?;
        debug!("sending run-task command: {}", run_task_json);
        ws_sink
            .send(Message::text(run_task_json))
            .await
            .map_err(|e| anyhow!("failed to send run-task command: {}", e))?;

        let finish_task_json = serde_json::to_string(&self.finish_task_command(&task_id))?;
        debug!("sending finish-task command: {}", finish_task_json);
        ws_sink
            .send(Message::text(finish_task_json))
            .await
            .map_err(|e| anyhow!("failed to send finish-task command: {}", e))?;

        // Binary frames carry audio; text frames carry task lifecycle events.
        let mut audio = Vec::new();
        let mut finished = false;
        while let Some(message) = ws_stream.next().await {
            match message? {
                Message::Text(event_json) => {
                    let event: WebSocketEvent = match serde_json::from_str(&event_json) {
                        Ok(event) => event,
                        Err(e) => {
                            warn!("failed to parse event message: {}", e);
                            continue;
                        }
                    };
                    match event.header.event.as_str() {
                        "task-started" | "result-generated" => {}
                        "task-finished" => {
                            debug!("task finished, {} bytes of audio", audio.len());
                            finished = true;
                            break;
                        }
                        "task-failed" => {
                            let error_code = event
                                .header
                                .error_code
                                .unwrap_or_else(|| "Unknown error".to_string());
                            let error_message = event
                                .header
                                .error_message
                                .unwrap_or_else(|| "Unknown error".to_string());
                            warn!("task failed: {} {}", error_code, error_message);
                            return Err(anyhow!(
                                "task failed: {} {}",
                                error_code,
                                error_message
                            ));
                        }
                        other => {
                            debug!("ignoring unknown event: {}", other);
                        }
                    }
                }
                Message::Binary(data) => {
                    debug!("received audio data: {} bytes", data.len());
                    audio.extend_from_slice(&data);
                }
                Message::Close(_) => {
                    debug!("WebSocket connection closed");
                    break;
                }
                _ => {}
            }
        }

        if !finished {
            return Err(anyhow!("connection closed before the task finished"));
        }
        Ok(audio)
    }
}
