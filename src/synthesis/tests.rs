use super::*;
use anyhow::anyhow;
use mockall::mock;

mock! {
    pub TtsClient {}

    #[async_trait]
    impl SynthesisClient for TtsClient {
        async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
    }
}

#[tokio::test]
async fn test_mock_synthesis_returns_payload() {
    let mut mock_client = MockTtsClient::new();
    mock_client
        .expect_synthesize()
        .returning(|text| Ok(vec![1u8; text.len() * 100]));

    let text = "测试文本合成";
    let result = mock_client.synthesize(text).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), text.len() * 100);
}

#[tokio::test]
async fn test_mock_synthesis_surfaces_provider_error() {
    let mut mock_client = MockTtsClient::new();
    mock_client
        .expect_synthesize()
        .returning(|_| Err(anyhow!("task failed: InvalidParameter voice not found")));

    let result = mock_client.synthesize("hello").await;
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("InvalidParameter"));
}

#[test]
fn test_option_defaults() {
    let option = SynthesisOption::default();
    assert_eq!(option.model, DEFAULT_MODEL);
    assert_eq!(option.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(option.format, "mp3");
    assert_eq!(option.sample_rate, 22050);
    assert_eq!(option.volume, 50);
    assert_eq!(option.speed, 1.0);
    assert!(option.voice.is_empty());
}
