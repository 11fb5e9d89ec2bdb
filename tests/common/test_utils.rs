use parley::config::{Config, LlmConfig, LogsConfig, ServerConfig};
use tempfile::TempDir;
use tokio::fs;

/// Create an LLM configuration pointing at the given endpoint
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gpt-4o-mini".to_string(),
        max_tokens: 256,
        temperature: 0.0,
    }
}

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        llm: create_test_llm_config("https://api.openai.com/v1"),
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> parley::Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}
