use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// LLM provider configuration
    pub llm: LlmConfig,
    /// Overall timeout for a single outbound LLM request, in seconds
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "ollama" or "openai"
    pub provider: String,
    /// Base URL for the LLM API
    pub base_url: String,
    /// Model name for answer generation
    pub chat_model: String,
    /// Model name for embeddings
    pub embedding_model: String,
    /// API key (only needed for cloud providers)
    pub api_key: Option<String>,
    /// Upper bound on generated tokens per answer
    pub max_new_tokens: u32,
    /// Sampling temperature for generation
    pub temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            llm: LlmConfig::default(),
            request_timeout_secs: 120,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            base_url: "http://localhost:11434".to_string(),
            // Ollama's names for TinyLlama-1.1B-Chat and all-MiniLM-L6-v2
            chat_model: "tinyllama".to_string(),
            embedding_model: "all-minilm".to_string(),
            api_key: None,
            max_new_tokens: 150,
            temperature: 0.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("RAG_API_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(val) = std::env::var("RAG_API_REQUEST_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.request_timeout_secs = v;
            }
        }
        if let Ok(provider) = std::env::var("LLM_PROVIDER") {
            config.llm.provider = provider;
        }
        if let Ok(url) = std::env::var("LLM_BASE_URL") {
            config.llm.base_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("LLM_CHAT_MODEL") {
            config.llm.chat_model = model;
        }
        if let Ok(model) = std::env::var("LLM_EMBEDDING_MODEL") {
            config.llm.embedding_model = model;
        }
        if let Ok(key) = std::env::var("LLM_API_KEY") {
            config.llm.api_key = Some(key);
        }
        if let Ok(val) = std::env::var("LLM_MAX_NEW_TOKENS") {
            if let Ok(v) = val.parse() {
                config.llm.max_new_tokens = v;
            }
        }
        if let Ok(val) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(v) = val.parse() {
                config.llm.temperature = v;
            }
        }

        config
    }

    /// Config pointing at an LLM server other than the default, e.g. a mock.
    pub fn with_llm_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let mut config = Self::default();
        config.llm.base_url = base_url.trim_end_matches('/').to_string();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_generate_150_tokens() {
        let config = Config::default();
        assert_eq!(config.llm.max_new_tokens, 150);
        assert_eq!(config.llm.provider, "ollama");
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_with_llm_base_url_keeps_other_defaults() {
        let config = Config::with_llm_base_url("http://127.0.0.1:9999");
        assert_eq!(config.llm.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.llm.embedding_model, "all-minilm");
        assert_eq!(config.bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn test_with_llm_base_url_trims_trailing_slash() {
        let config = Config::with_llm_base_url("http://host:11434/");
        assert_eq!(config.llm.base_url, "http://host:11434");
    }

    // All env overrides live in this one test so parallel tests never see
    // half-applied variables.
    #[test]
    fn test_from_env_overrides() {
        let vars = [
            ("RAG_API_BIND_ADDR", "0.0.0.0:9100"),
            ("RAG_API_REQUEST_TIMEOUT_SECS", "30"),
            ("LLM_PROVIDER", "openai"),
            ("LLM_BASE_URL", "http://x/"),
            ("LLM_CHAT_MODEL", "gpt-4o-mini"),
            ("LLM_EMBEDDING_MODEL", "text-embedding-3-small"),
            ("LLM_API_KEY", "sk-test"),
            ("LLM_MAX_NEW_TOKENS", "abc"),
            ("LLM_TEMPERATURE", "0.3"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let config = Config::from_env();

        for (key, _) in vars {
            std::env::remove_var(key);
        }

        assert_eq!(config.bind_addr, "0.0.0.0:9100");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.base_url, "http://x");
        assert_eq!(config.llm.chat_model, "gpt-4o-mini");
        assert_eq!(config.llm.embedding_model, "text-embedding-3-small");
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        // Unparseable numbers keep the default
        assert_eq!(config.llm.max_new_tokens, 150);
        assert!((config.llm.temperature - 0.3).abs() < f32::EPSILON);
    }
}
