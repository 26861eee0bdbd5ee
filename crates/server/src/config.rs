use anyhow::Context as _;
use docrag_chunker::ChunkerConfig;
use docrag_vector_store::ChromaConfig;
use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP listen port
    pub port: u16,
    /// Credential for the embedding and completion calls
    pub openai_api_key: String,
    /// Override for an OpenAI-compatible endpoint
    pub openai_base_url: Option<String>,
    /// Chunking window parameters
    pub chunker: ChunkerConfig,
    /// Remote vector store addressing; `None` selects the in-memory variant
    pub chroma: Option<ChromaConfig>,
    /// Static frontend directory served for unmatched routes
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from `.env` and the process environment.
    ///
    /// # Errors
    /// Returns an error when `OPENAI_API_KEY` is not set.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        let openai_api_key =
            env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is required")?;
        let openai_base_url = env::var("OPENAI_BASE_URL").ok();

        let size = env::var("CHUNK_SIZE")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(docrag_chunker::DEFAULT_CHUNK_SIZE);
        let overlap = env::var("CHUNK_OVERLAP")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(docrag_chunker::DEFAULT_CHUNK_OVERLAP);

        let chroma = env::var("CHROMA_URL").ok().map(|url| {
            let mut config = ChromaConfig::new(url);
            config.api_key = env::var("CHROMA_API_KEY").ok();
            if let Ok(tenant) = env::var("CHROMA_TENANT") {
                config.tenant = tenant;
            }
            if let Ok(database) = env::var("CHROMA_DATABASE") {
                config.database = database;
            }
            if let Ok(collection) = env::var("CHROMA_COLLECTION") {
                config.collection = collection;
            }
            config
        });

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".to_string())
            .into();

        Ok(Self {
            port,
            openai_api_key,
            openai_base_url,
            chunker: ChunkerConfig::new(size, overlap),
            chroma,
            static_dir,
        })
    }
}
