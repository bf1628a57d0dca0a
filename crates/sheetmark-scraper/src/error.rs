use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("sheet {sheet_id}: response has no setResponse(...) envelope")]
    MissingEnvelope { sheet_id: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("sheet {sheet_id}: payload has no table rows")]
    MissingTable { sheet_id: String },

    #[error("sheet {sheet_id}: no BrandName column in header")]
    MissingBrandColumn { sheet_id: String },
}
