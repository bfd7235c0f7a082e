use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("byte codec error: {0}")]
    ByteCodec(#[from] kotoba_bytecodec::Error),

    #[error("digest error: {0}")]
    Digest(#[from] kotoba_digest::Error),

    #[error("escape error: {0}")]
    Escape(#[from] kotoba_escape::Error),

    #[error("URL codec error: {0}")]
    Url(#[from] kotoba_url::Error),

    #[error("tree conversion error: {0}")]
    Tree(#[from] kotoba_tree::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("input is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
