use thiserror::Error;

pub type Result<T> = std::result::Result<T, BranchlocError>;

#[derive(Error, Debug)]
pub enum BranchlocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with status {code}")]
    ToolExit { program: String, code: i32 },
    #[error("Ref listing mismatch for {namespace}: {names} names vs {revisions} revisions")]
    RefMismatch {
        namespace: String,
        names: usize,
        revisions: usize,
    },
}
