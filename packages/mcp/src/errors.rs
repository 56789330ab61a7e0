use thiserror::Error;

pub type McpResult<T> = Result<T, McpError>;

#[derive(Error, Debug)]
pub enum McpError {
    #[error("Failed to reach the MCP endpoint: {0}")]
    Http(#[from] ureq::Error),

    #[error("Failed to decode the MCP response: {0}")]
    Decode(#[source] ureq::Error),
}
