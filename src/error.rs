use thiserror::Error;

/// A failure that aborts a whole pick-list run. Malformed individual rows
/// never produce one of these; they are dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("{}", schema_message(.missing))]
    Schema { missing: Vec<String> },

    #[error("failed to parse report: {message}")]
    Parse { message: String },
}

/// Failure to produce the printed pick list.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render HTML: {0}")]
    Html(#[from] askama::Error),
}

fn schema_message(missing: &[String]) -> String {
    let noun = if missing.len() == 1 { "header" } else { "headers" };
    format!("missing required {noun}: {}", missing.join(", "))
}
