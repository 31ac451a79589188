use thiserror::Error;

use jewelai_core::DomainError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report policy: {0}")]
    Policy(#[from] DomainError),

    #[error("failed to render report: {0}")]
    Render(#[from] std::fmt::Error),
}
