use std::process::ExitCode;

use thiserror::Error;

use crate::config::ConfigError;
use crate::report::ReportError;
use crate::toggl::TogglError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Toggl(#[from] TogglError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl AppError {
    /// Process exit status for this failure category.
    pub fn code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Toggl(err) | AppError::Report(ReportError::Lookup(err)) => toggl_code(err),
            AppError::Report(_) => 5,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

fn toggl_code(err: &TogglError) -> u8 {
    match err {
        TogglError::Decode { .. } => 4,
        _ => 3,
    }
}
