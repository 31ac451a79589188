use crate::error::AiError;

/// A single AI inference unit.
///
/// Jobs receive their input up front and do not touch inventory state; the
/// caller decides what to do with the output.
pub trait AiJob: Send + Sync {
    type Input: Send + Sync;
    type Output;

    /// The input the job will run inference on.
    fn input(&self) -> &Self::Input;

    /// Execute inference and return the validated result.
    fn run(&self) -> Result<Self::Output, AiError>;
}
