use crate::error::AiError;
use crate::job::AiJob;

/// Feature switch for AI-backed functionality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AiFeature {
    Enabled,
    Disabled,
}

impl AiFeature {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            AiFeature::Enabled
        } else {
            AiFeature::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, AiFeature::Enabled)
    }
}

/// Scheduler/executor for AI jobs.
pub trait AiScheduler: Send + Sync {
    fn feature(&self) -> AiFeature;

    fn run<J: AiJob>(&self, job: J) -> Result<J::Output, AiError> {
        if !self.feature().is_enabled() {
            tracing::debug!("AI job skipped: feature disabled");
            return Err(AiError::Disabled);
        }
        job.run()
    }
}

/// Simple synchronous scheduler that runs jobs immediately in-process.
#[derive(Debug, Copy, Clone)]
pub struct LocalAiScheduler {
    feature: AiFeature,
}

impl LocalAiScheduler {
    pub fn new(feature: AiFeature) -> Self {
        Self { feature }
    }
}

impl AiScheduler for LocalAiScheduler {
    fn feature(&self) -> AiFeature {
        self.feature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(String);

    impl AiJob for Echo {
        type Input = String;
        type Output = String;

        fn input(&self) -> &String {
            &self.0
        }

        fn run(&self) -> Result<String, AiError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn enabled_scheduler_runs_jobs() {
        let scheduler = LocalAiScheduler::new(AiFeature::Enabled);
        assert_eq!(scheduler.run(Echo("hi".into())).unwrap(), "hi");
    }

    #[test]
    fn disabled_scheduler_refuses_jobs() {
        let scheduler = LocalAiScheduler::new(AiFeature::from_flag(false));
        assert!(matches!(scheduler.run(Echo("hi".into())), Err(AiError::Disabled)));
    }
}
