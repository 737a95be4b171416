use crate::config::QueryParams;
use crate::core::registry::{self, Exercise};
use crate::data::Dataset;
use crate::domain::ports::ReportSink;
use crate::utils::error::{QueryError, Result};

/// Runs exercises against a sink: query, render, publish.
pub struct ExerciseEngine<S: ReportSink> {
    dataset: Dataset,
    params: QueryParams,
    sink: S,
}

impl<S: ReportSink> ExerciseEngine<S> {
    pub fn new(dataset: Dataset, params: QueryParams, sink: S) -> Self {
        Self {
            dataset,
            params,
            sink,
        }
    }

    /// Runs every registered exercise in order. Returns how many reports
    /// were published.
    pub fn run_all(&mut self) -> Result<usize> {
        let exercises = registry::registry();
        tracing::info!("Running {} exercises", exercises.len());

        for exercise in &exercises {
            self.run_exercise(exercise)?;
        }

        Ok(exercises.len())
    }

    pub fn run_one(&mut self, title: &str) -> Result<()> {
        let exercise = registry::find(title).ok_or_else(|| QueryError::UnknownExercise {
            title: title.to_string(),
        })?;
        self.run_exercise(&exercise)
    }

    fn run_exercise(&mut self, exercise: &Exercise) -> Result<()> {
        tracing::debug!("📊 Rendering exercise {}", exercise.title);

        let mut report = String::new();
        (exercise.render)(&self.dataset, &self.params, &mut report)?;

        tracing::debug!(
            "Publishing exercise {} ({} bytes)",
            exercise.title,
            report.len()
        );
        self.sink.publish(exercise.title, &report)
    }

    /// Hands the sink back, for callers that need to inspect what was
    /// published.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
