use super::{round_to, ScoreResult, ScoringProfile};
use crate::catalog::simple::Level;
use crate::catalog::{self, AxisId};
use crate::error::{Result, ScoreError};
use crate::input::{AssessmentInput, MetricValue};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Validated answers of the eight-axis profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleInput {
    answers: BTreeMap<AxisId, Level>,
}

impl SimpleInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the level chosen on a simple-profile axis.
    pub fn answer(&mut self, axis: AxisId, level: Level) -> Result<()> {
        if axis.profile() != ScoringProfile::Simple {
            return Err(ScoreError::UnknownAxis {
                name: axis.name().to_string(),
            });
        }
        self.answers.insert(axis, level);
        Ok(())
    }

    pub fn level(&self, axis: AxisId) -> Option<Level> {
        self.answers.get(&axis).copied()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Mean of the answered levels on a 0-10 scale. Unanswered axes do not count.
    ///
    /// A selected code weighs the same on every axis (`H` = 0.85, `M` = 0.62,
    /// `L` = 0.27), as in the published calculator.
    pub fn score(&self) -> ScoreResult {
        if self.answers.is_empty() {
            return ScoreResult::new(ScoringProfile::Simple, 0.0, None);
        }

        let total: f64 = self.answers.values().map(|level| level.score()).sum();
        let mean = total / self.answers.len() as f64;
        let final_score = round_to(mean * 10.0, 1);

        trace!(answered = self.answers.len(), mean, final_score, "simple score");
        ScoreResult::new(ScoringProfile::Simple, final_score, None)
    }
}

impl TryFrom<&AssessmentInput> for SimpleInput {
    type Error = ScoreError;

    fn try_from(input: &AssessmentInput) -> Result<Self> {
        let mut simple = SimpleInput::new();
        for (axis, value) in input.answered() {
            if axis.profile() != ScoringProfile::Simple {
                return Err(ScoreError::UnknownAxis {
                    name: axis.name().to_string(),
                });
            }
            let code = match value {
                MetricValue::Code(code) => code.as_str(),
                MetricValue::Number(number) => {
                    return Err(ScoreError::UnknownOptionCode {
                        axis,
                        code: number.to_string(),
                    })
                }
            };

            let option = catalog::lookup(axis, code)?;
            let level = Level::from_code(option.code).ok_or_else(|| ScoreError::UnknownOptionCode {
                axis,
                code: code.to_string(),
            })?;
            simple.answer(axis, level)?;
        }
        Ok(simple)
    }
}

/// Scores a partially or fully answered simple-profile assessment.
pub fn compute_simple_score(input: &AssessmentInput) -> Result<ScoreResult> {
    let simple = SimpleInput::try_from(input).map_err(|err| {
        debug!(error = %err, "rejected simple-profile input");
        err
    })?;
    Ok(simple.score())
}
