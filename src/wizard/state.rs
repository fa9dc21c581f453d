//! Guided form state machine
//!
//! Three steps: pick a model, enter statistics, view the result. The
//! current step carries whatever it needs, so a result can never exist
//! without a model and validated input.

use crate::errors::ValidationError;
use crate::projection::PredictionSummary;
use crate::types::CompletionModel;
use crate::validation::{validate, FormFields};
use tracing::info;

/// Where the user is in the form
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    SelectModel,
    EnterStatistics(CompletionModel),
    ShowResult(Box<PredictionSummary>),
}

impl Step {
    /// 1-based step number
    pub fn number(&self) -> usize {
        match self {
            Step::SelectModel => 1,
            Step::EnterStatistics(_) => 2,
            Step::ShowResult(_) => 3,
        }
    }
}

/// Form state threaded through the session's input handlers
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    step: Step,
    fields: FormFields,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::SelectModel,
            fields: FormFields::new(),
        }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Model chosen in step 1, if any
    pub fn model(&self) -> Option<CompletionModel> {
        match &self.step {
            Step::SelectModel => None,
            Step::EnterStatistics(model) => Some(*model),
            Step::ShowResult(summary) => Some(summary.model),
        }
    }

    /// Latest prediction, when on the result step
    pub fn result(&self) -> Option<&PredictionSummary> {
        match &self.step {
            Step::ShowResult(summary) => Some(summary),
            _ => None,
        }
    }

    /// Choose a model and move on to the statistics step.
    ///
    /// Field values survive, so going back and picking another model keeps
    /// what was typed.
    pub fn select_model(&mut self, model: CompletionModel) {
        info!(model = %model, "model selected");
        self.step = Step::EnterStatistics(model);
    }

    /// Validate the current fields and compute the prediction.
    ///
    /// Only meaningful on the statistics step; on any other step this
    /// returns `Ok(None)` and nothing changes. On a validation failure the
    /// step and fields are left as they were.
    pub fn submit(&mut self) -> Result<Option<&PredictionSummary>, ValidationError> {
        let model = match self.step {
            Step::EnterStatistics(model) => model,
            _ => return Ok(None),
        };

        let input = validate(&self.fields)?;
        let summary = PredictionSummary::compute(input, model);
        info!(
            model = %model,
            rounded_final = summary.rounded_final,
            capped = summary.is_capped(),
            "prediction ready"
        );
        self.step = Step::ShowResult(Box::new(summary));
        Ok(self.result())
    }

    /// Step back one page. Returns false when already on the first step.
    pub fn back(&mut self) -> bool {
        match &self.step {
            Step::SelectModel => false,
            Step::EnterStatistics(_) => {
                self.step = Step::SelectModel;
                true
            }
            Step::ShowResult(summary) => {
                self.fields = FormFields::from_input(&summary.input);
                self.step = Step::EnterStatistics(summary.model);
                true
            }
        }
    }

    /// Clear everything and return to model selection
    pub fn reset(&mut self) {
        info!("form reset");
        *self = Self::new();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
