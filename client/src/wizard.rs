//! Linear step wizard shared by the onboarding flows.
//!
//! A wizard walks a fixed, ordered list of steps declared by the step type
//! itself. Exactly one step is current; moving forward or back only ever
//! lands on the neighbouring declared step.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

/// A step in a fixed onboarding sequence.
pub trait WizardStep: Copy + Eq + std::fmt::Debug + 'static {
    /// All steps, first to last. Must be non-empty and free of repeats.
    const ORDER: &'static [Self];

    /// Label shown in the step indicator.
    fn title(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("already at the last step")]
    AtEnd,
    #[error("already at the first step")]
    AtStart,
}

/// Rendering state of one step relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Complete,
    Current,
    Upcoming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wizard<S: WizardStep> {
    index: usize,
    _step: std::marker::PhantomData<S>,
}

impl<S: WizardStep> Default for Wizard<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WizardStep> Wizard<S> {
    /// Start at the first declared step.
    pub fn new() -> Self {
        Self { index: 0, _step: std::marker::PhantomData }
    }

    pub fn current(&self) -> S {
        S::ORDER[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// The terminal step has no "advance".
    pub fn is_terminal(&self) -> bool {
        self.index + 1 >= S::ORDER.len()
    }

    /// Move to the next declared step.
    ///
    /// # Errors
    ///
    /// [`WizardError::AtEnd`] on the terminal step; the wizard is unchanged.
    pub fn advance(&mut self) -> Result<S, WizardError> {
        if self.is_terminal() {
            return Err(WizardError::AtEnd);
        }
        self.index += 1;
        Ok(self.current())
    }

    /// Move to the previous declared step.
    ///
    /// # Errors
    ///
    /// [`WizardError::AtStart`] on the first step; the wizard is unchanged.
    pub fn retreat(&mut self) -> Result<S, WizardError> {
        if self.is_first() {
            return Err(WizardError::AtStart);
        }
        self.index -= 1;
        Ok(self.current())
    }

    /// Where `step` sits relative to the current step.
    pub fn status_of(&self, step: S) -> StepStatus {
        let Some(pos) = S::ORDER.iter().position(|s| *s == step) else {
            return StepStatus::Upcoming;
        };
        match pos.cmp(&self.index) {
            std::cmp::Ordering::Less => StepStatus::Complete,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }

    /// Title and status of every step, in order, for the step indicator.
    pub fn indicator(&self) -> Vec<(&'static str, StepStatus)> {
        S::ORDER.iter().map(|s| (s.title(), self.status_of(*s))).collect()
    }
}
