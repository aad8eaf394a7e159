//! Application state definitions

use tracing::{debug, info, warn};

use super::forms::{CustomerForm, FieldId, FormField};
use super::step::{WizardButton, WizardStep};
use crate::submit::{CustomerPayload, ResponseData, SubmitError};

/// State of the customer form wizard
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Field values
    pub form: CustomerForm,
    /// Current wizard page
    pub active_step: WizardStep,
    /// Focus within the step; `fields().len()` is the button row
    pub active_form_field: usize,
    /// Selected button when the button row has focus
    pub form_selected_button: usize,
    /// Response of the last successful submission
    pub response_data: Option<ResponseData>,
    /// Message from the last failed submission
    pub error_message: Option<String>,
    /// True while a submission is in flight
    pub is_loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.reset_focus();
        state
    }

    // === Step navigation ===

    pub fn can_go_next(&self) -> bool {
        self.active_step.next().is_some()
    }

    pub fn can_go_back(&self) -> bool {
        self.active_step.prev().is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.active_step.is_submit_step() && !self.is_loading
    }

    /// Advance one step. Returns false when "Next" is unavailable.
    pub fn next_step(&mut self) -> bool {
        match self.active_step.next() {
            Some(step) => {
                self.go_to(step);
                true
            }
            None => false,
        }
    }

    /// Go back one step. Returns false when "Back" is unavailable.
    pub fn prev_step(&mut self) -> bool {
        match self.active_step.prev() {
            Some(step) => {
                self.go_to(step);
                true
            }
            None => false,
        }
    }

    fn go_to(&mut self, step: WizardStep) {
        debug!("step {:?} -> {:?}", self.active_step, step);
        self.active_step = step;
        self.reset_focus();
    }

    fn reset_focus(&mut self) {
        // Steps without fields start on the button row
        self.active_form_field = 0;
        self.form_selected_button = self.buttons().len().saturating_sub(1);
    }

    // === Focus ===

    fn field_count(&self) -> usize {
        self.active_step.fields().len()
    }

    /// Number of focus targets on this step (fields plus the button row)
    fn focus_count(&self) -> usize {
        self.field_count() + 1
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_form_field >= self.field_count()
    }

    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.focus_count();
    }

    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.focus_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn active_field_id(&self) -> Option<FieldId> {
        self.active_step
            .fields()
            .get(self.active_form_field)
            .copied()
    }

    pub fn active_field(&self) -> Option<&FormField> {
        self.active_field_id().map(|id| self.form.field(id))
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.active_field_id().map(|id| self.form.field_mut(id))
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field().is_some_and(FormField::is_multiline)
    }

    pub fn buttons(&self) -> Vec<WizardButton> {
        self.active_step.buttons()
    }

    pub fn selected_button(&self) -> Option<WizardButton> {
        self.buttons().get(self.form_selected_button).copied()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        let count = self.buttons().len();
        if count > 0 {
            self.form_selected_button = (self.form_selected_button + 1) % count;
        }
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        let count = self.buttons().len();
        if count == 0 {
            return;
        }
        if self.form_selected_button == 0 {
            self.form_selected_button = count - 1;
        } else {
            self.form_selected_button -= 1;
        }
    }

    // === Editing ===

    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    /// Clear the focused field
    pub fn form_clear_field(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.clear();
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    // === Submission ===

    /// Start a submission attempt.
    ///
    /// Clears the previous response and error. Returns the payload to send,
    /// or `None` if the attempt was rejected locally (the reason is left in
    /// `error_message`) or is not allowed right now.
    pub fn begin_submission(&mut self) -> Option<CustomerPayload> {
        if !self.can_submit() {
            return None;
        }
        self.response_data = None;
        self.error_message = None;

        match self.form.to_payload() {
            Ok(payload) => {
                self.is_loading = true;
                Some(payload)
            }
            Err(rejection) => {
                let message = rejection.message();
                warn!("submission rejected: {message}");
                self.error_message = Some(message);
                None
            }
        }
    }

    /// Record the outcome of the in-flight submission
    pub fn finish_submission(&mut self, result: Result<ResponseData, SubmitError>) {
        self.is_loading = false;
        match result {
            Ok(data) => {
                info!("submission succeeded with {} response field(s)", data.len());
                self.error_message = None;
                self.response_data = Some(data);
                self.go_to(WizardStep::Confirmation);
            }
            Err(err) => {
                warn!("submission failed: {}", err.cause());
                self.response_data = None;
                self.error_message = Some(err.to_string());
            }
        }
    }
}
