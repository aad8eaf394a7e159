//! Application state and core logic

use crate::state::{AppState, WizardButton};
use crate::submit::{ResponseData, SubmitClientTrait, SubmitError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

type SubmitOutcome = Result<ResponseData, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Endpoint the form is posted to (shown in the status bar)
    pub endpoint: String,
    /// Client used for submissions
    client: Arc<dyn SubmitClientTrait>,
    /// Results of spawned submissions
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn SubmitClientTrait>, endpoint: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            endpoint: endpoint.into(),
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let shortcut = crate::platform::has_shortcut_modifier(key.modifiers);
        let on_buttons = self.state.is_buttons_row_active();

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if shortcut => {
                self.quit = true;
            }
            KeyCode::Char('s') if shortcut => self.press(WizardButton::Submit),
            KeyCode::Char('n') if shortcut => self.press(WizardButton::Next),
            KeyCode::Char('b') if shortcut => self.press(WizardButton::Back),
            KeyCode::Char('u') if shortcut => self.state.form_clear_field(),
            KeyCode::Esc => self.state.dismiss_error(),
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            // Button row navigation
            KeyCode::Left | KeyCode::Char('h') if on_buttons => self.state.prev_button(),
            KeyCode::Right | KeyCode::Char('l') if on_buttons => self.state.next_button(),
            KeyCode::Enter if on_buttons => {
                if let Some(button) = self.state.selected_button() {
                    self.press(button);
                }
            }
            // Field input
            KeyCode::Enter => self.handle_field_enter(),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form_input_char(c)
            }
            _ => {}
        }
    }

    /// Enter inside a field: newline in the address, otherwise move on.
    /// On the last field of a step it presses the step's primary button.
    fn handle_field_enter(&mut self) {
        if self.state.is_active_field_multiline() {
            self.state.form_input_char('\n');
            return;
        }
        let last_field = self.state.active_step.fields().len().saturating_sub(1);
        if self.state.active_form_field >= last_field {
            if self.state.can_go_next() {
                self.press(WizardButton::Next);
            } else if self.state.active_step.is_submit_step() {
                self.press(WizardButton::Submit);
            }
        } else {
            self.state.next_form_field();
        }
    }

    /// Activate a wizard button if the current step offers it
    pub fn press(&mut self, button: WizardButton) {
        if !self.state.buttons().contains(&button) {
            debug!("{button:?} not available on {:?}", self.state.active_step);
            return;
        }
        match button {
            WizardButton::Back => {
                self.state.prev_step();
            }
            WizardButton::Next => {
                self.state.next_step();
            }
            WizardButton::Submit => {
                self.submit();
            }
        }
    }

    /// Start a submission in the background.
    ///
    /// Returns false if nothing was sent (rejected locally or already loading).
    pub fn submit(&mut self) -> bool {
        let Some(payload) = self.state.begin_submission() else {
            return false;
        };

        info!("submitting customer form to {}", self.endpoint);
        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = client.submit(&payload).await;
            // The receiver lives as long as the app
            let _ = tx.send(outcome);
        });
        true
    }

    /// Apply any finished submission. Returns true if state changed.
    pub fn poll_submission(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.finish_submission(outcome);
            changed = true;
        }
        changed
    }

    /// Wait for the in-flight submission, if any, and apply it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if !self.state.is_loading {
            return;
        }
        if let Some(outcome) = self.outcome_rx.recv().await {
            self.state.finish_submission(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, WizardStep};
    use crate::submit::{MockSubmitClientTrait, GENERIC_FAILURE};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(mock: MockSubmitClientTrait) -> App {
        App::new(Arc::new(mock), "http://localhost:8000/translate")
    }

    fn idle_app() -> App {
        let mut mock = MockSubmitClientTrait::new();
        mock.expect_submit().never();
        app_with(mock)
    }

    /// Fill every field through the keyboard, ending on the dates step
    fn fill_form(app: &mut App) {
        type_text(app, "Jane Perera");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "12 Galle Road");
        app.handle_key(key(KeyCode::Enter));
        type_text(app, "Colombo");
        app.handle_key(ctrl('n'));

        type_text(app, "Ten thousand");
        app.handle_key(key(KeyCode::Enter));
        type_text(app, "Five thousand");
        app.handle_key(key(KeyCode::Enter));

        type_text(app, "2024-01-03");
        app.handle_key(key(KeyCode::Enter));
        type_text(app, "2024-01-04");
        app.handle_key(key(KeyCode::Enter));
        type_text(app, "A. Silva");
    }

    fn response(value: serde_json::Value) -> ResponseData {
        value.as_object().cloned().unwrap()
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            let app = idle_app();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = idle_app();
            app.handle_key(ctrl('c'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_q_quits() {
            let mut app = idle_app();
            app.handle_key(ctrl('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = idle_app();
            type_text(&mut app, "Jane");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.full_name.as_text(), "Jan");
        }

        #[test]
        fn test_plain_q_is_text() {
            let mut app = idle_app();
            type_text(&mut app, "q");
            assert!(!app.should_quit());
            assert_eq!(app.state.form.full_name.as_text(), "q");
        }

        #[test]
        fn test_ctrl_u_clears_field() {
            let mut app = idle_app();
            type_text(&mut app, "Jane");
            app.handle_key(ctrl('u'));
            assert_eq!(app.state.form.full_name.as_text(), "");
        }

        #[test]
        fn test_enter_in_address_adds_newline() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "a");
            app.handle_key(key(KeyCode::Enter));
            type_text(&mut app, "b");
            assert_eq!(app.state.form.address.as_text(), "a\nb");
            assert_eq!(app.state.active_step, WizardStep::PersonalInfo);
        }

        #[test]
        fn test_enter_moves_to_next_field() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.active_field_id(), Some(FieldId::Address));
        }

        #[test]
        fn test_next_from_step_zero() {
            let mut app = idle_app();
            app.handle_key(ctrl('n'));
            assert_eq!(app.state.active_step, WizardStep::FinancialDetails);
        }

        #[test]
        fn test_back_from_step_one() {
            let mut app = idle_app();
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('b'));
            assert_eq!(app.state.active_step, WizardStep::PersonalInfo);
        }

        #[test]
        fn test_next_ignored_on_dates_step() {
            let mut app = idle_app();
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('n'));
            assert_eq!(app.state.active_step, WizardStep::Dates);
        }

        #[test]
        fn test_submit_ignored_before_dates_step() {
            let mut app = idle_app();
            app.handle_key(ctrl('s'));
            assert!(!app.state.is_loading);
            assert!(app.state.error_message.is_none());
        }

        #[test]
        fn test_button_row_enter_presses_selected() {
            let mut app = idle_app();
            app.handle_key(ctrl('n'));
            app.handle_key(key(KeyCode::BackTab));
            assert!(app.state.is_buttons_row_active());
            assert_eq!(app.state.selected_button(), Some(WizardButton::Next));

            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.state.selected_button(), Some(WizardButton::Back));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.active_step, WizardStep::PersonalInfo);
        }

        #[test]
        fn test_esc_dismisses_error() {
            let mut app = idle_app();
            app.state.error_message = Some("boom".to_string());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.state.error_message.is_none());
        }

        #[test]
        fn test_date_field_filters_letters() {
            let mut app = idle_app();
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('n'));
            type_text(&mut app, "2024x-01-03");
            assert_eq!(app.state.form.record_date.as_text(), "2024-01-03");
        }

        #[test]
        fn test_missing_fields_block_submit() {
            let mut app = idle_app();
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('n'));
            app.handle_key(ctrl('s'));
            assert!(!app.state.is_loading);
            assert!(app
                .state
                .error_message
                .as_deref()
                .unwrap()
                .starts_with("Please fill in: Full Name"));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_shows_response_on_confirmation() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .withf(|payload| {
                    payload.full_name == "Jane Perera"
                        && payload.address == "12 Galle Road\nColombo"
                        && payload.record_date == "3rd January 2024"
                        && payload.next_date == "4th January 2024"
                        && payload.legal_officer == "A. Silva"
                })
                .times(1)
                .returning(|_| Ok(response(json!({"a": "b"}))));
            let mut app = app_with(mock);

            fill_form(&mut app);
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.is_loading);

            app.wait_for_submission().await;
            assert_eq!(app.state.response_data, Some(response(json!({"a": "b"}))));
            assert_eq!(app.state.active_step, WizardStep::Confirmation);
            assert!(app.state.error_message.is_none());
            assert!(!app.state.is_loading);
        }

        #[tokio::test]
        async fn test_validation_error_keeps_step() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit().times(1).returning(|_| {
                Err(SubmitError::from_error_body(
                    422,
                    br#"{"detail":[{"msg":"required"}]}"#,
                ))
            });
            let mut app = app_with(mock);

            fill_form(&mut app);
            app.handle_key(ctrl('s'));
            app.wait_for_submission().await;

            assert!(app.state.error_message.as_deref().unwrap().contains("required"));
            assert_eq!(app.state.active_step, WizardStep::Dates);
            assert!(app.state.response_data.is_none());
        }

        #[tokio::test]
        async fn test_network_error_resets_loading() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::Network("connection refused".to_string())));
            let mut app = app_with(mock);

            fill_form(&mut app);
            app.handle_key(ctrl('s'));
            app.wait_for_submission().await;

            assert_eq!(app.state.error_message.as_deref(), Some(GENERIC_FAILURE));
            assert!(!app.state.is_loading);
        }

        #[tokio::test]
        async fn test_double_submit_sends_once() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Ok(response(json!({"ok": true}))));
            let mut app = app_with(mock);

            fill_form(&mut app);
            assert!(app.submit());
            assert!(!app.submit());
            app.wait_for_submission().await;
            assert_eq!(app.state.active_step, WizardStep::Confirmation);
        }

        #[tokio::test]
        async fn test_malformed_date_sends_nothing() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit().never();
            let mut app = app_with(mock);

            fill_form(&mut app);
            app.state.form.record_date.set_text("2024-02-31");
            assert!(!app.submit());
            assert!(app
                .state
                .error_message
                .as_deref()
                .unwrap()
                .starts_with("Record Initiating Date"));
        }

        #[tokio::test]
        async fn test_poll_submission_applies_outcome() {
            let mut mock = MockSubmitClientTrait::new();
            mock.expect_submit()
                .returning(|_| Ok(response(json!({"status": "done"}))));
            let mut app = app_with(mock);

            fill_form(&mut app);
            app.submit();
            while !app.poll_submission() {
                tokio::task::yield_now().await;
            }
            assert!(!app.state.is_loading);
            assert_eq!(app.state.active_step, WizardStep::Confirmation);
        }

        #[test]
        fn test_poll_without_submission_is_noop() {
            let mut app = idle_app();
            assert!(!app.poll_submission());
            tokio_test::block_on(app.wait_for_submission());
            assert!(!app.state.is_loading);
        }
    }
}
