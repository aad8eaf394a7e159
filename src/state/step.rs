//! Wizard steps

use super::forms::FieldId;

/// One page of the customer form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    FinancialDetails,
    Dates,
    Confirmation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::PersonalInfo,
        WizardStep::FinancialDetails,
        WizardStep::Dates,
        WizardStep::Confirmation,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::FinancialDetails => 1,
            Self::Dates => 2,
            Self::Confirmation => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::FinancialDetails => "Financial Details",
            Self::Dates => "Dates",
            Self::Confirmation => "Confirmation",
        }
    }

    /// Fields shown on this step, in focus order
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Self::PersonalInfo => &[FieldId::FullName, FieldId::Address],
            Self::FinancialDetails => &[FieldId::CloseOutAmount, FieldId::LoanAmount],
            Self::Dates => &[FieldId::RecordDate, FieldId::NextDate, FieldId::LegalOfficer],
            Self::Confirmation => &[],
        }
    }

    /// Step reached with "Next"; only the first two steps have one
    pub fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::FinancialDetails),
            Self::FinancialDetails => Some(Self::Dates),
            Self::Dates | Self::Confirmation => None,
        }
    }

    /// Step reached with "Back"
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::FinancialDetails => Some(Self::PersonalInfo),
            Self::Dates => Some(Self::FinancialDetails),
            Self::Confirmation => Some(Self::Dates),
        }
    }

    /// Whether the form is submitted from this step
    pub fn is_submit_step(self) -> bool {
        self == Self::Dates
    }

    /// Buttons shown under this step, left to right
    pub fn buttons(self) -> Vec<WizardButton> {
        let mut buttons = Vec::with_capacity(2);
        if self.prev().is_some() {
            buttons.push(WizardButton::Back);
        }
        if self.next().is_some() {
            buttons.push(WizardButton::Next);
        } else if self.is_submit_step() {
            buttons.push(WizardButton::Submit);
        }
        buttons
    }
}

/// Buttons on the wizard's button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardButton {
    Back,
    Next,
    Submit,
}

impl WizardButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next ›",
            Self::Submit => "Submit ✓",
        }
    }
}
