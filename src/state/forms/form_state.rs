//! Customer form fields

use super::field::FormField;
use crate::dates;
use crate::submit::CustomerPayload;

/// Identifies one of the customer form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FullName,
    Address,
    CloseOutAmount,
    LoanAmount,
    RecordDate,
    NextDate,
    LegalOfficer,
}

impl FieldId {
    /// All fields in the order they appear in the wizard
    pub const ALL: [FieldId; 7] = [
        FieldId::FullName,
        FieldId::Address,
        FieldId::CloseOutAmount,
        FieldId::LoanAmount,
        FieldId::RecordDate,
        FieldId::NextDate,
        FieldId::LegalOfficer,
    ];
}

/// Reasons the form cannot be turned into a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadRejection {
    /// Required fields left empty (labels, in form order)
    Missing(Vec<String>),
    /// A date field that does not parse
    InvalidDate { label: String, error: dates::DateError },
}

impl PayloadRejection {
    pub fn message(&self) -> String {
        match self {
            Self::Missing(labels) => format!("Please fill in: {}", labels.join(", ")),
            Self::InvalidDate { label, error } => format!("{label}: {error}"),
        }
    }
}

/// Values entered into the customer form
#[derive(Debug, Clone)]
pub struct CustomerForm {
    pub full_name: FormField,
    pub address: FormField,
    pub close_out_amount: FormField,
    pub loan_amount: FormField,
    pub record_date: FormField,
    pub next_date: FormField,
    pub legal_officer: FormField,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("Full Name", "Full Name"),
            address: FormField::multiline("Address", "Address"),
            close_out_amount: FormField::text(
                "Close Out Amount in Words",
                "e.g. Ten thousand rupees",
            ),
            loan_amount: FormField::text("Loan Outstanding Amount", "e.g. Five thousand rupees"),
            record_date: FormField::date("Record Initiating Date"),
            next_date: FormField::date("Next Working Date"),
            legal_officer: FormField::text("Legal Officer Name", "Legal Officer Name"),
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Address => &self.address,
            FieldId::CloseOutAmount => &self.close_out_amount,
            FieldId::LoanAmount => &self.loan_amount,
            FieldId::RecordDate => &self.record_date,
            FieldId::NextDate => &self.next_date,
            FieldId::LegalOfficer => &self.legal_officer,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Address => &mut self.address,
            FieldId::CloseOutAmount => &mut self.close_out_amount,
            FieldId::LoanAmount => &mut self.loan_amount,
            FieldId::RecordDate => &mut self.record_date,
            FieldId::NextDate => &mut self.next_date,
            FieldId::LegalOfficer => &mut self.legal_officer,
        }
    }

    /// Labels of required fields that are still empty
    pub fn missing_labels(&self) -> Vec<String> {
        FieldId::ALL
            .iter()
            .map(|id| self.field(*id))
            .filter(|field| !field.is_filled())
            .map(|field| field.label.clone())
            .collect()
    }

    /// Build the request payload, formatting both dates
    pub fn to_payload(&self) -> Result<CustomerPayload, PayloadRejection> {
        let missing = self.missing_labels();
        if !missing.is_empty() {
            return Err(PayloadRejection::Missing(missing));
        }

        Ok(CustomerPayload {
            full_name: self.full_name.as_text().to_string(),
            address: self.address.as_text().to_string(),
            close_out_amount: self.close_out_amount.as_text().to_string(),
            record_date: format_field(&self.record_date)?,
            loan_amount: self.loan_amount.as_text().to_string(),
            next_date: format_field(&self.next_date)?,
            legal_officer: self.legal_officer.as_text().to_string(),
        })
    }
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

fn format_field(field: &FormField) -> Result<String, PayloadRejection> {
    dates::format_date(field.as_text()).map_err(|error| PayloadRejection::InvalidDate {
        label: field.label.clone(),
        error,
    })
}
