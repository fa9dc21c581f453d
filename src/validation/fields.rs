//! Raw statistics form fields

use crate::types::PredictionInput;

/// One of the four numeric inputs of the statistics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TotalStudents,
    FulfilledStudents,
    TotalDays,
    DaysLeft,
}

impl FormField {
    /// Fields in the order the form asks for them
    pub const PROMPT_ORDER: [FormField; 4] = [
        FormField::TotalStudents,
        FormField::FulfilledStudents,
        FormField::TotalDays,
        FormField::DaysLeft,
    ];

    /// Question shown next to the input
    pub fn question(&self) -> &'static str {
        match self {
            FormField::TotalStudents => "How many students are there?",
            FormField::FulfilledStudents => "How many have completed it?",
            FormField::TotalDays => "Total days for assignment?",
            FormField::DaysLeft => "Days left until due date?",
        }
    }

    /// Example value shown as a hint
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::TotalStudents => "e.g. 30",
            FormField::FulfilledStudents => "e.g. 5",
            FormField::TotalDays => "e.g. 14",
            FormField::DaysLeft => "e.g. 3",
        }
    }
}

/// Text currently entered in each field.
///
/// Values are kept as typed so that going back to the form shows exactly
/// what the user entered, valid or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub total_students: String,
    pub fulfilled_students: String,
    pub total_days: String,
    pub days_left: String,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill every field from an already validated input
    pub fn from_input(input: &PredictionInput) -> Self {
        Self {
            total_students: input.total_students().to_string(),
            fulfilled_students: input.fulfilled_students().to_string(),
            total_days: input.total_days().to_string(),
            days_left: input.days_left().to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::TotalStudents => &self.total_students,
            FormField::FulfilledStudents => &self.fulfilled_students,
            FormField::TotalDays => &self.total_days,
            FormField::DaysLeft => &self.days_left,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::TotalStudents => self.total_students = value,
            FormField::FulfilledStudents => self.fulfilled_students = value,
            FormField::TotalDays => self.total_days = value,
            FormField::DaysLeft => self.days_left = value,
        }
    }

    /// True when no field has been touched
    pub fn is_empty(&self) -> bool {
        FormField::PROMPT_ORDER
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
