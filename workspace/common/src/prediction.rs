//! Payloads exchanged with the prediction backend.
//!
//! Records and responses mirror what `/api/predictions/history` and
//! `/api/predictions/predict` return. Only the fields the views consume are
//! modelled; anything else in the body is ignored during decoding, while a
//! missing required field makes decoding fail.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format;

/// Categorical output of the risk model.
///
/// Unknown labels are kept verbatim in [`RiskClassification::Other`] so that
/// counting and display never drop a record. A missing or `null` label
/// decodes as `Other("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum RiskClassification {
    Low,
    Medium,
    High,
    Other(String),
}

impl RiskClassification {
    /// The labels the dashboard always shows, in display order.
    pub const CANONICAL: [RiskClassification; 3] = [
        RiskClassification::Low,
        RiskClassification::Medium,
        RiskClassification::High,
    ];

    pub fn label(&self) -> &str {
        match self {
            RiskClassification::Low => "Low",
            RiskClassification::Medium => "Medium",
            RiskClassification::High => "High",
            RiskClassification::Other(label) => label,
        }
    }

    pub fn color_class(&self) -> &'static str {
        risk_color_class(self.label())
    }
}

impl From<String> for RiskClassification {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => RiskClassification::Low,
            "Medium" => RiskClassification::Medium,
            "High" => RiskClassification::High,
            _ => RiskClassification::Other(value),
        }
    }
}

impl From<Option<String>> for RiskClassification {
    fn from(value: Option<String>) -> Self {
        value.map(RiskClassification::from).unwrap_or_default()
    }
}

impl Default for RiskClassification {
    fn default() -> Self {
        RiskClassification::Other(String::new())
    }
}

impl From<&str> for RiskClassification {
    fn from(value: &str) -> Self {
        RiskClassification::from(value.to_string())
    }
}

impl From<RiskClassification> for String {
    fn from(value: RiskClassification) -> Self {
        match value {
            RiskClassification::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for RiskClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text color class for a risk label. Total over all strings: anything that is
/// not exactly `Low`, `Medium` or `High` is neutral gray.
pub fn risk_color_class(label: &str) -> &'static str {
    match label {
        "Low" => "text-green-600",
        "Medium" => "text-yellow-600",
        "High" => "text-red-600",
        _ => "text-gray-600",
    }
}

/// Opaque record identifier; the backend may send numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// A stored prediction as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: RecordId,
    #[serde(with = "rust_decimal::serde::float")]
    pub loan_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_income: Decimal,
    pub credit_score: i32,
    pub default_probability: f64,
    #[serde(default)]
    pub risk_classification: RiskClassification,
    pub purpose: String,
    pub term: String,
    pub created_at: String,
}

impl PredictionRecord {
    pub fn probability_percent(&self) -> String {
        format::format_percentage(self.default_probability)
    }

    pub fn purpose_display(&self) -> String {
        format::purpose_display(&self.purpose)
    }

    pub fn created_date(&self) -> String {
        format::format_locale_date(&self.created_at)
    }
}

/// Body of a prediction submission. Every value is the raw string captured
/// from the form; nothing is parsed or validated before sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub loan_amount: String,
    pub annual_income: String,
    pub credit_score: String,
    pub employment_length: String,
    pub debt_to_income_ratio: String,
    pub home_ownership: String,
    pub purpose: String,
    pub interest_rate: String,
    pub term: String,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            loan_amount: String::new(),
            annual_income: String::new(),
            credit_score: String::new(),
            employment_length: String::new(),
            debt_to_income_ratio: String::new(),
            home_ownership: "RENT".to_string(),
            purpose: "DEBT_CONSOLIDATION".to_string(),
            interest_rate: String::new(),
            term: "36 months".to_string(),
        }
    }
}

impl PredictionRequest {
    /// Build a request by looking every form field up by name. Fields the
    /// lookup does not know keep their default value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut request = Self::default();
        for field in PREDICTION_FORM_FIELDS.iter() {
            if let Some(value) = lookup(field.name) {
                request.set_field(field.name, value);
            }
        }
        request
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "loan_amount" => &self.loan_amount,
            "annual_income" => &self.annual_income,
            "credit_score" => &self.credit_score,
            "employment_length" => &self.employment_length,
            "debt_to_income_ratio" => &self.debt_to_income_ratio,
            "home_ownership" => &self.home_ownership,
            "purpose" => &self.purpose,
            "interest_rate" => &self.interest_rate,
            "term" => &self.term,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Returns `false` when `name` is not a request field.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "loan_amount" => &mut self.loan_amount,
            "annual_income" => &mut self.annual_income,
            "credit_score" => &mut self.credit_score,
            "employment_length" => &mut self.employment_length,
            "debt_to_income_ratio" => &mut self.debt_to_income_ratio,
            "home_ownership" => &mut self.home_ownership,
            "purpose" => &mut self.purpose,
            "interest_rate" => &mut self.interest_rate,
            "term" => &mut self.term,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// The part of the predict response the form renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub default_probability: f64,
    #[serde(default)]
    pub risk_classification: RiskClassification,
}

impl PredictionResponse {
    pub fn probability_percent(&self) -> String {
        format::format_percentage(self.default_probability)
    }
}

// ===================== Form metadata =====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// HTML-level constraints only; they are never re-checked in Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number {
        min: Option<&'static str>,
        max: Option<&'static str>,
        step: Option<&'static str>,
    },
    Select(&'static [SelectOption]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

pub const HOME_OWNERSHIP_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "RENT", label: "Rent" },
    SelectOption { value: "MORTGAGE", label: "Mortgage" },
    SelectOption { value: "OWN", label: "Own" },
];

pub const PURPOSE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "DEBT_CONSOLIDATION", label: "Debt Consolidation" },
    SelectOption { value: "CREDIT_CARD", label: "Credit Card" },
    SelectOption { value: "HOME_IMPROVEMENT", label: "Home Improvement" },
    SelectOption { value: "MAJOR_PURCHASE", label: "Major Purchase" },
    SelectOption { value: "SMALL_BUSINESS", label: "Small Business" },
];

pub const TERM_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "36 months", label: "36 months" },
    SelectOption { value: "60 months", label: "60 months" },
];

pub const PREDICTION_FORM_FIELDS: [FormField; 9] = [
    FormField {
        name: "loan_amount",
        label: "Loan Amount ($)",
        kind: FieldKind::Number { min: Some("0"), max: None, step: None },
    },
    FormField {
        name: "annual_income",
        label: "Annual Income ($)",
        kind: FieldKind::Number { min: Some("0"), max: None, step: None },
    },
    FormField {
        name: "credit_score",
        label: "Credit Score",
        kind: FieldKind::Number { min: Some("300"), max: Some("850"), step: None },
    },
    FormField {
        name: "employment_length",
        label: "Employment Length (years)",
        kind: FieldKind::Number { min: Some("0"), max: Some("50"), step: None },
    },
    FormField {
        name: "debt_to_income_ratio",
        label: "Debt-to-Income Ratio",
        kind: FieldKind::Number { min: None, max: None, step: Some("0.01") },
    },
    FormField {
        name: "home_ownership",
        label: "Home Ownership",
        kind: FieldKind::Select(HOME_OWNERSHIP_OPTIONS),
    },
    FormField {
        name: "purpose",
        label: "Loan Purpose",
        kind: FieldKind::Select(PURPOSE_OPTIONS),
    },
    FormField {
        name: "interest_rate",
        label: "Interest Rate (%)",
        kind: FieldKind::Number { min: Some("0"), max: Some("100"), step: Some("0.01") },
    },
    FormField {
        name: "term",
        label: "Loan Term",
        kind: FieldKind::Select(TERM_OPTIONS),
    },
];
