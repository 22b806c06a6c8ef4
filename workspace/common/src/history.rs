//! Trend chart series and list rows for the prediction history.

use crate::format;
use crate::prediction::PredictionRecord;

pub const TREND_SERIES_NAME: &str = "Default Probability";
pub const TREND_CHART_TITLE: &str = "Default Probability Trend";
pub const TREND_AXIS_TITLE: &str = "Probability (%)";
pub const TREND_AXIS_RANGE: [f64; 2] = [0.0, 100.0];

pub const HISTORY_FETCH_FAILED: &str = "Failed to fetch prediction history.";

/// Two parallel sequences for the line chart, in backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl TrendSeries {
    /// No sorting is applied; the chart follows whatever order the backend used.
    pub fn from_records(records: &[PredictionRecord]) -> Self {
        let (labels, values) = records
            .iter()
            .map(|record| (record.created_date(), record.default_probability * 100.0))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Display strings for a single history list item.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub key: String,
    pub loan_amount: String,
    pub credit_score: String,
    pub annual_income: String,
    pub default_probability: String,
    pub risk_label: String,
    pub risk_class: &'static str,
    pub purpose: String,
    pub term: String,
    pub created_date: String,
}

impl From<&PredictionRecord> for HistoryRow {
    fn from(record: &PredictionRecord) -> Self {
        Self {
            key: record.id.to_string(),
            loan_amount: format::format_usd(record.loan_amount),
            credit_score: record.credit_score.to_string(),
            annual_income: format::format_usd(record.annual_income),
            default_probability: record.probability_percent(),
            risk_label: record.risk_classification.label().to_string(),
            risk_class: record.risk_classification.color_class(),
            purpose: record.purpose_display(),
            term: record.term.clone(),
            created_date: record.created_date(),
        }
    }
}

/// What the history page renders once the records have arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    Empty,
    Populated {
        series: TrendSeries,
        rows: Vec<HistoryRow>,
    },
}

impl HistoryView {
    pub fn from_records(records: &[PredictionRecord]) -> Self {
        if records.is_empty() {
            return HistoryView::Empty;
        }
        HistoryView::Populated {
            series: TrendSeries::from_records(records),
            rows: records.iter().map(HistoryRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::{RecordId, RiskClassification};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn record(id: i64, created_at: &str, probability: f64, risk: &str) -> PredictionRecord {
        PredictionRecord {
            id: RecordId::Int(id),
            loan_amount: Decimal::new(25_000, 0),
            annual_income: Decimal::new(92_500, 0),
            credit_score: 680,
            default_probability: probability,
            risk_classification: RiskClassification::from(risk),
            purpose: "HOME_IMPROVEMENT".to_string(),
            term: "60 months".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_series_preserves_backend_order() {
        let history = vec![
            record(2, "2025-06-14T10:00:00", 0.5, "High"),
            record(1, "2025-06-12T10:00:00", 0.25, "Medium"),
            record(3, "2025-06-13T10:00:00", 0.125, "Low"),
        ];

        let series = TrendSeries::from_records(&history);

        assert_eq!(series.labels, vec!["6/14/2025", "6/12/2025", "6/13/2025"]);
        assert_eq!(series.values, vec![50.0, 25.0, 12.5]);
        assert_eq!(series.len(), history.len());
    }

    #[test]
    fn test_row_formatting() {
        let row = HistoryRow::from(&record(9, "2025-06-13T19:45:27.5", 0.12345, "High"));

        assert_eq!(
            row,
            HistoryRow {
                key: "9".to_string(),
                loan_amount: "$25,000.00".to_string(),
                credit_score: "680".to_string(),
                annual_income: "$92,500.00".to_string(),
                default_probability: "12.35%".to_string(),
                risk_label: "High".to_string(),
                risk_class: "text-red-600",
                purpose: "HOME IMPROVEMENT".to_string(),
                term: "60 months".to_string(),
                created_date: "6/13/2025".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_risk_renders_gray() {
        let row = HistoryRow::from(&record(1, "2025-06-13", 0.3, "Elevated"));
        assert_eq!(row.risk_label, "Elevated");
        assert_eq!(row.risk_class, "text-gray-600");
    }

    #[test]
    fn test_empty_history_renders_zero_state() {
        assert_eq!(HistoryView::from_records(&[]), HistoryView::Empty);
    }

    #[test]
    fn test_populated_view_has_chart_and_rows() {
        let history = vec![
            record(1, "2025-06-12T10:00:00", 0.1, "Low"),
            record(2, "2025-06-13T10:00:00", 0.6, "High"),
        ];

        match HistoryView::from_records(&history) {
            HistoryView::Populated { series, rows } => {
                assert_eq!(series.values.len(), 2);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[1].risk_class, "text-red-600");
            }
            other => panic!("expected populated view, got {:?}", other),
        }
    }
}
