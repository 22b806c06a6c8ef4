//! Summary statistics shown on the dashboard.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::format;
use crate::prediction::{PredictionRecord, RiskClassification};

pub const DASHBOARD_FETCH_FAILED: &str = "Failed to fetch dashboard statistics.";

/// Label reported as most common when nothing has been counted.
pub const NO_RISK_LEVEL: &str = "None";

/// Count of records per risk label, iterated in first-seen order.
///
/// Labels that never occurred are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskDistribution {
    entries: Vec<(RiskClassification, usize)>,
}

impl RiskDistribution {
    pub fn from_records(records: &[PredictionRecord]) -> Self {
        records
            .iter()
            .map(|record| &record.risk_classification)
            .collect()
    }

    pub fn increment(&mut self, risk: &RiskClassification) {
        match self.entries.iter_mut().find(|(label, _)| label == risk) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((risk.clone(), 1)),
        }
    }

    /// Count for a label, `None` when the label never occurred.
    pub fn get(&self, risk: &RiskClassification) -> Option<usize> {
        self.entries
            .iter()
            .find(|(label, _)| label == risk)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RiskClassification, usize)> {
        self.entries.iter().map(|(label, count)| (label, *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// `Low`, `Medium` and `High` counts, zero-filled.
    pub fn canonical_counts(&self) -> [(RiskClassification, usize); 3] {
        RiskClassification::CANONICAL.map(|risk| {
            let count = self.get(&risk).unwrap_or(0);
            (risk, count)
        })
    }

    /// Label with the highest count.
    ///
    /// Left fold from `("None", 0)`: a later entry only wins when its count is
    /// strictly greater, so ties go to the label seen first.
    pub fn most_common(&self) -> (&str, usize) {
        self.entries
            .iter()
            .fold((NO_RISK_LEVEL, 0), |best, (label, count)| {
                if *count > best.1 {
                    (label.label(), *count)
                } else {
                    best
                }
            })
    }
}

impl<'a> FromIterator<&'a RiskClassification> for RiskDistribution {
    fn from_iter<I: IntoIterator<Item = &'a RiskClassification>>(iter: I) -> Self {
        let mut distribution = RiskDistribution::default();
        for risk in iter {
            distribution.increment(risk);
        }
        distribution
    }
}

impl Serialize for RiskDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label.label(), count)?;
        }
        map.end()
    }
}

/// Aggregate over the full prediction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_predictions: usize,
    pub risk_distribution: RiskDistribution,
    pub average_probability: f64,
}

impl DashboardStats {
    pub fn from_records(records: &[PredictionRecord]) -> Self {
        let risk_distribution = RiskDistribution::from_records(records);

        let average_probability = if records.is_empty() {
            0.0
        } else {
            let sum: f64 = records.iter().map(|r| r.default_probability).sum();
            sum / records.len() as f64
        };

        tracing::debug!(
            total = records.len(),
            labels = risk_distribution.len(),
            average_probability,
            "Computed dashboard statistics"
        );

        Self {
            total_predictions: records.len(),
            risk_distribution,
            average_probability,
        }
    }

    pub fn most_common_risk_level(&self) -> &str {
        self.risk_distribution.most_common().0
    }

    pub fn average_probability_percent(&self) -> String {
        format::format_percentage(self.average_probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::RecordId;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn record(id: i64, risk: &str, probability: f64) -> PredictionRecord {
        PredictionRecord {
            id: RecordId::Int(id),
            loan_amount: Decimal::new(10_000, 0),
            annual_income: Decimal::new(60_000, 0),
            credit_score: 700,
            default_probability: probability,
            risk_classification: RiskClassification::from(risk),
            purpose: "CREDIT_CARD".to_string(),
            term: "36 months".to_string(),
            created_at: "2025-06-13T19:45:27".to_string(),
        }
    }

    fn records(labels: &[&str]) -> Vec<PredictionRecord> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| record(i as i64, label, 0.1))
            .collect()
    }

    #[test]
    fn test_empty_history() {
        let stats = DashboardStats::from_records(&[]);

        assert_eq!(stats.total_predictions, 0);
        assert!(stats.risk_distribution.is_empty());
        assert_eq!(stats.average_probability, 0.0);
        assert_eq!(stats.most_common_risk_level(), "None");
        assert_eq!(stats.average_probability_percent(), "0.00%");
    }

    #[test]
    fn test_average_probability_is_mean() {
        let history = vec![
            record(1, "Low", 0.1),
            record(2, "Medium", 0.3),
            record(3, "High", 0.8),
        ];
        let stats = DashboardStats::from_records(&history);

        assert_eq!(stats.total_predictions, 3);
        assert!((stats.average_probability - 0.4).abs() < 1e-12);
        assert_eq!(stats.average_probability_percent(), "40.00%");
    }

    #[test]
    fn test_out_of_range_probabilities_are_averaged() {
        let history = vec![record(1, "Low", -0.5), record(2, "High", 2.5)];
        let stats = DashboardStats::from_records(&history);
        assert!((stats.average_probability - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_distribution_in_first_seen_order() {
        let stats = DashboardStats::from_records(&records(&["Medium", "Low", "Low"]));

        let entries: Vec<(&str, usize)> = stats
            .risk_distribution
            .iter()
            .map(|(risk, count)| (risk.label(), count))
            .collect();
        assert_eq!(entries, vec![("Medium", 1), ("Low", 2)]);
        assert_eq!(stats.most_common_risk_level(), "Low");
    }

    #[test]
    fn test_tie_keeps_first_seen_label() {
        let stats = DashboardStats::from_records(&records(&["Low", "Medium"]));
        assert_eq!(stats.risk_distribution.most_common(), ("Low", 1));

        let stats = DashboardStats::from_records(&records(&["High", "Low", "Low", "High"]));
        assert_eq!(stats.risk_distribution.most_common(), ("High", 2));
    }

    #[test]
    fn test_unknown_labels_are_counted() {
        let stats = DashboardStats::from_records(&records(&["Severe", "Severe", "Low"]));

        assert_eq!(
            stats.risk_distribution.get(&RiskClassification::from("Severe")),
            Some(2)
        );
        assert_eq!(stats.most_common_risk_level(), "Severe");
    }

    #[test]
    fn test_counts_sum_to_total() {
        let stats = DashboardStats::from_records(&records(&[
            "Low", "High", "Medium", "weird", "High", "", "Low",
        ]));
        assert_eq!(stats.risk_distribution.total(), stats.total_predictions);
    }

    #[test]
    fn test_canonical_counts_zero_fill() {
        let stats = DashboardStats::from_records(&records(&["High", "Other", "High"]));

        assert_eq!(stats.risk_distribution.get(&RiskClassification::Low), None);
        assert_eq!(
            stats.risk_distribution.canonical_counts(),
            [
                (RiskClassification::Low, 0),
                (RiskClassification::Medium, 0),
                (RiskClassification::High, 2),
            ]
        );
    }

    #[test]
    fn test_records_without_label_are_counted() {
        let history: Vec<PredictionRecord> = serde_json::from_str(
            r#"[
                {"id": 1, "loan_amount": 1000, "annual_income": 50000, "credit_score": 700,
                 "default_probability": 0.2, "risk_classification": null,
                 "purpose": "CREDIT_CARD", "term": "36 months", "created_at": "2025-06-13"},
                {"id": 2, "loan_amount": 1000, "annual_income": 50000, "credit_score": 700,
                 "default_probability": 0.4,
                 "purpose": "CREDIT_CARD", "term": "36 months", "created_at": "2025-06-14"},
                {"id": 3, "loan_amount": 1000, "annual_income": 50000, "credit_score": 700,
                 "default_probability": 0.6, "risk_classification": "Low",
                 "purpose": "CREDIT_CARD", "term": "36 months", "created_at": "2025-06-15"}
            ]"#,
        )
        .unwrap();
        let stats = DashboardStats::from_records(&history);

        assert_eq!(stats.total_predictions, 3);
        assert_eq!(stats.risk_distribution.get(&RiskClassification::default()), Some(2));
        assert_eq!(stats.risk_distribution.total(), 3);
        assert_eq!(stats.most_common_risk_level(), "");
        assert_eq!(stats.risk_distribution.canonical_counts()[0], (RiskClassification::Low, 1));
    }

    #[test]
    fn test_serialized_shape() {
        let history = vec![record(1, "Medium", 0.5), record(2, "Low", 0.25), record(3, "Low", 0.0)];
        let stats = DashboardStats::from_records(&history);

        assert_eq!(
            serde_json::to_string(&stats).unwrap(),
            r#"{"totalPredictions":3,"riskDistribution":{"Medium":1,"Low":2},"averageProbability":0.25}"#
        );
    }
}
