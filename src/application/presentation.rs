//! Presentation payloads handed to the display collaborator.
//!
//! The core never renders anything itself; it produces one of these
//! payloads and the UI layer (out of scope here) decides how to draw it.

use serde::{Deserialize, Serialize};

/// One radar-chart axis: the user's and the matched profile's score for a
/// category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Category name (the chart axis label).
    pub subject: String,
    /// The user's aggregated score for this category.
    pub user: u8,
    /// The matched profile's score for this category.
    pub delegate: u8,
}

/// What the display collaborator should show right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentationPayload {
    /// A question awaiting an answer.
    Question {
        category: String,
        prompt: String,
        /// 1-based question number.
        number: usize,
        total: usize,
    },
    /// The completed comparison, ready for a radar chart.
    Results {
        match_name: String,
        similarity: i32,
        chart: Vec<ChartPoint>,
    },
    /// A user-facing error message; recovery is via reset.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_payload_serializes_with_kind_tag() {
        let payload = PresentationPayload::Question {
            category: "Governance".to_string(),
            prompt: "Q1".to_string(),
            number: 1,
            total: 17,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "question");
        assert_eq!(json["number"], 1);
    }

    #[test]
    fn results_payload_carries_chart_points() {
        let payload = PresentationPayload::Results {
            match_name: "Delegate A".to_string(),
            similarity: 10,
            chart: vec![ChartPoint {
                subject: "Finance".to_string(),
                user: 5,
                delegate: 4,
            }],
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["chart"][0]["subject"], "Finance");
        assert_eq!(json["chart"][0]["user"], 5);
        assert_eq!(json["chart"][0]["delegate"], 4);
    }
}
