//! Response formatting.
//!
//! Formats evaluation results for the driver loop: a plain `distance <n>`
//! line for `eval`, and a single-line JSON breakdown for `report`.

use serde::Serialize;

use crate::eval::Evaluation;

/// The JSON wire form of an evaluation breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub net: i64,
    pub bonus: u64,
    pub distance: u64,
}

impl From<Evaluation> for Report {
    fn from(eval: Evaluation) -> Self {
        Report {
            net: eval.net,
            bonus: eval.bonus,
            distance: eval.distance(),
        }
    }
}

/// Formats the `eval` response line.
pub fn format_distance(eval: Evaluation) -> String {
    format!("distance {}", eval.distance())
}

/// Formats the `report` response as a single JSON line.
pub fn format_report(eval: Evaluation) -> String {
    // Three plain integer fields; serialization cannot fail.
    serde_json::to_string(&Report::from(eval)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::evaluate;

    #[test]
    fn format_distance_line() {
        assert_eq!(format_distance(evaluate(">***>")), "distance 5");
        assert_eq!(format_distance(evaluate("")), "distance 0");
    }

    #[test]
    fn format_report_json_line() {
        assert_eq!(
            format_report(evaluate(">>*<")),
            r#"{"net":1,"bonus":1,"distance":2}"#
        );
    }

    #[test]
    fn report_preserves_negative_net() {
        assert_eq!(
            format_report(evaluate("<<<")),
            r#"{"net":-3,"bonus":0,"distance":3}"#
        );
    }

    #[test]
    fn report_from_evaluation_breakdown() {
        let report = Report::from(evaluate(">***>"));
        assert_eq!(report.net, 2);
        assert_eq!(report.bonus, 3);
        assert_eq!(report.distance, 5);
    }
}
