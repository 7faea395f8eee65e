//! Property-based tests for the report parser and services
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::path::Path;

use covgate::adapters::{parse_line, parse_report};
use covgate::core::models::CoverageMap;
use covgate::core::services::{find_violations, raise_limits};
use proptest::prelude::*;

use crate::common::coverage;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(/[a-z]{1,8}){0,3}"
}

proptest! {
    /// A well-formed record maps field 1 to the percentage in field 3
    #[test]
    fn record_round_trips(id in identifier(), tenths in 0u32..=1000) {
        let percentage = f64::from(tenths) / 10.0;
        let line = format!("ok  \t{id}\t0.010s\tcoverage: {percentage:.1}% of statements");
        let (parsed_id, parsed) = parse_line(&line).unwrap().unwrap();
        prop_assert_eq!(parsed_id, id.as_str());
        prop_assert!((parsed - percentage).abs() < 1e-9);
    }

    /// Lines with fewer than four tab-separated fields are never records
    #[test]
    fn short_lines_are_skipped(fields in prop::collection::vec("[^\t\r\n]{0,12}", 0..4)) {
        let line = fields.join("\t");
        prop_assert!(parse_line(&line).is_none());
        let map = parse_report(line.as_bytes(), Path::new("coverage.txt")).unwrap();
        prop_assert!(map.is_empty());
    }

    /// Raising limits never lowers one and always covers every observation
    #[test]
    fn raised_limits_dominate(
        observed in prop::collection::btree_map(identifier(), 0.0f64..=100.0, 0..6),
        limits in prop::collection::btree_map(identifier(), 0.0f64..=100.0, 0..6),
    ) {
        let observed: CoverageMap = observed.into_iter().collect();
        let limits: CoverageMap = limits.into_iter().collect();
        let raised = raise_limits(&observed, &limits);

        for (id, limit) in limits.iter() {
            prop_assert!(raised.limits.get(id).unwrap() >= limit);
        }
        for (id, pct) in observed.iter() {
            prop_assert!(raised.limits.get(id).unwrap() >= pct);
        }
        prop_assert!(find_violations(&observed, &raised.limits).is_empty());
    }
}

#[test]
fn raised_limits_example() {
    let raised = raise_limits(&coverage(&[("a", 85.0), ("b", 50.0)]), &coverage(&[("a", 80.0)]));
    assert_eq!(raised.limits, coverage(&[("a", 85.0), ("b", 50.0)]));
}
