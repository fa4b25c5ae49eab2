//! Depth-indexed record building and range filtering
//!
//! Turns the positional data matrix into records keyed by curve name, the
//! shape downstream consumers persist and query. Curve *i* pairs with column
//! *i*; rows shorter than the curve list simply omit the missing curves, and
//! extra columns beyond the curve list are dropped.

use crate::app::models::DepthRecord;

/// Build depth records from the curve list and data rows
///
/// The depth index is the first column of each row. Records are returned
/// sorted by ascending depth.
pub fn build_records(curves: &[String], rows: &[Vec<f64>]) -> Vec<DepthRecord> {
    let mut records: Vec<DepthRecord> = rows
        .iter()
        .filter_map(|row| {
            let depth = *row.first()?;
            let values = curves
                .iter()
                .zip(row.iter())
                .map(|(curve, &value)| (curve.clone(), value))
                .collect();
            Some(DepthRecord { depth, values })
        })
        .collect();

    records.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    records
}

/// Keep only rows whose depth lies within the inclusive range
///
/// An absent bound leaves that side open.
pub fn rows_in_range(rows: &[Vec<f64>], start: Option<f64>, stop: Option<f64>) -> Vec<Vec<f64>> {
    rows.iter()
        .filter(|row| {
            let Some(&depth) = row.first() else {
                return false;
            };
            if let Some(start) = start {
                if depth < start {
                    return false;
                }
            }
            if let Some(stop) = stop {
                if depth > stop {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_records_map_curves_positionally() {
        let curves = curves(&["DEPT.FT", "GR.GAPI"]);
        let rows = vec![vec![100.0, 40.0]];

        let records = build_records(&curves, &rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].depth, 100.0);
        assert_eq!(records[0].values["DEPT.FT"], 100.0);
        assert_eq!(records[0].values["GR.GAPI"], 40.0);
    }

    #[test]
    fn test_records_are_sorted_by_depth() {
        let curves = curves(&["DEPT.FT"]);
        let rows = vec![vec![101.0], vec![100.0], vec![100.5]];

        let records = build_records(&curves, &rows);
        let depths: Vec<f64> = records.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![100.0, 100.5, 101.0]);
    }

    #[test]
    fn test_short_rows_omit_missing_curves() {
        let curves = curves(&["DEPT.FT", "GR.GAPI", "RHOB.G/CC"]);
        let rows = vec![vec![100.0, 40.0]];

        let records = build_records(&curves, &rows);
        assert_eq!(records[0].values.len(), 2);
        assert!(!records[0].values.contains_key("RHOB.G/CC"));
    }

    #[test]
    fn test_range_filter_is_inclusive() {
        let rows = vec![vec![100.0], vec![100.5], vec![101.0], vec![101.5]];

        let filtered = rows_in_range(&rows, Some(100.5), Some(101.0));
        assert_eq!(filtered, vec![vec![100.5], vec![101.0]]);
    }

    #[test]
    fn test_open_bounds() {
        let rows = vec![vec![100.0], vec![101.0]];

        assert_eq!(rows_in_range(&rows, None, None).len(), 2);
        assert_eq!(rows_in_range(&rows, Some(100.5), None), vec![vec![101.0]]);
        assert_eq!(rows_in_range(&rows, None, Some(100.5)), vec![vec![100.0]]);
    }
}
