//! Plain-text rendering of records and access outcomes

use shared::{Attribute, Drone, Policy};

use crate::views::AccessOutcome;

/// A record printable as one table row
pub trait TableRow {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Drone {
    const HEADERS: &'static [&'static str] = &["ID", "Model", "Zone"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.model_type.clone(),
            self.zone.to_string(),
        ]
    }
}

impl TableRow for Attribute {
    const HEADERS: &'static [&'static str] = &["ID", "Name", "Value"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.name.clone(),
            self.joined_values(),
        ]
    }
}

impl TableRow for Policy {
    const HEADERS: &'static [&'static str] = &["ID", "Zone", "Start", "End"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.zone.to_string(),
            self.start_time.clone(),
            self.end_time.clone(),
        ]
    }
}

/// Left-aligned table with a header rule
pub fn table<R: TableRow>(rows: &[R]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();
    let widths: Vec<usize> = R::HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(pad_line(R::HEADERS, &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        let values: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(pad_line(&values, &widths));
    }
    out.join("\n")
}

fn pad_line(values: &[&str], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(v, &w)| format!("{v:<w$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn outcome_line(outcome: &AccessOutcome) -> String {
    let verdict = if outcome.response.granted {
        "GRANTED"
    } else {
        "DENIED"
    };
    format!(
        "{verdict}: {} ({})",
        outcome.response.message,
        outcome.received_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::AccessResponse;

    #[test]
    fn test_table_alignment() {
        let drones = vec![
            Drone {
                id: Some("1".into()),
                model_type: "Terminal".into(),
                zone: 2,
            },
            Drone {
                id: Some("12".into()),
                model_type: "Edge".into(),
                zone: 10,
            },
        ];
        let expected = "\
ID  Model     Zone
--  --------  ----
1   Terminal  2
12  Edge      10";
        assert_eq!(table(&drones), expected);
    }

    #[test]
    fn test_empty_table_has_header() {
        let out = table::<Policy>(&[]);
        assert_eq!(out, "ID  Zone  Start  End\n--  ----  -----  ---");
    }

    #[test]
    fn test_attribute_values_joined() {
        let attr = Attribute::new("Zone", vec!["1".into(), "2".into()]);
        assert_eq!(attr.cells()[2], "1, 2");
    }

    #[test]
    fn test_outcome_line() {
        let outcome = AccessOutcome {
            response: AccessResponse {
                granted: false,
                message: "Outside policy window".into(),
            },
            received_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap(),
        };
        assert_eq!(
            outcome_line(&outcome),
            "DENIED: Outside policy window (2026-10-16 09:30:00 UTC)"
        );
    }
}
