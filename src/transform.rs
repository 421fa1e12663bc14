use crate::models::{Client, Project, TimeEntry};
use crate::rounding::{RoundingConfig, format_hours, round_seconds};

pub const DEFAULT_ACTIVITY: &str = "Programmering";
pub const ITEM_TYPE: &str = "Normal";
pub const TICKET_SEPARATOR: &str = " | ";

/// One CSV line of the timesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub date: String,
    pub item_type: &'static str,
    pub hours: String,
    pub client: String,
    pub project: String,
    pub activity: String,
    pub ticket_number: String,
    pub description: String,
}

impl ReportRow {
    pub fn build(
        entry: &TimeEntry,
        project: &Project,
        client: &Client,
        rounding: &RoundingConfig,
    ) -> Self {
        Self {
            date: date(entry),
            item_type: ITEM_TYPE,
            hours: rounded_duration(entry.duration, rounding),
            client: client.name.clone(),
            project: project.name.clone(),
            activity: activity(&entry.tags).to_string(),
            ticket_number: ticket_number(&entry.description).to_string(),
            description: free_description(&entry.description).to_string(),
        }
    }

    pub fn as_record(&self) -> [&str; 8] {
        [
            self.date.as_str(),
            self.item_type,
            self.hours.as_str(),
            self.client.as_str(),
            self.project.as_str(),
            self.activity.as_str(),
            self.ticket_number.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Start date in the offset Toggl reported it in; empty when Toggl sent no
/// start timestamp.
pub fn date(entry: &TimeEntry) -> String {
    entry
        .start
        .map(|start| start.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn rounded_duration(seconds: i64, rounding: &RoundingConfig) -> String {
    format_hours(round_seconds(seconds, rounding))
}

pub fn activity(tags: &[String]) -> &str {
    tags.first().map(String::as_str).unwrap_or(DEFAULT_ACTIVITY)
}

pub fn ticket_number(description: &str) -> &str {
    description
        .split_once(TICKET_SEPARATOR)
        .map(|(ticket, _)| ticket)
        .unwrap_or("")
}

pub fn free_description(description: &str) -> &str {
    match description.split_once(TICKET_SEPARATOR) {
        Some((_, rest)) => rest.split(TICKET_SEPARATOR).next().unwrap_or(rest),
        None => description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::decode;

    fn entry(start: &str, duration: i64, description: &str, tags: &[&str]) -> TimeEntry {
        let body = serde_json::json!({
            "id": 1,
            "workspace_id": 10,
            "project_id": 20,
            "start": start,
            "duration": duration,
            "description": description,
            "tags": tags,
        });
        decode(&body.to_string()).unwrap()
    }

    #[test]
    fn rounded_duration_uses_half_hour_ceiling() {
        let cfg = RoundingConfig::default();
        assert_eq!(rounded_duration(0, &cfg), "0");
        assert_eq!(rounded_duration(1, &cfg), "0.5");
        assert_eq!(rounded_duration(1800, &cfg), "0.5");
        assert_eq!(rounded_duration(1801, &cfg), "1");
        assert_eq!(rounded_duration(3600, &cfg), "1");
        assert_eq!(rounded_duration(5400, &cfg), "1.5");
        assert_eq!(rounded_duration(27000, &cfg), "7.5");
    }

    #[test]
    fn activity_defaults_when_untagged() {
        assert_eq!(activity(&[]), "Programmering");
        assert_eq!(activity(&["X".to_string(), "Y".to_string()]), "X");
    }

    #[test]
    fn splits_ticket_from_description() {
        let description = "T-123 | Fixed bug";
        assert_eq!(ticket_number(description), "T-123");
        assert_eq!(free_description(description), "Fixed bug");
        assert_eq!(
            format!(
                "{}{}{}",
                ticket_number(description),
                TICKET_SEPARATOR,
                free_description(description)
            ),
            description
        );
    }

    #[test]
    fn description_without_separator_is_untouched() {
        assert_eq!(ticket_number("Standup"), "");
        assert_eq!(free_description("Standup"), "Standup");
        assert_eq!(ticket_number(""), "");
        assert_eq!(free_description(""), "");
        assert_eq!(free_description("a|b"), "a|b");
    }

    #[test]
    fn extra_separators_keep_only_second_part() {
        assert_eq!(ticket_number("T-1 | Review | notes"), "T-1");
        assert_eq!(free_description("T-1 | Review | notes"), "Review");
    }

    #[test]
    fn date_keeps_reported_offset() {
        let late = entry("2024-01-15T23:30:00+02:00", 60, "", &[]);
        assert_eq!(date(&late), "2024-01-15");

        let early = entry("2024-01-16T00:15:00-05:00", 60, "", &[]);
        assert_eq!(date(&early), "2024-01-16");
    }

    #[test]
    fn date_is_empty_without_start() {
        let undated: TimeEntry = decode(r#"{"id": 3, "start": null, "duration": 60}"#).unwrap();
        assert_eq!(date(&undated), "");
    }

    #[test]
    fn running_timer_duration_rounds_toward_zero() {
        let cfg = RoundingConfig::default();
        assert_eq!(rounded_duration(-1, &cfg), "0");
        assert_eq!(rounded_duration(-5399, &cfg), "-1");
        assert_eq!(rounded_duration(-1_700_000_001, &cfg), "-472222");
    }

    #[test]
    fn builds_full_row() {
        let entry = entry("2024-01-15T08:00:00+00:00", 5400, "T-123 | Fixed bug", &["Dev"]);
        let project = Project {
            id: 20,
            workspace_id: 10,
            client_id: Some(42),
            name: "Widgets".to_string(),
            ..Project::default()
        };
        let client = Client {
            id: 42,
            wid: 10,
            name: "Acme".to_string(),
            archived: false,
        };

        let row = ReportRow::build(&entry, &project, &client, &RoundingConfig::default());
        assert_eq!(
            row.as_record(),
            ["2024-01-15", "Normal", "1.5", "Acme", "Widgets", "Dev", "T-123", "Fixed bug"]
        );
    }
}
