//! Playthrough records for the discovery view
//!
//! A playthrough is a session-level aggregate (one completed play session),
//! not an event stream; it is surfaced as delivered and never merged into the
//! activity feed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementSummary {
    pub title: String,
    pub icon: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaythroughRecord {
    /// Game (project) identifier
    pub project: String,
    /// Player address
    pub caller: String,
    pub start: i64,
    pub end: i64,
    /// Number of actions performed
    pub count: u32,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<AchievementSummary>,
}

impl PlaythroughRecord {
    /// Session length in milliseconds (0 if `end` precedes `start`)
    pub fn duration_ms(&self) -> i64 {
        self.end.saturating_sub(self.start).max(0)
    }

    pub fn total_points(&self) -> u64 {
        self.achievements.iter().map(|a| a.points as u64).sum()
    }
}

/// Records ordered by session end, most recent first (stable on ties)
pub fn sorted_recent(records: &[PlaythroughRecord]) -> Vec<&PlaythroughRecord> {
    let mut out: Vec<&PlaythroughRecord> = records.iter().collect();
    out.sort_by(|a, b| b.end.cmp(&a.end));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(project: &str, start: i64, end: i64, points: &[u32]) -> PlaythroughRecord {
        PlaythroughRecord {
            project: project.into(),
            caller: "0x01".into(),
            start,
            end,
            count: 3,
            actions: vec!["spawn".into(), "move".into(), "attack".into()],
            achievements: points
                .iter()
                .map(|p| AchievementSummary {
                    title: format!("t{p}"),
                    icon: "fa-star".into(),
                    points: *p,
                })
                .collect(),
        }
    }

    #[test]
    fn test_duration_and_points() {
        let r = record("dopewars", 1_000, 61_000, &[10, 20]);
        assert_eq!(r.duration_ms(), 60_000);
        assert_eq!(r.total_points(), 30);

        let backwards = record("dopewars", 5_000, 1_000, &[]);
        assert_eq!(backwards.duration_ms(), 0);
        assert_eq!(backwards.total_points(), 0);
    }

    #[test]
    fn test_sorted_recent_is_stable() {
        let records = vec![
            record("a", 0, 10, &[]),
            record("b", 0, 30, &[]),
            record("c", 0, 10, &[]),
        ];
        let sorted: Vec<&str> = sorted_recent(&records)
            .iter()
            .map(|r| r.project.as_str())
            .collect();
        assert_eq!(sorted, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_defaults_when_lists_missing() {
        let json = r#"{"project":"eternum","caller":"0x02","start":1,"end":2,"count":0}"#;
        let r: PlaythroughRecord = serde_json::from_str(json).unwrap();
        assert!(r.actions.is_empty());
        assert!(r.achievements.is_empty());
    }
}
