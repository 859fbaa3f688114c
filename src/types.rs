use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fungible token transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEvent {
    /// Source player or contract key
    pub key: String,
    /// Raw amount, kept as the upstream decimal string
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub timestamp: i64,
}

/// Non-fungible (collectible) transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectibleEvent {
    pub token_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub timestamp: i64,
}

/// In-game action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub timestamp: i64,
}

/// Trophy unlock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEvent {
    pub title: String,
    pub icon: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub timestamp: i64,
}

/// One entry of the merged activity feed.
///
/// Ordering is defined by `timestamp` alone (Unix milliseconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Activity {
    #[serde(rename = "token")]
    Token(TokenEvent),
    #[serde(rename = "collectible")]
    Collectible(CollectibleEvent),
    #[serde(rename = "action")]
    Action(ActionEvent),
    #[serde(rename = "achievement")]
    Achievement(AchievementEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Token,
    Collectible,
    Action,
    Achievement,
}

impl ActivityKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Token => "token",
            ActivityKind::Collectible => "collectible",
            ActivityKind::Action => "action",
            ActivityKind::Achievement => "achievement",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Activity {
    pub fn timestamp(&self) -> i64 {
        match self {
            Activity::Token(e) => e.timestamp,
            Activity::Collectible(e) => e.timestamp,
            Activity::Action(e) => e.timestamp,
            Activity::Achievement(e) => e.timestamp,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self {
            Activity::Token(_) => ActivityKind::Token,
            Activity::Collectible(_) => ActivityKind::Collectible,
            Activity::Action(_) => ActivityKind::Action,
            Activity::Achievement(_) => ActivityKind::Achievement,
        }
    }

    /// Identifier a feed row is labelled with
    pub fn key_hint(&self) -> &str {
        match self {
            Activity::Token(e) => &e.key,
            Activity::Collectible(e) => e.collection.as_deref().unwrap_or(&e.token_id),
            Activity::Action(e) => e.project.as_deref().unwrap_or(&e.name),
            Activity::Achievement(e) => e.project.as_deref().unwrap_or(&e.title),
        }
    }

    /// One-line description for list rows
    /// Examples: "Sent 12 STRK", "Transferred NFT #42", "Unlocked Dragon Slayer (+20)"
    pub fn summary(&self) -> String {
        match self {
            Activity::Token(e) => match &e.symbol {
                Some(symbol) => format!("Sent {} {symbol}", e.amount),
                None => format!("Sent {}", e.amount),
            },
            Activity::Collectible(e) => format!("Transferred NFT #{}", e.token_id),
            Activity::Action(e) => format!("Played {}", e.name),
            Activity::Achievement(e) => format!("Unlocked {} (+{})", e.title, e.points),
        }
    }
}

impl From<TokenEvent> for Activity {
    fn from(e: TokenEvent) -> Self {
        Activity::Token(e)
    }
}

impl From<CollectibleEvent> for Activity {
    fn from(e: CollectibleEvent) -> Self {
        Activity::Collectible(e)
    }
}

impl From<ActionEvent> for Activity {
    fn from(e: ActionEvent) -> Self {
        Activity::Action(e)
    }
}

impl From<AchievementEvent> for Activity {
    fn from(e: AchievementEvent) -> Self {
        Activity::Achievement(e)
    }
}

/// Grouping key (address, collection id or category id) -> events of one kind.
/// Iteration follows insertion order.
pub type ActivitySource<T> = IndexMap<String, Vec<T>>;

/// Upstream fetch state, passed through the aggregator untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl std::str::FromStr for FetchStatus {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(FetchStatus::Idle),
            "loading" => Ok(FetchStatus::Loading),
            "success" => Ok(FetchStatus::Success),
            "error" => Ok(FetchStatus::Error),
            _ => Err(anyhow::anyhow!(
                "Invalid status '{s}'. Valid options: idle, loading, success, error"
            )),
        }
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStatus::Idle => write!(f, "idle"),
            FetchStatus::Loading => write!(f, "loading"),
            FetchStatus::Success => write!(f, "success"),
            FetchStatus::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_tagged_json() {
        let json = r#"{"type":"achievement","title":"Dragon Slayer","icon":"fa-dragon","points":20,"timestamp":1700000000000}"#;
        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.kind(), ActivityKind::Achievement);
        assert_eq!(activity.timestamp(), 1_700_000_000_000);
        assert_eq!(activity.summary(), "Unlocked Dragon Slayer (+20)");
    }

    #[test]
    fn test_summary_without_symbol() {
        let activity = Activity::from(TokenEvent {
            key: "0xabc".into(),
            amount: "12".into(),
            symbol: None,
            to: None,
            timestamp: 1,
        });
        assert_eq!(activity.summary(), "Sent 12");
        assert_eq!(activity.key_hint(), "0xabc");
    }

    #[test]
    fn test_key_hint_prefers_project() {
        let action = Activity::from(ActionEvent {
            name: "spawn".into(),
            project: Some("loot-survivor".into()),
            timestamp: 1,
        });
        assert_eq!(action.key_hint(), "loot-survivor");

        let bare = Activity::from(ActionEvent {
            name: "spawn".into(),
            project: None,
            timestamp: 1,
        });
        assert_eq!(bare.key_hint(), "spawn");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("success".parse::<FetchStatus>().unwrap(), FetchStatus::Success);
        assert_eq!("LOADING".parse::<FetchStatus>().unwrap(), FetchStatus::Loading);
        assert!("pending".parse::<FetchStatus>().is_err());
        assert_eq!(FetchStatus::default(), FetchStatus::Idle);
    }
}
