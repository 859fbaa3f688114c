//! Activity feed aggregation
//!
//! Merges the four per-kind event sources into a single feed, most recent
//! first. Entries sharing a timestamp keep the fixed source order
//! (token, collectible, action, achievement) and, inside one source, the
//! order of the mapping's keys and lists.
//!
//! The feed is never truncated, filtered or deduplicated here; windowing
//! belongs to the caller.

use std::sync::Arc;

use serde::Serialize;

use crate::types::{
    AchievementEvent, ActionEvent, Activity, ActivitySource, CollectibleEvent, FetchStatus,
    TokenEvent,
};

/// Aggregated feed plus the upstream fetch status it was built under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityFeed {
    pub activities: Vec<Activity>,
    pub status: FetchStatus,
}

impl ActivityFeed {
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

fn flatten<T>(source: &ActivitySource<T>) -> impl Iterator<Item = Activity> + '_
where
    T: Clone + Into<Activity>,
{
    source.values().flatten().cloned().map(Into::into)
}

fn count<T>(source: &ActivitySource<T>) -> usize {
    source.values().map(Vec::len).sum()
}

/// Merge all sources into one feed sorted by timestamp, newest first.
pub fn aggregate(
    token: &ActivitySource<TokenEvent>,
    collectible: &ActivitySource<CollectibleEvent>,
    action: &ActivitySource<ActionEvent>,
    achievement: &ActivitySource<AchievementEvent>,
    status: FetchStatus,
) -> ActivityFeed {
    let total = count(token) + count(collectible) + count(action) + count(achievement);
    let mut activities = Vec::with_capacity(total);
    activities.extend(flatten(token));
    activities.extend(flatten(collectible));
    activities.extend(flatten(action));
    activities.extend(flatten(achievement));

    // sort_by is stable: ties keep concatenation order
    activities.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    log::debug!("feed: aggregated {} activities (status={status})", activities.len());
    ActivityFeed { activities, status }
}

/// Shared handles to the four upstream sources
#[derive(Debug, Clone, Default)]
pub struct FeedInputs {
    pub token: Arc<ActivitySource<TokenEvent>>,
    pub collectible: Arc<ActivitySource<CollectibleEvent>>,
    pub action: Arc<ActivitySource<ActionEvent>>,
    pub achievement: Arc<ActivitySource<AchievementEvent>>,
}

impl FeedInputs {
    fn same_as(&self, other: &FeedInputs) -> bool {
        Arc::ptr_eq(&self.token, &other.token)
            && Arc::ptr_eq(&self.collectible, &other.collectible)
            && Arc::ptr_eq(&self.action, &other.action)
            && Arc::ptr_eq(&self.achievement, &other.achievement)
    }

    pub fn aggregate(&self, status: FetchStatus) -> ActivityFeed {
        aggregate(
            &self.token,
            &self.collectible,
            &self.action,
            &self.achievement,
            status,
        )
    }
}

/// Caches the last feed and rebuilds it only when a source handle changes.
///
/// Identity is `Arc` pointer equality: a source that is replaced (even by an
/// equal value) triggers a rebuild, an untouched one does not.
#[derive(Debug, Default)]
pub struct FeedMemo {
    inputs: Option<FeedInputs>,
    feed: ActivityFeed,
    rebuilds: u64,
}

impl FeedMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, inputs: &FeedInputs, status: FetchStatus) -> &ActivityFeed {
        let hit = self
            .inputs
            .as_ref()
            .map(|prev| prev.same_as(inputs))
            .unwrap_or(false);

        if hit {
            log::trace!("feed: memo hit");
            self.feed.status = status;
        } else {
            log::trace!("feed: memo miss, rebuilding");
            self.feed = inputs.aggregate(status);
            self.inputs = Some(inputs.clone());
            self.rebuilds += 1;
        }
        &self.feed
    }

    /// Number of times the feed has been rebuilt
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn clear(&mut self) {
        self.inputs = None;
        self.feed = ActivityFeed::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(key: &str, ts: i64) -> TokenEvent {
        TokenEvent {
            key: key.into(),
            amount: "1".into(),
            symbol: None,
            to: None,
            timestamp: ts,
        }
    }

    fn action(name: &str, ts: i64) -> ActionEvent {
        ActionEvent {
            name: name.into(),
            project: None,
            timestamp: ts,
        }
    }

    #[test]
    fn test_empty_sources() {
        let feed = aggregate(
            &ActivitySource::new(),
            &ActivitySource::new(),
            &ActivitySource::new(),
            &ActivitySource::new(),
            FetchStatus::Loading,
        );
        assert!(feed.is_empty());
        assert_eq!(feed.status, FetchStatus::Loading);
    }

    #[test]
    fn test_keys_flatten_in_insertion_order() {
        let mut tokens = ActivitySource::new();
        tokens.insert("0xbbb".to_string(), vec![token("b1", 5), token("b2", 5)]);
        tokens.insert("0xaaa".to_string(), vec![token("a1", 5)]);

        let feed = aggregate(
            &tokens,
            &ActivitySource::new(),
            &ActivitySource::new(),
            &ActivitySource::new(),
            FetchStatus::Success,
        );
        let keys: Vec<&str> = feed.activities.iter().map(|a| a.key_hint()).collect();
        assert_eq!(keys, vec!["b1", "b2", "a1"]);
    }

    #[test]
    fn test_memo_rebuilds_only_on_identity_change() {
        let mut actions = ActivitySource::new();
        actions.insert("game".to_string(), vec![action("spawn", 1)]);
        let mut inputs = FeedInputs {
            action: Arc::new(actions.clone()),
            ..Default::default()
        };

        let mut memo = FeedMemo::new();
        assert_eq!(memo.get(&inputs, FetchStatus::Loading).len(), 1);
        assert_eq!(memo.get(&inputs, FetchStatus::Success).status, FetchStatus::Success);
        assert_eq!(memo.rebuilds(), 1);

        actions.insert("other".to_string(), vec![action("move", 2)]);
        inputs.action = Arc::new(actions);
        let feed = memo.get(&inputs, FetchStatus::Success);
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.activities[0].timestamp(), 2);
        assert_eq!(memo.rebuilds(), 2);
    }

    #[test]
    fn test_memo_clear_forces_rebuild() {
        let inputs = FeedInputs::default();
        let mut memo = FeedMemo::new();
        memo.get(&inputs, FetchStatus::Idle);
        memo.clear();
        memo.get(&inputs, FetchStatus::Idle);
        assert_eq!(memo.rebuilds(), 2);
    }
}
