use std::collections::HashMap;

use serde::Serialize;

use crate::pipeline::MatchRecord;

/// `(kills + assists) / deaths`, counting zero deaths as one.
pub fn kda(kills: u64, deaths: u64, assists: u64) -> f64 {
    (kills + assists) as f64 / deaths.max(1) as f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub name: String,
    pub games_played: usize,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub total_assists: u64,
    pub total_wins: usize,
}

impl GroupStats {
    pub fn new(name: String) -> Self {
        GroupStats {
            name,
            games_played: 0,
            total_kills: 0,
            total_deaths: 0,
            total_assists: 0,
            total_wins: 0,
        }
    }

    pub fn kda(&self) -> f64 {
        kda(self.total_kills, self.total_deaths, self.total_assists)
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            (self.total_wins as f64 / self.games_played as f64) * 100.0
        }
    }
}

/// Groups records by a key, remembering the order keys were first seen.
pub struct GroupStatsTracker {
    index: HashMap<String, usize>,
    groups: Vec<GroupStats>,
}

impl GroupStatsTracker {
    pub fn new() -> Self {
        GroupStatsTracker {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    pub fn from_records<'a, F>(records: &'a [MatchRecord], key: F) -> Self
    where
        F: Fn(&'a MatchRecord) -> &'a str,
    {
        let mut tracker = Self::new();
        for record in records {
            tracker.add_record(key(record), record);
        }
        tracker
    }

    pub fn add_record(&mut self, key: &str, record: &MatchRecord) {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.groups.push(GroupStats::new(key.to_string()));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };

        let entry = &mut self.groups[slot];
        entry.games_played += 1;
        entry.total_kills += u64::from(record.kills);
        entry.total_deaths += u64::from(record.deaths);
        entry.total_assists += u64::from(record.assists);
        if record.win {
            entry.total_wins += 1;
        }
    }

    pub fn get_stats(&self) -> &[GroupStats] {
        &self.groups
    }

    /// Group with the most games; ties go to the group seen first.
    pub fn most_played(&self) -> Option<&GroupStats> {
        self.groups
            .iter()
            .fold(None, |best: Option<&GroupStats>, group| match best {
                Some(b) if b.games_played >= group.games_played => Some(b),
                _ => Some(group),
            })
    }
}

impl Default for GroupStatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
