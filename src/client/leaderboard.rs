//! Leaderboard view: podium plus full rankings.
//!
//! The service's array order is authoritative; this view never re-sorts.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::record::{LeaderboardEntry, Medal, TrendStatus};

use super::{fetch::Loadable, format_usd};

/// Simulated network delay before the fetch is issued.
pub const LOAD_DELAY: Duration = Duration::from_millis(1000);

pub const EMPTY_MESSAGE: &str = "No leaderboard data available.";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeaderboardView {
    pub data: Loadable<Vec<LeaderboardEntry>>,
}

impl LeaderboardView {
    pub fn mount() -> Self {
        Self::default()
    }

    pub fn data_loaded(&mut self, data: Loadable<Vec<LeaderboardEntry>>) {
        self.data = data;
    }

    /// The first three entries in service order, medals or not.
    pub fn podium(&self) -> &[LeaderboardEntry] {
        match self.data.ready() {
            Some(entries) => &entries[..entries.len().min(3)],
            None => &[],
        }
    }

    pub fn render(&self) -> Vec<String> {
        let entries = match &self.data {
            Loadable::Loading => return vec!["Loading leaderboard...".into()],
            Loadable::Failed(_) => {
                return vec![
                    "Error: Could not load leaderboard data. Please ensure the backend server is running.".into(),
                    "< Back to Dashboard".into(),
                ];
            }
            Loadable::Ready(entries) => entries,
        };

        if entries.is_empty() {
            return vec![EMPTY_MESSAGE.into()];
        }

        let mut lines = vec!["Leaderboard".into(), "Top performing interns".into()];

        for entry in self.podium() {
            lines.push(format!(
                "  {} — {} (Rank #{})",
                entry.name,
                format_usd(entry.amount),
                entry.rank
            ));
        }

        lines.push("Full Rankings".into());
        for entry in entries {
            let medal = entry.medal.map(medal_icon).unwrap_or(' ');
            let you = if entry.is_user == Some(true) { " [You]" } else { "" };
            lines.push(format!(
                "  {medal}#{} {}{} {} {}",
                entry.rank,
                entry.name,
                you,
                trend_icon(entry.status),
                format_usd(entry.amount)
            ));
        }

        lines
    }
}

pub fn trend_icon(status: TrendStatus) -> char {
    match status {
        TrendStatus::MovingUp => '↑',
        TrendStatus::MovingDown => '↓',
        TrendStatus::NoChange => '−',
    }
}

pub fn medal_icon(medal: Medal) -> char {
    match medal {
        Medal::Gold => '🥇',
        Medal::Silver => '🥈',
        Medal::Bronze => '🥉',
    }
}
