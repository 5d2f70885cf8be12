//! # Portal Record
//!
//! The single read-only record served by `GET /api/data`.
//!
//! Built once at startup and shared immutably for the life of the process.
//! Field names serialize in camelCase and enums serialize as their display
//! strings, so the JSON body matches the contract the frontend expects.
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Suffix appended to generated referral codes.
pub const REFERRAL_CODE_SUFFIX: &str = "2025";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalRecord {
    pub user: UserProfile,
    pub stats: Stats,
    pub recent_activity: Vec<ActivityEntry>,
    pub rewards: Rewards,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub referral_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_donations: u32,
    pub donation_change: String,
    pub referrals: u32,
    pub referral_change: String,
    pub monthly_goal: GoalProgress,
    pub growth_rate: GrowthRate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalProgress {
    pub current: u32,
    pub target: u32,
}

impl GoalProgress {
    /// Progress as a whole percentage, rounded to the nearest integer.
    pub fn percent(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        ((self.current as f64 / self.target as f64) * 100.0).round() as u32
    }

    /// Same as [`percent`](Self::percent) but capped at 100 for display,
    /// so progress bars never overflow when current exceeds target.
    pub fn percent_clamped(&self) -> u32 {
        self.percent().min(100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthRate {
    pub percentage: u32,
    pub period: String,
}

/// One row of the recent-activity feed. `time` is a relative display label
/// ("2 hours ago"), not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rewards {
    pub next_reward: NextReward,
    pub unlocked: Vec<Reward>,
    pub locked: Vec<Reward>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextReward {
    pub title: String,
    pub current: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: u32,
    pub title: String,
    pub goal: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub amount: u32,
    pub status: TrendStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_user: Option<bool>,
}

/// Leaderboard movement indicator. Serialized as the display strings the
/// original endpoint used, to keep the wire format byte-compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendStatus {
    #[serde(rename = "Moving up")]
    MovingUp,
    #[serde(rename = "Moving down")]
    MovingDown,
    #[serde(rename = "No change")]
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl PortalRecord {
    /// Checks the leaderboard invariants: ranks strictly increasing, the
    /// first rank exactly 1, and at most one entry flagged as the current
    /// user.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(first) = self.leaderboard.first() {
            if first.rank != 1 {
                return Err(AppError::InvalidRecord(format!(
                    "leaderboard starts at rank {}, expected 1",
                    first.rank
                )));
            }
        }

        let mut prev = 0;
        for entry in &self.leaderboard {
            if entry.rank <= prev {
                return Err(AppError::InvalidRecord(format!(
                    "leaderboard rank {} out of order (expected > {prev})",
                    entry.rank
                )));
            }
            prev = entry.rank;
        }

        let user_rows = self
            .leaderboard
            .iter()
            .filter(|e| e.is_user == Some(true))
            .count();
        if user_rows > 1 {
            return Err(AppError::InvalidRecord(format!(
                "{user_rows} leaderboard entries flagged as the current user"
            )));
        }

        Ok(())
    }
}

/// The fixed demo record. This is the entire "database".
pub fn demo_record() -> PortalRecord {
    PortalRecord {
        user: UserProfile {
            name: "Demo User".into(),
            referral_code: "demouser2025".into(),
        },
        stats: Stats {
            total_donations: 750,
            donation_change: "+12% from last month".into(),
            referrals: 12,
            referral_change: "+3 this month".into(),
            monthly_goal: GoalProgress {
                current: 750,
                target: 1000,
            },
            growth_rate: GrowthRate {
                percentage: 15,
                period: "Above average".into(),
            },
        },
        recent_activity: vec![
            ActivityEntry {
                kind: "New donation received".into(),
                person: Some("Sarah J.".into()),
                amount: Some(50),
                goal: None,
                time: "2 hours ago".into(),
            },
            ActivityEntry {
                kind: "Referral signup".into(),
                person: Some("Sarah J.".into()),
                amount: None,
                goal: None,
                time: "1 day ago".into(),
            },
            ActivityEntry {
                kind: "Goal milestone reached".into(),
                person: None,
                amount: None,
                goal: Some("75%".into()),
                time: "3 days ago".into(),
            },
            ActivityEntry {
                kind: "New donation received".into(),
                person: Some("Anonymous".into()),
                amount: Some(25),
                goal: None,
                time: "5 days ago".into(),
            },
        ],
        rewards: Rewards {
            next_reward: NextReward {
                title: "Top Performer".into(),
                current: 750,
                target: 1000,
            },
            unlocked: vec![
                Reward {
                    id: 1,
                    title: "First Donation".into(),
                    goal: 100,
                },
                Reward {
                    id: 2,
                    title: "Rising Star".into(),
                    goal: 500,
                },
            ],
            locked: vec![
                Reward {
                    id: 3,
                    title: "Top Performer".into(),
                    goal: 1000,
                },
                Reward {
                    id: 4,
                    title: "Elite Fundraiser".into(),
                    goal: 2500,
                },
            ],
        },
        leaderboard: vec![
            LeaderboardEntry {
                rank: 1,
                name: "Sarah Johnson".into(),
                amount: 2850,
                status: TrendStatus::NoChange,
                medal: Some(Medal::Gold),
                is_user: None,
            },
            LeaderboardEntry {
                rank: 2,
                name: "Mike Chen".into(),
                amount: 2640,
                status: TrendStatus::MovingUp,
                medal: Some(Medal::Silver),
                is_user: None,
            },
            LeaderboardEntry {
                rank: 3,
                name: "Emily Davis".into(),
                amount: 2420,
                status: TrendStatus::MovingDown,
                medal: Some(Medal::Bronze),
                is_user: None,
            },
            LeaderboardEntry {
                rank: 4,
                name: "Alex Rodriguez".into(),
                amount: 1980,
                status: TrendStatus::MovingUp,
                medal: None,
                is_user: None,
            },
            LeaderboardEntry {
                rank: 5,
                name: "Demo User".into(),
                amount: 750,
                status: TrendStatus::NoChange,
                medal: None,
                is_user: Some(true),
            },
            LeaderboardEntry {
                rank: 6,
                name: "Jessica Lee".into(),
                amount: 650,
                status: TrendStatus::MovingDown,
                medal: None,
                is_user: None,
            },
            LeaderboardEntry {
                rank: 7,
                name: "David Wilson".into(),
                amount: 580,
                status: TrendStatus::MovingUp,
                medal: None,
                is_user: None,
            },
        ],
    }
}

/// Builds a referral code from a full name: lowercased, all whitespace
/// removed, fixed year suffix appended.
pub fn referral_code_for(full_name: &str) -> String {
    let mut code: String = full_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    code.push_str(REFERRAL_CODE_SUFFIX);
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_record_passes_validation() {
        demo_record().validate().unwrap();
    }

    #[test]
    fn demo_ranks_start_at_one_and_increase() {
        let record = demo_record();
        let ranks: Vec<u32> = record.leaderboard.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn exactly_one_user_row_in_demo_data() {
        let record = demo_record();
        let users: Vec<&str> = record
            .leaderboard
            .iter()
            .filter(|e| e.is_user == Some(true))
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(users, vec!["Demo User"]);
    }

    #[test]
    fn duplicate_rank_rejected() {
        let mut record = demo_record();
        record.leaderboard[1].rank = 1;
        assert!(record.validate().is_err());
    }

    #[test]
    fn rank_sequence_must_start_at_one() {
        let mut record = demo_record();
        // Ranks 3..7 remain: still strictly increasing, but not from 1.
        record.leaderboard.drain(..2);
        assert!(record.validate().is_err());
    }

    #[test]
    fn serialization_is_idempotent() {
        let record = demo_record();
        let a = serde_json::to_vec(&record).unwrap();
        let b = serde_json::to_vec(&record).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wire_format_matches_original_contract() {
        let json = serde_json::to_value(demo_record()).unwrap();
        assert_eq!(json["user"]["referralCode"], "demouser2025");
        assert_eq!(json["stats"]["totalDonations"], 750);
        assert_eq!(json["stats"]["monthlyGoal"]["target"], 1000);
        assert_eq!(json["recentActivity"][0]["type"], "New donation received");
        assert_eq!(json["leaderboard"][0]["medal"], "gold");
        assert_eq!(json["leaderboard"][1]["status"], "Moving up");
        assert_eq!(json["leaderboard"][4]["isUser"], true);
        // Optional fields absent, not null.
        assert!(json["leaderboard"][3].get("medal").is_none());
        assert!(json["recentActivity"][1].get("amount").is_none());
    }

    #[test]
    fn goal_percent_rounds_to_nearest() {
        assert_eq!(GoalProgress { current: 750, target: 1000 }.percent(), 75);
        assert_eq!(GoalProgress { current: 1, target: 3 }.percent(), 33);
        assert_eq!(GoalProgress { current: 2, target: 3 }.percent(), 67);
        assert_eq!(GoalProgress { current: 0, target: 0 }.percent(), 0);
    }

    #[test]
    fn overflowing_progress_is_clamped_for_display() {
        let goal = GoalProgress { current: 1200, target: 1000 };
        assert_eq!(goal.percent(), 120);
        assert_eq!(goal.percent_clamped(), 100);
    }

    #[test]
    fn referral_codes_strip_whitespace_and_lowercase() {
        assert_eq!(referral_code_for("Sarah Johnson"), "sarahjohnson2025");
        assert_eq!(referral_code_for("Ann  Lee"), "annlee2025");
        assert_eq!(referral_code_for(""), "2025");
    }
}
