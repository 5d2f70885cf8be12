//! Dashboard view: summary cards, referral code, activity feed, rewards.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::record::{GoalProgress, PortalRecord, Reward};

use super::{
    fetch::Loadable,
    format_usd,
    session::Session,
};

/// How long the "Copied!" confirmation stays up before reverting.
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashboardView {
    pub data: Loadable<PortalRecord>,
    pub copied: bool,
}

impl DashboardView {
    /// Fresh view in the loading state, as mounted before its fetch lands.
    pub fn mount() -> Self {
        Self::default()
    }

    pub fn data_loaded(&mut self, data: Loadable<PortalRecord>) {
        self.data = data;
    }

    /// Retry affordance for the error state: back to loading so the
    /// controller can issue a new fetch.
    pub fn retry(&mut self) {
        self.data = Loadable::Loading;
        self.copied = false;
    }

    /// Display name: the session's when signed in, else the server default.
    pub fn user_name(&self, session: &Session) -> String {
        session
            .full_name
            .clone()
            .or_else(|| self.data.ready().map(|d| d.user.name.clone()))
            .unwrap_or_else(|| "Demo User".into())
    }

    /// Referral code shown and copied: the session's signup-generated code
    /// when present, else the server default.
    pub fn referral_code(&self, session: &Session) -> String {
        if !session.referral_code.is_empty() {
            return session.referral_code.clone();
        }
        self.data
            .ready()
            .map(|d| d.user.referral_code.clone())
            .unwrap_or_default()
    }

    /// Copy action: returns the code for the clipboard and raises the
    /// confirmation flag. The controller reverts it after
    /// [`COPY_RESET_DELAY`]. No-op while there is nothing to copy.
    pub fn copy_referral_code(&mut self, session: &Session) -> Option<String> {
        let code = self.referral_code(session);
        if code.is_empty() {
            return None;
        }
        self.copied = true;
        Some(code)
    }

    pub fn reset_copied(&mut self) {
        self.copied = false;
    }

    pub fn render(&self, session: &Session) -> Vec<String> {
        let record = match &self.data {
            Loadable::Loading => return vec!["Loading dashboard...".into()],
            Loadable::Failed(message) => {
                return vec![
                    format!("Error: could not load dashboard data. {message}"),
                    "> Retry".into(),
                ];
            }
            Loadable::Ready(record) => record,
        };

        let stats = &record.stats;
        let mut lines = vec![
            "Intern Portal".into(),
            format!("Welcome back, {}!", self.user_name(session)),
            format!(
                "Total Donations: {} ({})",
                format_usd(stats.total_donations),
                stats.donation_change
            ),
            format!("Referrals: {} ({})", stats.referrals, stats.referral_change),
            format!(
                "Monthly Goal: {}% ({} / {})",
                stats.monthly_goal.percent(),
                format_usd(stats.monthly_goal.current),
                format_usd(stats.monthly_goal.target)
            ),
            format!(
                "Growth Rate: +{}% ({})",
                stats.growth_rate.percentage, stats.growth_rate.period
            ),
            format!(
                "Your Referral Code: {} [{}]",
                self.referral_code(session),
                if self.copied { "Copied!" } else { "Copy" }
            ),
            "Recent Activity".into(),
        ];

        for activity in &record.recent_activity {
            let detail = activity
                .person
                .as_deref()
                .or(activity.goal.as_deref())
                .unwrap_or_default();
            let amount = activity
                .amount
                .map(|a| format!(" {}", format_usd(a)))
                .unwrap_or_default();
            lines.push(format!(
                "  {} — {}{} ({})",
                activity.kind, detail, amount, activity.time
            ));
        }

        let next = &record.rewards.next_reward;
        lines.push("Rewards & Achievements".into());
        lines.push(format!(
            "Next Reward: {}% ({} / {}) — {}",
            next_reward_percent(record),
            format_usd(next.current),
            format_usd(next.target),
            next.title
        ));

        let (unlocked, locked) = split_rewards(record);
        for reward in unlocked {
            lines.push(format!(
                "  [unlocked] {} ({})",
                reward.title,
                format_usd(reward.goal)
            ));
        }
        for reward in locked {
            lines.push(format!(
                "  [locked] {} ({})",
                reward.title,
                format_usd(reward.goal)
            ));
        }

        lines
    }
}

/// Progress toward the next reward, capped at 100 so an over-target current
/// value cannot overflow the bar.
pub fn next_reward_percent(record: &PortalRecord) -> u32 {
    let next = &record.rewards.next_reward;
    GoalProgress {
        current: next.current,
        target: next.target,
    }
    .percent_clamped()
}

/// Splits rewards into unlocked/locked from the live donation total rather
/// than trusting the record's hand-maintained lists, so the panel can never
/// disagree with the stats card above it.
pub fn split_rewards(record: &PortalRecord) -> (Vec<&Reward>, Vec<&Reward>) {
    let total = record.stats.total_donations;
    record
        .rewards
        .unlocked
        .iter()
        .chain(record.rewards.locked.iter())
        .partition(|reward| reward.goal <= total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::demo_record;

    fn ready_view() -> DashboardView {
        let mut view = DashboardView::mount();
        view.data_loaded(Loadable::Ready(demo_record()));
        view
    }

    #[test]
    fn mount_starts_loading() {
        let view = DashboardView::mount();
        assert_eq!(view.render(&Session::default()), vec!["Loading dashboard..."]);
    }

    #[test]
    fn fetch_failure_renders_error_with_retry() {
        let mut view = DashboardView::mount();
        view.data_loaded(Loadable::Failed("Network error".into()));

        let lines = view.render(&Session::default());
        assert!(lines[0].starts_with("Error: could not load dashboard data."));
        assert!(lines.contains(&"> Retry".to_string()));

        view.retry();
        assert!(view.data.is_loading());
    }

    #[test]
    fn goal_percentage_is_rounded_to_whole_percent() {
        let lines = ready_view().render(&Session::default());
        assert!(lines.iter().any(|l| l.starts_with("Monthly Goal: 75%")));
    }

    #[test]
    fn session_overrides_server_defaults() {
        let mut session = Session::default();
        session.sign_in("Sarah Johnson".into(), "sarahjohnson2025".into());

        let view = ready_view();
        assert_eq!(view.user_name(&session), "Sarah Johnson");
        assert_eq!(view.referral_code(&session), "sarahjohnson2025");
    }

    #[test]
    fn empty_session_falls_back_to_server_record() {
        let view = ready_view();
        let session = Session::default();
        assert_eq!(view.user_name(&session), "Demo User");
        assert_eq!(view.referral_code(&session), "demouser2025");
    }

    #[test]
    fn copy_sets_flag_until_reset() {
        let mut view = ready_view();
        let session = Session::default();

        let copied = view.copy_referral_code(&session);
        assert_eq!(copied.as_deref(), Some("demouser2025"));
        assert!(view.copied);

        view.reset_copied();
        assert!(!view.copied);
    }

    #[test]
    fn copy_is_noop_while_loading() {
        let mut view = DashboardView::mount();
        assert_eq!(view.copy_referral_code(&Session::default()), None);
        assert!(!view.copied);
    }

    #[test]
    fn reward_split_derives_from_donation_total() {
        let record = demo_record();
        let (unlocked, locked) = split_rewards(&record);

        let unlocked: Vec<&str> = unlocked.iter().map(|r| r.title.as_str()).collect();
        let locked: Vec<&str> = locked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(unlocked, vec!["First Donation", "Rising Star"]);
        assert_eq!(locked, vec!["Top Performer", "Elite Fundraiser"]);
    }

    #[test]
    fn reward_split_moves_rewards_as_totals_grow() {
        let mut record = demo_record();
        record.stats.total_donations = 1000;

        let (unlocked, _) = split_rewards(&record);
        assert!(unlocked.iter().any(|r| r.title == "Top Performer"));
    }

    #[test]
    fn next_reward_progress_is_clamped() {
        let mut record = demo_record();
        assert_eq!(next_reward_percent(&record), 75);

        record.rewards.next_reward.current = 1500;
        assert_eq!(next_reward_percent(&record), 100);
    }
}
