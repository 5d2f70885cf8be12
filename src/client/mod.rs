//! # Presentation Client
//!
//! Client logic/relevant structures.
//!
//! Three views (login, dashboard, leaderboard), each a serializable state
//! struct with pure transition functions and a text renderer. A single
//! controller in [`app`] owns the [`session::Session`] and the current view,
//! and drives everything through messages, so navigation and timers never
//! touch view internals directly.
//!
//! ## Flow
//!
//! - Login submits after a fixed simulated delay, generating a referral code
//!   in signup mode
//! - The session carries `{full_name, referral_code}` to the dashboard; an
//!   empty code means "use the server default"
//! - Dashboard and leaderboard each fetch the record once per mount through
//!   the shared [`fetch::Loadable`] tri-state
//! - All user interaction mutates local view state only; the server's record
//!   is never written

pub mod app;
pub mod dashboard;
pub mod fetch;
pub mod leaderboard;
pub mod login;
pub mod session;

/// Currency display with thousands separators, e.g. `$2,850`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${out}")
}
