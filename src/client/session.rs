use serde::{Deserialize, Serialize};

/// Cross-view context owned by the controller.
///
/// Replaces the ephemeral login-to-dashboard navigation handoff: the session
/// survives route changes, so returning to the dashboard never silently
/// reverts to defaults. An empty `referral_code` means the dashboard should
/// fall back to the server-provided one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Session {
    pub full_name: Option<String>,
    pub referral_code: String,
}

impl Session {
    pub fn sign_in(&mut self, full_name: String, referral_code: String) {
        self.full_name = Some(full_name);
        self.referral_code = referral_code;
    }

    pub fn sign_out(&mut self) {
        *self = Session::default();
    }
}
