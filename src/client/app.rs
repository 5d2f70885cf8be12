//! Client controller: owns the session, the current view, and all timers.
//!
//! Views expose pure transitions; everything effectful (fetches, simulated
//! delays, the clipboard) happens here, driven by [`Msg`] values. The submit
//! and leaderboard delays are awaited inline, giving the original's behavior
//! of suspending interaction while they run. The copy-confirmation reset is
//! different: the original keeps the UI live while its timer runs, so it is
//! scheduled as a deferred [`Msg::ResetCopied`] on the channel returned by
//! [`App::new`], and the driving loop feeds it back in. Renders in between
//! see the raised flag.
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use super::{
    dashboard::{DashboardView, COPY_RESET_DELAY},
    fetch::{ApiClient, Loadable},
    leaderboard::{LeaderboardView, LOAD_DELAY},
    login::{LoginView, Mode, SUBMIT_DELAY},
    session::Session,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Leaderboard,
}

#[derive(Debug, Clone)]
pub enum View {
    Login(LoginView),
    Dashboard(DashboardView),
    Leaderboard(LeaderboardView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    SetLoginMode(Mode),
    EditFullName(String),
    EditEmail(String),
    EditPassword(String),
    ToggleShowPassword,
    Submit,
    CopyReferralCode,
    ResetCopied,
    Retry,
    Navigate(Route),
    Logout,
}

/// The three fixed timers, overridable so tests need not wait them out.
#[derive(Debug, Clone, Copy)]
pub struct Delays {
    pub submit: Duration,
    pub leaderboard_load: Duration,
    pub copy_reset: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            submit: SUBMIT_DELAY,
            leaderboard_load: LOAD_DELAY,
            copy_reset: COPY_RESET_DELAY,
        }
    }
}

pub struct App {
    api: ApiClient,
    delays: Delays,
    deferred_tx: UnboundedSender<Msg>,
    pub session: Session,
    pub view: View,
    /// Last value handed to the copy action, in lieu of a real clipboard.
    pub clipboard: Option<String>,
}

impl App {
    /// Returns the app plus the receiver for deferred messages (currently
    /// only the copy-confirmation reset). The driving loop must feed
    /// received messages back into [`handle`](Self::handle).
    pub fn new(api: ApiClient) -> (Self, UnboundedReceiver<Msg>) {
        Self::with_delays(api, Delays::default())
    }

    pub fn with_delays(api: ApiClient, delays: Delays) -> (Self, UnboundedReceiver<Msg>) {
        let (deferred_tx, deferred_rx) = mpsc::unbounded_channel();
        let app = Self {
            api,
            delays,
            deferred_tx,
            session: Session::default(),
            view: View::Login(LoginView::default()),
            clipboard: None,
        };
        (app, deferred_rx)
    }

    pub fn route(&self) -> Route {
        match self.view {
            View::Login(_) => Route::Login,
            View::Dashboard(_) => Route::Dashboard,
            View::Leaderboard(_) => Route::Leaderboard,
        }
    }

    pub fn render(&self) -> Vec<String> {
        match &self.view {
            View::Login(view) => view.render(),
            View::Dashboard(view) => view.render(&self.session),
            View::Leaderboard(view) => view.render(),
        }
    }

    pub async fn handle(&mut self, msg: Msg) {
        debug!(?msg, "handling message");
        match msg {
            Msg::SetLoginMode(mode) => {
                if let View::Login(view) = &mut self.view {
                    view.set_mode(mode);
                }
            }
            Msg::EditFullName(value) => {
                if let View::Login(view) = &mut self.view {
                    view.full_name = value;
                }
            }
            Msg::EditEmail(value) => {
                if let View::Login(view) = &mut self.view {
                    view.email = value;
                }
            }
            Msg::EditPassword(value) => {
                if let View::Login(view) = &mut self.view {
                    view.password = value;
                }
            }
            Msg::ToggleShowPassword => {
                if let View::Login(view) = &mut self.view {
                    view.toggle_show_password();
                }
            }
            Msg::Submit => {
                if let View::Login(view) = &mut self.view {
                    let submission = view.submit();
                    tokio::time::sleep(self.delays.submit).await;
                    self.session
                        .sign_in(submission.full_name, submission.referral_code);
                    self.mount_dashboard().await;
                }
            }
            Msg::CopyReferralCode => {
                let session = self.session.clone();
                if let View::Dashboard(view) = &mut self.view {
                    if let Some(code) = view.copy_referral_code(&session) {
                        self.clipboard = Some(code);
                        // One-shot timer; the confirmation stays up until the
                        // loop delivers the reset back to us.
                        let tx = self.deferred_tx.clone();
                        let delay = self.delays.copy_reset;
                        tokio::spawn(async move {
                            tokio::time::sleep(delay).await;
                            let _ = tx.send(Msg::ResetCopied);
                        });
                    }
                }
            }
            Msg::ResetCopied => {
                if let View::Dashboard(view) = &mut self.view {
                    view.reset_copied();
                }
            }
            Msg::Retry => {
                if matches!(self.view, View::Dashboard(_)) {
                    self.mount_dashboard().await;
                }
            }
            Msg::Navigate(Route::Dashboard) => self.mount_dashboard().await,
            Msg::Navigate(Route::Leaderboard) => self.mount_leaderboard().await,
            Msg::Navigate(Route::Login) | Msg::Logout => {
                self.session.sign_out();
                self.view = View::Login(LoginView::default());
            }
        }
    }

    async fn mount_dashboard(&mut self) {
        let mut view = DashboardView::mount();
        view.data_loaded(Loadable::from_result(self.api.fetch_record().await));
        self.view = View::Dashboard(view);
    }

    async fn mount_leaderboard(&mut self) {
        tokio::time::sleep(self.delays.leaderboard_load).await;
        let mut view = LeaderboardView::mount();
        let data = self
            .api
            .fetch_record()
            .await
            .map(|record| record.leaderboard);
        view.data_loaded(Loadable::from_result(data));
        self.view = View::Leaderboard(view);
    }
}
