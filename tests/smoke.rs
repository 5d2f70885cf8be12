//! End-to-end smoke tests: serve the real router on an ephemeral port and
//! drive both the raw endpoint and the client views against it.
use std::{net::SocketAddr, time::Duration};

use tokio::net::TcpListener;

use intern_portal::{
    app,
    client::{
        app::{App, Delays, Msg, Route},
        fetch::ApiClient,
        login::Mode,
    },
    state::State,
};

async fn spawn_server() -> SocketAddr {
    let state = State::new().expect("demo record must validate");
    let router = app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

fn fast_delays() -> Delays {
    Delays {
        submit: Duration::ZERO,
        leaderboard_load: Duration::ZERO,
        copy_reset: Duration::ZERO,
    }
}

#[tokio::test]
async fn data_endpoint_serves_the_full_record() {
    let addr = spawn_server().await;
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/data"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["user"]["name"], "Demo User");
    assert_eq!(body["user"]["referralCode"], "demouser2025");
    assert_eq!(body["stats"]["totalDonations"], 750);
    assert_eq!(body["rewards"]["nextReward"]["target"], 1000);
    assert_eq!(body["recentActivity"].as_array().unwrap().len(), 4);
    assert_eq!(body["leaderboard"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn leaderboard_ranks_strictly_increase_from_one() {
    let addr = spawn_server().await;
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/data"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let ranks: Vec<u64> = body["leaderboard"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["rank"].as_u64().unwrap())
        .collect();

    assert_eq!(ranks[0], 1);
    assert!(ranks.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn repeated_fetches_return_identical_bytes() {
    let addr = spawn_server().await;
    let url = format!("http://{addr}/api/data");

    let first = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn signup_flow_reaches_dashboard_with_generated_code() {
    let addr = spawn_server().await;
    let (mut app, _deferred) =
        App::with_delays(ApiClient::new(format!("http://{addr}")), fast_delays());

    app.handle(Msg::SetLoginMode(Mode::Signup)).await;
    app.handle(Msg::EditFullName("Sarah Johnson".into())).await;
    app.handle(Msg::Submit).await;

    let lines = app.render();
    assert!(lines.contains(&"Welcome back, Sarah Johnson!".to_string()));
    assert!(lines
        .iter()
        .any(|l| l.contains("sarahjohnson2025") && l.contains("[Copy]")));
    assert!(lines.iter().any(|l| l.starts_with("Monthly Goal: 75%")));
}

#[tokio::test]
async fn login_flow_falls_back_to_server_referral_code() {
    let addr = spawn_server().await;
    let (mut app, _deferred) =
        App::with_delays(ApiClient::new(format!("http://{addr}")), fast_delays());

    app.handle(Msg::Submit).await;

    let lines = app.render();
    assert!(lines.contains(&"Welcome back, Demo User!".to_string()));
    assert!(lines.iter().any(|l| l.contains("demouser2025")));
}

#[tokio::test]
async fn copy_confirmation_is_visible_then_reverts() {
    let addr = spawn_server().await;
    let (mut app, mut deferred) =
        App::with_delays(ApiClient::new(format!("http://{addr}")), fast_delays());

    app.handle(Msg::Submit).await;
    app.handle(Msg::CopyReferralCode).await;

    assert_eq!(app.clipboard.as_deref(), Some("demouser2025"));
    // The confirmation is up until the deferred reset is pumped back in.
    assert!(app.render().iter().any(|l| l.contains("[Copied!]")));

    let msg = deferred.recv().await.unwrap();
    app.handle(msg).await;
    assert!(app.render().iter().any(|l| l.contains("[Copy]")));
}

#[tokio::test]
async fn leaderboard_flow_shows_podium_and_user_tag() {
    let addr = spawn_server().await;
    let (mut app, _deferred) =
        App::with_delays(ApiClient::new(format!("http://{addr}")), fast_delays());

    app.handle(Msg::Submit).await;
    app.handle(Msg::Navigate(Route::Leaderboard)).await;
    assert_eq!(app.route(), Route::Leaderboard);

    let lines = app.render();
    assert!(lines.iter().any(|l| l.contains("Sarah Johnson") && l.contains("Rank #1")));
    assert!(lines.iter().any(|l| l.contains("Demo User") && l.contains("[You]")));
}
