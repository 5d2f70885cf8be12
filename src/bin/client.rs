//! Scripted client demo: drives the portal views from stdin lines.
//!
//! Run the server first, then:
//! ```sh
//! cargo run --bin client
//! ```
//!
//! Commands: `login`, `signup`, `name <text>`, `email <text>`,
//! `password <text>`, `show`, `submit`, `copy`, `retry`, `dashboard`,
//! `leaderboard`, `logout`, `quit`.
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use intern_portal::{
    client::{
        app::{App, Msg, Route},
        fetch::ApiClient,
        login::Mode,
    },
    config::Config,
};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let (mut app, mut deferred) = App::new(ApiClient::new(config.api_url));

    print_view(&app);

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Ok(Some(line)) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" || line == "exit" {
                    break;
                }
                let Some(msg) = parse_command(line) else {
                    println!("Unknown command: {line}");
                    continue;
                };
                app.handle(msg).await;
                print_view(&app);
            }
            // Deferred events, e.g. the copy-confirmation reset timer.
            Some(msg) = deferred.recv() => {
                app.handle(msg).await;
                print_view(&app);
            }
        }
    }
}

fn parse_command(line: &str) -> Option<Msg> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let msg = match command {
        "login" => Msg::SetLoginMode(Mode::Login),
        "signup" => Msg::SetLoginMode(Mode::Signup),
        "name" => Msg::EditFullName(rest.to_string()),
        "email" => Msg::EditEmail(rest.to_string()),
        "password" => Msg::EditPassword(rest.to_string()),
        "show" => Msg::ToggleShowPassword,
        "submit" => Msg::Submit,
        "copy" => Msg::CopyReferralCode,
        "retry" => Msg::Retry,
        "dashboard" => Msg::Navigate(Route::Dashboard),
        "leaderboard" => Msg::Navigate(Route::Leaderboard),
        "logout" => Msg::Logout,
        _ => return None,
    };

    Some(msg)
}

fn print_view(app: &App) {
    println!("----------------------------------------");
    for line in app.render() {
        println!("{line}");
    }
}
