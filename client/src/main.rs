#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use client::{api::ApiClient, auth::AuthSession, environment};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = environment();
    environment.log_summary();

    // The login link only depends on the identity provider parameters.
    let session = AuthSession::new(environment);
    match session.login_link("") {
        Ok(link) => println!("login: {link}"),
        Err(e) => {
            tracing::error!("Failed to build login link: {e}");
            std::process::exit(1);
        }
    }

    let api = ApiClient::new(environment);
    tracing::info!("fetching drinks from {}", api.url("drinks"));

    let drinks = api.get_drinks().await.unwrap_or_else(|e| {
        tracing::error!("Failed to fetch drinks: {e}");
        std::process::exit(1);
    });

    for drink in &drinks {
        println!("{:>4}  {}", drink.id, drink.title);
    }
    tracing::info!("fetched {} drinks", drinks.len());
}
