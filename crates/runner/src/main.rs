use common::LogLevel;
use oauth::{ClientCredentials, TokenClient};
use rest_client::{ApiConfig, CancellationToken, Method, RestClient};
use tracing::{error, info};

/// Path requested when none is given on the command line.
const DEFAULT_PATH: &str = "/general/rate/forex?RateType=e-rate&CurrencyCode=USD";

#[tokio::main]
async fn main() {
    common::init_logging(LogLevel::from_env());

    if let Err(e) = run().await {
        error!(error = %e, "Run failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| DEFAULT_PATH.to_string());
    let method = match args.next() {
        Some(m) => m.to_uppercase().parse::<Method>()?,
        None => Method::GET,
    };
    let body = args.next().unwrap_or_default();

    let config = ApiConfig::from_env()?;
    info!(base_url = %config.base_url(), log_level = %config.log_level(), "Starting");

    let client = RestClient::new(config)?;
    let client_credentials = ClientCredentials::from_env()?;
    let token = TokenClient::new(&client, &client_credentials)
        .fetch_token()
        .await?;

    // Ctrl+C abandons the in-flight call
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, cancelling request");
            trigger.cancel();
        }
    });

    let response = client
        .call_cancellable(
            &cancel,
            method,
            &path,
            token.access_token(),
            None,
            body.as_bytes(),
        )
        .await?;

    println!("{}", response.status());
    println!("{}", response.text());

    Ok(())
}
