//! End-to-end sandbox walkthrough: create a donor, attach a credit card
//! account, then issue a donation and read it back.
//!
//! ```text
//! IGIVEFIRST_API_KEY=... \
//! IGIVEFIRST_API_SECRET=... \
//! IGIVEFIRST_NONPROFIT_CAMPAIGN_GUID=... \
//! IGIVEFIRST_PUBLISHER_CAMPAIGN_GUID=... \
//!     cargo run --example create_donation
//! ```

use anyhow::Context;
use igivefirst_sdk::objects::account::{AccountContactInfo, AccountInfo};
use igivefirst_sdk::objects::donation::DonationInfo;
use igivefirst_sdk::objects::donor::DonorInfo;
use igivefirst_sdk::{Client, Credentials};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let api_key = env("IGIVEFIRST_API_KEY")?;
    let api_secret = env("IGIVEFIRST_API_SECRET")?;
    let non_profit_campaign: Uuid = env("IGIVEFIRST_NONPROFIT_CAMPAIGN_GUID")?.parse()?;
    let publisher_campaign: Uuid = env("IGIVEFIRST_PUBLISHER_CAMPAIGN_GUID")?.parse()?;

    // sandbox by default; use Client::with_environment for production
    let client = Client::new(Credentials::new(api_key, api_secret))?;

    let donor = client
        .donor()
        .create(&DonorInfo::new("jdoe").with_screen_name("JDoe"))
        .await?;
    println!("created donor {}", donor.guid);

    let contact = AccountContactInfo {
        billing_address1: Some("123 Main St".to_owned()),
        billing_city: Some("Denver".to_owned()),
        billing_state: Some("CO".to_owned()),
        billing_zip: Some("80202".to_owned()),
        ..AccountContactInfo::default()
    };
    let account = client
        .account()
        .create(
            &AccountInfo::credit_card(donor.guid, "4111111111111111", "123", "12", "2030")
                .with_contact_info(contact),
        )
        .await?;
    println!("created account {}", account.guid);

    let amount: Decimal = "5.00".parse()?;
    let donation = client
        .donation()
        .create(&DonationInfo::new(
            amount,
            non_profit_campaign,
            publisher_campaign,
            account.guid,
            donor.guid,
        ))
        .await?;
    println!("created donation {}", donation.guid);

    match client.donation().get(donation.guid).await? {
        Some(record) => println!("donation on record, amount {:?}", record.amount),
        None => println!("donation not visible yet"),
    }

    Ok(())
}

fn env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} is not set"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,igivefirst_sdk=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
