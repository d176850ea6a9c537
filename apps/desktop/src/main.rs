use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use client_core::{
    load_settings, ClientEvent, ClientSettings, CredentialProvider, HttpSearchTransport,
    SearchPage, StaticCredentialProvider, StorageCredentialProvider,
};
use shared::domain::{SearchField, SearchQuery};
use storage::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "trade-search", about = "Submit import/export trade record searches")]
struct Cli {
    /// Overrides the configured backend base URL.
    #[arg(long, global = true)]
    backend_url: Option<String>,
    /// Overrides the configured client storage location.
    #[arg(long, global = true)]
    storage_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a search request.
    Search(SearchArgs),
    /// Manage the stored session token.
    #[command(subcommand)]
    Session(SessionCommand),
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[arg(long)]
    from_date: Option<NaiveDate>,
    #[arg(long)]
    to_date: Option<NaiveDate>,
    #[arg(long)]
    country: Option<String>,
    /// `import` or `export`.
    #[arg(long)]
    direction: Option<String>,
    #[arg(long)]
    buyer_name: Option<String>,
    #[arg(long)]
    hs_code: Option<String>,
    #[arg(long)]
    supplier_name: Option<String>,
    #[arg(long)]
    origin_country: Option<String>,
    #[arg(long)]
    pro_desc: Option<String>,
    #[arg(long)]
    bill_no: Option<String>,
    /// Use this token instead of the stored session token.
    #[arg(long)]
    token: Option<String>,
}

impl SearchArgs {
    fn field_values(&self) -> Vec<(SearchField, String)> {
        let dates = [
            (SearchField::FromDate, self.from_date),
            (SearchField::ToDate, self.to_date),
        ]
        .into_iter()
        .filter_map(|(field, date)| date.map(|d| (field, d.format("%Y-%m-%d").to_string())));

        let text = [
            (SearchField::Country, &self.country),
            (SearchField::Direction, &self.direction),
            (SearchField::BuyerName, &self.buyer_name),
            (SearchField::HsCode, &self.hs_code),
            (SearchField::SupplierName, &self.supplier_name),
            (SearchField::OriginCountry, &self.origin_country),
            (SearchField::ProDesc, &self.pro_desc),
            (SearchField::BillNo, &self.bill_no),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)));

        dates.chain(text).collect()
    }
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Store a bearer token for later searches.
    Set { token: String },
    /// Remove the stored token.
    Clear,
    /// Show whether a token is stored.
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(url) = cli.backend_url {
        settings.backend_url = url;
    }
    if let Some(url) = cli.storage_url {
        settings.storage_url = url;
    }

    match cli.command {
        Command::Search(args) => run_search(&settings, args).await,
        Command::Session(cmd) => run_session(&settings, cmd).await,
    }
}

async fn run_search(settings: &ClientSettings, args: SearchArgs) -> Result<ExitCode> {
    settings.validate()?;

    let credentials: Arc<dyn CredentialProvider> = match &args.token {
        Some(token) => Arc::new(StaticCredentialProvider::new(token.clone())),
        None => Arc::new(StorageCredentialProvider::new(
            Storage::new(&settings.storage_url).await?,
        )),
    };
    let transport = HttpSearchTransport::new(&settings.backend_url)
        .with_context(|| format!("invalid backend url '{}'", settings.backend_url))?;
    info!(endpoint = %transport.endpoint(), "submitting trade search");

    let page = SearchPage::with_query(
        Arc::new(transport),
        credentials,
        SearchQuery::with_contact_email(settings.contact_email.clone()),
    );
    for (field, value) in args.field_values() {
        page.set_field(field, value)
            .await
            .with_context(|| format!("invalid value for {field}"))?;
    }

    let mut events = page.subscribe_events();
    let outcome = page.submit().await;

    while let Ok(event) = events.try_recv() {
        match event {
            ClientEvent::ModalOpened { title, message } => println!("{title}\n{message}"),
            ClientEvent::Toast(toast) => eprintln!("{}", toast.message),
            ClientEvent::ModalClosed => {}
        }
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run_session(settings: &ClientSettings, cmd: SessionCommand) -> Result<ExitCode> {
    let storage = Storage::new(&settings.storage_url).await?;
    match cmd {
        SessionCommand::Set { token } => {
            storage.store_session_token(token.trim()).await?;
            println!("Session token stored.");
        }
        SessionCommand::Clear => {
            if storage.clear_session_token().await? {
                println!("Session token removed.");
            } else {
                println!("No session token was stored.");
            }
        }
        SessionCommand::Status => match storage.session_token_updated_at().await? {
            Some(updated_at) => println!("Session token stored (updated {updated_at})."),
            None => println!("No session token stored."),
        },
    }
    Ok(ExitCode::SUCCESS)
}
