//! Prisona CLI - command-line front end for the storefront demo.
//!
//! # Usage
//!
//! ```bash
//! # Sign in as a seeded account
//! prisona login -e customer@example.com -p anything -r customer
//!
//! # Where am I, and what can I open?
//! prisona whoami
//! prisona nav
//! prisona nav /admin/users
//!
//! # Browse and buy
//! prisona products --search dairy --sort price-asc
//! prisona coupon FRESH10 --subtotal 900
//! prisona checkout 1:1 4:2 --coupon WELCOME50
//!
//! prisona logout
//! ```
//!
//! The session is saved to `PRISONA_SESSION_FILE` between runs. The
//! directory and catalog are re-seeded on every run.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prisona_core::{OrderStatus, ProductStatus, Role};
use prisona_storefront::AppState;
use prisona_storefront::config::StorefrontConfig;
use prisona_storefront::services::catalog::{LineRequest, SortKey};

mod commands;

#[derive(Parser)]
#[command(name = "prisona")]
#[command(author, version, about = "Prisona Store command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as a directory user
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Password (required, not checked)
        #[arg(short, long)]
        password: String,

        /// Role to sign in as (`customer`, `shop_owner`, `farmer`, ...)
        #[arg(short, long)]
        role: Role,
    },
    /// Create a new account
    Register {
        #[command(flatten)]
        form: commands::account::RegisterForm,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the sidebar, or what opening a path would do
    Nav {
        /// In-app path such as `/farmer/orders`
        path: Option<String>,
    },
    /// List products
    Products {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        status: Option<ProductStatus>,

        /// `newest`, `price-asc`, `price-desc` or `name`
        #[arg(long, default_value = "newest")]
        sort: SortKey,
    },
    /// List the orders visible to the signed-in user
    Orders {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        status: Option<OrderStatus>,

        /// `newest`, `price-asc`, `price-desc` or `name`
        #[arg(long, default_value = "newest")]
        sort: SortKey,
    },
    /// Try a coupon code against a subtotal
    Coupon {
        code: String,

        /// Order subtotal in major units (e.g. `899.50`)
        #[arg(long)]
        subtotal: Decimal,
    },
    /// Place an order as the signed-in customer
    Checkout {
        /// Lines as `product_id:quantity`
        #[arg(required = true, value_parser = commands::catalog::parse_line)]
        lines: Vec<LineRequest>,

        #[arg(long)]
        coupon: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prisona_storefront=info,prisona_cli=info".into());

    // Logs go to stderr so command output stays clean
    let json = std::env::var("PRISONA_LOG_JSON").is_ok();
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if e.is_internal() {
            tracing::error!(error = %e, "Command failed");
        } else {
            tracing::debug!(error = %e, "Command rejected");
        }
        #[allow(clippy::print_stderr)]
        {
            eprintln!("{}", e.toast());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> prisona_storefront::Result<()> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::with_file_session(config);

    match cli.command {
        Commands::Login {
            email,
            password,
            role,
        } => commands::account::login(&state, &email, password, role).await?,
        Commands::Register { form } => commands::account::register(&state, form).await?,
        Commands::Logout => commands::account::logout(&state).await?,
        Commands::Whoami => commands::account::whoami(&state).await,
        Commands::Nav { path } => commands::nav::show(&state, path.as_deref()).await?,
        Commands::Products {
            search,
            status,
            sort,
        } => commands::catalog::products(&state, search, status, sort).await,
        Commands::Orders {
            search,
            status,
            sort,
        } => commands::catalog::orders(&state, search, status, sort).await?,
        Commands::Coupon { code, subtotal } => {
            commands::catalog::coupon(&state, &code, subtotal).await?;
        }
        Commands::Checkout { lines, coupon } => {
            commands::catalog::checkout(&state, &lines, coupon.as_deref()).await?;
        }
    }
    Ok(())
}
