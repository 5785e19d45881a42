//! # inventory
//!
//! Command-line front end for the inventory service.
//!
//! Each command starts an [`InventorySystem`], drives one screen against it,
//! prints the result and shuts the system down. Logs go to stderr and are
//! controlled by `RUST_LOG`.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, Instrument};

use inventory_admin::config::Config;
use inventory_admin::error::InventoryError;
use inventory_admin::framework::StoreClient;
use inventory_admin::lifecycle::tracing::setup_tracing;
use inventory_admin::lifecycle::InventorySystem;
use inventory_admin::model::ProductId;
use inventory_admin::screen::{NoticeLevel, Notices, ProductForm, ProductListScreen};
use inventory_admin::store::MemoryStore;
use inventory_admin::validation::Field;

mod cli;
use cli::args::{Cli, Commands};
use cli::render;

#[tokio::main]
async fn main() -> ExitCode {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, String> {
    let mut config = Config::from_env().map_err(|e| e.to_string())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }
    if let Commands::List {
        page_size: Some(size),
        ..
    } = &cli.command
    {
        config.page_size = *size;
    }
    if cli.memory {
        config.validate_local()
    } else {
        config.validate()
    }
    .map_err(|e| e.to_string())?;

    let system = if cli.memory {
        InventorySystem::start(MemoryStore::demo())
    } else {
        InventorySystem::http(&config).map_err(|e| e.to_string())?
    };

    let span = tracing::info_span!("command");
    let outcome = execute(&system.client, &config, cli.command)
        .instrument(span)
        .await;

    system.shutdown().await?;
    outcome
}

async fn execute(client: &StoreClient, config: &Config, command: Commands) -> Result<ExitCode, String> {
    match command {
        Commands::List {
            search,
            category,
            stock,
            page,
            page_size: _,
        } => {
            let mut screen = ProductListScreen::new(client.clone(), config.page_size);
            load(&mut screen).await?;

            let state = screen.state_mut();
            if let Some(search) = search {
                state.set_search(search);
            }
            state.set_category(category);
            state.set_stock_filter(stock);
            if !state.go_to_page(page) {
                let last = state.projection().total_pages.max(1);
                return Err(format!("Page {page} does not exist (1 to {last})"));
            }

            print!("{}", render::list_screen(screen.state()));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Show { id } => {
            let product = client
                .get_one(ProductId::from(id))
                .await
                .map_err(|e| e.to_string())?;
            print!("{}", render::product_detail(&product));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Add {
            name,
            price,
            category,
            stock,
        } => {
            let mut form = ProductForm::create(client.clone());
            form.set_field(Field::Name, name);
            form.set_field(Field::Price, price);
            form.set_field(Field::Category, category);
            form.set_field(Field::Stock, stock);
            save(&mut form).await
        }

        Commands::Edit {
            id,
            name,
            price,
            category,
            stock,
        } => {
            let mut form = ProductForm::edit(client.clone(), ProductId::from(id))
                .await
                .map_err(|e| e.to_string())?;
            let changes = [
                (Field::Name, name),
                (Field::Price, price),
                (Field::Category, category),
                (Field::Stock, stock),
            ];
            for (field, value) in changes {
                if let Some(value) = value {
                    form.set_field(field, value);
                }
            }
            save(&mut form).await
        }

        Commands::Delete { id, yes } => {
            let id = ProductId::from(id);
            let mut screen = ProductListScreen::new(client.clone(), config.page_size);
            load(&mut screen).await?;

            let prompt = match screen.request_delete(&id) {
                Some(pending) => pending.prompt(),
                None => return Err(format!("Product not found: {id}")),
            };
            if !yes && !confirm(&prompt).await? {
                screen.cancel_delete();
                println!("Cancelled.");
                return Ok(ExitCode::SUCCESS);
            }

            let deleted = screen.confirm_delete().await;
            print_notices(&mut screen.notices);
            if deleted {
                info!(%id, remaining = screen.state().records().len(), "Delete confirmed");
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Categories => {
            let mut screen = ProductListScreen::new(client.clone(), config.page_size);
            load(&mut screen).await?;
            for category in screen.state().categories() {
                println!("{category}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn load(screen: &mut ProductListScreen) -> Result<(), String> {
    if screen.refresh().await {
        Ok(())
    } else {
        Err(screen
            .error()
            .unwrap_or("Failed to fetch products")
            .to_string())
    }
}

async fn save(form: &mut ProductForm) -> Result<ExitCode, String> {
    let result = form.submit().await;
    print_notices(&mut form.notices);
    match result {
        Ok(product) => {
            print!("{}", render::product_detail(&product));
            Ok(ExitCode::SUCCESS)
        }
        Err(InventoryError::Validation(errors)) => {
            eprintln!("Product not saved:");
            eprint!("{}", render::field_errors(&errors));
            Ok(ExitCode::FAILURE)
        }
        Err(InventoryError::Remote(_)) => Ok(ExitCode::FAILURE),
    }
}

fn print_notices(notices: &mut Notices) {
    for notice in notices.drain() {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("Error: {}", notice.message),
        }
    }
}

async fn confirm(prompt: &str) -> Result<bool, String> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{prompt} [y/N] ").as_bytes())
        .await
        .map_err(|e| e.to_string())?;
    stdout.flush().await.map_err(|e| e.to_string())?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await
        .map_err(|e| e.to_string())?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
