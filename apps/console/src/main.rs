//! # Stockroom Console
//!
//! Terminal inventory frontend. Talks to a running REST API server and
//! renders the product table through [`InventoryView`].
//!
//! ```text
//! Usage: stockroom-console <COMMAND> [ARGS]
//!
//! Commands:
//!   list                                     Print the inventory table
//!   add --name N --sku S --price P [--stock Q]
//!   update <id> --name N --sku S --price P [--stock Q]
//!   set-stock <id> <quantity>                Adjust stock only
//!   delete <id>                              Remove a product
//!   watch [--interval SECS]                  Re-render the table on a timer
//!
//! Environment:
//!   STOCKROOM_API_URL   API base URL (default http://127.0.0.1:8000)
//!   RUST_LOG            Log filter (default warn)
//! ```

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use stockroom_console::{ConsoleConfig, InventoryClient, InventoryView};
use stockroom_core::ProductRequest;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match ConsoleConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    let client = InventoryClient::new(&config.api_url);
    let mut view = InventoryView::new(client);

    match command {
        "list" => {
            view.refresh().await;
        }
        "add" => {
            let Some(item) = parse_item_form(&args[1..]) else {
                print_usage();
                return ExitCode::FAILURE;
            };
            view.add_item(&item).await;
        }
        "update" => {
            let Some(id) = args.get(1).filter(|a| !a.starts_with("--")) else {
                print_usage();
                return ExitCode::FAILURE;
            };
            let Some(item) = parse_item_form(&args[2..]) else {
                print_usage();
                return ExitCode::FAILURE;
            };
            view.update_item(id, &item).await;
        }
        "set-stock" => {
            let (Some(id), Some(qty)) = (args.get(1), args.get(2)) else {
                print_usage();
                return ExitCode::FAILURE;
            };
            let Ok(qty) = qty.parse::<i64>() else {
                eprintln!("set-stock: quantity must be an integer");
                return ExitCode::FAILURE;
            };
            view.set_stock(id, qty).await;
        }
        "delete" => {
            let Some(id) = args.get(1) else {
                print_usage();
                return ExitCode::FAILURE;
            };
            view.delete_item(id).await;
        }
        "watch" => {
            let interval = parse_flag(&args[1..], "--interval")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(2);
            return watch(view, Duration::from_secs(interval)).await;
        }
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        other => {
            eprintln!("unknown command: {other}");
            print_usage();
            return ExitCode::FAILURE;
        }
    }

    print!("{}", view.render());
    if view.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Re-renders the table every `interval` until interrupted.
async fn watch(mut view: InventoryView, interval: Duration) -> ExitCode {
    loop {
        view.refresh().await;
        // Clear screen, home cursor
        print!("\x1b[2J\x1b[H{}", view.render());

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => return ExitCode::SUCCESS,
        }
    }
}

/// Parses `--name/--sku/--price/--stock` flags into a request body.
///
/// Missing required fields are deliberately passed through as `None`: the
/// server answers with its per-field error and the view renders it, keeping
/// one validation authority.
fn parse_item_form(args: &[String]) -> Option<ProductRequest> {
    let mut item = ProductRequest::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--name" | "-n" => item.name = Some(args.get(i + 1)?.clone()),
            "--sku" | "-s" => item.sku = Some(args.get(i + 1)?.clone()),
            "--price" | "-p" => item.price = Some(args.get(i + 1)?.clone()),
            "--stock" | "-q" => item.stock = args.get(i + 1)?.parse().ok(),
            _ => return None,
        }
        i += 2;
    }

    Some(item)
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn print_usage() {
    eprintln!("Usage: stockroom-console <COMMAND> [ARGS]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  list                                     Print the inventory table");
    eprintln!("  add --name N --sku S --price P [--stock Q]");
    eprintln!("  update <id> --name N --sku S --price P [--stock Q]");
    eprintln!("  set-stock <id> <quantity>                Adjust stock only");
    eprintln!("  delete <id>                              Remove a product");
    eprintln!("  watch [--interval SECS]                  Re-render the table on a timer");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STOCKROOM_API_URL   API base URL (default http://127.0.0.1:8000)");
}
