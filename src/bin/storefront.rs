//! CLI storefront for soundforge.
//!
//! Browses the bundled beat catalog, manages a local cart, and submits
//! purchases against a running soundforge server.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of beats
//! cargo run --bin storefront -- tracks
//!
//! # Filter by category
//! cargo run --bin storefront -- tracks --category Trap --page 2
//!
//! # Show the artist roster
//! cargo run --bin storefront -- artists
//!
//! # Interactive shopping session against a local server
//! cargo run --bin storefront -- shop --server http://localhost:3000
//! ```

use soundforge::domain::artists::roster;
use soundforge::domain::browser::CatalogBrowser;
use soundforge::domain::cart::CartStore;
use soundforge::domain::catalog::{Catalog, Track};
use soundforge::domain::checkout::{CheckoutFlow, CheckoutOutcome, CheckoutState};
use soundforge::infrastructure::purchase::HttpPurchaseGateway;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use std::sync::Arc;

/// CLI storefront for browsing and buying beats.
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the soundforge server
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List beats from the bundled catalog
    Tracks {
        /// Category filter (e.g. "Trap", "Lo-Fi")
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show the artist roster
    Artists,

    /// Interactive shopping session
    Shop,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let catalog = Arc::new(Catalog::bundled());

    match cli.command {
        Commands::Tracks { category, page } => list_tracks(catalog, &category, page),
        Commands::Artists => list_artists(),
        Commands::Shop => shop(catalog, &cli.server).await?,
    }

    Ok(())
}

/// Prints one catalog page with the two-button pager state.
fn list_tracks(catalog: Arc<Catalog>, category: &str, page: usize) {
    let mut browser = CatalogBrowser::new(catalog);
    browser.set_category(category);
    for _ in 1..page {
        browser.next_page();
    }

    println!(
        "{} {}",
        "🎵 Beats".bright_blue().bold(),
        format!("({category}, page {}/{})", browser.page(), browser.total_pages()).dimmed()
    );
    println!();

    let items = browser.page_items();
    if items.is_empty() {
        println!("{}", "No beats in this category.".yellow());
        return;
    }

    for track in items {
        print_track(track);
    }

    let window: Vec<String> = browser.page_numbers().iter().map(|p| p.to_string()).collect();
    println!();
    println!("  Pages shown: {}", window.join(" ").bright_cyan());
}

fn print_track(track: &Track) {
    let price = match &track.discount {
        Some(tag) => format!("₹{} ({tag})", track.price).bright_yellow(),
        None => format!("₹{}", track.price).bright_yellow(),
    };
    println!(
        "  {:>3}. {}  {}",
        track.id,
        track.title.bright_white().bold(),
        price
    );
    println!(
        "       {} | {} BPM | {} | {} | {} plays",
        track.genre.cyan(),
        track.bpm,
        track.key,
        track.producer.dimmed(),
        track.plays
    );
}

fn list_artists() {
    println!("{}", "🎤 Artist Roster".bright_blue().bold());
    println!();
    for artist in roster() {
        println!("  {} ({})", artist.name.bright_white().bold(), artist.genre.cyan());
        println!("    {}", artist.description);
        println!("    {}", artist.achievement.green());
        println!("    {}", format!("\"{}\"", artist.quote).dimmed());
        println!();
    }
}

/// Interactive shopping loop: browse pages, fill a cart, check out.
async fn shop(catalog: Arc<Catalog>, server: &str) -> Result<()> {
    let mut browser = CatalogBrowser::new(catalog.clone());
    let mut cart = CartStore::new();
    cart.subscribe(|lines| {
        let count: u32 = lines.iter().map(|l| l.quantity).sum();
        println!("{}", format!("🛒 Cart: {count} item(s)").dimmed());
    });

    println!("{}", "🎧 soundforge storefront".bright_blue().bold());

    loop {
        println!();
        let choices = [
            "Browse this page",
            "Next page",
            "Previous page",
            "Pick category",
            "Add beat to cart",
            "Remove beat from cart",
            "View cart",
            "Checkout",
            "Quit",
        ];
        let selection = Select::new()
            .with_prompt(format!(
                "{} (page {}/{})",
                browser.category(),
                browser.page(),
                browser.total_pages()
            ))
            .items(&choices)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                for track in browser.page_items() {
                    print_track(track);
                }
            }
            1 => browser.next_page(),
            2 => browser.prev_page(),
            3 => {
                let categories = catalog.categories();
                let picked = Select::new()
                    .with_prompt("Category")
                    .items(&categories)
                    .default(0)
                    .interact()?;
                browser.set_category(categories[picked].clone());
            }
            4 => {
                let id: u32 = Input::new().with_prompt("Beat id").interact_text()?;
                match catalog.get(id) {
                    Some(track) => {
                        println!("{}", format!("✅ Added \"{}\"", track.title).green());
                        cart.add(track.clone());
                    }
                    None => println!("{}", "❌ No beat with that id".red()),
                }
            }
            5 => {
                let id: u32 = Input::new().with_prompt("Beat id").interact_text()?;
                cart.remove(id);
            }
            6 => print_cart(&cart),
            7 => {
                if checkout(&mut cart, server).await? {
                    break;
                }
            }
            _ => break,
        }
    }

    println!("{}", "👋 Bye".bright_white());
    Ok(())
}

fn print_cart(cart: &CartStore) {
    if cart.is_empty() {
        println!("{}", "Cart is empty.".yellow());
        return;
    }
    for line in cart.lines() {
        println!(
            "  {} x{}  ₹{}",
            line.track.title.bright_white(),
            line.quantity,
            line.subtotal().to_string().bright_yellow()
        );
    }
    println!("  {} ₹{}", "Total:".bold(), cart.total().to_string().bright_yellow().bold());
}

/// Runs one checkout against the server. Returns `true` when the purchase
/// succeeded and the session should end.
async fn checkout(cart: &mut CartStore, server: &str) -> Result<bool> {
    if cart.is_empty() {
        println!("{}", "Cart is empty, nothing to check out.".yellow());
        return Ok(false);
    }

    let gateway = HttpPurchaseGateway::new(reqwest::Client::new(), server);
    let mut flow = CheckoutFlow::new(cart.snapshot());

    loop {
        let name: String = Input::new().with_prompt("Your name").interact_text()?;
        let email: String = Input::new().with_prompt("Your email").interact_text()?;
        flow.set_name(name);
        flow.set_email(email);

        let state = flow.submit(&gateway).await.clone();
        match state {
            CheckoutState::Success => {
                println!("{}", "✅ Purchase confirmed! Check your inbox.".green().bold());
            }
            CheckoutState::Error(message) => {
                println!("{}", format!("❌ {message}").red());
            }
            CheckoutState::Selecting => {
                let errors = flow.field_errors();
                if let Some(msg) = &errors.name {
                    println!("{}", format!("  name: {msg}").red());
                }
                if let Some(msg) = &errors.email {
                    println!("{}", format!("  email: {msg}").red());
                }
                continue;
            }
            CheckoutState::Submitting => continue,
        }

        return match flow.acknowledge() {
            CheckoutOutcome::ClearCartAndLeave => {
                cart.clear();
                Ok(true)
            }
            CheckoutOutcome::Stay => Ok(false),
        };
    }
}
