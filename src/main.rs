//! cabinet-quote - CLI tool to quote furniture projects against a catalog.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cabinet_core::{quote_cabinet, quote_project, Catalog, CostOptions, Project, ProjectQuote};

/// Quote a furniture project: materials, accessories, hinges, surcharges, and VAT.
#[derive(Parser, Debug)]
#[command(name = "cabinet-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project JSON file
    #[arg(short, long)]
    project: PathBuf,

    /// Catalog JSON file (materials, accessories, settings)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Write the project back with recomputed costs
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quote a single cabinet by id
    #[arg(long)]
    cabinet: Option<String>,

    /// Material id used for cabinets that list no materials
    #[arg(long)]
    fallback_material: Option<String>,

    /// Hinge unit price
    #[arg(long)]
    hinge_price: Option<f64>,

    /// Leave VAT out of the total
    #[arg(long)]
    no_tva: bool,

    /// Output the quote as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::from_path(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    let mut project = Project::from_path(&args.project)
        .with_context(|| format!("Failed to load project {}", args.project.display()))?;

    info!(
        "Loaded {} cabinet(s) from {}",
        project.cabinets.len(),
        args.project.display()
    );

    let options = CostOptions {
        hinge_price: args.hinge_price,
        fallback_material: args.fallback_material.clone(),
        exclude_tva: args.no_tva,
    };

    // Single-cabinet mode
    if let Some(id) = &args.cabinet {
        let cabinet = project
            .find_cabinet(id)
            .with_context(|| format!("Cabinet {} not found in project", id))?;
        let cost = quote_cabinet(cabinet, &catalog, &options);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&cost)?);
        } else {
            let currency = &catalog.settings.currency;
            println!("{} ({})", cabinet.name, cabinet.id);
            println!("  Materials:   {:>12.2} {}", cost.material_cost, currency);
            println!("  Accessories: {:>12.2} {}", cost.accessory_cost, currency);
            println!(
                "  Hinges ({}):  {:>12.2} {}",
                cost.hinge.quantity, cost.hinge.cost, currency
            );
            println!("  Total cost:  {:>12.2} {}", cost.total, currency);
            println!("  Sale price:  {:>12.2} {}", cabinet.price, currency);
        }
        return Ok(());
    }

    let quote = quote_project(&mut project, &catalog, &options);

    for missing in &quote.unresolved {
        warn!("{}", missing);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_quote(&project, &quote);
    }

    if let Some(output) = &args.output {
        project
            .save(output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Written: {}", output.display());
    }

    Ok(())
}

fn print_quote(project: &Project, quote: &ProjectQuote) {
    let currency = &quote.currency;
    let b = &quote.breakdown;

    println!("{} - {} [{}]", project.name, project.client, project.status);
    for cabinet in &quote.cabinets {
        println!(
            "  {:<30} {:>12.2} {}",
            cabinet.name, cabinet.cost.total, currency
        );
    }
    println!();
    println!("  Materials:   {:>12.2} {}", b.material_cost, currency);
    println!("  Accessories: {:>12.2} {}", b.accessory_cost, currency);
    println!("  Labor:       {:>12.2} {}", b.manopera_cost, currency);
    println!("  Transport:   {:>12.2} {}", b.transport_cost, currency);
    println!("  Markup:      {:>12.2} {}", b.adaos_cost, currency);
    println!("  Subtotal:    {:>12.2} {}", b.subtotal, currency);
    println!("  VAT:         {:>12.2} {}", b.tva_cost, currency);
    println!("  Total:       {:>12.2} {}", b.total, currency);
}
