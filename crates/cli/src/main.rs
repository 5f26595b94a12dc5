use anyhow::{Context, Result};
use catalog::{Catalog, Dish};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::recommend_dishes;
use prefs::PreferenceRequest;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// MenuRecs - Dish Recommendation Engine
#[derive(Parser)]
#[command(name = "menu-recs")]
#[command(about = "Dish recommendations with dietary and budget filtering", long_about = None)]
struct Cli {
    /// Path to the dish catalog JSON file
    #[arg(short, long, default_value = "data/platillos.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog against dietary and budget preferences
    Recommend {
        /// Cultural restriction tags (vegetariano, vegano, sin_cerdo, sin_mariscos)
        #[arg(long = "cultural")]
        cultural: Vec<String>,

        /// Nutritional tags (bajo_grasa, alto_proteina, sin_gluten, vegano)
        #[arg(long = "nutrition")]
        nutrition: Vec<String>,

        /// Budget ceiling in soles (defaults to 100)
        #[arg(long)]
        budget: Option<f64>,
    },

    /// Print the catalog
    List {
        /// Only show dishes in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of filter invocations to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading dish catalog from {}...", cli.data.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.data).context("Failed to load dish catalog")?,
    );
    println!(
        "{} Loaded {} dishes in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            cultural,
            nutrition,
            budget,
        } => handle_recommend(catalog, cultural, nutrition, budget)?,
        Commands::List { category } => handle_list(catalog, category)?,
        Commands::Benchmark { requests } => handle_benchmark(catalog, requests).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<Catalog>,
    cultural: Vec<String>,
    nutrition: Vec<String>,
    budget: Option<f64>,
) -> Result<()> {
    let request = PreferenceRequest {
        cultural,
        nutritional: nutrition,
        budget,
    };

    let matches = recommend_dishes(catalog.dishes(), &request)?;

    println!(
        "{}",
        format!("{} of {} dishes match your preferences:", matches.len(), catalog.len())
            .bold()
            .blue()
    );
    for (rank, dish) in matches.iter().enumerate() {
        print_dish(rank + 1, dish);
    }
    if matches.is_empty() {
        println!("{}", "Try relaxing a tag or raising the budget.".yellow());
    }
    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: Arc<Catalog>, category: Option<String>) -> Result<()> {
    let stats = catalog.stats();
    println!(
        "{}",
        format!(
            "Catalog: {} dishes, avg S/ {:.2}, avg {:.0} cal",
            stats.dish_count, stats.avg_price, stats.avg_calories
        )
        .bold()
        .blue()
    );

    match category {
        Some(category) => {
            let dishes = catalog.by_category(&category);
            println!("Category {}: {} dishes", category.bold(), dishes.len());
            for (rank, dish) in dishes.iter().enumerate() {
                print_dish(rank + 1, dish);
            }
        }
        None => {
            for (rank, dish) in catalog.dishes().iter().enumerate() {
                print_dish(rank + 1, dish);
            }
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<Catalog>, requests: usize) -> Result<()> {
    // A rotating mix of realistic preference shapes
    let presets: Arc<Vec<PreferenceRequest>> = Arc::new(vec![
        PreferenceRequest::default(),
        PreferenceRequest {
            cultural: vec!["vegetariano".to_string()],
            ..PreferenceRequest::default()
        },
        PreferenceRequest {
            cultural: vec!["vegano".to_string()],
            nutritional: vec!["sin_gluten".to_string()],
            budget: Some(40.0),
        },
        PreferenceRequest {
            cultural: vec![],
            nutritional: vec!["bajo_grasa".to_string(), "alto_proteina".to_string()],
            budget: Some(60.0),
        },
    ]);

    // The engine is synchronous and lock-free, so concurrent invocations
    // just share the immutable catalog snapshot.
    let mut handles = vec![];
    for _ in 0..requests {
        let catalog = catalog.clone();
        let presets = presets.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let request = &presets[rand::random::<u32>() as usize % presets.len()];
            let start = Instant::now();
            recommend_dishes(catalog.dishes(), request)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print one dish
fn print_dish(rank: usize, dish: &Dish) {
    println!(
        "{}. {} - S/ {:.2} ({} cal){}",
        rank.to_string().green(),
        dish.name.bold(),
        dish.price,
        dish.calories,
        dish.category
            .as_deref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default()
    );
    if !dish.ingredients.is_empty() {
        println!("   Ingredientes: {}", dish.ingredients.join(", "));
    }
    if !dish.description.is_empty() {
        println!("   {}", dish.description.dimmed());
    }
}
