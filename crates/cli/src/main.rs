use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::Rng;
use recommender::{ErrorStatus, RecommendationOrchestrator, RecommenderConfig, SeatRecommender};
use seat_map::{
    BookedSet, Flight, FlightCatalog, FlightId, Preference, RowNumber, SeatLayout, SeatMap,
    UnknownSeatPolicy,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// SeatRecs - Flight Seat Recommendation Engine
#[derive(Parser)]
#[command(name = "seat-recs")]
#[command(about = "Seat map generation and seat recommendation for flights", long_about = None)]
struct Cli {
    /// Path to the flight catalog (JSON)
    #[arg(short, long, env = "SEAT_RECS_CATALOG", default_value = "data/flights.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the flights in the catalog
    Flights,

    /// Show the seat map of a flight
    Map {
        /// Flight ID to display
        #[arg(long)]
        flight_id: FlightId,
    },

    /// Recommend seats on a catalog flight or an ad-hoc cabin
    Recommend(RecommendArgs),

    /// Write a demo catalog with randomly booked seats
    Seed {
        /// Where to write the catalog
        #[arg(long, default_value = "data/flights.json")]
        output: PathBuf,

        /// Number of flights to generate
        #[arg(long, default_value = "8")]
        flights: usize,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Args)]
struct RecommendArgs {
    /// Flight ID from the catalog
    #[arg(long, conflicts_with_all = ["rows", "seats_per_row", "booked"])]
    flight_id: Option<FlightId>,

    /// Rows of an ad-hoc cabin
    #[arg(long, requires = "seats_per_row", required_unless_present = "flight_id")]
    rows: Option<RowNumber>,

    /// Seats per row of an ad-hoc cabin
    #[arg(long, requires = "rows")]
    seats_per_row: Option<u8>,

    /// Booked seats of an ad-hoc cabin, e.g. "1C,1D"
    #[arg(long, value_delimiter = ',')]
    booked: Vec<String>,

    /// Prefer window seats
    #[arg(long)]
    window: bool,

    /// Prefer seats with extra legroom
    #[arg(long)]
    legroom: bool,

    /// Prefer seats near an exit
    #[arg(long)]
    exit_row: bool,

    /// Number of seats (1 or 2)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
    seats: u8,

    /// Seats must be next to each other
    #[arg(long)]
    together: bool,

    /// Fail when a booked seat is not part of the cabin
    #[arg(long)]
    strict_booked: bool,

    /// Seats on either side of the aisle don't count as together
    #[arg(long)]
    respect_aisle: bool,

    /// Print the seat map as JSON
    #[arg(long)]
    json: bool,
}

impl RecommendArgs {
    fn preference(&self) -> Preference {
        Preference::new(self.seats)
            .with_window(self.window)
            .with_extra_legroom(self.legroom)
            .with_exit_row_proximity(self.exit_row)
            .with_seats_together(self.together)
    }

    fn config(&self) -> RecommenderConfig {
        RecommenderConfig {
            unknown_seat_policy: if self.strict_booked {
                UnknownSeatPolicy::Reject
            } else {
                UnknownSeatPolicy::Ignore
            },
            respect_aisle: self.respect_aisle,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let label = match ErrorStatus::of(&err) {
            ErrorStatus::NotFound => "not found:",
            ErrorStatus::BadRequest => "bad request:",
            ErrorStatus::Internal => "error:",
        };
        eprintln!("{} {:#}", label.red().bold(), err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Flights => handle_flights(&cli.catalog)?,
        Commands::Map { flight_id } => handle_map(&cli.catalog, flight_id)?,
        Commands::Recommend(args) => handle_recommend(&cli.catalog, &args)?,
        Commands::Seed { output, flights } => handle_seed(&output, flights)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&cli.catalog, requests, concurrent).await?,
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Arc<FlightCatalog>> {
    let start = Instant::now();
    let catalog = FlightCatalog::load_from_file(path)
        .with_context(|| format!("Failed to load flight catalog from {}", path.display()))?;
    tracing::debug!("Loaded {} flights in {:?}", catalog.len(), start.elapsed());
    Ok(Arc::new(catalog))
}

/// Handle the 'flights' command
fn handle_flights(catalog_path: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;

    println!("{}", format!("Flights ({}):", catalog.len()).bold().blue());
    for flight in catalog.flights() {
        let capacity = flight.rows as usize * flight.seats_per_row as usize;
        let dates = match &flight.return_date {
            Some(back) => format!("{} - {}", flight.departure_date, back),
            None => flight.departure_date.clone(),
        };
        println!(
            "{:>4}. {} -> {}  {}  {}x{}  {} of {} seats free",
            flight.id.to_string().green(),
            flight.origin,
            flight.destination,
            dates,
            flight.rows,
            flight.seats_per_row,
            capacity.saturating_sub(flight.booked_seats.len()),
            capacity
        );
    }
    Ok(())
}

/// Handle the 'map' command
fn handle_map(catalog_path: &Path, flight_id: FlightId) -> Result<()> {
    let orchestrator =
        RecommendationOrchestrator::new(load_catalog(catalog_path)?, RecommenderConfig::default());
    let map = orchestrator.get_seat_map(flight_id)?;

    if let Some(flight) = orchestrator.catalog().get_flight(flight_id) {
        println!(
            "{}",
            format!("Flight {}: {} -> {}", flight.id, flight.origin, flight.destination)
                .bold()
                .blue()
        );
    }
    print_seat_map(&map);
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(catalog_path: &Path, args: &RecommendArgs) -> Result<()> {
    let preference = args.preference();

    let map = match (args.flight_id, args.rows, args.seats_per_row) {
        (Some(flight_id), _, _) => {
            let orchestrator = RecommendationOrchestrator::new(load_catalog(catalog_path)?, args.config());
            orchestrator.get_recommendations(flight_id, &preference)?
        }
        (None, Some(rows), Some(seats_per_row)) => {
            let layout = SeatLayout::new(rows, seats_per_row)?;
            let booked: BookedSet = args
                .booked
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            SeatRecommender::new(args.config()).recommend(&layout, &booked, &preference)?
        }
        _ => bail!("Either --flight-id or both --rows and --seats-per-row are required"),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    print_seat_map(&map);
    println!();
    println!("{}", "Recommended seats:".bold().blue());
    for seat in map.recommended() {
        let mut features = Vec::new();
        if seat.is_window {
            features.push("window");
        }
        if seat.is_aisle {
            features.push("aisle");
        }
        if seat.has_extra_legroom {
            features.push("extra legroom");
        }
        if seat.is_exit_row {
            features.push("exit row");
        }
        println!(
            "  {} [{}] - Score: {}",
            seat.id.to_string().green().bold(),
            features.join(", "),
            seat.recommendation_score
        );
    }
    Ok(())
}

/// Handle the 'seed' command
fn handle_seed(output: &Path, count: usize) -> Result<()> {
    const ROUTES: [(&str, &str); 4] = [("LCY", "BUD"), ("LCY", "CPH"), ("LHR", "DUB"), ("LGW", "FCO")];
    const BOOKED_SHARE: f64 = 0.3;

    let mut rng = rand::rng();
    let mut catalog = FlightCatalog::new();

    for i in 0..count {
        let (origin, destination) = ROUTES[i % ROUTES.len()];
        let day: u8 = rng.random_range(1..=20);
        let mut flight = Flight {
            id: i as FlightId + 1,
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: format!("2026-11-{:02}", day),
            return_date: rng
                .random_bool(0.5)
                .then(|| format!("2026-11-{:02}", day + rng.random_range(1..=7))),
            rows: 15 + rng.random_range(0..5),
            seats_per_row: 6,
            booked_seats: BTreeSet::new(),
        };

        let layout = flight.layout()?;
        for seat in layout.generate_seats() {
            if rng.random_bool(BOOKED_SHARE) {
                flight.add_booked_seat(seat.id.to_string());
            }
        }
        catalog.insert_flight(flight);
    }

    catalog
        .save_to_file(output)
        .with_context(|| format!("Failed to write catalog to {}", output.display()))?;
    println!(
        "{} Wrote {} flights to {}",
        "✓".green(),
        catalog.len(),
        output.display()
    );
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog_path: &Path, requests: usize, concurrent: usize) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let flight_ids: Vec<FlightId> = catalog.flights().map(|f| f.id).collect();
    if flight_ids.is_empty() {
        return Err(anyhow!("Catalog {} has no flights", catalog_path.display()));
    }
    let orchestrator = RecommendationOrchestrator::new(catalog, RecommenderConfig::default());

    // Cycle through flights and a fixed mix of preferences
    let mix = [
        Preference::new(1).with_window(true),
        Preference::new(1).with_extra_legroom(true).with_exit_row_proximity(true),
        Preference::new(2).with_seats_together(true),
        Preference::new(2).with_window(true),
    ];

    let limit = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for i in 0..requests {
        let orchestrator = orchestrator.clone();
        let flight_id = flight_ids[i % flight_ids.len()];
        let preference = mix[i % mix.len()];
        let permit = limit.clone().acquire_owned().await?;

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            let ok = orchestrator.get_recommendations(flight_id, &preference).is_ok();
            (start.elapsed(), ok)
        }));
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut failures = 0;
    for handle in handles {
        let (elapsed, ok) = handle.await?;
        if !ok {
            failures += 1;
        }
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    if timings.is_empty() {
        println!("No requests made");
        return Ok(());
    }

    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let avg_latency = timings.iter().sum::<Duration>() / timings.len() as u32;
    let throughput = timings.len() as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} unsatisfiable)", timings.len(), failures);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Render the cabin row by row, with a gap for the aisle
fn print_seat_map(map: &SeatMap) {
    let aisle_after = map.seats_per_row / 2;

    let mut header = String::from("     ");
    for column in 0..map.seats_per_row {
        if column == aisle_after {
            header.push_str("  ");
        }
        header.push_str(&format!("{:<3}", (b'A' + column) as char));
    }
    println!("{}", header.dimmed());

    for row in 1..=map.rows {
        let seats = map.row(row);
        let label = format!("{:>3}", row);
        let label = match seats.first() {
            Some(seat) if seat.has_extra_legroom => label.yellow().bold(),
            Some(seat) if seat.is_exit_row => label.yellow(),
            _ => label.normal(),
        };

        let mut line = format!("{}  ", label);
        for (column, seat) in seats.iter().enumerate() {
            if column == aisle_after as usize {
                line.push_str("  ");
            }
            let cell = if seat.is_recommended {
                seat.id.letter().to_string().repeat(2).black().on_green().bold()
            } else if seat.is_booked {
                "XX".red()
            } else {
                format!("{} ", seat.id.letter()).normal()
            };
            line.push_str(&format!("{} ", cell));
        }
        println!("{}", line);
    }

    println!(
        "{}",
        format!(
            "{} of {} seats free; XX = booked; yellow rows = exit rows (bold: extra legroom)",
            map.available_count(),
            map.seats.len()
        )
        .dimmed()
    );
}
