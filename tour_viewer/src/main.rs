use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use warnsdorff::{render_tour, Location, Tour};

#[derive(Parser)]
struct Args {
    /// Piece to tour with: knight, king or rook
    #[arg(short, long, default_value = "knight")]
    piece: String,

    /// Board width
    #[arg(long, default_value_t = 8)]
    width: i32,

    /// Board height
    #[arg(long, default_value_t = 8)]
    height: i32,

    /// Board shape: square, rectangle, righttriangle or irregular
    #[arg(short, long, default_value = "square")]
    shape: String,

    /// x coordinate of the start square (random if omitted)
    #[arg(long)]
    start_x: Option<i32>,

    /// y coordinate of the start square (random if omitted)
    #[arg(long)]
    start_y: Option<i32>,

    /// RNG seed for the random start square
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between moves, in milliseconds
    #[arg(short, long, default_value_t = 0)]
    delay_ms: u64,

    /// Print the tour as a JSON array of locations instead of a board
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let mut tour = Tour::new(&args.piece, args.width, args.height, &args.shape)?;

    let start = match (args.start_x, args.start_y) {
        (Some(x), Some(y)) => Location::new(x, y),
        _ => {
            let seed = args.seed.unwrap_or_else(rand::random);
            debug!(seed, "Picking a random start square");
            let mut rng = StdRng::seed_from_u64(seed);
            Location::new(
                rng.gen_range(1..=args.width),
                rng.gen_range(1..=args.height),
            )
        }
    };

    info!(
        "Starting a {} tour on a {} x {} {} board at {}",
        args.piece, args.width, args.height, args.shape, start
    );
    tour.start(start);

    let mut path = vec![start];
    let mut current = start;
    while let Some(next) = tour.next() {
        info!("{} : moving from {} to {}", path.len() - 1, current, next);
        path.push(next);
        current = next;
        if args.delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.delay_ms));
        }
    }

    if args.json {
        println!("{}", serde_json::to_string(&path)?);
    } else {
        println!("{}", render_tour(tour.board(), &path));
    }
    info!(
        "Tour over after visiting {} squares, {} left unvisited",
        path.len(),
        tour.board().unvisited_count()
    );

    Ok(())
}
