//! small_town — generate a synthetic population for a small commuter town.
//!
//! Without arguments a built-in town of ~800 people is generated.  Point
//! `--data` at a directory of census and place CSV files (and `--config` at a
//! JSON `PopulationConfig`) to generate a real town instead.
//!
//! Writes `agents.txt`, `carpools.txt`, `public_transit.txt` and
//! `summary.json` into the output directory.

mod town;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{LevelFilter, info};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use sp_census::CensusTables;
use sp_core::PopulationConfig;
use sp_gen::{Pass, PassObserver, PopulationBuilder, PopulationContext, PopulationSummary};
use sp_output::{OutputObserver, PopulationWriter, TextWriter};
use sp_places::Places;

#[derive(Parser, Debug)]
#[command(name = "small_town")]
#[command(about = "Generate a synthetic population for a small town")]
struct Args {
    /// JSON file with the population configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with census and place CSV files (built-in town if omitted)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "output/small_town")]
    out: PathBuf,

    /// Random seed, overriding the configuration
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ── Observer wrapper to time passes ──────────────────────────────────────────

struct TimingObserver<W: PopulationWriter> {
    inner:   OutputObserver<W>,
    started: Option<Instant>,
    passes:  Vec<(Pass, f64)>,
}

impl<W: PopulationWriter> TimingObserver<W> {
    fn new(inner: OutputObserver<W>) -> Self {
        Self { inner, started: None, passes: Vec::new() }
    }
}

impl<W: PopulationWriter> PassObserver for TimingObserver<W> {
    fn on_pass_start(&mut self, pass: Pass) {
        self.started = Some(Instant::now());
        self.inner.on_pass_start(pass);
    }

    fn on_pass_end(&mut self, pass: Pass, ctx: &PopulationContext) {
        let secs = self.started.map_or(0.0, |t| t.elapsed().as_secs_f64());
        self.passes.push((pass, secs));
        self.inner.on_pass_end(pass, ctx);
    }

    fn on_generation_end(&mut self, summary: &PopulationSummary) {
        self.inner.on_generation_end(summary);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    // 1. Configuration.
    let config: PopulationConfig = match (&args.config, &args.data) {
        (Some(path), _) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        (None, Some(_)) => PopulationConfig::default(),
        (None, None) => town::config(),
    };

    // 2. Census tables and places.
    let (census, places) = match &args.data {
        Some(dir) => (
            CensusTables::load_dir(dir, &config).with_context(|| format!("census tables in {}", dir.display()))?,
            Places::load_dir(dir).with_context(|| format!("places in {}", dir.display()))?,
        ),
        None => (town::census(&config)?, town::places()?),
    };
    info!(
        "{} households, {} workplaces, {} schools, {} transit routes",
        places.households.len(),
        places.workplaces.len(),
        places.schools.len(),
        places.routes.routes().len()
    );

    // 3. Build the context.
    let mut builder = PopulationBuilder::new(config, census, places);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut ctx = builder.build()?;

    // 4. Output.
    std::fs::create_dir_all(&args.out)?;
    let writer = TextWriter::new(&args.out)?;
    let mut obs = TimingObserver::new(OutputObserver::new(writer));

    // 5. Generate.
    let t0 = Instant::now();
    let summary = ctx.generate(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        return Err(anyhow!("output error: {e}"));
    }

    let summary_path = args.out.join("summary.json");
    serde_json::to_writer_pretty(BufWriter::new(File::create(&summary_path)?), &summary)?;

    // 6. Report.
    println!("Population generated in {:.3} s", elapsed.as_secs_f64());
    for (pass, secs) in &obs.passes {
        println!("  {:<12} {:>8.3} s", pass.as_str(), secs);
    }
    println!();
    println!("{:<24} {:>8}", "Agents", summary.agents);
    println!("{:<24} {:>8}", "Vacant households", summary.vacant_households);
    println!("{:<24} {:>8}", "Students", summary.students);
    println!("{:<24} {:>8}", "Workers", summary.workers);
    println!("{:<24} {:>8}", "Working from home", summary.work_from_home);
    println!("{:<24} {:>8}", "Carpools", summary.carpools);
    println!("{:<24} {:>8}", "Public transit groups", summary.public_transit_groups);
    println!("{:<24} {:>8}", "Infected", summary.infected);
    println!();
    println!("Household size   Households");
    println!("{}", "-".repeat(27));
    for (size, count) in &summary.household_sizes {
        println!("{size:<16} {count:>10}");
    }
    println!();
    println!("Output written to {}", args.out.display());

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let level: LevelFilter = level.parse().map_err(|_| anyhow!("unknown log level {level:?}"))?;
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
