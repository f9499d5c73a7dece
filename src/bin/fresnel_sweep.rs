use chrono::Utc;
use clap::Parser;
use fresnel::{
    QuantityKind, Render, Result, SweepParams, par_sweep,
    render::{DatWriter, JsonWriter},
    sweep,
};
use std::{
    ffi::OsStr,
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sweep a Fresnel quantity over incidence angles from 0 to 90 degrees.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding `n1`, `n2` and `quantity`.
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Overrides the incident refractive index.
    #[arg(long)]
    n1: Option<f64>,

    /// Overrides the transmitted refractive index.
    #[arg(long)]
    n2: Option<f64>,

    /// Overrides the quantity, e.g. `reflected-intensity` or `transmitted-phase`.
    #[arg(short, long)]
    quantity: Option<QuantityKind>,

    /// Output file ending in `.dat` or `.json`. Writes a datafile to stdout if omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Evaluate the angles in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print the default parameters as JSON and exit.
    #[arg(long)]
    print_params: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = match verbose {
        true => "fresnel=debug,fresnel_sweep=debug,info",
        false => "fresnel=info,fresnel_sweep=info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

fn load_params(args: &Args) -> Result<SweepParams> {
    let mut params = match &args.params {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading sweep parameters");
            SweepParams::from_json_file(path)?
        }
        None => SweepParams::default(),
    };

    if let Some(n1) = args.n1 {
        params.n1 = n1;
    }
    if let Some(n2) = args.n2 {
        params.n2 = n2;
    }
    if let Some(quantity) = args.quantity {
        params.quantity = quantity;
    }

    Ok(params)
}

fn run(args: Args) -> Result<()> {
    if args.print_params {
        println!("{}", serde_json::to_string_pretty(&SweepParams::default())?);
        return Ok(());
    }

    let params = load_params(&args)?;
    let interface = params.interface()?;
    if let Some(critical) = interface.critical_angle() {
        tracing::info!(
            "total internal reflection past {:.2} deg",
            critical.get::<uom::si::angle::degree>()
        );
    }

    let series = match args.parallel {
        true => par_sweep(&interface, params.quantity),
        false => sweep(&interface, params.quantity),
    };

    let header = format!("n1={} n2={}", params.n1, params.n2);
    let generated_at = format!("generated_at={}", Utc::now().to_rfc3339());

    match &args.output {
        None => DatWriter::new(io::stdout().lock())
            .with_comment("Fresnel Sweep Datafile")
            .with_comment(header)
            .render(params.quantity, &series),
        Some(path) => {
            // Each write on the raw file makes a system call.
            let file = BufWriter::new(File::create(path)?);
            match path.extension().and_then(OsStr::to_str) {
                Some("json") => {
                    tracing::info!("writing JSON to {}", path.display());
                    JsonWriter::new(file).render(params.quantity, &series)
                }
                _ => {
                    tracing::info!("writing DAT file to {}", path.display());
                    DatWriter::new(file)
                        .with_comment("Fresnel Sweep Datafile")
                        .with_comment(generated_at)
                        .with_comment(header)
                        .render(params.quantity, &series)
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
