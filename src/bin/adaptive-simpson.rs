use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use adaptive_simpson::adaptive::{AdaptiveSimpson, Quadrature, DEFAULT_MAX_DEPTH, DEFAULT_TOLERANCE};
use adaptive_simpson::integrand::BuiltinIntegrand;
use adaptive_simpson::plot::{plot_all, plot_error_history, plot_error_vs_size};
use adaptive_simpson::report::{Report, Trace};
use adaptive_simpson::{Diagnostics, Interval};

/// Adaptive Simpson quadrature with a per-node trace.
#[derive(Debug, Parser)]
#[command(name = "adaptive-simpson")]
struct Cli {
    #[arg(long, value_enum, default_value_t = BuiltinIntegrand::Cos)]
    integrand: BuiltinIntegrand,

    /// Lower bound; defaults to the integrand's usual interval.
    #[arg(long, allow_negative_numbers = true)]
    lower: Option<f64>,

    /// Upper bound; defaults to the integrand's usual interval.
    #[arg(long, allow_negative_numbers = true)]
    upper: Option<f64>,

    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[arg(long, value_name = "dir", default_value = "plots")]
    plots_dir: PathBuf,

    #[arg(long)]
    no_plots: bool,

    /// Write the per-node trace as CSV.
    #[arg(long, value_name = "path")]
    trace_csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let integrand = cli.integrand;

    let (default_a, default_b) = integrand.default_support();
    let support = Interval::new(cli.lower.unwrap_or(default_a), cli.upper.unwrap_or(default_b));

    info!(
        "integrating {} over {} with tolerance {:e}",
        integrand.label(),
        support,
        cli.tolerance
    );

    let mut diagnostics = Diagnostics::new();
    let outcome = AdaptiveSimpson::new(cli.tolerance)
        .with_max_depth(cli.max_depth)
        .run_with(|x| integrand.eval(x), support, &mut diagnostics);

    if let Some(path) = &cli.trace_csv {
        diagnostics.write_csv_file(path)?;
        info!("wrote trace to {}", path.display());
    }

    let value = match outcome {
        Ok(value) => value,
        Err(err) => {
            println!("{}", Trace(&diagnostics));
            error!("{}", err);
            if !cli.no_plots && !diagnostics.records().is_empty() {
                std::fs::create_dir_all(&cli.plots_dir)?;
                plot_error_history(&cli.plots_dir.join("error-history.svg"), &diagnostics)?;
                plot_error_vs_size(&cli.plots_dir.join("error-vs-size.svg"), &diagnostics)?;
            }
            return Err(err.into());
        }
    };

    let quadrature = Quadrature { value, diagnostics };
    let exact = integrand.exact(support.a, support.b);
    println!("{}", Report::new(&quadrature, exact));

    if !cli.no_plots {
        let written = plot_all(
            &cli.plots_dir,
            |x| integrand.eval(x),
            integrand.label(),
            support,
            &quadrature,
        )?;
        for path in written {
            info!("wrote {}", path.display());
        }
    }

    Ok(())
}
