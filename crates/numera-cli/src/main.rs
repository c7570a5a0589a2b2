use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use numera_analysis::{find_extremes, find_intersections, find_roots, integrate};
use numera_eval::{EvalResult, Expression};
use numera_export::{compare, rewrite_powers, single_rate_curve, write_sample_table};
use numera_geometry::TriangleSides;
use numera_stats::{percentile, summarize, wins_by_block};
use numera_tariff::{breakdown, cost_for_quantity, BillingPolicy, RateTier};

/// Numera - numeric analysis of formulas, tariffs and triangles
#[derive(Parser)]
#[command(name = "numera")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Numeric function analysis toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula at a point
    Eval {
        /// Formula in x, e.g. "sin(x) + x^2"
        formula: String,
        /// Point to evaluate at
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        x: f64,
    },
    /// Find roots of a formula over an interval
    Roots {
        formula: String,
        #[arg(short, long, allow_hyphen_values = true)]
        a: f64,
        #[arg(short, long, allow_hyphen_values = true)]
        b: f64,
        /// Scan sub-intervals
        #[arg(short, long, default_value_t = 400)]
        samples: usize,
    },
    /// Find intersections of two formulas
    Intersections {
        first: String,
        second: String,
        #[arg(short, long, allow_hyphen_values = true)]
        a: f64,
        #[arg(short, long, allow_hyphen_values = true)]
        b: f64,
        #[arg(short, long, default_value_t = 600)]
        samples: usize,
    },
    /// Approximate min/max of a formula by dense sampling
    Extremes {
        formula: String,
        #[arg(short, long, allow_hyphen_values = true)]
        a: f64,
        #[arg(short, long, allow_hyphen_values = true)]
        b: f64,
        #[arg(short, long, default_value_t = 800)]
        samples: usize,
    },
    /// Approximate a definite integral by the trapezoid rule
    Integrate {
        formula: String,
        #[arg(short, long, allow_hyphen_values = true)]
        a: f64,
        #[arg(short, long, allow_hyphen_values = true)]
        b: f64,
        #[arg(short, long, default_value_t = 1000)]
        samples: usize,
    },
    /// Full comparison report for two formulas
    Report {
        first: String,
        second: String,
        #[arg(short, long, allow_hyphen_values = true)]
        a: f64,
        #[arg(short, long, allow_hyphen_values = true)]
        b: f64,
        #[arg(short, long, default_value_t = 600)]
        samples: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample two formulas into a CSV table on stdout
    Csv {
        first: String,
        second: String,
        #[arg(short, long, allow_hyphen_values = true)]
        a: f64,
        #[arg(short, long, allow_hyphen_values = true)]
        b: f64,
        #[arg(short = 'n', long, default_value_t = 200)]
        samples: usize,
    },
    /// Rewrite ^ powers into pow(...) calls for a graphing host
    Rewrite {
        formula: String,
    },
    /// Price a quantity against a JSON rate table
    Tariff {
        /// Path to a JSON array of tiers: [{"from":0,"to":99,"rate":0.19}, ...]
        table: PathBuf,
        /// Quantity to price
        quantity: f64,
        /// Billing policy
        #[arg(short, long, value_enum, default_value = "marginal")]
        policy: PolicyArg,
        /// Print the host-plottable cost curve as well
        #[arg(long)]
        curve: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze a triangle given its three side lengths
    Triangle {
        a: f64,
        b: f64,
        c: f64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize a series of outcomes (one number per line, "-" = stdin)
    Stats {
        /// File of numbers, or "-" for stdin
        input: String,
        /// Block size for the wins-per-block count
        #[arg(long, default_value_t = 100)]
        block: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Progressive schedule: each bracket bills its own portion
    Marginal,
    /// One bracket prices the whole quantity
    SingleBracket,
}

impl From<PolicyArg> for BillingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Marginal => BillingPolicy::Marginal,
            PolicyArg::SingleBracket => BillingPolicy::SingleBracket,
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Eval { formula, x } => eval_command(&formula, x),
        Commands::Roots {
            formula,
            a,
            b,
            samples,
        } => roots_command(&formula, a, b, samples),
        Commands::Intersections {
            first,
            second,
            a,
            b,
            samples,
        } => intersections_command(&first, &second, a, b, samples),
        Commands::Extremes {
            formula,
            a,
            b,
            samples,
        } => extremes_command(&formula, a, b, samples),
        Commands::Integrate {
            formula,
            a,
            b,
            samples,
        } => integrate_command(&formula, a, b, samples),
        Commands::Report {
            first,
            second,
            a,
            b,
            samples,
            json,
        } => report_command(&first, &second, a, b, samples, json),
        Commands::Csv {
            first,
            second,
            a,
            b,
            samples,
        } => csv_command(&first, &second, a, b, samples),
        Commands::Rewrite { formula } => {
            println!("{}", rewrite_powers(&formula));
            Ok(())
        }
        Commands::Tariff {
            table,
            quantity,
            policy,
            curve,
            json,
        } => tariff_command(&table, quantity, policy.into(), curve, json),
        Commands::Triangle { a, b, c, json } => triangle_command(a, b, c, json),
        Commands::Stats { input, block, json } => stats_command(&input, block, json),
    }
}

fn parse_formula(source: &str) -> Result<Expression> {
    Expression::parse(source).with_context(|| format!("cannot parse formula {:?}", source))
}

fn eval_command(formula: &str, x: f64) -> Result<()> {
    let expr = parse_formula(formula)?;
    match expr.eval(x) {
        EvalResult::Value(v) => println!("{}", v),
        EvalResult::Undefined => println!("undefined"),
    }
    Ok(())
}

fn roots_command(formula: &str, a: f64, b: f64, samples: usize) -> Result<()> {
    let expr = parse_formula(formula)?;
    let roots = find_roots(&expr, a, b, samples);
    if roots.is_empty() {
        println!("no roots in [{}, {}]", a, b);
        return Ok(());
    }
    for root in roots {
        println!("x = {}", root);
    }
    Ok(())
}

fn intersections_command(first: &str, second: &str, a: f64, b: f64, samples: usize) -> Result<()> {
    let f = parse_formula(first)?;
    let g = parse_formula(second)?;
    let points = find_intersections(&f, &g, a, b, samples);
    if points.is_empty() {
        println!("no intersections in [{}, {}]", a, b);
        return Ok(());
    }
    for p in points {
        println!("x = {}, y = {}", p.x, p.y);
    }
    Ok(())
}

fn extremes_command(formula: &str, a: f64, b: f64, samples: usize) -> Result<()> {
    let expr = parse_formula(formula)?;
    let extremes = find_extremes(&expr, a, b, samples);
    match extremes.max {
        Some(p) => println!("max: x = {}, y = {}", p.x, p.y),
        None => println!("max: undefined over the whole interval"),
    }
    match extremes.min {
        Some(p) => println!("min: x = {}, y = {}", p.x, p.y),
        None => println!("min: undefined over the whole interval"),
    }
    Ok(())
}

fn integrate_command(formula: &str, a: f64, b: f64, samples: usize) -> Result<()> {
    let expr = parse_formula(formula)?;
    println!("{}", integrate(&expr, a, b, samples));
    Ok(())
}

fn report_command(
    first: &str,
    second: &str,
    a: f64,
    b: f64,
    samples: usize,
    json: bool,
) -> Result<()> {
    let f = parse_formula(first)?;
    let g = parse_formula(second)?;
    let report = compare(&f, &g, a, b, samples);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn csv_command(first: &str, second: &str, a: f64, b: f64, samples: usize) -> Result<()> {
    let f = parse_formula(first)?;
    let g = parse_formula(second)?;
    write_sample_table(io::stdout().lock(), &f, &g, a, b, samples)?;
    Ok(())
}

fn tariff_command(
    table: &Path,
    quantity: f64,
    policy: BillingPolicy,
    curve: bool,
    json: bool,
) -> Result<()> {
    if quantity < 0.0 {
        bail!("quantity must be non-negative, got {}", quantity);
    }
    let text = fs::read_to_string(table)
        .with_context(|| format!("cannot read rate table {}", table.display()))?;
    let tiers: Vec<RateTier> = serde_json::from_str(&text)
        .with_context(|| format!("cannot parse rate table {}", table.display()))?;

    let quote = cost_for_quantity(&tiers, quantity, policy);
    let lines = breakdown(&tiers, quantity, policy);

    if json {
        let value = serde_json::json!({
            "quantity": quantity,
            "policy": policy,
            "quote": quote,
            "breakdown": lines,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for line in &lines {
            let upper = match line.tier.to {
                Some(to) => to.to_string(),
                None => "∞".to_string(),
            };
            println!(
                "{}-{} @ {}: {} units -> {:.6}",
                line.tier.from, upper, line.tier.rate, line.consumed, line.cost
            );
        }
        println!("total: {:.6}", quote.cost);
        if !quote.priced {
            println!("warning: no tariff applied to part or all of the quantity");
        }
    }

    if curve {
        match single_rate_curve(&tiers) {
            Some(expr) => println!("curve: {}", expr),
            None => println!("curve: (empty table)"),
        }
    }
    Ok(())
}

fn stats_command(input: &str, block: usize, json: bool) -> Result<()> {
    let text = if input == "-" {
        io::read_to_string(io::stdin().lock()).context("cannot read stdin")?
    } else {
        fs::read_to_string(input).with_context(|| format!("cannot read {}", input))?
    };

    let values = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("not a number: {:?}", token))
        })
        .collect::<Result<Vec<f64>>>()?;

    let summary = summarize(&values);
    let blocks = wins_by_block(&values, block);

    if json {
        let value = serde_json::json!({
            "count": values.len(),
            "summary": summary,
            "p25": percentile(&values, 25.0),
            "p50": percentile(&values, 50.0),
            "p75": percentile(&values, 75.0),
            "wins_by_block": blocks,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("count: {}", values.len());
        println!("mean: {:.6}", summary.mean);
        println!("variance: {:.6}", summary.variance);
        println!("std dev: {:.6}", summary.std_dev);
        for (label, p) in [("p25", 25.0), ("p50", 50.0), ("p75", 75.0)] {
            match percentile(&values, p) {
                Some(v) => println!("{}: {:.6}", label, v),
                None => println!("{}: (empty series)", label),
            }
        }
        if !blocks.is_empty() {
            let counts: Vec<String> = blocks.iter().map(usize::to_string).collect();
            println!("wins per block of {}: {}", block, counts.join(", "));
        }
    }
    Ok(())
}

fn triangle_command(a: f64, b: f64, c: f64, json: bool) -> Result<()> {
    let sides = TriangleSides::new(a, b, c)?;
    let angles = sides.angles();
    let medians = sides.medians();
    let altitudes = sides.altitudes();

    if json {
        let value = serde_json::json!({
            "sides": sides,
            "perimeter": sides.perimeter(),
            "area": sides.area(),
            "angles": angles,
            "medians": medians,
            "altitudes": altitudes,
            "by_sides": sides.classify_by_sides(),
            "by_angles": sides.classify_by_angles(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("perimeter: {}", sides.perimeter());
        println!("area: {:.6}", sides.area());
        println!(
            "angles: α={:.4}° β={:.4}° γ={:.4}°",
            angles.alpha, angles.beta, angles.gamma
        );
        println!(
            "medians: {:.4} {:.4} {:.4}",
            medians.from_a, medians.from_b, medians.from_c
        );
        println!(
            "altitudes: {:.4} {:.4} {:.4}",
            altitudes.from_a, altitudes.from_b, altitudes.from_c
        );
        println!(
            "classification: {:?} / {:?}",
            sides.classify_by_sides(),
            sides.classify_by_angles()
        );
    }
    Ok(())
}
