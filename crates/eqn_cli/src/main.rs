//! `eqn`: solve one problem from the command line and print the worked
//! solution as text or JSON.

mod format;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use eqn_model::{ExplanationLevel, ParamValue, Params, ProblemType};
use eqn_session::config::CONFIG_FILE;
use eqn_session::json::{error_to_json_pretty, to_json_pretty, ErrorJsonOutput};
use eqn_session::{Session, SessionConfig, SolveRequest};

#[derive(Parser, Debug)]
#[command(name = "eqn", version)]
#[command(about = "Step-by-step solver for algebra problems")]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve an equation, inequality, system or word problem
    Solve(SolveArgs),
    /// List the recognized problem types
    Types,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Equation text, e.g. "x^2 - 5x + 6 = 0"
    equation: Option<String>,

    /// Free-text word problem
    #[arg(long)]
    scenario: Option<String>,

    /// Problem type name; skips recognition (see `eqn types`)
    #[arg(long = "type")]
    problem_type: Option<String>,

    /// Explicit parameter as key=value; repeatable
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, ParamValue)>,

    /// Explanation level: basic, intermediate, detailed, scaffolded
    #[arg(long)]
    level: Option<ExplanationLevel>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Omit the graph description
    #[arg(long, default_value_t = false)]
    no_graph: bool,

    /// Omit bridges between steps
    #[arg(long, default_value_t = false)]
    no_bridges: bool,
}

fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter name in '{}'", raw));
    }
    let value = value.trim();
    let value = match value.parse::<f64>() {
        Ok(n) => ParamValue::Number(n),
        Err(_) => ParamValue::Text(value.to_string()),
    };
    Ok((key.to_string(), value))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Types => {
            print!("{}", format::types_table(&ProblemType::ALL));
            Ok(())
        }
        Command::Solve(args) => {
            let path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            let config = SessionConfig::load(&path)
                .with_context(|| format!("loading configuration from {}", path.display()))?;
            solve(args, config)
        }
    }
}

fn solve(args: SolveArgs, mut config: SessionConfig) -> Result<()> {
    if args.no_graph {
        config.include_graph = false;
    }
    if args.no_bridges {
        config.include_conceptual_connections = false;
    }
    let parameters = (!args.params.is_empty()).then(|| {
        args.params
            .iter()
            .fold(Params::new(), |p, (k, v)| p.with(k, v.clone()))
    });
    let request = SolveRequest {
        equation: args.equation.clone(),
        scenario: args.scenario.clone(),
        parameters,
        problem_type: args.problem_type.clone(),
        explanation_level: args.level,
        context: None,
    };

    tracing::info!(equation = ?request.equation, scenario = ?request.scenario, "solve request");
    let mut session = Session::new(config);
    match (session.solve(&request), args.format) {
        (Ok(response), OutputFormat::Json) => {
            println!("{}", to_json_pretty(&response).context("serializing response")?);
            Ok(())
        }
        (Ok(response), OutputFormat::Text) => {
            print!("{}", format::render(&response));
            Ok(())
        }
        (Err(err), OutputFormat::Json) => {
            let input = request.equation.as_deref().or(request.scenario.as_deref());
            let out = ErrorJsonOutput::from_solve_error(&err, input);
            println!("{}", error_to_json_pretty(&out).context("serializing error")?);
            Err(anyhow::Error::new(err).context("solve failed"))
        }
        (Err(err), OutputFormat::Text) => Err(anyhow::Error::new(err).context("solve failed")),
    }
}
