use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::utils::{parse_numbers, parse_target};
use countdown::{Expression, NumbersSolver, SolveMode, SolverConfig, Solutions};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How solutions are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fully parenthesized, e.g. ((1 + 2) * 3)
    Canonical,
    /// Only the parentheses that matter, e.g. (1 + 2) * 3
    Compact,
    Latex,
}

impl OutputFormat {
    pub fn render(self, expr: &Expression) -> String {
        match self {
            OutputFormat::Canonical => expr.render(),
            OutputFormat::Compact => expr.to_compact_string(),
            OutputFormat::Latex => expr.to_latex(),
        }
    }
}

/// Countdown - Solve the numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find arithmetic expressions over up to six numbers that reach a target")]
#[command(version)]
pub struct CliArgs {
    /// The target number
    pub target: String,

    /// Up to six positive integers to combine
    pub numbers: Vec<String>,

    /// Find all solutions instead of stopping at the first
    #[arg(short, long)]
    pub all: bool,

    /// Search the numbers in the order given instead of sorting them
    #[arg(long)]
    pub keep_order: bool,

    /// How to print each solution
    #[arg(short, long, value_enum, default_value = "canonical")]
    pub format: OutputFormat,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: u64,
    pub numbers: Vec<u64>,
    pub solver: SolverConfig,
    pub format: OutputFormat,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        let target = parse_target(&args.target)?;
        let numbers = parse_numbers(args.numbers.as_slice())?;

        Ok(CliConfig {
            target,
            numbers,
            solver: SolverConfig {
                mode: if args.all {
                    SolveMode::All
                } else {
                    SolveMode::First
                },
                sort_numbers: !args.keep_order,
            },
            format: args.format,
        })
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Format the solver output the way it is printed
pub fn format_solutions(solutions: &Solutions, format: OutputFormat) -> String {
    let numbers: Vec<String> = solutions.numbers.iter().map(u64::to_string).collect();
    let mut out = format!(
        "target = {}, numbers = [{}]\n",
        solutions.target,
        numbers.join(", ")
    );

    if solutions.is_empty() {
        out.push_str("No solutions\n");
        return out;
    }

    for solution in solutions.iter() {
        out.push_str(&format!(
            "{} = {}\n",
            solutions.target,
            format.render(solution.expression())
        ));
    }
    out
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let config = CliConfig::try_from(args)?;
    let solver = NumbersSolver::new(config.solver);

    info!(
        "Searching for expressions using numbers {:?} that equal {}",
        config.numbers, config.target
    );

    let solutions = solver.solve(&config.numbers, config.target)?;
    if solutions.is_empty() {
        warn!("No matching expression found");
    }

    print!("{}", format_solutions(&solutions, config.format));
    Ok(())
}
