use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "bochka-cmd")]
#[command(about = "Command-line utility exercising the bochka sequence container")]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through every container operation and print the results
    Demo {
        /// Which part of the walkthrough to run
        #[arg(short, long, value_enum, default_value_t = commands::demo::Section::All)]
        section: commands::demo::Section,
    },

    /// Print count and capacity after each append, then after trimming
    Growth {
        /// Number of elements to append
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },

    /// Apply a script of operations to an integer container
    Eval {
        /// Initial elements, comma separated (e.g. 1,2,3)
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        init: Vec<i64>,

        /// Stop at the first failing operation
        #[arg(long)]
        strict: bool,

        /// Operations: add:V, insert:I:V, set:I:V, remove:V, remove-at:I,
        /// clear, capacity:N, trim
        ops: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Demo { section } => commands::demo::run(section, &mut out),
        Commands::Growth { count } => commands::growth::run(count, &mut out),
        Commands::Eval { init, strict, ops } => commands::eval::run(init, strict, &ops, &mut out),
    }
}
