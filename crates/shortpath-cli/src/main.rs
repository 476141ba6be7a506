mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use shortpath_cli::graph_args::GraphArgs;
use shortpath_cli::output::OutputFormat;

use commands::path::{handle_demo_command, handle_path_command};
use commands::table::handle_table_command;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest paths over small in-memory graphs")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(flatten)]
    graph: GraphArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the B -> E shortest path on the five-vertex demonstration graph.
    Demo,
    /// Compute the shortest path between two vertices.
    Path {
        /// Starting vertex label.
        #[arg(long = "from")]
        from: String,
        /// Destination vertex label.
        #[arg(long = "to")]
        to: String,
    },
    /// Print distances and predecessors from one vertex to every other vertex.
    Table {
        /// Source vertex label.
        #[arg(long = "source")]
        source: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let rendered = match &cli.command {
        Command::Demo => handle_demo_command(&cli.graph, cli.format),
        Command::Path { from, to } => handle_path_command(&cli.graph, cli.format, from, to),
        Command::Table { source } => handle_table_command(&cli.graph, cli.format, source),
    }?;

    print!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
