use clap::{ArgAction, Parser, Subcommand, ValueHint};

#[derive(Parser)]
#[command(about, version, name = "sparql", arg_required_else_help = true)]
/// Command line client for SPARQL endpoints
pub struct Args {
    /// Log what is sent and received on stderr, twice for more details
    ///
    /// Without it, the RUST_LOG environment variable is used.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Execute a SPARQL query and print its result
    ///
    /// Solutions are printed as tab-separated values, booleans as "true" or "false" and graphs as
    /// returned by the endpoint.
    Query {
        /// URL of the SPARQL query endpoint
        #[arg(short, long, env = "SPARQL_ENDPOINT", value_hint = ValueHint::Url)]
        endpoint: String,
        /// Request timeout in milliseconds
        ///
        /// By default, 10 seconds.
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// The Accept header to send, to require a specific result format
        #[arg(long)]
        accept: Option<String>,
        /// The query to execute, or "-" to read it from stdin
        query: String,
    },
    /// Execute a SPARQL update and print the response
    Update {
        /// URL of the SPARQL update endpoint
        #[arg(short, long, env = "SPARQL_UPDATE_ENDPOINT", value_hint = ValueHint::Url)]
        update_endpoint: String,
        /// Request timeout in milliseconds
        ///
        /// By default, 10 seconds.
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// The update to execute, or "-" to read it from stdin
        update: String,
    },
}
