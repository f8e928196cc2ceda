#![allow(clippy::print_stderr, reason = "Row errors are reported on stderr")]
use crate::cli::{Args, Command};
use anyhow::Context;
use clap::Parser;
use sparql_client::results::ResultSet;
use sparql_client::{ClientConfig, QueryOutcome, SparqlClient};
use std::io::{self, stdin, stdout, BufWriter, Read, Write};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    match args.command {
        Command::Query {
            endpoint,
            timeout_ms,
            accept,
            query,
        } => {
            let mut config = ClientConfig::new(endpoint);
            if let Some(timeout_ms) = timeout_ms {
                config = config.with_timeout(Duration::from_millis(timeout_ms));
            }
            if let Some(accept) = accept {
                config = config.with_accept(accept);
            }
            let query = read_operation(query)?;
            let client = SparqlClient::new(config)?;
            let outcome = client.query(&query).with_context(|| {
                format!("Failed to query {}", client.config().query_endpoint)
            })?;

            let mut output = BufWriter::new(stdout().lock());
            match outcome {
                QueryOutcome::Solutions(solutions) => {
                    debug!("Writing solutions over {} variables", solutions.variables().len());
                    write_solutions(&solutions, &mut output)?;
                }
                QueryOutcome::Boolean(value) => writeln!(output, "{value}")?,
                QueryOutcome::Graph(graph) => output.write_all(graph.as_bytes())?,
            }
            output.flush()?;
            Ok(())
        }
        Command::Update {
            update_endpoint,
            timeout_ms,
            update,
        } => {
            let mut config =
                ClientConfig::new(update_endpoint.clone()).with_update_endpoint(update_endpoint);
            if let Some(timeout_ms) = timeout_ms {
                config = config.with_timeout(Duration::from_millis(timeout_ms));
            }
            let update = read_operation(update)?;
            let client = SparqlClient::new(config)?;
            let response = client.update(&update).with_context(|| {
                format!(
                    "Failed to update {}",
                    client.config().update_endpoint.as_deref().unwrap_or_default()
                )
            })?;
            let mut output = stdout().lock();
            output.write_all(response.body.as_bytes())?;
            output.flush()?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns the argument itself or, if it is `-`, the content of stdin.
fn read_operation(argument: String) -> anyhow::Result<String> {
    if argument != "-" {
        return Ok(argument);
    }
    let mut text = String::new();
    stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read the operation from stdin")?;
    debug!("Read a {} bytes operation from stdin", text.len());
    Ok(text)
}

/// Writes the variables line then one line per solution, unbound variables being left empty.
///
/// A solution that fails to parse is reported on stderr and skipped.
fn write_solutions(solutions: &ResultSet, mut output: impl Write) -> io::Result<()> {
    let variables = solutions.variables();
    let head = variables
        .iter()
        .map(|variable| format!("?{variable}"))
        .collect::<Vec<_>>();
    writeln!(output, "{}", head.join("\t"))?;

    for (i, row) in solutions.rows().enumerate() {
        match row {
            Ok(row) => {
                let cells = variables
                    .iter()
                    .map(|variable| {
                        row.get(variable)
                            .map_or_else(String::new, ToString::to_string)
                    })
                    .collect::<Vec<_>>();
                writeln!(output, "{}", cells.join("\t"))?;
            }
            Err(e) => eprintln!("Skipping result {}: {e}", i + 1),
        }
    }
    Ok(())
}
