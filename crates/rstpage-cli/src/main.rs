//! CLI entrypoint.

use std::error::Error;
use std::fs;
use std::io::Read;
use std::process;

use clap::Parser;
use rstpage_core::Rstpage;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the rstpage CLI.
struct Cli {
	/// Path to a JSON Render Context document; "-" reads from stdin
	#[arg(default_value = "-")]
	context: String,

	/// Write the rendered page to a file instead of stdout
	#[arg(short = 'o', long, value_name = "FILE")]
	output: Option<String>,

	/// Accept contexts with empty identifiers instead of rejecting them
	#[arg(long, default_value_t = false)]
	lenient: bool,
}

/// Read the context document from the configured source.
fn read_context(cli: &Cli) -> Result<String, Box<dyn Error>> {
	if cli.context == "-" {
		let mut buffer = String::new();
		std::io::stdin().read_to_string(&mut buffer)?;
		Ok(buffer)
	} else {
		Ok(fs::read_to_string(&cli.context)?)
	}
}

/// Render one module page and write it to the configured destination.
fn run_cmdline(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let json = read_context(cli)?;

	let page = Rstpage::new()
		.with_strict(!cli.lenient)
		.render_str(&json)?;

	match &cli.output {
		Some(path) => fs::write(path, &page)?,
		None => print!("{page}"),
	}

	Ok(())
}

fn main() {
	let cli = Cli::parse();
	if let Err(e) = run_cmdline(&cli) {
		eprintln!("{e}");
		process::exit(1);
	}
}
