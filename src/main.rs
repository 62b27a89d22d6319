use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use libdwarf_fixup::patch;

#[derive(Parser)]
#[command(name = "fixlibdwarfelf")]
#[command(
	author,
	version,
	about = "Patch the generated libdwarf.h so it can be used together with libelf.h"
)]
struct Cli {
	/// Generated libdwarf header to read
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Where to write the patched header (created or overwritten)
	#[arg(value_name = "OUTPUT")]
	output: PathBuf,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Unable to fixup libdwarf header: {e:#}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> Result<()> {
	patch(&cli.input, &cli.output)?;
	Ok(())
}
