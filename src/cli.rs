use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cardboard", after_long_help = "An interpreter for the CardBoard language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a CardBoard source file
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
}
