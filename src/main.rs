use cardboard::cli::*;
use palc::Parser;

fn main() {
	let cardboard = cardboard::CardBoard;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = cardboard.run_file(&path) {
				eprintln!("Failed run file: {e}");
			}
		}
		Mode::Repl => cardboard.run_prompt(),
	}
}
