use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{CardBoardError, environment::Environment, evaluator::eval_program, lexer::Lexer, object::Object, parser::Parser, utils::RcCell};

/// CardBoard is the driver for the whole pipeline: text to lexer to parser
/// to evaluator.
pub struct CardBoard;

impl CardBoard {
	/// Run a whole source file against a fresh root environment and print
	/// the final value.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CardBoardError> {
		let source = read_to_string(path).context("Failed open source file")?;
		let result = self.run(&source, &Environment::new())?;
		println!("{result}");
		Ok(())
	}

	/// Run the interactive prompt. A single root environment persists across
	/// the whole session, so bindings from earlier lines stay visible. A
	/// blank line, `:q` or end of input terminates the session.
	pub fn run_prompt(&self) {
		let env = Environment::new();
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!(">>> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => break,
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			let line = input.trim();
			if line.is_empty() || line == ":q" {
				break;
			}
			match self.run(line, &env) {
				Ok(result) => println!("{result}"),
				Err(e) => eprintln!("{e}"),
			}
		}
		println!("Exited cardboard repl");
	}

	/// Lex, parse and evaluate one source unit. All parse errors for the
	/// unit are surfaced together before evaluation is attempted; any parse
	/// error skips evaluation entirely.
	fn run(&self, source: &str, env: &RcCell<Environment>) -> Result<Object, CardBoardError> {
		let mut parser = Parser::new(Lexer::new(source));
		let program = parser.parse_program();

		if !parser.errors().is_empty() {
			for error in parser.errors() {
				eprintln!("parse error: {error}");
			}
			return Err(CardBoardError::ParserErrors(parser.errors().len()));
		}

		Ok(eval_program(&program, env)?)
	}
}
