pub mod evaluator;
pub mod parser;

/// Top-level error type for the CardBoard interpreter.
#[derive(thiserror::Error, Debug)]
pub enum CardBoardError {
	/// Internal error, should never happen
	#[error("InternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Parse errors collected while parsing; each was already reported
	#[error("Generated {0} parse errors")]
	ParserErrors(usize),
	/// Runtime error from the evaluator
	#[error("Evaluation error: {0}")]
	EvalError(#[from] evaluator::EvalError),
}
