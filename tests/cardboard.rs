#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	#[test]
	fn test_cardboard_file() {
		let cardboard = cardboard::CardBoard;
		let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("test.cb");
		let result = cardboard.run_file(&path);
		assert!(result.is_ok());
	}

	#[test]
	fn missing_file_is_an_error() {
		let cardboard = cardboard::CardBoard;
		assert!(cardboard.run_file("no/such/file.cb").is_err());
	}
}
