//! External constituency parser integration.
//!
//! Implements the core's [`ParserService`] seam by shelling out to a
//! configured parser command (e.g. a Stanford `lexparser.sh` wrapper).
//! The command receives preprocessed text on stdin and must print
//! bracketed trees on stdout, one tree per sentence.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};
use treedex_core::error::{ParserError, ParserResult};
use treedex_core::parser::{ParserService, preprocess};
use treedex_core::tree::{Tree, parse_forest};

/// Runs an external parser command for each unit of text.
#[derive(Debug, Clone)]
pub struct ExternalParser {
    program: String,
    args: Vec<String>,
}

impl ExternalParser {
    /// Build from a whitespace-separated command line.
    ///
    /// Returns `None` for an empty command.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl ParserService for ExternalParser {
    #[instrument(skip_all, fields(program = %self.program, text_len = text.len()))]
    fn parse_text(&self, text: &str) -> ParserResult<Vec<Tree>> {
        let cleaned = preprocess(text);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ParserError::Unavailable(format!("failed to launch {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(cleaned.as_bytes())
                .map_err(|e| ParserError::Unavailable(format!("failed to write input: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| ParserError::Unavailable(format!("{} did not finish: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ParserError::Unavailable(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let notation = String::from_utf8_lossy(&output.stdout);
        debug!(output_len = notation.len(), "parser output received");
        Ok(parse_forest(&notation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_line() {
        let parser = ExternalParser::from_command_line("lexparser.sh -maxLength 100").unwrap();
        assert_eq!(parser.program, "lexparser.sh");
        assert_eq!(parser.args, vec!["-maxLength", "100"]);
        assert!(ExternalParser::from_command_line("   ").is_none());
    }

    #[test]
    fn missing_program_is_unavailable() {
        let parser = ExternalParser::from_command_line("treedex-no-such-parser").unwrap();
        let err = parser.parse_text("hello").unwrap_err();
        assert!(matches!(err, ParserError::Unavailable(_)));
    }

    #[test]
    fn cat_passes_trees_through() {
        // `cat` echoes stdin, so preprocessed bracketed input comes back out
        let parser = ExternalParser::from_command_line("cat").unwrap();
        let trees = parser
            .parse_text("(ROOT (S (NP (PRP I)) (VP (VBP run))))")
            .unwrap();
        assert_eq!(trees.len(), 1);
        assert_eq!(trees[0].root().label(), "ROOT");
    }

    #[test]
    fn failing_command_is_unavailable() {
        let parser = ExternalParser::from_command_line("false").unwrap();
        let err = parser.parse_text("hello").unwrap_err();
        assert!(matches!(err, ParserError::Unavailable(_)));
    }
}
