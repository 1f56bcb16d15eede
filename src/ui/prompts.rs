//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! A [`Prompter`] owns a line-oriented input and an output. Prompts are
//! written to the output without a trailing newline and answered with one
//! line of input. Every prompt that expects a particular shape of answer
//! (a number, y/n) keeps asking until it gets one.
//!
//! End of input is the only way out of a re-prompt loop: it surfaces as
//! [`PromptError::Cancelled`] so callers can unwind cleanly.
//!
//! Generic over `BufRead`/`Write` so sessions can be scripted in tests:
//!
//! ```
//! use std::io::Cursor;
//! use shoestock::ui::prompts::Prompter;
//!
//! let mut prompter = Prompter::new(Cursor::new("maybe\ny\n"), Vec::new());
//! assert!(prompter.confirm("Continue? (y/n): ").unwrap());
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Message shown after an answer that is neither y nor n.
pub const RETRY_YES_NO: &str = "Try again...\n";

/// Line-based prompter over an input and an output.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// Prompter bound to the process's stdin and stdout.
pub type StdPrompter = Prompter<io::StdinLock<'static>, io::Stdout>;

impl StdPrompter {
    /// Prompter over the terminal.
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for plain output between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Take back the input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show `message` and read one line.
    ///
    /// The line terminator is stripped; everything else is returned as
    /// typed, including surrounding spaces and an empty answer.
    pub fn text(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Cancelled);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Show `message` and read one integer, without retrying.
    ///
    /// Returns `Ok(None)` when the answer is not an integer.
    pub fn try_integer(&mut self, message: &str) -> Result<Option<i64>, PromptError> {
        Ok(self.text(message)?.trim().parse().ok())
    }

    /// Ask for an integer until one is given, printing `retry` after each
    /// unparseable answer.
    pub fn integer(&mut self, message: &str, retry: &str) -> Result<i64, PromptError> {
        loop {
            if let Some(n) = self.try_integer(message)? {
                return Ok(n);
            }
            writeln!(self.output, "{}", retry)?;
        }
    }

    /// Ask a y/n question until the answer is `y` or `n` (any case).
    ///
    /// The answer is not trimmed, so ` y` is asked again.
    pub fn confirm(&mut self, message: &str) -> Result<bool, PromptError> {
        loop {
            match self.text(message)?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "{}", RETRY_YES_NO)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    mod text {
        use super::*;

        #[test]
        fn strips_line_terminator_only() {
            let mut p = prompter("  Air Max  \r\n");
            assert_eq!(p.text("Product: ").unwrap(), "  Air Max  ");
            assert_eq!(output_of(p), "Product: ");
        }

        #[test]
        fn empty_answer_is_allowed() {
            let mut p = prompter("\n");
            assert_eq!(p.text("Country: ").unwrap(), "");
        }

        #[test]
        fn last_line_without_newline() {
            let mut p = prompter("Peru");
            assert_eq!(p.text("Country: ").unwrap(), "Peru");
        }

        #[test]
        fn end_of_input_cancels() {
            let mut p = prompter("");
            assert!(matches!(p.text("Country: "), Err(PromptError::Cancelled)));
        }
    }

    mod integer {
        use super::*;

        #[test]
        fn retries_until_number() {
            let mut p = prompter("ten\n\n 12 \n");
            assert_eq!(p.integer("Qty: ", "Not a number").unwrap(), 12);
            assert_eq!(
                output_of(p),
                "Qty: Not a number\nQty: Not a number\nQty: "
            );
        }

        #[test]
        fn negative_numbers_parse() {
            let mut p = prompter("-4\n");
            assert_eq!(p.integer("Qty: ", "retry").unwrap(), -4);
        }

        #[test]
        fn try_integer_does_not_retry() {
            let mut p = prompter("x\n7\n");
            assert_eq!(p.try_integer("Qty: ").unwrap(), None);
            assert_eq!(p.try_integer("Qty: ").unwrap(), Some(7));
        }

        #[test]
        fn end_of_input_cancels() {
            let mut p = prompter("abc\n");
            assert!(matches!(
                p.integer("Qty: ", "retry"),
                Err(PromptError::Cancelled)
            ));
        }
    }

    mod confirm {
        use super::*;

        #[test]
        fn yes_and_no_any_case() {
            let mut p = prompter("Y\nn\n");
            assert!(p.confirm("? ").unwrap());
            assert!(!p.confirm("? ").unwrap());
        }

        #[test]
        fn reprompts_on_other_input() {
            let mut p = prompter("yes\nmaybe\ny\n");
            assert!(p.confirm("Sure? ").unwrap());
            assert_eq!(
                output_of(p),
                "Sure? Try again...\n\nSure? Try again...\n\nSure? "
            );
        }

        #[test]
        fn padded_answer_is_asked_again() {
            let mut p = prompter(" y 
n 
N
");
            assert!(!p.confirm("? ").unwrap());
            assert_eq!(output_of(p).matches("Try again...").count(), 2);
        }
    }
}
