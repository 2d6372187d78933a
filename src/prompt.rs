use core::error::Error;
use core::fmt;
use core::str::FromStr;

use std::io::{self, BufRead, Write};

#[derive(Debug)]
pub(crate) struct AnswerErr;

impl fmt::Display for AnswerErr {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected yes or no")
    }
}

impl Error for AnswerErr {}

/// An answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Answer {
    Yes,
    No,
}

impl Answer {
    #[inline]
    pub(crate) fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    fn hint(&self) -> &'static str {
        match self {
            Answer::Yes => "[Y/n]",
            Answer::No => "[y/N]",
        }
    }
}

impl FromStr for Answer {
    type Err = AnswerErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("y") {
            return Ok(Answer::Yes);
        }

        if s.eq_ignore_ascii_case("no") || s.eq_ignore_ascii_case("n") {
            return Ok(Answer::No);
        }

        Err(AnswerErr)
    }
}

impl fmt::Display for Answer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => write!(f, "yes"),
            Answer::No => write!(f, "no"),
        }
    }
}

/// Ask a yes/no question on standard output and read the answer from standard
/// input. Empty input and end of input select the default.
pub(crate) fn ask(question: &str, default: Answer) -> io::Result<Answer> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ask_with(&mut stdin.lock(), &mut stdout.lock(), question, default)
}

fn ask_with(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    question: &str,
    default: Answer,
) -> io::Result<Answer> {
    loop {
        write!(output, "{question} {} ", default.hint())?;
        output.flush()?;

        let mut line = String::new();

        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }

        let line = line.trim();

        if line.is_empty() {
            return Ok(default);
        }

        match line.parse() {
            Ok(answer) => return Ok(answer),
            Err(..) => writeln!(output, "Please answer yes or no.")?,
        }
    }
}
