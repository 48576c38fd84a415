use crate::domain::ports::Prompt;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Stdin};

/// Reads one integer per line from a buffered reader.
#[derive(Debug)]
pub struct LinePrompt<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LinePrompt<BufReader<Stdin>> {
    /// Prompt on standard input. Blocks with no timeout.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn read_index(&mut self) -> Option<i64> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                tracing::debug!("Prompt input closed");
                None
            }
            Ok(_) => line.trim().parse::<i64>().ok(),
            Err(e) => {
                tracing::debug!("Prompt read failed: {}", e);
                None
            }
        }
    }
}

/// Answers from a fixed list, then `None`.
#[derive(Debug, Clone, Default)]
pub struct CannedPrompt {
    answers: VecDeque<Option<i64>>,
    asked: usize,
}

impl CannedPrompt {
    pub fn new<I: IntoIterator<Item = Option<i64>>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: 0,
        }
    }

    /// Prompt that always fails, for non-interactive runs.
    pub fn unanswered() -> Self {
        Self::default()
    }

    pub fn times_asked(&self) -> usize {
        self.asked
    }
}

impl Prompt for CannedPrompt {
    fn read_index(&mut self) -> Option<i64> {
        self.asked += 1;
        self.answers.pop_front().flatten()
    }
}
