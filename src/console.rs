use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Line oriented question/answer over any async reader (stdin in the binary).
pub struct Console<R: AsyncBufRead + Unpin> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> Console<R> {
    pub fn new(reader: R) -> Self {
        Console { lines: reader.lines() }
    }

    /// `None` once the input is closed.
    pub async fn prompt(&mut self, question: &str) -> Option<String> {
        print!("{question}");
        _ = std::io::stdout().flush();
        match self.lines.next_line().await {
            Ok(Some(line)) => Some(line.trim().to_string()),
            _ => None,
        }
    }

    pub async fn confirm(&mut self, question: &str, accepted: &[&str]) -> Option<bool> {
        let answer = self.prompt(question).await?.to_lowercase();
        Some(accepted.contains(&answer.as_str()))
    }
}
