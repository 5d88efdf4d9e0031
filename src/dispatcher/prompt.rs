//! Line-oriented prompting over any async reader/writer pair.

use super::DispatchError;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::trace;

pub const WATER_PROMPT: &str = "Write how many ml of water you want to add:";
pub const MILK_PROMPT: &str = "Write how many ml of milk you want to add:";
pub const BEANS_PROMPT: &str = "Write how many grams of coffee beans you want to add:";
pub const CUPS_PROMPT: &str = "Write how many disposable cups of coffee you want to add:";

/// Prefix of every error line shown to the operator.
pub const ERROR_PREFIX: &str = "[Error]";

/// Writes prompts and reads one token per answer line.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Writes `text` verbatim and flushes.
    pub async fn say(&mut self, text: &str) -> Result<(), DispatchError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Shows `prompt` on its own line and reads the single-token answer.
    ///
    /// End of input is [`DispatchError::InputClosed`]; an empty answer, several
    /// tokens, or bytes that are not UTF-8 are [`DispatchError::InvalidInput`].
    pub async fn ask(&mut self, prompt: &str) -> Result<String, DispatchError> {
        self.say(prompt).await?;
        self.say("\n").await?;

        self.line.clear();
        match self.reader.read_line(&mut self.line).await {
            Ok(0) => return Err(DispatchError::InputClosed),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(DispatchError::InvalidInput)
            }
            Err(e) => return Err(e.into()),
        }
        trace!(line = %self.line.trim_end(), "Read");

        let mut tokens = self.line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(token), None) => Ok(token.to_string()),
            _ => Err(DispatchError::InvalidInput),
        }
    }

    /// Like [`ask`](Self::ask), parsing the token as `T`.
    pub async fn ask_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, DispatchError> {
        self.ask(prompt)
            .await?
            .parse()
            .map_err(|_| DispatchError::InvalidInput)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ask_reads_one_token() {
        let mut prompter = Prompter::new(&b"  buy \n"[..], Vec::new());
        assert_eq!(prompter.ask("Write action:").await.unwrap(), "buy");
        let (_, out) = prompter.into_inner();
        assert_eq!(String::from_utf8(out).unwrap(), "Write action:\n");
    }

    #[tokio::test]
    async fn test_ask_rejects_blank_and_multiple_tokens() {
        let mut prompter = Prompter::new(&b"\nbuy fill\n"[..], Vec::new());
        assert!(matches!(prompter.ask("?").await, Err(DispatchError::InvalidInput)));
        assert!(matches!(prompter.ask("?").await, Err(DispatchError::InvalidInput)));
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let mut prompter = Prompter::new(&b""[..], Vec::new());
        assert!(matches!(prompter.ask("?").await, Err(DispatchError::InputClosed)));
    }

    #[tokio::test]
    async fn test_last_line_without_newline() {
        let mut prompter = Prompter::new(&b"exit"[..], Vec::new());
        assert_eq!(prompter.ask("?").await.unwrap(), "exit");
    }

    #[tokio::test]
    async fn test_ask_number() {
        let mut prompter = Prompter::new(&b"42\n-1\nten\n"[..], Vec::new());
        assert_eq!(prompter.ask_number::<u32>("?").await.unwrap(), 42);
        assert!(matches!(prompter.ask_number::<u32>("?").await, Err(DispatchError::InvalidInput)));
        assert!(matches!(prompter.ask_number::<u32>("?").await, Err(DispatchError::InvalidInput)));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_invalid_input() {
        let mut prompter = Prompter::new(&b"\xff\xfe\nbuy\n"[..], Vec::new());
        assert!(matches!(prompter.ask("?").await, Err(DispatchError::InvalidInput)));
        assert_eq!(prompter.ask("?").await.unwrap(), "buy");
    }
}
