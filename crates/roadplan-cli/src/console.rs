//! Line-oriented prompts over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Console I/O. `None` from a read means the input has ended.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is and flush.
    pub fn write(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Write a line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Show `prompt` and read one line without its terminator.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        self.next_line()
    }

    /// Show `prompt` and read until a line parses as `T` and passes `accept`.
    ///
    /// Each rejected line is discarded and `retry` is shown before reading
    /// again.
    pub fn read_number<T, F>(
        &mut self,
        prompt: &str,
        retry: &str,
        accept: F,
    ) -> io::Result<Option<T>>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        self.write(prompt)?;
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(Some(value)),
                _ => {
                    tracing::debug!("Rejected numeric input {:?}", line);
                    self.write(retry)?;
                }
            }
        }
    }

    /// Read one raw line without its terminator.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_line_strips_terminator() {
        let mut console = console("Kigali\r\nHuye\n");
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("Kigali"));
        assert_eq!(console.next_line().unwrap().as_deref(), Some("Huye"));
        assert_eq!(console.next_line().unwrap(), None);
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> ");
    }

    #[test]
    fn read_line_keeps_inner_spaces() {
        let mut console = console("New York \n");
        assert_eq!(console.read_line("").unwrap().as_deref(), Some("New York "));
    }

    #[test]
    fn read_number_retries_until_accepted() {
        let mut console = console("abc\n0\n -3\n 4 \n");
        let value = console
            .read_number::<i64, _>("count: ", "again: ", |n| *n > 0)
            .unwrap();
        assert_eq!(value, Some(4));
        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "count: again: again: again: "
        );
    }

    #[test]
    fn invalid_utf8_line_is_read_lossily() {
        let mut console = Console::new(Cursor::new(b"Nyagatar\xe9\n7\n".to_vec()), Vec::new());
        assert_eq!(console.next_line().unwrap().as_deref(), Some("Nyagatar\u{FFFD}"));
        assert_eq!(console.next_line().unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn invalid_utf8_number_is_retried() {
        let mut console = Console::new(Cursor::new(b"\xff\n3\n".to_vec()), Vec::new());
        let value = console
            .read_number::<usize, _>("count: ", "again: ", |n| *n > 0)
            .unwrap();
        assert_eq!(value, Some(3));
    }

    #[test]
    fn read_number_none_at_end_of_input() {
        let mut console = console("x\n");
        let value = console
            .read_number::<f64, _>("amount: ", "again: ", |a| *a >= 0.0)
            .unwrap();
        assert_eq!(value, None);
    }
}
