use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Line-oriented questions on an input/output pair, usually stdin/stdout.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask until the answer parses as `T`. An empty answer takes `example`.
    pub fn ask<T>(&mut self, question: &str, example: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            write!(self.output, "{question}. Example {example}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .with_context(|| format!("reading answer to {question:?}"))?;
            if read == 0 {
                bail!("input closed before answering {question:?}");
            }

            let answer = match line.trim() {
                "" => example,
                answer => answer,
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "could not parse {answer:?}: {e}")?,
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use weierstrass::BigInt;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parses_answer() {
        let mut p = prompter("-3\n");
        let a: BigInt = p.ask("curve coefficient a", "0").unwrap();
        assert_eq!(a, BigInt::from(-3));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "curve coefficient a. Example 0: ");
    }

    #[test]
    fn test_empty_answer_takes_example() {
        let mut p = prompter("\n  \n");
        let p_mod: u64 = p.ask("field modulus p", "67").unwrap();
        let gx: u64 = p.ask("x-coordinate of G", "2").unwrap();
        assert_eq!((p_mod, gx), (67, 2));
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut p = prompter("seven\n7\n");
        let b: u64 = p.ask("curve coefficient b", "7").unwrap();
        assert_eq!(b, 7);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("could not parse \"seven\""));
        assert_eq!(out.matches("Example 7").count(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut p = prompter("");
        assert!(p.ask::<u64>("scalar modulus", "79").is_err());
    }
}
