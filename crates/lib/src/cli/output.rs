use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Write the answer of the given part.
    pub(crate) fn answer(&mut self, part: usize, value: &dyn fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: AnswerLine {
                        part,
                        value: DisplayString(value),
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "Final answer: {value}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
}

#[derive(Serialize)]
struct AnswerLine<T> {
    part: usize,
    value: T,
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Output, OutputKind};

    #[test]
    fn test_normal_output() {
        let mut out = Vec::new();
        let mut o = Output::new(&mut out, OutputKind::Normal);
        o.answer(1, &4361).unwrap();
        o.answer(2, &467835).unwrap();
        assert_eq!(out, b"Final answer: 4361\nFinal answer: 467835\n");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        let mut o = Output::new(&mut out, OutputKind::Json);
        o.answer(2, &30).unwrap();

        assert_eq!(
            std::str::from_utf8(&out).unwrap(),
            "{\"type\":\"answer\",\"data\":{\"part\":2,\"value\":\"30\"}}\n"
        );
    }
}
