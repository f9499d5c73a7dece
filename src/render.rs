use crate::{
    error::Result,
    sweep::{QuantityKind, Render, SweepSeries},
};
use std::io::Write;

/// Writes a sweep as a plain text datafile.
///
/// The file starts with `#` comment lines followed by a blank line, then one
/// whitespace separated row per angle holding the angle in degrees, the s
/// value and, when present, the p value.
pub struct DatWriter<W: Write> {
    inner: W,
    header: Vec<String>,
}

impl<W: Write> DatWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            header: Vec::new(),
        }
    }

    /// Adds a comment line written above the quantity name.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.header.push(comment.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Render for DatWriter<W> {
    fn render(&mut self, kind: QuantityKind, series: &SweepSeries) -> Result<()> {
        for comment in &self.header {
            writeln!(self.inner, "# {comment}")?;
        }
        writeln!(self.inner, "# quantity={kind}")?;
        writeln!(self.inner)?;

        // Rows stop at the shorter of the angle and s series.
        for (i, (angle, s)) in series.angles.iter().zip(&series.s).enumerate() {
            write!(self.inner, "{angle} {s}")?;
            if let Some(p) = series.p.get(i) {
                write!(self.inner, " {p}")?;
            }
            writeln!(self.inner)?;
        }

        self.inner.flush()?;
        Ok(())
    }
}

/// Writes a sweep as a JSON document holding the quantity and its series.
#[cfg(feature = "serde")]
pub struct JsonWriter<W: Write> {
    inner: W,
}

#[cfg(feature = "serde")]
impl<W: Write> JsonWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "serde")]
impl<W: Write> Render for JsonWriter<W> {
    fn render(&mut self, kind: QuantityKind, series: &SweepSeries) -> Result<()> {
        // NaN has no JSON representation and is written as null.
        let json = serde_json::json!({
            "quantity": kind,
            "series": series,
        });
        serde_json::to_writer_pretty(&mut self.inner, &json)?;
        writeln!(self.inner)?;
        self.inner.flush()?;
        Ok(())
    }
}
