//! Result table keyed by (method, segment count) and its text rendering
//!
//! Entries keep the order they were inserted in, which is the order the
//! driver ran them. A failed entry keeps its error so the rest of the table
//! can still be reported.

use std::fmt;

use crate::quadrature::error::QuadratureError;
use crate::quadrature::integrator::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultKey {
    pub method: Method,
    pub segments: usize, // segment count, or point count for the unequal grid
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: ResultKey,
    pub outcome: Result<f64, QuadratureError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    entries: Vec<Entry>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for (`method`, `segments`)
    /// An overwritten entry keeps its original position
    pub fn insert(&mut self, method: Method, segments: usize, outcome: Result<f64, QuadratureError>) {
        let key = ResultKey { method, segments };
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.outcome = outcome,
            None => self.entries.push(Entry { key, outcome }),
        }
    }

    pub fn get(&self, method: Method, segments: usize) -> Option<&Result<f64, QuadratureError>> {
        let key = ResultKey { method, segments };
        self.entries.iter().find(|e| e.key == key).map(|e| &e.outcome)
    }

    /// Distance for (`method`, `segments`) if it was computed successfully
    pub fn distance(&self, method: Method, segments: usize) -> Option<f64> {
        self.get(method, segments).and_then(|r| r.as_ref().ok().copied())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute error of every successful entry against `analytical`
    pub fn errors(&self, analytical: f64) -> Vec<(ResultKey, f64)> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok().map(|d| (e.key, (d - analytical).abs())))
            .collect()
    }

    /// One line per entry, a blank line, then the analytical value and the table
    pub fn render(&self, analytical: f64) -> String {
        let mut out = String::new();
        for e in &self.entries {
            match &e.outcome {
                Ok(d) => out.push_str(&format!(
                    "Method: {}, Segments: {}, Distance: {}\n",
                    e.key.method, e.key.segments, d
                )),
                Err(err) => out.push_str(&format!(
                    "Method: {}, Segments: {}, Error: {}\n",
                    e.key.method, e.key.segments, err
                )),
            }
        }
        out.push('\n');
        out.push_str(&format!("Analytical Solution: {analytical}\n"));
        out.push_str(&format!("Results: {self}\n"));
        out
    }

    /// Absolute error per entry, for comparing convergence across resolutions
    pub fn render_errors(&self, analytical: f64) -> String {
        let mut out = String::from("Absolute error against the analytical solution:\n");
        for (key, err) in self.errors(analytical) {
            out.push_str(&format!(
                "Method: {}, Segments: {}, Abs Error: {:.6e}\n",
                key.method, key.segments, err
            ));
        }
        out
    }
}

// mapping form: {("Trapezoidal", 2): 272.51, ("Simpsons", 2): 288.56}
impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "(\"{}\", {}): ", e.key.method, e.key.segments)?;
            match &e.outcome {
                Ok(d) => write!(f, "{d}")?,
                Err(err) => write!(f, "Err(\"{err}\")")?,
            }
        }
        f.write_str("}")
    }
}
