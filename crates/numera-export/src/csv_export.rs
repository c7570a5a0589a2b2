//! Sample tables as CSV.

use std::io;

use thiserror::Error;

use numera_analysis::linspace;
use numera_eval::{EvalResult, Expression};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Write `n` samples of `f` and `g` over `[a, b]` as `x,f,g` rows.
/// Undefined samples become empty cells, the spreadsheet convention for
/// missing values.
pub fn write_sample_table<W: io::Write>(
    writer: W,
    f: &Expression,
    g: &Expression,
    a: f64,
    b: f64,
    n: usize,
) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["x", "f", "g"])?;

    for x in linspace(a, b, n) {
        out.write_record([
            x.to_string(),
            cell(f.eval(x)),
            cell(g.eval(x)),
        ])?;
    }

    out.flush()?;
    Ok(())
}

fn cell(result: EvalResult) -> String {
    match result.value() {
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_table_layout() {
        let f = Expression::parse("x").unwrap();
        let g = Expression::parse("sqrt(x)").unwrap();
        let mut buf = Vec::new();
        write_sample_table(&mut buf, &f, &g, -1.0, 1.0, 3).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,f,g");
        assert_eq!(lines.len(), 4);
        // sqrt is undefined at -1: empty cell
        assert_eq!(lines[1], "-1,-1,");
        assert_eq!(lines[2], "0,0,0");
        assert_eq!(lines[3], "1,1,1");
    }
}
