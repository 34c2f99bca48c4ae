//! Plain CSV sidecars holding the plotted series.

use std::fs::write;
use std::io;
use std::path::Path;

/// One named column; shorter columns leave trailing cells empty.
pub struct Column<'a> {
    pub name: &'a str,
    pub values: &'a [f64],
}

impl<'a> Column<'a> {
    pub fn new(name: &'a str, values: &'a [f64]) -> Self {
        Self { name, values }
    }
}

pub fn columns_csv(columns: &[Column<'_>]) -> String {
    let rows = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
    let header: Vec<&str> = columns.iter().map(|c| c.name).collect();
    let mut out = header.join(",");
    out.push('\n');
    for i in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| c.values.get(i).map(|v| format!("{v:e}")).unwrap_or_default())
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

pub fn write_columns(path: &Path, columns: &[Column<'_>]) -> io::Result<()> {
    write(path, columns_csv(columns))
}
