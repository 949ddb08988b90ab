pub mod output;

pub use output::{
    create_writer, AggregationReport, JsonWriter, MarkdownWriter, OutputWriter, TerminalWriter,
};

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Destination for command output: the given file, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        write_file(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn write_error_names_the_file() {
        let err = write_file(Path::new("/no/such/dir/file.toml"), "").unwrap_err();
        assert!(err.to_string().contains("/no/such/dir/file.toml"));
    }

    #[test]
    fn output_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        {
            let mut out = open_output(Some(&path)).unwrap();
            writeln!(out, "{{}}").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
