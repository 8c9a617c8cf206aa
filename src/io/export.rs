//! Export the plain-text report to a file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

/// Write an already-formatted report to `path`.
pub fn write_report_txt(path: &Path, report: &str) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            4,
            format!("Failed to create report file '{}': {e}", path.display()),
        )
    })?;

    file.write_all(report.as_bytes())
        .map_err(|e| AppError::new(4, format!("Failed to write report file: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_file_is_written_verbatim() {
        let path = std::env::temp_dir().join("cardio_report_export_test.txt");
        write_report_txt(&path, "line one\nline two\n").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(contents, "line one\nline two\n");
    }
}
