//! Output module for exporting enrichment results
//!
//! This module handles:
//! - Flattening enriched companies into one CSV row per founder
//! - Choosing a timestamped default output path
//! - Computing and printing run statistics

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{export_csv, flatten_rows, CsvOutputHandler, ExportRow, CSV_HEADERS};
pub use stats::{print_summary, BatchSummary};
pub use traits::{OutputError, OutputHandler, OutputResult};

use crate::config::OutputConfig;
use chrono::{DateTime, TimeZone};
use std::path::PathBuf;

/// Builds `<directory>/<prefix>_YYYYMMDD_HHMMSS.csv` for the given time
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use founder_scout::config::OutputConfig;
/// use founder_scout::output::default_output_path;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
/// let path = default_output_path(&OutputConfig::default(), &at);
/// assert_eq!(path, std::path::Path::new("./yc_startups_20240309_140500.csv"));
/// ```
pub fn default_output_path<Tz>(config: &OutputConfig, at: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let file_name = format!("{}_{}.csv", config.file_prefix, at.format("%Y%m%d_%H%M%S"));
    PathBuf::from(&config.directory).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_default_output_path_uses_config() {
        let config = OutputConfig {
            directory: "/tmp/exports".to_string(),
            file_prefix: "founders".to_string(),
        };
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();

        assert_eq!(
            default_output_path(&config, &at),
            PathBuf::from("/tmp/exports/founders_20231231_235958.csv")
        );
    }
}
