use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord};
use crate::config::DashboardConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum DataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// `row` counts data rows from 1, header excluded.
    #[error("row {row}: payload mass {value} kg is not a finite non-negative number")]
    InvalidPayload { row: usize, value: f64 },

    #[error("dataset contains no launches")]
    Empty,
}

// ---------------------------------------------------------------------------
// Source selection
// ---------------------------------------------------------------------------

/// Where launch data is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Downloaded once and saved to the configured cache path.
    Url(String),
    /// Read directly from disk.
    Path(PathBuf),
}

impl DatasetSource {
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            DatasetSource::Url(s.to_string())
        } else {
            DatasetSource::Path(PathBuf::from(s))
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Resolve the configured source into a dataset, downloading first if needed.
/// Blocks until the download (if any) completes.
pub fn load_source(config: &DashboardConfig) -> Result<LaunchDataset> {
    let path = match &config.source {
        DatasetSource::Url(url) => {
            log::info!("Downloading {url} → {}", config.cache_path.display());
            download(url, &config.cache_path, config.timeout)
                .with_context(|| format!("downloading {url}"))?;
            config.cache_path.clone()
        }
        DatasetSource::Path(path) => path.clone(),
    };
    load_file(&path)
}

/// Load launches from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let file = fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let dataset =
        parse_csv(file).with_context(|| format!("parsing CSV {}", path.display()))?;

    log::info!(
        "Loaded {} launches ({} successful) from {} sites; payload {} .. {} kg",
        dataset.len(),
        dataset.success_count(),
        dataset.sites.len(),
        dataset.min_payload,
        dataset.max_payload
    );
    Ok(dataset)
}

/// Fetch `url` and write the body to `dest`.
pub fn download(url: &str, dest: &Path, timeout: Duration) -> Result<(), DataError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("spacex-dash/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let body = client.get(url).send()?.error_for_status()?.bytes()?;
    fs::write(dest, &body)?;

    log::debug!("Wrote {} bytes to {}", body.len(), dest.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with the dataset's column names; see
/// [`LaunchRecord`] for the columns used. Unknown columns are ignored.
pub fn parse_csv<R: Read>(reader: R) -> Result<LaunchDataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row, result) in (1..).zip(reader.deserialize::<LaunchRecord>()) {
        let record = result?;
        let payload = record.payload_mass_kg;
        if !payload.is_finite() || payload < 0.0 {
            return Err(DataError::InvalidPayload {
                row,
                value: payload,
            });
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,20,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
4,21,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
";

    #[test]
    fn parses_dataset_header_and_ignores_index_column() {
        let ds = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.records[3].outcome, Outcome::Success);
        assert_eq!(ds.records[3].booster_version, "F9 FT B1029.1");
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 9600.0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "Launch Site,class\nCCAFS LC-40,1\n";
        assert!(matches!(parse_csv(csv.as_bytes()), Err(DataError::Csv(_))));
    }

    #[test]
    fn bad_class_value_is_an_error() {
        let csv = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,3,0.0,F9 v1.0,v1.0
";
        let err = parse_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
        assert!(err.to_string().contains("outcome class must be 0 or 1"));
    }

    fn single_payload_csv(payload: &str) -> String {
        format!(
            "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
             1,CCAFS LC-40,1,500.0,F9 v1.0,v1.0\n\
             2,CCAFS LC-40,1,{payload},F9 v1.0,v1.0\n"
        )
    }

    #[test]
    fn negative_payload_is_rejected() {
        let err = parse_csv(single_payload_csv("-5.0").as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::InvalidPayload { row: 2, value } if value == -5.0));
        assert!(err.to_string().starts_with("row 2:"));
    }

    #[test]
    fn non_finite_payloads_are_rejected() {
        for payload in ["NaN", "inf", "-inf", "infinity"] {
            let result = parse_csv(single_payload_csv(payload).as_bytes());
            assert!(
                matches!(result, Err(DataError::InvalidPayload { row: 2, .. })),
                "payload {payload} was accepted"
            );
        }
    }

    #[test]
    fn load_file_rejects_infinite_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.csv");
        fs::write(&path, single_payload_csv("inf")).unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("not a finite non-negative number"));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";
        assert!(matches!(parse_csv(csv.as_bytes()), Err(DataError::Empty)));
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.csv");
        fs::write(&path, SAMPLE).unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.success_count(), 2);
    }

    #[test]
    fn load_file_missing_path_has_context() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("opening CSV"));
    }

    #[test]
    fn source_parse_distinguishes_urls_from_paths() {
        assert_eq!(
            DatasetSource::parse("https://example.com/a.csv"),
            DatasetSource::Url("https://example.com/a.csv".into())
        );
        assert_eq!(
            DatasetSource::parse("a.csv"),
            DatasetSource::Path(PathBuf::from("a.csv"))
        );
    }

    #[test]
    fn load_source_downloads_into_cache() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/spacex_launch_dash.csv")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body(SAMPLE)
            .create();

        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            source: DatasetSource::Url(format!("{}/spacex_launch_dash.csv", server.url())),
            cache_path: dir.path().join("cached.csv"),
            timeout: Duration::from_secs(5),
        };

        let ds = load_source(&config).unwrap();
        mock.assert();
        assert_eq!(ds.len(), 5);
        assert_eq!(fs::read_to_string(&config.cache_path).unwrap(), SAMPLE);
    }

    #[test]
    fn download_reports_http_status_errors() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/missing.csv").with_status(404).create();

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");
        let err = download(
            &format!("{}/missing.csv", server.url()),
            &dest,
            Duration::from_secs(5),
        )
        .unwrap_err();

        assert!(matches!(err, DataError::Http(_)));
        assert!(!dest.exists());
    }
}
