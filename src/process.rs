//! Download, transform and store every source image.
//!
//! For each [`SourceEntry`], in list order:
//!
//! ```text
//! destination exists && !force ──► Skipped (no request made)
//!            │
//!            ▼
//!   fetch → decode → palette → shrink → flatten alpha → encode → write ──► Saved
//! ```
//!
//! ## Failure policy
//!
//! The run is fail-fast. The first network, decode, encode or filesystem
//! error stops the batch and is returned to the caller; nothing is retried
//! and later entries are not attempted. Files written earlier in the run
//! stay on disk, so re-running without `--force` resumes where it stopped.
//!
//! ## Progress
//!
//! The driver does not collect results. Each step is reported as a
//! [`ProcessEvent`] to a caller-supplied closure, which the CLI formats via
//! [`output`](crate::output).

use crate::config::FetchConfig;
use crate::fetch::{FetchError, Fetcher};
use crate::imaging::{self, EncodeParams, ImagingError};
use crate::sources::SourceEntry;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Network(#[from] FetchError),
    #[error("Failed to decode {label}: {source}")]
    Decode {
        label: String,
        #[source]
        source: ImagingError,
    },
    #[error("Failed to encode {label}: {source}")]
    Encode {
        label: String,
        #[source]
        source: ImagingError,
    },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress notification emitted while processing the source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    /// Output already present and `force` is off; no request was made.
    Skipped { label: String, destination: PathBuf },
    /// About to download.
    Fetching { label: String, url: String },
    /// Image written to disk.
    Saved {
        label: String,
        destination: PathBuf,
        width: u32,
        height: u32,
        bytes: usize,
    },
}

/// What a run would do with one entry, computed without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub label: String,
    pub destination: PathBuf,
    pub action: PlannedAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannedAction {
    /// Output exists and would be kept.
    Skip,
    /// Output is missing and would be downloaded.
    Fetch,
    /// Output exists but `force` would overwrite it.
    Refetch,
}

/// Process the full source list in order, stopping at the first error.
///
/// Creates `config.output_dir` (and parents) before the first entry.
pub fn run(
    sources: &[SourceEntry],
    config: &FetchConfig,
    fetcher: &impl Fetcher,
    mut on_event: impl FnMut(&ProcessEvent),
) -> Result<(), ProcessError> {
    std::fs::create_dir_all(&config.output_dir).map_err(|source| ProcessError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    for entry in sources {
        let outcome = process_entry(entry, config, fetcher, &mut on_event)?;
        on_event(&outcome);
    }
    Ok(())
}

/// Process a single entry and return its final status.
///
/// Emits [`ProcessEvent::Fetching`] through `on_event` before the request;
/// the returned `Skipped`/`Saved` event is left for the caller to report.
pub fn process_entry(
    entry: &SourceEntry,
    config: &FetchConfig,
    fetcher: &impl Fetcher,
    on_event: &mut impl FnMut(&ProcessEvent),
) -> Result<ProcessEvent, ProcessError> {
    let destination = config.destination_for(entry);
    if destination.exists() && !config.force {
        return Ok(ProcessEvent::Skipped {
            label: entry.label.to_string(),
            destination,
        });
    }

    on_event(&ProcessEvent::Fetching {
        label: entry.label.to_string(),
        url: entry.url.to_string(),
    });
    let body = fetcher.fetch(entry.url)?;

    let decoded = imaging::decode(&body).map_err(|source| ProcessError::Decode {
        label: entry.label.to_string(),
        source,
    })?;
    debug!(
        label = entry.label,
        width = decoded.image.width(),
        height = decoded.image.height(),
        color = ?decoded.image.color(),
        palette = decoded.palette,
        "decoded"
    );

    let params = EncodeParams::from_config(config);
    let prepared = imaging::prepare(decoded.image, decoded.palette, &params);
    let (width, height) = (prepared.width(), prepared.height());

    let encoded = imaging::encode(&prepared, params.format, params.quality).map_err(|source| {
        ProcessError::Encode {
            label: entry.label.to_string(),
            source,
        }
    })?;

    std::fs::write(&destination, &encoded).map_err(|source| ProcessError::Io {
        path: destination.clone(),
        source,
    })?;

    Ok(ProcessEvent::Saved {
        label: entry.label.to_string(),
        destination,
        width,
        height,
        bytes: encoded.len(),
    })
}

/// Work out what a run would do for each entry, without any network access.
pub fn plan(sources: &[SourceEntry], config: &FetchConfig) -> Vec<PlannedEntry> {
    sources
        .iter()
        .map(|entry| {
            let destination = config.destination_for(entry);
            let action = match (destination.exists(), config.force) {
                (false, _) => PlannedAction::Fetch,
                (true, false) => PlannedAction::Skip,
                (true, true) => PlannedAction::Refetch,
            };
            PlannedEntry {
                label: entry.label.to_string(),
                destination,
                action,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::test_helpers::{MockFetcher, gradient_png_bytes, translucent_png_bytes};
    use std::fs;
    use tempfile::TempDir;

    const ALEX: SourceEntry = SourceEntry::new("ALEX", "https://img.test/ALEX.png");
    const ALEX_B: SourceEntry = SourceEntry::new("ALEX_B", "https://img.test/ALEX_B.png");
    const BRUNO: SourceEntry = SourceEntry::new("BRUNO", "https://img.test/BRUNO.png");

    fn config_in(tmp: &TempDir, format: OutputFormat) -> FetchConfig {
        FetchConfig {
            output_dir: tmp.path().join("out"),
            format,
            max_width: 800,
            max_height: 800,
            ..FetchConfig::default()
        }
    }

    fn collect_run(
        sources: &[SourceEntry],
        config: &FetchConfig,
        fetcher: &MockFetcher,
    ) -> (Result<(), ProcessError>, Vec<ProcessEvent>) {
        let mut events = Vec::new();
        let result = run(sources, config, fetcher, |e| events.push(e.clone()));
        (result, events)
    }

    // =========================================================================
    // Single entry
    // =========================================================================

    #[test]
    fn saves_resized_webp() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp, OutputFormat::Webp);
        let fetcher = MockFetcher::new().with_body(ALEX.url, gradient_png_bytes(1000, 500));

        let (result, events) = collect_run(&[ALEX], &config, &fetcher);
        result.unwrap();

        let destination = config.output_dir.join("alex.webp");
        assert_eq!(
            events,
            vec![
                ProcessEvent::Fetching {
                    label: "ALEX".into(),
                    url: ALEX.url.into()
                },
                ProcessEvent::Saved {
                    label: "ALEX".into(),
                    destination: destination.clone(),
                    width: 800,
                    height: 400,
                    bytes: fs::metadata(&destination).unwrap().len() as usize,
                },
            ]
        );
        let saved = image::open(&destination).unwrap();
        assert_eq!((saved.width(), saved.height()), (800, 400));
    }

    #[test]
    fn existing_output_is_skipped_without_request() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp, OutputFormat::Png);
        fs::create_dir_all(&config.output_dir).unwrap();
        let destination = config.output_dir.join("alex.png");
        fs::write(&destination, b"previous run").unwrap();
        let fetcher = MockFetcher::new().with_body(ALEX.url, gradient_png_bytes(10, 10));

        let (result, events) = collect_run(&[ALEX], &config, &fetcher);
        result.unwrap();

        assert!(fetcher.calls().is_empty());
        assert_eq!(
            events,
            vec![ProcessEvent::Skipped {
                label: "ALEX".into(),
                destination: destination.clone()
            }]
        );
        assert_eq!(fs::read(&destination).unwrap(), b"previous run");
    }

    #[test]
    fn force_overwrites_existing_output() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(&tmp, OutputFormat::Png);
        config.force = true;
        fs::create_dir_all(&config.output_dir).unwrap();
        let destination = config.output_dir.join("alex.png");
        fs::write(&destination, b"stale").unwrap();
        let fetcher = MockFetcher::new().with_body(ALEX.url, gradient_png_bytes(10, 10));

        collect_run(&[ALEX], &config, &fetcher).0.unwrap();

        assert_eq!(fetcher.calls(), vec![ALEX.url.to_string()]);
        let saved = image::open(&destination).unwrap();
        assert_eq!((saved.width(), saved.height()), (10, 10));
    }

    #[test]
    fn existence_check_is_per_format() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp, OutputFormat::Jpeg);
        fs::create_dir_all(&config.output_dir).unwrap();
        fs::write(config.output_dir.join("alex.webp"), b"other format").unwrap();
        let fetcher = MockFetcher::new().with_body(ALEX.url, gradient_png_bytes(10, 10));

        collect_run(&[ALEX], &config, &fetcher).0.unwrap();

        assert_eq!(fetcher.calls().len(), 1);
        assert!(config.output_dir.join("alex.jpeg").exists());
    }

    #[test]
    fn rgba_source_to_jpeg_has_no_alpha() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp, OutputFormat::Jpeg);
        let fetcher = MockFetcher::new().with_body(ALEX.url, translucent_png_bytes(64, 64));

        collect_run(&[ALEX], &config, &fetcher).0.unwrap();

        let saved = image::open(config.output_dir.join("alex.jpeg")).unwrap();
        assert!(!saved.color().has_alpha());
        assert_eq!(saved.color().channel_count(), 3);
    }

    #[test]
    fn rgba_source_to_png_keeps_alpha_exactly() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp, OutputFormat::Png);
        let source = translucent_png_bytes(64, 64);
        let fetcher = MockFetcher::new().with_body(ALEX.url, source.clone());

        collect_run(&[ALEX], &config, &fetcher).0.unwrap();

        let saved = image::open(config.output_dir.join("alex.png")).unwrap();
        let original = image::load_from_memory(&source).unwrap();
        assert_eq!(saved.to_rgba8(), original.to_rgba8());
    }

    #[test]
    fn unlimited_size_keeps_dimensions() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(&tmp, OutputFormat::Png);
        config.max_width = 0;
        config.max_height = 0;
        let fetcher = MockFetcher::new().with_body(ALEX.url, gradient_png_bytes(2000, 30));

        collect_run(&[ALEX], &config, &fetcher).0.unwrap();

        let saved = image::open(config.output_dir.join("alex.png")).unwrap();
        assert_eq!((saved.width(), saved.height()), (2000, 30));
    }

    // =========================================================================
    // Failures
    // =========================================================================

    #[test]
    fn http_error_stops_the_run() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp, OutputFormat::Webp);
        let fetcher = MockFetcher::new()
            .with_body(ALEX.url, gradient_png_bytes(20, 20))
            .with_status(ALEX_B.url, 404)
            .with_body(BRUNO.url, gradient_png_bytes(20, 20));

        let (result, _) = collect_run(&[ALEX, ALEX_B, BRUNO], &config, &fetcher);

        assert!(matches!(
            result,
            Err(ProcessError::Network(FetchError::Status { status: 404, .. }))
        ));
        assert_eq!(
            fetcher.calls(),
            vec![ALEX.url.to_string(), ALEX_B.url.to_string()]
        );
        assert!(config.output_dir.join("alex.webp").exists());
        assert!(!config.output_dir.join("alex-b.webp").exists());
        assert!(!config.output_dir.join("bruno.webp").exists());
    }

    #[test]
    fn undecodable_body_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp, OutputFormat::Webp);
        let fetcher = MockFetcher::new().with_body(ALEX.url, b"<html>moved</html>".to_vec());

        let (result, _) = collect_run(&[ALEX], &config, &fetcher);

        match result {
            Err(ProcessError::Decode { label, .. }) => assert_eq!(label, "ALEX"),
            other => panic!("expected decode error, got {other:?}"),
        }
        assert!(!config.output_dir.join("alex.webp").exists());
    }

    #[test]
    fn unwritable_output_dir_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"not a directory").unwrap();
        let config = FetchConfig {
            output_dir: blocker.join("out"),
            ..FetchConfig::default()
        };
        let fetcher = MockFetcher::new();

        let (result, events) = collect_run(&[ALEX], &config, &fetcher);

        assert!(matches!(result, Err(ProcessError::Io { .. })));
        assert!(events.is_empty());
        assert!(fetcher.calls().is_empty());
    }

    #[test]
    fn creates_nested_output_dir() {
        let tmp = TempDir::new().unwrap();
        let config = FetchConfig {
            output_dir: tmp.path().join("a/b/c"),
            ..FetchConfig::default()
        };

        collect_run(&[], &config, &MockFetcher::new()).0.unwrap();
        assert!(config.output_dir.is_dir());
    }

    // =========================================================================
    // Planning
    // =========================================================================

    #[test]
    fn plan_reports_actions_without_requests() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(&tmp, OutputFormat::Webp);
        fs::create_dir_all(&config.output_dir).unwrap();
        fs::write(config.output_dir.join("alex.webp"), b"x").unwrap();

        let planned = plan(&[ALEX, ALEX_B], &config);
        assert_eq!(planned[0].action, PlannedAction::Skip);
        assert_eq!(planned[0].destination, config.output_dir.join("alex.webp"));
        assert_eq!(planned[1].action, PlannedAction::Fetch);
        assert_eq!(planned[1].destination, config.output_dir.join("alex-b.webp"));

        config.force = true;
        let planned = plan(&[ALEX], &config);
        assert_eq!(planned[0].action, PlannedAction::Refetch);
    }
}
