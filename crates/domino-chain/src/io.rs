//! JSON configuration and report helpers for chain composition.

use crate::composer::combine_tiles;
use crate::ordering::{sort_results, ResultSort};
use crate::result::CompositionResult;
use crate::InvalidInputError;
use domino_core::{tiles_from_labels, validate_pip, LabelError, Pip, PipTally, Tile};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum ComposeIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeConfigError {
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error(transparent)]
    Input(#[from] InvalidInputError),
}

/// Input of a composition run.
///
/// Tiles can be given as pip pairs, as detector class labels (`"3x5"`), or
/// both; labels are appended after the pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub head: i64,
    #[serde(default)]
    pub output_path: Option<String>,
    /// Re-sort results by a single column after ranking.
    #[serde(default)]
    pub sort: Option<ResultSort>,
    /// Keep at most this many results in the report.
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl ComposeConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ComposeIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ComposeIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("compose_report.json"))
    }

    /// Full tile pool: explicit pairs followed by parsed labels.
    pub fn build_tiles(&self) -> Result<Vec<Tile>, ComposeConfigError> {
        let mut tiles = self.tiles.clone();
        tiles.extend(tiles_from_labels(&self.labels)?);
        Ok(tiles)
    }

    pub fn build_head(&self) -> Result<Pip, ComposeConfigError> {
        validate_pip(self.head)
            .map_err(|e| ComposeConfigError::Input(InvalidInputError::InvalidHead(e)))
    }

    /// Run the composer and apply the optional sort override and cap.
    pub fn run(&self) -> Result<Vec<CompositionResult>, ComposeConfigError> {
        let tiles = self.build_tiles()?;
        let head = self.build_head()?;
        let mut results = combine_tiles(&tiles, head);
        if let Some(sort) = self.sort {
            sort_results(&mut results, sort);
        }
        if let Some(max) = self.max_results {
            results.truncate(max);
        }
        Ok(results)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeReport {
    pub config_path: String,
    pub head: i64,
    pub tally: PipTally,
    #[serde(default)]
    pub results: Vec<CompositionResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ComposeReport {
    /// Build a base report from the input config. The tally covers whatever
    /// part of the pool could be built.
    pub fn new(cfg: &ComposeConfig, config_path: &Path) -> Self {
        let tally = cfg
            .build_tiles()
            .map(|tiles| PipTally::from_tiles(&tiles))
            .unwrap_or_else(|_| PipTally::from_tiles(&cfg.tiles));
        Self {
            config_path: config_path.to_string_lossy().into_owned(),
            head: cfg.head,
            tally,
            results: Vec::new(),
            error: None,
        }
    }

    pub fn set_results(&mut self, results: Vec<CompositionResult>) {
        self.results = results;
        self.error = None;
    }

    pub fn set_error(&mut self, err: ComposeConfigError) {
        self.results.clear();
        self.error = Some(err.to_string());
    }

    /// Best chain, if any was found.
    pub fn best(&self) -> Option<&CompositionResult> {
        self.results.first()
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ComposeIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ComposeIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::{SortDirection, SortKey};

    fn config(json: &str) -> ComposeConfig {
        serde_json::from_str(json).expect("config json")
    }

    #[test]
    fn labels_extend_explicit_tiles() {
        let cfg = config(r#"{"tiles": [[1, 2]], "labels": ["2x3", "3x4"], "head": 1}"#);
        let tiles = cfg.build_tiles().unwrap();
        assert_eq!(tiles.len(), 3);
        let res = cfg.run().unwrap();
        assert_eq!(res[0].sequence_length, 3);
        assert_eq!(res[0].sequence_score, 15);
    }

    #[test]
    fn bad_label_and_head_surface_as_config_errors() {
        let cfg = config(r#"{"labels": ["2x"], "head": 1}"#);
        assert!(matches!(cfg.run(), Err(ComposeConfigError::Label(_))));

        let cfg = config(r#"{"tiles": [[1, 2]], "head": 13}"#);
        assert!(matches!(
            cfg.run(),
            Err(ComposeConfigError::Input(InvalidInputError::InvalidHead(_)))
        ));
    }

    #[test]
    fn out_of_range_tile_fails_deserialization() {
        let raw = r#"{"tiles": [[1, 20]], "head": 1}"#;
        assert!(serde_json::from_str::<ComposeConfig>(raw).is_err());
    }

    #[test]
    fn sort_override_and_cap_apply_after_ranking() {
        let cfg = config(
            r#"{"tiles": [[0, 1], [0, 2], [2, 3], [0, 9]], "head": 0,
                "sort": {"key": "sequence_score", "direction": "asc"},
                "max_results": 2}"#,
        );
        let res = cfg.run().unwrap();
        let scores: Vec<u32> = res.iter().map(|r| r.sequence_score).collect();
        assert_eq!(scores, [1, 7]);
        assert_eq!(
            cfg.sort,
            Some(ResultSort::new(SortKey::SequenceScore, SortDirection::Asc))
        );
    }

    #[test]
    fn report_records_error_and_clears_results() {
        let cfg = config(r#"{"tiles": [[1, 2], [5, 6]], "labels": ["bad"], "head": 1}"#);
        let mut report = ComposeReport::new(&cfg, Path::new("cfg.json"));
        assert_eq!(report.tally, PipTally { tiles: 2, total: 14 });
        match cfg.run() {
            Ok(res) => report.set_results(res),
            Err(err) => report.set_error(err),
        }
        assert!(report.best().is_none());
        assert!(report.error.as_deref().unwrap().contains("bad"));
    }

    #[test]
    fn default_output_path() {
        let cfg = config(r#"{"head": 0}"#);
        assert_eq!(cfg.output_path(), PathBuf::from("compose_report.json"));
        assert!(cfg.run().unwrap().is_empty());
    }
}
