//! JSON content loading.
//!
//! Documents use the `historical_documents.json` shape: a list of
//! `{title, text, tags, region}` records.
//!
//! A story file looks like
//!
//! ```json
//! {
//!   "scenes": [{"scene_id": "intro", "description": "...", "rag_context_query": "...",
//!               "region": "England", "actions": ["A) ...", "B) ...", "C) ...", "D) ..."],
//!               "next_scene_map": {"A": "...", "B": "...", "C": "...", "D": "..."}}],
//!   "endings": ["lodging"],
//!   "impacts": {"intro": [{"law_chaos": 5, "good_evil": 0, "trust": 0}]}
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use rpgmaestro_domain::{ChoiceImpact, Document, DomainError, Scene, SceneId};

use crate::entities::{ImpactTable, StoryGraph};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid story in {}: {source}", path.display())]
    Invalid { path: PathBuf, source: DomainError },
}

pub fn load_documents(path: &Path) -> Result<Vec<Document>, LoadError> {
    read_json(path)
}

/// Load a story graph and its impact table.
pub fn load_story(path: &Path) -> Result<(StoryGraph, ImpactTable), LoadError> {
    let file: StoryFile = read_json(path)?;

    let graph = StoryGraph::new(file.scenes, file.endings).map_err(|source| {
        LoadError::Invalid {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let impacts = file
        .impacts
        .into_iter()
        .fold(ImpactTable::new(), |table, (scene_id, rows)| {
            table.with_scene(
                scene_id,
                rows.into_iter()
                    .map(|row| ChoiceImpact::new(row.law_chaos, row.good_evil, row.trust))
                    .collect(),
            )
        });

    Ok((graph, impacts))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Deserialize)]
struct StoryFile {
    scenes: Vec<Scene>,
    #[serde(default)]
    endings: Vec<SceneId>,
    #[serde(default)]
    impacts: HashMap<SceneId, Vec<ImpactRow>>,
}

#[derive(Debug, Deserialize)]
struct ImpactRow {
    #[serde(default)]
    law_chaos: i32,
    #[serde(default)]
    good_evil: i32,
    #[serde(default)]
    trust: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const STORY: &str = r#"{
        "scenes": [{
            "scene_id": "gate",
            "description": "A castle gate.",
            "rag_context_query": "medieval knight castle",
            "region": "England",
            "actions": ["A) Knock", "B) Climb", "C) Wait", "D) Leave"],
            "next_scene_map": {"A": "hall", "B": "caught", "C": "hall", "D": "road"}
        }],
        "endings": ["hall", "caught", "road"],
        "impacts": {"gate": [{"law_chaos": 5}, {"law_chaos": -5, "trust": -5}]}
    }"#;

    #[test]
    fn loads_documents_in_historical_shape() {
        let file = write_temp(
            r#"[{"title": "Mills", "text": "Water mills ground grain.", "tags": ["mill"], "region": "England"},
                {"title": "Fairs", "text": "Charter fairs drew merchants.", "region": "England"}]"#,
        );

        let docs = load_documents(file.path()).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].tags(), ["mill".to_string()]);
        assert!(docs[1].tags().is_empty());
    }

    #[test]
    fn loads_story_graph_and_impacts() {
        let file = write_temp(STORY);

        let (graph, impacts) = load_story(file.path()).unwrap();

        let gate = graph.get_scene("gate").unwrap();
        assert_eq!(graph.resolve_next(gate, 1).unwrap().as_str(), "caught");
        assert!(graph.is_terminal(&SceneId::new("road")));
        assert_eq!(
            impacts.lookup(gate.id(), 1),
            Some(&ChoiceImpact::new(-5, 0, -5))
        );
        assert_eq!(impacts.lookup(gate.id(), 2), None);
    }

    #[test]
    fn dangling_target_is_invalid() {
        let file = write_temp(&STORY.replace(r#""endings": ["hall", "caught", "road"]"#, r#""endings": ["hall", "caught"]"#));

        let result = load_story(file.path());

        assert!(matches!(result, Err(LoadError::Invalid { .. })));
    }

    #[test]
    fn scene_with_three_actions_fails_to_parse() {
        let file = write_temp(&STORY.replace(r#""D) Leave""#, "").replace(r#""C) Wait", "#, r#""C) Wait""#));

        let result = load_story(file.path());

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_documents(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
