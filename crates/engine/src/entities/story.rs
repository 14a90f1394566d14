//! Scene graph and the per-choice impact table.

use std::collections::{BTreeSet, HashMap};

use rpgmaestro_domain::{ChoiceImpact, DomainError, Scene, SceneId};

/// Static story graph: scenes plus the endings their choices may lead to.
///
/// Every transition target is either a scene in the graph or a declared
/// ending; [`StoryGraph::new`] refuses anything else.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    scenes: HashMap<SceneId, Scene>,
    endings: BTreeSet<SceneId>,
}

impl StoryGraph {
    pub fn new(
        scenes: impl IntoIterator<Item = Scene>,
        endings: impl IntoIterator<Item = SceneId>,
    ) -> Result<Self, DomainError> {
        let endings: BTreeSet<SceneId> = endings.into_iter().collect();
        let mut by_id = HashMap::new();

        for scene in scenes {
            let id = scene.id().clone();
            if endings.contains(&id) {
                return Err(DomainError::validation(format!(
                    "{id} is declared both as a scene and as an ending"
                )));
            }
            if by_id.insert(id.clone(), scene).is_some() {
                return Err(DomainError::validation(format!("duplicate scene {id}")));
            }
        }

        for scene in by_id.values() {
            for (label, target) in scene.transition_targets() {
                if !by_id.contains_key(target) && !endings.contains(target) {
                    return Err(DomainError::validation(format!(
                        "choice {} of scene {} leads to unknown scene {}",
                        label,
                        scene.id(),
                        target
                    )));
                }
            }
        }

        Ok(Self {
            scenes: by_id,
            endings,
        })
    }

    pub fn get_scene(&self, id: &str) -> Result<&Scene, DomainError> {
        self.scenes
            .get(&SceneId::new(id))
            .ok_or_else(|| DomainError::not_found("Scene", id))
    }

    /// Scene id the choice at `choice_index` of `scene` leads to.
    pub fn resolve_next<'a>(
        &self,
        scene: &'a Scene,
        choice_index: usize,
    ) -> Result<&'a SceneId, DomainError> {
        scene.next_scene(choice_index)
    }

    /// Whether `id` is an ending rather than a playable scene.
    pub fn is_terminal(&self, id: &SceneId) -> bool {
        self.endings.contains(id)
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

/// Alignment and trust deltas keyed by (scene, choice index).
#[derive(Debug, Clone, Default)]
pub struct ImpactTable {
    impacts: HashMap<SceneId, Vec<ChoiceImpact>>,
}

impl ImpactTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scene(mut self, scene_id: impl Into<SceneId>, impacts: Vec<ChoiceImpact>) -> Self {
        self.impacts.insert(scene_id.into(), impacts);
        self
    }

    /// `None` when the table has no entry; applying such a choice only
    /// awards experience.
    pub fn lookup(&self, scene_id: &SceneId, choice_index: usize) -> Option<&ChoiceImpact> {
        self.impacts.get(scene_id)?.get(choice_index)
    }
}
