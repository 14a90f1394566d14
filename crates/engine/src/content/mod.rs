//! Built-in story content: the historical document set, the scene graph
//! and its impact table.
//!
//! Either part can be replaced at startup from JSON (see
//! `infrastructure::loader`).

mod documents;
mod scenes;

pub use documents::sample_documents;
pub use scenes::{sample_impacts, sample_story_graph};

#[cfg(test)]
mod tests {
    use super::*;
    use rpgmaestro_domain::SceneId;

    #[test]
    fn sample_graph_is_valid_and_starts_at_intro() {
        let graph = sample_story_graph().unwrap();
        assert_eq!(graph.scene_count(), 5);

        let intro = graph.get_scene("intro").unwrap();
        assert_eq!(intro.choices().len(), 4);
        assert_eq!(graph.resolve_next(intro, 1).unwrap().as_str(), "church");
        assert!(!graph.is_terminal(&SceneId::new("church")));
    }

    #[test]
    fn elder_choices_end_the_branch() {
        let graph = sample_story_graph().unwrap();
        let elder = graph.get_scene("village_elder").unwrap();
        for index in 0..4 {
            let next = graph.resolve_next(elder, index).unwrap();
            assert!(graph.is_terminal(next), "{next} should be an ending");
        }
    }

    #[test]
    fn every_scene_has_a_full_impact_row() {
        let graph = sample_story_graph().unwrap();
        let impacts = sample_impacts();
        for id in ["intro", "village_elder", "church", "tavern", "forest_camp"] {
            let scene = graph.get_scene(id).unwrap();
            for index in 0..scene.choices().len() {
                assert!(
                    impacts.lookup(scene.id(), index).is_some(),
                    "missing impact for {id}[{index}]"
                );
            }
        }
    }

    #[test]
    fn six_documents_one_outside_england() {
        let docs = sample_documents();
        assert_eq!(docs.len(), 6);
        let outside: Vec<&str> = docs
            .iter()
            .filter(|d| d.region() != "England")
            .map(|d| d.title())
            .collect();
        assert_eq!(outside, vec!["Medieval Church and Religion"]);
    }
}
