use std::collections::BTreeMap;

use rpgmaestro_domain::{ChoiceImpact, ChoiceLabel, DomainError, Scene, SceneId};

use crate::entities::{ImpactTable, StoryGraph};

/// Where each branch of the built-in story ends.
const ENDINGS: &[&str] = &[
    "lodging",
    "quest_info",
    "intimidation",
    "symbol_reveal",
    "prayer_vigil",
    "relic_lore",
    "vestry_theft",
    "sanctuary",
    "tavern_gossip",
    "dice_game",
    "tavern_room",
    "tavern_brawl",
    "poaching",
    "quiet_camp",
    "outlaw_camp",
    "night_watch",
];

/// The built-in story graph, starting at `intro`.
pub fn sample_story_graph() -> Result<StoryGraph, DomainError> {
    let scenes = vec![
        scene(
            "intro",
            "You stand at the edge of a medieval village. The church bell tower looms in the distance, and villagers hurry about their daily tasks. Ser Elyen, your companion, stands beside you, his weathered armor gleaming in the afternoon sun.",
            "medieval English village, 13th century, daily life",
            Some("England"),
            [
                ("A) Approach the village elder to inquire about lodging.", "village_elder"),
                ("B) Head directly to the church to seek sanctuary.", "church"),
                ("C) Visit the local tavern to gather information.", "tavern"),
                ("D) Remain outside the village and make camp in the woods.", "forest_camp"),
            ],
        )?,
        scene(
            "village_elder",
            "The village elder, a man with a long gray beard and weathered hands, greets you with suspicion. His small cottage is filled with herbs and scrolls, suggesting he is both the leader and healer of this community.",
            "medieval village elder, healer, community leader, 13th century England",
            Some("England"),
            [
                ("A) Offer payment for a night's lodging in the village.", "lodging"),
                ("B) Mention that you are on a quest and need information.", "quest_info"),
                ("C) Intimidate the elder into helping you.", "intimidation"),
                ("D) Show him a mysterious symbol you carry.", "symbol_reveal"),
            ],
        )?,
        scene(
            "church",
            "The stone church is cool and dim after the afternoon glare. Candles flicker before a reliquary, and a young priest looks up from his ledger as the bell above marks the hour of prayer.",
            "medieval church priest relics prayer",
            None,
            [
                ("A) Kneel and pray at the altar beside the villagers.", "prayer_vigil"),
                ("B) Ask the priest about the relics kept in the church.", "relic_lore"),
                ("C) Search the vestry for valuables while the priest is distracted.", "vestry_theft"),
                ("D) Ask the priest to grant you sanctuary for the night.", "sanctuary"),
            ],
        )?,
        scene(
            "tavern",
            "Smoke hangs beneath the low beams of the tavern. Travelers share benches with farmhands, a dice game rattles in the corner, and the keeper eyes your sword as he pours another ale.",
            "medieval tavern ale travelers lodging gambling",
            Some("England"),
            [
                ("A) Buy a round of ale and listen to the local gossip.", "tavern_gossip"),
                ("B) Join the dice game in the corner.", "dice_game"),
                ("C) Ask the keeper about a room for the night.", "tavern_room"),
                ("D) Pick a fight with the loudest drinker.", "tavern_brawl"),
            ],
        )?,
        scene(
            "forest_camp",
            "Beyond the last field the forest closes in. Deer tracks cross the path, the lord's boundary stones stand half hidden in the bracken, and somewhere deeper in the trees another campfire glows.",
            "medieval forest law outlaws poaching wilderness",
            Some("England"),
            [
                ("A) Hunt a deer from the lord's forest for supper.", "poaching"),
                ("B) Gather herbs and firewood for a modest camp.", "quiet_camp"),
                ("C) Follow the glow of the distant campfire.", "outlaw_camp"),
                ("D) Keep watch through the night beside Ser Elyen.", "night_watch"),
            ],
        )?,
    ];

    StoryGraph::new(scenes, ENDINGS.iter().map(|id| SceneId::new(*id)))
}

/// Alignment and trust consequences of the built-in scenes.
pub fn sample_impacts() -> ImpactTable {
    ImpactTable::new()
        .with_scene(
            "intro",
            vec![
                ChoiceImpact::new(5, 0, 0),
                ChoiceImpact::new(10, 5, 5),
                ChoiceImpact::new(-5, 0, 0),
                ChoiceImpact::new(-10, 0, -5),
            ],
        )
        .with_scene(
            "village_elder",
            vec![
                ChoiceImpact::new(5, 0, 0),
                ChoiceImpact::new(0, 5, 5),
                ChoiceImpact::new(-5, -10, -10),
                ChoiceImpact::new(0, 0, 0),
            ],
        )
        .with_scene(
            "church",
            vec![
                ChoiceImpact::new(5, 5, 5),
                ChoiceImpact::new(0, 0, 5),
                ChoiceImpact::new(-10, -10, -15),
                ChoiceImpact::new(5, 0, 0),
            ],
        )
        .with_scene(
            "tavern",
            vec![
                ChoiceImpact::new(0, 5, 5),
                ChoiceImpact::new(-5, 0, -5),
                ChoiceImpact::new(5, 0, 0),
                ChoiceImpact::new(-10, -5, -10),
            ],
        )
        .with_scene(
            "forest_camp",
            vec![
                ChoiceImpact::new(-10, -5, -5),
                ChoiceImpact::new(5, 0, 5),
                ChoiceImpact::new(-5, 0, 0),
                ChoiceImpact::new(0, 5, 10),
            ],
        )
}

fn scene(
    id: &str,
    description: &str,
    retrieval_query: &str,
    region: Option<&str>,
    choices: [(&str, &str); 4],
) -> Result<Scene, DomainError> {
    let transitions: BTreeMap<ChoiceLabel, SceneId> = ChoiceLabel::ALL
        .iter()
        .zip(choices.iter())
        .map(|(label, (_, target))| (*label, SceneId::new(*target)))
        .collect();

    Scene::new(
        id,
        description,
        retrieval_query,
        region.map(str::to_string),
        choices.iter().map(|(text, _)| text.to_string()).collect(),
        transitions,
    )
}
