//! Application state and composition.

use std::sync::Arc;
use std::time::Duration;

use rpgmaestro_domain::{CharacterProfile, Document};

use crate::entities::{DocumentLibrary, ImpactTable, StoryGraph};
use crate::infrastructure::ports::{ClockPort, ImageGenPort, LlmPort, VoicePort};
use crate::stores::SessionStore;
use crate::use_cases;
use crate::use_cases::narration::{IllustrateScene, ReactToChoice, SpeakLine};
use crate::use_cases::scoring::ScoreChoice;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub sessions: Arc<SessionStore>,
}

/// Container for all use cases.
pub struct UseCases {
    pub scene: use_cases::SceneUseCases,
    pub player_action: use_cases::PlayerActionUseCases,
    pub session: use_cases::SessionUseCases,
}

/// Authored content the game is played over.
pub struct StoryContent {
    pub story: StoryGraph,
    pub impacts: ImpactTable,
    pub documents: Vec<Document>,
}

/// Generative services and the bound on each call.
pub struct Collaborators {
    pub llm: Arc<dyn LlmPort>,
    pub image_gen: Arc<dyn ImageGenPort>,
    pub voice: Arc<dyn VoicePort>,
    pub timeout: Duration,
}

impl App {
    pub fn new(
        content: StoryContent,
        collaborators: Collaborators,
        companion: CharacterProfile,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let story = Arc::new(content.story);
        let impacts = Arc::new(content.impacts);
        let library = Arc::new(DocumentLibrary::new(content.documents));
        let sessions = Arc::new(SessionStore::new(clock));

        let illustrate = Arc::new(IllustrateScene::new(
            collaborators.image_gen,
            collaborators.timeout,
        ));
        let react = Arc::new(ReactToChoice::new(
            collaborators.llm,
            companion,
            collaborators.timeout,
        ));
        let speak = Arc::new(SpeakLine::new(collaborators.voice, collaborators.timeout));

        let scene = use_cases::SceneUseCases::new(Arc::new(use_cases::scene::ViewScene::new(
            story.clone(),
            library.clone(),
            illustrate,
        )));

        let player_action = use_cases::PlayerActionUseCases::new(Arc::new(
            use_cases::player_action::ProcessAction::new(
                story,
                library,
                sessions.clone(),
                Arc::new(use_cases::player_action::ApplyChoice::new(impacts)),
                Arc::new(ScoreChoice::default()),
                react,
                speak,
            ),
        ));

        let session = use_cases::SessionUseCases::new(
            Arc::new(use_cases::session::StartSession::new(sessions.clone())),
            Arc::new(use_cases::session::GetSession::new(sessions.clone())),
            Arc::new(use_cases::session::EndSession::new(sessions.clone())),
        );

        Self {
            use_cases: UseCases {
                scene,
                player_action,
                session,
            },
            sessions,
        }
    }
}
