// Sound-state transitions expressed as per-loop actions.
//
// The audio port only has to execute a `LoopPlan`; deciding which loop is
// stopped, paused or started lives here so it can be checked off-browser.

use super::zone::SoundState;

/// The two ambient loops that can be audible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoopId {
    Medium,
    High,
}

impl LoopId {
    pub fn sound_state(self) -> SoundState {
        match self {
            LoopId::Medium => SoundState::MediumLoop,
            LoopId::High => SoundState::HighLoop,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopAction {
    /// Pause and rewind to the start.
    Stop,
    /// Pause, keeping the playback position.
    Pause,
    /// Start, or continue from the paused position.
    Play,
}

/// Ordered actions for one transition. Silencing actions always precede `Play`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopPlan {
    pub target: SoundState,
    pub steps: [(LoopId, LoopAction); 2],
}

impl LoopPlan {
    /// The loop that is playing once every step has run, if any.
    pub fn audible(&self) -> Option<LoopId> {
        self.steps
            .iter()
            .find(|(_, action)| *action == LoopAction::Play)
            .map(|(id, _)| *id)
    }

    pub fn action_for(&self, id: LoopId) -> Option<LoopAction> {
        self.steps
            .iter()
            .find(|(loop_id, _)| *loop_id == id)
            .map(|(_, action)| *action)
    }
}

pub fn plan_transition(target: SoundState) -> LoopPlan {
    let steps = match target {
        SoundState::Silent => [
            (LoopId::Medium, LoopAction::Stop),
            (LoopId::High, LoopAction::Stop),
        ],
        SoundState::MediumLoop => [
            (LoopId::High, LoopAction::Pause),
            (LoopId::Medium, LoopAction::Play),
        ],
        SoundState::HighLoop => [
            (LoopId::Medium, LoopAction::Pause),
            (LoopId::High, LoopAction::Play),
        ],
    };
    LoopPlan { target, steps }
}

/// Failure of an asynchronous play request. Only ever reported, never returned
/// to whoever asked for the transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("playback of {state:?} rejected: {reason}")]
    Rejected { state: SoundState, reason: String },
}

/// Diagnostic channel for playback failures.
pub fn report_playback_failure(err: &PlaybackError) {
    log::warn!("[sound] {}", err);
}
