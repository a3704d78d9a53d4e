use crate::audio::LoopDeck;
use crate::core::{plan_transition, NeedleAngle, PresenterOutputs, SoundState};
use crate::dom;
use web_sys as web;

/// Output ports backed by the page: the needle element and the loop deck.
pub struct PageOutputs {
    needle: web::HtmlElement,
    deck: LoopDeck,
}

impl PageOutputs {
    pub fn new(needle: web::HtmlElement, deck: LoopDeck) -> Self {
        Self { needle, deck }
    }
}

impl PresenterOutputs for PageOutputs {
    fn set_angle(&mut self, angle: NeedleAngle) {
        dom::set_rotation_degrees(&self.needle, angle.degrees());
    }

    fn set_sound_state(&mut self, state: SoundState) {
        let plan = plan_transition(state);
        self.deck.apply(&plan);
    }
}
