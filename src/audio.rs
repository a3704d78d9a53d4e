use crate::config::PageConfig;
use crate::core::{report_playback_failure, LoopAction, LoopId, LoopPlan, PlaybackError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The two looped ambient tracks.
pub struct LoopDeck {
    medium: web::HtmlAudioElement,
    high: web::HtmlAudioElement,
}

fn create_loop(src: &str, volume: f64, label: &str) -> anyhow::Result<web::HtmlAudioElement> {
    let el = web::HtmlAudioElement::new_with_src(src)
        .map_err(|e| anyhow::anyhow!("{} HtmlAudioElement error: {:?}", label, e))?;
    el.set_loop(true);
    el.set_volume(volume);
    Ok(el)
}

impl LoopDeck {
    pub fn new(config: &PageConfig) -> anyhow::Result<Self> {
        let medium = create_loop(config.medium_loop_src, config.loop_volume, "Medium loop")?;
        let high = create_loop(config.high_loop_src, config.loop_volume, "High loop")?;
        Ok(Self { medium, high })
    }

    fn element(&self, id: LoopId) -> &web::HtmlAudioElement {
        match id {
            LoopId::Medium => &self.medium,
            LoopId::High => &self.high,
        }
    }

    /// Run every step of `plan` in order. Play requests are not awaited.
    pub fn apply(&self, plan: &LoopPlan) {
        for (id, action) in plan.steps.iter() {
            let el = self.element(*id);
            match action {
                LoopAction::Stop => {
                    _ = el.pause();
                    el.set_current_time(0.0);
                }
                LoopAction::Pause => {
                    _ = el.pause();
                }
                LoopAction::Play => request_play(el, *id),
            }
        }
    }
}

// Fire-and-forget; a rejection (e.g. autoplay policy) only reaches the log.
fn request_play(el: &web::HtmlAudioElement, id: LoopId) {
    let state = id.sound_state();
    let promise: js_sys::Promise = match el.play() {
        Ok(p) => p,
        Err(e) => {
            report_playback_failure(&PlaybackError::Rejected {
                state,
                reason: format!("{:?}", e),
            });
            return;
        }
    };
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            report_playback_failure(&PlaybackError::Rejected {
                state,
                reason: format!("{:?}", e),
            });
        }
    });
}
