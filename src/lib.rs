#![cfg(target_arch = "wasm32")]
use crate::config::PageConfig;
use crate::core::{SeededSource, ZonePresenter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod outputs;

fn build_wiring(
    document: &web::Document,
    config: &PageConfig,
) -> anyhow::Result<events::GaugeWiring> {
    let needle = dom::html_element_by_id(document, config.needle_id)?;
    let deck = audio::LoopDeck::new(config)?;
    let outputs = Rc::new(RefCell::new(outputs::PageOutputs::new(needle, deck)));
    let presenter = Rc::new(RefCell::new(ZonePresenter::new(SeededSource::from_entropy())));
    presenter.borrow().initialize(&mut *outputs.borrow_mut());
    Ok(events::GaugeWiring {
        presenter,
        outputs,
        document: document.clone(),
        zone_attribute: config.zone_attribute,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("toximeter-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = PageConfig::default();
    let wiring = build_wiring(&document, &config)?;

    events::wire_zone_buttons(&config, &wiring);
    events::wire_global_keydown(wiring);
    Ok(())
}
