#![cfg(target_arch = "wasm32")]
use crate::core::{Site, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod controls;
mod core;
mod corners;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cube-site starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Configuration and DOM targets are validated before anything runs, so a
    // broken page never starts the frame loop.
    let config = SiteConfig::default();
    let mut site = Site::new(config, &mut rand::thread_rng())?;
    let corners = corners::DomCorners::from_document(&document)?;
    let button = Rc::new(controls::PlayButton::from_document(&document)?);

    let (mut player, analyser) = audio::build_media_player(site.volume())?;
    site.start(&mut player);
    button.show_playing(false);

    let canvas = dom::ensure_canvas(&document, constants::CANVAS_ID)?;
    events::wire_canvas_resize(&canvas);

    let site = Rc::new(RefCell::new(site));
    let player = Rc::new(RefCell::new(player));
    let clock = frame::FrameClock::new();

    events::wire_play_button(button.clone(), site.clone(), player.clone(), clock);
    events::wire_track_ended(site.clone(), player.clone());
    events::wire_corner_clicks(&corners, site.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        site,
        player,
        analyser,
        corners,
        button,
        canvas,
        gpu,
        clock,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
