use crate::audio::MediaPlayer;
use crate::controls::PlayButton;
use crate::core::{Corner, Site};
use crate::corners::DomCorners;
use crate::dom;
use crate::frame::FrameClock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

pub fn wire_play_button(
    button: Rc<PlayButton>,
    site: Rc<RefCell<Site>>,
    player: Rc<RefCell<MediaPlayer>>,
    clock: FrameClock,
) {
    let el: web::Element = button.element().clone().into();
    dom::add_click_listener(&el, move || {
        let change = site
            .borrow_mut()
            .toggle_play_pause(clock.now_ms(), &mut *player.borrow_mut());
        log::info!("[click] {:?}", change);
        button.show_playing(site.borrow().playlist().is_playing());
    });
}

pub fn wire_track_ended(site: Rc<RefCell<Site>>, player: Rc<RefCell<MediaPlayer>>) {
    let audio = player.borrow().element().clone();
    let closure = Closure::wrap(Box::new(move || {
        site.borrow_mut().on_track_ended(&mut *player.borrow_mut());
    }) as Box<dyn FnMut()>);
    _ = audio.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Clicking the visible corner follows its binding; hidden corners ignore clicks.
pub fn wire_corner_clicks(corners: &DomCorners, site: Rc<RefCell<Site>>) {
    for corner in Corner::ALL {
        let el: web::Element = corners.element(corner).clone().into();
        let site = site.clone();
        dom::add_click_listener(&el, move || {
            let target = site.borrow().nav_target(corner).map(str::to_string);
            let Some(target) = target else {
                return;
            };
            log::info!("[click] {} -> {}", corner.element_id(), target);
            if let Some(w) = web::window() {
                if let Err(e) = w.location().set_href(&target) {
                    log::warn!("navigation to {} failed: {:?}", target, e);
                }
            }
        });
    }
}
