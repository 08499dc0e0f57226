use crate::audio::{AnalyserTap, MediaPlayer};
use crate::controls::PlayButton;
use crate::core::{cube_model_matrix, Site};
use crate::corners::DomCorners;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic milliseconds since page start.
#[derive(Clone, Copy)]
pub struct FrameClock {
    origin: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FrameContext {
    pub site: Rc<RefCell<Site>>,
    pub player: Rc<RefCell<MediaPlayer>>,
    pub analyser: AnalyserTap,
    pub corners: DomCorners,
    pub button: Rc<PlayButton>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.clock.now_ms();

        if self.player.borrow().take_rejection() {
            self.site.borrow_mut().playback_failed();
            self.button.show_playing(false);
        }

        let magnitudes = self.analyser.snapshot();
        let out = self
            .site
            .borrow_mut()
            .tick(now_ms, magnitudes, &mut self.corners);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_cube(
                cube_model_matrix(out.orientation, out.appearance.scale),
                out.appearance.color,
            );
            match g.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
