use crate::constants::ANALYSER_FFT_SIZE;
use crate::core::{AudioOutput, PlayRequests};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `<audio>` element routed through an analyser to the destination.
pub struct MediaPlayer {
    audio: web::HtmlAudioElement,
    audio_ctx: web::AudioContext,
    // settled by play() promises; drained by the frame loop
    requests: Rc<RefCell<PlayRequests>>,
}

pub struct AnalyserTap {
    node: web::AnalyserNode,
    buf: Vec<u8>,
}

impl AnalyserTap {
    /// Current frequency magnitudes, one byte per bin.
    pub fn snapshot(&mut self) -> &[u8] {
        self.node.get_byte_frequency_data(&mut self.buf);
        &self.buf
    }
}

pub fn build_media_player(volume: f32) -> anyhow::Result<(MediaPlayer, AnalyserTap)> {
    let js_err = |e: JsValue| anyhow::anyhow!("{:?}", e);

    let audio = web::HtmlAudioElement::new().map_err(js_err)?;
    audio.set_preload("auto");
    audio.set_volume(volume as f64);

    let audio_ctx = web::AudioContext::new().map_err(js_err)?;
    let source = audio_ctx
        .create_media_element_source(&audio)
        .map_err(js_err)?;
    let analyser = web::AnalyserNode::new(&audio_ctx).map_err(js_err)?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    source.connect_with_audio_node(&analyser).map_err(js_err)?;
    analyser
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(js_err)?;

    let bins = analyser.frequency_bin_count() as usize;
    log::info!("[audio] analyser bins={}", bins);
    Ok((
        MediaPlayer {
            audio,
            audio_ctx,
            requests: Rc::new(RefCell::new(PlayRequests::default())),
        },
        AnalyserTap {
            node: analyser,
            buf: vec![0; bins],
        },
    ))
}

impl MediaPlayer {
    pub fn element(&self) -> &web::HtmlAudioElement {
        &self.audio
    }

    /// True once after the latest play() request was refused.
    pub fn take_rejection(&self) -> bool {
        self.requests.borrow_mut().take_failure()
    }
}

impl AudioOutput for MediaPlayer {
    fn resume(&mut self) {
        if self.audio_ctx.state() != web::AudioContextState::Suspended {
            return;
        }
        match self.audio_ctx.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] resume rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] resume failed: {:?}", e),
        }
    }

    fn load(&mut self, uri: &str) {
        self.audio.set_src(uri);
    }

    fn play(&mut self) {
        let generation = self.requests.borrow_mut().begin();
        match self.audio.play() {
            Ok(promise) => {
                let requests = self.requests.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        // a later pause() or play() aborts this one
                        if requests.borrow_mut().reject(generation) {
                            log::warn!("[audio] play rejected: {:?}", e);
                        } else {
                            log::debug!("[audio] stale play #{} rejected", generation);
                        }
                    }
                });
            }
            Err(e) => {
                log::warn!("[audio] play failed: {:?}", e);
                self.requests.borrow_mut().reject(generation);
            }
        }
    }

    fn pause(&mut self) {
        self.requests.borrow_mut().cancel();
        if let Err(e) = self.audio.pause() {
            log::warn!("[audio] pause failed: {:?}", e);
        }
    }
}
