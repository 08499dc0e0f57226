use crate::constants::*;
use crate::core::SiteError;
use crate::dom;
use web_sys as web;

/// Play/pause button with its two icons.
pub struct PlayButton {
    button: web::HtmlElement,
    play_icon: web::HtmlElement,
    pause_icon: web::HtmlElement,
}

impl PlayButton {
    pub fn from_document(document: &web::Document) -> Result<Self, SiteError> {
        Ok(Self {
            button: dom::require_element(document, PLAY_BUTTON_ID)?,
            play_icon: dom::require_element(document, PLAY_ICON_ID)?,
            pause_icon: dom::require_element(document, PAUSE_ICON_ID)?,
        })
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.button
    }

    /// Replace the button text and prepend the icon for the current state.
    pub fn show_playing(&self, playing: bool) {
        let (label, shown, hidden) = if playing {
            (PLAYING_LABEL, &self.pause_icon, &self.play_icon)
        } else {
            (PAUSED_LABEL, &self.play_icon, &self.pause_icon)
        };
        self.button.set_text_content(Some(label));
        if let Err(e) = self.button.prepend_with_node_1(shown) {
            log::warn!("play button icon: {:?}", e);
        }
        dom::set_style(shown, "display", "inline");
        dom::set_style(hidden, "display", "none");
    }
}
