use crate::constants::*;
use crate::core::{Corner, CornerSink, SiteError};
use crate::dom;
use web_sys as web;

/// The four corner anchors, resolved once at startup.
pub struct DomCorners {
    elements: [web::HtmlElement; 4],
}

impl DomCorners {
    pub fn from_document(document: &web::Document) -> Result<Self, SiteError> {
        let [tl, tr, bl, br] = Corner::ALL;
        Ok(Self {
            elements: [
                dom::require_element(document, tl.element_id())?,
                dom::require_element(document, tr.element_id())?,
                dom::require_element(document, bl.element_id())?,
                dom::require_element(document, br.element_id())?,
            ],
        })
    }

    pub fn element(&self, corner: Corner) -> &web::HtmlElement {
        &self.elements[corner.index()]
    }
}

impl CornerSink for DomCorners {
    fn show(&mut self, corner: Corner, label: &str, _target: Option<&str>) {
        let el = self.element(corner);
        el.set_text_content(Some(label));
        _ = el.class_list().add_1(VISIBLE_CLASS);
        dom::set_style(el, "background-color", VISIBLE_BACKGROUND);
        dom::set_style(el, "color", VISIBLE_FOREGROUND);
        dom::set_style(el, "cursor", "pointer");
    }

    fn hide(&mut self, corner: Corner) {
        let el = self.element(corner);
        el.set_text_content(Some(""));
        _ = el.class_list().remove_1(VISIBLE_CLASS);
        dom::set_style(el, "background-color", HIDDEN_BACKGROUND);
        dom::set_style(el, "color", HIDDEN_FOREGROUND);
        dom::set_style(el, "cursor", "default");
    }
}
