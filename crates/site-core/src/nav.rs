//! Navigation presenter: decides which corner label is visible for the
//! face currently turned toward the viewer.

use crate::error::{Result, SiteError};
use crate::face::{Corner, Face};
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct NavBinding {
    pub face: Face,
    pub corner: Corner,
    pub label: String,
    pub target: Option<String>,
}

impl NavBinding {
    pub fn new(face: Face, corner: Corner, label: impl Into<String>) -> Self {
        Self {
            face,
            corner,
            label: label.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CornerView {
    Hidden,
    Visible {
        label: String,
        target: Option<String>,
    },
}

impl CornerView {
    pub fn is_visible(&self) -> bool {
        matches!(self, CornerView::Visible { .. })
    }
}

/// Host-side receiver for corner updates (DOM anchors on the web).
pub trait CornerSink {
    fn show(&mut self, corner: Corner, label: &str, target: Option<&str>);
    fn hide(&mut self, corner: Corner);
}

pub struct NavPresenter {
    bindings: FnvHashMap<Face, NavBinding>,
}

impl NavPresenter {
    pub fn new(bindings: impl IntoIterator<Item = NavBinding>) -> Result<Self> {
        let mut map = FnvHashMap::default();
        for b in bindings {
            let face = b.face;
            if map.insert(face, b).is_some() {
                return Err(SiteError::DuplicateBinding(face));
            }
        }
        Ok(Self { bindings: map })
    }

    pub fn binding(&self, face: Face) -> Option<&NavBinding> {
        self.bindings.get(&face)
    }

    pub fn view(&self, active: Face, corner: Corner) -> CornerView {
        match self.binding(active) {
            Some(b) if b.corner == corner => CornerView::Visible {
                label: b.label.clone(),
                target: b.target.clone(),
            },
            _ => CornerView::Hidden,
        }
    }

    /// Views for all four corners, in `Corner::ALL` order.
    pub fn layout(&self, active: Face) -> [CornerView; 4] {
        Corner::ALL.map(|c| self.view(active, c))
    }

    pub fn present<S: CornerSink + ?Sized>(&self, active: Face, sink: &mut S) {
        let bound = self.binding(active);
        for corner in Corner::ALL {
            match bound {
                Some(b) if b.corner == corner => sink.show(corner, &b.label, b.target.as_deref()),
                _ => sink.hide(corner),
            }
        }
    }

    /// Click target for `corner`, if it is the visible one for `active`.
    pub fn target_for(&self, active: Face, corner: Corner) -> Option<&str> {
        self.binding(active)
            .filter(|b| b.corner == corner)
            .and_then(|b| b.target.as_deref())
    }
}
