//! Header chrome as an explicit configuration object. Nothing here is
//! process-global: the embedder constructs a `HeaderChrome`, passes it down,
//! and resolves it against the current collapse progress each frame.

use masthead_core::{Color, Interpolate};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderChrome {
    pub expanded_background: Color,
    pub collapsed_background: Color,
    pub title_scale_expanded: f32,
    pub title_scale_collapsed: f32,
    /// Shadow depth once content scrolls under the collapsed bar.
    pub collapsed_elevation: f32,
}

impl Default for HeaderChrome {
    fn default() -> Self {
        Self {
            expanded_background: Color::from_hex("#1C1B1F"),
            collapsed_background: Color::from_hex("#2B2930"),
            title_scale_expanded: 1.0,
            title_scale_collapsed: 0.78,
            collapsed_elevation: 3.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedChrome {
    pub background: Color,
    pub title_scale: f32,
    pub elevation: f32,
}

impl HeaderChrome {
    /// `progress` is the collapse progress (1 = expanded).
    pub fn resolve(&self, progress: f32) -> ResolvedChrome {
        let p = progress.clamp(0.0, 1.0);
        ResolvedChrome {
            background: self.collapsed_background.interpolate(&self.expanded_background, p),
            title_scale: self
                .title_scale_collapsed
                .interpolate(&self.title_scale_expanded, p),
            elevation: self.collapsed_elevation.interpolate(&0.0, p),
        }
    }
}
