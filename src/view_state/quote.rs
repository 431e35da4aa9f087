use crate::pricing::{PricingTrack, QuoteDetail, TrackId, MACHINES_QUOTE};

/// What the quote panel shows under the track cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteView {
    Detail(&'static QuoteDetail),
    ComingSoon(TrackId),
}

#[derive(Debug, Clone)]
pub struct QuoteSelector {
    tracks: &'static [PricingTrack],
    selected: Option<TrackId>,
}

impl QuoteSelector {
    pub fn new(tracks: &'static [PricingTrack]) -> Self {
        Self {
            tracks,
            selected: None,
        }
    }

    pub fn tracks(&self) -> &'static [PricingTrack] {
        self.tracks
    }

    pub fn selected(&self) -> Option<TrackId> {
        self.selected
    }

    /// Selects `id` if it is an available track; anything else leaves the selection as is.
    pub fn select(&mut self, id: TrackId) -> bool {
        let available = self.tracks.iter().any(|t| t.id == id && t.available);
        if available {
            self.selected = Some(id);
        }
        available
    }

    pub fn view(&self) -> Option<QuoteView> {
        self.selected.map(|id| {
            if id == MACHINES_QUOTE.track {
                QuoteView::Detail(&MACHINES_QUOTE)
            } else {
                QuoteView::ComingSoon(id)
            }
        })
    }
}
