use crate::game::note::{Bar, Dot, Note};

/// Timed events for one play, split by how they are drawn. Owned by the chart
/// loader and updated in place by the scorer; the renderers only borrow it.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub bars: Vec<Bar>,
    pub notes: Vec<Note>,
    pub rolls: Vec<Note>,
    pub shakes: Vec<Note>,
    pub dots: Vec<Dot>,
}

impl Chart {
    /// Last time anything on the chart still matters for drawing.
    pub fn end_time(&self) -> i64 {
        let notes = self
            .notes
            .iter()
            .chain(&self.rolls)
            .chain(&self.shakes)
            .map(Note::end_time);
        let bars = self.bars.iter().map(|b| b.time);
        notes.chain(bars).max().unwrap_or(0)
    }
}
