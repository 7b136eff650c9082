use super::{TimeWindow, Waveform};

#[derive(Debug, Clone)]
pub struct AudioSegment {
    pub index: usize,
    pub window: TimeWindow,
    pub waveform: Waveform,
}
