use std::fmt;

/// Pitch extraction algorithm understood by the inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum F0Method {
    Harvest,
    Crepe,
    Rmvpe,
    Pm,
}

impl F0Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            F0Method::Harvest => "harvest",
            F0Method::Crepe => "crepe",
            F0Method::Rmvpe => "rmvpe",
            F0Method::Pm => "pm",
        }
    }
}

impl fmt::Display for F0Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inference parameters applied to every session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionParams {
    pub pitch_shift: i32,
    pub f0_method: F0Method,
    pub index_rate: f32,
    pub filter_radius: u32,
    pub resample_sr: u32,
    pub rms_mix_rate: f32,
    pub protect: f32,
}

impl ConversionParams {
    /// No transposition, 0.75 index blend, engine defaults for the rest.
    pub fn fixed() -> Self {
        Self {
            pitch_shift: 0,
            index_rate: 0.75,
            ..Self::default()
        }
    }
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            pitch_shift: 0,
            f0_method: F0Method::Harvest,
            index_rate: 0.5,
            filter_radius: 3,
            resample_sr: 0,
            rms_mix_rate: 1.0,
            protect: 0.33,
        }
    }
}
