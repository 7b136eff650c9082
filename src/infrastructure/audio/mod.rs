pub mod audio_decoder;
mod symphonia_codec;
pub mod wav_io;

pub use symphonia_codec::SymphoniaAudioCodec;
