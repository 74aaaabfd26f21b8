pub mod pcm;

pub use pcm::{BitDepth, PcmDecoder, PcmEncoder};
