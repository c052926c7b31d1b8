pub mod ohlc;
pub mod signals;

pub use ohlc::*;
pub use signals::*;
