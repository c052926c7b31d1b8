//! Snapshot construction from an OHLCV history batch.

use crate::error::Result;
use crate::signals::indicators::{Atr, BollingerBands, Ema, Macd, Rsi};
use crate::types::{IndicatorSnapshot, OhlcBar, PriceTick};

/// EMA periods the scalping classifier compares.
const EMA_FAST_PERIOD: usize = 9;
const EMA_SLOW_PERIOD: usize = 20;

/// Reduce an OHLCV batch (plus an optional fresher streamed tick) into one
/// [`IndicatorSnapshot`].
///
/// Every indicator runs over the batch columns and the last element of
/// each series becomes the snapshot's "current" value. A supplied tick
/// overrides only `price` and `volume`; indicator values stay
/// batch-derived until the next refresh.
pub fn build_snapshot(bars: &[OhlcBar], tick: Option<&PriceTick>) -> Result<IndicatorSnapshot> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    let macd = Macd::default().compute(&closes)?;
    let rsi = Rsi::default().compute(&closes)?;
    let atr = Atr::default().compute(&highs, &lows, &closes)?;
    let ema9 = Ema::new(EMA_FAST_PERIOD).compute(&closes)?;
    let ema20 = Ema::new(EMA_SLOW_PERIOD).compute(&closes)?;
    let bollinger = BollingerBands::default().compute(&closes)?;

    let average_volume = volumes.iter().sum::<f64>() / volumes.len() as f64;

    // Indicators succeeded, so the batch is non-empty and every series
    // has at least one element
    let last_bar = &bars[bars.len() - 1];
    let (price, volume) = match tick {
        Some(t) => (t.price, t.volume),
        None => (last_bar.close, last_bar.volume),
    };

    Ok(IndicatorSnapshot {
        price,
        volume,
        average_volume,
        macd: *macd.last().unwrap(),
        rsi: *rsi.last().unwrap(),
        atr: *atr.last().unwrap(),
        ema9: ema9.last().copied(),
        ema20: ema20.last().copied(),
        bollinger: bollinger.last().copied(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    })
}
