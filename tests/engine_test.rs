//! Tests for the signal engine and its async runtime wrapper.

use std::sync::Once;

use specter::{
    Config, EngineHandle, EngineView, OhlcBar, SignalEngine, SignalError, TradingMode,
};
use tokio::sync::watch;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn make_bars(count: usize) -> Vec<OhlcBar> {
    (0..count)
        .map(|i| {
            let base = 100.0 + (i as f64 * 0.35).sin() * 2.0 + i as f64 * 0.05;
            OhlcBar {
                time: 1_700_000_000_000 + i as i64 * 60_000,
                open: base,
                high: base + 0.8,
                low: base - 0.6,
                close: base + 0.2,
                volume: 1_000.0 + (i % 7) as f64 * 50.0,
            }
        })
        .collect()
}

// --- sync engine -----------------------------------------------------------

#[test]
fn test_engine_starts_empty() {
    let engine = SignalEngine::new(Config::default());
    assert!(engine.snapshot().is_none());
    assert!(engine.recommendation().is_none());
    assert!(engine.last_signal_price().is_none());
    assert_eq!(engine.mode(), TradingMode::Standard);
}

#[test]
fn test_engine_batch_refresh_builds_state() {
    init_tracing();
    let mut engine = SignalEngine::new(Config::default());
    let bars = make_bars(100);

    engine.on_batch_refresh(&bars).unwrap();

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.price, bars.last().unwrap().close);
    assert!(engine.recommendation().is_some());
    assert_eq!(engine.last_signal_price(), Some(snapshot.price));
}

#[test]
fn test_engine_short_batch_keeps_previous_snapshot() {
    let mut engine = SignalEngine::new(Config::default());
    engine.on_batch_refresh(&make_bars(100)).unwrap();
    let before = engine.snapshot().cloned();

    let result = engine.on_batch_refresh(&make_bars(30));
    assert!(matches!(
        result,
        Err(SignalError::InsufficientData { .. })
    ));
    assert_eq!(engine.snapshot().cloned(), before);
}

#[test]
fn test_engine_rejects_invalid_batch() {
    let mut engine = SignalEngine::new(Config::default());
    let mut bars = make_bars(100);
    bars[40].close = f64::NAN;

    let result = engine.on_batch_refresh(&bars);
    assert!(matches!(result, Err(SignalError::InvalidInput(_))));
    assert!(engine.snapshot().is_none());

    bars[40].close = -5.0;
    let result = engine.on_batch_refresh(&bars);
    assert!(matches!(result, Err(SignalError::InvalidInput(_))));
}

#[test]
fn test_engine_drops_tick_before_first_batch() {
    let mut engine = SignalEngine::new(Config::default());
    engine.on_tick(100.0, 500.0).unwrap();
    assert!(engine.snapshot().is_none());
    assert!(engine.recommendation().is_none());
}

#[test]
fn test_engine_rejects_invalid_tick() {
    let mut engine = SignalEngine::new(Config::default());
    engine.on_batch_refresh(&make_bars(100)).unwrap();
    let before = engine.snapshot().cloned();

    assert!(engine.on_tick(f64::NAN, 500.0).is_err());
    assert!(engine.on_tick(100.0, f64::INFINITY).is_err());
    assert!(engine.on_tick(-1.0, 500.0).is_err());
    assert_eq!(engine.snapshot().cloned(), before);
}

#[test]
fn test_engine_tick_overrides_price_without_recomputing() {
    let mut engine = SignalEngine::new(Config::default());
    engine.on_batch_refresh(&make_bars(100)).unwrap();

    let batch_snapshot = engine.snapshot().cloned().unwrap();
    let rec_before = engine.recommendation().cloned();

    // 0.1% drift: well under the gate threshold
    let tick_price = batch_snapshot.price * 1.001;
    engine.on_tick(tick_price, 4_200.0).unwrap();

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.price, tick_price);
    assert_eq!(snapshot.volume, 4_200.0);
    assert_eq!(snapshot.macd, batch_snapshot.macd);
    assert_eq!(snapshot.rsi, batch_snapshot.rsi);
    assert_eq!(engine.recommendation().cloned(), rec_before);
}

#[test]
fn test_engine_repeated_batch_is_stable() {
    let mut engine = SignalEngine::new(Config::default());
    let bars = make_bars(100);
    engine.on_batch_refresh(&bars).unwrap();
    let rec = engine.recommendation().cloned();
    let anchor = engine.last_signal_price();

    engine.on_batch_refresh(&bars).unwrap();
    assert_eq!(engine.recommendation().cloned(), rec);
    assert_eq!(engine.last_signal_price(), anchor);
}

#[test]
fn test_engine_mode_change_resets_session() {
    let mut engine = SignalEngine::new(Config::default());
    engine.on_batch_refresh(&make_bars(100)).unwrap();
    assert!(engine.recommendation().is_some());

    engine.on_mode_change(TradingMode::Scalping);
    assert_eq!(engine.mode(), TradingMode::Scalping);
    assert!(engine.recommendation().is_none());
    assert!(engine.last_signal_price().is_none());
    // The snapshot survives a mode change
    assert!(engine.snapshot().is_some());
}

#[test]
fn test_engine_same_mode_change_keeps_session() {
    let mut engine = SignalEngine::new(Config::default());
    engine.on_batch_refresh(&make_bars(100)).unwrap();
    let rec = engine.recommendation().cloned();

    engine.on_mode_change(TradingMode::Standard);
    assert_eq!(engine.recommendation().cloned(), rec);
}

#[test]
fn test_engine_scalping_classification_after_mode_change() {
    let mut engine = SignalEngine::new(Config::default());
    engine.on_batch_refresh(&make_bars(100)).unwrap();
    engine.on_mode_change(TradingMode::Scalping);

    let price = engine.snapshot().unwrap().price;
    engine.on_tick(price, 1_000.0).unwrap();

    let rec = engine.recommendation().unwrap();
    assert!(rec.is_scalping);
}

// --- async runtime ---------------------------------------------------------

async fn wait_for<F>(views: &mut watch::Receiver<EngineView>, pred: F) -> EngineView
where
    F: Fn(&EngineView) -> bool,
{
    loop {
        {
            let view = views.borrow();
            if pred(&view) {
                return view.clone();
            }
        }
        views.changed().await.expect("engine task stopped");
    }
}

#[tokio::test]
async fn test_runtime_applies_events_in_order() {
    init_tracing();
    let handle = EngineHandle::spawn(Config::default());
    let mut views = handle.subscribe();

    let bars = make_bars(100);
    let batch_price = bars.last().unwrap().close;
    handle.batch_refresh(bars).await.unwrap();

    let view = wait_for(&mut views, |v| v.snapshot.is_some()).await;
    let batch_macd = view.snapshot.as_ref().unwrap().macd;
    assert_eq!(view.snapshot.as_ref().unwrap().price, batch_price);
    assert!(view.recommendation.is_some());

    // A tick lands after the batch and only moves price/volume
    let tick_price = batch_price * 1.001;
    handle.tick(tick_price, 2_500.0).await.unwrap();

    let view = wait_for(&mut views, |v| {
        v.snapshot.as_ref().map(|s| s.price) == Some(tick_price)
    })
    .await;
    assert_eq!(view.snapshot.as_ref().unwrap().macd, batch_macd);
}

#[tokio::test]
async fn test_runtime_mode_change_resets_and_reclassifies() {
    let handle = EngineHandle::spawn(Config::default());
    let mut views = handle.subscribe();

    handle.batch_refresh(make_bars(100)).await.unwrap();
    let view = wait_for(&mut views, |v| v.recommendation.is_some()).await;
    let price = view.snapshot.as_ref().unwrap().price;

    handle.set_mode(TradingMode::Scalping).await.unwrap();
    let view = wait_for(&mut views, |v| v.mode == TradingMode::Scalping).await;
    assert!(view.recommendation.is_none());
    assert!(view.last_signal_price.is_none());

    // Next observation classifies under the scalping rule set
    handle.tick(price, 1_000.0).await.unwrap();
    let view = wait_for(&mut views, |v| v.recommendation.is_some()).await;
    assert!(view.recommendation.as_ref().unwrap().is_scalping);
}

#[tokio::test]
async fn test_runtime_drops_bad_batch_and_keeps_state() {
    let handle = EngineHandle::spawn(Config::default());
    let mut views = handle.subscribe();

    handle.batch_refresh(make_bars(100)).await.unwrap();
    let good = wait_for(&mut views, |v| v.snapshot.is_some()).await;

    // Short batch is rejected by the engine; the published view still
    // carries the previous snapshot
    handle.batch_refresh(make_bars(30)).await.unwrap();
    handle.tick(good.snapshot.as_ref().unwrap().price, 1.0).await.unwrap();

    let view = wait_for(&mut views, |v| {
        v.snapshot.as_ref().map(|s| s.volume) == Some(1.0)
    })
    .await;
    assert_eq!(
        view.snapshot.as_ref().unwrap().macd,
        good.snapshot.as_ref().unwrap().macd
    );
}
