#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
#[inline]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
#[inline]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    to - from
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    to.duration_since(from).as_secs_f64() * 1000.0
}

/// Split timer for one update: `lap_ms` measures a stage, `total_ms` the
/// whole call. Only built when perf metrics are on.
pub(crate) struct PerfTimer {
    started: Stamp,
    lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let t = now();
        PerfTimer { started: t, lap: t }
    }

    /// Time since the previous lap (or start)
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let t = now();
        let ms = ms_between(self.lap, t);
        self.lap = t;
        ms
    }

    pub(crate) fn total_ms(&self) -> f64 {
        ms_between(self.started, now())
    }
}
