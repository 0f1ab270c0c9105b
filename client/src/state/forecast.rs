//! Forecast run state for the forecasting page.
//!
//! DESIGN
//! ======
//! A run is two flags plus a run counter. `begin` starts a run and hands out
//! its number; the page's timer calls `finish` with that number after
//! `FORECAST_DELAY_MS`. Only the run in flight can finish, so a late timer
//! never flips the flags twice.

#[cfg(test)]
#[path = "forecast_test.rs"]
mod forecast_test;

/// Simulated processing time before results appear.
pub const FORECAST_DELAY_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForecastState {
    pub loading: bool,
    pub show_results: bool,
    pub runs_started: u64,
    pub runs_completed: u64,
}

impl ForecastState {
    /// Start a run. Returns `None` while another run is processing (the
    /// button is disabled then).
    pub fn begin(&mut self) -> Option<u64> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.runs_started += 1;
        Some(self.runs_started)
    }

    /// Complete `run` and reveal results. Returns `false` for a run that is
    /// not the one in flight.
    pub fn finish(&mut self, run: u64) -> bool {
        if !self.loading || run != self.runs_started {
            return false;
        }
        self.loading = false;
        self.show_results = true;
        self.runs_completed += 1;
        true
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.loading { "AI Processing..." } else { "Generate Forecast" }
    }
}
