/// API for observing EMA.
pub trait EmaIF {
    /// return the current value.
    fn get_fast(&self) -> f64;
    /// return the long-run value.
    fn get_slow(&self) -> f64;
    /// return a ratio of short / long statistics.
    fn trend(&self) -> f64 {
        let s = self.get_slow();
        if s == 0.0 {
            0.0
        } else {
            self.get_fast() / s
        }
    }
}

/// API for Exponential Moving Average, EMA, like `get`, `reset`, `update` and so on.
pub trait EmaMutIF: EmaIF {
    /// the type of the argument of `update`.
    type Input;
    /// reset the fast value to a given one.
    fn reset_to(&mut self, _: f64) {}
    /// copy the slow value to the fast one.
    fn reset_fast(&mut self) {}
    /// copy the fast value to the slow one.
    fn reset_slow(&mut self) {}
    /// catch up with the current state.
    fn update(&mut self, x: Self::Input);
    /// return a view.
    fn as_view(&self) -> &EmaView;
}

/// A snapshot of a pair of (calibrated) averages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmaView {
    fast: f64,
    slow: f64,
}

impl EmaIF for EmaView {
    fn get_fast(&self) -> f64 {
        self.fast
    }
    fn get_slow(&self) -> f64 {
        self.slow
    }
}

/// Exponential Moving Average pair with calibrators.
///
/// A calibrator accumulates the weight the average has seen so far.
/// Dividing by it removes the bias towards the initial zero, so the first
/// values are reported as they are instead of being damped.
#[derive(Clone, Debug)]
pub struct Ema2 {
    fast: f64,
    slow: f64,
    calf: f64,
    cals: f64,
    fe: f64,
    se: f64,
    view: EmaView,
}

impl EmaIF for Ema2 {
    fn get_fast(&self) -> f64 {
        self.view.fast
    }
    fn get_slow(&self) -> f64 {
        self.view.slow
    }
}

impl EmaMutIF for Ema2 {
    type Input = f64;
    fn update(&mut self, x: Self::Input) {
        self.fast = self.fe * x + (1.0 - self.fe) * self.fast;
        self.slow = self.se * x + (1.0 - self.se) * self.slow;
        self.calf = self.fe + (1.0 - self.fe) * self.calf;
        self.cals = self.se + (1.0 - self.se) * self.cals;
        self.calibrate();
    }
    fn reset_to(&mut self, val: f64) {
        self.fast = val;
        self.calf = 1.0;
        self.calibrate();
    }
    fn reset_fast(&mut self) {
        self.fast = self.slow;
        self.calf = self.cals;
        self.calibrate();
    }
    fn reset_slow(&mut self) {
        self.slow = self.fast;
        self.cals = self.calf;
        self.calibrate();
    }
    fn as_view(&self) -> &EmaView {
        &self.view
    }
}

impl Ema2 {
    pub fn new(len: usize) -> Ema2 {
        debug_assert!(0 < len);
        Ema2 {
            fast: 0.0,
            slow: 0.0,
            calf: 0.0,
            cals: 0.0,
            fe: 1.0 / (len as f64),
            se: 1.0 / (len as f64),
            view: EmaView::default(),
        }
    }
    // set secondary EMA parameter
    pub fn with_slow(mut self, s: usize) -> Ema2 {
        debug_assert!(0 < s);
        self.se = 1.0 / (s as f64);
        self
    }
    /// set value.
    pub fn with_value(mut self, x: f64) -> Self {
        self.fast = x;
        self.slow = x;
        self.calf = 1.0;
        self.cals = 1.0;
        self.calibrate();
        self
    }
    fn calibrate(&mut self) {
        self.view.fast = if self.calf == 0.0 {
            self.fast
        } else {
            self.fast / self.calf
        };
        self.view.slow = if self.cals == 0.0 {
            self.slow
        } else {
            self.slow / self.cals
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema2_calibration() {
        let mut e = Ema2::new(33).with_slow(100_000);
        assert_eq!(e.get_fast(), 0.0);
        assert_eq!(e.trend(), 0.0);
        e.update(6.0);
        // a single sample is reported as is by both averages.
        assert!((e.get_fast() - 6.0).abs() < 1e-9);
        assert!((e.get_slow() - 6.0).abs() < 1e-9);
        for _ in 0..200 {
            e.update(2.0);
        }
        assert!(e.get_fast() < 2.1);
        assert!(e.get_fast() < e.get_slow());
        assert!(e.trend() < 1.0);
    }

    #[test]
    fn test_ema2_reset() {
        let mut e = Ema2::new(10).with_slow(100).with_value(4.0);
        e.reset_to(10.0);
        assert_eq!(e.get_fast(), 10.0);
        assert_eq!(e.get_slow(), 4.0);
        assert_eq!(e.as_view().get_fast(), 10.0);
        e.reset_slow();
        assert_eq!(e.get_slow(), 10.0);
        e.reset_to(1.0);
        e.reset_fast();
        assert_eq!(e.get_fast(), 10.0);
    }
}
