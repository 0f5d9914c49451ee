/// Glue averages kept separately for each search mode.
use crate::types::*;

/// A pair of glue EMAs. `current` follows learnt clauses; `saved` belongs to
/// the other mode and is left untouched until the next mode switch.
#[derive(Clone, Debug)]
pub struct GlueAverages {
    current: Ema2,
    saved: Ema2,
}

impl Default for GlueAverages {
    fn default() -> Self {
        let config = Config::default();
        GlueAverages::new(config.ema_glue_fast, config.ema_glue_slow)
    }
}

impl Instantiate for GlueAverages {
    fn instantiate(config: &Config, _: &CNFDescription) -> Self {
        GlueAverages::new(config.ema_glue_fast, config.ema_glue_slow)
    }
}

impl EmaIF for GlueAverages {
    fn get_fast(&self) -> f64 {
        self.current.get_fast()
    }
    fn get_slow(&self) -> f64 {
        self.current.get_slow()
    }
}

impl EmaMutIF for GlueAverages {
    type Input = usize;
    fn update(&mut self, glue: usize) {
        self.current.update(glue as f64);
    }
    fn as_view(&self) -> &EmaView {
        self.current.as_view()
    }
}

impl GlueAverages {
    pub fn new(fast: usize, slow: usize) -> Self {
        let ema = Ema2::new(fast).with_slow(slow);
        GlueAverages {
            current: ema.clone(),
            saved: ema,
        }
    }
    /// the averages of the running mode
    pub fn current(&self) -> &Ema2 {
        &self.current
    }
    pub fn current_mut(&mut self) -> &mut Ema2 {
        &mut self.current
    }
    /// the averages of the other mode
    pub fn saved(&self) -> &Ema2 {
        &self.saved
    }
    /// exchange the averages on a mode switch.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_keeps_the_other_side() {
        let mut g = GlueAverages::new(2, 10);
        g.update(8);
        assert_eq!(g.get_fast(), 8.0);
        assert_eq!(g.saved().get_fast(), 0.0);
        g.swap();
        assert_eq!(g.get_fast(), 0.0);
        g.update(3);
        g.update(3);
        g.swap();
        assert_eq!(g.get_fast(), 8.0);
        assert_eq!(g.saved().get_fast(), 3.0);
        assert_eq!(g.as_view().get_fast(), 8.0);
    }
}
