use std::time::Instant;

/// Logs how long a canvas operation took, at debug level, when dropped.
///
/// Timers created with [`ScopeTimer::over_pixels`] also report how many
/// pixels the operation touched.
pub struct ScopeTimer {
    name: &'static str,
    pixels: Option<usize>,
    start: Instant,
}

impl ScopeTimer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pixels: None,
            start: Instant::now(),
        }
    }

    pub fn over_pixels(name: &'static str, pixels: usize) -> Self {
        Self {
            pixels: Some(pixels),
            ..Self::new(name)
        }
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let elapsed = self.start.elapsed();
        match self.pixels {
            Some(n) => log::debug!("[TIMER] {} over {n} px took {:?}", self.name, elapsed),
            None => log::debug!("[TIMER] {} took {:?}", self.name, elapsed),
        }
    }
}
