/// Playback clock driven by host timestamps (milliseconds).
///
/// Elapsed loop time is `(now - start) * speed + offset` while playing and
/// `offset` while paused. Pausing and speed changes fold the running segment
/// into `offset`, so elapsed time never jumps.
#[derive(Clone, Debug)]
pub struct Playback {
    playing: bool,
    speed: f64,
    /// Anchored on the first timestamp seen
    start_ms: Option<f64>,
    offset_ms: f64,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            playing: true,
            speed: 1.0,
            start_ms: None,
            offset_ms: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool { self.playing }

    pub fn speed(&self) -> f64 { self.speed }

    /// Elapsed loop milliseconds at `now_ms`.
    pub fn elapsed(&mut self, now_ms: f64) -> f64 {
        if !self.playing {
            return self.offset_ms;
        }
        let start = *self.start_ms.get_or_insert(now_ms);
        (now_ms - start) * self.speed + self.offset_ms
    }

    /// Play/pause. Returns the new playing state.
    pub fn toggle(&mut self, now_ms: f64) -> bool {
        if self.playing {
            self.offset_ms = self.elapsed(now_ms);
            self.playing = false;
        } else {
            self.start_ms = Some(now_ms);
            self.playing = true;
        }
        self.playing
    }

    pub fn set_speed(&mut self, now_ms: f64, speed: f64) {
        self.offset_ms = self.elapsed(now_ms);
        self.start_ms = Some(now_ms);
        self.speed = speed;
    }

    /// Jump to `elapsed_ms`, keeping the play state.
    pub fn seek(&mut self, now_ms: f64, elapsed_ms: f64) {
        self.offset_ms = elapsed_ms;
        self.start_ms = Some(now_ms);
    }

    /// Carry elapsed time, speed and play state over from another clock.
    pub fn resume_from(&mut self, other: &mut Playback, now_ms: f64) {
        let elapsed = other.elapsed(now_ms);
        self.speed = other.speed;
        self.playing = other.playing;
        self.seek(now_ms, elapsed);
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
