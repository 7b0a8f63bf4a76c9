use std::time::Instant;

/// Frame metadata - frame number, seconds since start, seconds since the previous frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator that yields frame timing.
/// The main loop pulls one item per redraw: `let frame = frames.next()`.
#[derive(Debug)]
pub struct FrameIterator {
    frame_number: u64,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_frame_time: now,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number += 1;
        self.last_frame_time = now;

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frames_count_up() {
        let mut frames = FrameIterator::new();
        let first = frames.next().unwrap();
        let second = frames.next().unwrap();

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert_eq!(frames.frame_number(), 2);
    }

    #[test]
    fn frames_measure_delta() {
        let mut frames = FrameIterator::new();
        frames.next();

        thread::sleep(Duration::from_millis(10));
        let frame = frames.next().unwrap();

        assert!(frame.delta >= 0.009);
        assert!(frame.time >= frame.delta);
    }
}
