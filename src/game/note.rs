use crate::game::timeline;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NoteSize {
    #[default]
    Normal,
    Big,
}

impl NoteSize {
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Big => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NoteColor {
    #[default]
    Red,
    Blue,
    Yellow, // roll heads
    Purple, // shake heads
}

impl NoteColor {
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
            Self::Yellow => 2,
            Self::Purple => 3,
        }
    }
}

/// A tap, roll or shake. Rolls and shakes carry a non-zero duration; shakes
/// also count ticks as they are drummed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Note {
    pub time: i64,
    pub duration: i64,
    pub speed: f32,
    pub size: NoteSize,
    pub color: NoteColor,
    pub marked: bool,
    pub tick: u32,
    pub hit_tick: u32,
}

impl Note {
    pub fn tap(time: i64, speed: f32, color: NoteColor, size: NoteSize) -> Self {
        Self {
            time,
            duration: 0,
            speed,
            size,
            color,
            marked: false,
            tick: 0,
            hit_tick: 0,
        }
    }

    pub fn roll(time: i64, duration: i64, speed: f32, size: NoteSize) -> Self {
        Self {
            duration: duration.max(0),
            ..Self::tap(time, speed, NoteColor::Yellow, size)
        }
    }

    pub fn shake(time: i64, duration: i64, speed: f32, tick: u32) -> Self {
        Self {
            duration: duration.max(0),
            tick,
            ..Self::tap(time, speed, NoteColor::Purple, NoteSize::Big)
        }
    }

    #[inline(always)]
    pub fn end_time(&self) -> i64 {
        self.time + self.duration
    }

    #[inline(always)]
    pub fn position(&self, now: i64) -> f32 {
        timeline::position(self.time, now, self.speed)
    }

    #[inline(always)]
    pub fn tail_position(&self, now: i64) -> f32 {
        timeline::position(self.end_time(), now, self.speed)
    }

    /// Scorer-side transition; once marked a note stays marked.
    #[inline(always)]
    pub fn mark(&mut self) {
        self.marked = true;
    }

    /// Scorer-side tick credit, saturating at the note's total.
    pub fn credit_tick(&mut self) {
        if self.hit_tick < self.tick {
            self.hit_tick += 1;
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DotMark {
    #[default]
    Ready,
    Hit,
    Miss,
}

/// One tick of a roll.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dot {
    pub time: i64,
    pub speed: f32,
    pub marked: DotMark,
}

impl Dot {
    pub fn new(time: i64, speed: f32) -> Self {
        Self { time, speed, marked: DotMark::Ready }
    }

    /// Evenly spaced dots covering `[roll.time, roll.end_time()]`.
    pub fn for_roll(roll: &Note, count: u32) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![Self::new(roll.time, roll.speed)];
        }
        let step = roll.duration as f64 / (count - 1) as f64;
        (0..count)
            .map(|i| Self::new(roll.time + (step * i as f64).round() as i64, roll.speed))
            .collect()
    }

    #[inline(always)]
    pub fn position(&self, now: i64) -> f32 {
        timeline::position(self.time, now, self.speed)
    }

    /// Ready -> Hit/Miss only; a settled dot ignores further marks.
    pub fn mark(&mut self, hit: bool) {
        if self.marked == DotMark::Ready {
            self.marked = if hit { DotMark::Hit } else { DotMark::Miss };
        }
    }
}

/// Measure line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bar {
    pub time: i64,
    pub speed: f32,
}

impl Bar {
    pub fn new(time: i64, speed: f32) -> Self {
        Self { time, speed }
    }

    #[inline(always)]
    pub fn position(&self, now: i64) -> f32 {
        timeline::position(self.time, now, self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_follows_head_by_duration() {
        let roll = Note::roll(1000, 400, 0.5, NoteSize::Normal);
        assert_eq!(roll.position(1000), 0.0);
        assert_eq!(roll.tail_position(1000), 200.0);
        assert_eq!(roll.tail_position(1400), 0.0);
        assert_eq!(roll.color, NoteColor::Yellow);
    }

    #[test]
    fn dot_marks_never_revert() {
        let mut dot = Dot::new(0, 1.0);
        dot.mark(true);
        assert_eq!(dot.marked, DotMark::Hit);
        dot.mark(false);
        assert_eq!(dot.marked, DotMark::Hit);

        let mut dot = Dot::new(0, 1.0);
        dot.mark(false);
        dot.mark(true);
        assert_eq!(dot.marked, DotMark::Miss);
    }

    #[test]
    fn ticks_saturate_at_total() {
        let mut shake = Note::shake(0, 1000, 1.0, 2);
        shake.credit_tick();
        shake.credit_tick();
        shake.credit_tick();
        assert_eq!(shake.hit_tick, 2);
    }

    #[test]
    fn dots_span_the_whole_roll() {
        let roll = Note::roll(1000, 300, 1.0, NoteSize::Big);
        let dots = Dot::for_roll(&roll, 4);
        let times: Vec<i64> = dots.iter().map(|d| d.time).collect();
        assert_eq!(times, vec![1000, 1100, 1200, 1300]);
        assert!(dots.iter().all(|d| d.marked == DotMark::Ready));
        assert!(Dot::for_roll(&roll, 0).is_empty());
    }
}
