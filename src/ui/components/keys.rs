use crate::core::gfx::RenderList;
use crate::ui::sprite::{DrawOp, Sprite};

pub const LANES: usize = 4;

/// Lane keys light up on press and stay lit for a fixed number of frames.
#[derive(Debug, Clone)]
pub struct KeyDrawer {
    max_countdown: i32,
    countdowns: [i32; LANES],
    last_time: Option<i64>,
    field: Sprite,
    keys: [Sprite; LANES],
}

impl KeyDrawer {
    pub fn new(max_countdown: i32, field: Sprite, keys: [Sprite; LANES]) -> Self {
        Self {
            max_countdown: max_countdown.max(0),
            countdowns: [0; LANES],
            last_time: None,
            field,
            keys,
        }
    }

    /// One frame. `last_pressed`/`pressed` are the lane states of the previous
    /// and the current frame; missing lanes count as released.
    pub fn update(&mut self, now: i64, last_pressed: &[bool], pressed: &[bool]) {
        // A repeated clock time is the same frame: no decay, edges still count.
        let new_frame = self.last_time != Some(now);
        self.last_time = Some(now);

        for (lane, countdown) in self.countdowns.iter_mut().enumerate() {
            if new_frame && *countdown > 0 {
                *countdown -= 1;
            }
            let was = last_pressed.get(lane).copied().unwrap_or(false);
            let is = pressed.get(lane).copied().unwrap_or(false);
            if !was && is {
                *countdown = self.max_countdown;
            }
        }
    }

    #[inline(always)]
    pub fn is_lit(&self, lane: usize) -> bool {
        self.countdowns.get(lane).is_some_and(|&c| c > 0)
    }

    pub fn draw(&self, out: &mut RenderList) {
        let op = DrawOp::default();
        self.field.draw(out, &op);
        for (lane, key) in self.keys.iter().enumerate() {
            if self.is_lit(lane) {
                key.draw(out, &op);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawer(max: i32) -> KeyDrawer {
        KeyDrawer::new(
            max,
            Sprite::new("field", 100.0, 100.0),
            ["k0", "k1", "k2", "k3"].map(|k| Sprite::new(k, 100.0, 100.0)),
        )
    }

    const UP: [bool; 4] = [false; 4];
    const LEFT: [bool; 4] = [false, true, false, false];

    #[test]
    fn press_stays_lit_for_max_frames() {
        let mut d = drawer(10);
        d.update(0, &UP, &LEFT);
        for frame in 0..20 {
            if frame > 0 {
                d.update(frame * 16, &LEFT, &LEFT);
            }
            assert_eq!(d.is_lit(1), frame < 10, "frame {frame}");
            assert!(!d.is_lit(0));
        }
    }

    #[test]
    fn holding_does_not_relight() {
        let mut d = drawer(3);
        d.update(0, &UP, &LEFT);
        d.update(16, &LEFT, &LEFT);
        d.update(32, &LEFT, &LEFT);
        d.update(48, &LEFT, &LEFT);
        assert!(!d.is_lit(1));
        d.update(64, &LEFT, &UP);
        d.update(80, &UP, &LEFT);
        assert!(d.is_lit(1));
    }

    #[test]
    fn repeated_time_is_ignored() {
        let mut d = drawer(10);
        d.update(0, &UP, &LEFT);
        let before = d.countdowns;
        d.update(0, &UP, &LEFT);
        d.update(0, &UP, &LEFT);
        assert_eq!(d.countdowns, before);
    }

    #[test]
    fn edge_on_a_repeated_time_lights_the_key() {
        let mut d = drawer(10);
        d.update(100, &UP, &UP);
        d.update(100, &UP, &[true, false, false, false]);
        assert!(d.is_lit(0));
        assert_eq!(d.countdowns[0], 10);
        d.update(116, &[true, false, false, false], &[true, false, false, false]);
        assert_eq!(d.countdowns[0], 9);
    }

    #[test]
    fn field_is_drawn_under_lit_keys() {
        let mut d = drawer(10);
        let mut out = RenderList::default();
        d.draw(&mut out);
        assert_eq!(out.len(), 1);

        d.update(0, &[false, false, false, false], &[true, false, false, true]);
        let mut out = RenderList::default();
        d.draw(&mut out);
        let ids: Vec<&str> = out.objects.iter().map(|o| o.texture_id()).collect();
        assert_eq!(ids, vec!["field", "k0", "k3"]);
    }

    #[test]
    fn short_lane_slices_are_released() {
        let mut d = drawer(10);
        d.update(0, &[], &[true]);
        assert!(d.is_lit(0));
        assert!(!d.is_lit(1));
        assert!(!d.is_lit(9));
    }
}
