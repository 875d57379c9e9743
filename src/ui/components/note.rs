use crate::config::Config;
use crate::core::gfx::RenderList;
use crate::game::note::Note;
use crate::game::timeline::VisibleRange;
use crate::ui::components::overlay::OverlayBlinker;
use crate::ui::sprite::{DrawOp, Sprite};
use crate::utils::math::clamp01;

/// How a group of heads fades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Group {
    Shake,
    Roll,
    Tap,
}

/// Note heads of every kind plus the beat overlay drawn on top of each head.
#[derive(Debug, Clone)]
pub struct NoteDrawer {
    time: i64,
    range: VisibleRange,
    fade_distance: f32,
    blinker: OverlayBlinker,
    sprites: [[Sprite; 4]; 2],
    overlays: [[Sprite; 2]; 2],
}

impl NoteDrawer {
    pub fn new(config: &Config, sprites: [[Sprite; 4]; 2], overlays: [[Sprite; 2]; 2]) -> Self {
        Self {
            time: 0,
            range: config.visible_range(),
            fade_distance: config.roll_fade_distance,
            blinker: OverlayBlinker::new(),
            sprites,
            overlays,
        }
    }

    pub fn update(&mut self, now: i64, bpm: f64) {
        self.time = now;
        self.blinker.update(now, bpm);
    }

    #[inline(always)]
    pub fn overlay(&self) -> usize {
        self.blinker.index()
    }

    /// Shakes, then rolls, then taps, so taps end up on top. Inside each
    /// group the last-scheduled note is drawn first.
    pub fn draw(&self, out: &mut RenderList, shakes: &[Note], rolls: &[Note], notes: &[Note]) {
        for (group, heads) in [(Group::Shake, shakes), (Group::Roll, rolls), (Group::Tap, notes)] {
            for n in heads.iter().rev() {
                let pos = n.position(self.time);
                if !self.range.contains(pos) {
                    continue;
                }
                let op = DrawOp::default().alpha(self.alpha(group, n, pos));

                self.sprites[n.size.index()][n.color.index()]
                    .moved(pos, 0.0)
                    .draw(out, &op);
                self.overlays[n.size.index()][self.blinker.index()]
                    .moved(pos, 0.0)
                    .draw(out, &op);
            }
        }
    }

    fn alpha(&self, group: Group, n: &Note, pos: f32) -> f32 {
        match group {
            // Shake heads vanish once the shake has started.
            Group::Shake if n.time < self.time => 0.0,
            Group::Shake => 1.0,
            Group::Roll => clamp01(pos / self.fade_distance),
            // Judged taps stay in the list but draw fully transparent.
            Group::Tap if n.marked => 0.0,
            Group::Tap => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::note::{NoteColor, NoteSize};
    use crate::ui::skin::Skin;

    fn drawer() -> NoteDrawer {
        let skin = Skin::standard(1600.0, 900.0);
        NoteDrawer::new(&Config::default(), skin.notes, skin.overlays)
    }

    fn hit_x() -> f32 {
        Skin::standard(1600.0, 900.0).notes[0][0].pos.x
    }

    #[test]
    fn later_notes_are_drawn_first() {
        let mut d = drawer();
        d.update(0, 120.0);
        let notes = [
            Note::tap(100, 1.0, NoteColor::Red, NoteSize::Normal),
            Note::tap(200, 1.0, NoteColor::Blue, NoteSize::Normal),
            Note::tap(300, 1.0, NoteColor::Red, NoteSize::Big),
        ];
        let mut out = RenderList::default();
        d.draw(&mut out, &[], &[], &notes);
        // head + overlay per note
        assert_eq!(out.len(), 6);
        let xs: Vec<f32> = out.objects.iter().step_by(2).map(|o| (o.center()[0] - hit_x()).round()).collect();
        assert_eq!(xs, vec![300.0, 200.0, 100.0]);
        assert_eq!(out.objects[0].texture_id(), "drum/note/big-red.png");
        assert_eq!(out.objects[4].texture_id(), "drum/note/red.png");
    }

    #[test]
    fn off_screen_notes_are_culled() {
        let mut d = drawer();
        d.update(10_000, 120.0);
        let notes = [
            Note::tap(10_000 + 1301, 1.0, NoteColor::Red, NoteSize::Normal),
            Note::tap(10_000 - 401, 1.0, NoteColor::Red, NoteSize::Normal),
            Note::tap(10_000 + 1300, 1.0, NoteColor::Red, NoteSize::Normal),
        ];
        let mut out = RenderList::default();
        d.draw(&mut out, &[], &[], &notes);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn judged_taps_draw_transparent() {
        let mut d = drawer();
        d.update(0, 120.0);
        let mut judged = Note::tap(50, 1.0, NoteColor::Red, NoteSize::Normal);
        judged.mark();
        let notes = [judged, Note::tap(80, 1.0, NoteColor::Blue, NoteSize::Normal)];
        let mut out = RenderList::default();
        d.draw(&mut out, &[], &[], &notes);
        assert_eq!(out.len(), 4);
        assert_eq!(out.visible_count(), 2);
        // the judged note is the second one drawn
        assert_eq!(out.objects[2].tint()[3], 0.0);
        assert_eq!(out.objects[3].tint()[3], 0.0);
    }

    #[test]
    fn roll_heads_fade_over_distance() {
        let mut d = drawer();
        d.update(0, 120.0);
        let rolls = [
            Note::roll(800, 500, 1.0, NoteSize::Normal),
            Note::roll(200, 500, 1.0, NoteSize::Normal),
            Note::roll(-100, 500, 1.0, NoteSize::Normal),
        ];
        let mut out = RenderList::default();
        d.draw(&mut out, &[], &rolls, &[]);
        let alphas: Vec<f32> = out.objects.iter().step_by(2).map(|o| o.tint()[3]).collect();
        assert_eq!(alphas, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn started_shakes_vanish() {
        let mut d = drawer();
        d.update(1000, 120.0);
        let shakes = [Note::shake(900, 2000, 0.5, 10), Note::shake(1000, 2000, 0.5, 10)];
        let mut out = RenderList::default();
        d.draw(&mut out, &shakes, &[], &[]);
        let alphas: Vec<f32> = out.objects.iter().step_by(2).map(|o| o.tint()[3]).collect();
        assert_eq!(alphas, vec![1.0, 0.0]);
    }

    #[test]
    fn overlay_follows_the_blink() {
        let mut d = drawer();
        let notes = [Note::tap(2000, 0.1, NoteColor::Red, NoteSize::Normal)];
        d.update(0, 120.0);
        let mut out = RenderList::default();
        d.draw(&mut out, &[], &[], &notes);
        assert_eq!(out.objects[1].texture_id(), "drum/note/overlay-0.png");

        d.update(500, 120.0);
        let mut out = RenderList::default();
        d.draw(&mut out, &[], &[], &notes);
        assert_eq!(out.objects[1].texture_id(), "drum/note/overlay-1.png");
    }

    #[test]
    fn groups_stack_shake_roll_tap() {
        let mut d = drawer();
        d.update(0, 120.0);
        let shakes = [Note::shake(500, 1000, 1.0, 5)];
        let rolls = [Note::roll(600, 500, 1.0, NoteSize::Normal)];
        let notes = [Note::tap(700, 1.0, NoteColor::Blue, NoteSize::Normal)];
        let mut out = RenderList::default();
        d.draw(&mut out, &shakes, &rolls, &notes);
        let heads: Vec<&str> = out.objects.iter().step_by(2).map(|o| o.texture_id()).collect();
        assert_eq!(heads, vec!["drum/note/big-purple.png", "drum/note/yellow.png", "drum/note/blue.png"]);
    }
}
