use log::debug;

use crate::config::Config;
use crate::core::gfx::RenderList;
use crate::game::chart::Chart;
use crate::game::judgment::Judgment;
use crate::game::note::Note;
use crate::ui::components::background::BackgroundDrawer;
use crate::ui::components::bar::BarDrawer;
use crate::ui::components::dancer::{DancerDrawer, DancerMode, DancerSignals};
use crate::ui::components::judgment::JudgmentDrawer;
use crate::ui::components::keys::{KeyDrawer, LANES};
use crate::ui::components::note::NoteDrawer;
use crate::ui::components::roll::{RollDrawer, RollSprites};
use crate::ui::components::shake::ShakeDrawer;
use crate::ui::components::stage::StageDrawer;
use crate::ui::skin::Skin;

/// Everything the scorer and the platform layer report for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub time: i64,
    pub bpm: f64,
    pub last_pressed: [bool; LANES],
    pub pressed: [bool; LANES],
    /// `Judgment::NONE` when nothing was judged this frame.
    pub judgment: Judgment,
    pub big: bool,
    pub combo: u32,
    pub hit: bool,
    pub miss: bool,
    pub highlight: bool,
    /// The shake currently being drummed, if any.
    pub staged: Option<Note>,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            time: 0,
            bpm: 120.0,
            last_pressed: [false; LANES],
            pressed: [false; LANES],
            judgment: Judgment::NONE,
            big: false,
            combo: 0,
            hit: false,
            miss: false,
            highlight: false,
            staged: None,
        }
    }
}

pub struct State {
    clear_color: [f32; 4],
    time: i64,
    background: BackgroundDrawer,
    stage: StageDrawer,
    bars: BarDrawer,
    rolls: RollDrawer,
    shake: ShakeDrawer,
    notes: NoteDrawer,
    keys: KeyDrawer,
    dancer: DancerDrawer,
    judgment: JudgmentDrawer,
}

pub fn init(config: &Config, skin: Skin, surface: [f32; 2]) -> State {
    let Skin {
        background,
        field,
        hints,
        bar,
        notes,
        overlays,
        roll_heads,
        roll_bodies,
        roll_tails,
        dot,
        shake_border,
        shake_fill,
        key_field,
        keys,
        dancer,
        judgments,
    } = skin;

    debug!("drum field for {}x{} surface", surface[0], surface[1]);
    State {
        clear_color: config.clear_color,
        time: 0,
        background: BackgroundDrawer::new(config, background, surface),
        stage: StageDrawer::new(config, field, hints),
        bars: BarDrawer::new(config.visible_range(), bar),
        rolls: RollDrawer::new(
            config,
            RollSprites { heads: roll_heads, bodies: roll_bodies, tails: roll_tails, dot },
        ),
        shake: ShakeDrawer::new(config, shake_border, shake_fill),
        notes: NoteDrawer::new(config, notes, overlays),
        keys: KeyDrawer::new(config.key_max_countdown, key_field, keys),
        dancer: DancerDrawer::new(config, dancer),
        judgment: JudgmentDrawer::new(config, judgments),
    }
}

pub fn resize(state: &mut State, surface: [f32; 2]) {
    state.background.resize(surface);
}

pub fn update(state: &mut State, input: &FrameInput) {
    state.time = input.time;
    state.stage.update(input.highlight);
    state.bars.update(input.time);
    state.rolls.update(input.time);
    state.shake.update(input.time, input.staged.as_ref());
    state.notes.update(input.time, input.bpm);
    state.keys.update(input.time, &input.last_pressed, &input.pressed);
    state.dancer.update(
        input.time,
        input.bpm,
        &DancerSignals {
            miss: input.miss,
            hit: input.hit,
            combo: input.combo,
            highlight: input.highlight,
        },
    );
    state.judgment.update(input.time, input.judgment, input.big);
}

pub fn draw(state: &State, chart: &Chart) -> RenderList {
    let mut out = RenderList::with_capacity(state.clear_color, 64);
    state.background.draw(&mut out);
    state.stage.draw(&mut out);
    state.bars.draw(&mut out, &chart.bars);
    state.rolls.draw(&mut out, &chart.rolls, &chart.dots);
    state.shake.draw(&mut out);
    state.notes.draw(&mut out, &chart.shakes, &chart.rolls, &chart.notes);
    state.keys.draw(&mut out);
    state.dancer.draw(&mut out);
    state.judgment.draw(&mut out);
    out
}

impl State {
    #[inline(always)]
    pub fn time(&self) -> i64 {
        self.time
    }

    #[inline(always)]
    pub fn dancer_mode(&self) -> DancerMode {
        self.dancer.mode()
    }

    #[inline(always)]
    pub fn overlay(&self) -> usize {
        self.notes.overlay()
    }

    #[inline(always)]
    pub fn judgment(&self) -> Judgment {
        self.judgment.judgment()
    }

    #[inline(always)]
    pub fn is_lit(&self, lane: usize) -> bool {
        self.keys.is_lit(lane)
    }
}
