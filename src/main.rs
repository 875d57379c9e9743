use drumsync::config::{self, CONFIG_PATH};
use drumsync::game::chart::Chart;
use drumsync::game::judgment::{COOL, GOOD, Judgment, MISS};
use drumsync::game::note::{Bar, Dot, Note, NoteColor, NoteSize};
use drumsync::screens::gameplay::{self, FrameInput};
use drumsync::ui::components::keys::LANES;
use drumsync::ui::skin::Skin;
use log::{LevelFilter, debug, info};
use serde::Serialize;
use std::error::Error;

const SURFACE: [f32; 2] = [1280.0, 720.0];
const FRAME_MS: i64 = 16;
const BPM: f64 = 150.0;
const SPEED: f32 = 0.6;

/// One line of `--json` output.
#[derive(Serialize)]
struct FrameSummary {
    time: i64,
    objects: usize,
    visible: usize,
    dancer: String,
    overlay: usize,
    judgment: Option<&'static str>,
    combo: u32,
    lit: [bool; LANES],
}

/// Synthetic chart: a measure line every bar, alternating taps, one roll and
/// one shake.
fn demo_chart() -> Chart {
    let beat = (60000.0 / BPM) as i64;
    let mut chart = Chart::default();

    for bar in 0..12 {
        chart.bars.push(Bar::new(bar * 4 * beat, SPEED));
    }
    for i in 0..16 {
        let color = if i % 3 == 2 { NoteColor::Blue } else { NoteColor::Red };
        let size = if i % 8 == 7 { NoteSize::Big } else { NoteSize::Normal };
        chart.notes.push(Note::tap(2000 + i * beat, SPEED, color, size));
    }
    let roll = Note::roll(2000 + 17 * beat, 4 * beat, SPEED, NoteSize::Normal);
    chart.dots = Dot::for_roll(&roll, 9);
    chart.rolls.push(roll);
    chart.shakes.push(Note::shake(2000 + 24 * beat, 6 * beat, SPEED, 12));
    chart
}

/// Stand-in for the scorer: judges taps as they reach the hit line, plays
/// about two thirds of the roll ticks, and drums the shake every fifth frame.
struct Autoplay {
    combo: u32,
    frame: u64,
    pressed: [bool; LANES],
}

impl Autoplay {
    fn step(&mut self, chart: &mut Chart, now: i64) -> FrameInput {
        self.frame += 1;
        let last_pressed = self.pressed;
        let mut pressed = [false; LANES];
        let mut judgment = Judgment::NONE;
        let mut big = false;
        let (mut hit, mut miss) = (false, false);

        for (i, note) in chart.notes.iter_mut().enumerate() {
            if note.marked || note.time > now {
                continue;
            }
            note.mark();
            judgment = match i % 7 {
                6 => MISS,
                3 => GOOD,
                _ => COOL,
            };
            big = note.size == NoteSize::Big;
            if judgment.is_miss() {
                miss = true;
                self.combo = 0;
            } else {
                hit = true;
                self.combo += 1;
                let lane = if note.color == NoteColor::Blue { 0 } else { 1 };
                pressed[lane] = true;
                if big {
                    pressed[LANES - 1 - lane] = true;
                }
            }
        }

        for (i, dot) in chart.dots.iter_mut().enumerate() {
            if dot.time <= now {
                dot.mark(i % 3 != 2);
            }
        }

        let mut staged = None;
        for shake in chart.shakes.iter_mut() {
            if shake.time <= now && now < shake.end_time() {
                if self.frame % 5 == 0 {
                    shake.credit_tick();
                    pressed[1] = true;
                }
                staged = Some(*shake);
            }
        }

        self.pressed = pressed;
        FrameInput {
            time: now,
            bpm: BPM,
            last_pressed,
            pressed,
            judgment,
            big,
            combo: self.combo,
            hit,
            miss,
            highlight: (5000..9000).contains(&now),
            staged,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .filter_module("drumsync::ui::components::overlay", LevelFilter::Warn)
        .filter_module("drumsync::ui::components", LevelFilter::Debug)
        .init();

    let json = std::env::args().skip(1).any(|a| a == "--json");

    let config = config::load(CONFIG_PATH);
    let mut chart = demo_chart();
    let mut state = gameplay::init(&config, Skin::standard(SURFACE[0], SURFACE[1]), SURFACE);
    let mut player = Autoplay { combo: 0, frame: 0, pressed: [false; LANES] };

    let end = chart.end_time() + 1000;
    info!("Playing demo chart to {}ms at {} bpm.", end, BPM);

    let mut now = 0;
    while now <= end {
        let input = player.step(&mut chart, now);
        gameplay::update(&mut state, &input);
        let list = gameplay::draw(&state, &chart);

        let summary = FrameSummary {
            time: now,
            objects: list.len(),
            visible: list.visible_count(),
            dancer: format!("{:?}", state.dancer_mode()),
            overlay: state.overlay(),
            judgment: state.judgment().is_valid().then(|| state.judgment().kind.label()),
            combo: input.combo,
            lit: std::array::from_fn(|lane| state.is_lit(lane)),
        };
        if json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            debug!(
                "{}ms: {} objects ({} visible), dancer {}, combo {}",
                summary.time, summary.objects, summary.visible, summary.dancer, summary.combo
            );
        }
        now += FRAME_MS;
    }

    info!("Demo finished after {} frames.", player.frame);
    Ok(())
}
