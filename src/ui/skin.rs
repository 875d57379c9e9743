use crate::ui::sprite::Sprite;

// Texture keys the asset loader is expected to register.
const BACKGROUND: &str = "drum/bg.png";
const FIELD: &str = "drum/field.png";
const HINTS: [&str; 2] = ["drum/hint.png", "drum/hint-glow.png"];
const BAR: &str = "drum/bar.png";
const NOTES: [[&str; 4]; 2] = [
    ["drum/note/red.png", "drum/note/blue.png", "drum/note/yellow.png", "drum/note/purple.png"],
    ["drum/note/big-red.png", "drum/note/big-blue.png", "drum/note/big-yellow.png", "drum/note/big-purple.png"],
];
const OVERLAYS: [[&str; 2]; 2] = [
    ["drum/note/overlay-0.png", "drum/note/overlay-1.png"],
    ["drum/note/big-overlay-0.png", "drum/note/big-overlay-1.png"],
];
const ROLL_HEADS: [&str; 2] = ["drum/roll/head.png", "drum/roll/big-head.png"];
const ROLL_BODIES: [&str; 2] = ["drum/roll/body.png", "drum/roll/big-body.png"];
const ROLL_TAILS: [&str; 2] = ["drum/roll/tail.png", "drum/roll/big-tail.png"];
const DOT: &str = "drum/roll/dot.png";
const SHAKE_BORDER: &str = "drum/shake/border.png";
const SHAKE_FILL: &str = "drum/shake/shake.png";
const KEY_FIELD: &str = "drum/key/field.png";
const KEYS: [&str; 4] = [
    "drum/key/left-rim.png",
    "drum/key/left-face.png",
    "drum/key/right-face.png",
    "drum/key/right-rim.png",
];
// Indexed like DancerMode: idle, highlighted, positive, negative.
const DANCER: [&[&str]; 4] = [
    &["drum/dancer/idle-0.png", "drum/dancer/idle-1.png", "drum/dancer/idle-2.png", "drum/dancer/idle-3.png"],
    &["drum/dancer/high-0.png", "drum/dancer/high-1.png", "drum/dancer/high-2.png", "drum/dancer/high-3.png"],
    &[
        "drum/dancer/yes-0.png", "drum/dancer/yes-1.png", "drum/dancer/yes-2.png",
        "drum/dancer/yes-3.png", "drum/dancer/yes-4.png", "drum/dancer/yes-5.png",
    ],
    &["drum/dancer/no-0.png", "drum/dancer/no-1.png", "drum/dancer/no-2.png", "drum/dancer/no-3.png"],
];
const JUDGMENTS: [[&str; 3]; 2] = [
    ["drum/judgment/cool.png", "drum/judgment/good.png", "drum/judgment/miss.png"],
    ["drum/judgment/big-cool.png", "drum/judgment/big-good.png", "drum/judgment/big-miss.png"],
];

/// Native size of the background art the fit transform shrinks into the surface.
pub const BACKGROUND_SIZE: [f32; 2] = [1920.0, 1080.0];

/// Every sprite the drum field draws, already placed for one surface size.
/// Scrolling sprites sit at the hit line; components shift them by position.
#[derive(Debug, Clone)]
pub struct Skin {
    pub background: Option<Sprite>,
    pub field: Sprite,
    pub hints: [Sprite; 2],
    pub bar: Sprite,
    pub notes: [[Sprite; 4]; 2],
    pub overlays: [[Sprite; 2]; 2],
    pub roll_heads: [Sprite; 2],
    pub roll_bodies: [Sprite; 2],
    pub roll_tails: [Sprite; 2],
    pub dot: Sprite,
    pub shake_border: Sprite,
    pub shake_fill: Sprite,
    pub key_field: Sprite,
    pub keys: [Sprite; 4],
    pub dancer: [Vec<Sprite>; 4],
    pub judgments: [[Sprite; 3]; 2],
}

impl Skin {
    /// Default layout: a horizontal lane across the upper third, notes
    /// scrolling right to left onto a hit line near the left edge.
    pub fn standard(width: f32, height: f32) -> Self {
        let field_h = height * 0.22;
        let field_y = height * 0.3;
        let hit_x = width * 0.22;
        let note_px = [field_h * 0.55, field_h * 0.85];

        let at_hit = |key: &'static str, px: f32| Sprite::new(key, px, px).at(hit_x, field_y);

        let key_w = hit_x * 0.8;
        let key_x = hit_x * 0.45;
        let dancer_px = field_h * 1.4;

        Self {
            background: Some(
                Sprite::new(BACKGROUND, BACKGROUND_SIZE[0], BACKGROUND_SIZE[1]).aligned(0.0, 0.0),
            ),
            field: Sprite::new(FIELD, width, field_h).aligned(0.0, 0.5).at(0.0, field_y),
            hints: HINTS.map(|k| at_hit(k, note_px[0] * 1.1)),
            bar: Sprite::new(BAR, 2.0, field_h).at(hit_x, field_y),
            notes: [0, 1].map(|s| NOTES[s].map(|k| at_hit(k, note_px[s]))),
            overlays: [0, 1].map(|s| OVERLAYS[s].map(|k| at_hit(k, note_px[s]))),
            roll_heads: [0, 1].map(|s| at_hit(ROLL_HEADS[s], note_px[s])),
            roll_bodies: [0, 1].map(|s| at_hit(ROLL_BODIES[s], note_px[s]).aligned(0.0, 0.5)),
            roll_tails: [0, 1].map(|s| at_hit(ROLL_TAILS[s], note_px[s]).aligned(0.0, 0.5)),
            dot: at_hit(DOT, field_h * 0.15),
            shake_border: Sprite::new(SHAKE_BORDER, height * 0.5, height * 0.5).at(width * 0.5, height * 0.55),
            shake_fill: Sprite::new(SHAKE_FILL, height * 0.45, height * 0.45).at(width * 0.5, height * 0.55),
            key_field: Sprite::new(KEY_FIELD, key_w, field_h).at(key_x, field_y),
            keys: KEYS.map(|k| Sprite::new(k, key_w, field_h).at(key_x, field_y)),
            dancer: DANCER.map(|frames| {
                frames
                    .iter()
                    .map(|&k| Sprite::new(k, dancer_px, dancer_px).at(key_x, field_y - field_h * 1.3))
                    .collect::<Vec<_>>()
            }),
            judgments: [0, 1].map(|s| {
                JUDGMENTS[s].map(|k| {
                    Sprite::new(k, note_px[s] * 1.6, note_px[s] * 0.8).at(hit_x, field_y - field_h * 0.55)
                })
            }),
        }
    }
}
