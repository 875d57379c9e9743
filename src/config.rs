use configparser::ini::Ini;
use log::{info, warn};
use std::path::Path;
use std::str::FromStr;

use crate::game::timeline::VisibleRange;
use crate::ui::color;

pub const CONFIG_PATH: &str = "drumsync.ini";

/// Tunables for the drum field. Built once and handed to `gameplay::init`;
/// components copy what they need at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    // Positions (relative to the hit line) outside this window are culled.
    pub min_position: f32,
    pub max_position: f32,
    /// Alpha multiplier for the field sprite.
    pub field_darkness: f32,
    /// Alpha multiplier for the fitted background image; 0 hides it.
    pub bg_brightness: f32,
    /// Distance over which roll heads fade (alpha = pos / distance).
    pub roll_fade_distance: f32,
    pub shake_border_start: f32,
    pub shake_border_ramp_ms: f32,
    /// Frames a lane key stays lit after a press.
    pub key_max_countdown: i32,
    /// Frames a judgment stays on screen.
    pub judgment_max_countdown: i32,
    /// Miss tilt is drawn from [-range, range] radians.
    pub miss_angle_range: f64,
    /// Normalized lifetime during which a fresh judgment pops.
    pub judgment_pop_window: f64,
    pub dancer_combo_step: u32,
    pub dancer_combo_window: u32,
    /// How many dance periods the negative mood lasts after a miss.
    pub dancer_miss_cycles: f64,
    pub dot_miss_zoom: f32,
    pub roll_color: [f32; 4],
    pub dot_ready_color: [f32; 4],
    pub dot_hit_color: [f32; 4],
    pub dot_miss_color: [f32; 4],
    pub clear_color: [f32; 4],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_position: -400.0,
            max_position: 1300.0,
            field_darkness: 0.7,
            bg_brightness: 0.6,
            roll_fade_distance: 400.0,
            shake_border_start: 0.25,
            shake_border_ramp_ms: 80.0,
            key_max_countdown: 15,
            judgment_max_countdown: 40,
            miss_angle_range: 2.5 / 24.0,
            judgment_pop_window: 0.15,
            dancer_combo_step: 50,
            dancer_combo_window: 5,
            dancer_miss_cycles: 4.0,
            dot_miss_zoom: 1.5,
            roll_color: color::rgba_hex(color::ROLL_HEX),
            dot_ready_color: color::rgba_hex(color::DOT_READY_HEX),
            dot_hit_color: color::rgba_hex(color::DOT_HIT_HEX),
            dot_miss_color: color::rgba_hex(color::DOT_MISS_HEX),
            clear_color: color::rgba_hex(color::CLEAR_HEX),
        }
    }
}

impl Config {
    pub const fn visible_range(&self) -> VisibleRange {
        VisibleRange::new(self.min_position, self.max_position)
    }

    /// Reads every known key, keeping defaults for anything missing or
    /// unparsable, then clamps values into their usable ranges.
    pub fn from_ini(conf: &Ini) -> Self {
        let default = Self::default();
        let mut cfg = Self {
            min_position: read(conf, "Field", "MinPosition", default.min_position),
            max_position: read(conf, "Field", "MaxPosition", default.max_position),
            field_darkness: read(conf, "Field", "FieldDarkness", default.field_darkness),
            bg_brightness: read(conf, "Field", "BGBrightness", default.bg_brightness),
            roll_fade_distance: read(conf, "Notes", "RollFadeDistance", default.roll_fade_distance),
            shake_border_start: read(conf, "Shake", "BorderStartScale", default.shake_border_start),
            shake_border_ramp_ms: read(conf, "Shake", "BorderRampMs", default.shake_border_ramp_ms),
            key_max_countdown: read(conf, "Keys", "MaxCountdown", default.key_max_countdown),
            judgment_max_countdown: read(conf, "Judgment", "MaxCountdown", default.judgment_max_countdown),
            miss_angle_range: read(conf, "Judgment", "MissAngleRange", default.miss_angle_range),
            judgment_pop_window: read(conf, "Judgment", "PopWindow", default.judgment_pop_window),
            dancer_combo_step: read(conf, "Dancer", "ComboStep", default.dancer_combo_step),
            dancer_combo_window: read(conf, "Dancer", "ComboWindow", default.dancer_combo_window),
            dancer_miss_cycles: read(conf, "Dancer", "MissCycles", default.dancer_miss_cycles),
            ..default
        };
        cfg.normalize();
        cfg
    }

    fn normalize(&mut self) {
        if self.min_position > self.max_position {
            std::mem::swap(&mut self.min_position, &mut self.max_position);
        }
        self.field_darkness = self.field_darkness.clamp(0.0, 1.0);
        self.bg_brightness = self.bg_brightness.clamp(0.0, 1.0);
        self.roll_fade_distance = self.roll_fade_distance.max(1.0);
        self.shake_border_start = self.shake_border_start.clamp(0.0, 1.0);
        self.shake_border_ramp_ms = self.shake_border_ramp_ms.max(0.0);
        self.key_max_countdown = self.key_max_countdown.max(0);
        self.judgment_max_countdown = self.judgment_max_countdown.max(0);
        self.miss_angle_range = self.miss_angle_range.abs();
        self.judgment_pop_window = self.judgment_pop_window.clamp(0.0, 1.0);
        self.dancer_combo_step = self.dancer_combo_step.max(1);
        self.dancer_miss_cycles = self.dancer_miss_cycles.max(0.0);
    }
}

fn read<T: FromStr>(conf: &Ini, section: &str, key: &str, default: T) -> T {
    conf.get(section, key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn default_ini() -> Ini {
    let d = Config::default();
    let mut conf = Ini::new();
    let mut set = |section: &str, key: &str, value: String| {
        conf.set(section, key, Some(value));
    };
    set("Field", "MinPosition", d.min_position.to_string());
    set("Field", "MaxPosition", d.max_position.to_string());
    set("Field", "FieldDarkness", d.field_darkness.to_string());
    set("Field", "BGBrightness", d.bg_brightness.to_string());
    set("Notes", "RollFadeDistance", d.roll_fade_distance.to_string());
    set("Shake", "BorderStartScale", d.shake_border_start.to_string());
    set("Shake", "BorderRampMs", d.shake_border_ramp_ms.to_string());
    set("Keys", "MaxCountdown", d.key_max_countdown.to_string());
    set("Judgment", "MaxCountdown", d.judgment_max_countdown.to_string());
    set("Judgment", "MissAngleRange", d.miss_angle_range.to_string());
    set("Judgment", "PopWindow", d.judgment_pop_window.to_string());
    set("Dancer", "ComboStep", d.dancer_combo_step.to_string());
    set("Dancer", "ComboWindow", d.dancer_combo_window.to_string());
    set("Dancer", "MissCycles", d.dancer_miss_cycles.to_string());
    conf
}

fn create_default_config_file(path: &Path) -> Result<(), std::io::Error> {
    info!("'{}' not found, creating with default values.", path.display());
    default_ini().write(path)
}

/// Loads `path`, writing a default file first if it does not exist. Any I/O
/// or parse problem is logged and the defaults are used instead.
pub fn load<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        if let Err(e) = create_default_config_file(path) {
            warn!("Failed to create default config file: {}", e);
            return Config::default();
        }
    }

    let mut conf = Ini::new();
    match conf.load(path) {
        Ok(_) => {
            let cfg = Config::from_ini(&conf);
            info!("Loaded config from '{}'.", path.display());
            cfg
        }
        Err(e) => {
            warn!("Failed to load '{}': {}. Using defaults.", path.display(), e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Config {
        let mut conf = Ini::new();
        conf.read(text.to_string()).expect("test ini should parse");
        Config::from_ini(&conf)
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let cfg = parse("[Keys]\nMaxCountdown=10\n");
        assert_eq!(cfg.key_max_countdown, 10);
        assert_eq!(cfg.roll_fade_distance, Config::default().roll_fade_distance);
        assert_eq!(cfg.dancer_combo_step, 50);
    }

    #[test]
    fn garbage_values_fall_back() {
        let cfg = parse("[Field]\nFieldDarkness=dim\nMaxPosition=\n");
        assert_eq!(cfg.field_darkness, 0.7);
        assert_eq!(cfg.max_position, 1300.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let cfg = parse(
            "[Field]\nMinPosition=500\nMaxPosition=-50\nFieldDarkness=3\n\
             [Judgment]\nMissAngleRange=-0.2\nMaxCountdown=-4\n\
             [Dancer]\nComboStep=0\n",
        );
        assert_eq!(cfg.visible_range(), VisibleRange::new(-50.0, 500.0));
        assert_eq!(cfg.field_darkness, 1.0);
        assert_eq!(cfg.miss_angle_range, 0.2);
        assert_eq!(cfg.judgment_max_countdown, 0);
        assert_eq!(cfg.dancer_combo_step, 1);
    }

    #[test]
    fn default_file_round_trips_to_defaults() {
        let mut conf = default_ini();
        let text = conf.writes();
        conf = Ini::new();
        conf.read(text).expect("generated ini should parse");
        assert_eq!(Config::from_ini(&conf), Config::default());
    }
}
