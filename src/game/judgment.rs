#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JudgeKind {
    Cool,
    Good,
    Miss,
}

/// Sprite order for judgment graphics.
pub const JUDGE_KINDS: [JudgeKind; 3] = [JudgeKind::Cool, JudgeKind::Good, JudgeKind::Miss];

impl JudgeKind {
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::Cool => 0,
            Self::Good => 1,
            Self::Miss => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cool => "COOL",
            Self::Good => "GOOD",
            Self::Miss => "MISS",
        }
    }
}

/// Accuracy category plus its timing-window width in ms. A zero window is the
/// empty judgment: "nothing was judged this frame".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Judgment {
    pub kind: JudgeKind,
    pub window: i64,
}

pub const COOL: Judgment = Judgment::new(JudgeKind::Cool, 25);
pub const GOOD: Judgment = Judgment::new(JudgeKind::Good, 60);
pub const MISS: Judgment = Judgment::new(JudgeKind::Miss, 100);

impl Judgment {
    pub const NONE: Self = Self { kind: JudgeKind::Cool, window: 0 };

    pub const fn new(kind: JudgeKind, window: i64) -> Self {
        Self { kind, window }
    }

    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.window != 0
    }

    /// Category test; the empty judgment belongs to no category.
    #[inline(always)]
    pub fn is(&self, kind: JudgeKind) -> bool {
        self.is_valid() && self.kind == kind
    }

    #[inline(always)]
    pub fn is_miss(&self) -> bool {
        self.is(JudgeKind::Miss)
    }
}

impl Default for Judgment {
    fn default() -> Self {
        Self::NONE
    }
}
