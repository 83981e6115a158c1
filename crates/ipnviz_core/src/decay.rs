//! Self-removing, multiplicatively fading effects.

use crate::color::Rgb;
use crate::config::DecayConfig;
use crate::scene::{ObjectId, Ring, Scene};

const SPLASH_MAX_DIAMETER_PX: f32 = 100.0;
const SPLASH_MAX_BORDER_PX: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayPhase {
    Active,
    Expired,
}

/// A life value in `(0, 1]` shrinking by a fixed factor per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    life: f32,
    factor: f32,
    threshold: f32,
}

impl Decay {
    pub fn new(config: &DecayConfig) -> Self {
        Self {
            life: 1.0,
            factor: config.factor,
            threshold: config.threshold,
        }
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    /// One decay step. Expires on the first step that leaves life below the
    /// threshold.
    pub fn step(&mut self) -> DecayPhase {
        self.life *= self.factor;
        if self.life < self.threshold {
            DecayPhase::Expired
        } else {
            DecayPhase::Active
        }
    }
}

/// Network event a splash announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplashKind {
    /// A node created a message: ring grows outwards.
    Creating,
    /// A message reached its destination: ring closes in.
    Delivering,
}

impl SplashKind {
    pub fn color(self) -> Rgb {
        match self {
            SplashKind::Creating | SplashKind::Delivering => Rgb::CSS_GREEN,
        }
    }

    pub fn expanding(self) -> bool {
        matches!(self, SplashKind::Creating)
    }
}

/// A ring attached to a marker that fades out over successive updates.
pub struct Splash {
    ring: ObjectId,
    kind: SplashKind,
    decay: Decay,
    alive: bool,
}

impl Splash {
    pub fn new(scene: &mut Scene, owner: ObjectId, kind: SplashKind, config: &DecayConfig) -> Self {
        let decay = Decay::new(config);
        let ring = scene.attach(owner, ring_style(kind, decay.life()));
        Self {
            ring,
            kind,
            decay,
            alive: true,
        }
    }

    /// One decay step plus a style refresh. On expiry the ring is removed from
    /// its owner right away.
    pub fn update(&mut self, scene: &mut Scene) -> DecayPhase {
        if !self.alive {
            return DecayPhase::Expired;
        }
        let phase = self.decay.step();
        if let Some(ring) = scene.get_mut::<Ring>(self.ring) {
            *ring = ring_style(self.kind, self.decay.life());
        }
        if phase == DecayPhase::Expired {
            self.alive = false;
            scene.remove(self.ring);
        }
        phase
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn life(&self) -> f32 {
        self.decay.life()
    }

    pub fn kind(&self) -> SplashKind {
        self.kind
    }

    pub fn ring(&self) -> ObjectId {
        self.ring
    }
}

/// Style derived from `life` alone; `expanding` inverts the size and border
/// curves.
fn ring_style(kind: SplashKind, life: f32) -> Ring {
    let (size, border) = if kind.expanding() {
        (1.0 - life, life)
    } else {
        (life, 1.0 - life)
    };
    Ring {
        color: kind.color(),
        alpha: (life * 2.0).min(1.0),
        diameter_px: SPLASH_MAX_DIAMETER_PX * size,
        border_px: SPLASH_MAX_BORDER_PX * border,
    }
}
