//! Entity model: shared motion state plus the satellite and debris variants
//!
//! Satellites and debris share one motion contract (`Body`) by composition;
//! everything kind-specific lives in the wrapping struct.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{heading_vector, normalize_heading};

/// Shared motion state for anything drifting through the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Display name, unique within a simulation by convention
    pub name: String,
    pub pos: Vec2,
    pub speed: f32,
    /// Heading in degrees, kept in [0, 360)
    heading: f32,
    /// One-way flag: once false, a body never reactivates
    pub active: bool,
}

impl Body {
    pub fn new(name: impl Into<String>, pos: Vec2, speed: f32, heading: f32) -> Self {
        Self {
            name: name.into(),
            pos,
            speed,
            heading: normalize_heading(heading),
            active: true,
        }
    }

    /// Heading in degrees, always in [0, 360)
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub(crate) fn set_heading(&mut self, deg: f32) {
        self.heading = normalize_heading(deg);
    }

    /// Advance one straight-line step along the current heading.
    /// Inactive bodies do not move.
    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        self.pos += self.speed * heading_vector(self.heading);
    }

    /// Permanently mark this body inactive. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Range metric used by every collision and proximity check.
    ///
    /// The two positions are summed, not subtracted, so this is *not* the
    /// Euclidean separation of the two points. All collision and warning
    /// thresholds are calibrated against this metric; correcting it would
    /// re-tune every one of them. See DESIGN.md.
    pub fn distance_to(&self, other: &Body) -> f32 {
        (self.pos + other.pos).length()
    }
}

/// Derived satellite health classification.
///
/// `Deorbited` is set only by a successful deorbit burn; the fuel-derived
/// refresh never assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SatStatus {
    Nominal,
    Warning,
    Critical,
    Deorbited,
}

impl SatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SatStatus::Nominal => "nominal",
            SatStatus::Warning => "warning",
            SatStatus::Critical => "critical",
            SatStatus::Deorbited => "deorbited",
        }
    }
}

impl fmt::Display for SatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A controllable, fuel-limited satellite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Satellite {
    pub body: Body,
    fuel: f32,
    status: SatStatus,
}

impl Satellite {
    pub fn new(name: impl Into<String>, pos: Vec2, speed: f32, heading: f32, fuel: f32) -> Self {
        Self {
            body: Body::new(name, pos, speed, heading),
            fuel,
            status: SatStatus::Nominal,
        }
    }

    pub fn name(&self) -> &str {
        &self.body.name
    }

    /// Remaining fuel, never negative after any operation returns
    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    pub fn status(&self) -> SatStatus {
        self.status
    }

    /// Command a new heading. No-op when the tanks are dry.
    pub fn change_heading(&mut self, new_heading: f32) {
        if self.fuel <= 0.0 {
            return;
        }
        self.body.set_heading(new_heading);
        self.fuel -= HEADING_FUEL_COST;
        self.refresh_status();
    }

    /// Command a new orbital speed, clamped to the controllable range.
    /// No-op when the tanks are dry.
    pub fn change_speed(&mut self, new_speed: f32) {
        if self.fuel <= 0.0 {
            return;
        }
        self.body.speed = new_speed.clamp(SAT_MIN_SPEED, SAT_MAX_SPEED);
        self.fuel -= SPEED_FUEL_COST;
        self.refresh_status();
    }

    /// Controlled deorbit burn. Succeeds only with enough fuel; on success
    /// the satellite is deactivated and its status is terminal.
    pub fn deorbit(&mut self) -> bool {
        if self.fuel >= DEORBIT_FUEL_COST {
            self.status = SatStatus::Deorbited;
            self.fuel -= DEORBIT_FUEL_COST;
            self.body.deactivate();
            true
        } else {
            false
        }
    }

    /// Per-tick update: motion plus passive fuel drain while active.
    ///
    /// Deactivated satellites skip the drain branch entirely, which is what
    /// makes `Deorbited` sticky across ticks.
    pub fn update(&mut self) {
        self.body.update();
        if self.body.active {
            self.fuel -= PASSIVE_FUEL_DRAIN;
            self.refresh_status();
        }
    }

    /// Recompute status from fuel. The fuel mutators may drive fuel
    /// transiently negative; it is clamped back to zero here, within the
    /// same operation, so negative fuel is never observable.
    fn refresh_status(&mut self) {
        if self.fuel <= 0.0 {
            self.fuel = 0.0;
            self.status = SatStatus::Critical;
        } else if self.fuel < FUEL_WARNING_THRESHOLD {
            self.status = SatStatus::Warning;
        } else {
            self.status = SatStatus::Nominal;
        }
    }
}

impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SAT {} | Pos:({:.1},{:.1}) | Fuel:{:.1}% | Status:{}",
            self.body.name, self.body.pos.x, self.body.pos.y, self.fuel, self.status
        )
    }
}

/// Debris size class, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebrisSize {
    Small,
    Medium,
    Large,
}

impl DebrisSize {
    /// Radius of the danger zone used in collision thresholds
    pub fn danger_radius(&self) -> f32 {
        match self {
            DebrisSize::Small => 15.0,
            DebrisSize::Medium => 25.0,
            DebrisSize::Large => 40.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DebrisSize::Small => "small",
            DebrisSize::Medium => "medium",
            DebrisSize::Large => "large",
        }
    }
}

impl fmt::Display for DebrisSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Passive space debris. No control surface; motion follows the shared
/// contract only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debris {
    pub body: Body,
    size: DebrisSize,
}

impl Debris {
    pub fn new(
        name: impl Into<String>,
        pos: Vec2,
        speed: f32,
        heading: f32,
        size: DebrisSize,
    ) -> Self {
        Self {
            body: Body::new(name, pos, speed, heading),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.body.name
    }

    pub fn size(&self) -> DebrisSize {
        self.size
    }

    pub fn danger_radius(&self) -> f32 {
        self.size.danger_radius()
    }

    pub fn update(&mut self) {
        self.body.update();
    }
}

impl fmt::Display for Debris {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DEB {} ({}) at ({:.1},{:.1})",
            self.body.name, self.size, self.body.pos.x, self.body.pos.y
        )
    }
}
