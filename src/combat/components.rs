//! Combat domain: teams, health, cooldowns, and projectile slots.

use bevy::prelude::*;

use crate::movement::GameLayer;

/// Team affiliation; decides projectile layers and damage routing.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Player => Team::Enemy,
            Team::Enemy => Team::Player,
        }
    }

    /// Layer this team's characters live on.
    pub fn character_layer(self) -> GameLayer {
        match self {
            Team::Player => GameLayer::Player,
            Team::Enemy => GameLayer::Enemy,
        }
    }

    /// Layer this team's projectiles live on.
    pub fn projectile_layer(self) -> GameLayer {
        match self {
            Team::Player => GameLayer::PlayerProjectile,
            Team::Enemy => GameLayer::EnemyProjectile,
        }
    }

    /// Layers this team's projectiles collide with.
    pub fn projectile_targets(self) -> [GameLayer; 3] {
        [
            GameLayer::Ground,
            GameLayer::Wall,
            self.opponent().character_layer(),
        ]
    }
}

/// What one health resolve tick concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTick {
    Unharmed,
    Damaged,
    /// Hit points reached zero; the entity must deactivate this tick.
    Depleted,
}

/// Hit points with a per-tick pending-hit flag.
///
/// Any number of projectile contacts within one tick set the same flag, so
/// at most one hit point is lost per resolve tick.
#[derive(Component, Debug, Clone)]
pub struct Health {
    max: i32,
    current: i32,
    pending_hit: bool,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            max,
            current: max,
            pending_hit: false,
        }
    }

    /// Collision callback entry: flag a hit for the next resolve tick.
    pub fn register_hit(&mut self) {
        self.pending_hit = true;
    }

    /// Consume the pending-hit flag, decrementing at most one hit point.
    /// The flag is cleared whether or not it was set.
    pub fn resolve(&mut self) -> HealthTick {
        let was_hit = self.pending_hit;
        if was_hit {
            self.current -= 1;
        }
        self.pending_hit = false;

        if self.current <= 0 {
            HealthTick::Depleted
        } else if was_hit {
            HealthTick::Damaged
        } else {
            HealthTick::Unharmed
        }
    }

    /// Refill to full, dropping any pending hit. Used on episode respawn.
    pub fn restore(&mut self) {
        self.current = self.max;
        self.pending_hit = false;
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

/// Cooldown gate between ranged attacks.
///
/// The timer starts already elapsed so the first attack is never blocked,
/// and accumulates every tick after the gate is evaluated.
#[derive(Component, Debug, Clone)]
pub struct AttackCooldown {
    timer: f32,
    threshold: f32,
}

impl AttackCooldown {
    pub fn new(threshold: f32) -> Self {
        Self {
            timer: f32::INFINITY,
            threshold,
        }
    }

    /// A fire is allowed only strictly past the threshold.
    pub fn ready(&self) -> bool {
        self.timer > self.threshold
    }

    /// Record a fire this tick.
    pub fn fire(&mut self) {
        self.timer = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer += dt;
    }

    pub fn elapsed(&self) -> f32 {
        self.timer
    }
}

/// Local offset from the body center to the projectile spawn point.
/// The x component mirrors with facing.
#[derive(Component, Debug, Clone, Copy)]
pub struct FirePoint(pub Vec2);

impl FirePoint {
    pub fn world_offset(self, facing_sign: f32) -> Vec2 {
        Vec2::new(self.0.x * facing_sign, self.0.y)
    }
}

/// Seconds a projectile may fly before expiring on its own.
pub const MAX_FLIGHT_SECONDS: f32 = 2.0;

/// What one projectile update tick concluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightTick {
    /// Slot is parked; nothing to do.
    Dormant,
    /// A contact was flagged earlier; the slot deactivates now.
    Impact,
    /// Normal flight: translate by `dx`, then park if `expired`.
    Step { dx: f32, expired: bool },
}

/// One reusable projectile slot.
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    speed: f32,
    direction: f32,
    lifetime: f32,
    hit: bool,
    in_flight: bool,
}

impl Projectile {
    /// A parked slot that has never flown.
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: 1.0,
            lifetime: 0.0,
            hit: false,
            in_flight: false,
        }
    }

    /// (Re)launch the slot, interrupting any current flight: lifetime and
    /// hit flag reset, direction takes the new sign.
    pub fn launch(&mut self, direction: f32) {
        self.direction = direction;
        self.lifetime = 0.0;
        self.hit = false;
        self.in_flight = true;
    }

    /// Collision callback entry. Returns true only on the first contact of
    /// a flight; repeat contacts are no-ops.
    pub fn mark_hit(&mut self) -> bool {
        if self.in_flight && !self.hit {
            self.hit = true;
            true
        } else {
            false
        }
    }

    pub fn advance(&mut self, dt: f32) -> FlightTick {
        if !self.in_flight {
            return FlightTick::Dormant;
        }
        if self.hit {
            self.in_flight = false;
            return FlightTick::Impact;
        }

        let dx = self.speed * self.direction * dt;
        self.lifetime += dt;
        let expired = self.lifetime > MAX_FLIGHT_SECONDS;
        if expired {
            self.in_flight = false;
        }
        FlightTick::Step { dx, expired }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn was_hit(&self) -> bool {
        self.hit
    }
}

/// Index-ordered projectile slots owned by exactly one shooter.
#[derive(Component, Debug)]
pub struct ProjectilePool {
    slots: Vec<Entity>,
}

impl ProjectilePool {
    pub fn new(slots: Vec<Entity>) -> Self {
        Self { slots }
    }

    /// Pick the lowest-index free slot; with every slot in flight, fall back
    /// to slot 0, interrupting that flight.
    pub fn select_slot(&self, is_free: impl Fn(Entity) -> bool) -> Option<Entity> {
        self.slots
            .iter()
            .copied()
            .find(|slot| is_free(*slot))
            .or_else(|| self.slots.first().copied())
    }

    pub fn slots(&self) -> &[Entity] {
        &self.slots
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
