//! Simulation constants and tuning parameters.
//!
//! Distances are in playfield units (pixels of the 1600x900 stage), times in
//! seconds. Agent movement is integrated per tick; projectiles and all timers
//! are integrated against `dt`.

/// Nominal tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Default seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Largest step a session accepts. Anything coarser breaks the per-tick movement model.
pub const MAX_DT: f32 = 0.25;

// --- Capacities ---

pub const MAX_PROTESTERS: usize = 100;
pub const MAX_POLICE: usize = 20;
pub const MAX_PROJECTILES: usize = 200;
pub const MAX_GAS_CLOUDS: usize = 5;

/// Number of scheduled helicopter appearances per session.
pub const HELICOPTER_SPAWN_COUNT: usize = 3;

// --- Stage ---

pub const STAGE_WIDTH: f32 = 1600.0;
pub const STAGE_HEIGHT: f32 = 900.0;

/// Interior clamp for agents.
pub const PLAYFIELD_MIN_X: f32 = 16.0;
pub const PLAYFIELD_MAX_X: f32 = 1584.0;
pub const PLAYFIELD_MIN_Y: f32 = 318.0;
pub const PLAYFIELD_MAX_Y: f32 = 724.0;

/// Protesters beyond this x count toward territory control.
pub const TERRITORY_LINE_X: f32 = 800.0;

/// Retreat destination x for fleeing protesters.
pub const RETREAT_LINE_X: f32 = 50.0;

// --- Session ---

/// Fixed session length (seconds).
pub const SESSION_DURATION_SECS: f64 = 300.0;

pub const GLOBAL_MORALE_START: f32 = 50.0;
pub const MORALE_MIN: f32 = 0.0;
pub const MORALE_MAX: f32 = 100.0;

/// Global morale lost per elapsed second of session time.
pub const MORALE_DECAY_PER_SEC: f32 = 0.2;

/// Global morale gained per chanting protester per tick.
pub const CHANT_GLOBAL_BOOST: f32 = 0.1;

// --- Win / lose ---

pub const WIN_MORALE_THRESHOLD: f32 = 60.0;
pub const WIN_CONTROL_FRACTION: f32 = 0.5;
pub const WIN_CONTROL_HOLD_SECS: f32 = 10.0;

pub const LOSE_MORALE_THRESHOLD: f32 = 10.0;
pub const LOSE_MIN_PROTESTERS: usize = 20;

// --- Police surge ---

/// Quiet period between the end of one surge and the start of the next.
pub const SURGE_INTERVAL_SECS: f64 = 45.0;
pub const SURGE_DURATION_SECS: f64 = 15.0;

// --- Protester spawn ---

pub const PROTESTER_SPAWN_X: (i32, i32) = (50, 300);
pub const AGENT_SPAWN_Y: (i32, i32) = (302, 740);
pub const PROTESTER_MORALE_SPAWN: (i32, i32) = (80, 100);
pub const PROTESTERS_PER_GROUP: usize = 10;

// --- Protester behavior ---

/// Distance beyond which a protester steers toward its target.
pub const SEEK_ARRIVAL_RADIUS: f32 = 10.0;
pub const SEEK_WEIGHT: f32 = 0.8;

/// Base force cap, scaled by the state speed multiplier.
pub const PROTESTER_MAX_FORCE: f32 = 2.5;

/// Velocity smoothing factor toward the steering force.
pub const VELOCITY_BLEND: f32 = 0.3;

pub const IDLE_SPEED_MULTIPLIER: f32 = 1.0;
pub const CHANT_SPEED_MULTIPLIER: f32 = 0.1;
pub const RIOT_SPEED_MULTIPLIER: f32 = 2.0;
pub const FLEE_SPEED_MULTIPLIER: f32 = 3.0;

pub const CHANT_RADIUS: f32 = 60.0;
pub const CHANT_NEIGHBOUR_BOOST: f32 = 0.1;
pub const CHANT_SELF_BOOST: f32 = 0.2;

pub const RIOT_SEEK_WEIGHT: f32 = 1.5;
pub const RIOT_STRIKE_RADIUS: f32 = 20.0;
/// Damage per second dealt to every officer within strike radius.
pub const RIOT_STRIKE_DPS: f32 = 10.0;
pub const OFFICER_KILL_MORALE_BONUS: f32 = 3.0;

pub const FLEE_REPULSION_RADIUS: f32 = 100.0;
pub const FLEE_REPULSION_WEIGHT: f32 = 2.0;
pub const FLEE_MORALE_DECAY: f32 = 0.5;
pub const FLEE_DURATION_SECS: f32 = 5.0;

pub const CROWD_SEPARATION_RADIUS: f32 = 20.0;
pub const POLICE_AVOID_RADIUS: f32 = 80.0;
pub const POLICE_AVOID_STRENGTH: f32 = 100.0;
pub const SEPARATION_WEIGHT: f32 = 2.0;

pub const STONE_COOLDOWN_SECS: f32 = 0.2;

// --- Animation ---

pub const ANIM_FAST_CYCLE_SECS: f32 = 0.2;
pub const ANIM_SLOW_CYCLE_SECS: f32 = 0.4;
pub const ANIM_FAST_FRAMES: u8 = 3;
pub const ANIM_SLOW_FRAMES: u8 = 2;

// --- Police ---

pub const POLICE_SPAWN_X: (i32, i32) = (1200, 1500);
pub const POLICE_START_HEALTH: f32 = 100.0;

pub const PATROL_ROAM_X: (i32, i32) = (800, 1500);
pub const PATROL_ROAM_Y_JITTER: i32 = 50;
pub const PATROL_SPEED: f32 = 1.0;
pub const PATROL_ARRIVAL_RADIUS: f32 = 5.0;
pub const PATROL_DAMPING: f32 = 0.9;

pub const DEPLOY_TRIGGER_RADIUS: f32 = 150.0;
pub const DEPLOY_DURATION_SECS: f32 = 3.0;
pub const GAS_TARGET_RADIUS: f32 = 200.0;

pub const INTERVENE_SPEED: f32 = 2.0;

pub const ARREST_RADIUS: f32 = 25.0;
pub const ARREST_MORALE_PENALTY: f32 = 5.0;

pub const FIRE_RANGE: f32 = 120.0;
pub const FIRE_COOLDOWN_SECS: f32 = 2.5;
pub const BULLET_SPRAY_DEGREES: i32 = 5;

// --- Projectiles ---

pub const STONE_SPEED: f32 = 350.0;
pub const STONE_DAMAGE: f32 = 25.0;
pub const STONE_HIT_RADIUS: f32 = 24.0;
pub const STONE_KNOCKBACK: f32 = 0.5;
pub const STONE_HIT_MORALE_BONUS: f32 = 2.0;

pub const BULLET_SPEED: f32 = 350.0;
pub const BULLET_DAMAGE: f32 = 30.0;
pub const BULLET_HIT_RADIUS: f32 = 8.0;
pub const BULLET_KILL_MORALE_PENALTY: f32 = 5.0;

pub const HELICOPTER_BULLET_SPEED: f32 = 400.0;
pub const HELICOPTER_BULLET_DAMAGE: f32 = 100.0;
pub const HELICOPTER_BULLET_RANGE: f32 = 1600.0;
pub const HELICOPTER_KILL_MORALE_PENALTY: f32 = 10.0;

/// Max travel for stones and police bullets.
pub const PROJECTILE_RANGE: f32 = 320.0;
pub const PROJECTILE_LIFETIME_SECS: f32 = 2.0;

// --- Tear gas ---

pub const GAS_INITIAL_RADIUS: f32 = 5.0;
pub const GAS_GROWTH_PER_SEC: f32 = 25.0;
pub const GAS_MAX_AGE_SECS: f32 = 5.0;
pub const GAS_MAX_RADIUS: f32 = 100.0;
pub const GAS_PROTESTER_MORALE_PENALTY: f32 = 15.0;
pub const GAS_GLOBAL_MORALE_PENALTY: f32 = 0.5;

// --- Helicopter ---

pub const HELICOPTER_SCHEDULE_MAX_SECS: i32 = 300;
pub const HELICOPTER_MIN_SPACING_SECS: f32 = 30.0;
pub const HELICOPTER_ENTRY_X: f32 = STAGE_WIDTH + 32.0;
pub const HELICOPTER_ENTRY_Y: f32 = 50.0;
pub const HELICOPTER_EXIT_X: f32 = -32.0;
/// Horizontal velocity, units per tick.
pub const HELICOPTER_SPEED: f32 = -4.0;
pub const HELICOPTER_BOB_FREQUENCY: f32 = 2.0;
pub const HELICOPTER_BOB_AMPLITUDE: f32 = 0.5;
pub const HELICOPTER_DWELL_SECS: (i32, i32) = (10, 20);
pub const HELICOPTER_SHOT_COOLDOWN_SECS: (i32, i32) = (2, 4);
pub const HELICOPTER_SHOT_LIMIT: u32 = 4;
pub const HELICOPTER_TARGET_PROBES: usize = 10;
