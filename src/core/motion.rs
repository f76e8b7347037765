//! Grid-locked movement with smooth glide and turn animation.
//!
//! The grid cell and facing change the moment a request is accepted; the
//! continuous pose used for rendering catches up over the animation.
use crate::core::map::WorldMap;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

/// Wraps into `[0, 2π)`.
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    let w = a.rem_euclid(TAU);
    // rem_euclid rounds tiny negatives up to exactly TAU
    if w >= TAU { 0.0 } else { w }
}

/// Cardinal facing. North is the +X axis at angle 0; left turns go
/// North -> East -> South -> West and decrease the angle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    const ORDER: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn turned(self, turn: Turn) -> Self {
        let step = match turn {
            Turn::Left => 1,
            Turn::Right => 3,
        };
        Self::ORDER[(self.index() + step) % 4]
    }

    /// Grid offset of one step forward.
    pub fn forward(self) -> (i32, i32) {
        match self {
            Facing::North => (1, 0),
            Facing::East => (0, -1),
            Facing::South => (-1, 0),
            Facing::West => (0, 1),
        }
    }

    pub fn angle(self) -> f64 {
        wrap_angle(-(self.index() as f64) * FRAC_PI_2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// One grid step. `Forward`/`Backward` follow the facing; the rest are
/// fixed world axes used by the top-down view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    pub fn offset(self, facing: Facing) -> (i32, i32) {
        match self {
            Step::Forward => facing.forward(),
            Step::Backward => {
                let (dx, dy) = facing.forward();
                (-dx, -dy)
            }
            Step::Up => (0, -1),
            Step::Down => (0, 1),
            Step::Left => (-1, 0),
            Step::Right => (1, 0),
        }
    }
}

/// Continuous camera pose in map-cell units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Pose {
    /// Centre of a grid cell.
    pub fn centered(gx: i32, gy: i32, facing: Facing) -> Self {
        Self { x: gx as f64 + 0.5, y: gy as f64 + 0.5, angle: facing.angle() }
    }

    #[inline]
    pub fn direction(&self) -> (f64, f64) {
        (self.angle.cos(), self.angle.sin())
    }
}

/// At most one animation runs at a time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Animation {
    Idle,
    Moving { from: (f64, f64), to: (f64, f64), started: Duration },
    Rotating { from: f64, to: f64, started: Duration },
}

/// Fraction of `duration` covered by `elapsed`, or `None` once finished.
fn progress(elapsed: Duration, duration: Duration) -> Option<f64> {
    if duration.is_zero() {
        return None;
    }
    let t = elapsed.as_nanos() as f64 / duration.as_nanos() as f64;
    (t < 1.0).then_some(t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub struct MotionController {
    grid_x: i32,
    grid_y: i32,
    facing: Facing,
    pose: Pose,
    animation: Animation,
    move_duration: Duration,
    rotate_duration: Duration,
}

impl MotionController {
    pub fn new(grid_x: i32, grid_y: i32, facing: Facing, move_duration: Duration, rotate_duration: Duration) -> Self {
        let pose = Pose::centered(grid_x, grid_y, facing);
        Self::with_pose(grid_x, grid_y, facing, pose, move_duration, rotate_duration)
    }

    /// Like `new` but with an explicit starting pose.
    pub fn with_pose(
        grid_x: i32,
        grid_y: i32,
        facing: Facing,
        pose: Pose,
        move_duration: Duration,
        rotate_duration: Duration,
    ) -> Self {
        Self {
            grid_x,
            grid_y,
            facing,
            pose: Pose { angle: wrap_angle(pose.angle), ..pose },
            animation: Animation::Idle,
            move_duration,
            rotate_duration,
        }
    }

    #[inline] pub fn grid(&self) -> (i32, i32) { (self.grid_x, self.grid_y) }
    #[inline] pub fn facing(&self) -> Facing { self.facing }
    #[inline] pub fn pose(&self) -> Pose { self.pose }
    #[inline] pub fn animation(&self) -> Animation { self.animation }
    #[inline] pub fn is_idle(&self) -> bool { matches!(self.animation, Animation::Idle) }

    /// Starts a step if idle and the target cell is walkable. Returns
    /// whether the request was accepted.
    pub fn request_move(&mut self, step: Step, map: &WorldMap, now: Duration) -> bool {
        if !self.is_idle() {
            return false;
        }
        let (dx, dy) = step.offset(self.facing);
        let (nx, ny) = (self.grid_x + dx, self.grid_y + dy);
        if !map.is_walkable(nx, ny) {
            log::debug!("move {:?} to ({}, {}) blocked", step, nx, ny);
            return false;
        }
        self.animation = Animation::Moving {
            from: (self.pose.x, self.pose.y),
            to: (nx as f64 + 0.5, ny as f64 + 0.5),
            started: now,
        };
        self.grid_x = nx;
        self.grid_y = ny;
        true
    }

    /// Starts a quarter turn if idle.
    pub fn request_turn(&mut self, turn: Turn, now: Duration) -> bool {
        if !self.is_idle() {
            return false;
        }
        let from = self.pose.angle;
        let to = match turn {
            Turn::Left => from - FRAC_PI_2,
            Turn::Right => from + FRAC_PI_2,
        };
        self.facing = self.facing.turned(turn);
        self.animation = Animation::Rotating { from, to, started: now };
        true
    }

    /// Advances the running animation to time `now`.
    pub fn update(&mut self, now: Duration) {
        match self.animation {
            Animation::Idle => {}
            Animation::Moving { from, to, started } => {
                match progress(now.saturating_sub(started), self.move_duration) {
                    Some(t) => {
                        self.pose.x = lerp(from.0, to.0, t);
                        self.pose.y = lerp(from.1, to.1, t);
                    }
                    None => {
                        self.pose.x = to.0;
                        self.pose.y = to.1;
                        self.animation = Animation::Idle;
                    }
                }
            }
            Animation::Rotating { from, to, started } => {
                let angle = match progress(now.saturating_sub(started), self.rotate_duration) {
                    Some(t) => lerp(from, to, t),
                    None => {
                        self.animation = Animation::Idle;
                        to
                    }
                };
                self.pose.angle = wrap_angle(angle);
            }
        }
    }
}
