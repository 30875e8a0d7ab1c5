use super::constants::{
    SPRING_MAX_FRAME_SEC, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpringError {
    #[error("spring stiffness must be positive and finite, got {0}")]
    Stiffness(f32),
    #[error("spring damping must be non-negative and finite, got {0}")]
    Damping(f32),
    #[error("spring mass must be positive and finite, got {0}")]
    Mass(f32),
}

/// Physical parameters of a damped harmonic spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringProfile {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringProfile {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub const fn from_tuple(t: (f32, f32, f32)) -> Self {
        Self::new(t.0, t.1, t.2)
    }

    pub fn validate(self) -> Result<Self, SpringError> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(SpringError::Stiffness(self.stiffness));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(SpringError::Damping(self.damping));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(SpringError::Mass(self.mass));
        }
        Ok(self)
    }
}

/// A scalar that chases its target through a second-order spring.
///
/// `set_target` is the only way input reaches the spring; rendering reads
/// `value`. Once within the rest thresholds the spring snaps onto its
/// target and stops integrating, so identical input is a fixed point.
#[derive(Clone, Debug)]
pub struct Spring {
    profile: SpringProfile,
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(initial: f32, profile: SpringProfile) -> Self {
        Self {
            profile,
            value: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() || target == self.target() {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Moves value and target together without animating.
    pub fn jump(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Semi-implicit Euler with fixed-size substeps.
    pub fn step(&mut self, dt_sec: f32) {
        if self.at_rest || !(dt_sec > 0.0) {
            return;
        }
        let dt = dt_sec.min(SPRING_MAX_FRAME_SEC);
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringProfile {
            stiffness: k,
            damping: c,
            mass: m,
        } = self.profile;
        for _ in 0..steps {
            let displacement = self.value - self.target;
            let accel = (-k * displacement - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if (self.value - self.target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

/// First-order exponential follower; the time constant `tau` gives ~63%
/// of the remaining distance per `tau` seconds.
#[inline]
pub fn exp_approach(current: f32, target: f32, tau_sec: f32, dt_sec: f32) -> f32 {
    if !(dt_sec > 0.0) {
        return current;
    }
    if !(tau_sec > 0.0) {
        return target;
    }
    let alpha = 1.0 - (-dt_sec / tau_sec).exp();
    let next = current + (target - current) * alpha;
    if (target - next).abs() < SPRING_REST_DELTA {
        target
    } else {
        next
    }
}
