use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::config::SpringConfig;

// Largest integration step. Frames are split into substeps of at most this
// size so stiff constants stay stable at low frame rates.
const MAX_SUBSTEP: f64 = 0.001;

/// Damped second-order follower: x'' = (-k (x - target) - c x') / m.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    settled: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
            settled: true,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn set_target(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.settled = false;
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if self.settled || dt <= 0.0 {
            return;
        }
        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as usize;
        let h = dt / substeps as f64;
        let SpringConfig { stiffness, damping, mass, .. } = self.config;

        for _ in 0..substeps {
            let accel = (-stiffness * (self.position - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if (self.position - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

/// Interval period for `use_spring`; 0 stops the interval.
fn sample_period(running: bool, frame_ms: u32) -> u32 {
    if running {
        frame_ms
    } else {
        0
    }
}

/// Smoothed version of `target`, sampled every `frame_ms` while the spring
/// is moving. The sampling interval stops once it settles.
#[hook]
pub fn use_spring(target: f64, config: SpringConfig, frame_ms: u32) -> f64 {
    let spring = use_mut_ref(|| Spring::new(config, target));
    let value = use_state_eq(|| target);
    let running = use_state_eq(|| false);

    {
        let spring = spring.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |target: &f64| {
                let settled = {
                    let mut spring = spring.borrow_mut();
                    spring.set_target(*target);
                    spring.is_settled()
                };
                running.set(!settled);
                || ()
            },
            target,
        );
    }

    {
        let period = sample_period(*running, frame_ms);
        let value = value.clone();
        let running = running.clone();
        let dt = frame_ms as f64 / 1000.0;
        use_interval(
            move || {
                let (position, settled) = {
                    let mut spring = spring.borrow_mut();
                    spring.step(dt);
                    (spring.position(), spring.is_settled())
                };
                value.set(position);
                if settled {
                    running.set(false);
                }
            },
            period,
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(FRAME);
        }
    }

    #[test]
    fn starts_settled_at_initial_value() {
        let spring = Spring::new(SpringConfig::default(), 0.25);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 0.25);
    }

    #[test]
    fn converges_and_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(0.5);
        assert!(!spring.is_settled());
        run(&mut spring, 180);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 0.5);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn approaches_without_jumping() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        spring.step(FRAME);
        // one frame in, well short of the target
        assert!(spring.position() > 0.0);
        assert!(spring.position() < 0.5);
    }

    #[test]
    fn default_constants_do_not_overshoot() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        for _ in 0..240 {
            spring.step(FRAME);
            assert!(spring.position() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn large_frame_gaps_stay_stable() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        spring.step(0.5);
        assert!(spring.position().is_finite());
        assert!(spring.position() <= 1.0 + 1e-9);
    }

    #[test]
    fn retargeting_mid_flight_follows_new_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        run(&mut spring, 5);
        spring.set_target(0.2);
        run(&mut spring, 240);
        assert_eq!(spring.target(), 0.2);
        assert_eq!(spring.position(), 0.2);
    }

    #[test]
    fn sampling_only_runs_while_moving() {
        assert_eq!(sample_period(true, 16), 16);
        assert_eq!(sample_period(false, 16), 0);
    }

    #[test]
    fn same_target_keeps_spring_at_rest() {
        let mut spring = Spring::new(SpringConfig::default(), 0.4);
        spring.set_target(0.4);
        assert!(spring.is_settled());
        spring.step(FRAME);
        assert_eq!(spring.position(), 0.4);
    }
}
