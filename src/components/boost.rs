// Timed speed boost with cooldown.

use bevy::prelude::*;
use std::time::Duration;

/// Where the boost currently is in its Ready -> Active -> Cooldown cycle.
#[derive(Debug, Clone)]
pub enum BoostPhase {
    Ready,
    Active(Timer),
    Cooldown(Timer),
}

/// Phase change reported by [`SpeedBoost::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostTransition {
    /// Active time ran out, cooldown has started.
    Ended,
    /// Cooldown ran out, the boost can be triggered again.
    Ready,
}

/// Speed boost state for the submarine.
///
/// The multiplier itself lives on [`SubmarineController`](super::SubmarineController);
/// this component only tracks timing.
#[derive(Component, Debug, Clone)]
pub struct SpeedBoost {
    pub phase: BoostPhase,
    /// How long the boost stays active (seconds).
    pub duration: f32,
    /// Lockout after the boost ends (seconds).
    pub cooldown: f32,
}

impl SpeedBoost {
    pub const DEFAULT_DURATION: f32 = 2.0;
    pub const DEFAULT_COOLDOWN: f32 = 5.0;

    pub fn new(duration: f32, cooldown: f32) -> Self {
        Self {
            phase: BoostPhase::Ready,
            duration,
            cooldown,
        }
    }

    /// Starts the boost if it is ready. Returns false while active or cooling down.
    pub fn try_activate(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.phase = BoostPhase::Active(phase_timer(self.duration));
        true
    }

    /// Advances the running timer. At most one phase change happens per call;
    /// time left over past a finished timer is dropped.
    pub fn tick(&mut self, delta: Duration) -> Option<BoostTransition> {
        match &mut self.phase {
            BoostPhase::Ready => None,
            BoostPhase::Active(timer) => {
                timer.tick(delta);
                if timer.finished() {
                    self.phase = BoostPhase::Cooldown(phase_timer(self.cooldown));
                    Some(BoostTransition::Ended)
                } else {
                    None
                }
            }
            BoostPhase::Cooldown(timer) => {
                timer.tick(delta);
                if timer.finished() {
                    self.phase = BoostPhase::Ready;
                    Some(BoostTransition::Ready)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, BoostPhase::Ready)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, BoostPhase::Active(_))
    }

    /// 1.0 right after the boost ends, 0.0 when ready or active.
    pub fn cooldown_fraction_remaining(&self) -> f32 {
        match &self.phase {
            BoostPhase::Cooldown(timer) => timer.fraction_remaining(),
            _ => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            BoostPhase::Ready => "Ready",
            BoostPhase::Active(_) => "Active",
            BoostPhase::Cooldown(_) => "Cooldown",
        }
    }
}

/// Longest boost or cooldown accepted from tuning (one hour).
pub const MAX_PHASE_SECS: f32 = 3600.0;

/// One-shot timer for a boost phase. Out-of-range or NaN lengths are
/// clamped into `0..=MAX_PHASE_SECS` instead of panicking in `Duration`.
fn phase_timer(secs: f32) -> Timer {
    let secs = secs.max(0.0).min(MAX_PHASE_SECS);
    Timer::new(Duration::from_secs_f32(secs), TimerMode::Once)
}

impl Default for SpeedBoost {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION, Self::DEFAULT_COOLDOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn test_starts_ready() {
        let boost = SpeedBoost::default();
        assert!(boost.is_ready());
        assert!(!boost.is_active());
        assert_eq!(boost.cooldown_fraction_remaining(), 0.0);
    }

    #[test]
    fn test_full_cycle() {
        let mut boost = SpeedBoost::new(1.0, 2.0);
        assert!(boost.try_activate());
        assert!(boost.is_active());

        assert_eq!(boost.tick(secs(0.5)), None);
        assert!(boost.is_active());

        assert_eq!(boost.tick(secs(0.5)), Some(BoostTransition::Ended));
        assert!(!boost.is_active());
        assert_eq!(boost.label(), "Cooldown");

        assert_eq!(boost.tick(secs(1.0)), None);
        assert!((boost.cooldown_fraction_remaining() - 0.5).abs() < 1e-4);

        assert_eq!(boost.tick(secs(1.0)), Some(BoostTransition::Ready));
        assert!(boost.is_ready());
    }

    #[test]
    fn test_cannot_retrigger_while_active_or_cooling() {
        let mut boost = SpeedBoost::new(1.0, 2.0);
        assert!(boost.try_activate());
        assert!(!boost.try_activate());

        boost.tick(secs(1.0));
        assert!(!boost.try_activate());
        assert_eq!(boost.label(), "Cooldown");

        boost.tick(secs(2.0));
        assert!(boost.try_activate());
    }

    #[test]
    fn test_large_delta_changes_one_phase() {
        let mut boost = SpeedBoost::new(1.0, 2.0);
        boost.try_activate();

        // A long hitch ends the boost but does not eat into the cooldown
        assert_eq!(boost.tick(secs(10.0)), Some(BoostTransition::Ended));
        assert!((boost.cooldown_fraction_remaining() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_oversized_cooldown_does_not_panic() {
        let mut boost = SpeedBoost::new(1.0, 1e30);
        boost.try_activate();
        assert_eq!(boost.tick(secs(1.0)), Some(BoostTransition::Ended));
        assert_eq!(boost.tick(secs(MAX_PHASE_SECS)), Some(BoostTransition::Ready));
    }

    #[test]
    fn test_tick_when_ready_is_noop() {
        let mut boost = SpeedBoost::default();
        assert_eq!(boost.tick(secs(100.0)), None);
        assert!(boost.is_ready());
    }
}
