//! Timed status channels for a combat unit.
//!
//! Every status is a duration counter plus an associated magnitude. A status
//! is active while its counter is above zero; counters are decremented at the
//! start of the owner's turn. Reapplying an active status never stacks:
//! both duration and magnitude take the maximum of the old and new values.

use super::common::UnitId;

/// Duration plus integer magnitude (armor break, stat buffs, DOTs).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedValue {
    pub turns: u8,
    pub value: u32,
}

impl TimedValue {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.turns > 0
    }

    /// Magnitude while active, zero otherwise.
    #[inline]
    pub fn active_value(&self) -> u32 {
        if self.turns > 0 { self.value } else { 0 }
    }

    /// Reapply with max-not-stack semantics.
    pub fn extend(&mut self, turns: u8, value: u32) {
        self.turns = self.turns.max(turns);
        self.value = self.value.max(value);
    }

    /// Decrement one turn, clearing the magnitude on expiry.
    pub fn tick(&mut self) {
        if self.turns > 0 {
            self.turns -= 1;
        }
        if self.turns == 0 {
            self.value = 0;
        }
    }
}

/// Duration plus fractional magnitude (reflect, evade shifts).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedPct {
    pub turns: u8,
    pub value: f64,
}

impl TimedPct {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.turns > 0
    }

    #[inline]
    pub fn active_value(&self) -> f64 {
        if self.turns > 0 { self.value } else { 0.0 }
    }

    pub fn extend(&mut self, turns: u8, value: f64) {
        self.turns = self.turns.max(turns);
        self.value = self.value.max(value);
    }

    pub fn tick(&mut self) {
        if self.turns > 0 {
            self.turns -= 1;
        }
        if self.turns == 0 {
            self.value = 0.0;
        }
    }
}

/// Taunt carries the unit that must be attacked instead of a magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Taunt {
    pub turns: u8,
    pub target: Option<UnitId>,
}

impl Taunt {
    pub fn apply(&mut self, turns: u8, target: UnitId) {
        self.turns = self.turns.max(turns);
        self.target = Some(target);
    }

    pub fn tick(&mut self) {
        if self.turns > 0 {
            self.turns -= 1;
        }
        if self.turns == 0 {
            self.target = None;
        }
    }

    /// The forced target while the taunt lasts.
    pub fn forced_target(&self) -> Option<UnitId> {
        if self.turns > 0 { self.target } else { None }
    }
}

/// The fixed set of status channels a unit can carry.
///
/// Control effects (freeze/stun/sleep/silence) are bare counters; everything
/// else pairs a counter with a magnitude. The channel set is closed: skills
/// and on-hit effects write into these fields and nowhere else.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusBoard {
    // Hard control, checked in freeze > stun > sleep priority.
    pub freeze: u8,
    pub stun: u8,
    pub sleep: u8,
    /// Blocks skill casts but not basic attacks.
    pub silence: u8,

    pub taunt: Taunt,

    // Damage over time, applied at the start of the owner's turn.
    pub burn: TimedValue,
    pub poison: TimedValue,

    pub armor_break: TimedValue,
    pub reflect: TimedPct,

    pub atk_buff: TimedValue,
    pub def_buff: TimedValue,
    pub mdef_buff: TimedValue,
    pub evade_buff: TimedPct,
    pub evade_debuff: TimedPct,
}

impl StatusBoard {
    /// Reapply a control counter with max-not-stack semantics.
    fn extend_control(slot: &mut u8, turns: u8) {
        *slot = (*slot).max(turns);
    }

    pub fn apply_freeze(&mut self, turns: u8) {
        Self::extend_control(&mut self.freeze, turns);
    }

    pub fn apply_stun(&mut self, turns: u8) {
        Self::extend_control(&mut self.stun, turns);
    }

    pub fn apply_sleep(&mut self, turns: u8) {
        Self::extend_control(&mut self.sleep, turns);
    }

    pub fn apply_silence(&mut self, turns: u8) {
        Self::extend_control(&mut self.silence, turns);
    }

    /// True when any hard control would swallow the unit's turn.
    pub fn is_controlled(&self) -> bool {
        self.freeze > 0 || self.stun > 0 || self.sleep > 0
    }

    /// Clear every channel a cleanse removes: hard control, silence, and DOTs.
    pub fn cleanse(&mut self) {
        self.freeze = 0;
        self.stun = 0;
        self.sleep = 0;
        self.silence = 0;
        self.burn = TimedValue::default();
        self.poison = TimedValue::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reapplied_status_takes_max_of_duration_and_magnitude() {
        let mut armor_break = TimedValue::default();
        armor_break.extend(3, 10);
        armor_break.extend(1, 25);
        assert_eq!(armor_break.turns, 3);
        assert_eq!(armor_break.value, 25);
    }

    #[test]
    fn magnitude_clears_when_duration_expires() {
        let mut buff = TimedValue { turns: 1, value: 12 };
        buff.tick();
        assert!(!buff.is_active());
        assert_eq!(buff.value, 0);
        assert_eq!(buff.active_value(), 0);
    }

    #[test]
    fn taunt_forgets_its_target_on_expiry() {
        let mut taunt = Taunt::default();
        taunt.apply(2, UnitId(7));
        assert_eq!(taunt.forced_target(), Some(UnitId(7)));
        taunt.tick();
        taunt.tick();
        assert_eq!(taunt.forced_target(), None);
        assert_eq!(taunt.target, None);
    }

    #[test]
    fn cleanse_clears_control_and_dots_only() {
        let mut board = StatusBoard::default();
        board.apply_freeze(2);
        board.apply_silence(1);
        board.burn.extend(3, 8);
        board.atk_buff.extend(2, 5);
        board.cleanse();
        assert!(!board.is_controlled());
        assert_eq!(board.silence, 0);
        assert!(!board.burn.is_active());
        assert!(board.atk_buff.is_active());
    }
}
