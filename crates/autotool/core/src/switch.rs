//! Deferred switching and restore-on-release.
//!
//! Two independent clocks share one tick:
//! - the countdown clock, armed by a switch decision and advanced by ticks
//! - the release edge, sampled every tick from the action signal
//!
//! Each is a pure transition ([`SwitchState::countdown`],
//! [`ReleaseTracker::observe`]); [`SwitchStateMachine::on_tick`] composes them
//! with the release check first. A restore consumes the tick, so a countdown
//! that was mid-flight resumes on the next tick.
use crate::command::ToolCommand;
use crate::types::HotbarSlot;

/// A committed-but-not-yet-executed switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PendingSwitch {
    pub slot: HotbarSlot,
    pub restore_after: bool,
    /// Ticks left before the swap fires; never zero while pending.
    pub remaining: u32,
}

impl PendingSwitch {
    fn command(&self) -> ToolCommand {
        ToolCommand::swap(self.slot, self.restore_after)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwitchState {
    #[default]
    Idle,
    Pending(PendingSwitch),
}

impl SwitchState {
    /// Decision transition. Overwrites any pending switch.
    ///
    /// A zero delay fires immediately, always asking the host to remember the
    /// slot it leaves, and stays idle. A deferred switch only asks for that
    /// when `switch_back` is on.
    pub fn decide(
        self,
        slot: HotbarSlot,
        switch_back: bool,
        delay: u32,
    ) -> (SwitchState, Option<ToolCommand>) {
        if delay == 0 {
            return (SwitchState::Idle, Some(ToolCommand::swap(slot, true)));
        }
        let pending = PendingSwitch {
            slot,
            restore_after: switch_back,
            remaining: delay,
        };
        (SwitchState::Pending(pending), None)
    }

    /// Countdown transition for one tick.
    pub fn countdown(self) -> (SwitchState, Option<ToolCommand>) {
        match self {
            SwitchState::Idle => (SwitchState::Idle, None),
            SwitchState::Pending(mut pending) => {
                pending.remaining = pending.remaining.saturating_sub(1);
                if pending.remaining == 0 {
                    (SwitchState::Idle, Some(pending.command()))
                } else {
                    (SwitchState::Pending(pending), None)
                }
            }
        }
    }

    pub fn pending(&self) -> Option<&PendingSwitch> {
        match self {
            SwitchState::Idle => None,
            SwitchState::Pending(pending) => Some(pending),
        }
    }
}

/// Per-tick inputs for the release edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub action_held: bool,
    pub switch_back: bool,
    pub previous_slot: Option<HotbarSlot>,
}

/// Action signal level seen on the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReleaseTracker {
    pub was_active: bool,
}

impl ReleaseTracker {
    /// Release-edge transition. Emits a restore on a falling edge when
    /// switch-back is on and the host has a slot to return to.
    ///
    /// The returned tracker always records this tick's level.
    pub fn observe(self, input: &TickInput) -> (ReleaseTracker, Option<ToolCommand>) {
        let next = ReleaseTracker {
            was_active: input.action_held,
        };
        let released = self.was_active && !input.action_held;
        if input.switch_back && released && input.previous_slot.is_some() {
            (next, Some(ToolCommand::RestorePreviousSlot))
        } else {
            (next, None)
        }
    }
}

/// Owns the pending switch and the release edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwitchStateMachine {
    state: SwitchState,
    release: ReleaseTracker,
}

impl SwitchStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn release(&self) -> ReleaseTracker {
        self.release
    }

    pub fn pending(&self) -> Option<&PendingSwitch> {
        self.state.pending()
    }

    /// Hands a switch intent to the machine.
    pub fn on_decision(
        &mut self,
        slot: HotbarSlot,
        switch_back: bool,
        delay: u32,
    ) -> Option<ToolCommand> {
        let (state, fired) = self.state.decide(slot, switch_back, delay);
        self.state = state;
        fired
    }

    /// Drops any pending switch.
    pub fn clear(&mut self) {
        self.state = SwitchState::Idle;
    }

    /// Release check, then countdown. At most one command per tick.
    pub fn on_tick(&mut self, input: TickInput) -> Option<ToolCommand> {
        let (release, restore) = self.release.observe(&input);
        self.release = release;
        if restore.is_some() {
            return restore;
        }

        let (state, fired) = self.state.countdown();
        self.state = state;
        fired
    }
}
