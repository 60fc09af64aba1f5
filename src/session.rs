//! Two-phase session: pick a disk count, then walk its solution.
//!
//! A session starts in [`Phase::Menu`] where the disk counter can be moved.
//! [`HanoiSession::proceed`] enters [`Phase::Running`] with a machine for the
//! chosen count and [`HanoiSession::go_back`] returns to the menu with the
//! counter left on that count. The last machine is kept, so proceeding
//! again with the same count reuses its timeline instead of rebuilding it.
//!
//! # Example
//!
//! ```rust
//! use fast_hanoi::config::HanoiConfig;
//! use fast_hanoi::session::{HanoiSession, Phase};
//!
//! let mut session = HanoiSession::new(HanoiConfig::default()).unwrap();
//! session.counter_mut().decrement();
//! session.proceed().unwrap();
//!
//! assert_eq!(session.phase(), Phase::Running);
//! let machine = session.machine_mut().unwrap();
//! assert_eq!(machine.total(), 7);
//! machine.step();
//!
//! session.go_back();
//! assert_eq!(session.phase(), Phase::Menu);
//! assert_eq!(session.counter().value(), 3);
//! ```

use crate::config::HanoiConfig;
use crate::core::BoundedCounter;
use crate::error::HanoiError;
use crate::machine::HanoiStateMachine;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Choosing the disk count.
    Menu,
    /// Stepping through a solution.
    Running,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Menu => "Menu",
            Self::Running => "Running",
        }
    }
}

#[derive(Clone, Debug)]
pub struct HanoiSession {
    config: HanoiConfig,
    phase: Phase,
    counter: BoundedCounter<usize>,
    machine: Option<HanoiStateMachine>,
}

impl HanoiSession {
    /// Start a session in the menu, with the counter on `initial_disks`.
    pub fn new(config: HanoiConfig) -> Result<Self, HanoiError> {
        let counter = config.disk_counter()?;
        Ok(Self {
            config,
            phase: Phase::Menu,
            counter,
            machine: None,
        })
    }

    pub fn config(&self) -> &HanoiConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn counter(&self) -> &BoundedCounter<usize> {
        &self.counter
    }

    /// The disk picker. Changes only take effect on the next `proceed`.
    pub fn counter_mut(&mut self) -> &mut BoundedCounter<usize> {
        &mut self.counter
    }

    /// Enter the running phase with the counter's disk count.
    ///
    /// Does nothing if already running.
    pub fn proceed(&mut self) -> Result<(), HanoiError> {
        if self.phase == Phase::Running {
            return Ok(());
        }

        let disks = self.counter.value();
        match self.machine.as_mut() {
            Some(machine) if machine.disks() == disks => {
                tracing::debug!(disks, "reusing memoized hanoi machine");
                machine.reset();
            }
            _ => {
                self.machine = Some(HanoiStateMachine::with_pegs(disks, self.config.pegs)?);
            }
        }

        self.transition(Phase::Running);
        Ok(())
    }

    /// Return to the menu, keeping the counter on the running disk count.
    pub fn go_back(&mut self) {
        if self.phase == Phase::Menu {
            return;
        }
        if let Some(machine) = &self.machine {
            self.counter.set_to(machine.disks());
        }
        self.transition(Phase::Menu);
    }

    /// The active machine, only while running.
    pub fn machine(&self) -> Option<&HanoiStateMachine> {
        match self.phase {
            Phase::Running => self.machine.as_ref(),
            Phase::Menu => None,
        }
    }

    pub fn machine_mut(&mut self) -> Option<&mut HanoiStateMachine> {
        match self.phase {
            Phase::Running => self.machine.as_mut(),
            Phase::Menu => None,
        }
    }

    fn transition(&mut self, to: Phase) {
        tracing::debug!(from = self.phase.name(), to = to.name(), "session phase changed");
        self.phase = to;
    }
}
