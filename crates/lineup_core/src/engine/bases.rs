//! Base occupancy.

use serde::{Deserialize, Serialize};

use crate::models::Speed;

/// A runner on base, carrying the speed score of the batter who reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    pub speed: Speed,
}

impl Runner {
    pub fn new(speed: Speed) -> Self {
        Self { speed }
    }
}

/// First, second and third base. `None` is an empty base; a runner with
/// speed zero is still a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseState {
    pub first: Option<Runner>,
    pub second: Option<Runner>,
    pub third: Option<Runner>,
}

impl BaseState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(first: Option<Runner>, second: Option<Runner>, third: Option<Runner>) -> Self {
        Self { first, second, third }
    }

    pub fn loaded(first: Speed, second: Speed, third: Speed) -> Self {
        Self::new(Some(Runner::new(first)), Some(Runner::new(second)), Some(Runner::new(third)))
    }

    pub fn runner_count(&self) -> u8 {
        [self.first, self.second, self.third].iter().filter(|r| r.is_some()).count() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    pub fn is_loaded(&self) -> bool {
        self.runner_count() == 3
    }
}
