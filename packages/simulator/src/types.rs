//! Shared types for the simulator.

use clap::ValueEnum;
use engine::PassPolicy;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// A play clears earlier passes
    Reset,
    /// A pass lasts for the rest of the trick
    Sticky,
}

impl From<PolicyArg> for PassPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reset => PassPolicy::ResetOnPlay,
            PolicyArg::Sticky => PassPolicy::Sticky,
        }
    }
}
