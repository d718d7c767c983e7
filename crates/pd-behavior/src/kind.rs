//! Selecting policies by name.

use std::fmt;
use std::str::FromStr;

use pd_spatial::Topology;
use tracing::warn;

use crate::{
    BatchingPolicy, BehaviorError, BehaviorResult, DeliveryFirstPolicy, FixedRoutePolicy,
    GoalOrientedPolicy, NearestTargetPolicy, PickupFirstPolicy, Policy, RandomPolicy,
};

/// Every built-in policy, addressable by its report name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PolicyKind {
    Random,
    FixedRoute,
    GoalOriented,
    NearestTarget,
    DeliveryFirst,
    Batching,
    PickupFirst,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 7] = [
        PolicyKind::Random,
        PolicyKind::FixedRoute,
        PolicyKind::GoalOriented,
        PolicyKind::NearestTarget,
        PolicyKind::DeliveryFirst,
        PolicyKind::Batching,
        PolicyKind::PickupFirst,
    ];

    /// The name the policy reports from [`Policy::name`].
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Random        => "random",
            PolicyKind::FixedRoute    => "fixed-route",
            PolicyKind::GoalOriented  => "goal-oriented",
            PolicyKind::NearestTarget => "nearest-target",
            PolicyKind::DeliveryFirst => "delivery-first",
            PolicyKind::Batching      => "batching",
            PolicyKind::PickupFirst   => "pickup-first",
        }
    }

    /// Instantiate the policy.  The fixed route needs `topology` to resolve
    /// the mail route's location names.
    pub fn build(self, topology: &Topology) -> BehaviorResult<Box<dyn Policy>> {
        Ok(match self {
            PolicyKind::Random        => Box::new(RandomPolicy),
            PolicyKind::FixedRoute    => Box::new(FixedRoutePolicy::mail_route(topology)?),
            PolicyKind::GoalOriented  => Box::new(GoalOrientedPolicy),
            PolicyKind::NearestTarget => Box::new(NearestTargetPolicy),
            PolicyKind::DeliveryFirst => Box::new(DeliveryFirstPolicy),
            PolicyKind::Batching      => Box::new(BatchingPolicy),
            PolicyKind::PickupFirst   => Box::new(PickupFirstPolicy),
        })
    }

    /// Every policy that can run on `topology`, in [`ALL`](Self::ALL) order.
    ///
    /// A policy whose construction fails (the fixed route on a map without
    /// the village names) is left out with a warning.
    pub fn available(topology: &Topology) -> Vec<(PolicyKind, Box<dyn Policy>)> {
        PolicyKind::ALL
            .into_iter()
            .filter_map(|kind| match kind.build(topology) {
                Ok(policy) => Some((kind, policy)),
                Err(e) => {
                    warn!(policy = kind.as_str(), error = %e, "policy unavailable on this topology");
                    None
                }
            })
            .collect()
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = BehaviorError;

    /// Accepts report names case-insensitively, with `_` or `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PolicyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<_> = PolicyKind::ALL.iter().map(|k| k.as_str()).collect();
                BehaviorError::Config(format!(
                    "unknown policy {s:?}: expected one of {}",
                    known.join(", ")
                ))
            })
    }
}
