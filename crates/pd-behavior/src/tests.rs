//! Unit tests for pd-behavior.
//!
//! Village adjacency used below (first-seen order):
//!
//! ```text
//! Post Office   → Alice's House, Marketplace
//! Alice's House → Bob's House, Cabin, Post Office
//! Marketplace   → Farm, Post Office, Shop, Town Hall
//! ```

use pd_core::{LocationId, SimRng};
use pd_spatial::village::{MAIL_ROUTE, village_topology};
use pd_spatial::{BfsRouter, Route, Topology};
use pd_world::{Parcel, WorldState};

use crate::{Decision, Policy, PolicyContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn village() -> Topology {
    village_topology().unwrap()
}

fn id(topo: &Topology, name: &str) -> LocationId {
    topo.resolve(name).unwrap()
}

fn parcel(topo: &Topology, place: &str, address: &str) -> Parcel {
    Parcel::new(id(topo, place), id(topo, address))
}

/// One fresh-memory decision.
fn decide(policy: &dyn Policy, topo: &Topology, state: &WorldState) -> Decision {
    let ctx = PolicyContext::new(topo, &BfsRouter);
    policy.decide(state, Route::new(), &ctx, &mut SimRng::new(0))
}

fn name(topo: &Topology, loc: LocationId) -> &str {
    topo.name(loc).unwrap()
}

// ── Shared contract ───────────────────────────────────────────────────────────

#[cfg(test)]
mod contract {
    use super::*;
    use crate::PolicyKind;

    #[test]
    fn pending_memory_is_followed_without_replanning() {
        let topo = village();
        let ctx = PolicyContext::new(&topo, &BfsRouter);
        let state = WorldState::initial(
            id(&topo, "Alice's House"),
            vec![parcel(&topo, "Farm", "Shop")],
        );
        let memory = Route::from_stops([id(&topo, "Bob's House"), id(&topo, "Town Hall")]);
        for kind in PolicyKind::ALL {
            if kind == PolicyKind::Random {
                continue;
            }
            let policy = kind.build(&topo).unwrap();
            let d = policy.decide(&state, memory.clone(), &ctx, &mut SimRng::new(0));
            assert_eq!(name(&topo, d.direction), "Bob's House", "{kind}");
            assert_eq!(d.memory, Route::from_stops([id(&topo, "Town Hall")]), "{kind}");
        }
    }

    #[test]
    fn every_policy_returns_a_neighbor_on_the_village() {
        let topo = village();
        let ctx = PolicyContext::new(&topo, &BfsRouter);
        let mut rng = SimRng::new(5);
        for kind in PolicyKind::ALL {
            let policy = kind.build(&topo).unwrap();
            for _ in 0..20 {
                let state = WorldState::random_from(&topo, 5, "Post Office", &mut rng).unwrap();
                let d = policy.decide(&state, Route::new(), &ctx, &mut rng);
                assert!(topo.is_adjacent(state.place, d.direction), "{kind}");
            }
        }
    }

    #[test]
    fn empty_state_falls_back_to_first_neighbor() {
        let topo = village();
        let state = WorldState::initial(id(&topo, "Post Office"), vec![]);
        for policy in [
            &crate::GoalOrientedPolicy as &dyn Policy,
            &crate::NearestTargetPolicy,
            &crate::DeliveryFirstPolicy,
            &crate::BatchingPolicy,
            &crate::PickupFirstPolicy,
        ] {
            let d = decide(policy, &topo, &state);
            assert_eq!(name(&topo, d.direction), "Alice's House", "{}", policy.name());
            assert!(d.memory.is_empty());
        }
    }

    #[test]
    fn unreachable_target_falls_back() {
        let topo = Topology::from_edges(&["a-b", "c-d"]).unwrap();
        let state = WorldState::initial(id(&topo, "a"), vec![parcel(&topo, "c", "d")]);
        let d = decide(&crate::GoalOrientedPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "b");
    }

    #[test]
    fn isolated_location_stays_put() {
        let mut b = pd_spatial::TopologyBuilder::new();
        let solo = b.add_location("solo");
        let x = b.add_location("x");
        let y = b.add_location("y");
        b.add_road(x, y).unwrap();
        let topo = b.build();
        let state = WorldState::initial(solo, vec![Parcel::new(x, y)]);
        let d = decide(&crate::NearestTargetPolicy, &topo, &state);
        assert_eq!(d.direction, solo);
        let d = decide(&crate::RandomPolicy, &topo, &state);
        assert_eq!(d.direction, solo);
    }
}

// ── FixedRoutePolicy ──────────────────────────────────────────────────────────

#[cfg(test)]
mod fixed_route {
    use super::*;
    use crate::{BehaviorError, FixedRoutePolicy};

    #[test]
    fn replays_mail_route_then_reloads() {
        let topo = village();
        let ctx = PolicyContext::new(&topo, &BfsRouter);
        let policy = FixedRoutePolicy::mail_route(&topo).unwrap();
        let mut state = WorldState::initial(id(&topo, "Post Office"), vec![]);
        let mut memory = Route::new();
        let mut rng = SimRng::new(0);

        for expected in MAIL_ROUTE {
            let d = policy.decide(&state, memory, &ctx, &mut rng);
            assert_eq!(name(&topo, d.direction), expected);
            assert!(topo.is_adjacent(state.place, d.direction));
            state = state.move_to(&topo, d.direction);
            memory = d.memory;
        }
        assert!(memory.is_empty());
        assert_eq!(name(&topo, state.place), "Post Office");

        let d = policy.decide(&state, memory, &ctx, &mut rng);
        assert_eq!(name(&topo, d.direction), MAIL_ROUTE[0]);
        assert_eq!(d.memory.len(), MAIL_ROUTE.len() - 1);
    }

    #[test]
    fn empty_tour_rejected() {
        assert!(matches!(
            FixedRoutePolicy::new(vec![]),
            Err(BehaviorError::Config(_))
        ));
    }

    #[test]
    fn unknown_stop_rejected() {
        let topo = village();
        assert!(matches!(
            FixedRoutePolicy::from_names(&topo, &["Cabin", "Lighthouse"]),
            Err(BehaviorError::Spatial(_))
        ));
    }
}

// ── Target-selecting policies ─────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;
    use crate::{
        BatchingPolicy, DeliveryFirstPolicy, GoalOrientedPolicy, NearestTargetPolicy,
        PickupFirstPolicy,
    };

    #[test]
    fn goal_oriented_serves_first_parcel() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Shop", "Cabin"), parcel(&topo, "Alice's House", "Cabin")],
        );
        let d = decide(&GoalOrientedPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Marketplace");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Shop")]));
    }

    #[test]
    fn goal_oriented_delivers_held_first_parcel() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Post Office", "Cabin")],
        );
        let d = decide(&GoalOrientedPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Alice's House");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Cabin")]));
    }

    #[test]
    fn nearest_target_picks_shortest() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Daria's House", "Cabin"), parcel(&topo, "Alice's House", "Farm")],
        );
        let d = decide(&NearestTargetPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Alice's House");
        assert!(d.memory.is_empty());
    }

    #[test]
    fn nearest_target_tie_goes_to_first_parcel() {
        let topo = village();
        let market_first = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Marketplace", "Farm"), parcel(&topo, "Alice's House", "Cabin")],
        );
        let d = decide(&NearestTargetPolicy, &topo, &market_first);
        assert_eq!(name(&topo, d.direction), "Marketplace");

        let alice_first = WorldState::initial(
            market_first.place,
            market_first.parcels.iter().rev().copied().collect(),
        );
        let d = decide(&NearestTargetPolicy, &topo, &alice_first);
        assert_eq!(name(&topo, d.direction), "Alice's House");
    }

    #[test]
    fn delivery_first_ignores_closer_pickup() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Alice's House", "Cabin"), parcel(&topo, "Post Office", "Town Hall")],
        );
        let d = decide(&DeliveryFirstPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Marketplace");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Town Hall")]));

        // The nearest-target policy takes the closer pickup instead.
        let d = decide(&NearestTargetPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Alice's House");
    }

    #[test]
    fn delivery_first_picks_up_when_empty_handed() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Farm", "Cabin"), parcel(&topo, "Cabin", "Farm")],
        );
        // Farm and Cabin are both 2 away; Farm is listed first.
        let d = decide(&DeliveryFirstPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Marketplace");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Farm")]));
    }

    #[test]
    fn batching_prefers_crowded_pickup() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![
                parcel(&topo, "Alice's House", "Cabin"),
                parcel(&topo, "Shop", "Farm"),
                parcel(&topo, "Shop", "Cabin"),
                parcel(&topo, "Shop", "Town Hall"),
            ],
        );
        // Alice's House: 1*10 - 1 = 9.  Shop: 3*10 - 2 = 28.
        let d = decide(&BatchingPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Marketplace");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Shop")]));

        let d = decide(&DeliveryFirstPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Alice's House");
    }

    #[test]
    fn batching_delivers_before_collecting() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![
                parcel(&topo, "Shop", "Farm"),
                parcel(&topo, "Shop", "Cabin"),
                parcel(&topo, "Post Office", "Town Hall"),
                parcel(&topo, "Post Office", "Cabin"),
            ],
        );
        // Held addresses: Town Hall (2), Cabin (2); Town Hall is listed first.
        let d = decide(&BatchingPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Marketplace");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Town Hall")]));
    }

    /// `n0 - n1 - ... - n{hops}`.
    fn chain(hops: usize) -> Topology {
        let roads: Vec<String> = (0..hops).map(|i| format!("n{i}-n{}", i + 1)).collect();
        Topology::from_edges(roads.as_slice()).unwrap()
    }

    #[test]
    fn batching_without_positive_score_takes_nearest_pickup() {
        let topo = chain(20);
        let mut parcels = vec![
            parcel(&topo, "n11", "n0"),
            parcel(&topo, "n20", "n0"),
            parcel(&topo, "n20", "n1"),
        ];
        // n11: 1*10 - 11 = -1.  n20: 2*10 - 20 = 0.  Nothing scores above zero.
        let state = WorldState::initial(id(&topo, "n0"), parcels.clone());
        let d = decide(&BatchingPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "n1");
        assert_eq!(d.memory.len(), 10);
        assert_eq!(d.memory.goal(), Some(id(&topo, "n11")));

        // A third parcel lifts n20 to 3*10 - 20 = 10.
        parcels.push(parcel(&topo, "n20", "n2"));
        let state = WorldState::initial(id(&topo, "n0"), parcels);
        let d = decide(&BatchingPolicy, &topo, &state);
        assert_eq!(d.memory.len(), 19);
        assert_eq!(d.memory.goal(), Some(id(&topo, "n20")));
    }

    #[test]
    fn pickup_first_collects_before_delivering() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Post Office", "Cabin"), parcel(&topo, "Farm", "Post Office")],
        );
        let d = decide(&PickupFirstPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Marketplace");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Farm")]));
    }

    #[test]
    fn pickup_first_delivers_first_parcel_once_all_held() {
        let topo = village();
        let state = WorldState::initial(
            id(&topo, "Post Office"),
            vec![parcel(&topo, "Post Office", "Cabin"), parcel(&topo, "Post Office", "Farm")],
        );
        let d = decide(&PickupFirstPolicy, &topo, &state);
        assert_eq!(name(&topo, d.direction), "Alice's House");
        assert_eq!(d.memory, Route::from_stops([id(&topo, "Cabin")]));
    }
}

// ── RandomPolicy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod random {
    use super::*;
    use crate::RandomPolicy;

    #[test]
    fn same_seed_same_walk() {
        let topo = village();
        let ctx = PolicyContext::new(&topo, &BfsRouter);
        let walk = |seed: u64| {
            let mut rng = SimRng::new(seed);
            let mut state = WorldState::initial(id(&topo, "Post Office"), vec![]);
            let mut steps = Vec::new();
            for _ in 0..30 {
                let d = RandomPolicy.decide(&state, Route::new(), &ctx, &mut rng);
                assert!(topo.is_adjacent(state.place, d.direction));
                state = state.move_to(&topo, d.direction);
                steps.push(d.direction);
            }
            steps
        };
        assert_eq!(walk(11), walk(11));
    }
}

// ── PolicyKind ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind {
    use super::*;
    use crate::{BehaviorError, PolicyKind};

    #[test]
    fn names_roundtrip_and_match_policies() {
        let topo = village();
        for kind in PolicyKind::ALL {
            assert_eq!(kind.as_str().parse::<PolicyKind>().unwrap(), kind);
            assert_eq!(kind.build(&topo).unwrap().name(), kind.as_str());
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_underscores() {
        assert_eq!("Nearest_Target".parse::<PolicyKind>().unwrap(), PolicyKind::NearestTarget);
        assert_eq!(" batching ".parse::<PolicyKind>().unwrap(), PolicyKind::Batching);
    }

    #[test]
    fn everything_available_on_the_village() {
        let topo = village();
        let kinds: Vec<_> = PolicyKind::available(&topo).into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, PolicyKind::ALL);
    }

    #[test]
    fn fixed_route_unavailable_off_the_village() {
        let topo = Topology::from_edges(&["a-b", "b-c"]).unwrap();
        assert!(PolicyKind::FixedRoute.build(&topo).is_err());
        let available = PolicyKind::available(&topo);
        assert_eq!(available.len(), PolicyKind::ALL.len() - 1);
        for (kind, policy) in &available {
            assert_ne!(*kind, PolicyKind::FixedRoute);
            assert_eq!(policy.name(), kind.as_str());
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert!(matches!(
            "teleport".parse::<PolicyKind>(),
            Err(BehaviorError::Config(_))
        ));
    }
}
