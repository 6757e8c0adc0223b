#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use uprising_core::components::{Police, Protester};
    use uprising_core::constants::*;
    use uprising_core::enums::{PoliceState, ProtesterState};

    use crate::animation;
    use crate::police::{self, crowd_centroid, PoliceAction, PoliceContext};
    use crate::protester::{self, ProtesterAction, ProtesterContext};
    use crate::steering;

    fn protester_at(x: f32, y: f32, state: ProtesterState) -> Protester {
        Protester {
            pos: Vec2::new(x, y),
            target_pos: Vec2::new(x, y),
            state,
            morale: 50.0,
            alive: true,
            face_right: true,
            ..Default::default()
        }
    }

    fn officer_at(x: f32, y: f32, state: PoliceState) -> Police {
        Police {
            pos: Vec2::new(x, y),
            state,
            health: POLICE_START_HEALTH,
            alive: true,
            face_right: true,
            ..Default::default()
        }
    }

    fn run_protester(
        index: usize,
        protesters: &[Protester],
        police: &[Police],
    ) -> (protester::ProtesterUpdate, Vec<ProtesterAction>) {
        let mut actions = Vec::new();
        let ctx = ProtesterContext {
            index,
            protesters,
            police,
            dt: DT,
        };
        let update = protester::evaluate(&ctx, &mut actions);
        (update, actions)
    }

    fn run_officer(
        officer: &Police,
        protesters: &[Protester],
        fire_ready: bool,
    ) -> (police::PoliceUpdate, Vec<PoliceAction>) {
        let mut actions = Vec::new();
        let ctx = PoliceContext {
            officer,
            fire_ready,
            roam_point: officer.pos,
            protesters,
            dt: DT,
        };
        let update = police::evaluate(&ctx, &mut actions);
        (update, actions)
    }

    // --- steering ---

    #[test]
    fn test_seek_coincident_is_zero() {
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(steering::seek(p, p, 5.0), Vec2::ZERO);
    }

    #[test]
    fn test_arrive_switches_off_inside_radius() {
        let from = Vec2::new(100.0, 100.0);
        assert_eq!(
            steering::arrive(from, Vec2::new(105.0, 100.0), SEEK_ARRIVAL_RADIUS, SEEK_WEIGHT),
            Vec2::ZERO
        );
        let f = steering::arrive(from, Vec2::new(200.0, 100.0), SEEK_ARRIVAL_RADIUS, SEEK_WEIGHT);
        assert!((f.x - SEEK_WEIGHT).abs() < 1e-6);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn test_nearest_prefers_lower_index_on_tie() {
        let origin = Vec2::ZERO;
        let candidates = vec![(3, Vec2::new(10.0, 0.0)), (5, Vec2::new(-10.0, 0.0))];
        assert_eq!(steering::nearest(origin, candidates, 50.0), Some((3, 10.0)));
    }

    #[test]
    fn test_nearest_range_is_strict() {
        let candidates = vec![(0, Vec2::new(120.0, 0.0))];
        assert_eq!(steering::nearest(Vec2::ZERO, candidates, 120.0), None);
    }

    #[test]
    fn test_separation_ignores_police_when_rioting() {
        let crowd = vec![protester_at(400.0, 500.0, ProtesterState::Riot)];
        let police = vec![officer_at(440.0, 500.0, PoliceState::Patrol)];
        let riot = steering::crowd_separation(0, crowd[0].pos, ProtesterState::Riot, &crowd, &police);
        assert_eq!(riot, Vec2::ZERO);
        let idle = steering::crowd_separation(0, crowd[0].pos, ProtesterState::Idle, &crowd, &police);
        assert!(idle.x < 0.0, "should push away from the officer");
    }

    #[test]
    fn test_separation_averages_contributions() {
        let crowd = vec![
            protester_at(400.0, 500.0, ProtesterState::Idle),
            protester_at(410.0, 500.0, ProtesterState::Idle),
            protester_at(390.0, 500.0, ProtesterState::Idle),
        ];
        let sep = steering::crowd_separation(0, crowd[0].pos, ProtesterState::Idle, &crowd, &[]);
        assert!(sep.length() < 1e-5, "symmetric neighbours cancel");
    }

    #[test]
    fn test_separation_skips_dead_neighbours() {
        let mut crowd = vec![
            protester_at(400.0, 500.0, ProtesterState::Idle),
            protester_at(405.0, 500.0, ProtesterState::Idle),
        ];
        crowd[1].alive = false;
        let sep = steering::crowd_separation(0, crowd[0].pos, ProtesterState::Idle, &crowd, &[]);
        assert_eq!(sep, Vec2::ZERO);
    }

    // --- animation ---

    #[test]
    fn test_animation_cycles() {
        let (t, f) = animation::step(0.0, 0, true, 0.1);
        assert_eq!(f, 0);
        assert!((t - 0.1).abs() < 1e-6);
        let (t, f) = animation::step(0.15, 2, true, 0.1);
        assert_eq!((t, f), (0.0, 0));
        let (_, f) = animation::step(0.39, 1, false, 0.02);
        assert_eq!(f, 0);
    }

    // --- protester FSM ---

    #[test]
    fn test_lone_chanter_boosts_only_itself() {
        let crowd = vec![
            protester_at(200.0, 500.0, ProtesterState::Chant),
            protester_at(400.0, 500.0, ProtesterState::Idle),
        ];
        let (update, actions) = run_protester(0, &crowd, &[]);
        assert!(update.chanting);
        assert!(actions.is_empty());
        assert!((update.next.morale - (50.0 + CHANT_SELF_BOOST)).abs() < 1e-5);
    }

    #[test]
    fn test_chanter_boosts_neighbours() {
        let crowd = vec![
            protester_at(200.0, 500.0, ProtesterState::Chant),
            protester_at(230.0, 500.0, ProtesterState::Idle),
            protester_at(400.0, 500.0, ProtesterState::Idle),
        ];
        let (_, actions) = run_protester(0, &crowd, &[]);
        assert_eq!(
            actions,
            vec![ProtesterAction::BoostMorale {
                protester: 1,
                amount: CHANT_NEIGHBOUR_BOOST
            }]
        );
    }

    #[test]
    fn test_rioter_strikes_adjacent_officer() {
        let crowd = vec![protester_at(600.0, 500.0, ProtesterState::Riot)];
        let police = vec![
            officer_at(610.0, 500.0, PoliceState::Patrol),
            officer_at(900.0, 500.0, PoliceState::Patrol),
        ];
        let (update, actions) = run_protester(0, &crowd, &police);
        assert!(update.next.pos.x > 600.0, "rioter charges the officer");
        assert_eq!(actions.len(), 1);
        match actions[0] {
            ProtesterAction::Strike { officer, damage } => {
                assert_eq!(officer, 0);
                assert!((damage - RIOT_STRIKE_DPS * DT).abs() < 1e-6);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_flee_reverts_to_idle_after_duration() {
        let mut p = protester_at(300.0, 500.0, ProtesterState::Flee);
        p.behavior_timer = FLEE_DURATION_SECS;
        let (update, _) = run_protester(0, &[p], &[]);
        assert_eq!(update.next.state, ProtesterState::Idle);
        assert_eq!(update.next.behavior_timer, 0.0);
        // Morale only decays while still fleeing.
        assert_eq!(update.next.morale, 50.0);
    }

    #[test]
    fn test_fleeing_morale_decays() {
        let p = protester_at(300.0, 500.0, ProtesterState::Flee);
        let (update, _) = run_protester(0, &[p], &[]);
        assert!((update.next.morale - (50.0 - FLEE_MORALE_DECAY)).abs() < 1e-5);
        assert!(update.next.behavior_timer > 0.0);
    }

    #[test]
    fn test_flee_pushes_away_from_police() {
        let p = protester_at(700.0, 500.0, ProtesterState::Flee);
        let police = vec![officer_at(750.0, 500.0, PoliceState::Patrol)];
        let (update, _) = run_protester(0, &[p], &police);
        assert!(update.next.pos.x < 700.0);
    }

    #[test]
    fn test_position_clamped_to_playfield() {
        let mut p = protester_at(PLAYFIELD_MIN_X, PLAYFIELD_MIN_Y, ProtesterState::Idle);
        p.vel = Vec2::new(-50.0, -50.0);
        let (update, _) = run_protester(0, &[p], &[]);
        assert_eq!(update.next.pos, Vec2::new(PLAYFIELD_MIN_X, PLAYFIELD_MIN_Y));
    }

    #[test]
    fn test_stone_cooldown_floors_at_zero() {
        let mut p = protester_at(300.0, 500.0, ProtesterState::Idle);
        p.stone_cooldown = 0.001;
        let (update, _) = run_protester(0, &[p], &[]);
        assert_eq!(update.next.stone_cooldown, 0.0);
    }

    #[test]
    fn test_arrested_protester_is_inert() {
        let mut p = protester_at(300.0, 500.0, ProtesterState::Arrested);
        p.alive = false;
        let (update, actions) = run_protester(0, &[p.clone()], &[]);
        assert_eq!(update.next, p);
        assert!(actions.is_empty());
    }

    // --- police FSM ---

    #[test]
    fn test_patrol_to_deploy_on_close_crowd() {
        let officer = officer_at(1000.0, 500.0, PoliceState::Patrol);
        let crowd = vec![protester_at(900.0, 500.0, ProtesterState::Idle)];
        let (update, _) = run_officer(&officer, &crowd, false);
        assert!(update.state_changed);
        assert_eq!(update.next.state, PoliceState::Deploy);
        assert_eq!(update.next.timer, DEPLOY_DURATION_SECS);
    }

    #[test]
    fn test_patrol_ignores_fleeing_for_deploy_but_arrests() {
        let officer = officer_at(1000.0, 500.0, PoliceState::Patrol);
        let crowd = vec![protester_at(985.0, 500.0, ProtesterState::Flee)];
        let (update, _) = run_officer(&officer, &crowd, false);
        assert_eq!(update.next.state, PoliceState::Arrest);
    }

    #[test]
    fn test_arrest_resolves_and_returns_to_patrol() {
        let officer = officer_at(1000.0, 500.0, PoliceState::Arrest);
        let crowd = vec![
            protester_at(990.0, 500.0, ProtesterState::Idle),
            protester_at(1010.0, 500.0, ProtesterState::Flee),
        ];
        let (update, actions) = run_officer(&officer, &crowd, false);
        assert_eq!(update.next.state, PoliceState::Patrol);
        assert_eq!(actions, vec![PoliceAction::Arrest { protester: 1 }]);
    }

    #[test]
    fn test_failed_arrest_still_returns_to_patrol() {
        let officer = officer_at(1000.0, 500.0, PoliceState::Arrest);
        let (update, actions) = run_officer(&officer, &[], false);
        assert_eq!(update.next.state, PoliceState::Patrol);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_deploy_targets_nearest_protester() {
        let mut officer = officer_at(1000.0, 500.0, PoliceState::Deploy);
        officer.timer = 2.0;
        let crowd = vec![
            protester_at(850.0, 500.0, ProtesterState::Idle),
            protester_at(900.0, 520.0, ProtesterState::Flee),
        ];
        let (update, actions) = run_officer(&officer, &crowd, false);
        assert_eq!(update.next.state, PoliceState::Deploy);
        assert_eq!(
            actions,
            vec![PoliceAction::DeployGas {
                at: Vec2::new(900.0, 520.0)
            }]
        );
    }

    #[test]
    fn test_deploy_expires_to_patrol() {
        let mut officer = officer_at(1000.0, 500.0, PoliceState::Deploy);
        officer.timer = DT / 2.0;
        let (update, _) = run_officer(&officer, &[], false);
        assert_eq!(update.next.state, PoliceState::Patrol);
    }

    #[test]
    fn test_fire_requires_ready_and_range() {
        let officer = officer_at(1000.0, 500.0, PoliceState::Retreat);
        let crowd = vec![protester_at(900.0, 500.0, ProtesterState::Flee)];
        let (_, actions) = run_officer(&officer, &crowd, false);
        assert!(actions.is_empty());
        let (_, actions) = run_officer(&officer, &crowd, true);
        assert_eq!(
            actions,
            vec![PoliceAction::Fire {
                target: Vec2::new(900.0, 500.0)
            }]
        );
        let far = vec![protester_at(800.0, 500.0, ProtesterState::Flee)];
        let (_, actions) = run_officer(&officer, &far, true);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_intervene_heads_for_crowd_centre() {
        let officer = officer_at(1200.0, 500.0, PoliceState::Intervene);
        let crowd = vec![
            protester_at(200.0, 400.0, ProtesterState::Idle),
            protester_at(200.0, 600.0, ProtesterState::Chant),
            protester_at(1500.0, 700.0, ProtesterState::Flee),
        ];
        assert_eq!(crowd_centroid(&crowd), Some(Vec2::new(200.0, 500.0)));
        let (update, _) = run_officer(&officer, &crowd, false);
        assert!((update.next.vel.x + INTERVENE_SPEED).abs() < 1e-5);
        assert!((update.next.pos.x - (1200.0 - INTERVENE_SPEED)).abs() < 1e-4);
        assert_eq!(update.next.state, PoliceState::Intervene);
    }

    #[test]
    fn test_retreat_is_inert() {
        let officer = officer_at(1200.0, 500.0, PoliceState::Retreat);
        let (update, actions) = run_officer(&officer, &[], false);
        assert_eq!(update.next.state, PoliceState::Retreat);
        assert_eq!(update.next.pos, officer.pos);
        assert!(actions.is_empty());
    }

    proptest! {
        #[test]
        fn prop_cap_never_exceeds_limit(x in -500.0f32..500.0, y in -500.0f32..500.0, max in 0.1f32..10.0) {
            let capped = steering::cap(Vec2::new(x, y), max);
            prop_assert!(capped.length() <= max + 1e-4);
        }

        #[test]
        fn prop_protester_morale_stays_clamped(
            morale in 0.0f32..=100.0,
            state_pick in 0usize..4,
            x in PLAYFIELD_MIN_X..PLAYFIELD_MAX_X,
            y in PLAYFIELD_MIN_Y..PLAYFIELD_MAX_Y,
        ) {
            let state = [
                ProtesterState::Idle,
                ProtesterState::Chant,
                ProtesterState::Riot,
                ProtesterState::Flee,
            ][state_pick];
            let mut p = protester_at(x, y, state);
            p.morale = morale;
            let police = vec![officer_at(x + 30.0, y, PoliceState::Patrol)];
            let (update, _) = run_protester(0, &[p], &police);
            prop_assert!((MORALE_MIN..=MORALE_MAX).contains(&update.next.morale));
            prop_assert!(update.next.pos.x >= PLAYFIELD_MIN_X && update.next.pos.x <= PLAYFIELD_MAX_X);
            prop_assert!(update.next.pos.y >= PLAYFIELD_MIN_Y && update.next.pos.y <= PLAYFIELD_MAX_Y);
        }
    }
}
