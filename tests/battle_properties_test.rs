//! Property tests for target selection and terminal-state detection.

use proptest::prelude::*;
use turn_battle::{Battle, BattleState, Combatant, Enemy, Player};

fn enemy_line(max: usize) -> impl Strategy<Value = Vec<(i32, i32, i32)>> {
    prop::collection::vec((-5i32..40, 0i32..15, 0i32..10), 0..max)
}

proptest! {
    #[test]
    fn attack_hits_first_living_enemy(
        attack in 1i32..30,
        healths in prop::collection::vec(-5i32..40, 0..6),
    ) {
        // Harmless enemies so the phase after the attack changes nothing.
        let enemies: Vec<Enemy> = healths
            .iter()
            .enumerate()
            .map(|(i, h)| Enemy::new(format!("E{}", i), *h, 0, 0))
            .collect();
        let mut battle = Battle::new(Player::new("P", 100, attack, 0), enemies);
        battle.attack_action().unwrap();

        let target = healths.iter().position(|h| *h > 0);
        for (i, enemy) in battle.enemies().iter().enumerate() {
            let expected = if Some(i) == target { healths[i] - attack } else { healths[i] };
            prop_assert_eq!(enemy.health(), expected);
        }
        prop_assert_eq!(battle.player().health(), 100);
    }

    #[test]
    fn terminal_states_match_health(
        player in (1i32..120, 0i32..25, 0i32..10),
        enemies in enemy_line(4),
        rounds in 1usize..30,
    ) {
        let (hp, atk, def) = player;
        let mut battle = Battle::new(
            Player::new("P", hp, atk, def),
            enemies.iter().map(|(h, a, d)| Enemy::new("E", *h, *a, *d)).collect(),
        );

        for _ in 0..rounds {
            if battle.is_over() {
                prop_assert!(battle.attack_action().is_err());
                break;
            }
            battle.attack_action().unwrap();
        }

        let all_dead = battle.enemies().iter().all(|e| !e.is_alive());
        match battle.state() {
            BattleState::PlayerLost => prop_assert!(!battle.player().is_alive()),
            BattleState::PlayerWon => {
                prop_assert!(battle.player().is_alive());
                prop_assert!(all_dead);
            }
            BattleState::InProgress => {
                prop_assert!(battle.player().is_alive());
                prop_assert!(!all_dead);
            }
        }
    }
}
