//! Player/enemy contact detection

use glam::Vec2;

use super::enemy::Enemy;
use crate::consts::CONTACT_RADIUS;

/// Index of the first enemy, in stored order, within contact range of the
/// player.
///
/// Roster order is the observable tie-break: the scan stops at the first
/// enemy in range even when a later one is closer.
pub fn first_contact(player_pos: Vec2, enemies: &[Enemy]) -> Option<usize> {
    enemies
        .iter()
        .position(|enemy| player_pos.distance(enemy.pos()) <= CONTACT_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::EnemyKind;
    use crate::sim::rect::Rect;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy_at(pos: Vec2) -> Enemy {
        let mut rng = Pcg32::seed_from_u64(0);
        Enemy::new(
            EnemyKind::Scout,
            pos,
            Rect::new(0.0, 0.0, 900.0, 600.0),
            &mut rng,
        )
    }

    #[test]
    fn test_no_contact_outside_radius() {
        let enemies = vec![enemy_at(Vec2::new(500.0, 500.0))];
        assert_eq!(first_contact(Vec2::new(100.0, 100.0), &enemies), None);
    }

    #[test]
    fn test_contact_radius_is_inclusive() {
        let enemies = vec![enemy_at(Vec2::new(128.0, 100.0))];
        assert_eq!(first_contact(Vec2::new(100.0, 100.0), &enemies), Some(0));

        let enemies = vec![enemy_at(Vec2::new(128.1, 100.0))];
        assert_eq!(first_contact(Vec2::new(100.0, 100.0), &enemies), None);
    }

    #[test]
    fn test_first_match_beats_nearest() {
        // Enemy 1 is closer, but enemy 0 is also in range and comes first.
        let enemies = vec![
            enemy_at(Vec2::new(120.0, 100.0)),
            enemy_at(Vec2::new(104.0, 100.0)),
        ];
        assert_eq!(first_contact(Vec2::new(100.0, 100.0), &enemies), Some(0));
    }
}
