use bug_crossing::collision::*;
use bug_crossing::entities::*;

use proptest::prelude::*;

fn bbox(left: f32, right: f32, top: f32, bottom: f32) -> BoundingBox {
    BoundingBox {
        left,
        right,
        top,
        bottom,
    }
}

#[test]
fn insets_follow_sprite_margins() {
    let p = Player::new(Position::new(200.0, 330.0));
    assert_eq!(player_box(&p), bbox(236.0, 268.0, 453.0, 466.0));

    let e = Enemy::new(-101.0, 10.0, 200.0);
    assert_eq!(enemy_box(&e), bbox(-98.0, -4.0, 88.0, 153.0));
}

#[test]
fn disjoint_boxes_do_not_overlap() {
    let a = bbox(0.0, 10.0, 0.0, 10.0);
    assert!(!overlaps(&a, &bbox(11.0, 20.0, 0.0, 10.0)));
    assert!(!overlaps(&a, &bbox(-20.0, -1.0, 0.0, 10.0)));
    assert!(!overlaps(&a, &bbox(0.0, 10.0, 11.0, 20.0)));
    assert!(!overlaps(&a, &bbox(0.0, 10.0, -20.0, -1.0)));
}

#[test]
fn contained_box_overlaps() {
    assert!(overlaps(&bbox(0.0, 100.0, 0.0, 100.0), &bbox(40.0, 60.0, 40.0, 60.0)));
}

#[test]
fn shared_edge_counts_as_overlap() {
    // Player right edge 0 + 68 meets enemy left edge 65 + 3.
    let player = Player::new(Position::new(0.0, 0.0));
    let touching = Enemy::new(65.0, 50.0, 0.0);
    assert_eq!(player_box(&player).right, enemy_box(&touching).left);
    assert!(player_hits_enemy(&player, &touching));

    let apart = Enemy::new(65.5, 50.0, 0.0);
    assert!(!player_hits_enemy(&player, &apart));
}

#[test]
fn shared_horizontal_edge_counts_as_overlap() {
    let a = bbox(0.0, 10.0, 0.0, 10.0);
    let b = bbox(0.0, 10.0, 10.0, 20.0);
    assert!(overlaps(&a, &b));
}

#[test]
fn lane_enemies_miss_a_player_at_start() {
    let player = Player::new(Position::new(200.0, 330.0));
    for lane in [10.0, 92.0, 174.0] {
        let enemy = Enemy::new(200.0, lane, 0.0);
        assert!(!player_hits_enemy(&player, &enemy), "lane {lane}");
    }
}

fn arb_box() -> impl Strategy<Value = BoundingBox> {
    (-500.0f32..500.0, 0.0f32..200.0, -500.0f32..500.0, 0.0f32..200.0)
        .prop_map(|(x, w, y, h)| bbox(x, x + w, y, y + h))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_box(), b in arb_box()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn box_overlaps_itself(a in arb_box()) {
        prop_assert!(overlaps(&a, &a));
    }
}
