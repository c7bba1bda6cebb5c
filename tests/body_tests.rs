use approx::assert_relative_eq;
use glam::Vec2;
use tether2d::PhysicsBody;

const DRAG: f32 = 0.2;

fn make_body(center: Vec2, mass: f32) -> PhysicsBody {
    PhysicsBody::new(center, Vec2::splat(20.0), mass).expect("valid body")
}

#[test]
fn construction_rejects_bad_mass() {
    assert!(PhysicsBody::new(Vec2::ZERO, Vec2::splat(20.0), 0.0).is_err());
    assert!(PhysicsBody::new(Vec2::ZERO, Vec2::splat(20.0), -1.0).is_err());
    assert!(PhysicsBody::new(Vec2::ZERO, Vec2::splat(20.0), f32::NAN).is_err());
    assert!(PhysicsBody::new(Vec2::ZERO, Vec2::splat(20.0), f32::INFINITY).is_err());
}

#[test]
fn construction_rejects_bad_extent() {
    assert!(PhysicsBody::new(Vec2::ZERO, Vec2::new(0.0, 20.0), 1.0).is_err());
    assert!(PhysicsBody::new(Vec2::ZERO, Vec2::new(20.0, -5.0), 1.0).is_err());
}

#[test]
fn body_at_rest_stays_at_rest() {
    let mut body = make_body(Vec2::new(100.0, 50.0), 10.0);
    for _ in 0..100 {
        body.integrate(DRAG);
    }
    assert_eq!(body.center(), Vec2::new(100.0, 50.0));
    assert_eq!(body.velocity(), Vec2::ZERO);
}

#[test]
fn position_advances_by_the_updated_velocity() {
    let mut body = make_body(Vec2::ZERO, 2.0);
    body.add_force(Vec2::new(4.0, -6.0));
    body.integrate(0.0);

    // Semi-implicit: velocity picks up this tick's acceleration first,
    // then the position moves by that new velocity.
    assert_eq!(body.velocity(), Vec2::new(2.0, -3.0));
    assert_eq!(body.center(), Vec2::new(2.0, -3.0));
}

#[test]
fn drag_decays_velocity_every_tick() {
    let mut body = make_body(Vec2::ZERO, 1.0);
    body.add_force(Vec2::new(10.0, 0.0));
    body.integrate(DRAG);

    let mut speed = body.velocity().length();
    assert!(speed > 0.0);
    for _ in 0..50 {
        let before = body.center();
        body.integrate(DRAG);
        let after = body.velocity().length();
        assert!(after < speed, "speed did not decay: {after} >= {speed}");
        assert_eq!(body.center(), before + body.velocity());
        speed = after;
    }
}

#[test]
fn integrate_drains_the_accumulator() {
    let mut body = make_body(Vec2::ZERO, 1.0);
    body.add_force(Vec2::new(0.0, 9.8));
    body.integrate(DRAG);
    assert!(body.pending_forces().is_empty());

    // With nothing resubmitted, the second step is driven purely by
    // drag: v2 = v1 * (1 - drag / mass).
    let v1 = body.velocity();
    body.integrate(DRAG);
    assert_relative_eq!(body.velocity().y, v1.y * (1.0 - DRAG), epsilon = 1e-5);
    assert!(body.pending_forces().is_empty());
}

#[test]
fn reset_velocity_keeps_position_and_pending_forces() {
    let mut body = make_body(Vec2::new(5.0, 5.0), 1.0);
    body.add_force(Vec2::new(1.0, 2.0));
    body.integrate(DRAG);
    body.add_force(Vec2::new(3.0, 4.0));

    let center = body.center();
    body.reset_velocity();
    assert_eq!(body.velocity(), Vec2::ZERO);
    assert_eq!(body.center(), center);
    assert_eq!(body.pending_forces(), &[Vec2::new(3.0, 4.0)]);
}

#[test]
fn rect_tracks_the_center() {
    let mut body = make_body(Vec2::new(50.0, 40.0), 1.0);
    body.set_center(Vec2::new(70.0, 90.0));
    let rect = body.rect();
    assert_eq!(rect.x, 60.0);
    assert_eq!(rect.y, 80.0);
    assert_eq!(rect.center(), Vec2::new(70.0, 90.0));
}
