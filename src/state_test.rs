use super::*;
use crate::state::test_helpers;

#[test]
fn room_serde_round_trip_skips_created_at() {
    let mut room = test_helpers::room("Kitchen", 300.0, 200.0, 400.0, 50.0);
    room.created_at_ms = 1234;
    room.rotation = Rotation::Deg90;

    let json = serde_json::to_value(&room).unwrap();
    assert_eq!(json["rotation"], serde_json::json!(90));
    assert!(json.get("created_at_ms").is_none());

    let restored: Room = serde_json::from_value(json).unwrap();
    assert_eq!(restored.id, room.id);
    assert_eq!(restored.rotation, Rotation::Deg90);
    assert_eq!(restored.created_at_ms, 0);
}

#[test]
fn room_kind_and_footprint_follow_fields() {
    let mut room = test_helpers::room("Bedroom", 300.0, 200.0, 10.0, 20.0);
    assert_eq!(room.kind(), RoomKind::Bedroom);
    assert_eq!(room.footprint(), Rect::new(20.0, 10.0, 300.0, 200.0));

    room.rotation = Rotation::Deg270;
    assert_eq!(room.footprint(), Rect::new(20.0, 10.0, 200.0, 300.0));
    assert_eq!(room.frame().footprint, room.footprint());
}

#[test]
fn plan_state_lookup_and_footprints() {
    let a = test_helpers::room("A", 100.0, 100.0, 0.0, 0.0);
    let b = test_helpers::room("B", 50.0, 50.0, 200.0, 200.0);
    let mut plan = PlanState::new();
    plan.rooms.push(a.clone());
    plan.rooms.push(b.clone());

    assert_eq!(plan.room(b.id).map(|r| r.name.as_str()), Some("B"));
    assert!(plan.room(Uuid::new_v4()).is_none());

    if let Some(room) = plan.room_mut(a.id) {
        room.left = 5.0;
    }
    assert_eq!(plan.room(a.id).map(|r| r.left), Some(5.0));

    assert_eq!(plan.footprints_except(None).len(), 2);
    assert_eq!(plan.footprints_except(Some(a.id)), vec![b.footprint()]);
}

#[tokio::test]
async fn test_state_starts_empty() {
    let state = test_helpers::test_app_state();
    let plan = state.plan.read().await;
    assert!(plan.rooms.is_empty());
    assert!(plan.dirty.is_empty());
    assert!(plan.deleted.is_empty());
    assert_eq!(state.bounds, CanvasBounds::default());
}
