use super::*;
use crate::services::room::NewRoom;
use crate::state::test_helpers;

fn new_room(name: &str) -> NewRoom {
    NewRoom { name: Some(name.into()), width: Some(200.0), length: Some(150.0), ..NewRoom::default() }
}

#[tokio::test]
async fn create_returns_201_and_room() {
    let state = test_helpers::test_app_state();
    let (status, Json(room)) = create_room(State(state.clone()), Ok(Json(new_room("Study"))))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(room.name, "Study");
    assert_eq!((room.top, room.left), (50.0, 50.0));

    let Json(fetched) = get_room(State(state), Ok(Path(room.id))).await.unwrap();
    assert_eq!(fetched, room);
}

#[tokio::test]
async fn create_validation_error_is_400() {
    let state = test_helpers::test_app_state();
    let mut body = new_room("Study");
    body.width = Some(-1.0);
    let err = create_room(State(state), Ok(Json(body))).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Invalid room dimensions");
}

#[tokio::test]
async fn unknown_room_is_404_for_every_verb() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();

    let err = get_room(State(state.clone()), Ok(Path(id))).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);

    let err = update_room(State(state.clone()), Ok(Path(id)), Ok(Json(RoomPatch::default())))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);

    let err = delete_room(State(state.clone()), Ok(Path(id))).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);

    let err = room_fixtures(State(state), Ok(Path(id))).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(err.message, "Room not found");
}

#[tokio::test]
async fn patch_moves_room() {
    let state = test_helpers::test_app_state();
    let seeded = test_helpers::room("Kitchen", 300.0, 200.0, 400.0, 50.0);
    let id = seeded.id;
    test_helpers::seed_rooms(&state, vec![seeded]).await;

    let patch = RoomPatch { top: Some(100.0), left: Some(500.0), ..RoomPatch::default() };
    let Json(room) = update_room(State(state), Ok(Path(id)), Ok(Json(patch))).await.unwrap();
    assert_eq!((room.top, room.left), (100.0, 500.0));
    assert_eq!(room.version, 2);
}

#[tokio::test]
async fn delete_returns_confirmation_message() {
    let state = test_helpers::test_app_state();
    let seeded = test_helpers::room("Kitchen", 300.0, 200.0, 400.0, 50.0);
    let id = seeded.id;
    test_helpers::seed_rooms(&state, vec![seeded]).await;

    let Json(body) = delete_room(State(state.clone()), Ok(Path(id))).await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Room deleted successfully" }));
    assert!(state.plan.read().await.rooms.is_empty());
}

#[tokio::test]
async fn fixtures_are_returned_in_plan_coordinates() {
    let state = test_helpers::test_app_state();
    let seeded = test_helpers::room("Bedroom", 300.0, 300.0, 50.0, 500.0);
    let id = seeded.id;
    test_helpers::seed_rooms(&state, vec![seeded]).await;

    let Json(fixtures) = room_fixtures(State(state), Ok(Path(id))).await.unwrap();
    // Bedroom door sits on the right wall.
    assert_eq!(fixtures.door.rect.left, 785.0);
    assert_eq!(fixtures.furniture.len(), 3);

    let json = serde_json::to_value(&fixtures).unwrap();
    assert_eq!(json["door"]["wall"], "right");
}

#[test]
fn new_room_body_accepts_partial_json() {
    let body: NewRoom = serde_json::from_str(r#"{"template":"bathroom","top":10,"left":20}"#).unwrap();
    assert_eq!(body.template.as_deref(), Some("bathroom"));
    assert_eq!((body.top, body.left), (Some(10.0), Some(20.0)));
    assert!(body.name.is_none());
}
