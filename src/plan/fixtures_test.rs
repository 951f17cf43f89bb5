use super::*;
use crate::plan::geometry::Rotation;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_rect(r: Rect, left: f64, top: f64, width: f64, height: f64) {
    assert!(
        approx(r.left, left) && approx(r.top, top) && approx(r.width, width) && approx(r.height, height),
        "expected ({left}, {top}, {width}, {height}), got {r:?}"
    );
}

fn inside(inner: &Rect, outer: &Rect) -> bool {
    inner.left >= outer.left - 1e-9
        && inner.top >= outer.top - 1e-9
        && inner.right() <= outer.right() + 1e-9
        && inner.bottom() <= outer.bottom() + 1e-9
}

const KINDS: [RoomKind; 7] = [
    RoomKind::LivingRoom,
    RoomKind::Kitchen,
    RoomKind::Bedroom,
    RoomKind::Bathroom,
    RoomKind::DiningRoom,
    RoomKind::Office,
    RoomKind::Custom,
];

// =============================================================
// Doors
// =============================================================

#[test]
fn top_door_is_centred_with_inward_swing() {
    let door = local_door(Wall::Top, 400.0, 300.0);
    assert_rect(door.rect, 160.0, 0.0, 80.0, 15.0);
    assert_eq!(door.swing.center, Point::new(160.0, 15.0));
    assert!(approx(door.swing.radius, 80.0));
    assert!(approx(door.swing.start_deg, -90.0) && approx(door.swing.end_deg, 0.0));
}

#[test]
fn bottom_door_sits_on_far_wall() {
    let door = local_door(Wall::Bottom, 400.0, 300.0);
    assert_rect(door.rect, 160.0, 285.0, 80.0, 15.0);
    assert_eq!(door.swing.center, Point::new(160.0, 285.0));
    assert!(approx(door.swing.start_deg, 0.0) && approx(door.swing.end_deg, 90.0));
}

#[test]
fn side_doors_run_along_the_length() {
    let left = local_door(Wall::Left, 400.0, 300.0);
    assert_rect(left.rect, 0.0, 110.0, 15.0, 80.0);
    assert_eq!(left.swing.center, Point::new(15.0, 110.0));
    assert!(approx(left.swing.start_deg, 180.0) && approx(left.swing.end_deg, 270.0));

    let right = local_door(Wall::Right, 400.0, 300.0);
    assert_rect(right.rect, 385.0, 110.0, 15.0, 80.0);
    assert_eq!(right.swing.center, Point::new(385.0, 110.0));
}

// =============================================================
// Windows
// =============================================================

#[test]
fn living_room_has_two_front_windows() {
    let windows = local_windows(RoomKind::LivingRoom, 400.0, 300.0);
    assert_eq!(windows.len(), 2);
    assert_rect(windows[0], 0.0, 0.0, 120.0, 10.0);
    assert_rect(windows[1], 280.0, 0.0, 120.0, 10.0);
}

#[test]
fn kitchen_and_bathroom_windows_sit_on_bottom_wall() {
    let kitchen = local_windows(RoomKind::Kitchen, 300.0, 200.0);
    assert_rect(kitchen[0], 120.0, 190.0, 120.0, 10.0);

    let bathroom = local_windows(RoomKind::Bathroom, 180.0, 220.0);
    assert_rect(bathroom[0], 60.0, 210.0, 84.0, 10.0);
}

#[test]
fn dining_room_window_is_upright_against_right_wall() {
    let windows = local_windows(RoomKind::DiningRoom, 260.0, 260.0);
    assert_eq!(windows.len(), 1);
    let w = windows[0];
    assert!(approx(w.width, 10.0));
    assert!(approx(w.height, 204.0));
    // Centre sits 8.4 px in from the right wall.
    assert!(approx(w.center().x, 260.0 - 8.4));
}

#[test]
fn office_has_one_flat_and_one_upright_window() {
    let windows = local_windows(RoomKind::Office, 240.0, 280.0);
    assert_eq!(windows.len(), 2);
    assert_rect(windows[0], 60.0, 0.0, 84.0, 10.0);
    assert!(approx(windows[1].width, 10.0) && approx(windows[1].height, 120.0));
}

#[test]
fn custom_room_gets_one_default_window() {
    let windows = local_windows(RoomKind::Custom, 200.0, 200.0);
    assert_eq!(windows.len(), 1);
    assert_rect(windows[0], 60.0, 0.0, 120.0, 10.0);
}

// =============================================================
// Furniture
// =============================================================

#[test]
fn furniture_names_per_kind() {
    let names = |kind| {
        local_furniture(kind, 300.0, 300.0)
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(RoomKind::LivingRoom), ["sofa", "coffee_table", "tv_stand"]);
    assert_eq!(names(RoomKind::Kitchen), ["counter", "island", "fridge", "stove"]);
    assert_eq!(names(RoomKind::Bedroom), ["bed", "nightstand", "wardrobe"]);
    assert_eq!(names(RoomKind::Bathroom), ["toilet", "sink", "shower", "bathtub"]);
    assert_eq!(names(RoomKind::DiningRoom), ["dining_table", "sideboard"]);
    assert_eq!(names(RoomKind::Office), ["desk", "office_chair", "bookshelf"]);
    assert!(names(RoomKind::Custom).is_empty());
}

#[test]
fn furniture_scales_with_room() {
    let sofa = local_furniture(RoomKind::LivingRoom, 400.0, 300.0)[0];
    assert_rect(sofa.rect, 40.0, 60.0, 200.0, 40.0);
    let counter = local_furniture(RoomKind::Kitchen, 300.0, 200.0)[0];
    assert_rect(counter.rect, 10.0, 160.0, 280.0, 30.0);
}

#[test]
fn right_anchored_pieces_keep_their_inset() {
    let toilet = local_furniture(RoomKind::Bathroom, 180.0, 220.0)[0];
    assert!(approx(toilet.rect.right(), 165.0));
    let desk = local_furniture(RoomKind::Office, 240.0, 280.0)[0];
    assert!(approx(desk.rect.right(), 225.0));
}

#[test]
fn furniture_fits_inside_realistic_rooms() {
    let room = Rect::new(0.0, 0.0, 300.0, 300.0);
    for kind in KINDS {
        for piece in local_furniture(kind, 300.0, 300.0) {
            assert!(inside(&piece.rect, &room), "{kind:?} {} escapes: {:?}", piece.name, piece.rect);
        }
    }
}

// =============================================================
// Plan transform
// =============================================================

#[test]
fn unrotated_fixtures_are_translated() {
    let frame = RoomFrame::new(400.0, 300.0, 50.0, 50.0, Rotation::Deg0);
    let fixtures = room_fixtures(&frame, RoomKind::LivingRoom);
    assert_rect(fixtures.door.rect, 210.0, 50.0, 80.0, 15.0);
    assert_eq!(fixtures.door.swing.center, Point::new(210.0, 65.0));
    assert_rect(fixtures.windows[1], 330.0, 50.0, 120.0, 10.0);
}

#[test]
fn quarter_turn_puts_top_door_on_right_wall() {
    // Footprint is 300 x 400 at (0, 0).
    let frame = RoomFrame::new(400.0, 300.0, 0.0, 0.0, Rotation::Deg90);
    let fixtures = room_fixtures(&frame, RoomKind::LivingRoom);
    assert_rect(fixtures.door.rect, 285.0, 160.0, 15.0, 80.0);
    assert!(approx(fixtures.door.swing.start_deg, 0.0));
    assert!(approx(fixtures.door.swing.end_deg, 90.0));
    assert_eq!(fixtures.door.wall, Wall::Top);
}

#[test]
fn every_fixture_stays_inside_the_footprint() {
    for rotation in [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270] {
        for kind in KINDS {
            let frame = RoomFrame::new(320.0, 280.0, 100.0, 40.0, rotation);
            let fixtures = room_fixtures(&frame, kind);
            assert!(inside(&fixtures.door.rect, &frame.footprint), "{kind:?} {rotation:?} door");
            for piece in &fixtures.furniture {
                assert!(inside(&piece.rect, &frame.footprint), "{kind:?} {rotation:?} {}", piece.name);
            }
        }
    }
}
