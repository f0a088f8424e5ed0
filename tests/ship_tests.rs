use battleship_rules::{compute_coordinates, GameError, Orientation, Position, Ship, ShipDef};

fn placed(size: usize, x: i32, y: i32, orientation: Orientation) -> Ship {
    let mut ship = Ship::new(ShipDef::new("Test", size));
    ship.place(Position::new(x, y), orientation);
    ship
}

#[test]
fn new_ship_is_unplaced_and_intact() {
    let ship = Ship::new(ShipDef::new("Test", 4));
    assert_eq!(ship.name(), "Test");
    assert_eq!(ship.size(), 4);
    assert_eq!(ship.orientation(), Orientation::Row);
    assert!(!ship.is_placed());
    assert!(!ship.is_destroyed());
    assert_eq!(ship.origin(), None);
    assert_eq!(ship.coordinates(), None);
    assert_eq!(ship.hit_mask(), &[false; 4]);
    assert_eq!(ship.health(), 1.0);
}

#[test]
fn coordinates_follow_orientation() {
    let row = placed(3, 0, 0, Orientation::Row);
    assert_eq!(
        row.coordinates().unwrap(),
        vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
    );
    let col = placed(3, 0, 0, Orientation::Column);
    assert_eq!(
        col.coordinates().unwrap(),
        vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
    );
}

#[test]
fn compute_coordinates_ignores_board_edges() {
    let cells = compute_coordinates(Position::new(9, 9), 3, Orientation::Row);
    assert_eq!(cells, vec![Position::new(9, 9), Position::new(10, 9), Position::new(11, 9)]);
    let cells = compute_coordinates(Position::new(-1, -2), 2, Orientation::Column);
    assert_eq!(cells, vec![Position::new(-1, -2), Position::new(-1, -1)]);
}

#[test]
fn swap_orientation_toggles() {
    let mut ship = placed(2, 1, 1, Orientation::Row);
    ship.swap_orientation();
    assert_eq!(ship.orientation(), Orientation::Column);
    assert_eq!(ship.coordinates().unwrap(), vec![Position::new(1, 1), Position::new(1, 2)]);
    ship.swap_orientation();
    assert_eq!(ship.orientation(), Orientation::Row);
}

#[test]
fn register_hit_marks_matching_cell() {
    let mut ship = placed(3, 2, 5, Orientation::Column);
    assert!(ship.register_hit(Position::new(2, 6)));
    assert_eq!(ship.hit_mask(), &[false, true, false]);
    assert_eq!(ship.hits_taken(), 1);
    assert!(!ship.is_destroyed());
}

#[test]
fn register_hit_miss_is_noop() {
    let mut ship = placed(3, 2, 5, Orientation::Column);
    assert!(!ship.register_hit(Position::new(3, 5)));
    assert_eq!(ship.hit_mask(), &[false; 3]);
    assert_eq!(ship.health(), 1.0);

    let mut unplaced = Ship::new(ShipDef::new("Test", 2));
    assert!(!unplaced.register_hit(Position::new(0, 0)));
    assert_eq!(unplaced.hit_mask().len(), 2);
}

#[test]
fn repeated_hit_does_not_double_count() {
    let mut ship = placed(2, 0, 0, Orientation::Row);
    ship.register_hit(Position::new(0, 0));
    ship.register_hit(Position::new(0, 0));
    assert_eq!(ship.health(), 0.5);
    assert!(!ship.is_destroyed());
}

#[test]
fn every_cell_hit_destroys_ship() {
    let mut ship = placed(5, 0, 4, Orientation::Row);
    for pos in ship.coordinates().unwrap() {
        ship.register_hit(pos);
        assert_eq!(ship.hit_mask().len(), 5);
    }
    assert!(ship.is_destroyed());
    assert_eq!(ship.health(), 0.0);
}

#[test]
fn unplace_keeps_hits() {
    let mut ship = placed(2, 0, 0, Orientation::Row);
    ship.register_hit(Position::new(1, 0));
    ship.unplace();
    assert!(!ship.is_placed());
    assert_eq!(ship.coordinates(), None);
    assert_eq!(ship.hit_mask(), &[false, true]);
}

#[test]
fn zero_sized_definitions_are_rejected() {
    assert_eq!(ShipDef::try_new("Raft", 0), Err(GameError::ZeroSizedShip));
    assert_eq!(ShipDef::try_new("Raft", 1).unwrap().size(), 1);
}

#[test]
#[should_panic]
fn const_definition_panics_on_zero_size() {
    let size = std::hint::black_box(0);
    let _ = ShipDef::new("Raft", size);
}

#[test]
fn oversized_definitions_are_rejected() {
    let size = i32::MAX as usize + 1;
    assert_eq!(ShipDef::try_new("Leviathan", size), Err(GameError::ShipTooLarge));
    assert_eq!(ShipDef::try_new("Leviathan", i32::MAX as usize).unwrap().size(), i32::MAX as usize);
}
