use super::*;

#[test]
fn test_from_square() {
    assert_eq!(SquareSet::from_square(Square::new(0, 0)).0, 1); // a1
    assert_eq!(SquareSet::from_square(Square::new(7, 0)).0, 128); // h1
    assert_eq!(SquareSet::from_square(Square::new(7, 7)).0, 1 << 63); // h8
}

#[test]
fn test_insert_remove_len() {
    let mut set = SquareSet::EMPTY;
    assert!(set.is_empty());

    set.insert(Square::new(4, 3));
    set.insert(Square::new(4, 3));
    set.insert(Square::new(0, 7));
    assert_eq!(set.len(), 2);
    assert!(set.contains(Square::new(4, 3)));

    set.remove(Square::new(4, 3));
    assert_eq!(set.len(), 1);
    assert!(!set.contains(Square::new(4, 3)));
}

#[test]
fn test_iterator_is_ascending() {
    let set = SquareSet(0b1010);
    let squares: Vec<Square> = set.collect();
    assert_eq!(squares, vec![Square::new(1, 0), Square::new(3, 0)]);
}

#[test]
fn test_retain() {
    let mut set: SquareSet = (0..8).map(|f| Square::new(f, 2)).collect();
    set.retain(|sq| sq.file() % 2 == 0);
    assert_eq!(set.len(), 4);
    assert!(set.contains(Square::new(6, 2)));
    assert!(!set.contains(Square::new(7, 2)));
}

#[test]
fn test_serializes_as_square_names() {
    let set: SquareSet = [Square::new(4, 3), Square::new(0, 0)].into_iter().collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["a1","e4"]"#);

    let back: SquareSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}
