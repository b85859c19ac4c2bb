use super::*;

#[test]
fn surface_snapshot_is_independent_copy() {
    let mut surface = MemoryPaintSurface::blank(2, 2).unwrap();
    surface.buffer_mut().set_rgba(0, 0, [1, 2, 3, 255]).unwrap();

    let snapshot = surface.current_paint_buffer();
    surface.clear_paint_buffer();

    assert!(surface.buffer().is_cleared());
    assert_eq!(snapshot.rgba(0, 0).unwrap(), [1, 2, 3, 255]);
}

#[test]
fn resize_drops_content() {
    let mut surface = MemoryPaintSurface::new(PixelBuffer::filled(2, 2, [9; 4]).unwrap());
    surface.resize(4, 1).unwrap();
    assert_eq!(surface.buffer().width(), 4);
    assert!(surface.buffer().is_cleared());
    assert!(surface.resize(0, 1).is_err());
}

#[test]
fn replace_returns_previous_content() {
    let mut surface = MemoryPaintSurface::blank(1, 1).unwrap();
    let old = surface.replace(PixelBuffer::filled(1, 1, [5; 4]).unwrap());
    assert!(old.is_cleared());
    assert_eq!(surface.buffer().rgba(0, 0).unwrap(), [5; 4]);
}

#[test]
fn sprite_stores_tracker_verbatim() {
    let mut sprite = Sprite::new("cat");
    assert!(sprite.sprite_tracker().is_none());

    sprite.set_sprite_tracker(SpriteTracker::from("  path #3 / ✓ "));
    assert_eq!(sprite.sprite_tracker().unwrap().as_str(), "  path #3 / ✓ ");

    sprite.set_sprite_tracker(SpriteTracker::from(String::new()));
    assert_eq!(sprite.sprite_tracker().unwrap().as_str(), "");
}
