#![allow(clippy::float_cmp)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::*;

fn surface(w: u32, h: u32) -> Surface {
    Surface::new(w, h).unwrap()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn decode_png(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

// =============================================================
// Allocation
// =============================================================

#[test]
fn new_surface_has_requested_size() {
    let s = surface(64, 32);
    assert_eq!(s.width(), 64);
    assert_eq!(s.height(), 32);
}

#[test]
fn zero_dimensions_are_bumped_to_one_pixel() {
    let s = surface(0, 0);
    assert_eq!((s.width(), s.height()), (1, 1));
}

#[test]
fn new_surface_is_fully_transparent() {
    let s = surface(16, 16);
    assert!(s.scan_drawn_bounds().is_none());
    assert_eq!(s.pixel(8, 8), Some([0, 0, 0, 0]));
}

#[test]
fn pixel_outside_raster_is_none() {
    let s = surface(4, 4);
    assert!(s.pixel(4, 0).is_none());
    assert!(s.pixel(0, 4).is_none());
}

#[test]
fn pixel_past_row_end_does_not_wrap_into_next_row() {
    let mut s = surface(4, 4);
    s.stroke_segment(pt(-2.0, 1.5), pt(6.0, 1.5), Color::WHITE, 1.0);
    assert!(s.pixel(0, 1).is_some_and(|p| p[3] > 0));
    assert_eq!(s.pixel(4, 0), None);
    assert_eq!(s.pixel(5, 0), None);
}

// =============================================================
// Strokes and bounds
// =============================================================

#[test]
fn horizontal_segment_bounds_cover_endpoints_within_stroke_width() {
    let mut s = surface(100, 100);
    s.stroke_segment(pt(20.0, 50.0), pt(60.0, 50.0), Color::WHITE, 4.0);
    let b = s.scan_drawn_bounds().unwrap();

    // Round caps extend half the width past each endpoint; anti-aliasing may
    // add one more partially covered pixel.
    assert!(b.min_x <= 20 && b.min_x >= 17, "min_x = {}", b.min_x);
    assert!(b.max_x >= 60 && b.max_x <= 63, "max_x = {}", b.max_x);
    assert!(b.min_y <= 50 && b.min_y >= 47, "min_y = {}", b.min_y);
    assert!(b.max_y >= 50 && b.max_y <= 53, "max_y = {}", b.max_y);
}

#[test]
fn stroke_center_pixel_is_opaque_stroke_color() {
    let mut s = surface(50, 50);
    s.stroke_segment(pt(5.5, 25.5), pt(45.5, 25.5), Color::rgb(238, 51, 51), 6.0);
    assert_eq!(s.pixel(25, 25), Some([238, 51, 51, 255]));
}

#[test]
fn bounds_cover_every_segment() {
    let mut s = surface(200, 200);
    s.stroke_segment(pt(10.0, 10.0), pt(30.0, 30.0), Color::WHITE, 3.0);
    s.stroke_segment(pt(150.0, 170.0), pt(160.0, 175.0), Color::WHITE, 3.0);
    let b = s.scan_drawn_bounds().unwrap();
    assert!(b.min_x <= 10 && b.min_y <= 10);
    assert!(b.max_x >= 160 && b.max_y >= 175);
    assert!(b.max_x < 165 && b.max_y < 180);
}

#[test]
fn bounds_ignore_pixels_far_from_the_stroke() {
    let mut s = surface(100, 100);
    s.stroke_segment(pt(40.0, 40.0), pt(60.0, 40.0), Color::WHITE, 2.0);
    assert_eq!(s.pixel(5, 5).map(|p| p[3]), Some(0));
    assert_eq!(s.pixel(95, 95).map(|p| p[3]), Some(0));
}

#[test]
fn segment_fully_off_raster_draws_nothing() {
    let mut s = surface(20, 20);
    s.stroke_segment(pt(-100.0, -100.0), pt(-50.0, -100.0), Color::WHITE, 3.0);
    assert!(s.scan_drawn_bounds().is_none());
}

#[test]
fn segment_partially_off_raster_is_clipped() {
    let mut s = surface(20, 20);
    s.stroke_segment(pt(-10.0, 10.0), pt(10.0, 10.0), Color::WHITE, 3.0);
    let b = s.scan_drawn_bounds().unwrap();
    assert_eq!(b.min_x, 0);
    assert!(b.max_x >= 10);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_discards_all_strokes() {
    let mut s = surface(50, 50);
    s.stroke_segment(pt(10.0, 10.0), pt(40.0, 40.0), Color::WHITE, 3.0);
    assert!(s.scan_drawn_bounds().is_some());
    s.clear();
    assert!(s.scan_drawn_bounds().is_none());
}

#[test]
fn clear_on_empty_surface_is_noop() {
    let mut s = surface(8, 8);
    s.clear();
    assert!(s.scan_drawn_bounds().is_none());
}

// =============================================================
// Export
// =============================================================

#[test]
fn rgba_bytes_length_matches_dimensions() {
    let s = surface(7, 3);
    assert_eq!(s.rgba_bytes().len(), 7 * 3 * 4);
}

#[test]
fn write_rgba_reuses_buffer_and_matches_rgba_bytes() {
    let mut s = surface(6, 6);
    s.stroke_segment(pt(0.5, 3.0), pt(5.5, 3.0), Color::rgb(238, 51, 51), 2.0);
    let mut buf = vec![9; 1024];
    let capacity = buf.capacity();
    s.write_rgba(&mut buf);
    assert_eq!(buf, s.rgba_bytes());
    assert_eq!(buf.capacity(), capacity);

    s.clear();
    s.write_rgba(&mut buf);
    assert_eq!(buf.len(), 6 * 6 * 4);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn export_png_decodes_to_same_pixels() {
    let mut s = surface(32, 16);
    s.stroke_segment(pt(2.5, 8.5), pt(30.5, 8.5), Color::rgb(34, 139, 230), 5.0);
    let png = s.export_png().unwrap();
    let (w, h, data) = decode_png(&png);
    assert_eq!((w, h), (32, 16));
    assert_eq!(data, s.rgba_bytes());
}

#[test]
fn export_png_is_deterministic() {
    let mut s = surface(16, 16);
    s.stroke_segment(pt(1.0, 1.0), pt(14.0, 14.0), Color::WHITE, 3.0);
    assert_eq!(s.export_png().unwrap(), s.export_png().unwrap());
}

#[test]
fn export_data_url_wraps_base64_png() {
    let mut s = surface(10, 10);
    s.stroke_segment(pt(1.0, 5.0), pt(9.0, 5.0), Color::WHITE, 3.0);
    let url = s.export_data_url().unwrap();
    let payload = url.strip_prefix("data:image/png;base64,").unwrap();
    assert_eq!(STANDARD.decode(payload).unwrap(), s.export_png().unwrap());
}
