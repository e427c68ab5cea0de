use super::*;
use crate::foundation::core::{IRIS_HEIGHT, IRIS_WIDTH};
use crate::shape::iris::IrisField;

#[test]
fn polar_mapping_covers_one_revolution_and_rim_to_pupil() {
    assert_eq!(polar_coords(0, 0, 128, 128), (0.0, 0.0));
    assert_eq!(polar_coords(64, 127, 128, 128), (0.5, 1.0));
    let (angle, _) = polar_coords(127, 0, 128, 128);
    assert!(angle < 1.0);
}

#[test]
fn rasterizer_passes_polar_coords_to_the_field() {
    let probe = |angle: f64, radius: f64| {
        Rgb8::new((angle * 100.0) as u8, (radius * 100.0) as u8, 7)
    };
    let buf = rasterize_field(&probe, 4, 3).unwrap();
    assert_eq!(buf.get(0, 0), Rgb8::new(0, 0, 7));
    assert_eq!(buf.get(2, 1), Rgb8::new(50, 50, 7));
    assert_eq!(buf.get(3, 2), Rgb8::new(75, 100, 7));
}

#[test]
fn iris_texture_has_reference_size_and_matches_direct_samples() {
    let field = IrisField::love();
    let buf = rasterize_field(&field, IRIS_WIDTH, IRIS_HEIGHT).unwrap();
    assert_eq!((buf.width(), buf.height()), (128, 128));
    for (x, y) in [(0, 0), (31, 40), (127, 127), (64, 63)] {
        let (a, r) = polar_coords(x, y, IRIS_WIDTH, IRIS_HEIGHT);
        assert_eq!(buf.get(x, y), field.sample(a, r));
    }
}

#[test]
fn rim_is_brighter_than_pupil_edge_on_average() {
    let buf = rasterize_field(&IrisField::love(), IRIS_WIDTH, IRIS_HEIGHT).unwrap();
    let mean_red = |y: u32| {
        buf.row(y).iter().map(|c| u32::from(c.r)).sum::<u32>() / IRIS_WIDTH
    };
    assert!(mean_red(0) > mean_red(IRIS_HEIGHT - 1));
}

#[test]
fn single_row_texture_samples_the_rim() {
    assert_eq!(polar_coords(1, 0, 2, 1), (0.5, 0.0));
}
