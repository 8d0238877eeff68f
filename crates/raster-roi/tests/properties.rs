use rand::{rngs::StdRng, Rng, SeedableRng};
use raster_image::{ImageSize, Mask};
use raster_roi::{label, LabelConfig, Polarity, RegionFilter, RegionMapManager};

fn random_mask(rng: &mut StdRng, size: ImageSize, density: f64) -> Mask {
    Mask::from_fn(size, |_, _| rng.random_bool(density))
}

fn random_masks(seed: u64) -> Vec<Mask> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..24)
        .map(|i| {
            let size = ImageSize {
                width: rng.random_range(1..40),
                height: rng.random_range(1..40),
            };
            let density = [0.1, 0.3, 0.5, 0.7][i % 4];
            random_mask(&mut rng, size, density)
        })
        .collect()
}

fn both() -> RegionFilter {
    RegionFilter::polarity(Polarity::Both)
}

#[test]
fn test_labels_partition_the_mask() {
    for mask in random_masks(1) {
        for allow_corners in [false, true] {
            let manager = label(&mask, &LabelConfig::with_corners(allow_corners)).unwrap();
            let map = manager.region_map();

            for y in 0..mask.height() {
                for x in 0..mask.width() {
                    let id = map.get(x, y).unwrap();
                    assert_ne!(id, 0);
                    assert_eq!(id > 0, mask.get(x, y));
                }
            }

            let total: usize = manager.regions(&both()).iter().map(|r| r.surface()).sum();
            assert_eq!(total, mask.size().area());
            assert_eq!(
                manager.regions(&both()).len(),
                manager.positive_count() + manager.negative_count()
            );
        }
    }
}

#[test]
fn test_corners_never_add_regions() {
    for mask in random_masks(2) {
        let four = label(&mask, &LabelConfig::with_corners(false)).unwrap();
        let eight = label(&mask, &LabelConfig::with_corners(true)).unwrap();
        assert!(eight.positive_count() <= four.positive_count());
        assert!(eight.negative_count() <= four.negative_count());
    }
}

fn first_pixel(manager: &RegionMapManager, id: i16) -> usize {
    let region = manager.region_by_id(id).unwrap();
    let p = region.points().next().unwrap();
    p.y as usize * manager.size().width + p.x as usize
}

#[test]
fn test_ids_follow_discovery_order() {
    for mask in random_masks(3) {
        let manager = label(&mask, &LabelConfig::default()).unwrap();

        // both polarities interleave by where each region starts
        let seeds: Vec<usize> = manager
            .regions(&both())
            .iter()
            .map(|r| first_pixel(&manager, r.id()))
            .collect();
        assert!(seeds.windows(2).all(|w| w[0] < w[1]));

        let negatives: Vec<i16> = manager
            .regions(&RegionFilter::polarity(Polarity::Negative))
            .iter()
            .map(|r| r.id())
            .collect();
        assert!(negatives.windows(2).all(|w| w[0] == w[1] + 1));

        for id in 1..manager.positive_count() as i16 {
            assert!(first_pixel(&manager, id) < first_pixel(&manager, id + 1));
        }
        for id in 1..manager.negative_count() as i16 {
            assert!(first_pixel(&manager, -id) < first_pixel(&manager, -id - 1));
        }
    }
}

#[test]
fn test_region_masks_rebuild_the_input() {
    for mask in random_masks(4) {
        let manager = label(&mask, &LabelConfig::default()).unwrap();

        let mut rebuilt = Mask::from_size_val(mask.size(), false);
        for region in manager.regions(&RegionFilter::default()) {
            let bbox = region.bounding_box();
            let local = region.mask();
            for y in 0..local.height() {
                for x in 0..local.width() {
                    if local.get(x, y) {
                        assert!(!rebuilt.get(bbox.column + x, bbox.row + y));
                        rebuilt.set(bbox.column + x, bbox.row + y, true).unwrap();
                    }
                }
            }
        }

        assert_eq!(rebuilt, mask);
    }
}

#[test]
fn test_region_mask_relabels_to_one_region() {
    for mask in random_masks(6) {
        for allow_corners in [false, true] {
            let config = LabelConfig::with_corners(allow_corners);
            let manager = label(&mask, &config).unwrap();

            for region in manager.regions(&both()) {
                let relabeled = label(&region.mask(), &config).unwrap();
                assert_eq!(relabeled.positive_count(), 1, "region {}", region.id());
                let positives = relabeled.regions(&RegionFilter::polarity(Polarity::Positive));
                assert_eq!(positives[0].surface(), region.surface());
            }
        }
    }
}

#[test]
fn test_shape_descriptor_bounds() {
    for mask in random_masks(5) {
        let manager = label(&mask, &LabelConfig::default()).unwrap();

        for region in manager.regions(&both()) {
            let bbox = region.bounding_box();
            let hull = region.convex_hull();
            for p in &hull.points {
                assert!(p.x >= bbox.column as i32 && p.x <= (bbox.column + bbox.width) as i32);
                assert!(p.y >= bbox.row as i32 && p.y <= (bbox.row + bbox.height) as i32);
            }
            assert!(hull.surface >= region.surface() as f64 - 1e-9);

            let solidity = region.solidity();
            assert!(solidity > 0.0 && solidity <= 1.0 + 1e-9);

            let feret = region.feret();
            assert!(feret.min_diameter.length <= feret.max_diameter.length + 1e-9);
            assert!(feret.aspect_ratio > 0.0 && feret.aspect_ratio <= 1.0 + 1e-9);
            for diameter in [feret.min_diameter, feret.max_diameter] {
                assert!(diameter.angle > -90.0 && diameter.angle <= 90.0);
            }

            let mbr = region.minimum_bounding_rectangle();
            assert!(mbr.surface >= hull.surface - 1e-6);
            assert!(mbr.surface <= (bbox.width * bbox.height) as f64 + 1e-6);

            let ellipse = region.ellipse();
            assert!(ellipse.minor_axis.length <= ellipse.major_axis.length);

            assert!(region.perimeter() > 0.0);
            assert!(region.sphericity() > 0.0);
        }
    }
}
