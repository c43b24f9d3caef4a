//! Converts a GeoJSON feature into a path and prints the drawing operations.
//!
//! Run with `RUST_LOG=trace` to see conversion logs.

use geoshape::geoshape_types::cartesian::{Point2, Rect, Size};
use geoshape::geoshape_types::projection::IdentityProjection;
use geoshape::{FeatureShape, PathOp};

const FEATURE: &str = r#"{
  "type": "Feature",
  "geometry": {
    "type": "GeometryCollection",
    "geometries": [
      {"type": "Point", "coordinates": [125.6, 10.1]},
      {"type": "LineString", "coordinates": [[10, 10], [20, 10], [20, 30]]}
    ]
  },
  "properties": {"name": "Dinagat Islands"}
}"#;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let feature: geojson::Feature = FEATURE.parse::<geojson::GeoJson>()?.try_into()?;
    let shape = FeatureShape::from_feature(&feature, IdentityProjection)?;
    let rect = Rect::from_origin_size(Point2::new(0.0, 0.0), Size::new(200.0, 200.0));

    let path = shape.path(&rect);
    for (index, subpath) in path.subpaths().iter().enumerate() {
        println!("subpath {index}:");
        for op in subpath.ops() {
            match op {
                PathOp::MoveTo(p) => println!("  move to ({}, {})", p.x(), p.y()),
                PathOp::LineTo(p) => println!("  line to ({}, {})", p.x(), p.y()),
                PathOp::Arc {
                    center, radius, ..
                } => println!(
                    "  arc around ({}, {}) of radius {radius}",
                    center.x(),
                    center.y()
                ),
                PathOp::Close => println!("  close"),
            }
        }
    }

    if let Some(bounds) = path.bounding_rect() {
        println!(
            "bounds: {}x{} at ({}, {}), inside the frame: {}",
            bounds.width(),
            bounds.height(),
            bounds.x_min,
            bounds.y_min,
            rect.contains(&bounds.origin())
        );
    }

    Ok(())
}
