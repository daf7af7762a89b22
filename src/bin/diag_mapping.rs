//! Diagnostic: read a DXF plan and print rooms, labels and split results.
//!
//! Usage: `diag_mapping <file.dxf> [circle-sides]`
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::{bail, Context, Result};
use dxf_rooms::entities::EntityKinds;
use dxf_rooms::io::dxf::{DxfReader, DxfReaderConfiguration};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: diag_mapping <file.dxf> [circle-sides]");
    };
    let circle_sides = match args.next() {
        Some(raw) => Some(raw.parse::<usize>().context("circle-sides must be a number")?),
        None => None,
    };

    let config = DxfReaderConfiguration {
        circle_sides,
        ..Default::default()
    };
    let drawing = DxfReader::from_file(&path)
        .with_context(|| format!("opening {path}"))?
        .with_configuration(config)
        .read()
        .with_context(|| format!("reading {path}"))?;

    println!("=== {path} ===");
    println!(
        "  sections: {}",
        drawing.sections.names().map(|n| n.key()).collect::<Vec<_>>().join(", ")
    );
    println!(
        "  polygons={} circles={} texts={} layers={}",
        drawing.polygons.len(),
        drawing.circles.len(),
        drawing.texts.len(),
        drawing.layers.len()
    );
    if let Some(extents) = drawing.extents() {
        println!("  extents: {extents}");
    }
    let params = drawing.parameters;
    println!(
        "  viewport: rotation={} origin={} center={}",
        params.rotation_angle, params.origin_point, params.view_center_point
    );
    let used: Vec<String> = drawing.entity_layers(EntityKinds::all()).into_iter().collect();
    println!("  layers in use: {}", used.join(", "));

    println!("\n--- Mapping ---");
    let mapping = drawing.mapping();
    for entry in mapping.labeled() {
        let labels: Vec<&str> = entry.texts.iter().map(|t| t.content.as_str()).collect();
        println!(
            "  {:<6} {:<16} area={:<12.3} {}",
            entry.polygon.id.to_string(),
            entry.polygon.layer,
            entry.polygon.area(),
            labels.join(" | ")
        );
    }
    println!("  unlabeled polygons: {}", mapping.unlabeled().count());
    for orphan in mapping.orphans() {
        println!("  ORPHAN  {:<30} at {}", orphan.content, orphan.anchor);
    }

    println!("\n--- Split ---");
    let split = drawing.split_polygons();
    println!("  {} polygon(s) -> {} polygon(s)", drawing.polygons.len(), split.len());

    if !drawing.notifications.is_empty() {
        println!("\n--- Notifications ---");
        for notification in &drawing.notifications {
            println!("  {notification}");
        }
    }

    Ok(())
}
