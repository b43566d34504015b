//! Icosphere statistics
//!
//! Builds icospheres at a few subdivision levels in both shading modes and
//! logs their summaries and buffer sizes.
//!
//! Run with `RUST_LOG=debug cargo run --example icosphere_stats` to also see
//! the builder output.

use anyhow::{Context, Result};
use log::info;
use meshgen::prelude::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    for smooth in [false, true] {
        for subdivision in [0, 2, 4, 8] {
            let params = IcosphereParams::new(1.0, subdivision, smooth);
            let sphere = Icosphere::try_new(params)
                .with_context(|| format!("building icosphere {:?}", params))?;
            let g = sphere.geometry();

            info!("\n{}", sphere);
            info!(
                "vertex buffer: {} bytes ({} x {} byte stride), index buffer: {} bytes, line buffer: {} bytes",
                g.interleaved_size(),
                g.interleaved_vertex_count(),
                g.interleaved_stride(),
                g.index_size(),
                g.line_index_size()
            );
        }
    }

    // Inward-facing sphere, e.g. for a sky dome
    let mut sky = Icosphere::try_new(IcosphereParams::new(50.0, 3, true))?;
    sky.reverse_normals();
    sky.set_radius(100.0);
    info!("sky dome: {} triangles at radius {}", sky.geometry().triangle_count(), sky.radius());

    Ok(())
}
