//! Walks a vector through the rotation and normalization operations.
//!
//! Usage:
//! ```text
//! cargo run --example rotate
//! RUST_LOG=citygen=debug cargo run --example rotate   # show degenerate-input events
//! ```

use citygen::math::Point3;
use citygen::{Result, Vector3D};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for citygen.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("rotate=info".parse().unwrap_or_default())
        .add_directive("citygen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut street =
        Vector3D::from_points(&Point3::new(0.0, 0.0, 0.0), &Point3::new(3.0, 4.0, 0.0));
    tracing::info!(%street, length = street.length(), "street direction");

    street.try_normalize()?;
    tracing::info!(%street, "normalized");

    for step in 1..=4 {
        street.rotate_around_z(90.0);
        tracing::info!(step, %street, "rotated 90 degrees around Z");
    }

    let offset = street * 2.5 + Vector3D::from_xy(0.0, 1.0);
    tracing::info!(%offset, "offset");

    let mut degenerate = Vector3D::zero();
    if let Err(err) = degenerate.try_normalize() {
        tracing::warn!(%err, "zero vector cannot be normalized");
    }

    Ok(())
}
