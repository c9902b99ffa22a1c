//! Scripted drawing session that prints an SVG pattern to stdout.
//!
//! ```sh
//! RUST_LOG=tilestroke=trace cargo run --example draw --features tracing -- p6 > out.svg
//! ```

use std::fmt::Write as _;

use glam::{DVec2, dvec2};
use tilestroke::{
    Action, Color, DrawingState, Path, PatternConfig, PatternPipeline, SmoothFactor,
    TileDimensions, TileRenderer, defaults,
};

/// Collects `<path>` elements for one `<pattern>`.
#[derive(Default)]
struct SvgPattern {
    body: String,
    size: DVec2,
}

impl TileRenderer for SvgPattern {
    fn begin_tile(&mut self, dimensions: TileDimensions) {
        self.size = dimensions.size();
    }

    fn draw_path(&mut self, path: &Path, offset: DVec2) {
        let Some((first, rest)) = path.points.split_first() else {
            return;
        };
        let mut d = format!("M{} {}", first.x + offset.x, first.y + offset.y);
        if rest.is_empty() {
            // zero-length segment so round caps draw a dot
            let _ = write!(d, " L{} {}", first.x + offset.x, first.y + offset.y);
        }
        for p in rest {
            let _ = write!(d, " L{} {}", p.x + offset.x, p.y + offset.y);
        }
        let _ = writeln!(
            self.body,
            r#"    <path d="{d}" stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#,
            path.style.color, path.style.stroke_width,
        );
    }
}

impl SvgPattern {
    fn into_svg(self) -> String {
        let (w, h) = (self.size.x, self.size.y);
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600">"#,
                "\n  <defs>\n",
                r#"  <pattern id="tile" width="{w}" height="{h}" patternUnits="userSpaceOnUse">"#,
                "\n{body}  </pattern>\n  </defs>\n",
                r#"  <rect width="100%" height="100%" fill="url(#tile)"/>"#,
                "\n</svg>\n"
            ),
            w = w,
            h = h,
            body = self.body,
        )
    }
}

fn spiral(center: DVec2, turns: f64, samples: usize) -> Vec<DVec2> {
    (0..samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            let angle = t * turns * std::f64::consts::TAU;
            center + DVec2::from_angle(angle) * (5.0 + 60.0 * t)
        })
        .collect()
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let key = std::env::args().nth(1).unwrap_or_else(|| "p3".to_string());
    let config = PatternConfig::builder()
        .group_key(key)
        .tile_size(80.0)
        .build()?;
    let pipeline = PatternPipeline::new(config);
    tracing::info!(
        group = %config.group,
        width = pipeline.dimensions().width,
        height = pipeline.dimensions().height,
        "pattern configured"
    );

    let red: Color = defaults::PALETTE[4].parse().map_err(tilestroke::ConfigError::from)?;
    let mut actions = vec![
        Action::SetColor(red),
        Action::SetStrokeWidth(defaults::STROKE_WIDTHS[2]),
    ];
    let mut points = spiral(dvec2(60.0, 60.0), 2.5, 120).into_iter();
    if let Some(first) = points.next() {
        actions.push(Action::Press(first));
        actions.extend(points.map(Action::Drag));
        actions.push(Action::Release);
    }

    actions.extend([
        Action::SetColor(Color::Rgb(0x21, 0x96, 0xf3)),
        Action::SetSmoothFactor(SmoothFactor::OFF),
        Action::Press(dvec2(10.0, 130.0)),
        Action::Drag(dvec2(70.0, 150.0)),
        Action::Drag(dvec2(130.0, 110.0)),
        Action::Release,
        // a stray stroke, taken back
        Action::Press(dvec2(0.0, 0.0)),
        Action::Drag(dvec2(200.0, 200.0)),
        Action::Undo,
        Action::Press(dvec2(40.0, 40.0)),
        Action::Release,
    ]);

    let state = actions.into_iter().fold(DrawingState::new(), DrawingState::apply);
    let tile = state.render(&pipeline);
    tracing::info!(
        strokes = state.paths().len(),
        rendered = tile.paths.len(),
        crossing = tile.crossing_count(),
        "drawing done"
    );

    let mut svg = SvgPattern::default();
    tile.render(&mut svg);
    print!("{}", svg.into_svg());
    Ok(())
}
