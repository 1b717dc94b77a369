//! Drives the engine with a synthetic page: three panels, a burst of scroll
//! events per frame, and a stdout paint sink. Run with
//! `cargo run --example scroll_feed`.

use std::collections::BTreeMap;

use scrollax::{
    FrameScheduler, HolderBox, ImageSize, PaintFrame, PaintSink, PanelConfig, PanelId,
    PanelSource, ParallaxEngine, ViewMeasure, Viewport,
};

struct SyntheticPage {
    holders: BTreeMap<String, HolderBox>,
    images: BTreeMap<String, ImageSize>,
}

impl ViewMeasure for SyntheticPage {
    fn holder_box(&self, source: &PanelSource) -> Option<HolderBox> {
        self.holders.get(&source.holder).copied()
    }

    fn image_size(&self, src: &str) -> Option<ImageSize> {
        self.images.get(src).copied()
    }
}

struct StdoutSink;

impl PaintSink for StdoutSink {
    fn paint(&mut self, panel: PanelId, frame: PaintFrame) {
        println!(
            "  panel {} -> {}x{} at ({}, {})",
            panel.0, frame.size.width, frame.size.height, frame.offset.x, frame.offset.y
        );
    }
}

#[derive(Default)]
struct TickFlag {
    pending: bool,
}

impl FrameScheduler for TickFlag {
    fn schedule(&mut self) {
        self.pending = true;
    }
}

fn build_page() -> SyntheticPage {
    let mut holders = BTreeMap::new();
    let mut images = BTreeMap::new();
    for (idx, offset_top) in [0.0, 900.0, 1800.0].into_iter().enumerate() {
        holders.insert(
            format!("section-{idx}"),
            HolderBox {
                width: 1280.0,
                height: 480.0,
                offset_top,
            },
        );
        images.insert(
            format!("section-{idx}.jpg"),
            ImageSize {
                width: 1920.0,
                height: 1080.0,
            },
        );
    }
    SyntheticPage { holders, images }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let page = build_page();
    let config = PanelConfig::from_json(r#"{"speed": 0.3, "target": "[data-parallax]"}"#)?;
    let mut engine = ParallaxEngine::new(config, Viewport::new(0.0, 800.0)?)?;
    let mut ticks = TickFlag::default();

    let sources = (0..3)
        .map(|idx| PanelSource {
            holder: format!("section-{idx}"),
            image_src: format!("section-{idx}.jpg"),
        })
        .collect();
    engine.reload(sources, &page, &mut ticks);

    let mut sink = StdoutSink;
    for frame in 0u32..6 {
        // A burst of scroll events between two ticks; only the last value
        // matters when the frame callback runs.
        for step in 0..4 {
            engine.on_scroll(f64::from(frame * 400 + step * 100), &mut ticks);
        }
        if std::mem::take(&mut ticks.pending) {
            println!("frame {frame}:");
            engine.on_frame(&page, &mut sink);
        }
    }

    Ok(())
}
