// Copyright 2025 the Zoomer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch session walkthrough.
//!
//! Mount a controller on a simulated page, pinch around the frame center,
//! release, and then rotate the frame to trigger a fit-to-frame resize.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p zoomer_demos --example pinch_session -- --ratio 2.5`

use clap::Parser;
use kurbo::{Rect, Size};
use zoomer_demos::SimulatedPage;
use zoomer_gesture::TouchPoint;
use zoomer_view::{Host, ViewportController};

#[derive(Debug, Parser)]
#[command(about = "Drive a pinch-zoom viewport through one gesture")]
struct Args {
    /// Frame width in pixels.
    #[arg(long, default_value_t = 300.0)]
    frame_width: f64,
    /// Frame height in pixels.
    #[arg(long, default_value_t = 200.0)]
    frame_height: f64,
    /// Natural content width in pixels.
    #[arg(long, default_value_t = 600.0)]
    content_width: f64,
    /// Natural content height in pixels.
    #[arg(long, default_value_t = 600.0)]
    content_height: f64,
    /// Final finger distance relative to the start distance.
    #[arg(long, default_value_t = 2.0)]
    ratio: f64,
    /// Number of move events between start and release.
    #[arg(long, default_value_t = 4)]
    steps: u32,
}

fn report(label: &str, view: &ViewportController<SimulatedPage>) {
    let bounds: Rect = view.host().content_bounds();
    println!(
        "{label:>10}: {:<56} bounds ({:.1}, {:.1})..({:.1}, {:.1}) scroll {:?}",
        view.host().css_transform(),
        bounds.x0,
        bounds.y0,
        bounds.x1,
        bounds.y1,
        view.host().scroll_offset(),
    );
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let page = SimulatedPage::new(
        Size::new(args.frame_width, args.frame_height),
        Size::new(args.content_width, args.content_height),
    );
    let mut view = ViewportController::mount(page);
    report("mount", &view);

    let center = view.host().frame.center();
    let start_half = 40.0;
    let start = [
        TouchPoint::new(0, center.x - start_half, center.y),
        TouchPoint::new(1, center.x + start_half, center.y),
    ];
    if !view.on_touch_start(&start) {
        println!("pinch did not start");
        return;
    }
    report("start", &view);

    let steps = args.steps.max(1);
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        let half = start_half * (1.0 + (args.ratio - 1.0) * t);
        view.on_touch_move(&[
            TouchPoint::new(0, center.x - half, center.y),
            TouchPoint::new(1, center.x + half, center.y),
        ]);
        report(&format!("move {step}"), &view);
    }

    view.on_touch_end(&[]);
    report("release", &view);
    println!(
        "settled scale {:.4} (floor {:.4})",
        view.state().scale,
        view.state().min_scale
    );

    let rotated = Size::new(args.frame_height, args.frame_width);
    let origin = view.host().frame.origin();
    view.host_mut().frame = Rect::from_origin_size(origin, rotated);
    view.on_resize();
    report("resize", &view);

    view.teardown();
    println!("interest after teardown: {:?}", view.interest());
}
