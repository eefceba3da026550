// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A modal dialog with a host that measures and positions it.
//!
//! Shows the flicker-free present pass, the background scroll lock, and that Escape, backdrop
//! clicks, and outside clicks each close the modal.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example overlay_modal`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_overlay::{
    Action, Coordinator, Effect, Geometry, OverlayConfig, OverlayHost, OverlayId, Placement,
    Positioning,
};

/// A pretend retained-mode surface.
#[derive(Default)]
struct Surface {
    hidden_for_measure: bool,
    position: Option<(f64, f64, Positioning)>,
}

impl OverlayHost for Surface {
    fn prepare_measure(&mut self, id: &OverlayId) {
        println!("  [{id}] laid out, hidden");
        self.hidden_for_measure = true;
    }

    fn measure(&mut self, _id: &OverlayId) -> Geometry {
        Geometry::new(
            Rect::from_origin_size((400.0, 20.0), (80.0, 30.0)),
            Rect::from_origin_size((0.0, 0.0), (480.0, 320.0)),
            Rect::new(0.0, 0.0, 1280.0, 720.0),
        )
        .with_boundary(Rect::new(0.0, 0.0, 1280.0, 4000.0))
    }

    fn apply_placement(&mut self, id: &OverlayId, p: &Placement) {
        assert!(self.hidden_for_measure, "coordinates written while visible");
        println!("  [{id}] {:?} top={} left={}", p.positioning, p.top, p.left);
        self.position = Some((p.top, p.left, p.positioning));
    }

    fn finish_measure(&mut self, id: &OverlayId) {
        println!("  [{id}] visible");
        self.hidden_for_measure = false;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut coord = Coordinator::new();
    let scroll_locked = Rc::new(Cell::new(false));
    let lock = scroll_locked.clone();
    coord.set_effect_handler(move |id, effect| {
        tracing::info!(%id, ?effect, "background scroll");
        lock.set(effect == Effect::SuspendScroll);
    });
    coord.register("settings", OverlayConfig::modal());

    let mut surface = Surface::default();
    for closer in [Action::Esc, Action::Close, Action::Outside] {
        println!("== open, then {closer:?} ==");
        assert_eq!(coord.dispatch("settings", Action::Open).len(), 1);
        assert!(scroll_locked.get());
        let placement = coord
            .present("settings", &mut surface)
            .expect("registered above");
        tracing::info!(top = placement.top, left = placement.left, "dialog presented");
        let closed = coord.dispatch("settings", closer);
        assert_eq!(closed.len(), 1, "{closer:?} closes the modal");
        assert!(!scroll_locked.get());
    }

    // The oversized boundary collapses to the viewport; the dialog is centered and fixed.
    assert_eq!(surface.position, Some((200.0, 400.0, Positioning::Fixed)));
}
