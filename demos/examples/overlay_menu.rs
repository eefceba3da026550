// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A dropdown menu driven through the action bus.
//!
//! Wiring sends clicks as `Toggle` and clicks elsewhere as `Outside`. An observer positions the
//! menu whenever it opens.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example overlay_menu`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_overlay::{Action, Coordinator, Geometry, OverlayConfig, OverlayState, Placement};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut coord = Coordinator::new();
    coord.register("file", OverlayConfig::menu());

    let geometry = Geometry::new(
        Rect::from_origin_size((20.0, 0.0), (60.0, 24.0)),
        Rect::from_origin_size((0.0, 0.0), (160.0, 120.0)),
        Rect::new(0.0, 0.0, 1024.0, 768.0),
    );

    let states = Rc::new(RefCell::new(Vec::new()));
    let placements: Rc<RefCell<Vec<Placement>>> = Rc::default();
    let (state_sink, placement_sink) = (states.clone(), placements.clone());
    let _sub = coord
        .subscribe_with("file", move |notice| {
            state_sink.borrow_mut().push(notice.state);
            if notice.state == OverlayState::Open {
                let p = notice.update_position(&geometry);
                tracing::info!(id = %notice.id, top = p.top, left = p.left, "menu placed");
                placement_sink.borrow_mut().push(p);
            }
        })
        .expect("registered above");

    let bus = coord.bus();
    // Open, close, and reopen from the trigger, then click elsewhere.
    bus.send("file", Action::Toggle);
    bus.send("file", Action::Toggle);
    bus.send("file", Action::Toggle);
    bus.send("file", Action::Outside);

    for change in coord.drain() {
        println!("== {} {:?} -> {:?} ==", change.id, change.from, change.to);
    }

    use OverlayState::{Closed, Open};
    assert_eq!(*states.borrow(), [Closed, Open, Closed, Open, Closed]);
    let placements = placements.borrow();
    assert_eq!(placements.len(), 2);
    assert!(placements.iter().all(|p| p.top == 32.0 && p.left == 0.0));
}
