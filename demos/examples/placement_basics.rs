// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement basics.
//!
//! Solves a menu below its trigger, then shrinks the boundary so the preferred side no longer
//! fits and the solver flips above the trigger.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example placement_basics`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_placement::{Mode, Request, Side, solve};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let trigger = Rect::from_origin_size((50.0, 100.0), (40.0, 20.0));
    let container = Size::new(100.0, 30.0);
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let base = Request::new(trigger, container, viewport)
        .with_side(Side::Bottom)
        .with_mode(Mode::Menu);

    let roomy = solve(&base);
    println!("== Bottom, viewport boundary ==\n  {:?}", roomy);
    assert_eq!((roomy.top, roomy.left), (128.0, 20.0));

    let cramped = solve(&base.with_boundary(Rect::new(0.0, 0.0, 800.0, 140.0)));
    println!("== Bottom, short boundary ==\n  {:?}", cramped);
    assert_eq!((cramped.top, cramped.left), (62.0, 20.0));
    assert_eq!(cramped.side, Side::Top);

    let modal = solve(
        &Request::new(trigger, Size::new(300.0, 200.0), viewport)
            .with_boundary(Rect::new(0.0, 0.0, 1600.0, 1200.0))
            .with_mode(Mode::Modal),
    );
    println!("== Modal, oversized boundary ==\n  {:?}", modal);
    assert_eq!((modal.top, modal.left), (200.0, 250.0));
}
