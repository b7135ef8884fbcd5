// Copyright 2025 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `slideway_pager`.
//!
//! These drive a [`Pager`] the way a host would (button presses, touches,
//! resizes, frame ticks) over an in-memory [`VecTrack`], and check the
//! position bounds, button state, and track shape after each step.

use kurbo::Point;
use slideway_pager::{
    Breakpoint, Breakpoints, ButtonFlags, Direction, PagerConfig, PeekPolicy, Pager,
    RelayoutOutcome, RequestOutcome, ResizeDispatcher, Stepping, SwipeThresholds, Track, VecTrack,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One visible item below 600px, two from 600px.
fn config() -> PagerConfig {
    PagerConfig::default()
        .with_breakpoints(Breakpoints::new([Breakpoint::new(600.0, 2)]))
        .with_gap(20.0)
        .with_duration(100)
        .with_settle(10)
        .with_peek(PeekPolicy::NONE)
        .with_stepping(Stepping::Transition)
        .with_swipe(SwipeThresholds {
            min_distance: 20.0,
            max_elapsed_ms: 100,
        })
}

fn mount(items: u32, width: f64) -> Pager<VecTrack<u32>> {
    init_logging();
    Pager::mount(config(), Some(VecTrack::new(0..items)), width).expect("valid setup")
}

/// Ticks until nothing is pending and returns the final time.
fn settle(pager: &mut Pager<VecTrack<u32>>) -> u64 {
    let mut last = 0;
    while let Some(at) = pager.next_deadline() {
        pager.tick(at);
        last = at;
    }
    last
}

fn order(pager: &Pager<VecTrack<u32>>) -> Vec<u32> {
    pager.track().values().copied().collect()
}

const ACTIVE: ButtonFlags = ButtonFlags::VISIBLE.union(ButtonFlags::ENABLED);

#[test]
fn position_stays_in_bounds_for_any_request_sequence() {
    for items in 1..7 {
        for width in [300.0, 700.0] {
            let mut pager = mount(items, width);
            let max = pager.position().max_offset();
            let count = usize::try_from(items).unwrap();
            assert_eq!(max, count.saturating_sub(pager.metrics().visible_count));

            let mut now = 0;
            let pattern = [
                Direction::Forward,
                Direction::Forward,
                Direction::Backward,
                Direction::Forward,
                Direction::Forward,
                Direction::Forward,
                Direction::Backward,
                Direction::Backward,
                Direction::Backward,
                Direction::Backward,
                Direction::Forward,
            ];
            for dir in pattern.iter().cycle().take(60) {
                pager.request(*dir, now);
                // Sometimes let the slide finish, sometimes hammer it.
                now += if now % 3 == 0 { 200 } else { 7 };
                pager.tick(now);
                let offset = pager.position().offset();
                assert!(offset <= max, "items {items} width {width}: {offset} > {max}");
            }
        }
    }
}

#[test]
fn resize_reclamps_offset_into_new_range() {
    let mut pager = mount(5, 300.0);
    assert_eq!(pager.metrics().visible_count, 1);

    let mut now = 0;
    while pager.forward(now) == RequestOutcome::Started {
        now = settle(&mut pager);
    }
    assert_eq!(pager.position().offset(), 4);
    assert_eq!(pager.position().max_offset(), 4);

    let outcome = pager.relayout(700.0);
    assert_eq!(outcome, RelayoutOutcome::Applied { clamped: 1 });
    assert_eq!(pager.metrics().visible_count, 2);
    assert_eq!(pager.position().offset(), 3);
    assert_eq!(pager.position().max_offset(), 3);
    // The first visible child is item 3, and nothing animated.
    assert_eq!(order(&pager)[..2], [3, 4]);
    assert_eq!(pager.track().offset(), 0.0);
    assert_eq!(pager.track().transition(), None);
    assert!(!pager.is_animating());
}

#[test]
fn swipes_map_to_inverted_paging_directions() {
    let mut pager = mount(5, 300.0);

    // Drag left (-30px in 50ms) pages forward.
    pager.on_touch_start(Point::new(200.0, 10.0), 0);
    let out = pager.on_touch_end(Point::new(170.0, 10.0), 50).unwrap();
    assert_eq!(out.intent.direction, Some(Direction::Forward));
    assert_eq!(out.request, Some(RequestOutcome::Started));
    assert!(out.intent.prevents_default());
    let now = settle(&mut pager);
    assert_eq!(pager.position().offset(), 1);

    // Drag right (+30px in 50ms) pages backward.
    pager.on_touch_start(Point::new(200.0, 10.0), now);
    let out = pager.on_touch_end(Point::new(230.0, 10.0), now + 50).unwrap();
    assert_eq!(out.intent.direction, Some(Direction::Backward));
    assert_eq!(out.request, Some(RequestOutcome::Started));
    let now = settle(&mut pager);
    assert_eq!(pager.position().offset(), 0);

    // Too slow (150ms): nothing happens.
    pager.on_touch_start(Point::new(200.0, 10.0), now);
    let out = pager.on_touch_end(Point::new(170.0, 10.0), now + 150).unwrap();
    assert_eq!(out.intent.direction, None);
    assert_eq!(out.request, None);
    assert!(!out.intent.prevents_default());
    assert_eq!(pager.position().offset(), 0);
}

#[test]
fn swipe_during_slide_goes_through_the_same_guard() {
    let mut pager = mount(5, 300.0);
    assert_eq!(pager.forward(0), RequestOutcome::Started);

    pager.on_touch_start(Point::new(200.0, 10.0), 10);
    let out = pager.on_touch_end(Point::new(150.0, 10.0), 40).unwrap();
    assert_eq!(out.intent.direction, Some(Direction::Forward));
    assert_eq!(out.request, Some(RequestOutcome::Busy));

    settle(&mut pager);
    assert_eq!(pager.position().offset(), 1);
    assert_eq!(pager.track().clones(), 1);
}

#[test]
fn double_press_produces_one_clone_round_trip() {
    let mut pager = mount(4, 300.0);
    let before = pager.track().item_count();

    assert_eq!(pager.forward(0), RequestOutcome::Started);
    assert_eq!(pager.forward(0), RequestOutcome::Busy);

    // Exactly one clone while the slide is in flight.
    assert_eq!(pager.track().item_count(), before + 1);
    assert_eq!(pager.track().clones(), 1);

    settle(&mut pager);
    assert_eq!(pager.track().item_count(), before);
    assert_eq!(pager.track().clones(), 1);
    assert_eq!(pager.track().removals(), 1);
    assert_eq!(pager.position().offset(), 1);
    assert_eq!(pager.track().offset(), 0.0);
}

#[test]
fn buttons_follow_position_end_to_end() {
    // Five items, two visible.
    let mut pager = mount(5, 700.0);
    assert_eq!(pager.metrics().visible_count, 2);
    assert_eq!(pager.position().max_offset(), 3);

    let b = pager.buttons();
    assert!(!b.backward.is_visible() && !b.backward.is_enabled());
    assert_eq!(b.forward, ACTIVE);

    let mut now = 0;
    for step in 1..=3 {
        assert_eq!(pager.forward(now), RequestOutcome::Started);

        // Mid-slide: present buttons are disabled, not hidden.
        let mid = pager.buttons();
        assert!(mid.backward.is_visible() && !mid.backward.is_enabled());
        if step < 3 {
            assert!(mid.forward.is_visible() && !mid.forward.is_enabled());
        }

        now = settle(&mut pager);
    }

    assert_eq!(pager.position().offset(), 3);
    let b = pager.buttons();
    assert!(!b.forward.is_visible() && !b.forward.is_enabled());
    assert_eq!(b.backward, ACTIVE);
    assert_eq!(pager.forward(now), RequestOutcome::AtBoundary);
    assert_eq!(order(&pager)[..2], [3, 4]);
}

#[test]
fn too_few_items_never_page() {
    let mut pager = mount(2, 700.0);
    assert_eq!(pager.metrics().visible_count, 2);
    assert!(pager.is_degenerate());

    let b = pager.buttons();
    assert!(!b.backward.is_visible());
    assert!(!b.forward.is_visible());

    assert_eq!(pager.forward(0), RequestOutcome::Degenerate);
    assert_eq!(pager.backward(0), RequestOutcome::Degenerate);
    pager.on_touch_start(Point::new(100.0, 0.0), 0);
    let out = pager.on_touch_end(Point::new(40.0, 0.0), 30).unwrap();
    assert_eq!(out.request, Some(RequestOutcome::Degenerate));

    assert_eq!(pager.position().offset(), 0);
    assert_eq!(pager.track().clones(), 0);
    assert_eq!(pager.next_deadline(), None);
}

#[test]
fn shrinking_back_to_one_visible_re_enables_paging() {
    let mut pager = mount(2, 700.0);
    assert!(pager.is_degenerate());

    pager.relayout(300.0);
    assert!(!pager.is_degenerate());
    assert_eq!(pager.buttons().forward, ACTIVE);
    assert_eq!(pager.forward(0), RequestOutcome::Started);
}

#[test]
fn relayout_is_idempotent() {
    let mut pager = mount(6, 700.0);
    pager.forward(0);
    settle(&mut pager);

    pager.relayout(900.0);
    let metrics = pager.metrics();
    let position = pager.position();
    let layout = order(&pager);
    let extent = pager.track().extent();

    for _ in 0..5 {
        assert_eq!(pager.relayout(900.0), RelayoutOutcome::Applied { clamped: 0 });
    }
    assert_eq!(pager.metrics(), metrics);
    assert_eq!(pager.position(), position);
    assert_eq!(order(&pager), layout);
    assert_eq!(pager.track().extent(), extent);
}

#[test]
fn shared_dispatcher_notifies_connected_pagers_once_per_burst() {
    let mut dispatcher = ResizeDispatcher::new(20);
    let mut a = mount(5, 300.0);
    let mut b = mount(3, 300.0);
    let id_a = a.connect(&mut dispatcher);
    let id_b = b.connect(&mut dispatcher);

    for now in [0, 4, 9, 15] {
        dispatcher.on_resize(now);
    }
    assert_eq!(dispatcher.poll(30), None);
    let notified = dispatcher.poll(35).expect("burst settles");
    assert_eq!(notified, [id_a, id_b]);

    // The host re-measures each notified pager's container.
    for id in notified {
        if Some(id) == a.subscription() {
            a.relayout(700.0);
        } else if Some(id) == b.subscription() {
            b.relayout(700.0);
        }
    }
    assert_eq!(a.metrics().visible_count, 2);
    assert_eq!(b.metrics().visible_count, 2);

    b.disconnect(&mut dispatcher);
    dispatcher.on_resize(100);
    assert_eq!(dispatcher.poll(200), Some(vec![id_a]));
}

#[test]
fn frame_stepping_honours_the_same_contract() {
    init_logging();
    let config = config().with_stepping(Stepping::Frames { steps: 4 });
    let mut pager = Pager::mount(config, Some(VecTrack::new(0..4_u32)), 300.0).unwrap();

    pager.backward(0);
    assert_eq!(pager.forward(0), RequestOutcome::Started);
    assert_eq!(pager.forward(1), RequestOutcome::Busy);

    let mut offsets = Vec::new();
    while pager.is_animating() {
        let at = pager.next_deadline().unwrap();
        pager.tick(at);
        offsets.push(pager.track().offset());
    }
    // Four frames, then the snap back to rest on the last one.
    assert_eq!(offsets.len(), 4);
    assert_eq!(*offsets.last().unwrap(), 0.0);
    assert!(offsets[..3].windows(2).all(|w| w[1] < w[0]));
    assert_eq!(order(&pager), [1, 2, 3, 0]);
    assert_eq!(pager.track().clones(), 1);
}

#[test]
fn teardown_returns_track_at_rest() {
    let mut dispatcher = ResizeDispatcher::default();
    let mut pager = mount(4, 300.0);
    pager.connect(&mut dispatcher);
    pager.forward(0);
    pager.disconnect(&mut dispatcher);
    assert_eq!(dispatcher.subscriber_count(), 0);

    // The slide in flight still finishes cleanly.
    settle(&mut pager);
    let track = pager.into_track();
    assert_eq!(track.item_count(), 4);
    assert_eq!(track.offset(), 0.0);
}
