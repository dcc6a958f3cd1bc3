//! Integration tests for Chase

mod common;
use common::*;

use led_animation::{colors::wheel, Animation, Chase, RainbowBars};

const C: led_animation::Color = RED;
const O: led_animation::Color = OFF;

#[test]
fn first_frame_starts_with_a_bar() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<10>::new(),
        &timer,
        Chase::new(2, 3, false).unwrap(),
    )
    .color(RED)
    .build()
    .unwrap();

    anim.animate();
    assert_eq!(anim.sink().last_frame(), [C, C, O, O, O, C, C, O, O, O]);
}

#[test]
fn bars_move_one_pixel_per_frame() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<10>::new(),
        &timer,
        Chase::new(2, 3, false).unwrap(),
    )
    .color(RED)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..3 {
        anim.animate();
        timer.advance(FRAME_NS);
    }

    let frames = anim.sink().frames();
    assert_eq!(frames[1], [O, C, C, O, O, O, C, C, O, O]);
    assert_eq!(frames[2], [O, O, C, C, O, O, O, C, C, O]);
}

#[test]
fn pattern_repeats_after_one_width() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<10>::new(),
        &timer,
        Chase::new(2, 3, false).unwrap(),
    )
    .color(RED)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..6 {
        anim.animate();
        timer.advance(FRAME_NS);
    }

    let frames = anim.sink().frames();
    assert_eq!(frames[5], frames[0]);
    assert_eq!(anim.generator().offset(), 1);
}

#[test]
fn reverse_moves_toward_start() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<10>::new(),
        &timer,
        Chase::new(2, 3, true).unwrap(),
    )
    .color(RED)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..2 {
        anim.animate();
        timer.advance(FRAME_NS);
    }

    assert_eq!(anim.sink().frames()[1], [C, O, O, O, C, C, O, O, O, C]);
}

#[test]
fn cycle_completes_every_strip_length_frames() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<10>::new(),
        &timer,
        Chase::new(2, 3, false).unwrap(),
    )
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    // Completes on the very first frame, then every 10
    anim.animate();
    assert_eq!(anim.cycle_count(), 1);

    for _ in 0..10 {
        timer.advance(FRAME_NS);
        anim.animate();
    }
    assert_eq!(anim.cycle_count(), 2);
}

#[test]
fn rainbow_bars_color_each_bar() {
    let timer = MockTimeSource::new();
    let chase = Chase::with_colors(2, 3, false, RainbowBars { step: 40 }).unwrap();
    let mut anim = Animation::new(MockStrip::<10>::new(), &timer, chase).unwrap();

    anim.animate();
    let frame = anim.sink().last_frame();
    assert_eq!(frame[0], wheel(0));
    assert_eq!(frame[1], wheel(0));
    assert_eq!(frame[2], OFF);
    assert_eq!(frame[5], wheel(40));
    assert_eq!(frame[6], wheel(40));
}

#[test]
fn reset_returns_to_first_frame() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<10>::new(),
        &timer,
        Chase::new(2, 3, false).unwrap(),
    )
    .color(RED)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..3 {
        anim.animate();
        timer.advance(FRAME_NS);
    }
    anim.reset();
    anim.animate();

    assert_eq!(anim.sink().last_frame(), anim.sink().frames()[0]);
}
