//! Integration tests for Comet

mod common;
use common::*;

use led_animation::{Animation, AnimationError, Comet, Srgb};

const HEAD: led_animation::Color = Srgb::new(100, 0, 0);
const DIM: led_animation::Color = Srgb::new(10, 0, 0);
const BRIGHT: led_animation::Color = Srgb::new(55, 0, 0);

#[test]
fn head_enters_from_the_first_pixel() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<5>::new(),
        &timer,
        Comet::<4>::new(2, false, false).unwrap(),
    )
    .color(HEAD)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..4 {
        anim.animate();
        timer.advance(FRAME_NS);
    }

    let frames = anim.sink().frames();
    assert_eq!(frames[0], [BRIGHT, OFF, OFF, OFF, OFF]);
    assert_eq!(frames[1], [DIM, BRIGHT, OFF, OFF, OFF]);
    assert_eq!(frames[2], [OFF, DIM, BRIGHT, OFF, OFF]);
    assert_eq!(frames[3], [OFF, OFF, DIM, BRIGHT, OFF]);
}

#[test]
fn pass_erases_its_trail() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<5>::new(),
        &timer,
        Comet::<4>::new(2, false, false).unwrap(),
    )
    .color(HEAD)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    // 5 pixels + 2 tail + 1 blank
    for _ in 0..8 {
        anim.animate();
        timer.advance(FRAME_NS);
    }

    assert_eq!(anim.sink().last_frame(), [OFF; 5]);
    assert_eq!(anim.cycle_count(), 1);
    assert_eq!(anim.generator().position(), 0);
}

#[test]
fn reversed_comet_enters_from_the_last_pixel() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<5>::new(),
        &timer,
        Comet::<4>::new(2, true, false).unwrap(),
    )
    .color(HEAD)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..3 {
        anim.animate();
        timer.advance(FRAME_NS);
    }

    let frames = anim.sink().frames();
    assert_eq!(frames[0], [OFF; 5]);
    assert_eq!(frames[1], [OFF, OFF, OFF, OFF, BRIGHT]);
    assert_eq!(frames[2], [OFF, OFF, OFF, BRIGHT, DIM]);
}

#[test]
fn pass_length_is_strip_plus_tail_plus_one() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<30>::new(),
        &timer,
        Comet::<16>::new(10, false, false).unwrap(),
    )
    .color(RED)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..40 {
        anim.animate();
        timer.advance(FRAME_NS);
    }
    assert_eq!(anim.cycle_count(), 0);

    anim.animate();
    assert_eq!(anim.cycle_count(), 1);
    assert!(!anim.generator().reverse());
}

#[test]
fn bounce_flips_direction_and_completes_on_round_trip() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<30>::new(),
        &timer,
        Comet::<16>::new(10, false, true).unwrap(),
    )
    .color(RED)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..41 {
        anim.animate();
        timer.advance(FRAME_NS);
    }
    assert!(anim.generator().reverse());
    assert_eq!(anim.cycle_count(), 0);

    for _ in 0..41 {
        anim.animate();
        timer.advance(FRAME_NS);
    }
    assert!(!anim.generator().reverse());
    assert_eq!(anim.cycle_count(), 1);
}

#[test]
fn color_change_rebuilds_fade() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<5>::new(),
        &timer,
        Comet::<4>::new(2, false, false).unwrap(),
    )
    .color(HEAD)
    .build()
    .unwrap();

    anim.set_color(Srgb::new(0, 0, 200));
    assert_eq!(
        anim.generator().fade_table(),
        &[OFF, Srgb::new(0, 0, 20), Srgb::new(0, 0, 110)]
    );
}

#[test]
fn reset_restarts_pass() {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<5>::new(),
        &timer,
        Comet::<4>::new(2, false, false).unwrap(),
    )
    .color(HEAD)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    for _ in 0..3 {
        anim.animate();
        timer.advance(FRAME_NS);
    }
    anim.reset();
    anim.fill(OFF);
    anim.animate();

    assert_eq!(anim.sink().last_frame(), [BRIGHT, OFF, OFF, OFF, OFF]);
}

#[test]
fn tail_must_fit_fade_capacity() {
    assert!(matches!(
        Comet::<10>::new(10, false, false),
        Err(AnimationError::CapacityExceeded)
    ));
}

fn run_short_strip(reverse: bool, bounce: bool) -> (u32, [led_animation::Color; 3]) {
    let timer = MockTimeSource::new();
    let mut anim = Animation::builder(
        MockStrip::<3>::new(),
        &timer,
        Comet::<16>::new(10, reverse, bounce).unwrap(),
    )
    .color(RED)
    .speed_ns(FRAME_NS)
    .build()
    .unwrap();

    // Two passes of 3 pixels + 10 tail + 1 blank
    for _ in 0..28 {
        assert!(anim.animate());
        timer.advance(FRAME_NS);
    }
    (anim.cycle_count(), anim.sink().last_frame())
}

#[test]
fn tail_longer_than_strip_is_clipped() {
    // MockStrip panics on any write past its last pixel
    assert_eq!(run_short_strip(false, false), (2, [OFF; 3]));
    assert_eq!(run_short_strip(true, false), (2, [OFF; 3]));
    assert_eq!(run_short_strip(false, true), (1, [OFF; 3]));
    assert_eq!(run_short_strip(true, true), (1, [OFF; 3]));
}
