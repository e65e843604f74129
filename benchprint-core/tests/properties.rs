//! Property tests for the parser and the stepping engine

use benchprint_core::motion::{step_count, CoilPattern, PHASES_PER_STEP};
use benchprint_core::traits::{BlockingDelay, CoilBank};
use benchprint_core::{parse_line, Axis, AxisDriver, Command, MachineConfig};
use proptest::prelude::*;

#[derive(Default)]
struct CountingCoils {
    writes: [u32; 4],
}

impl CoilBank for CountingCoils {
    fn set_coils(&mut self, axis: Axis, _pattern: &CoilPattern) {
        self.writes[axis.index()] += 1;
    }
}

#[derive(Default)]
struct CountingDelay {
    calls: u32,
    total_us: u64,
}

impl BlockingDelay for CountingDelay {
    fn delay_us(&mut self, us: u32) {
        self.calls += 1;
        self.total_us += us as u64;
    }
}

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![
        Just(Axis::X),
        Just(Axis::Y),
        Just(Axis::Z),
        Just(Axis::E)
    ]
}

proptest! {
    #[test]
    fn parse_line_never_panics(line in "\\PC{0,40}") {
        let _ = parse_line(&line);
    }

    #[test]
    fn parse_line_accepts_any_move(axis in axis_strategy(), distance in -1000.0f32..1000.0) {
        let line = format!("G1 {}{:.3}", axis.letter(), distance);
        match parse_line(&line) {
            Command::Move { axis: parsed, distance: d } => {
                prop_assert_eq!(parsed, axis);
                prop_assert!((d - distance).abs() < 0.001);
            }
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn move_with_glued_tail_is_unrecognized(
        axis in axis_strategy(),
        distance in -1000.0f32..1000.0,
        tail in "[a-zA-Z#*!.][a-zA-Z0-9#*!.]{0,5}",
    ) {
        let line = format!("G1{}{:.3}{}", axis.letter(), distance, tail);
        prop_assert_eq!(parse_line(&line), Command::Unrecognized);
    }

    #[test]
    fn temperature_with_glued_tail_is_unrecognized(
        code in prop_oneof![Just(104u32), Just(140u32)],
        celsius in 0.0f32..300.0,
        tail in "[a-zA-Z#*!.][a-zA-Z0-9#*!.]{0,5}",
    ) {
        let line = format!("M{} S{:.1}{}", code, celsius, tail);
        prop_assert_eq!(parse_line(&line), Command::Unrecognized);
    }

    #[test]
    fn move_issues_eight_patterns_per_step(
        axis in axis_strategy(),
        distance in -3.0f32..3.0,
        steps_per_unit in 1u32..64,
    ) {
        let mut config = MachineConfig::default();
        for a in config.axes.iter_mut() {
            a.steps_per_unit = steps_per_unit;
        }
        let mut driver = AxisDriver::new(CountingCoils::default(), CountingDelay::default(), &config);

        let expected = driver.move_duration_us(axis, distance);
        let steps = driver.move_axis(axis, distance);

        prop_assert_eq!(steps, step_count(distance, steps_per_unit));
        prop_assert_eq!(driver.coils().writes[axis.index()], steps * PHASES_PER_STEP as u32);
        prop_assert_eq!(driver.delay().calls, steps * PHASES_PER_STEP as u32);
        prop_assert_eq!(driver.delay().total_us, expected);
        let others: u32 = Axis::ALL
            .iter()
            .filter(|a| **a != axis)
            .map(|a| driver.coils().writes[a.index()])
            .sum();
        prop_assert_eq!(others, 0);
    }
}
