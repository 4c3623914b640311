//! LightController integration tests.
//!
//! Drives the full tick loop against `MockHardware`: button debounce,
//! timed rotation, guard and settle delays, and the diagnostic lines.

use relaylights::app::controller::LightController;
use relaylights::app::events::{AppEvent, SwitchCause};
use relaylights::config::ControllerConfig;
use relaylights::drivers::button::Level;
use relaylights::drivers::relays::{RelayChannel, RelayState};
use relaylights::patterns::PatternId;
use relaylights::time::Millis;

use crate::mock_hw::{MockHardware, RecordingSink};

// ── Helpers ───────────────────────────────────────────────────

fn booted(config: ControllerConfig) -> (LightController, MockHardware, RecordingSink) {
    booted_at(config, Millis::ZERO)
}

fn booted_at(
    config: ControllerConfig,
    now: Millis,
) -> (LightController, MockHardware, RecordingSink) {
    let mut ctrl = LightController::new(config).unwrap();
    let mut hw = MockHardware::starting_at(now);
    let mut sink = RecordingSink::new();
    ctrl.start(&mut hw, &mut sink);
    (ctrl, hw, sink)
}

/// Tick with a 1 ms loop yield until `ms` of simulated time has passed.
fn run_for(ctrl: &mut LightController, hw: &mut MockHardware, sink: &mut RecordingSink, ms: u32) {
    let from = hw.now;
    while hw.now.elapsed_since(from) < ms {
        ctrl.tick(hw, sink);
        hw.advance(1);
    }
}

/// Hold the button down until the press registers, then release it and
/// let the release settle.
fn press(ctrl: &mut LightController, hw: &mut MockHardware, sink: &mut RecordingSink) {
    let before = sink.events.len();
    hw.button = Level::Low;
    for _ in 0..100 {
        ctrl.tick(hw, sink);
        hw.advance(1);
        if sink.events.len() > before {
            break;
        }
    }
    assert!(sink.events.len() > before, "press never registered");
    hw.button = Level::High;
    run_for(ctrl, hw, sink, 120);
}

fn quick_rotation(reset: bool) -> ControllerConfig {
    ControllerConfig {
        pattern_duration_ms: 1000,
        reset_pattern_state_on_switch: reset,
        ..ControllerConfig::default()
    }
}

fn lit_channel(state: RelayState) -> Option<usize> {
    RelayChannel::ALL.into_iter().position(|ch| state.is_on(ch))
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_releases_relays_and_announces() {
    let (ctrl, hw, sink) = booted(ControllerConfig::default());

    assert_eq!(hw.writes.len(), 1);
    assert_eq!(hw.writes[0].state, RelayState::ALL_OFF);
    assert_eq!(
        sink.events,
        vec![AppEvent::Started {
            pattern: PatternId::AllOn
        }]
    );
    assert_eq!(sink.lines(), vec!["Relay Light Pattern System Started"]);
    assert_eq!(ctrl.pattern(), PatternId::AllOn);
    assert_eq!(ctrl.relays(), RelayState::ALL_OFF);
}

#[test]
fn first_tick_applies_all_on_with_settle_delay() {
    let (mut ctrl, mut hw, mut sink) = booted(ControllerConfig::default());

    ctrl.tick(&mut hw, &mut sink);

    assert_eq!(hw.last_write().map(|w| w.state), Some(RelayState::ALL_ON));
    assert_eq!(hw.delays_ms, vec![50]);
    assert_eq!(hw.now, Millis(50));
    assert_eq!(ctrl.relays(), RelayState::ALL_ON);
    assert_eq!(ctrl.tick_count(), 1);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ControllerConfig {
        debounce_ms: 0,
        ..ControllerConfig::default()
    };
    assert!(LightController::new(config).is_err());
}

// ── Timed rotation ────────────────────────────────────────────

#[test]
fn rotation_advances_after_twenty_seconds() {
    let (mut ctrl, mut hw, mut sink) = booted(ControllerConfig::default());

    run_for(&mut ctrl, &mut hw, &mut sink, 19_949);
    assert_eq!(ctrl.pattern(), PatternId::AllOn);
    assert_eq!(sink.events.len(), 1);

    run_for(&mut ctrl, &mut hw, &mut sink, 151);
    assert_eq!(ctrl.pattern(), PatternId::AllOff);
    assert_eq!(
        sink.events[1],
        AppEvent::PatternChanged {
            pattern: PatternId::AllOff,
            cause: SwitchCause::Timeout,
        }
    );
    assert_eq!(sink.lines()[1], "Switching to pattern: 2");
    assert_eq!(ctrl.relays(), RelayState::ALL_OFF);
}

#[test]
fn rotation_survives_clock_rollover() {
    let (mut ctrl, mut hw, mut sink) =
        booted_at(ControllerConfig::default(), Millis(u32::MAX - 100));

    run_for(&mut ctrl, &mut hw, &mut sink, 19_900);
    assert_eq!(ctrl.pattern(), PatternId::AllOn);

    run_for(&mut ctrl, &mut hw, &mut sink, 200);
    assert_eq!(ctrl.pattern(), PatternId::AllOff);
    assert_eq!(sink.events.len(), 2);
}

#[test]
fn sequential_pattern_steps_every_500ms() {
    let (mut ctrl, mut hw, mut sink) = booted(quick_rotation(false));

    while ctrl.pattern() != PatternId::SequentialOnOff {
        ctrl.tick(&mut hw, &mut sink);
        hw.advance(1);
    }
    // The switching tick already wrote the first frame.
    let from = hw.writes.len() - 1;
    while ctrl.pattern() == PatternId::SequentialOnOff {
        ctrl.tick(&mut hw, &mut sink);
        hw.advance(1);
    }
    // The last write belongs to the next pattern.
    let seq = &hw.writes[from..hw.writes.len() - 1];

    assert_eq!(seq.len(), 2);
    assert_eq!(lit_channel(seq[0].state), Some(0));
    assert_eq!(lit_channel(seq[1].state), Some(1));
    assert_eq!(seq[1].at.elapsed_since(seq[0].at), 500);
    assert!(seq.iter().all(|w| w.state.count_on() == 1));
}

/// Lit channels written while `SequentialOnOff` is active, for its first
/// two visits.
fn two_sequential_visits(config: ControllerConfig) -> (Vec<usize>, Vec<usize>) {
    let (mut ctrl, mut hw, mut sink) = booted(config);
    let mut visits: Vec<Vec<usize>> = Vec::new();
    let mut active = false;

    while visits.len() < 2 || active {
        let before = hw.writes.len();
        ctrl.tick(&mut hw, &mut sink);
        hw.advance(1);

        let now_active = ctrl.pattern() == PatternId::SequentialOnOff;
        if now_active && !active {
            visits.push(Vec::new());
        }
        if now_active {
            let fresh = &hw.writes[before..];
            if let Some(visit) = visits.last_mut() {
                visit.extend(fresh.iter().filter_map(|w| lit_channel(w.state)));
            }
        }
        active = now_active;
    }
    (visits.remove(0), visits.remove(0))
}

#[test]
fn pattern_state_persists_across_visits() {
    let (first, second) = two_sequential_visits(quick_rotation(false));
    assert_eq!(first, vec![0, 1]);
    // Picks up where the first visit stopped.
    assert_eq!(second, vec![2, 0]);
}

#[test]
fn reset_on_switch_restarts_pattern() {
    let (first, second) = two_sequential_visits(quick_rotation(true));
    assert_eq!(first, vec![0, 1]);
    assert_eq!(second, vec![0, 1]);
}

// ── Button ────────────────────────────────────────────────────

#[test]
fn button_press_advances_with_guard_delay() {
    let (mut ctrl, mut hw, mut sink) = booted(ControllerConfig::default());
    run_for(&mut ctrl, &mut hw, &mut sink, 500);

    press(&mut ctrl, &mut hw, &mut sink);

    assert_eq!(ctrl.pattern(), PatternId::AllOff);
    assert_eq!(
        sink.events[1],
        AppEvent::PatternChanged {
            pattern: PatternId::AllOff,
            cause: SwitchCause::Button,
        }
    );
    assert_eq!(sink.lines()[1], "Button pressed! Switching to pattern: 2");
    assert!(hw.delays_ms.contains(&200));
}

#[test]
fn held_button_fires_once() {
    let (mut ctrl, mut hw, mut sink) = booted(ControllerConfig::default());
    run_for(&mut ctrl, &mut hw, &mut sink, 200);

    hw.button = Level::Low;
    run_for(&mut ctrl, &mut hw, &mut sink, 3000);

    assert_eq!(sink.events.len(), 2);
    assert_eq!(ctrl.pattern(), PatternId::AllOff);
}

#[test]
fn chatter_never_registers() {
    let (mut ctrl, mut hw, mut sink) = booted(ControllerConfig::default());
    run_for(&mut ctrl, &mut hw, &mut sink, 200);

    for i in 0..100 {
        hw.button = if i % 2 == 0 { Level::Low } else { Level::High };
        // Ticks are 51 ms apart here, but every sample sees a new level.
        ctrl.tick(&mut hw, &mut sink);
        hw.advance(1);
    }

    assert_eq!(sink.events.len(), 1);
    assert_eq!(ctrl.pattern(), PatternId::AllOn);
}

#[test]
fn button_press_restarts_rotation_timer() {
    let (mut ctrl, mut hw, mut sink) = booted(ControllerConfig::default());
    run_for(&mut ctrl, &mut hw, &mut sink, 15_000);

    press(&mut ctrl, &mut hw, &mut sink);
    assert_eq!(ctrl.pattern(), PatternId::AllOff);

    // Without the restart the timeout would land near t = 20 s.
    run_for(&mut ctrl, &mut hw, &mut sink, 10_000);
    assert_eq!(ctrl.pattern(), PatternId::AllOff);
    assert_eq!(sink.events.len(), 2);
}

#[test]
fn press_at_timeout_advances_once() {
    let (mut ctrl, mut hw, mut sink) = booted(quick_rotation(false));

    // AllOn ticks are 51 ms apart: 0, 51, ... 918, 969, 1020.
    run_for(&mut ctrl, &mut hw, &mut sink, 960);
    assert_eq!(hw.now, Millis(969));

    hw.button = Level::Low;
    ctrl.tick(&mut hw, &mut sink);
    hw.advance(1);
    assert_eq!(hw.now, Millis(1020));
    // Past the 1000 ms period, and the debounce window closes here too.
    ctrl.tick(&mut hw, &mut sink);

    assert_eq!(ctrl.pattern(), PatternId::AllOff);
    assert_eq!(sink.events.len(), 2);
    assert_eq!(
        sink.events[1],
        AppEvent::PatternChanged {
            pattern: PatternId::AllOff,
            cause: SwitchCause::Button,
        }
    );
}

#[test]
fn twenty_presses_wrap_to_first_pattern() {
    let (mut ctrl, mut hw, mut sink) = booted(ControllerConfig::default());
    run_for(&mut ctrl, &mut hw, &mut sink, 100);

    for _ in 0..20 {
        press(&mut ctrl, &mut hw, &mut sink);
    }

    assert_eq!(ctrl.pattern(), PatternId::AllOn);
    let lines = sink.lines();
    assert_eq!(lines.len(), 21);
    assert_eq!(lines[19], "Button pressed! Switching to pattern: 20");
    assert_eq!(lines[20], "Button pressed! Switching to pattern: 1");
}
