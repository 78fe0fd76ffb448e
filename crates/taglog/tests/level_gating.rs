//! Integration tests for level gating.
//!
//! These tests verify that a facility prints a line only when its switch for
//! the level is on, and that a logger additionally requires its own switch.

use taglog::{Facility, Levels, Logger, MemoryLog, Severity};

fn capture(levels: Levels) -> (Facility, MemoryLog) {
    let log = MemoryLog::new();
    (Facility::with_output(levels, log.clone()), log)
}

fn every_levels() -> impl Iterator<Item = Levels> {
    (0u8..8).map(|bits| Levels::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
}

fn emit_all(logger: &Logger) {
    logger.debug(&[&"d"]);
    logger.warn(&[&"w"]);
    logger.error(&[&"e"]);
}

// ============================================================================
// Facility Gating
// ============================================================================

/// Verifies each facility switch controls exactly its own level.
#[test]
fn facility_switches_are_independent() {
    for levels in every_levels() {
        let (facility, log) = capture(levels);
        facility.debug(&[&"d"]);
        facility.warn(&[&"w"]);
        facility.error(&[&"e"]);

        let mut expected = Vec::new();
        if levels.debug {
            expected.push("[DBG] d".to_string());
        }
        if levels.warn {
            expected.push("[WRN] w".to_string());
        }
        if levels.error {
            expected.push("[ERR] e".to_string());
        }
        assert_eq!(log.lines(), expected, "levels={levels}");
    }
}

// ============================================================================
// Logger Gating
// ============================================================================

/// Verifies a logger line needs both its own and the facility switch.
#[test]
fn logger_requires_both_switches() {
    for global in every_levels() {
        for instance in every_levels() {
            let (facility, log) = capture(global);
            let logger = Logger::builder("t")
                .levels(instance)
                .facility(facility)
                .build();
            emit_all(&logger);

            let both = global.intersect(instance);
            let expected: Vec<String> = [
                (Severity::Debug, "[DBG] [t] d"),
                (Severity::Warn, "[WRN] [t] w"),
                (Severity::Error, "[ERR] [t] e"),
            ]
            .into_iter()
            .filter(|(severity, _)| both.enabled(*severity))
            .map(|(_, line)| line.to_string())
            .collect();
            assert_eq!(log.lines(), expected, "global={global} instance={instance}");
        }
    }
}

/// Verifies two loggers on one facility keep their own switches.
#[test]
fn loggers_share_facility_but_not_switches() {
    let (facility, log) = capture(Levels::ALL);
    let chatty = Logger::builder("chatty").facility(facility.clone()).build();
    let terse = Logger::builder("terse")
        .debug(false)
        .warn(false)
        .facility(facility)
        .build();

    emit_all(&chatty);
    emit_all(&terse);

    assert_eq!(
        log.lines(),
        vec![
            "[DBG] [chatty] d".to_string(),
            "[WRN] [chatty] w".to_string(),
            "[ERR] [chatty] e".to_string(),
            "[ERR] [terse] e".to_string(),
        ]
    );
}

/// Verifies a timestamped prefix stays a single segment after the label.
#[test]
fn timestamp_prefix_precedes_tag_without_space() {
    let (facility, log) = capture(Levels::ALL);
    let timed = Logger::builder("sched")
        .time_format("[year]-[month]-[day]")
        .expect("valid format")
        .facility(facility)
        .build();

    timed.warn(&[&"tick"]);

    let lines = log.lines();
    assert_eq!(lines.len(), 1);
    let rest = lines[0].strip_prefix("[WRN] [").expect("label then bracket");
    let (date, tail) = rest.split_once(']').expect("closing bracket");
    assert_eq!(date.len(), "2024-01-01".len());
    assert_eq!(tail, "[sched] tick");
}
