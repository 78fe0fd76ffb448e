//! Integration tests for abort recovery.
//!
//! These tests verify that a recovery scope intercepts an abort exactly
//! once, that unrelated panics pass through it, and that an abort with no
//! scope ends its thread.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use taglog::{Abort, Facility, Levels, Logger, MemoryLog, in_recovery_scope, install_panic_hook, raise};

fn capture(levels: Levels) -> (Facility, MemoryLog) {
    let log = MemoryLog::new();
    (Facility::with_output(levels, log.clone()), log)
}

// ============================================================================
// Recovered Aborts
// ============================================================================

/// Verifies a scope with nothing in flight is a no-op.
#[test]
fn scope_without_abort_is_noop() {
    let (facility, log) = capture(Levels::ALL);
    let value = facility.break_on_error(|| "done");
    assert_eq!(value.ok(), Some("done"));
    assert!(log.is_empty());
}

/// Verifies the function owning the scope returns normally after an abort
/// and exactly one recovery line is printed.
#[test]
fn function_with_scope_returns_normally() {
    install_panic_hook();
    let (facility, log) = capture(Levels::ALL);

    let worker = |facility: &Facility| -> &'static str {
        let outcome = facility.break_on_error(|| {
            facility.check_error(Err::<(), _>(io::Error::other("errX")), &[]);
            "unreachable"
        });
        match outcome {
            Ok(_) => "completed",
            Err(_) => "recovered",
        }
    };

    assert_eq!(worker(&facility), "recovered");
    let recovered: Vec<String> = log
        .lines()
        .into_iter()
        .filter(|line| line.starts_with("[ERR] recovered from abort:"))
        .collect();
    assert_eq!(recovered, vec!["[ERR] recovered from abort: errX".to_string()]);
}

/// Verifies nested scopes: the innermost one intercepts, the outer sees a
/// normal return.
#[test]
fn innermost_scope_intercepts_once() {
    install_panic_hook();
    let (facility, log) = capture(Levels::ALL);

    let outer = facility.break_on_error(|| {
        let inner: Result<(), Abort> = facility.break_on_error(|| raise("inner"));
        assert!(in_recovery_scope());
        inner.map_err(|abort| abort.to_string())
    });

    assert_eq!(outer.ok(), Some(Err("inner".to_string())));
    assert_eq!(log.lines(), vec!["[ERR] recovered from abort: inner".to_string()]);
    assert!(!in_recovery_scope());
}

/// Verifies the recovery line ignores the logger's tag and instance switches.
#[test]
fn logger_scope_logs_without_tag() {
    install_panic_hook();
    let (facility, log) = capture(Levels::ALL);
    let silent_logger = Logger::builder("svc")
        .levels(Levels::NONE)
        .facility(facility)
        .build();

    let outcome: Result<(), Abort> = silent_logger.break_on_error(|| {
        silent_logger.check_error(Err::<(), _>(io::Error::other("dropped")), &[]);
    });

    assert!(outcome.is_err());
    assert_eq!(log.lines(), vec!["[ERR] recovered from abort: dropped".to_string()]);
}

/// Verifies the recovered abort hands back the original error value.
#[test]
fn recovered_abort_keeps_error_type() {
    install_panic_hook();
    let (facility, _log) = capture(Levels::NONE);
    let outcome: Result<(), Abort> = facility.break_on_error(|| {
        facility.check_error(
            Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "gone")),
            &[],
        );
    });

    let error = outcome.expect_err("aborted").into_inner();
    let io_error = error.downcast::<io::Error>().expect("io error");
    assert_eq!(io_error.kind(), io::ErrorKind::NotFound);
}

// ============================================================================
// Pass-Through and Termination
// ============================================================================

/// Verifies a panic that is not an abort keeps unwinding.
#[test]
fn ordinary_panic_is_not_intercepted() {
    let (facility, log) = capture(Levels::ALL);
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _: Result<(), Abort> = facility.break_on_error(|| panic!("plain panic"));
    }));

    assert!(result.is_err());
    assert!(log.is_empty());
}

/// Verifies an abort with no scope ends the thread with an abort payload.
#[test]
fn uncaught_abort_terminates_thread() {
    install_panic_hook();
    let handle = thread::spawn(|| {
        let facility = Facility::with_output(Levels::NONE, MemoryLog::new());
        facility.check_error(Err::<(), _>(io::Error::other("fatal")), &[]);
    });

    let payload = handle.join().expect_err("thread terminated");
    let abort = payload.downcast::<Abort>().expect("abort payload");
    assert_eq!(abort.to_string(), "fatal");
}

/// Verifies aborts stay on their own thread.
#[test]
fn aborts_are_scoped_per_thread() {
    install_panic_hook();
    let (facility, log) = capture(Levels::ALL);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let facility = facility.clone();
            thread::spawn(move || {
                facility
                    .break_on_error(|| {
                        if i % 2 == 0 {
                            raise(format!("worker {i}"));
                        }
                        i
                    })
                    .is_ok()
            })
        })
        .collect();

    let succeeded: Vec<bool> = handles
        .into_iter()
        .map(|handle| handle.join().expect("scope contains the abort"))
        .collect();

    assert_eq!(succeeded, vec![false, true, false, true]);
    let mut lines = log.lines();
    lines.sort();
    assert_eq!(
        lines,
        vec![
            "[ERR] recovered from abort: worker 0".to_string(),
            "[ERR] recovered from abort: worker 2".to_string(),
        ]
    );
}
