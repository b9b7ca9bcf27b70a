// SPDX-License-Identifier: MPL-2.0
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::tempdir;
use toast_banner::config::{self, Config};
use toast_banner::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, DismissReason};
use toast_banner::notifications::{
    HeadlessSurface, Manager, Message, Notification, NotificationQueue, Position, State,
    SurfaceOp, Timeline,
};

type Log = Arc<Mutex<Vec<&'static str>>>;

fn on_timeout_logger(log: &Log, tag: &'static str) -> impl FnOnce() + Send + 'static {
    let log = Arc::clone(log);
    move || log.lock().expect("lock").push(tag)
}

fn new_queue() -> NotificationQueue<HeadlessSurface> {
    NotificationQueue::new(Manager::new(HeadlessSurface::default()))
}

#[test]
fn queued_notifications_time_out_in_enqueue_order() {
    let log = Log::default();
    let mut queue = new_queue();
    let mut timeline = Timeline::new();

    for tag in ["A", "B", "C"] {
        queue.enqueue(
            Notification::new(tag)
                .with_duration_secs(1.0)
                .on_timeout(on_timeout_logger(&log, tag)),
        );
    }
    assert_eq!(queue.manager().state(), State::Displayed);
    assert_eq!(queue.pending_len(), 2);

    // B must not appear before A has fully left
    timeline.advance(Duration::from_millis(1200), &mut queue);
    assert_eq!(*log.lock().expect("lock"), ["A"]);
    assert_eq!(queue.manager().surface().live_count(), 1);

    timeline.advance(Duration::from_secs(10), &mut queue);
    assert_eq!(*log.lock().expect("lock"), ["A", "B", "C"]);
    assert_eq!(queue.manager().state(), State::Idle);

    let attached = queue
        .manager()
        .surface()
        .ops()
        .iter()
        .filter(|op| matches!(op, SurfaceOp::Attached { .. }))
        .count();
    assert_eq!(attached, 3);
}

#[test]
fn enqueue_from_worker_threads_is_serialized() {
    let shown = Arc::new(AtomicUsize::new(0));
    let mut queue = new_queue();
    let mut timeline = Timeline::new();

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let handle = queue.handle();
            let shown = Arc::clone(&shown);
            std::thread::spawn(move || {
                handle.enqueue(Notification::new("worker").on_timeout(move || {
                    shown.fetch_add(1, Ordering::SeqCst);
                }))
            })
        })
        .collect();
    for worker in workers {
        assert!(worker.join().expect("worker panicked"));
    }

    queue.process_pending();
    while queue.manager().is_notification_active() {
        timeline.advance(Duration::from_millis(500), &mut queue);
        assert!(queue.manager().surface().live_count() <= 1);
    }

    assert_eq!(shown.load(Ordering::SeqCst), 8);
    assert_eq!(queue.pending_len(), 0);
}

#[test]
fn manual_dismiss_suppresses_timeout_but_tap_advances() {
    let log = Log::default();
    let mut queue = new_queue();
    let mut timeline = Timeline::new();

    let tap_log = Arc::clone(&log);
    queue.enqueue(Notification::new("tap me").endless().on_tap(move || {
        tap_log.lock().expect("lock").push("tapped");
    }));
    queue.enqueue(Notification::new("next").on_timeout(on_timeout_logger(&log, "next")));

    let first = queue.manager().active_notification().expect("first shown");
    queue.update(Message::Tapped(first));
    timeline.advance(Duration::from_millis(300), &mut queue);

    let second = queue.manager().active_notification().expect("second shown");
    assert_ne!(first, second);
    assert!(queue.manager_mut().dismiss(second, None));
    timeline.advance(Duration::from_secs(10), &mut queue);

    assert_eq!(*log.lock().expect("lock"), ["tapped"]);
    assert_eq!(queue.manager().state(), State::Idle);
}

#[test]
fn diagnostics_report_covers_a_full_lifecycle() {
    let mut collector = DiagnosticsCollector::default();
    let mut manager = Manager::new(HeadlessSurface::default());
    manager.set_diagnostics(collector.handle());
    let mut timeline = Timeline::new();

    manager.show(Notification::new("Report"));
    timeline.advance(Duration::from_secs(4), &mut manager);
    collector.process_pending();

    let kinds: Vec<_> = collector.events().map(|e| e.kind.clone()).collect();
    assert!(matches!(kinds[0], DiagnosticEventKind::Shown { timed: true, .. }));
    assert!(matches!(kinds[1], DiagnosticEventKind::TimedOut { .. }));
    assert!(matches!(
        kinds[2],
        DiagnosticEventKind::DismissStarted {
            reason: DismissReason::Timeout,
            ..
        }
    ));
    assert!(matches!(kinds[3], DiagnosticEventKind::Removed { .. }));

    let dir = tempdir().expect("failed to create temp dir");
    let path = collector
        .export_to_file(dir.path().join("lifecycle.json"))
        .expect("export");
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).expect("read")).expect("json");
    assert_eq!(report["metadata"]["event_count"], 4);
}

#[test]
fn style_from_config_file_drives_banner_position() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("notifications.toml");
    let config = Config {
        position: Some(Position::Bottom),
        default_duration_secs: Some(2.0),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    let mut manager = Manager::with_style(HeadlessSurface::default(), loaded.to_style());
    manager.show(Notification::new("From disk"));

    let wakeups = manager.take_wakeups();
    assert_eq!(wakeups[0].after, Duration::from_secs(2));
    let ops = manager.surface().ops();
    assert!(matches!(ops[0], SurfaceOp::Attached { at, .. } if at.y > 480.0));
}
