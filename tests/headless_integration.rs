use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use keydrill::runtime::{FixedTicker, Runner, TestEventSource, TrainerEvent};
use keydrill::session::{Key, Session, Status};

// Headless integration using the internal runtime + Session without a TTY.
// Verifies that a minimal typing flow completes via Runner/TestEventSource.
#[test]
fn headless_typing_flow_completes() {
    let mut session = Session::new("hi".to_string(), true).unwrap();

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    tx.send(TrainerEvent::Key(KeyEvent::new(
        KeyCode::Char('h'),
        KeyModifiers::NONE,
    )))
    .unwrap();
    tx.send(TrainerEvent::Key(KeyEvent::new(
        KeyCode::Char('i'),
        KeyModifiers::NONE,
    )))
    .unwrap();

    // Drive a tiny event loop until finished (or bounded steps)
    for _ in 0..100u32 {
        match runner.step() {
            TrainerEvent::Tick => session.on_tick(),
            TrainerEvent::Resize => {}
            TrainerEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    session.apply_key(Key::Char(c));
                    if session.has_finished() {
                        break;
                    }
                }
            }
        }
    }

    assert!(session.has_finished(), "session should have completed");
    let snap = session.snapshot();
    assert_eq!(snap.typed, "hi");
    assert_eq!(snap.accuracy, 100);
}

#[test]
fn headless_elapsed_time_is_sum_of_playing_ticks() {
    // The clock only sees discrete ticks, so a scripted tick stream gives a
    // fully deterministic elapsed time.
    let mut session = Session::new("abcd".to_string(), true).unwrap();

    session.apply_key(Key::Char('a'));

    let (tx, rx) = mpsc::channel();
    for _ in 0..3 {
        tx.send(TrainerEvent::Tick).unwrap();
    }
    drop(tx);

    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );

    for _ in 0..3 {
        if let TrainerEvent::Tick = runner.step() {
            session.on_tick();
        }
    }

    assert_eq!(session.elapsed_secs(), 1.5);
    assert_eq!(session.status(), Status::Playing);
}

#[test]
fn headless_pause_blocks_scripted_keystrokes() {
    let mut session = Session::new("abc".to_string(), true).unwrap();
    session.apply_key(Key::Char('a'));
    session.pause();

    let (tx, rx) = mpsc::channel();
    tx.send(TrainerEvent::Key(KeyEvent::new(
        KeyCode::Char('b'),
        KeyModifiers::NONE,
    )))
    .unwrap();

    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    if let TrainerEvent::Key(key) = runner.step() {
        if let KeyCode::Char(c) = key.code {
            session.apply_key(Key::Char(c));
        }
    }

    assert_eq!(session.typed(), &['a']);
    assert_eq!(session.status(), Status::Paused);
}
