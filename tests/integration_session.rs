use keydrill::session::{Key, Session, SessionError, Status};
use keydrill::stats;
use keydrill::texts::{Difficulty, TextPool};

#[test]
fn perfect_run_reaches_completed_with_full_accuracy() {
    let prompt = "the quick brown fox";
    let mut session = Session::new(prompt.to_string(), true).unwrap();
    assert_eq!(session.status(), Status::Waiting);

    for (i, c) in prompt.chars().enumerate() {
        session.apply_key(Key::Char(c));
        if i + 1 < prompt.len() {
            assert_eq!(session.status(), Status::Playing);
        }
    }

    let snap = session.snapshot();
    assert_eq!(snap.status, Status::Completed);
    assert_eq!(snap.errors, 0);
    assert_eq!(snap.accuracy, 100);
    assert_eq!(snap.typed, prompt);
}

#[test]
fn all_mismatched_run_has_zero_accuracy() {
    let prompt = "abcde";
    let mut session = Session::new(prompt.to_string(), true).unwrap();

    for _ in 0..prompt.len() {
        session.apply_key(Key::Char('z'));
    }

    let snap = session.snapshot();
    assert_eq!(snap.status, Status::Completed);
    assert_eq!(snap.errors, prompt.len());
    assert_eq!(snap.accuracy, 0);
}

#[test]
fn invariants_hold_under_a_mixed_keystroke_stream() {
    let pool = TextPool::load(Difficulty::Medium).unwrap();
    let prompt = pool.pick(None).unwrap();
    let target_len = prompt.chars().count();
    let mut session = Session::new(prompt.clone(), true).unwrap();

    let keys = prompt
        .chars()
        .flat_map(|c| [Key::Char(c), Key::Char('!'), Key::Backspace])
        .chain(std::iter::repeat(Key::Backspace).take(3));

    for key in keys {
        session.apply_key(key);
        assert!(session.error_count() <= session.typed().len());
        assert!(session.typed().len() <= target_len);
        assert_eq!(session.cursor_pos(), session.typed().len());
    }
}

#[test]
fn reset_returns_to_waiting_from_every_state() {
    // from Waiting
    let mut session = Session::new("abc".to_string(), true).unwrap();
    session.reset();
    assert_eq!(session.status(), Status::Waiting);

    // from Playing
    session.apply_key(Key::Char('a'));
    session.on_tick();
    session.reset();
    assert_eq!(session.status(), Status::Waiting);
    assert_eq!(session.elapsed_secs(), 0.0);

    // from Paused
    session.apply_key(Key::Char('a'));
    session.pause();
    session.reset();
    assert_eq!(session.status(), Status::Waiting);

    // from Completed
    for c in "abc".chars() {
        session.apply_key(Key::Char(c));
    }
    assert_eq!(session.status(), Status::Completed);
    session.reset();

    let snap = session.snapshot();
    assert_eq!(snap.status, Status::Waiting);
    assert_eq!(snap.typed, "");
    assert_eq!(snap.elapsed_secs, 0.0);
    assert_eq!(snap.errors, 0);
}

#[test]
fn forward_only_discipline_with_backspace_disabled() {
    let mut session = Session::new("typing".to_string(), false).unwrap();

    session.apply_key(Key::Char('t'));
    session.apply_key(Key::Char('x'));
    let before: String = session.typed().iter().collect();

    session.apply_key(Key::Backspace);

    let after: String = session.typed().iter().collect();
    assert_eq!(before, after);
    assert_eq!(session.error_count(), 1);
}

#[test]
fn paused_time_never_reaches_elapsed() {
    let mut session = Session::new("pause me".to_string(), true).unwrap();
    session.apply_key(Key::Char('p'));

    // two pause/resume rounds, each held for 2 ticks on both sides
    for _ in 0..2 {
        session.on_tick();
        session.on_tick();
        session.pause();
        session.on_tick();
        session.on_tick();
        session.resume();
    }

    // 4 playing ticks at 0.5s each
    assert_eq!(session.elapsed_secs(), 2.0);
}

#[test]
fn wpm_matches_hand_computed_value() {
    // completion stops the clock, so accumulate play time before the last key
    let mut session = Session::new("one two three four".to_string(), true).unwrap();
    let chars: Vec<char> = "one two three four".chars().collect();
    for c in &chars[..chars.len() - 1] {
        session.apply_key(Key::Char(*c));
    }
    for _ in 0..60 {
        session.on_tick(); // 30 seconds
    }
    session.apply_key(Key::Char(chars[chars.len() - 1]));

    let snap = session.snapshot();
    assert_eq!(snap.status, Status::Completed);
    // 4 words in 30s = 8 wpm
    assert_eq!(snap.wpm, 8);
    assert_eq!(stats::wpm(stats::words_typed(&snap.typed), snap.elapsed_secs), 8);
}

#[test]
fn empty_reference_text_is_rejected() {
    let err = Session::new(String::new(), true).unwrap_err();
    assert_eq!(err, SessionError::EmptyPrompt);
}
