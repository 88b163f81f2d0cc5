use super::*;
use crate::state::Fragment;

const WIDTH: u16 = 40;
// 10 body rows once header, filter and help are reserved.
const HEIGHT: u16 = 10 + RESERVED_ROWS;

fn state() -> AppState {
    AppState::new(Platform::Android, WIDTH, HEIGHT)
}

fn press(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn feed(state: &mut AppState, lines: impl IntoIterator<Item = String>) {
    for line in lines {
        assert_eq!(state.handle_event(AppEvent::Line(LogLine::new(line))), Control::Continue);
    }
}

fn numbered(range: std::ops::Range<usize>) -> impl Iterator<Item = String> {
    range.map(|i| format!("line {i}"))
}

fn type_filter(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        state.handle_event(press(KeyCode::Char(ch)));
    }
}

fn visible_texts(state: &AppState) -> Vec<String> {
    state.visible_rows().iter().map(WrappedRow::text).collect()
}

// ===== Focus =====

#[test]
fn starts_body_focused_and_following() {
    let s = state();
    assert_eq!(s.focus(), Focus::Body);
    assert!(!s.viewport().is_paused());
    assert_eq!(s.stream(), &StreamStatus::Live);
}

#[test]
fn slash_focuses_filter_and_esc_returns() {
    let mut s = state();
    s.handle_event(press(KeyCode::Char('/')));
    assert_eq!(s.focus(), Focus::Filter);

    s.handle_event(press(KeyCode::Esc));
    assert_eq!(s.focus(), Focus::Body);
}

#[test]
fn esc_in_body_is_noop() {
    let mut s = state();
    assert_eq!(s.handle_event(press(KeyCode::Esc)), Control::Continue);
    assert_eq!(s.focus(), Focus::Body);
}

#[test]
fn slash_in_filter_is_noop() {
    let mut s = state();
    s.handle_event(press(KeyCode::Char('/')));
    s.handle_event(press(KeyCode::Char('/')));
    assert_eq!(s.focus(), Focus::Filter);
    assert_eq!(s.filter_input().text(), "");
}

#[test]
fn quit_keys_quit_from_either_focus() {
    let mut s = state();
    assert_eq!(s.handle_event(press(KeyCode::Char('q'))), Control::Quit);
    assert_eq!(s.handle_event(ctrl('c')), Control::Quit);

    s.handle_event(press(KeyCode::Char('/')));
    assert_eq!(s.handle_event(press(KeyCode::Char('q'))), Control::Quit);
    assert_eq!(s.handle_event(ctrl('c')), Control::Quit);
}

#[test]
fn body_bindings_are_ignored_while_filtering() {
    let mut s = state();
    feed(&mut s, numbered(0..30));
    s.handle_event(press(KeyCode::Char('/')));
    type_filter(&mut s, "kgc");

    assert_eq!(s.filter_input().text(), "kgc");
    assert!(!s.viewport().is_paused(), "k must not scroll while filtering");
    assert_eq!(s.buffer().len(), 30, "c must not clear while filtering");
}

#[test]
fn key_release_events_are_ignored() {
    let mut s = state();
    let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(s.handle_event(AppEvent::Key(release)), Control::Continue);
}

// ===== Filtering =====

#[test]
fn filter_scenario_from_typed_text() {
    let mut s = state();
    feed(
        &mut s,
        ["start", "ERROR: disk full", "info: ok"].map(String::from),
    );
    s.handle_event(press(KeyCode::Char('/')));
    type_filter(&mut s, "error");

    let mut kept: Vec<usize> = s.view().rows().iter().map(|row| row.line).collect();
    kept.dedup();
    let lines: Vec<&str> = kept.iter().map(|&i| s.buffer().lines()[i].as_str()).collect();
    assert_eq!(lines, vec!["ERROR: disk full"]);
    assert_eq!(
        s.visible_rows()[0].fragments,
        vec![Fragment::highlighted("ERROR"), Fragment::plain(": disk full")]
    );
}

#[test]
fn editing_filter_recomputes_view() {
    let mut s = state();
    feed(&mut s, ["alpha", "beta", "alphabet"].map(String::from));
    s.handle_event(press(KeyCode::Char('/')));
    type_filter(&mut s, "alpha");
    assert_eq!(s.view().matched_count(), 2);

    for _ in 0.."alpha".len() {
        s.handle_event(press(KeyCode::Backspace));
    }
    assert_eq!(s.view().matched_count(), 3);
}

#[test]
fn new_lines_respect_active_filter() {
    let mut s = state().with_filter("tag");
    feed(&mut s, ["TAG one", "other", "my tag"].map(String::from));
    assert_eq!(s.buffer().len(), 3);
    let sources: Vec<usize> = s.view().rows().iter().map(|row| row.line).collect();
    assert_eq!(sources, vec![0, 2]);
}

// ===== Follow / pause =====

#[test]
fn following_shows_latest_line() {
    let mut s = state();
    feed(&mut s, numbered(0..25));
    assert_eq!(visible_texts(&s).last().map(String::as_str), Some("line 24"));
    assert_eq!(s.viewport().offset(), 15);
}

#[test]
fn pause_then_five_lines_keeps_offset() {
    let mut s = state();
    feed(&mut s, numbered(0..25));
    s.handle_event(press(KeyCode::Char('k')));
    assert!(s.viewport().is_paused());
    let offset = s.viewport().offset();
    let before = s.buffer().len();

    feed(&mut s, numbered(25..30));

    assert_eq!(s.viewport().offset(), offset);
    assert_eq!(s.buffer().len(), before + 5);
}

#[test]
fn resume_reveals_latest_line() {
    let mut s = state();
    feed(&mut s, numbered(0..25));
    s.handle_event(press(KeyCode::Char('g')));
    feed(&mut s, numbered(25..40));
    assert_eq!(s.viewport().offset(), 0);

    s.handle_event(press(KeyCode::Char('f')));
    assert!(!s.viewport().is_paused());
    assert_eq!(visible_texts(&s).last().map(String::as_str), Some("line 39"));
}

#[test]
fn scrolling_down_to_bottom_resumes() {
    let mut s = state();
    feed(&mut s, numbered(0..25));
    s.handle_event(press(KeyCode::Up));
    s.handle_event(press(KeyCode::Up));
    s.handle_event(press(KeyCode::Down));
    assert!(s.viewport().is_paused());
    s.handle_event(press(KeyCode::Down));
    assert!(!s.viewport().is_paused());
}

#[test]
fn half_page_keys_move_half_the_body() {
    let mut s = state();
    feed(&mut s, numbered(0..40));
    s.handle_event(ctrl('u'));
    assert_eq!(s.viewport().offset(), 25);
    s.handle_event(ctrl('d'));
    assert_eq!(s.viewport().offset(), 30);
    assert!(!s.viewport().is_paused());
}

#[test]
fn end_key_jumps_to_bottom() {
    let mut s = state();
    feed(&mut s, numbered(0..40));
    s.handle_event(press(KeyCode::Home));
    s.handle_event(press(KeyCode::End));
    assert_eq!(s.viewport().offset(), 30);
    assert!(!s.viewport().is_paused());
}

// ===== Clear =====

#[test]
fn clear_empties_buffer_and_view() {
    let mut s = state().with_filter("line");
    feed(&mut s, numbered(0..12));
    s.handle_event(press(KeyCode::Char('k')));
    s.handle_event(press(KeyCode::Char('c')));

    assert!(s.buffer().is_empty());
    assert!(s.view().rows().is_empty());
    assert!(s.visible_rows().is_empty());
    assert!(!s.viewport().is_paused());
    assert_eq!(s.filter_input().text(), "line", "filter text survives a clear");
}

// ===== Resize =====

#[test]
fn resize_reserves_chrome_rows_and_input_margin() {
    let mut s = state();
    s.handle_event(AppEvent::Resize {
        width: 100,
        height: 30,
    });
    assert_eq!(s.viewport().width(), 100);
    assert_eq!(s.viewport().height(), 30 - RESERVED_ROWS);
    assert_eq!(s.input_width(), 100 - FILTER_INPUT_MARGIN);
}

#[test]
fn resize_rewraps_lines() {
    let mut s = state();
    feed(&mut s, ["abcdefghijk".to_string()]);
    s.handle_event(AppEvent::Resize {
        width: 10,
        height: HEIGHT,
    });
    assert_eq!(visible_texts(&s), vec!["abcdefghij", "k"]);
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut s = state();
    s.handle_event(AppEvent::Resize { width: 0, height: 0 });
    feed(&mut s, numbered(0..3));
    s.handle_event(press(KeyCode::Char('k')));
    s.handle_event(ctrl('d'));
    assert!(s.visible_rows().is_empty());
    assert_eq!(s.input_width(), 0);
}

// ===== Stream =====

#[test]
fn stream_close_is_recorded() {
    let mut s = state();
    let event = AppEvent::from(crate::source::SourceEvent::Closed {
        error: Some("device offline".to_string()),
    });
    assert_eq!(s.handle_event(event), Control::Continue);
    assert_eq!(
        s.stream(),
        &StreamStatus::Ended {
            reason: Some("device offline".to_string())
        }
    );
}
