use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct RecordingHost {
    armed: Vec<(TimerId, Duration)>,
    disarmed: Vec<TimerId>,
    visited: Vec<String>,
    opened: Vec<String>,
}

impl EffectHost for RecordingHost {
    fn arm(&mut self, timer: TimerId, delay: Duration) {
        self.armed.push((timer, delay));
    }

    fn disarm(&mut self, timer: TimerId) {
        self.disarmed.push(timer);
    }

    fn navigate(&mut self, path: &str) {
        self.visited.push(path.to_owned());
    }

    fn open_external(&mut self, url: &str) {
        self.opened.push(url.to_owned());
    }
}

fn bot_with_action(state: &mut ChatState, host: &mut RecordingHost) -> MessageId {
    let effects = state.conversation.send("how much does it cost", 0.0);
    dispatch(host, effects);
    let (timer, _) = host.armed[host.armed.len() - 1];
    state.conversation.fire(timer, 1.0).unwrap().id
}

// =============================================================
// dispatch
// =============================================================

#[test]
fn mount_arms_the_greeting_timer() {
    let mut state = ChatState::new(7);
    let mut host = RecordingHost::default();
    dispatch(&mut host, state.conversation.mount());
    assert_eq!(host.armed.len(), 1);
    assert_eq!(host.armed[0].1, Duration::from_secs(5));
}

#[test]
fn unmount_disarms_every_armed_timer() {
    let mut state = ChatState::new(7);
    let mut host = RecordingHost::default();
    dispatch(&mut host, state.conversation.mount());
    dispatch(&mut host, state.conversation.send("hello", 0.0));
    dispatch(&mut host, state.conversation.unmount());

    let armed: Vec<TimerId> = host.armed.iter().map(|(t, _)| *t).collect();
    assert_eq!(host.disarmed, armed);
}

#[test]
fn contact_action_navigates_to_contact_route() {
    let mut state = ChatState::new(1);
    let mut host = RecordingHost::default();
    let id = bot_with_action(&mut state, &mut host);

    state.conversation.open();
    dispatch(&mut host, state.conversation.trigger_action(id, EscapeAction::ContactForm));
    assert_eq!(host.visited, vec!["/contact".to_owned()]);
    assert!(!state.conversation.is_open());
}

#[test]
fn external_action_opens_whatsapp() {
    let mut state = ChatState::new(1);
    let mut host = RecordingHost::default();
    let id = bot_with_action(&mut state, &mut host);

    dispatch(&mut host, state.conversation.trigger_action(id, EscapeAction::ExternalChat));
    assert_eq!(host.opened, vec![chat::script::EXTERNAL_CHAT_URL.to_owned()]);
    assert!(host.visited.is_empty());
}

#[test]
fn empty_effect_list_touches_nothing() {
    let mut host = RecordingHost::default();
    dispatch(&mut host, Vec::new());
    assert!(host.armed.is_empty() && host.disarmed.is_empty());
    assert!(host.visited.is_empty() && host.opened.is_empty());
}

// =============================================================
// ChatState
// =============================================================

#[test]
fn can_send_requires_text() {
    let mut state = ChatState::new(0);
    assert!(!state.can_send());
    state.conversation.set_draft("   ");
    assert!(!state.can_send());
    state.conversation.set_draft("hi");
    assert!(state.can_send());
}

#[test]
fn input_locks_while_reply_pending() {
    let mut state = ChatState::new(0);
    let mut host = RecordingHost::default();
    dispatch(&mut host, state.conversation.send("hello", 0.0));
    state.conversation.set_draft("next question");

    assert!(state.input_locked());
    assert!(!state.can_send());

    let (timer, _) = host.armed[0];
    state.conversation.fire(timer, 1.0);
    assert!(!state.input_locked());
    assert!(state.can_send());
}

// =============================================================
// TimerBook
// =============================================================

/// Counts drops so tests can see when a handle would have been cancelled.
struct CountedHandle(Rc<Cell<usize>>);

impl Drop for CountedHandle {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Host that books a counted handle per armed timer, like `BrowserHost`.
#[derive(Default)]
struct BookingHost {
    book: TimerBook<CountedHandle>,
    dropped: Rc<Cell<usize>>,
}

impl EffectHost for BookingHost {
    fn arm(&mut self, timer: TimerId, _delay: Duration) {
        self.book.insert(timer, CountedHandle(Rc::clone(&self.dropped)));
    }

    fn disarm(&mut self, timer: TimerId) {
        self.book.disarm(timer);
    }

    fn navigate(&mut self, _path: &str) {}

    fn open_external(&mut self, _url: &str) {}
}

fn three_timers() -> Vec<TimerId> {
    let mut chat = Conversation::default();
    let mut host = RecordingHost::default();
    dispatch(&mut host, chat.mount());
    dispatch(&mut host, chat.send("hello", 0.0));
    dispatch(&mut host, chat.send("pricing", 0.0));
    host.armed.into_iter().map(|(timer, _)| timer).collect()
}

#[test]
fn timer_book_starts_empty() {
    let book = TimerBook::new();
    assert!(book.is_empty());
    assert_eq!(book.len(), 0);
}

#[test]
fn timer_book_disarm_drops_only_that_handle() {
    let timers = three_timers();
    let dropped = Rc::new(Cell::new(0));
    let mut book = TimerBook::default();
    for timer in &timers {
        book.insert(*timer, CountedHandle(Rc::clone(&dropped)));
    }
    assert_eq!(book.len(), 3);

    assert!(book.disarm(timers[1]));
    assert_eq!(dropped.get(), 1);
    assert_eq!(book.len(), 2);
    assert!(!book.contains(timers[1]));
    assert!(book.contains(timers[0]));
    assert!(book.contains(timers[2]));
}

#[test]
fn timer_book_disarm_twice_is_harmless() {
    let timers = three_timers();
    let dropped = Rc::new(Cell::new(0));
    let mut book = TimerBook::default();
    book.insert(timers[0], CountedHandle(Rc::clone(&dropped)));

    assert!(book.disarm(timers[0]));
    assert!(!book.disarm(timers[0]));
    assert!(!book.disarm(timers[2]));
    assert_eq!(dropped.get(), 1);
    assert!(book.is_empty());
}

#[test]
fn timer_book_insert_replaces_existing_handle() {
    let timers = three_timers();
    let dropped = Rc::new(Cell::new(0));
    let mut book = TimerBook::default();
    book.insert(timers[0], CountedHandle(Rc::clone(&dropped)));
    book.insert(timers[0], CountedHandle(Rc::clone(&dropped)));

    assert_eq!(book.len(), 1);
    assert_eq!(dropped.get(), 1);
}

#[test]
fn timer_book_clear_drops_everything() {
    let timers = three_timers();
    let dropped = Rc::new(Cell::new(0));
    let mut book = TimerBook::default();
    for timer in &timers {
        book.insert(*timer, CountedHandle(Rc::clone(&dropped)));
    }

    book.clear();
    assert!(book.is_empty());
    assert_eq!(dropped.get(), 3);
}

#[test]
fn unmount_empties_the_book_through_dispatch() {
    let mut chat = Conversation::default();
    let mut host = BookingHost::default();
    dispatch(&mut host, chat.mount());
    dispatch(&mut host, chat.send("hello", 0.0));
    dispatch(&mut host, chat.send("what services", 0.0));
    assert_eq!(host.book.len(), 3);

    dispatch(&mut host, chat.unmount());
    assert!(host.book.is_empty());
    assert_eq!(host.dropped.get(), 3);
}

#[test]
fn late_fire_after_unmount_leaves_book_and_log_alone() {
    let mut chat = Conversation::default();
    let mut host = BookingHost::default();
    dispatch(&mut host, chat.mount());
    dispatch(&mut host, chat.send("hello", 0.0));
    // Timer ids are allocated in the same order for every conversation.
    let reply = three_timers()[1];
    let logged = chat.messages().len();

    dispatch(&mut host, chat.unmount());
    assert!(chat.fire(reply, 10.0).is_none());
    assert!(!host.book.disarm(reply));
    assert_eq!(chat.messages().len(), logged);
    assert!(!chat.is_typing());
}
