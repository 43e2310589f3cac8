//! Tests for the mining event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use basket_core::events::dispatcher::EventDispatcher;
use basket_core::events::handler::MiningEventHandler;
use basket_core::events::types::*;

/// Counts the events it receives.
#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    levels: AtomicUsize,
    complete: AtomicUsize,
    errors: AtomicUsize,
}

impl MiningEventHandler for CountingHandler {
    fn on_mine_started(&self, _event: &MineStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_level_complete(&self, _event: &LevelCompleteEvent) {
        self.levels.fetch_add(1, Ordering::Relaxed);
    }

    fn on_mine_complete(&self, _event: &MineCompleteEvent) {
        self.complete.fetch_add(1, Ordering::Relaxed);
    }

    fn on_error(&self, _event: &ErrorEvent) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl MiningEventHandler for PanickingHandler {
    fn on_level_complete(&self, _event: &LevelCompleteEvent) {
        panic!("handler failure");
    }
}

fn level(level: usize) -> LevelCompleteEvent {
    LevelCompleteEvent {
        level,
        candidates: 10,
        pruned: 2,
        frequent: 3,
    }
}

#[test]
fn noop_handler_accepts_every_event() {
    struct Noop;
    impl MiningEventHandler for Noop {}

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Noop));
    dispatcher.emit_mine_started(&MineStartedEvent {
        transactions: 4,
        vocabulary: 3,
        min_support: 0.5,
    });
    dispatcher.emit_level_complete(&level(1));
    dispatcher.emit_rules_generated(&RulesGeneratedEvent {
        metric: "lift".into(),
        min_threshold: 1.0,
        evaluated: 2,
        retained: 0,
    });
    assert_eq!(dispatcher.handler_count(), 1);
}

#[test]
fn every_handler_receives_each_event() {
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());

    dispatcher.emit_level_complete(&level(1));
    dispatcher.emit_level_complete(&level(2));
    dispatcher.emit_mine_complete(&MineCompleteEvent {
        frequent_itemsets: 6,
        levels: 2,
        duration_ms: 1,
    });

    for h in [&a, &b] {
        assert_eq!(h.levels.load(Ordering::Relaxed), 2);
        assert_eq!(h.complete.load(Ordering::Relaxed), 1);
        assert_eq!(h.started.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_level_complete(&level(1));
    assert_eq!(counter.levels.load(Ordering::Relaxed), 1);
}

#[test]
fn empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::default();
    dispatcher.emit_error(&ErrorEvent {
        code: "EMPTY_DATASET".into(),
        message: "no rows".into(),
    });
    assert_eq!(dispatcher.handler_count(), 0);
}

#[test]
fn cloned_dispatcher_shares_handlers() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(counter.clone());
    let copy = dispatcher.clone();
    copy.emit_error(&ErrorEvent {
        code: "CANCELLED".into(),
        message: "stop".into(),
    });
    assert_eq!(counter.errors.load(Ordering::Relaxed), 1);
}
