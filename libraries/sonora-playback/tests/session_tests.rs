//! Playback session behaviour against a recording fake engine

use sonora_core::Catalog;
use sonora_playback::{
    EventCollector, PlaybackConfig, PlaybackEvent, PlaybackMode, PlaybackSession, SessionState,
    UNKNOWN_DURATION,
};
use std::sync::Arc;
use std::time::Duration;

use test_helpers::{
    init_logging, session_with, started_session, started_session_with, title, tracks, EngineCall,
    FakeEngine, SharedCatalog,
};

fn observed(session: &mut PlaybackSession) -> Arc<EventCollector> {
    let events = Arc::new(EventCollector::new());
    session.add_observer(&events);
    events
}

fn track_titles(events: &[PlaybackEvent]) -> Vec<Option<String>> {
    events
        .iter()
        .filter_map(|e| match e {
            PlaybackEvent::TrackChanged { track } => Some(track.as_ref().map(|t| t.title.clone())),
            _ => None,
        })
        .collect()
}

// ===== Start / catalog =====

#[test]
fn start_cues_first_track_paused() {
    let engine = FakeEngine::new();
    let mut session = session_with(&["a", "b", "c"], &engine, PlaybackConfig::default());
    let events = observed(&mut session);

    session.start();

    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(session.current_index(), Some(0));
    assert_eq!(title(&session).as_deref(), Some("A"));
    assert!(session.has_decoder());
    assert_eq!(engine.prepared(), vec!["a"]);
    assert!(!engine.calls().contains(&EngineCall::Play("a".into())));
    assert_eq!(track_titles(&events.drain()), vec![Some("A".to_string())]);
}

#[test]
fn start_on_empty_catalog_reports_nothing_to_play() {
    let engine = FakeEngine::new();
    let mut session = session_with(&[], &engine, PlaybackConfig::default());
    let events = observed(&mut session);

    session.start();

    assert_eq!(session.state(), SessionState::Empty);
    assert_eq!(session.current_index(), None);
    assert!(session.current_track().is_none());
    assert!(engine.calls().is_empty());
    assert_eq!(
        events.drain(),
        vec![PlaybackEvent::TrackChanged { track: None }]
    );
}

#[test]
fn session_before_start_is_empty() {
    let engine = FakeEngine::new();
    let session = session_with(&["a"], &engine, PlaybackConfig::default());

    assert_eq!(session.state(), SessionState::Empty);
    assert!(engine.calls().is_empty());
}

// ===== Transport scenario =====

#[test]
fn scenario_play_next_wraps_and_previous_goes_back() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b", "c"], &engine);
    assert_eq!(title(&session).as_deref(), Some("A"));
    assert_eq!(session.state(), SessionState::Paused);

    session.play();
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(title(&session).as_deref(), Some("A"));

    session.next();
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(title(&session).as_deref(), Some("B"));

    session.next();
    assert_eq!(title(&session).as_deref(), Some("C"));

    session.next();
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(title(&session).as_deref(), Some("A"));

    session.previous();
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(title(&session).as_deref(), Some("C"));
}

#[test]
fn next_notifies_track_then_play_state() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b"], &engine);
    let events = observed(&mut session);

    session.next();

    let drained = events.drain();
    assert_eq!(drained.len(), 2);
    assert_eq!(track_titles(&drained), vec![Some("B".to_string())]);
    assert_eq!(
        drained[1],
        PlaybackEvent::PlayStateChanged { is_playing: true }
    );
}

#[test]
fn next_resumes_playback_when_paused() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b"], &engine);
    assert!(!session.is_playing());

    session.next();

    assert!(session.is_playing());
    assert!(engine.calls().contains(&EngineCall::Play("b".into())));
}

#[test]
fn play_and_pause_drive_the_decoder() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);
    let events = observed(&mut session);

    session.play();
    session.pause();

    let calls = engine.calls();
    assert!(calls.contains(&EngineCall::Play("a".into())));
    assert!(calls.contains(&EngineCall::Pause("a".into())));
    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(
        events.drain(),
        vec![
            PlaybackEvent::PlayStateChanged { is_playing: true },
            PlaybackEvent::PlayStateChanged { is_playing: false },
        ]
    );
}

#[test]
fn toggle_switches_between_play_and_pause() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);

    session.toggle();
    assert!(session.is_playing());

    session.toggle();
    assert!(!session.is_playing());
}

#[test]
fn decoder_is_replaced_never_layered() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b", "c"], &engine);
    engine.clear_calls();

    session.next();
    session.previous();
    session.next();

    assert_eq!(engine.live_decoders(), 1);
    let calls = engine.calls();
    let release_a = calls
        .iter()
        .position(|c| *c == EngineCall::Release("a".into()))
        .unwrap();
    let prepare_b = calls
        .iter()
        .position(|c| *c == EngineCall::Prepare("b".into()))
        .unwrap();
    assert!(release_a < prepare_b);
}

// ===== Empty catalog =====

#[test]
fn play_on_empty_catalog_notifies_but_does_nothing() {
    let engine = FakeEngine::new();
    let mut session = started_session(&[], &engine);
    let events = observed(&mut session);

    session.play();

    assert_eq!(session.state(), SessionState::Empty);
    assert!(!session.is_playing());
    assert!(engine.calls().is_empty());
    assert_eq!(
        events.drain(),
        vec![PlaybackEvent::PlayStateChanged { is_playing: true }]
    );
}

#[test]
fn next_and_previous_on_empty_catalog_are_no_ops() {
    let engine = FakeEngine::new();
    let mut session = started_session(&[], &engine);
    let events = observed(&mut session);

    session.next();
    session.previous();

    assert_eq!(session.state(), SessionState::Empty);
    assert!(engine.calls().is_empty());
    assert!(!events.has_pending_events());
}

// ===== Prepare failures =====

#[test]
fn failed_prepare_leaves_decoder_absent_and_is_not_fatal() {
    let engine = FakeEngine::new();
    engine.fail_on("b");
    let mut session = started_session(&["a", "b", "c"], &engine);
    let events = observed(&mut session);

    session.next();

    assert!(!session.has_decoder());
    assert_eq!(title(&session).as_deref(), Some("B"));
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(engine.live_decoders(), 0);
    assert_eq!(track_titles(&events.drain()), vec![Some("B".to_string())]);

    // No auto-skip: the next command still moves one step
    session.next();
    assert_eq!(title(&session).as_deref(), Some("C"));
    assert!(session.has_decoder());
}

#[test]
fn play_retries_a_failed_prepare() {
    let engine = FakeEngine::new();
    engine.fail_on("a");
    let mut session = started_session(&["a", "b"], &engine);
    assert!(!session.has_decoder());

    engine.heal("a");
    session.play();

    assert!(session.has_decoder());
    assert_eq!(engine.prepared(), vec!["a", "a"]);
    assert!(engine.calls().contains(&EngineCall::Play("a".into())));
}

#[test]
fn play_does_not_re_prepare_a_live_decoder() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);

    session.play();
    session.pause();
    session.play();

    assert_eq!(engine.prepared(), vec!["a"]);
}

// ===== Seek / volume =====

#[test]
fn seek_is_forwarded_without_notification() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);
    let events = observed(&mut session);

    session.seek(Duration::from_secs(42));

    assert!(engine
        .calls()
        .contains(&EngineCall::Seek("a".into(), Duration::from_secs(42))));
    assert_eq!(session.current_time(), Duration::from_secs(42));
    assert!(!events.has_pending_events());
}

#[test]
fn seek_without_decoder_is_ignored() {
    let engine = FakeEngine::new();
    let mut session = started_session(&[], &engine);

    session.seek(Duration::from_secs(10));

    assert!(engine.calls().is_empty());
    assert_eq!(session.current_time(), Duration::ZERO);
}

#[test]
fn volume_is_clamped_and_applied_to_new_decoders() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b"], &engine);

    session.set_volume(1.7);
    assert!((session.volume() - 1.0).abs() < f32::EPSILON);

    session.set_volume(0.25);
    assert!(engine.calls().contains(&EngineCall::Volume("a".into(), 0.25)));

    session.next();
    assert!(engine.calls().contains(&EngineCall::Volume("b".into(), 0.25)));
}

#[test]
fn initial_volume_comes_from_config() {
    let engine = FakeEngine::new();
    let config = PlaybackConfig {
        volume: 0.5,
        ..PlaybackConfig::default()
    };
    let session = started_session_with(&["a"], &engine, config);

    assert!((session.volume() - 0.5).abs() < f32::EPSILON);
    assert!(engine.calls().contains(&EngineCall::Volume("a".into(), 0.5)));
}

// ===== Mode =====

#[test]
fn cycling_mode_three_times_reaches_shuffle_then_wraps() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);
    let events = observed(&mut session);
    assert_eq!(session.mode(), PlaybackMode::Sequential);

    session.cycle_playback_mode();
    session.cycle_playback_mode();
    session.cycle_playback_mode();
    assert_eq!(session.mode(), PlaybackMode::Shuffle);

    assert_eq!(session.cycle_playback_mode(), PlaybackMode::Sequential);
    assert_eq!(
        events.drain(),
        vec![
            PlaybackEvent::ModeChanged { mode: PlaybackMode::RepeatOne },
            PlaybackEvent::ModeChanged { mode: PlaybackMode::RepeatAll },
            PlaybackEvent::ModeChanged { mode: PlaybackMode::Shuffle },
            PlaybackEvent::ModeChanged { mode: PlaybackMode::Sequential },
        ]
    );
}

#[test]
fn mode_does_not_change_advance_order() {
    let engine = FakeEngine::new();
    let config = PlaybackConfig {
        mode: PlaybackMode::Shuffle,
        ..PlaybackConfig::default()
    };
    let mut session = started_session_with(&["a", "b", "c"], &engine, config);

    session.next();
    session.next();
    assert_eq!(session.current_index(), Some(2));

    session.cycle_playback_mode(); // sequential
    session.cycle_playback_mode(); // repeat-one
    session.next();
    assert_eq!(session.current_index(), Some(0));
}

// ===== Duration / progress =====

#[test]
fn duration_without_decoder_is_positive_sentinel() {
    let engine = FakeEngine::new();
    let session = started_session(&[], &engine);

    assert_eq!(session.duration(), UNKNOWN_DURATION);
    assert!(session.duration() > Duration::ZERO);
    assert!(session.progress().ratio().abs() < f32::EPSILON);
}

#[test]
fn unknown_or_zero_duration_uses_sentinel() {
    let unknown = FakeEngine::new().with_duration(None);
    let session = started_session(&["a"], &unknown);
    assert_eq!(session.duration(), UNKNOWN_DURATION);

    let zero = FakeEngine::new().with_duration(Some(Duration::ZERO));
    let session = started_session(&["a"], &zero);
    assert_eq!(session.duration(), UNKNOWN_DURATION);
}

#[test]
fn progress_reflects_decoder_position() {
    let engine = FakeEngine::new().with_duration(Some(Duration::from_secs(200)));
    let mut session = started_session(&["a"], &engine);

    session.seek(Duration::from_secs(50));
    let progress = session.progress();

    assert_eq!(progress.current, Duration::from_secs(50));
    assert_eq!(progress.duration, Duration::from_secs(200));
    assert!((progress.ratio() - 0.25).abs() < f32::EPSILON);
    assert_eq!(progress.to_string(), "00:50 / 03:20");
}

// ===== Completion =====

#[test]
fn completion_while_playing_pauses_without_advancing() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b"], &engine);
    session.play();
    let events = observed(&mut session);

    engine.finish_track();
    assert!(session.handle_completion());

    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(session.current_index(), Some(0));
    assert_eq!(
        events.drain(),
        vec![PlaybackEvent::PlayStateChanged { is_playing: false }]
    );

    // Already handled
    assert!(!session.handle_completion());
}

#[test]
fn completion_is_ignored_while_paused_or_unfinished() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);

    session.play();
    assert!(!session.handle_completion());

    session.pause();
    engine.finish_track();
    assert!(!session.handle_completion());
}

// ===== Reload / teardown =====

#[test]
fn reload_picks_up_new_catalog_and_resets_to_first_track() {
    init_logging();
    let engine = FakeEngine::new();
    let catalog = SharedCatalog::new(tracks(&["a", "b"]));
    let mut session = PlaybackSession::builder()
        .catalog(catalog.clone())
        .engine(engine.clone())
        .build()
        .unwrap();
    session.start();
    session.next();
    let events = observed(&mut session);

    catalog.set(tracks(&["x", "y", "z"]));
    session.reload();

    assert_eq!(session.catalog().len(), 3);
    assert_eq!(title(&session).as_deref(), Some("X"));
    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(engine.live_decoders(), 1);
    assert_eq!(
        events.drain(),
        vec![
            PlaybackEvent::TrackChanged {
                track: tracks(&["x"]).into_iter().next()
            },
            PlaybackEvent::PlayStateChanged { is_playing: false },
        ]
    );
}

#[test]
fn reload_to_empty_catalog_enters_empty_state() {
    init_logging();
    let engine = FakeEngine::new();
    let catalog = SharedCatalog::new(tracks(&["a"]));
    let mut session = PlaybackSession::builder()
        .catalog(catalog.clone())
        .engine(engine.clone())
        .build()
        .unwrap();
    session.start();

    catalog.set(Vec::new());
    session.reload();

    assert_eq!(session.state(), SessionState::Empty);
    assert_eq!(engine.live_decoders(), 0);
}

#[test]
fn shutdown_releases_decoder_and_ticker() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);
    let ticks = session.start_progress_ticker().unwrap();

    session.shutdown();

    assert!(!session.has_decoder());
    assert!(!session.has_progress_ticker());
    assert_eq!(engine.live_decoders(), 0);
    while ticks.try_recv().is_ok() {}
    assert!(ticks.recv_timeout(Duration::from_secs(1)).is_err());
}

#[test]
fn dropping_the_session_releases_everything() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a"], &engine);
    let ticks = session.start_progress_ticker().unwrap();

    drop(session);

    assert_eq!(engine.live_decoders(), 0);
    while ticks.try_recv().is_ok() {}
    assert_eq!(
        ticks.recv_timeout(Duration::from_secs(1)),
        Err(crossbeam_channel::RecvTimeoutError::Disconnected)
    );
}

// ===== Seek gesture =====

#[test]
fn seek_gesture_suspends_ticks_and_commits_on_release() {
    let engine = FakeEngine::new().with_duration(Some(Duration::from_secs(100)));
    let config = PlaybackConfig {
        progress_interval_ms: 10,
        ..PlaybackConfig::default()
    };
    let mut session = started_session_with(&["a"], &engine, config);
    let ticks = session.start_progress_ticker().unwrap();
    assert!(ticks.recv_timeout(Duration::from_secs(2)).is_ok());

    session.begin_seek();
    assert!(session.is_seeking());
    std::thread::sleep(Duration::from_millis(30));
    while ticks.try_recv().is_ok() {}

    let preview = session.preview_seek(Duration::from_secs(500));
    assert_eq!(preview.current, Duration::from_secs(100));
    assert!(!engine
        .calls()
        .iter()
        .any(|c| matches!(c, EngineCall::Seek(..))));

    std::thread::sleep(Duration::from_millis(50));
    assert!(ticks.try_recv().is_err());

    session.commit_seek(Duration::from_secs(30));
    assert!(!session.is_seeking());
    assert!(engine
        .calls()
        .contains(&EngineCall::Seek("a".into(), Duration::from_secs(30))));
    assert!(ticks.recv_timeout(Duration::from_secs(2)).is_ok());
}

#[test]
fn ticker_started_mid_gesture_stays_suspended() {
    let engine = FakeEngine::new();
    let config = PlaybackConfig {
        progress_interval_ms: 10,
        ..PlaybackConfig::default()
    };
    let mut session = started_session_with(&["a"], &engine, config);

    session.begin_seek();
    let ticks = session.start_progress_ticker().unwrap();
    std::thread::sleep(Duration::from_millis(50));

    assert!(ticks.try_recv().is_err());
}

// ===== Observers =====

#[test]
fn dropped_observers_are_not_kept_alive() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b"], &engine);
    let events = observed(&mut session);
    let weak = Arc::downgrade(&events);

    drop(events);
    session.next();

    assert!(weak.upgrade().is_none());
}

#[test]
fn removed_observer_stops_receiving_events() {
    let engine = FakeEngine::new();
    let mut session = started_session(&["a", "b"], &engine);
    let events = Arc::new(EventCollector::new());
    let id = session.add_observer(&events);

    assert!(session.remove_observer(id));
    session.next();

    assert!(!events.has_pending_events());
}

#[test]
fn in_memory_catalog_works_as_source() {
    init_logging();
    let engine = FakeEngine::new();
    let mut session = PlaybackSession::builder()
        .catalog(Catalog::new(tracks(&["solo"])))
        .engine(engine.clone())
        .build()
        .unwrap();

    session.start();
    session.next();

    assert_eq!(session.current_index(), Some(0));
    assert_eq!(engine.prepared(), vec!["solo", "solo"]);
}
