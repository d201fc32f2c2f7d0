//! Sprites module: tests for clip playback and manifest parsing.

use bevy::prelude::*;

use super::animation::AnimationClip;
use super::{
    AnimationClips, AnimationController, AnimationCue, AnimationState,
    AnimationStep, SpriteManifest, animation_frame_key,
};

fn frames(count: usize) -> Vec<Handle<Image>> {
    (0..count).map(|_| Handle::default()).collect()
}

fn run_clip() -> AnimationClip {
    AnimationClip {
        steps: vec![
            AnimationStep::Frames {
                frames: frames(2),
                frame_duration: 0.1,
            },
            AnimationStep::Cue(AnimationCue::Footstep),
            AnimationStep::Frames {
                frames: frames(1),
                frame_duration: 0.1,
            },
        ],
    }
}

// -----------------------------------------------------------------------------
// AnimationController tests
// -----------------------------------------------------------------------------

#[test]
fn test_play_is_idempotent_for_active_state() {
    let mut controller = AnimationController::default();

    assert!(controller.play(AnimationState::Run));
    assert!(!controller.play(AnimationState::Run));
    assert_eq!(controller.active(), Some(AnimationState::Run));

    assert!(controller.play(AnimationState::Idle));
    assert_eq!(controller.active(), Some(AnimationState::Idle));
}

#[test]
fn test_replaying_active_state_does_not_restart() {
    let clip = run_clip();
    let mut controller = AnimationController::default();
    controller.play(AnimationState::Run);
    controller.advance(&clip, 0.0);
    controller.advance(&clip, 0.1);
    assert_eq!(controller.position(), (0, 1));

    controller.play(AnimationState::Run);
    assert_eq!(controller.position(), (0, 1));
}

#[test]
fn test_force_restarts_active_state() {
    let clip = run_clip();
    let mut controller = AnimationController::default();
    controller.play(AnimationState::Run);
    controller.advance(&clip, 0.0);
    controller.advance(&clip, 0.1);

    controller.force(AnimationState::Run);

    assert_eq!(controller.position(), (0, 0));
    assert!(controller.advance(&clip, 0.0).frame.is_some());
}

#[test]
fn test_run_clip_fires_footstep_between_frame_runs() {
    let clip = run_clip();
    let mut controller = AnimationController::default();
    controller.play(AnimationState::Run);

    let first = controller.advance(&clip, 0.0);
    assert!(first.frame.is_some());
    assert!(first.cues.is_empty());

    let second = controller.advance(&clip, 0.1);
    assert!(second.cues.is_empty());
    assert_eq!(controller.position(), (0, 1));

    let third = controller.advance(&clip, 0.1);
    assert_eq!(third.cues, vec![AnimationCue::Footstep]);
    assert_eq!(controller.position(), (2, 0));

    // Loops back to the first run without another cue
    let fourth = controller.advance(&clip, 0.1);
    assert!(fourth.cues.is_empty());
    assert_eq!(controller.position(), (0, 0));
}

#[test]
fn test_no_frame_change_before_duration_elapses() {
    let clip = run_clip();
    let mut controller = AnimationController::default();
    controller.play(AnimationState::Run);
    controller.advance(&clip, 0.0);

    let tick = controller.advance(&clip, 0.05);

    assert!(tick.frame.is_none());
    assert_eq!(controller.position(), (0, 0));
}

#[test]
fn test_empty_clip_is_a_valid_animation() {
    let clips = AnimationClips::default();
    let mut controller = AnimationController::default();
    controller.play(AnimationState::Idle);

    let tick = controller.advance(clips.get(AnimationState::Idle), 1.0);

    assert!(tick.frame.is_none());
    assert!(tick.cues.is_empty());
}

#[test]
fn test_clip_with_only_cues_does_not_spin() {
    let clip = AnimationClip {
        steps: vec![
            AnimationStep::Frames {
                frames: Vec::new(),
                frame_duration: 0.1,
            },
            AnimationStep::Cue(AnimationCue::Footstep),
        ],
    };
    let mut controller = AnimationController::default();
    controller.play(AnimationState::Run);

    let tick = controller.advance(&clip, 10.0);

    assert!(!clip.has_frames());
    assert!(tick.cues.is_empty());
}

// -----------------------------------------------------------------------------
// Manifest tests
// -----------------------------------------------------------------------------

#[test]
fn test_manifest_parses_and_stops_at_frame_gap() {
    let json = r#"{
        "version": 1,
        "assets": {
            "nephyr_idle_1": { "path": "sprites/nephyr/idle_1.png", "size": 64 },
            "nephyr_idle_2": { "path": "sprites/nephyr/idle_2.png" },
            "nephyr_idle_4": { "path": "sprites/nephyr/idle_4.png" }
        }
    }"#;

    let manifest = SpriteManifest::from_json(json).unwrap();

    assert_eq!(manifest.version, 1);
    assert_eq!(manifest.assets["nephyr_idle_1"].path, "sprites/nephyr/idle_1.png");
    assert_eq!(
        manifest.frame_keys("nephyr_idle"),
        vec!["nephyr_idle_1".to_string(), "nephyr_idle_2".to_string()]
    );
    assert!(manifest.frame_keys("nephyr_run_a").is_empty());
}

#[test]
fn test_manifest_rejects_malformed_json() {
    assert!(SpriteManifest::from_json("{ \"version\": 1 ").is_err());
}

#[test]
fn test_animation_frame_key_format() {
    assert_eq!(animation_frame_key("nephyr_run_a", 3), "nephyr_run_a_3");
}

#[test]
fn test_clips_from_empty_manifest_are_empty_but_shaped() {
    let manifest = SpriteManifest::default();

    let clips = AnimationClips::from_manifest(&manifest, "nephyr", 0.1, 0.3);

    assert_eq!(clips.frame_count(), 0);
    assert_eq!(clips.run.steps.len(), 3);
    assert!(matches!(
        clips.run.steps[1],
        AnimationStep::Cue(AnimationCue::Footstep)
    ));
    assert!(matches!(
        clips.idle.steps[0],
        AnimationStep::Frames { frame_duration, .. } if frame_duration == 0.3
    ));
}

#[test]
fn test_animation_state_keys() {
    assert_eq!(AnimationState::Idle.key(), "idle");
    assert_eq!(AnimationState::Run.key(), "run");
}
