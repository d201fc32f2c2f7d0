//! Looping clip playback with inline cues.
//!
//! A clip is a sequence of steps: frame runs with their own per-frame
//! duration, and cues that fire as playback passes them. Clips always
//! loop. A clip without any frames plays as an empty animation.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::SpriteManifest;

/// Guards the playback loop against zero or negative frame durations.
const MIN_FRAME_DURATION: f32 = 0.01;

/// Animation states for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
}

impl AnimationState {
    /// Key used for the manifest frame names (e.g. "nephyr_idle_1").
    pub fn key(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Run => "run",
        }
    }
}

/// Side effects embedded in a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCue {
    Footstep,
}

#[derive(Debug, Clone)]
pub enum AnimationStep {
    Frames {
        frames: Vec<Handle<Image>>,
        frame_duration: f32,
    },
    Cue(AnimationCue),
}

#[derive(Debug, Clone, Default)]
pub struct AnimationClip {
    pub steps: Vec<AnimationStep>,
}

impl AnimationClip {
    pub fn has_frames(&self) -> bool {
        self.frame_count() > 0
    }

    pub fn frame_count(&self) -> usize {
        self.steps
            .iter()
            .map(|step| match step {
                AnimationStep::Frames { frames, .. } => frames.len(),
                AnimationStep::Cue(_) => 0,
            })
            .sum()
    }

    fn frames_at(&self, step: usize) -> Option<(&[Handle<Image>], f32)> {
        match self.steps.get(step)? {
            AnimationStep::Frames {
                frames,
                frame_duration,
            } if !frames.is_empty() => Some((frames, *frame_duration)),
            _ => None,
        }
    }
}

/// The clips a character can play, one per state.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimationClips {
    pub idle: AnimationClip,
    pub run: AnimationClip,
}

impl AnimationClips {
    pub fn get(&self, state: AnimationState) -> &AnimationClip {
        match state {
            AnimationState::Idle => &self.idle,
            AnimationState::Run => &self.run,
        }
    }

    /// Build the standard character clips from manifest frames under `base`.
    ///
    /// Run is `<base>_run_a_*`, a footstep cue, then `<base>_run_b_*`.
    /// Idle is `<base>_idle_*`. Missing frames leave the clip empty.
    pub fn from_manifest(
        manifest: &SpriteManifest,
        base: &str,
        run_frame_duration: f32,
        idle_frame_duration: f32,
    ) -> Self {
        let run = format!("{}_{}", base, AnimationState::Run.key());
        let run_a = manifest.frame_sequence(&format!("{}_a", run));
        let run_b = manifest.frame_sequence(&format!("{}_b", run));
        let idle = manifest.frame_sequence(&format!("{}_{}", base, AnimationState::Idle.key()));

        Self {
            idle: AnimationClip {
                steps: vec![AnimationStep::Frames {
                    frames: idle,
                    frame_duration: idle_frame_duration,
                }],
            },
            run: AnimationClip {
                steps: vec![
                    AnimationStep::Frames {
                        frames: run_a,
                        frame_duration: run_frame_duration,
                    },
                    AnimationStep::Cue(AnimationCue::Footstep),
                    AnimationStep::Frames {
                        frames: run_b,
                        frame_duration: run_frame_duration,
                    },
                ],
            },
        }
    }

    pub fn frame_count(&self) -> usize {
        self.idle.frame_count() + self.run.frame_count()
    }
}

/// Output of one playback tick
#[derive(Debug, Default)]
pub struct AnimationTick {
    /// New frame to display, if it changed this tick
    pub frame: Option<Handle<Image>>,
    pub cues: Vec<AnimationCue>,
}

/// Component for clip playback on a sprite.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    active: Option<AnimationState>,
    step_index: usize,
    frame_index: usize,
    frame_timer: f32,
    needs_frame: bool,
}

impl AnimationController {
    pub fn active(&self) -> Option<AnimationState> {
        self.active
    }

    /// Current (step, frame) playback position.
    #[cfg(test)]
    pub fn position(&self) -> (usize, usize) {
        (self.step_index, self.frame_index)
    }

    /// Start `state` unless it is already playing. Returns whether playback
    /// (re)started.
    pub fn play(&mut self, state: AnimationState) -> bool {
        if self.active == Some(state) {
            return false;
        }
        self.force(state);
        true
    }

    /// Start `state` from its first frame even if it is already playing.
    pub fn force(&mut self, state: AnimationState) {
        self.active = Some(state);
        self.step_index = 0;
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.needs_frame = true;
    }

    /// Advance playback of `clip` by `dt` seconds.
    pub fn advance(&mut self, clip: &AnimationClip, dt: f32) -> AnimationTick {
        let mut tick = AnimationTick::default();

        if self.active.is_none() || !clip.has_frames() {
            return tick;
        }

        if self.step_index >= clip.steps.len() {
            self.step_index = 0;
            self.frame_index = 0;
        }

        if std::mem::take(&mut self.needs_frame) {
            self.settle(clip, &mut tick.cues);
            tick.frame = self.current_frame(clip);
        }

        self.frame_timer += dt;

        while let Some((frames, frame_duration)) = clip.frames_at(self.step_index) {
            let duration = frame_duration.max(MIN_FRAME_DURATION);
            if self.frame_timer < duration {
                break;
            }
            self.frame_timer -= duration;

            self.frame_index += 1;
            if self.frame_index >= frames.len() {
                self.next_step(clip);
                self.settle(clip, &mut tick.cues);
            }
            tick.frame = self.current_frame(clip);
        }

        tick
    }

    fn next_step(&mut self, clip: &AnimationClip) {
        self.step_index = (self.step_index + 1) % clip.steps.len();
        self.frame_index = 0;
    }

    /// Move forward to the next step with frames, collecting cues passed on
    /// the way.
    fn settle(&mut self, clip: &AnimationClip, cues: &mut Vec<AnimationCue>) {
        for _ in 0..clip.steps.len() {
            match &clip.steps[self.step_index] {
                AnimationStep::Frames { frames, .. } if !frames.is_empty() => return,
                AnimationStep::Frames { .. } => {}
                AnimationStep::Cue(cue) => cues.push(*cue),
            }
            self.next_step(clip);
        }
    }

    fn current_frame(&self, clip: &AnimationClip) -> Option<Handle<Image>> {
        let (frames, _) = clip.frames_at(self.step_index)?;
        frames.get(self.frame_index).cloned()
    }
}

/// Message fired when playback passes a cue.
#[derive(Debug, Clone)]
pub struct AnimationCueEvent {
    pub entity: Entity,
    pub cue: AnimationCue,
}

impl Message for AnimationCueEvent {}

/// System that advances clips and swaps sprite images.
pub fn advance_animations(
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut AnimationController,
        &AnimationClips,
        &mut Sprite,
    )>,
    mut cue_events: MessageWriter<AnimationCueEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut controller, clips, mut sprite) in &mut query {
        let Some(state) = controller.active() else {
            continue;
        };

        let tick = controller.advance(clips.get(state), dt);

        if let Some(frame) = tick.frame {
            sprite.image = frame;
        }

        for cue in tick.cues {
            cue_events.write(AnimationCueEvent { entity, cue });
        }
    }
}
