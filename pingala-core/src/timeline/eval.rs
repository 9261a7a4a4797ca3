use std::f64::consts::PI;

use rayon::prelude::*;

use crate::{
    animation::anim::Lerp,
    foundation::core::{FrameIndex, FrameRange, Rgba8, Vec2},
    foundation::error::{PingalaError, PingalaResult},
    timeline::model::{
        Action, Camera, Cue, ElementKind, ElementState, RevealStyle, Timeline,
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every visible element and the camera at one frame.
pub struct Snapshot {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Frame time in seconds.
    pub time_s: f64,
    /// Camera orientation.
    pub camera: Camera,
    /// Visible elements in painter's order.
    pub elements: Vec<ElementSnapshot>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Evaluated element consumed by the renderer.
pub struct ElementSnapshot {
    /// Element id.
    pub id: String,
    /// Shape description.
    pub kind: ElementKind,
    /// Paint order bias.
    pub z: i32,
    /// Screen-space pinning.
    pub fixed_in_frame: bool,
    /// Fully resolved state.
    pub state: ElementState,
    /// `state.opacity * state.reveal`, clamped.
    pub alpha: f64,
}

impl Snapshot {
    /// Element by id, if visible.
    pub fn element(&self, id: &str) -> Option<&ElementSnapshot> {
        self.elements.iter().find(|e| e.id == id)
    }
}

/// Stateless evaluator from timeline to frame snapshot.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(timeline), fields(name = %timeline.name))]
    /// Evaluate one frame.
    pub fn snapshot(timeline: &Timeline, frame: FrameIndex) -> PingalaResult<Snapshot> {
        timeline.validate()?;
        Self::snapshot_unchecked(timeline, frame)
    }

    #[tracing::instrument(skip(timeline), fields(name = %timeline.name))]
    /// Evaluate every frame in `range`, in parallel, returned in frame order.
    pub fn snapshots(timeline: &Timeline, range: FrameRange) -> PingalaResult<Vec<Snapshot>> {
        timeline.validate()?;
        if range.end.0 > timeline.duration.0 {
            return Err(PingalaError::evaluation("frame range exceeds timeline duration"));
        }
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| Self::snapshot_unchecked(timeline, FrameIndex(f)))
            .collect()
    }

    fn snapshot_unchecked(timeline: &Timeline, frame: FrameIndex) -> PingalaResult<Snapshot> {
        if frame.0 >= timeline.duration.0 {
            return Err(PingalaError::evaluation("frame is out of bounds"));
        }

        let mut states: Vec<ElementState> =
            timeline.elements.iter().map(|e| e.initial.clone()).collect();

        for cue in started_in_order(&timeline.cues, frame, |c| c.range) {
            let Some(idx) = timeline.elements.iter().position(|e| e.id == cue.target) else {
                return Err(PingalaError::evaluation(format!(
                    "cue references missing element '{}'",
                    cue.target
                )));
            };
            apply_cue(&mut states[idx], cue, frame)?;
        }

        let mut elements: Vec<(usize, ElementSnapshot)> = timeline
            .elements
            .iter()
            .zip(states)
            .enumerate()
            .filter_map(|(i, (el, state))| {
                let alpha = state.effective_opacity();
                if alpha <= 0.0 && state.highlight <= 0.0 {
                    return None;
                }
                Some((
                    i,
                    ElementSnapshot {
                        id: el.id.clone(),
                        kind: el.kind.clone(),
                        z: el.z,
                        fixed_in_frame: el.fixed_in_frame,
                        state,
                        alpha,
                    },
                ))
            })
            .collect();
        elements.sort_by_key(|(i, e)| (e.z, *i));

        Ok(Snapshot {
            frame,
            time_s: timeline.fps.frames_to_secs(frame.0),
            camera: eval_camera(timeline, frame),
            elements: elements.into_iter().map(|(_, e)| e).collect(),
        })
    }
}

/// Items whose range started at or before `frame`, ordered by start frame (stable).
fn started_in_order<T>(
    items: &[T],
    frame: FrameIndex,
    range_of: impl Fn(&T) -> FrameRange,
) -> Vec<&T> {
    let mut out: Vec<&T> = items
        .iter()
        .filter(|it| range_of(it).start.0 <= frame.0)
        .collect();
    out.sort_by_key(|it| range_of(it).start.0);
    out
}

fn pulse(raw: f64) -> f64 {
    if raw >= 1.0 { 0.0 } else { (PI * raw).sin() }
}

fn apply_cue(state: &mut ElementState, cue: &Cue, frame: FrameIndex) -> PingalaResult<()> {
    let raw = cue.range.progress(frame);
    let p = cue.ease.apply(raw);

    match &cue.action {
        Action::FadeIn { shift } => {
            state.reveal = f64::lerp(&state.reveal, &1.0, p);
            state.transform.translate -= *shift * (1.0 - p);
            state.reveal_style = RevealStyle::Fade;
        }
        Action::FadeOut { shift } => {
            state.reveal = f64::lerp(&state.reveal, &0.0, p);
            state.transform.translate += *shift * p;
            state.reveal_style = RevealStyle::Fade;
        }
        Action::Write => {
            state.reveal = f64::lerp(&state.reveal, &1.0, p);
            state.reveal_style = RevealStyle::Write;
        }
        Action::Create => {
            state.reveal = f64::lerp(&state.reveal, &1.0, p);
            state.reveal_style = RevealStyle::Create;
        }
        Action::MoveTo { to } => {
            state.transform.translate = <Vec2 as Lerp>::lerp(&state.transform.translate, to, p);
        }
        Action::Shift { by } => {
            state.transform.translate += *by * p;
        }
        Action::ScaleBy { factor } => {
            state.transform.scale *= f64::lerp(&1.0, factor, p);
        }
        Action::RotateTo { angle_rad } => {
            state.transform.rotation_rad = f64::lerp(&state.transform.rotation_rad, angle_rad, p);
        }
        Action::SetColor { color } => {
            state.color = Rgba8::lerp(&state.color, color, p);
        }
        Action::SetOpacity { opacity } => {
            state.opacity = f64::lerp(&state.opacity, opacity, p);
        }
        Action::SetValue { value } => {
            let from = state.value.unwrap_or(0.0);
            state.value = Some(f64::lerp(&from, value, p));
        }
        Action::SetText { text } => {
            if raw >= 0.5 {
                state.text = Some(text.clone());
            }
        }
        Action::Flash { color } => {
            state.highlight = pulse(raw);
            state.highlight_color = Some(*color);
        }
        Action::Indicate {
            color,
            scale_factor,
        } => {
            let k = pulse(raw);
            state.transform.scale *= f64::lerp(&1.0, scale_factor, k);
            state.color = Rgba8::lerp(&state.color, color, k);
        }
        Action::Follow { path } => {
            let local = FrameIndex(frame.0.saturating_sub(cue.range.start.0));
            let local = FrameIndex(local.0.min(cue.range.len_frames()));
            state.transform = path.sample(local)?;
        }
    }
    Ok(())
}

fn eval_camera(timeline: &Timeline, frame: FrameIndex) -> Camera {
    let track = &timeline.camera;
    let mut cam = track.initial;
    for cue in started_in_order(&track.cues, frame, |c| c.range) {
        let p = cue.ease.apply(cue.range.progress(frame));
        cam = Camera::lerp(&cam, &cue.to, p);
    }

    for amb in &track.ambient {
        if frame.0 < amb.start.0 {
            continue;
        }
        let stop = amb.end.map_or(frame.0, |e| e.0.min(frame.0));
        let secs = timeline.fps.frames_to_secs(stop.saturating_sub(amb.start.0));
        cam.theta_deg += amb.rate_deg_per_sec * secs;
    }
    cam
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/eval.rs"]
mod tests;
