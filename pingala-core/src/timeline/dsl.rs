use crate::{
    animation::anim::Keyframes,
    animation::ease::Ease,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8, Transform2D, Vec2},
    foundation::error::{PingalaError, PingalaResult},
    scenes::config::SceneConfig,
    timeline::model::{
        Action, AmbientRotation, Camera, CameraCue, CameraTrack, Cue, Element, FontChoice,
        Timeline,
    },
};

/// One element animation inside a [`TimelineBuilder::play`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Play {
    target: String,
    action: Action,
    ease: Option<Ease>,
}

impl Play {
    /// Animate `target` with `action` using the call's ease.
    pub fn new(target: impl Into<String>, action: Action) -> Self {
        Self {
            target: target.into(),
            action,
            ease: None,
        }
    }

    /// Override the ease for this animation only.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Fade in, arriving from `-shift`.
    pub fn fade_in(target: impl Into<String>, shift: Vec2) -> Self {
        Self::new(target, Action::FadeIn { shift })
    }

    /// Fade out, leaving along `shift`.
    pub fn fade_out(target: impl Into<String>, shift: Vec2) -> Self {
        Self::new(target, Action::FadeOut { shift })
    }

    /// Handwriting reveal.
    pub fn write(target: impl Into<String>) -> Self {
        Self::new(target, Action::Write)
    }

    /// Outline-drawing reveal.
    pub fn create(target: impl Into<String>) -> Self {
        Self::new(target, Action::Create)
    }

    /// Move to an absolute position.
    pub fn move_to(target: impl Into<String>, to: Vec2) -> Self {
        Self::new(target, Action::MoveTo { to })
    }

    /// Move by a delta.
    pub fn shift(target: impl Into<String>, by: Vec2) -> Self {
        Self::new(target, Action::Shift { by })
    }

    /// Multiply scale.
    pub fn scale_by(target: impl Into<String>, factor: f64) -> Self {
        Self::new(target, Action::ScaleBy { factor })
    }

    /// Rotate to an absolute angle.
    pub fn rotate_to(target: impl Into<String>, angle_rad: f64) -> Self {
        Self::new(target, Action::RotateTo { angle_rad })
    }

    /// Recolor.
    pub fn set_color(target: impl Into<String>, color: Rgba8) -> Self {
        Self::new(target, Action::SetColor { color })
    }

    /// Change base opacity.
    pub fn set_opacity(target: impl Into<String>, opacity: f64) -> Self {
        Self::new(target, Action::SetOpacity { opacity })
    }

    /// Count a counter to `value`.
    pub fn set_value(target: impl Into<String>, value: f64) -> Self {
        Self::new(target, Action::SetValue { value })
    }

    /// Replace text.
    pub fn set_text(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            target,
            Action::SetText {
                text: text.into(),
            },
        )
    }

    /// Flash burst.
    pub fn flash(target: impl Into<String>, color: Rgba8) -> Self {
        Self::new(target, Action::Flash { color })
    }

    /// Grow-and-tint pulse.
    pub fn indicate(target: impl Into<String>, color: Rgba8, scale_factor: f64) -> Self {
        Self::new(
            target,
            Action::Indicate {
                color,
                scale_factor,
            },
        )
    }

    /// Drive the transform from a keyframe track.
    pub fn follow(target: impl Into<String>, path: Keyframes<Transform2D>) -> Self {
        Self::new(target, Action::Follow { path })
    }
}

/// Sequential play/wait builder for [`Timeline`].
///
/// A cursor in seconds advances by each `play` and `wait`; every animation of one `play` call
/// shares its time window.
pub struct TimelineBuilder {
    name: String,
    fps: Fps,
    canvas: Canvas,
    background: Rgba8,
    font: FontChoice,
    cursor_secs: f64,
    elements: Vec<Element>,
    cues: Vec<Cue>,
    camera: CameraTrack,
    open_ambient: Option<usize>,
}

impl TimelineBuilder {
    /// Empty timeline using the config's fps, canvas, background and font.
    pub fn new(name: impl Into<String>, config: &SceneConfig) -> Self {
        Self {
            name: name.into(),
            fps: config.fps,
            canvas: config.canvas,
            background: config.theme.background,
            font: config.font.clone(),
            cursor_secs: 0.0,
            elements: Vec::new(),
            cues: Vec::new(),
            camera: CameraTrack::default(),
            open_ambient: None,
        }
    }

    /// Current cursor position.
    pub fn cursor_secs(&self) -> f64 {
        self.cursor_secs
    }

    /// Current cursor as a frame.
    pub fn cursor_frame(&self) -> FrameIndex {
        self.frame_at(self.cursor_secs)
    }

    /// Frames a `run_time` window starting at the cursor will span; the local frame count of a
    /// cue played next.
    pub fn span_frames(&self, run_time: f64) -> u64 {
        let start = self.frame_at(self.cursor_secs).0;
        self.frame_at(self.cursor_secs + run_time).0.saturating_sub(start)
    }

    fn frame_at(&self, secs: f64) -> FrameIndex {
        FrameIndex(self.fps.secs_to_frames_round(secs))
    }

    fn range_secs(&self, start: f64, end: f64) -> PingalaResult<FrameRange> {
        FrameRange::new(self.frame_at(start), self.frame_at(end))
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    /// Register an element, hidden until a reveal cue plays.
    pub fn declare(&mut self, mut element: Element) -> PingalaResult<&mut Self> {
        if self.has_element(&element.id) {
            return Err(PingalaError::validation(format!(
                "duplicate element id '{}'",
                element.id
            )));
        }
        element.initial.reveal = 0.0;
        self.elements.push(element);
        Ok(self)
    }

    /// Register an element and show it at the cursor without animation.
    pub fn add(&mut self, element: Element) -> PingalaResult<&mut Self> {
        let id = element.id.clone();
        self.declare(element)?;
        let at = self.cursor_frame();
        self.cues.push(Cue {
            target: id,
            range: FrameRange { start: at, end: at },
            ease: Ease::Linear,
            action: Action::FadeIn { shift: Vec2::ZERO },
        });
        Ok(self)
    }

    /// Hide an element at the cursor without animation.
    pub fn remove(&mut self, id: &str) -> PingalaResult<&mut Self> {
        self.check_target(id)?;
        let at = self.cursor_frame();
        self.cues.push(Cue {
            target: id.to_string(),
            range: FrameRange { start: at, end: at },
            ease: Ease::Linear,
            action: Action::FadeOut { shift: Vec2::ZERO },
        });
        Ok(self)
    }

    fn check_target(&self, id: &str) -> PingalaResult<()> {
        if !self.has_element(id) {
            return Err(PingalaError::validation(format!(
                "animation targets undeclared element '{id}'"
            )));
        }
        Ok(())
    }

    fn check_run_time(run_time: f64) -> PingalaResult<()> {
        if !run_time.is_finite() || run_time < 0.0 {
            return Err(PingalaError::validation(format!(
                "run time must be finite and >= 0, got {run_time}"
            )));
        }
        Ok(())
    }

    /// Play animations together over `run_time` seconds with the default ease.
    pub fn play(
        &mut self,
        run_time: f64,
        plays: impl IntoIterator<Item = Play>,
    ) -> PingalaResult<&mut Self> {
        self.play_with(run_time, Ease::default(), plays)
    }

    /// Play animations together over `run_time` seconds with `ease`.
    pub fn play_with(
        &mut self,
        run_time: f64,
        ease: Ease,
        plays: impl IntoIterator<Item = Play>,
    ) -> PingalaResult<&mut Self> {
        Self::check_run_time(run_time)?;
        let range = self.range_secs(self.cursor_secs, self.cursor_secs + run_time)?;
        for play in plays {
            self.check_target(&play.target)?;
            self.cues.push(Cue {
                target: play.target,
                range,
                ease: play.ease.unwrap_or(ease),
                action: play.action,
            });
        }
        self.cursor_secs += run_time;
        Ok(self)
    }

    /// Stagger animations so that each starts `lag_ratio` of a sub-duration after the previous
    /// one, all finishing within `run_time`.
    pub fn lagged(
        &mut self,
        run_time: f64,
        lag_ratio: f64,
        ease: Ease,
        plays: impl IntoIterator<Item = Play>,
    ) -> PingalaResult<&mut Self> {
        self.lagged_groups(run_time, lag_ratio, ease, plays.into_iter().map(|p| [p]))
    }

    /// [`lagged`](Self::lagged) where every animation of a group shares one stagger slot.
    pub fn lagged_groups<G>(
        &mut self,
        run_time: f64,
        lag_ratio: f64,
        ease: Ease,
        groups: impl IntoIterator<Item = G>,
    ) -> PingalaResult<&mut Self>
    where
        G: IntoIterator<Item = Play>,
    {
        Self::check_run_time(run_time)?;
        if !(0.0..=1.0).contains(&lag_ratio) {
            return Err(PingalaError::validation(format!(
                "lag ratio must be in [0, 1], got {lag_ratio}"
            )));
        }
        let groups: Vec<Vec<Play>> = groups
            .into_iter()
            .map(|g| g.into_iter().collect())
            .collect();
        if groups.is_empty() {
            self.cursor_secs += run_time;
            return Ok(self);
        }

        let n = groups.len() as f64;
        let sub = run_time / (1.0 + (n - 1.0) * lag_ratio);
        let base = self.cursor_secs;
        for (i, group) in groups.into_iter().enumerate() {
            let start = base + (i as f64) * lag_ratio * sub;
            let range = self.range_secs(start, start + sub)?;
            for play in group {
                self.check_target(&play.target)?;
                self.cues.push(Cue {
                    target: play.target,
                    range,
                    ease: play.ease.unwrap_or(ease),
                    action: play.action,
                });
            }
        }
        self.cursor_secs += run_time;
        Ok(self)
    }

    /// Hold for `secs`.
    pub fn wait(&mut self, secs: f64) -> PingalaResult<&mut Self> {
        Self::check_run_time(secs)?;
        self.cursor_secs += secs;
        Ok(self)
    }

    /// Orientation at frame 0.
    pub fn set_camera_orientation(&mut self, camera: Camera) -> &mut Self {
        self.camera.initial = camera;
        self
    }

    /// Move the camera over `run_time` seconds.
    pub fn move_camera(
        &mut self,
        run_time: f64,
        ease: Ease,
        to: Camera,
    ) -> PingalaResult<&mut Self> {
        Self::check_run_time(run_time)?;
        let range = self.range_secs(self.cursor_secs, self.cursor_secs + run_time)?;
        self.camera.cues.push(CameraCue { range, ease, to });
        self.cursor_secs += run_time;
        Ok(self)
    }

    /// Start drifting the azimuth at the cursor. Replaces any running drift.
    pub fn begin_ambient_rotation(&mut self, rate_deg_per_sec: f64) -> &mut Self {
        self.stop_ambient_rotation();
        self.camera.ambient.push(AmbientRotation {
            start: self.cursor_frame(),
            end: None,
            rate_deg_per_sec,
        });
        self.open_ambient = Some(self.camera.ambient.len() - 1);
        self
    }

    /// Stop a running drift at the cursor.
    pub fn stop_ambient_rotation(&mut self) -> &mut Self {
        if let Some(i) = self.open_ambient.take() {
            let end = self.cursor_frame();
            self.camera.ambient[i].end = Some(end);
        }
        self
    }

    /// Finish. The duration covers every cue plus one frame holding the final state.
    pub fn build(self) -> PingalaResult<Timeline> {
        let last_cue = self
            .cues
            .iter()
            .map(|c| c.range.end.0)
            .chain(self.camera.cues.iter().map(|c| c.range.end.0))
            .max()
            .unwrap_or(0);
        let end = last_cue.max(self.frame_at(self.cursor_secs).0);
        let duration = end.checked_add(1).ok_or_else(|| {
            PingalaError::validation(format!(
                "timeline '{}' runs past the last representable frame",
                self.name
            ))
        })?;

        let tl = Timeline {
            name: self.name,
            fps: self.fps,
            canvas: self.canvas,
            duration: FrameIndex(duration),
            background: self.background,
            font: self.font,
            elements: self.elements,
            cues: self.cues,
            camera: self.camera,
        };
        tl.validate()?;
        tracing::debug!(
            name = %tl.name,
            frames = tl.duration.0,
            elements = tl.elements.len(),
            cues = tl.cues.len(),
            "built timeline"
        );
        Ok(tl)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/dsl.rs"]
mod tests;
