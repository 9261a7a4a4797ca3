use std::collections::BTreeSet;

use crate::{
    animation::anim::{Keyframes, Lerp},
    animation::ease::Ease,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8, Transform2D, Vec2},
    foundation::error::{PingalaError, PingalaResult},
};

/// Declarative presentation timeline handed to an external renderer.
///
/// Elements are declared up front; cues change their state over frame ranges. The camera has
/// its own cue list. Nothing here renders; [`crate::Evaluator`] turns a timeline and a frame
/// into a [`crate::Snapshot`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Scene name, for output file naming.
    pub name: String,
    /// Frame rate.
    pub fps: Fps,
    /// Output size hint.
    pub canvas: Canvas,
    /// Total frames.
    pub duration: FrameIndex,
    /// Clear color.
    pub background: Rgba8,
    /// Font preference for text elements.
    #[serde(default)]
    pub font: FontChoice,
    /// Elements in declaration (painter's) order.
    pub elements: Vec<Element>,
    /// Element cues, any order; evaluation sorts them by start frame.
    pub cues: Vec<Cue>,
    /// Camera orientation over time.
    #[serde(default)]
    pub camera: CameraTrack,
}

/// Which font family the renderer should use for text.
///
/// The renderer resolves availability; the timeline only records the preference.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontChoice {
    /// Preferred family (e.g. a Devanagari-capable face).
    pub primary: String,
    /// Generic family used when the primary is unavailable.
    pub fallback: String,
    /// Force the fallback.
    pub use_fallback: bool,
}

impl Default for FontChoice {
    fn default() -> Self {
        Self {
            primary: "Nirmala UI".to_string(),
            fallback: "sans-serif".to_string(),
            use_fallback: false,
        }
    }
}

impl FontChoice {
    /// Family to request.
    pub fn resolved(&self) -> &str {
        if self.use_fallback || self.primary.trim().is_empty() {
            &self.fallback
        } else {
            &self.primary
        }
    }
}

/// One visual element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Element {
    /// Unique id within the timeline.
    pub id: String,
    /// Shape description.
    pub kind: ElementKind,
    /// State before any cue applies.
    pub initial: ElementState,
    /// Paint order bias; ties keep declaration order.
    #[serde(default)]
    pub z: i32,
    /// Drawn in screen space, unaffected by the camera.
    #[serde(default)]
    pub fixed_in_frame: bool,
}

impl Element {
    fn with_kind(id: impl Into<String>, kind: ElementKind, at: Vec2, color: Rgba8) -> Self {
        Self {
            id: id.into(),
            kind,
            initial: ElementState {
                transform: Transform2D {
                    translate: at,
                    ..Transform2D::default()
                },
                color,
                ..ElementState::default()
            },
            z: 0,
            fixed_in_frame: false,
        }
    }

    /// Text label.
    pub fn text(
        id: impl Into<String>,
        text: impl Into<String>,
        font_size: f64,
        at: Vec2,
        color: Rgba8,
    ) -> Self {
        let mut el = Self::with_kind(id, ElementKind::Text { font_size }, at, color);
        el.initial.text = Some(text.into());
        el
    }

    /// Integer readout whose value can animate.
    pub fn counter(id: impl Into<String>, value: f64, font_size: f64, at: Vec2, color: Rgba8) -> Self {
        let mut el = Self::with_kind(id, ElementKind::Counter { font_size }, at, color);
        el.initial.value = Some(value);
        el
    }

    /// Rectangular block (table cell, pyramid cube face).
    pub fn block(id: impl Into<String>, width: f64, height: f64, at: Vec2, color: Rgba8) -> Self {
        Self::with_kind(id, ElementKind::Block { width, height }, at, color)
    }

    /// Round dot.
    pub fn dot(id: impl Into<String>, radius: f64, at: Vec2, color: Rgba8) -> Self {
        Self::with_kind(id, ElementKind::Dot { radius }, at, color)
    }

    /// Straight segment between two points in local space.
    pub fn line(id: impl Into<String>, from: Vec2, to: Vec2, dashed: bool, color: Rgba8) -> Self {
        Self::with_kind(id, ElementKind::Line { from, to, dashed }, Vec2::ZERO, color)
    }

    /// Open polyline in local space.
    pub fn path(id: impl Into<String>, points: Vec<Vec2>, color: Rgba8) -> Self {
        Self::with_kind(id, ElementKind::Path { points }, Vec2::ZERO, color)
    }

    /// Builder-style paint order bias.
    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Builder-style screen-space pinning.
    pub fn fixed(mut self) -> Self {
        self.fixed_in_frame = true;
        self
    }

    /// Builder-style base opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.initial.opacity = opacity;
        self
    }

    /// Builder-style initial scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.initial.transform.scale = Vec2::new(scale, scale);
        self
    }
}

/// Shape description consumed by the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Text; content lives in [`ElementState::text`].
    Text {
        /// Font size in points.
        font_size: f64,
    },
    /// Number; value lives in [`ElementState::value`].
    Counter {
        /// Font size in points.
        font_size: f64,
    },
    /// Axis-aligned rectangle centred on the element position.
    Block {
        /// Width in scene units.
        width: f64,
        /// Height in scene units.
        height: f64,
    },
    /// Filled circle.
    Dot {
        /// Radius in scene units.
        radius: f64,
    },
    /// Line segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Draw dashed.
        dashed: bool,
    },
    /// Polyline.
    Path {
        /// Vertices.
        points: Vec<Vec2>,
    },
}

/// How an element is being revealed or hidden; a drawing hint for the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealStyle {
    /// Opacity fade.
    #[default]
    Fade,
    /// Stroke-by-stroke handwriting.
    Write,
    /// Outline drawn along its length.
    Create,
}

/// Animatable state of one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ElementState {
    /// Placement.
    pub transform: Transform2D,
    /// Fill / stroke color.
    pub color: Rgba8,
    /// Base opacity in `[0, 1]`.
    pub opacity: f64,
    /// Reveal progress in `[0, 1]`; effective alpha is `opacity * reveal`.
    pub reveal: f64,
    /// Style of the latest reveal or conceal.
    pub reveal_style: RevealStyle,
    /// Counter value.
    pub value: Option<f64>,
    /// Text content.
    pub text: Option<String>,
    /// Transient flash intensity in `[0, 1]`.
    pub highlight: f64,
    /// Color of the flash, if one ran.
    pub highlight_color: Option<Rgba8>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            transform: Transform2D::default(),
            color: Rgba8::WHITE,
            opacity: 1.0,
            reveal: 0.0,
            reveal_style: RevealStyle::Fade,
            value: None,
            text: None,
            highlight: 0.0,
            highlight_color: None,
        }
    }
}

impl ElementState {
    /// Alpha the renderer should draw with.
    pub fn effective_opacity(&self) -> f64 {
        (self.opacity * self.reveal).clamp(0.0, 1.0)
    }
}

/// A state change of one element over a frame range.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cue {
    /// Target element id.
    pub target: String,
    /// Frames over which the change plays; empty means an instant cut.
    pub range: FrameRange,
    /// Rate function applied to progress.
    pub ease: Ease,
    /// What changes.
    pub action: Action,
}

/// Element state change.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Reveal while sliding in along `shift` (arrives at the current position).
    FadeIn {
        /// Travel during the fade.
        shift: Vec2,
    },
    /// Conceal while sliding away along `shift`.
    FadeOut {
        /// Travel during the fade.
        shift: Vec2,
    },
    /// Reveal stroke by stroke.
    Write,
    /// Reveal by drawing the outline.
    Create,
    /// Move the centre to an absolute position.
    MoveTo {
        /// Destination.
        to: Vec2,
    },
    /// Move the centre by a delta.
    Shift {
        /// Delta.
        by: Vec2,
    },
    /// Multiply the current scale.
    ScaleBy {
        /// Factor, > 0.
        factor: f64,
    },
    /// Rotate to an absolute angle.
    RotateTo {
        /// Radians.
        angle_rad: f64,
    },
    /// Blend to a new color.
    SetColor {
        /// Target color.
        color: Rgba8,
    },
    /// Blend to a new base opacity.
    SetOpacity {
        /// Target in `[0, 1]`.
        opacity: f64,
    },
    /// Count a counter to a new value.
    SetValue {
        /// Target value.
        value: f64,
    },
    /// Swap text content at the midpoint.
    SetText {
        /// New content.
        text: String,
    },
    /// Burst of light; no lasting change.
    Flash {
        /// Flash color.
        color: Rgba8,
    },
    /// Brief grow-and-tint pulse; no lasting change.
    Indicate {
        /// Tint at the peak.
        color: Rgba8,
        /// Scale at the peak, > 0.
        scale_factor: f64,
    },
    /// Drive the transform from a keyframe track local to the cue start.
    Follow {
        /// Transform over local frames.
        path: Keyframes<Transform2D>,
    },
}

/// Camera orientation, in degrees like a turntable rig.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    /// Polar tilt from straight-on (0 = looking down the z axis).
    pub phi_deg: f64,
    /// Azimuth.
    pub theta_deg: f64,
    /// Zoom factor, > 0.
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            phi_deg: 0.0,
            theta_deg: -90.0,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Orientation with unit zoom.
    pub fn oriented(phi_deg: f64, theta_deg: f64) -> Self {
        Self {
            phi_deg,
            theta_deg,
            zoom: 1.0,
        }
    }

    /// Builder-style zoom.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }
}

impl Lerp for Camera {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            phi_deg: f64::lerp(&a.phi_deg, &b.phi_deg, t),
            theta_deg: f64::lerp(&a.theta_deg, &b.theta_deg, t),
            zoom: f64::lerp(&a.zoom, &b.zoom, t),
        }
    }
}

/// Camera moves over time.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraTrack {
    /// Orientation at frame 0.
    pub initial: Camera,
    /// Moves, any order; evaluation sorts them by start frame.
    pub cues: Vec<CameraCue>,
    /// Slow continuous azimuth drift windows.
    #[serde(default)]
    pub ambient: Vec<AmbientRotation>,
}

/// One camera move.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraCue {
    /// Frames over which the move plays.
    pub range: FrameRange,
    /// Rate function.
    pub ease: Ease,
    /// Destination orientation.
    pub to: Camera,
}

/// Continuous azimuth drift starting at `start` and stopping at `end` (open-ended when `None`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientRotation {
    /// First frame of drift.
    pub start: FrameIndex,
    /// Frame the drift stops, if it does.
    pub end: Option<FrameIndex>,
    /// Degrees per second added to `theta_deg`.
    pub rate_deg_per_sec: f64,
}

impl Timeline {
    /// Check structural invariants.
    pub fn validate(&self) -> PingalaResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(PingalaError::validation("fps must have num>0 and den>0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PingalaError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(PingalaError::validation("duration must be > 0 frames"));
        }

        let mut ids = BTreeSet::new();
        for el in &self.elements {
            if el.id.trim().is_empty() {
                return Err(PingalaError::validation("element id must be non-empty"));
            }
            if !ids.insert(el.id.as_str()) {
                return Err(PingalaError::validation(format!(
                    "duplicate element id '{}'",
                    el.id
                )));
            }
        }

        for cue in &self.cues {
            let Some(el) = self.elements.iter().find(|e| e.id == cue.target) else {
                return Err(PingalaError::validation(format!(
                    "cue references missing element '{}'",
                    cue.target
                )));
            };
            check_range(cue.range, self.duration, &cue.target)?;
            cue.action.validate_for(el)?;
        }

        for cue in &self.camera.cues {
            check_range(cue.range, self.duration, "camera")?;
            if cue.to.zoom <= 0.0 {
                return Err(PingalaError::validation("camera zoom must be > 0"));
            }
        }
        if self.camera.initial.zoom <= 0.0 {
            return Err(PingalaError::validation("camera zoom must be > 0"));
        }
        for amb in &self.camera.ambient {
            if let Some(end) = amb.end
                && end.0 < amb.start.0
            {
                return Err(PingalaError::validation(
                    "ambient rotation end must be >= start",
                ));
            }
        }

        Ok(())
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> PingalaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON and validate.
    pub fn from_json(s: &str) -> PingalaResult<Self> {
        let tl: Self = serde_json::from_str(s)?;
        tl.validate()?;
        Ok(tl)
    }

    /// Element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration.0)
    }
}

fn check_range(range: FrameRange, duration: FrameIndex, who: &str) -> PingalaResult<()> {
    if range.start.0 > range.end.0 {
        return Err(PingalaError::validation(format!(
            "cue for '{who}' has invalid range (start > end)"
        )));
    }
    if range.end.0 > duration.0 {
        return Err(PingalaError::validation(format!(
            "cue for '{who}' exceeds timeline duration"
        )));
    }
    Ok(())
}

impl Action {
    fn validate_for(&self, el: &Element) -> PingalaResult<()> {
        match self {
            Self::ScaleBy { factor } if *factor <= 0.0 => Err(PingalaError::validation(format!(
                "scale factor for '{}' must be > 0",
                el.id
            ))),
            Self::Indicate { scale_factor, .. } if *scale_factor <= 0.0 => {
                Err(PingalaError::validation(format!(
                    "indicate scale factor for '{}' must be > 0",
                    el.id
                )))
            }
            Self::SetOpacity { opacity } if !(0.0..=1.0).contains(opacity) => Err(
                PingalaError::validation(format!("opacity for '{}' must be in [0, 1]", el.id)),
            ),
            Self::SetValue { .. } if !matches!(el.kind, ElementKind::Counter { .. }) => {
                Err(PingalaError::validation(format!(
                    "set_value targets non-counter element '{}'",
                    el.id
                )))
            }
            Self::SetText { .. } if !matches!(el.kind, ElementKind::Text { .. }) => {
                Err(PingalaError::validation(format!(
                    "set_text targets non-text element '{}'",
                    el.id
                )))
            }
            Self::Follow { path } => path.validate(),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
