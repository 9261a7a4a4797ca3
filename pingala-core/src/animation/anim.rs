use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, Rgba8, Transform2D, Vec2},
    foundation::error::{PingalaError, PingalaResult},
};

/// Linear blend between two values of the same kind.
pub trait Lerp: Sized {
    /// Value at `t` between `a` (t = 0) and `b` (t = 1).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Transform2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            rotation_rad: a.rotation_rad + (b.rotation_rad - a.rotation_rad) * t,
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Keyframe track sampled by frame, with frames relative to the owner's start.
pub struct Keyframes<T> {
    /// Keys sorted by frame.
    pub keys: Vec<Keyframe<T>>,
    /// How values between keys are produced.
    pub mode: InterpMode,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    /// Single-key track holding `value` forever.
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![Keyframe {
                frame: FrameIndex(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
        }
    }

    /// Reject empty or unsorted tracks.
    pub fn validate(&self) -> PingalaResult<()> {
        if self.keys.is_empty() {
            return Err(PingalaError::animation(
                "Keyframes must have at least one key",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(PingalaError::animation(
                "Keyframes keys must be sorted by frame",
            ));
        }
        Ok(())
    }

    /// Value at local frame `f`; holds the first/last key outside the keyed span.
    pub fn sample(&self, f: FrameIndex) -> PingalaResult<T> {
        let Some(first) = self.keys.first() else {
            return Err(PingalaError::animation("Keyframes has no keys"));
        };

        let idx = self.keys.partition_point(|k| k.frame.0 <= f.0);

        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((f.0 - a.frame.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }

    /// Frame of the last key.
    pub fn last_frame(&self) -> FrameIndex {
        self.keys.last().map(|k| k.frame).unwrap_or(FrameIndex(0))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One key of a [`Keyframes`] track.
pub struct Keyframe<T> {
    /// Local frame.
    pub frame: FrameIndex,
    /// Value at `frame`.
    pub value: T,
    /// Ease applied toward the next key.
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Interpolation between keys.
pub enum InterpMode {
    /// Step: keep the previous key's value.
    Hold,
    /// Blend with the previous key's ease.
    Linear,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
