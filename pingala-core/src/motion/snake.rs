use crate::foundation::core::{Transform2D, Vec2};

/// Shape of the travelling sine wave the body segments ride on.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SnakeParams {
    /// Horizontal distance between consecutive segments.
    pub spacing: f64,
    /// `x` of segment 0.
    pub origin_x: f64,
    /// Wave amplitude.
    pub amplitude: f64,
    /// Angular frequency of the wave along `x`.
    pub frequency: f64,
    /// Damping applied to the slope angle so segments lean rather than stand upright.
    pub tilt: f64,
}

impl Default for SnakeParams {
    fn default() -> Self {
        Self {
            spacing: 0.8,
            origin_x: -4.5,
            amplitude: 0.8,
            frequency: 2.0,
            tilt: 0.5,
        }
    }
}

/// Position and lean of one body segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentPose {
    /// Segment centre.
    pub position: Vec2,
    /// Lean in radians.
    pub angle_rad: f64,
}

impl SegmentPose {
    /// As an element transform with unit scale.
    pub fn to_transform(self) -> Transform2D {
        Transform2D {
            translate: self.position,
            rotation_rad: self.angle_rad,
            ..Transform2D::default()
        }
    }
}

impl SnakeParams {
    /// Pose of segment `index` at wave `phase`.
    pub fn segment_pose(&self, index: usize, phase: f64) -> SegmentPose {
        let x = (index as f64) * self.spacing + self.origin_x;
        let arg = self.frequency * (x + phase);
        SegmentPose {
            position: Vec2::new(x, self.amplitude * arg.sin()),
            angle_rad: arg.cos().atan() * self.tilt,
        }
    }

    /// Poses of segments `0..count` at `phase`.
    pub fn body_poses(&self, count: usize, phase: f64) -> Vec<SegmentPose> {
        (0..count).map(|i| self.segment_pose(i, phase)).collect()
    }

    /// Point on the guide curve at `x` (phase 0), for drawing the path the body follows.
    pub fn path_point(&self, x: f64) -> Vec2 {
        Vec2::new(x, self.amplitude * (self.frequency * x).sin())
    }

    /// Guide curve sampled at `samples` evenly spaced points over `[x0, x1]`.
    pub fn path_points(&self, x0: f64, x1: f64, samples: usize) -> Vec<Vec2> {
        match samples {
            0 => Vec::new(),
            1 => vec![self.path_point(x0)],
            n => (0..n)
                .map(|i| {
                    let t = (i as f64) / ((n - 1) as f64);
                    self.path_point(x0 + (x1 - x0) * t)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/snake.rs"]
mod tests;
