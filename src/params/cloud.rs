//! Particle cloud parameters.

use crate::error::{Error, Result};

/// Particle cloud physics and drawing parameters
#[derive(Debug, Clone)]
pub struct CloudParams {
    /// Number of cloud points (fixed for the lifetime of the field)
    pub point_count: usize,

    /// Initial noise offsets are drawn uniformly from [0, offset_range)
    /// Large enough that no two particles start on the same noise lane
    pub offset_range: f32,

    /// Radius used for the positions computed at creation (pixels)
    pub initial_radius: f32,

    /// Radius of the filled disk drawn per particle (pixels)
    pub dot_radius: f32,

    /// Pairs closer than this are connected by a line (pixels)
    pub link_distance: f32,

    /// Upper bound on the frame delta (seconds)
    /// Bounds the jump after a hitch or a clock reset
    pub max_dt_s: f32,
}

impl Default for CloudParams {
    fn default() -> Self {
        Self {
            point_count: 300,
            offset_range: 1000.0,
            initial_radius: 800.0,
            dot_radius: 2.0,
            link_distance: 20.0,
            max_dt_s: 0.1,
        }
    }
}

impl CloudParams {
    /// Validate cloud configuration (finite, non-negative radii, positive ranges)
    ///
    /// Every check is written so that NaN fails it.
    pub fn validate(&self) -> Result<()> {
        if !(self.link_distance.is_finite() && self.link_distance >= 0.0) {
            return Err(Error::InvalidThreshold(self.link_distance));
        }
        for (name, radius) in [("dot", self.dot_radius), ("initial", self.initial_radius)] {
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(Error::InvalidParams(format!(
                    "{} radius must be finite and non-negative, got {}",
                    name, radius
                )));
            }
        }
        if !(self.offset_range.is_finite() && self.offset_range > 0.0) {
            return Err(Error::InvalidParams(format!(
                "offset range must be finite and > 0, got {}",
                self.offset_range
            )));
        }
        if !(self.max_dt_s.is_finite() && self.max_dt_s >= 0.0) {
            return Err(Error::InvalidParams(format!(
                "max dt must be finite and >= 0, got {}",
                self.max_dt_s
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(CloudParams::default().validate().is_ok());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let params = CloudParams {
            link_distance: -1.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(Error::InvalidThreshold(-1.0)));
    }

    #[test]
    fn test_negative_dot_radius_rejected() {
        let params = CloudParams {
            dot_radius: -2.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_nan_fields_rejected() {
        let cases = [
            CloudParams {
                max_dt_s: f32::NAN,
                ..Default::default()
            },
            CloudParams {
                offset_range: f32::NAN,
                ..Default::default()
            },
            CloudParams {
                initial_radius: f32::NAN,
                ..Default::default()
            },
            CloudParams {
                dot_radius: f32::NAN,
                ..Default::default()
            },
            CloudParams {
                offset_range: f32::INFINITY,
                ..Default::default()
            },
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(Error::InvalidParams(_))),
                "accepted {:?}",
                params
            );
        }
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let params = CloudParams {
            link_distance: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(Error::InvalidThreshold(_))));
    }
}
