use serde::{Deserialize, Serialize};

/// Resolved parameters of the Canny detector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Lower hysteresis threshold.
    pub low_threshold: f64,
    /// Upper hysteresis threshold.
    pub high_threshold: f64,
    /// Sobel aperture used for the gradients (3, 5 or 7).
    pub aperture_size: usize,
    /// Use the Euclidean gradient norm instead of `|dx| + |dy|`.
    pub l2_gradient: bool,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 100.0,
            high_threshold: 200.0,
            aperture_size: 3,
            l2_gradient: true,
        }
    }
}

/// Resolved parameters of the Sobel gradient-magnitude operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SobelParams {
    /// Extended Sobel kernel size (1, 3, 5 or 7).
    pub ksize: usize,
}

impl Default for SobelParams {
    fn default() -> Self {
        Self { ksize: 3 }
    }
}

/// Resolved parameters of the Laplacian operator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaplacianParams {
    /// Aperture of the second-derivative filters (odd, 1..=31).
    pub ksize: usize,
    /// Factor applied to the raw Laplacian response.
    pub scale: f64,
    /// Offset added after scaling.
    pub delta: f64,
}

impl Default for LaplacianParams {
    fn default() -> Self {
        Self {
            ksize: 3,
            scale: 1.0,
            delta: 0.0,
        }
    }
}

/// Process-wide operator defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeDefaults {
    pub canny: CannyParams,
    pub sobel: SobelParams,
    pub laplacian: LaplacianParams,
}

/// Per-call Canny overrides; `None` keeps the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aperture_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_gradient: Option<bool>,
}

impl CannyOptions {
    pub fn with_thresholds(mut self, low: f64, high: f64) -> Self {
        self.low_threshold = Some(low);
        self.high_threshold = Some(high);
        self
    }

    pub fn with_aperture_size(mut self, aperture_size: usize) -> Self {
        self.aperture_size = Some(aperture_size);
        self
    }

    pub fn with_l2_gradient(mut self, l2_gradient: bool) -> Self {
        self.l2_gradient = Some(l2_gradient);
        self
    }

    /// Merge the set fields over `defaults`.
    pub fn resolve(&self, defaults: &CannyParams) -> CannyParams {
        CannyParams {
            low_threshold: self.low_threshold.unwrap_or(defaults.low_threshold),
            high_threshold: self.high_threshold.unwrap_or(defaults.high_threshold),
            aperture_size: self.aperture_size.unwrap_or(defaults.aperture_size),
            l2_gradient: self.l2_gradient.unwrap_or(defaults.l2_gradient),
        }
    }
}

/// Per-call Sobel overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SobelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ksize: Option<usize>,
}

impl SobelOptions {
    pub fn with_ksize(mut self, ksize: usize) -> Self {
        self.ksize = Some(ksize);
        self
    }

    pub fn resolve(&self, defaults: &SobelParams) -> SobelParams {
        SobelParams {
            ksize: self.ksize.unwrap_or(defaults.ksize),
        }
    }
}

/// Per-call Laplacian overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaplacianOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ksize: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

impl LaplacianOptions {
    pub fn with_ksize(mut self, ksize: usize) -> Self {
        self.ksize = Some(ksize);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn resolve(&self, defaults: &LaplacianParams) -> LaplacianParams {
        LaplacianParams {
            ksize: self.ksize.unwrap_or(defaults.ksize),
            scale: self.scale.unwrap_or(defaults.scale),
            delta: self.delta.unwrap_or(defaults.delta),
        }
    }
}

/// Overrides for every operator, consumed by [`crate::registry::EdgeMethod::apply`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOverrides {
    pub canny: CannyOptions,
    pub sobel: SobelOptions,
    pub laplacian: LaplacianOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let d = EdgeDefaults::default();
        assert_eq!(d.canny.low_threshold, 100.0);
        assert_eq!(d.canny.high_threshold, 200.0);
        assert_eq!(d.canny.aperture_size, 3);
        assert!(d.canny.l2_gradient);
        assert_eq!(d.sobel.ksize, 3);
        assert_eq!(d.laplacian.ksize, 3);
        assert_eq!(d.laplacian.scale, 1.0);
        assert_eq!(d.laplacian.delta, 0.0);
    }

    #[test]
    fn empty_options_resolve_to_defaults() {
        let d = EdgeDefaults::default();
        assert_eq!(CannyOptions::default().resolve(&d.canny), d.canny);
        assert_eq!(SobelOptions::default().resolve(&d.sobel), d.sobel);
        assert_eq!(LaplacianOptions::default().resolve(&d.laplacian), d.laplacian);
    }

    #[test]
    fn options_override_field_by_field() {
        let d = EdgeDefaults::default();
        let canny = CannyOptions {
            high_threshold: Some(150.0),
            ..Default::default()
        }
        .resolve(&d.canny);
        assert_eq!(canny.low_threshold, 100.0);
        assert_eq!(canny.high_threshold, 150.0);
        assert_eq!(canny.aperture_size, 3);

        let lap = LaplacianOptions::default().with_delta(4.0).resolve(&d.laplacian);
        assert_eq!(lap.ksize, 3);
        assert_eq!(lap.scale, 1.0);
        assert_eq!(lap.delta, 4.0);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let d: EdgeDefaults =
            serde_json::from_str(r#"{ "canny": { "low_threshold": 30 }, "sobel": { "ksize": 5 } }"#)
                .expect("valid defaults json");
        assert_eq!(d.canny.low_threshold, 30.0);
        assert_eq!(d.canny.high_threshold, 200.0);
        assert_eq!(d.sobel.ksize, 5);
        assert_eq!(d.laplacian, LaplacianParams::default());
    }
}
