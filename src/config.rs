/// All detection parameters in one struct.
/// Every literal the detectors rely on lives here so each stage can be
/// exercised with non-default values in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    // -- Edge stage --
    /// Where the luminance threshold sits between the second-brightest
    /// and brightest palette colour (0 = second max, 1 = max).
    pub brightness_fraction: f64,
    /// Number of representative colours pulled from an image file.
    pub palette_size: usize,

    // -- Path stage --
    /// RDP tolerance in pixel units. Midpoints closer than this to the
    /// local chord are dropped from the simplified path.
    pub rdp_epsilon: f64,

    // -- Sign stage --
    /// A pixel is red when r > (1 - f) * 255 and g, b < f * 255.
    pub red_channel_fraction: f64,
    /// Grey level above which a sign pixel binarizes to white.
    pub binarization_midpoint: f64,

    // -- Classifier input --
    /// Side length the sign bitmap is resized to before classification.
    pub classifier_width: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            brightness_fraction: 0.75,
            palette_size: 5,
            rdp_epsilon: 5.0,
            red_channel_fraction: 0.2,
            binarization_midpoint: 255.0 / 2.0,
            classifier_width: 28,
        }
    }
}
