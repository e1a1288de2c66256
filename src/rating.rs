//! Fixed rating buckets for heatmap cells and the legend.

/// A color in both hex form (as published in the legend) and RGB components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub hex: &'static str,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    const fn new(hex: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { hex, r, g, b }
    }
}

const TOP_FILL: Swatch = Swatch::new("#2ad100ff", 0x2a, 0xd1, 0x00);
const TOP_TEXT: Swatch = Swatch::new("#1b8700", 0x1b, 0x87, 0x00);
const HIGH_FILL: Swatch = Swatch::new("#ffe600ff", 0xff, 0xe6, 0x00);
const HIGH_TEXT: Swatch = Swatch::new("#d1bc00", 0xd1, 0xbc, 0x00);
const MID_FILL: Swatch = Swatch::new("#fca311", 0xfc, 0xa3, 0x11);
const MID_TEXT: Swatch = Swatch::new("#c47e00", 0xc4, 0x7e, 0x00);
const LOW_FILL: Swatch = Swatch::new("#f12d2dff", 0xf1, 0x2d, 0x2d);
const LOW_TEXT: Swatch = Swatch::new("#b31b1b", 0xb3, 0x1b, 0x1b);

/// Lower bound (inclusive) of the top bucket.
pub const TOP_THRESHOLD: f64 = 8.5;
/// Lower bound (inclusive) of the high bucket.
pub const HIGH_THRESHOLD: f64 = 7.6;
/// Lower bound (inclusive) of the mid bucket.
pub const MID_THRESHOLD: f64 = 6.5;

/// Rating bucket, ordered from best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RatingBucket {
    Top,
    High,
    Mid,
    Low,
}

impl RatingBucket {
    /// All buckets in legend order.
    pub const ALL: [RatingBucket; 4] = [
        RatingBucket::Top,
        RatingBucket::High,
        RatingBucket::Mid,
        RatingBucket::Low,
    ];

    /// Range label shown next to the swatch in the legend.
    pub fn legend_label(self) -> &'static str {
        match self {
            RatingBucket::Top => "8.5–10.0",
            RatingBucket::High => "7.6–8.4",
            RatingBucket::Mid => "6.5–7.5",
            RatingBucket::Low => "0.0–6.4",
        }
    }

    /// Cell background color.
    pub fn fill(self) -> Swatch {
        match self {
            RatingBucket::Top => TOP_FILL,
            RatingBucket::High => HIGH_FILL,
            RatingBucket::Mid => MID_FILL,
            RatingBucket::Low => LOW_FILL,
        }
    }

    /// Emphasis color for the rating text in the episode detail.
    pub fn text(self) -> Swatch {
        match self {
            RatingBucket::Top => TOP_TEXT,
            RatingBucket::High => HIGH_TEXT,
            RatingBucket::Mid => MID_TEXT,
            RatingBucket::Low => LOW_TEXT,
        }
    }
}

/// Result of classifying a rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatingStyle {
    pub bucket: RatingBucket,
    pub fill_color: Swatch,
    pub text_color: Swatch,
}

/// Map a rating to its bucket and colors.
///
/// Thresholds are checked from the top down and are inclusive on the lower
/// bound, so 8.5 is top and 8.49999 is high. NaN falls through to low.
pub fn classify_rating(rating: f64) -> RatingStyle {
    let bucket = if rating >= TOP_THRESHOLD {
        RatingBucket::Top
    } else if rating >= HIGH_THRESHOLD {
        RatingBucket::High
    } else if rating >= MID_THRESHOLD {
        RatingBucket::Mid
    } else {
        RatingBucket::Low
    };

    RatingStyle {
        bucket,
        fill_color: bucket.fill(),
        text_color: bucket.text(),
    }
}
