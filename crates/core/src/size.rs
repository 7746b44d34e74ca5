//! Absolute sizes and the relative size schemas resolved against them.
use std::fmt;
use std::str::FromStr;

/// An amount of space in two dimensions, in pixels.
///
/// Sizes produced by resolving a [`RelativeSize`] are always finite. Sizes
/// produced by [`Size::remaining`] may be negative when the taken area is
/// larger than the available one; it is up to the caller to decide what to
/// do with those.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl Size {
    /// A [`Size`] with zero width and height.
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Creates a new [`Size`] with the given width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }

    /// Returns the space left after taking `taken` out of both axes.
    ///
    /// The result is not clamped.
    #[must_use]
    pub fn remaining(self, taken: Size) -> Size {
        Size {
            width: self.width - taken.width,
            height: self.height - taken.height,
        }
    }

    /// Returns whether either axis is negative.
    pub fn is_negative(self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }

    /// Returns the [`Size`] with negative axes raised to zero.
    #[must_use]
    pub fn clamped(self) -> Size {
        Size {
            width: self.width.max(0.0),
            height: self.height.max(0.0),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A requested length along one axis, resolved against the available space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// An exact amount of pixels.
    ///
    /// Infinite amounts behave like [`Dimension::Fill`].
    Pixels(f32),
    /// A percentage of the available space.
    ///
    /// Non-finite percentages behave like [`Dimension::Fill`].
    Percent(f32),
    /// All of the available space.
    Fill,
}

impl Dimension {
    /// Resolves the [`Dimension`] against the `available` space.
    ///
    /// Pixel amounts are kept as they are, even when larger than the
    /// available space.
    pub fn resolve(self, available: f32) -> f32 {
        match self {
            Dimension::Pixels(pixels) if pixels.is_finite() => pixels,
            Dimension::Percent(percent) => {
                let resolved = available * percent / 100.0;

                if resolved.is_finite() {
                    resolved
                } else {
                    available
                }
            }
            Dimension::Pixels(_) | Dimension::Fill => available,
        }
    }
}

impl From<f32> for Dimension {
    fn from(pixels: f32) -> Self {
        Dimension::Pixels(pixels)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(pixels) => write!(f, "{pixels}px"),
            Dimension::Percent(percent) => write!(f, "{percent}%"),
            Dimension::Fill => f.write_str("fill"),
        }
    }
}

/// The error returned when a [`Dimension`] cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dimension: {0:?}")]
pub struct ParseDimensionError(String);

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseDimensionError(s.to_owned());

        match trimmed.to_ascii_lowercase().as_str() {
            "fill" | "inf" | "infinity" => return Ok(Dimension::Fill),
            _ => {}
        }

        if let Some(percent) = trimmed.strip_suffix('%') {
            return match percent.trim().parse::<f32>() {
                Ok(percent) if percent.is_finite() => Ok(Dimension::Percent(percent)),
                _ => Err(invalid()),
            };
        }

        match trimmed.strip_suffix("px").unwrap_or(trimmed).trim().parse::<f32>() {
            Ok(pixels) if !pixels.is_nan() => Ok(Dimension::Pixels(pixels)),
            _ => Err(invalid()),
        }
    }
}

/// A user-facing requested size, resolved against a container's [`Size`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativeSize {
    /// The requested width.
    pub width: Dimension,
    /// The requested height.
    pub height: Dimension,
}

impl RelativeSize {
    /// A [`RelativeSize`] taking all of the available space.
    pub const FILL: RelativeSize = RelativeSize::new(Dimension::Fill, Dimension::Fill);

    /// Creates a new [`RelativeSize`].
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        RelativeSize { width, height }
    }

    /// Creates a new [`RelativeSize`] of exact pixel amounts.
    pub const fn pixels(width: f32, height: f32) -> Self {
        RelativeSize::new(Dimension::Pixels(width), Dimension::Pixels(height))
    }

    /// Resolves the [`RelativeSize`] into an absolute [`Size`] within `container`.
    pub fn resolve(self, container: Size) -> Size {
        Size {
            width: self.width.resolve(container.width),
            height: self.height.resolve(container.height),
        }
    }
}

impl Default for RelativeSize {
    fn default() -> Self {
        RelativeSize::FILL
    }
}

/// A named size the contents can be switched to.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeSummary {
    /// The requested width.
    pub width: Dimension,
    /// The requested height.
    pub height: Dimension,
    /// Whether the host should enter full screen for this size.
    #[cfg_attr(feature = "serde", serde(default))]
    pub full: bool,
}

impl SizeSummary {
    /// Creates a new windowed [`SizeSummary`].
    pub fn new(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        SizeSummary {
            width: width.into(),
            height: height.into(),
            full: false,
        }
    }

    /// Sets whether the size requests full screen.
    #[must_use]
    pub fn full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Returns the requested [`RelativeSize`] of the summary.
    pub fn relative(&self) -> RelativeSize {
        RelativeSize::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_sizes_are_kept() {
        let container = Size::new(350.0, 490.0);
        let requested = RelativeSize::pixels(490.0, 350.0);

        assert_eq!(requested.resolve(container), Size::new(490.0, 350.0));
    }

    #[test]
    fn percentages_scale_the_container() {
        let container = Size::new(350.0, 490.0);
        let requested = RelativeSize::new(Dimension::Percent(100.0), Dimension::Percent(50.0));

        assert_eq!(requested.resolve(container), Size::new(350.0, 245.0));
    }

    #[test]
    fn infinite_pixels_fill_the_container() {
        let container = Size::new(210.0, 280.0);
        let requested = RelativeSize::new(Dimension::Pixels(f32::INFINITY), Dimension::Fill);

        assert_eq!(requested.resolve(container), container);
    }

    #[test]
    fn remaining_does_not_clamp() {
        let remaining = Size::new(100.0, 100.0).remaining(Size::new(40.0, 140.0));

        assert_eq!(remaining, Size::new(60.0, -40.0));
        assert!(remaining.is_negative());
        assert_eq!(remaining.clamped(), Size::new(60.0, 0.0));
    }

    #[test]
    fn dimensions_parse_from_strings() {
        assert_eq!("50%".parse(), Ok(Dimension::Percent(50.0)));
        assert_eq!("350".parse(), Ok(Dimension::Pixels(350.0)));
        assert_eq!(" 350px ".parse(), Ok(Dimension::Pixels(350.0)));
        assert_eq!("Infinity".parse(), Ok(Dimension::Fill));
        assert!("wide".parse::<Dimension>().is_err());
    }

    #[test]
    fn non_finite_amounts_never_leak_into_sizes() {
        assert!("inf%".parse::<Dimension>().is_err());
        assert!("nan%".parse::<Dimension>().is_err());
        assert!("NaN".parse::<Dimension>().is_err());
        assert!("nanpx".parse::<Dimension>().is_err());

        let container = Size::new(840.0, 700.0);
        let requested =
            RelativeSize::new(Dimension::Percent(f32::INFINITY), Dimension::Percent(f32::NAN));

        let resolved = requested.resolve(container);

        assert_eq!(resolved, container);
        assert!(resolved.width.is_finite() && resolved.height.is_finite());
    }
}
