use crate::image::ImageSize;

/// What an out-of-bounds sample resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderSample {
    /// Read the source pixel at this in-bounds coordinate instead.
    Pixel {
        /// Column of the substitute pixel.
        x: usize,
        /// Row of the substitute pixel.
        y: usize,
    },
    /// Use this value and ignore the source image.
    Constant(u8),
}

/// A strategy answering "what does pixel `(x, y)` contribute when it lies
/// outside an image of `size`?".
///
/// Implementations must be pure: the same inputs always give the same
/// answer, and any coordinate, however far outside the image, must resolve
/// to either an in-bounds pixel or a constant. A [`BorderSample::Pixel`]
/// that is itself outside the image contributes zero.
pub trait BorderPolicy: Send + Sync {
    /// Resolve the coordinate `(x, y)` against an image of `size`.
    fn resolve(&self, x: isize, y: isize, size: ImageSize) -> BorderSample;
}

/// The built-in border policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderMode {
    /// Mirror across the edge, repeating the edge pixel.
    ///
    /// Example: ...c b a | a b c d...
    #[default]
    Reflect,

    /// Mirror across the edge pixel without repeating it.
    ///
    /// Example: ...d c b | a b c d...
    Reflect101,

    /// Repeat the outermost row or column of pixels.
    ///
    /// Example: ...a a a | a b c d...
    Replicate,

    /// Take the pixels from the opposite side of the image.
    ///
    /// Example: ...x y z | a b c d...
    Wrap,

    /// Fill the border with a single value.
    ///
    /// Example: ...k k k | a b c d...
    Constant(u8),
}

impl BorderMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        // the mirrored sequence has period 2 * len
        let period = 2 * len as isize;
        let i = i.rem_euclid(period);
        if i < len as isize {
            i as usize
        } else {
            (period - 1 - i) as usize
        }
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let period = 2 * (len as isize - 1);
        let i = i.rem_euclid(period);
        if i < len as isize {
            i as usize
        } else {
            (period - i) as usize
        }
    }

    #[inline]
    fn wrap(i: isize, len: usize) -> usize {
        i.rem_euclid(len as isize) as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the border mode.
    ///
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Wrap`: circular wrap
    /// - `Constant`: `None`, the sample does not come from the image
    ///
    /// # Arguments
    ///
    /// * `i` - The (possibly out-of-range) coordinate index.
    /// * `len` - The valid length of the dimension, must be non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgeconv_core::BorderMode;
    ///
    /// assert_eq!(BorderMode::Reflect.map_index(-1, 5), Some(0));
    /// assert_eq!(BorderMode::Reflect101.map_index(-1, 5), Some(1));
    /// assert_eq!(BorderMode::Wrap.map_index(5, 5), Some(0));
    /// assert_eq!(BorderMode::Constant(0).map_index(5, 5), None);
    /// ```
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        match self {
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Reflect => Some(Self::reflect(i, len)),
            BorderMode::Reflect101 => Some(Self::reflect101(i, len)),
            BorderMode::Wrap => Some(Self::wrap(i, len)),
            BorderMode::Constant(_) => None,
        }
    }

    /// The lowercase name of the mode, as accepted by [`str::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            BorderMode::Reflect => "reflect",
            BorderMode::Reflect101 => "reflect101",
            BorderMode::Replicate => "replicate",
            BorderMode::Wrap => "wrap",
            BorderMode::Constant(_) => "constant",
        }
    }
}

impl BorderPolicy for BorderMode {
    fn resolve(&self, x: isize, y: isize, size: ImageSize) -> BorderSample {
        if let BorderMode::Constant(value) = self {
            return BorderSample::Constant(*value);
        }
        match (
            self.map_index(x, size.width),
            self.map_index(y, size.height),
        ) {
            (Some(x), Some(y)) => BorderSample::Pixel { x, y },
            _ => BorderSample::Constant(0),
        }
    }
}

impl std::fmt::Display for BorderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BorderMode::Constant(value) => write!(f, "constant({value})"),
            mode => f.write_str(mode.name()),
        }
    }
}

/// Error returned when parsing an unknown border mode name.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Unknown border mode: {0}")]
pub struct ParseBorderModeError(pub String);

impl std::str::FromStr for BorderMode {
    type Err = ParseBorderModeError;

    /// Parse `reflect`, `reflect101`, `replicate` (or `clamp`), `wrap` and
    /// `constant` (filled with zero), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reflect" => Ok(BorderMode::Reflect),
            "reflect101" | "reflect-101" => Ok(BorderMode::Reflect101),
            "replicate" | "clamp" => Ok(BorderMode::Replicate),
            "wrap" => Ok(BorderMode::Wrap),
            "constant" => Ok(BorderMode::Constant(0)),
            _ => Err(ParseBorderModeError(s.to_string())),
        }
    }
}
