use std::collections::BTreeMap;
use std::sync::OnceLock;

use edgeconv_core::{convolve, Anchor, BorderPolicy, GrayImage, Kernel};

use crate::error::FilterError;
use crate::kernels::{self, Kernel3};

/// The filters shipped with the standard registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum FilterKind {
    /// 4-neighbour Laplacian, `laplacian-4`.
    Laplacian4,
    /// 8-neighbour Laplacian, `laplacian-8`.
    Laplacian8,
    /// Laplacian sharpening, `sharpen`.
    Sharpen,
    /// 9-weight Laplacian, `laplacian-9`.
    Laplacian9,
    /// 13-weight Laplacian, `laplacian-13`.
    Laplacian13,
    /// Sobel derivative along x, `sobel-x`.
    SobelX,
    /// Sobel derivative along y, `sobel-y`.
    SobelY,
    /// High-pass, `high-pass`.
    HighPass,
}

impl FilterKind {
    /// Every shipped filter.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Laplacian4,
        FilterKind::Laplacian8,
        FilterKind::Sharpen,
        FilterKind::Laplacian9,
        FilterKind::Laplacian13,
        FilterKind::SobelX,
        FilterKind::SobelY,
        FilterKind::HighPass,
    ];

    /// The registry name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Laplacian4 => "laplacian-4",
            FilterKind::Laplacian8 => "laplacian-8",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Laplacian9 => "laplacian-9",
            FilterKind::Laplacian13 => "laplacian-13",
            FilterKind::SobelX => "sobel-x",
            FilterKind::SobelY => "sobel-y",
            FilterKind::HighPass => "high-pass",
        }
    }

    /// The weight table of the filter.
    pub fn weights(&self) -> &'static Kernel3 {
        match self {
            FilterKind::Laplacian4 => &kernels::LAPLACIAN_4,
            FilterKind::Laplacian8 => &kernels::LAPLACIAN_8,
            FilterKind::Sharpen => &kernels::SHARPEN,
            FilterKind::Laplacian9 => &kernels::LAPLACIAN_9,
            FilterKind::Laplacian13 => &kernels::LAPLACIAN_13,
            FilterKind::SobelX => &kernels::SOBEL_X,
            FilterKind::SobelY => &kernels::SOBEL_Y,
            FilterKind::HighPass => &kernels::HIGH_PASS,
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

impl TryFrom<String> for FilterKind {
    type Error = FilterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<FilterKind> for &'static str {
    fn from(kind: FilterKind) -> Self {
        kind.name()
    }
}

/// A kernel together with the cell it is anchored at.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisteredKernel {
    /// The kernel weights.
    pub kernel: Kernel,
    /// The anchor used when the kernel is applied.
    pub anchor: Anchor,
}

/// A mapping from filter names to kernels.
///
/// Names are matched ignoring ASCII case. New kernels can be registered
/// without touching the convolution engine.
///
/// # Examples
///
/// ```
/// use edgeconv_core::{Anchor, BorderMode, GrayImage, Kernel};
/// use edgeconv_filter::KernelRegistry;
///
/// let mut registry = KernelRegistry::standard();
/// registry
///     .register("shift-left", Kernel::from_rows([[0.0, 0.0, 1.0]]), Anchor::new(1, 0))
///     .unwrap();
///
/// let image = GrayImage::new([3, 1].into(), vec![1, 2, 3]).unwrap();
/// let out = registry.apply(&image, "shift-left", &BorderMode::Replicate).unwrap();
/// assert_eq!(out.as_slice(), &[2, 3, 3]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KernelRegistry {
    entries: BTreeMap<String, RegisteredKernel>,
}

impl KernelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every [`FilterKind`] anchored at its center.
    pub fn standard() -> Self {
        let entries = FilterKind::ALL
            .into_iter()
            .map(|kind| {
                let kernel = Kernel::from_rows(*kind.weights());
                let anchor = kernel.center();
                (kind.name().to_string(), RegisteredKernel { kernel, anchor })
            })
            .collect();
        Self { entries }
    }

    /// Register a kernel under `name`, returning the entry it replaced.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::Convolution`] if the kernel is empty or the
    /// anchor lies outside it.
    pub fn register(
        &mut self,
        name: &str,
        kernel: Kernel,
        anchor: Anchor,
    ) -> Result<Option<RegisteredKernel>, FilterError> {
        kernel.validate_anchor(anchor)?;
        log::debug!(
            "registering kernel {name} ({}x{}) anchored at {anchor}",
            kernel.width(),
            kernel.height()
        );
        Ok(self
            .entries
            .insert(name.to_ascii_lowercase(), RegisteredKernel { kernel, anchor }))
    }

    /// Get the kernel registered under `name`.
    pub fn get(&self, name: &str) -> Option<&RegisteredKernel> {
        self.entries.get(&name.to_ascii_lowercase())
    }

    /// Get the kernel registered under `name` or fail with
    /// [`FilterError::UnknownFilter`].
    pub fn lookup(&self, name: &str) -> Result<&RegisteredKernel, FilterError> {
        self.get(name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))
    }

    /// The registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered kernels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no kernels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convolve `image` with the kernel registered under `name`.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::UnknownFilter`] before any allocation if the
    /// name is not registered.
    pub fn apply<B: BorderPolicy + ?Sized>(
        &self,
        image: &GrayImage,
        name: &str,
        border: &B,
    ) -> Result<GrayImage, FilterError> {
        let entry = self.lookup(name)?;
        log::trace!("applying {name} to a {} image", image.size());
        Ok(convolve(image, &entry.kernel, entry.anchor, border)?)
    }
}

/// The process wide registry of shipped filters.
///
/// Built on first use and never modified afterwards.
pub fn standard_registry() -> &'static KernelRegistry {
    static REGISTRY: OnceLock<KernelRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let registry = KernelRegistry::standard();
        log::debug!("standard kernel registry ready with {} filters", registry.len());
        registry
    })
}

#[cfg(test)]
mod tests {
    use super::{standard_registry, FilterKind, KernelRegistry};
    use crate::error::FilterError;
    use edgeconv_core::{Anchor, ConvolutionError, Kernel};

    #[test]
    fn filter_kind_names() -> Result<(), FilterError> {
        for kind in FilterKind::ALL {
            assert_eq!(kind.name().parse::<FilterKind>()?, kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!("Sobel-X".parse::<FilterKind>()?, FilterKind::SobelX);
        assert_eq!("LAPLACIAN-8".parse::<FilterKind>()?, FilterKind::Laplacian8);
        assert_eq!(
            "does-not-exist".parse::<FilterKind>(),
            Err(FilterError::UnknownFilter("does-not-exist".to_string()))
        );
        Ok(())
    }

    #[test]
    fn standard_registry_contents() {
        let registry = standard_registry();
        assert_eq!(registry.len(), FilterKind::ALL.len());
        for kind in FilterKind::ALL {
            let entry = registry.get(kind.name()).expect("shipped filter");
            assert_eq!(entry.anchor, Anchor::new(1, 1));
            assert_eq!(entry.kernel.width(), 3);
            assert_eq!(entry.kernel.height(), 3);
        }
        assert_eq!(
            registry.get("sobel-y").map(|e| e.kernel.get(1, 2)),
            Some(Some(2.0))
        );
        assert!(registry.names().any(|name| name == "high-pass"));
    }

    #[test]
    fn register_custom_kernel() -> Result<(), FilterError> {
        let mut registry = KernelRegistry::new();
        assert!(registry.is_empty());

        let kernel = Kernel::new(5, 1, vec![0.2; 5])?;
        let replaced = registry.register("Box-5", kernel.clone(), Anchor::new(2, 0))?;
        assert!(replaced.is_none());
        assert_eq!(registry.lookup("box-5")?.kernel, kernel);

        let replaced = registry.register("box-5", kernel, Anchor::new(0, 0))?;
        assert_eq!(replaced.map(|e| e.anchor), Some(Anchor::new(2, 0)));
        assert_eq!(registry.len(), 1);
        Ok(())
    }

    #[test]
    fn register_invalid_anchor() {
        let mut registry = KernelRegistry::new();
        let res = registry.register(
            "bad",
            Kernel::from_rows(*FilterKind::SobelX.weights()),
            Anchor::new(5, 1),
        );
        assert_eq!(
            res,
            Err(FilterError::Convolution(ConvolutionError::InvalidAnchor {
                anchor: Anchor::new(5, 1),
                width: 3,
                height: 3,
            }))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn lookup_unknown() {
        let res = standard_registry().lookup("does-not-exist");
        assert_eq!(
            res,
            Err(FilterError::UnknownFilter("does-not-exist".to_string()))
        );
    }
}
