use crate::border::{BorderPolicy, BorderSample};
use crate::error::ConvolutionError;
use crate::image::GrayImage;
use crate::kernel::{Anchor, Kernel};

/// Saturate an accumulated sum into the `u8` range, rounding half away from zero.
#[inline]
fn saturate_u8(sum: f32) -> u8 {
    sum.round().clamp(0.0, 255.0) as u8
}

/// Weighted sum for a window that lies entirely inside the image.
#[inline]
fn correlate_interior(src: &GrayImage, kernel: &Kernel, x0: usize, y0: usize) -> f32 {
    let cols = src.cols();
    let src_data = src.as_slice();
    let mut sum = 0.0;
    for (j, kernel_row) in kernel.weights().chunks_exact(kernel.width()).enumerate() {
        let row_offset = (y0 + j) * cols + x0;
        let src_row = &src_data[row_offset..row_offset + kernel.width()];
        for (&k, &p) in kernel_row.iter().zip(src_row) {
            sum += k * p as f32;
        }
    }
    sum
}

/// Weighted sum for a window that crosses the image border.
#[inline]
fn correlate_border<B: BorderPolicy + ?Sized>(
    src: &GrayImage,
    kernel: &Kernel,
    x0: isize,
    y0: isize,
    border: &B,
) -> f32 {
    let size = src.size();
    let mut sum = 0.0;
    for (j, kernel_row) in kernel.weights().chunks_exact(kernel.width()).enumerate() {
        let py = y0 + j as isize;
        for (i, &k) in kernel_row.iter().enumerate() {
            let px = x0 + i as isize;
            let val = if size.contains(px, py) {
                src.get_unchecked(px as usize, py as usize)
            } else {
                match border.resolve(px, py, size) {
                    BorderSample::Pixel { x, y } => src.get(x, y).unwrap_or_default(),
                    BorderSample::Constant(v) => v,
                }
            };
            sum += k * val as f32;
        }
    }
    sum
}

/// Correlate a kernel over every pixel of a grayscale image.
///
/// For every output pixel `(x, y)` the result is
/// `sum(kernel[j][i] * src(x + i - anchor.x, y + j - anchor.y))`, rounded half
/// away from zero and saturated into `[0, 255]`. Samples outside the image
/// are resolved by `border`. The kernel is not flipped.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W).
/// * `kernel` - The weights to correlate with.
/// * `anchor` - The kernel cell aligned with the output pixel.
/// * `border` - The policy used for out-of-bounds samples.
///
/// # Returns
///
/// A new image with the same size as `src`.
///
/// # Errors
///
/// * [`ConvolutionError::InvalidKernel`] if the kernel has a zero side.
/// * [`ConvolutionError::InvalidAnchor`] if the anchor is outside the kernel.
///
/// Both are reported before the output is allocated.
///
/// # Examples
///
/// ```
/// use edgeconv_core::{convolve, Anchor, BorderMode, GrayImage, ImageSize, Kernel};
///
/// let image = GrayImage::new(
///     ImageSize { width: 3, height: 1 },
///     vec![10, 20, 30],
/// ).unwrap();
///
/// // shift the image one pixel to the left
/// let kernel = Kernel::from_rows([[0.0, 0.0, 1.0]]);
/// let out = convolve(&image, &kernel, Anchor::new(1, 0), &BorderMode::Replicate).unwrap();
///
/// assert_eq!(out.as_slice(), &[20, 30, 30]);
/// ```
pub fn convolve<B: BorderPolicy + ?Sized>(
    src: &GrayImage,
    kernel: &Kernel,
    anchor: Anchor,
    border: &B,
) -> Result<GrayImage, ConvolutionError> {
    kernel.validate_anchor(anchor)?;

    let (cols, rows) = (src.cols(), src.rows());
    let (kw, kh) = (kernel.width(), kernel.height());

    // pixels whose whole window lies inside the image
    let x_range = anchor.x..(cols + anchor.x + 1).saturating_sub(kw);
    let y_range = anchor.y..(rows + anchor.y + 1).saturating_sub(kh);

    let mut dst = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        let y_inside = y_range.contains(&y);
        for x in 0..cols {
            let sum = if y_inside && x_range.contains(&x) {
                correlate_interior(src, kernel, x - anchor.x, y - anchor.y)
            } else {
                correlate_border(
                    src,
                    kernel,
                    x as isize - anchor.x as isize,
                    y as isize - anchor.y as isize,
                    border,
                )
            };
            dst.push(saturate_u8(sum));
        }
    }

    Ok(GrayImage::from_raw(src.size(), dst))
}
