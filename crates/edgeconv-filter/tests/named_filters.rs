use edgeconv_core::{BorderMode, BorderPolicy, GrayImage, ImageError};
use edgeconv_filter::{
    apply_filter, apply_named_filter, parallel::apply_named_filter_batch, FilterError, FilterKind,
};

#[derive(Debug, thiserror::Error)]
enum TestError {
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A bright square on a dark background.
fn square(size: usize) -> Result<GrayImage, ImageError> {
    let data = (0..size * size)
        .map(|i| {
            let (x, y) = (i % size, i / size);
            let inside = (2..size - 2).contains(&x) && (2..size - 2).contains(&y);
            if inside {
                200
            } else {
                20
            }
        })
        .collect();
    GrayImage::new([size, size].into(), data)
}

const BORDERS: [BorderMode; 5] = [
    BorderMode::Reflect,
    BorderMode::Reflect101,
    BorderMode::Replicate,
    BorderMode::Wrap,
    BorderMode::Constant(0),
];

#[test]
fn every_filter_preserves_size() -> Result<(), TestError> {
    init_logger();
    let image = square(9)?;
    for kind in FilterKind::ALL {
        for border in BORDERS {
            let out = apply_filter(&image, kind, &border)?;
            assert_eq!(out.size(), image.size(), "{kind} {border}");
        }
    }
    Ok(())
}

#[test]
fn edge_kernels_vanish_on_flat_regions() -> Result<(), TestError> {
    init_logger();
    let image = GrayImage::from_size_val([8, 6].into(), 123)?;
    let zero_sum = [
        FilterKind::Laplacian4,
        FilterKind::Laplacian8,
        FilterKind::SobelX,
        FilterKind::SobelY,
        FilterKind::HighPass,
    ];
    for kind in zero_sum {
        for border in &BORDERS[..4] {
            let out = apply_filter(&image, kind, border)?;
            assert!(out.as_slice().iter().all(|&v| v == 0), "{kind} {border}");
        }
    }
    Ok(())
}

#[test]
fn high_pass_outlines_square() -> Result<(), TestError> {
    init_logger();
    let image = square(9)?;
    let out = apply_named_filter(&image, "High-Pass", &BorderMode::Replicate)?;

    // the inner corner sees 5 dark neighbours: 8 * 200 - 3 * 200 - 5 * 20
    assert_eq!(out.get(2, 2), Some(255));
    // deep inside and far outside the square are flat
    assert_eq!(out.get(4, 4), Some(0));
    assert_eq!(out.get(0, 0), Some(0));
    // the dark ring around the square goes negative and saturates
    assert_eq!(out.get(1, 4), Some(0));
    Ok(())
}

#[test]
fn dyn_border_policy() -> Result<(), TestError> {
    init_logger();
    let image = square(7)?;
    let policies: Vec<Box<dyn BorderPolicy>> = vec![
        Box::new(BorderMode::Reflect),
        Box::new(BorderMode::Constant(255)),
    ];
    for policy in &policies {
        let out = apply_filter(&image, FilterKind::Laplacian8, policy.as_ref())?;
        assert_eq!(out.size(), image.size());
    }
    Ok(())
}

#[test]
fn unknown_filter_is_reported() -> Result<(), TestError> {
    init_logger();
    let image = square(5)?;
    for name in ["does-not-exist", "", "sobel"] {
        let err = apply_named_filter(&image, name, &BorderMode::Reflect);
        assert_eq!(err, Err(FilterError::UnknownFilter(name.to_string())));
    }
    Ok(())
}

#[test]
fn batch_in_parallel() -> Result<(), TestError> {
    init_logger();
    let images = (5..12).map(square).collect::<Result<Vec<_>, _>>()?;
    let outputs = apply_named_filter_batch(&images, "laplacian-4", &BorderMode::Reflect)?;
    for (image, out) in images.iter().zip(outputs) {
        assert_eq!(
            out,
            apply_filter(image, FilterKind::Laplacian4, &BorderMode::Reflect)?
        );
    }
    Ok(())
}
