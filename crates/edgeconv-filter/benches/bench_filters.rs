use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use edgeconv_core::{convolve, Anchor, BorderMode, GrayImage, ImageSize, Kernel};
use edgeconv_filter::{apply_filter, parallel::apply_filter_batch, FilterKind};

fn sample_image(width: usize, height: usize) -> GrayImage {
    let data = (0..width * height).map(|i| (i % 251) as u8).collect();
    GrayImage::new(ImageSize { width, height }, data).unwrap()
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filters");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);
        let image = sample_image(*width, *height);

        for border in [BorderMode::Reflect, BorderMode::Constant(0)] {
            group.bench_with_input(
                BenchmarkId::new(format!("sobel_x_{}", border.name()), &parameter_string),
                &image,
                |b, i| b.iter(|| black_box(apply_filter(i, FilterKind::SobelX, &border))),
            );
        }

        let kernel = Kernel::new(7, 7, vec![1.0 / 49.0; 49]).unwrap();
        group.bench_with_input(
            BenchmarkId::new("box_7x7", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    black_box(convolve(
                        i,
                        &kernel,
                        Anchor::new(3, 3),
                        &BorderMode::Replicate,
                    ))
                })
            },
        );

        let batch = vec![image.clone(); 8];
        group.bench_with_input(
            BenchmarkId::new("laplacian_8_batch_8", &parameter_string),
            &batch,
            |b, i| {
                b.iter(|| {
                    black_box(apply_filter_batch(
                        i,
                        FilterKind::Laplacian8,
                        &BorderMode::Reflect,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
