//! Every table is row-major and meant to be applied around its center cell.

/// A 3x3 weight table.
pub type Kernel3 = [[f32; 3]; 3];

/// 4-neighbour Laplacian.
pub const LAPLACIAN_4: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// 8-neighbour Laplacian.
pub const LAPLACIAN_8: Kernel3 = [[1.0, 1.0, 1.0], [1.0, -8.0, 1.0], [1.0, 1.0, 1.0]];

/// Laplacian sharpening.
pub const SHARPEN: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// 8-neighbour Laplacian with a center weight of -9.
pub const LAPLACIAN_9: Kernel3 = [[1.0, 1.0, 1.0], [1.0, -9.0, 1.0], [1.0, 1.0, 1.0]];

/// 8-neighbour Laplacian with doubled neighbours and a center weight of -13.
pub const LAPLACIAN_13: Kernel3 = [[2.0, 2.0, 2.0], [2.0, -13.0, 2.0], [2.0, 2.0, 2.0]];

/// Sobel derivative along x, responds to vertical edges.
pub const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Sobel derivative along y, responds to horizontal edges.
pub const SOBEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// High-pass: the image minus its 3x3 box blur, scaled by 9.
pub const HIGH_PASS: Kernel3 = [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]];
