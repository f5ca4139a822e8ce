//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to the
//! neighbors of the current pixel that have not been visited yet.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`; the neighbor at `(x + dx, y + dy)`
/// receives `error * weight / divisor`.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Floyd-Steinberg
/// propagates all of it; Atkinson and reduced Atkinson deliberately drop a
/// share of it, which keeps highlights and shadows clean on few-level screens.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries. `dy` is never negative.
    pub entries: &'static [(i32, i32, u8)],

    /// Divisor applied to every weight.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the error that reaches neighbors.
    pub fn propagation(&self) -> f64 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        sum as f64 / self.divisor as f64
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson dithering kernel.
///
/// Six neighbors at 1/8 each, so only 6/8 of the error is propagated.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Reduced Atkinson dithering kernel.
///
/// Four neighbors, 6/16 of the error propagated. Lighter texture than
/// Atkinson on large flat areas.
///
/// ```text
///    X   2   1
///    2   1
/// ```
pub const REDUCED_ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 2), // right
        (2, 0, 1), // two right
        (0, 1, 2), // bottom
        (1, 1, 1), // bottom-right
    ],
    divisor: 16,
};
