// Copyright 2020 @TwoCookingMice

use super::constants::Vector3f;

use std::ops;
use std::vec::Vec;

#[derive(Debug)]
pub struct Bitmap {
    data: Vec<Vector3f>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector3f;

    fn index(&self, index: (usize, usize)) -> &Vector3f {
        debug_assert!(index.0 < self.width);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        debug_assert!(index.0 < self.width);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(Vector3f::new(0.0, 0.0, 0.0);
                          pixel_number),
               width: width,
               height: height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Splits the buffer into disjoint mutable row bands, one per range.
    /// The ranges must tile `0..height` in order, no gap or overlap.
    pub fn split_rows_mut(&mut self, ranges: &[RowRange]) -> Vec<RowBand<'_>> {
        let width = self.width;
        let mut bands = Vec::with_capacity(ranges.len());
        let mut covered = 0usize;
        let mut rest: &mut [Vector3f] = &mut self.data;
        for range in ranges {
            assert!(range.start == covered && range.end >= range.start,
                    "row ranges must tile the image in order");
            assert!(range.end <= self.height, "row range past the last row");
            let (chunk, tail) = rest.split_at_mut(range.len() * width);
            rest = tail;
            covered = range.end;
            bands.push(RowBand { range: *range, width: width, pixels: chunk });
        }
        assert!(covered == self.height, "row ranges must cover every row");
        bands
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn len(&self) -> usize {
        debug_assert!(self.end >= self.start, "row range ends before it starts");
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn rows(&self) -> ops::Range<usize> {
        self.start..self.end
    }

    // More workers than rows leaves the tail ranges empty.
    pub fn partition(height: usize, workers: usize) -> Vec<RowRange> {
        let workers = match workers {
            0 => 1,
            n => n,
        };
        let rows_per_band = (height + workers - 1) / workers;
        (0..workers)
            .map(|i| {
                let start = (i * rows_per_band).min(height);
                let end = (start + rows_per_band).min(height);
                RowRange { start: start, end: end }
            })
            .collect()
    }
}

// Indexed with absolute image coordinates like the parent Bitmap.
pub struct RowBand<'a> {
    range: RowRange,
    width: usize,
    pixels: &'a mut [Vector3f],
}

impl RowBand<'_> {
    pub fn range(&self) -> RowRange {
        self.range
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl ops::Index<(usize, usize)> for RowBand<'_> {
    type Output = Vector3f;

    fn index(&self, index: (usize, usize)) -> &Vector3f {
        debug_assert!(index.0 < self.width);
        debug_assert!(index.1 >= self.range.start && index.1 < self.range.end);
        &self.pixels[index.0 + self.width * (index.1 - self.range.start)]
    }
}

impl ops::IndexMut<(usize, usize)> for RowBand<'_> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        debug_assert!(index.0 < self.width);
        debug_assert!(index.1 >= self.range.start && index.1 < self.range.end);
        &mut self.pixels[index.0 + self.width * (index.1 - self.range.start)]
    }
}

/* Test for Bitmap */
