use array_init::{array_init, try_array_init};
use num_traits::*;
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .fold(T::zero(), |acc, (a, b)| {
        let diff = *a - *b;
        acc + diff * diff
      })
  }

  pub fn euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  /// Point at parameter `t` on the segment from `self` to `rhs`.
  pub fn lerp(&self, rhs: &Point<T, N>, t: T) -> Point<T, N>
  where
    T: Float,
  {
    Point {
      array: array_init(|i| self.array[i] + (rhs.array[i] - self.array[i]) * t),
    }
  }

  pub fn is_finite(&self) -> bool
  where
    T: Float,
  {
    self.array.iter().all(|c| c.is_finite())
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

impl<const N: usize> TryFrom<Point<f64, N>> for Point<NotNan<f64>, N> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64, N>) -> Result<Point<NotNan<f64>, N>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}
