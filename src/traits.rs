//! # Traits
//!
//! $$
//! T \in \lbrace \texttt{f32}, \texttt{f64} \rbrace,\quad U \sim \mathcal{U}(0,1),\quad Z \sim \mathcal{N}(0,1)
//! $$
//!
use std::fmt::Debug;
use std::iter::Sum;

use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Open01;
use rand_distr::StandardNormal;

/// Floating point types the sampler can produce, together with the two
/// primitive draws the acceptance-rejection loop consumes.
pub trait FloatExt:
  num_traits::Float + Sum + Default + Debug + Send + Sync + 'static
{
  fn from_f64_fast(v: f64) -> Self;

  /// Widens to `f64` for error reporting.
  fn as_f64(self) -> f64;

  /// Uniform draw on the open interval (0, 1); never returns 0, so `ln` is safe.
  fn sample_open01<R: Rng + ?Sized>(rng: &mut R) -> Self;

  fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl FloatExt for f32 {
  fn from_f64_fast(v: f64) -> Self {
    v as f32
  }

  fn as_f64(self) -> f64 {
    self as f64
  }

  fn sample_open01<R: Rng + ?Sized>(rng: &mut R) -> Self {
    Open01.sample(rng)
  }

  fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
    StandardNormal.sample(rng)
  }
}

impl FloatExt for f64 {
  fn from_f64_fast(v: f64) -> Self {
    v
  }

  fn as_f64(self) -> f64 {
    self
  }

  fn sample_open01<R: Rng + ?Sized>(rng: &mut R) -> Self {
    Open01.sample(rng)
  }

  fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
    StandardNormal.sample(rng)
  }
}
