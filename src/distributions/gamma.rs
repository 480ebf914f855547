//! # Gamma
//!
//! $$
//! f(x)=\frac{x^{k-1}e^{-x/\theta}}{\Gamma(k)\,\theta^{k}},\quad x>0,\ k>0,\ \theta>0
//! $$
//!
//! Marsaglia–Tsang acceptance-rejection for $k \ge 1$; shapes below one are
//! boosted through $X_k = X_{k+1} U^{1/k}$.
//!
use rand::Rng;
use rand_distr::Distribution;
use tracing::trace;
use tracing::warn;

use crate::error::GammaError;
use crate::error::Result;
use crate::traits::FloatExt;

/// Quick-accept constant of the Marsaglia–Tsang squeeze, `1 - 0.0331 z^4`.
const SQUEEZE: f64 = 0.0331;

/// Gamma(shape, scale) with validated parameters and precomputed loop constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma<T: FloatExt> {
  shape: T,
  scale: T,
  /// `k - 1/3`, with `k` bumped by one when boosting.
  d: T,
  /// `1 / sqrt(9d)`.
  c: T,
  /// `1/k` when `k < 1`.
  inv_shape: Option<T>,
}

fn check_positive<T: FloatExt>(name: &'static str, value: T) -> Result<()> {
  if value.is_finite() && value > T::zero() {
    Ok(())
  } else {
    Err(GammaError::InvalidParameter {
      name,
      value: value.as_f64(),
      expected: "finite and positive",
    })
  }
}

impl<T: FloatExt> Gamma<T> {
  pub fn new(shape: T, scale: T) -> Result<Self> {
    check_positive("shape", shape)?;
    check_positive("scale", scale)?;

    let (base, inv_shape) = if shape < T::one() {
      (shape + T::one(), Some(T::one() / shape))
    } else {
      (shape, None)
    };
    let d = base - T::from_f64_fast(1.0 / 3.0);
    let c = T::one() / (T::from_f64_fast(9.0) * d).sqrt();

    Ok(Self {
      shape,
      scale,
      d,
      c,
      inv_shape,
    })
  }

  /// Rate parameterization, `scale = 1 / rate`.
  pub fn from_rate(shape: T, rate: T) -> Result<Self> {
    check_positive("rate", rate)?;
    Self::new(shape, T::one() / rate)
  }

  pub fn shape(&self) -> T {
    self.shape
  }

  pub fn scale(&self) -> T {
    self.scale
  }

  pub fn rate(&self) -> T {
    T::one() / self.scale
  }

  /// `k * theta`
  pub fn mean(&self) -> T {
    self.shape * self.scale
  }

  /// `k * theta^2`
  pub fn variance(&self) -> T {
    self.shape * self.scale * self.scale
  }

  /// One Marsaglia–Tsang proposal. Returns the unit-scale value `d * v` on
  /// acceptance, `None` on rejection.
  #[inline]
  fn propose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
    let z = T::sample_standard_normal(rng);
    let t = T::one() + self.c * z;
    let v = t * t * t;
    if v <= T::zero() {
      return None;
    }

    let u = T::sample_open01(rng);
    let z2 = z * z;
    if u < T::one() - T::from_f64_fast(SQUEEZE) * z2 * z2 {
      return Some(self.d * v);
    }
    if u.ln() < T::from_f64_fast(0.5) * z2 + self.d * (T::one() - v + v.ln()) {
      return Some(self.d * v);
    }
    None
  }

  /// Applies the shape boost (if any) and the scale to an accepted proposal.
  #[inline]
  fn finish<R: Rng + ?Sized>(&self, g: T, rng: &mut R) -> T {
    match self.inv_shape {
      Some(inv_shape) => {
        let u = T::sample_open01(rng);
        g * u.powf(inv_shape) * self.scale
      }
      None => g * self.scale,
    }
  }

  /// Draws one variate, giving up with [`GammaError::ComputationError`] once
  /// `max_iterations` proposals have been rejected. `None` never gives up.
  pub fn try_sample<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    max_iterations: Option<usize>,
  ) -> Result<T> {
    let mut iterations = 0usize;
    loop {
      if let Some(cap) = max_iterations {
        if iterations >= cap {
          warn!(
            iterations,
            shape = ?self.shape,
            scale = ?self.scale,
            "gamma rejection loop exhausted its iteration cap"
          );
          return Err(GammaError::ComputationError { iterations });
        }
      }
      iterations += 1;

      if let Some(g) = self.propose(rng) {
        trace!(iterations, "gamma proposal accepted");
        return Ok(self.finish(g, rng));
      }
    }
  }

  pub fn fill_slice<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut [T]) {
    for x in out.iter_mut() {
      *x = self.sample(rng);
    }
  }

  /// Like [`Gamma::fill_slice`] under an iteration cap. On error the slice is
  /// left partially written.
  pub fn try_fill_slice<R: Rng + ?Sized>(
    &self,
    rng: &mut R,
    out: &mut [T],
    max_iterations: Option<usize>,
  ) -> Result<()> {
    for x in out.iter_mut() {
      *x = self.try_sample(rng, max_iterations)?;
    }
    Ok(())
  }
}

impl<T: FloatExt> Distribution<T> for Gamma<T> {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
    loop {
      if let Some(g) = self.propose(rng) {
        return self.finish(g, rng);
      }
    }
  }
}
