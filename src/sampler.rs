//! # Sampler
//!
//! $$
//! (k,\theta,n) \mapsto (X_1,\dots,X_n),\quad X_i \overset{\text{iid}}{\sim} \Gamma(k,\theta)
//! $$
//!
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::debug;

use crate::distributions::gamma::Gamma;
use crate::error::GammaError;
use crate::error::Result;
use crate::traits::FloatExt;

/// Configuration for [`GammaSampler`].
#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
  /// Cap on rejection-loop proposals per accepted draw. `None` is unbounded.
  pub max_iterations: Option<usize>,
  /// Seed for [`GammaSampler::from_config`]. `None` draws from OS entropy.
  pub seed: Option<u64>,
  /// Block length handed to each worker by [`GammaSampler::sample_many_par`].
  pub par_chunk: usize,
}

impl Default for SamplerConfig {
  fn default() -> Self {
    Self {
      max_iterations: Some(10_000),
      seed: None,
      par_chunk: 4096,
    }
  }
}

/// Gamma sampler owning its random engine.
///
/// The engine is the only mutable state; every method takes `&mut self`, so
/// sharing one sampler across threads requires external synchronization.
/// Prefer one sampler per thread.
pub struct GammaSampler<R: Rng = StdRng> {
  rng: R,
  config: SamplerConfig,
}

impl GammaSampler<StdRng> {
  pub fn from_config(config: SamplerConfig) -> Self {
    let rng = match config.seed {
      Some(seed) => {
        debug!(seed, "gamma sampler seeded");
        StdRng::seed_from_u64(seed)
      }
      None => {
        debug!("gamma sampler seeded from OS entropy");
        StdRng::from_os_rng()
      }
    };
    Self { rng, config }
  }

  pub fn seeded(seed: u64) -> Self {
    Self::from_config(SamplerConfig {
      seed: Some(seed),
      ..SamplerConfig::default()
    })
  }
}

impl Default for GammaSampler<StdRng> {
  fn default() -> Self {
    Self::from_config(SamplerConfig::default())
  }
}

fn check_count(n: i64) -> Result<usize> {
  usize::try_from(n).map_err(|_| GammaError::invalid_count(n, "non-negative"))
}

/// Reserves room for `len` elements up front so an oversized request fails
/// before the engine is touched.
fn reserve<U>(n: i64, len: usize) -> Result<Vec<U>> {
  let mut out = Vec::new();
  out
    .try_reserve_exact(len)
    .map_err(|_| GammaError::invalid_count(n, "small enough to allocate"))?;
  Ok(out)
}

impl<R: Rng> GammaSampler<R> {
  pub fn new(rng: R) -> Self {
    Self::with_config(rng, SamplerConfig::default())
  }

  /// `config.seed` is ignored here; the injected engine is used as is.
  pub fn with_config(rng: R, config: SamplerConfig) -> Self {
    if let Some(seed) = config.seed {
      debug!(seed, "config seed ignored for injected engine");
    }
    Self { rng, config }
  }

  pub fn config(&self) -> &SamplerConfig {
    &self.config
  }

  pub fn rng_mut(&mut self) -> &mut R {
    &mut self.rng
  }

  /// One draw from Gamma(`shape`, `scale`).
  ///
  /// Parameters are validated before any entropy is consumed.
  pub fn sample_one<T: FloatExt>(&mut self, shape: T, scale: T) -> Result<T> {
    let gamma = Gamma::new(shape, scale)?;
    gamma.try_sample(&mut self.rng, self.config.max_iterations)
  }

  /// `n` independent draws in generation order. `n == 0` yields an empty array.
  pub fn sample_many<T: FloatExt>(&mut self, n: i64, shape: T, scale: T) -> Result<Array1<T>> {
    let len = check_count(n)?;
    let gamma = Gamma::new(shape, scale)?;
    let mut out = reserve::<T>(n, len)?;
    debug!(n = len, shape = ?shape, scale = ?scale, "sampling gamma sequence");

    for _ in 0..len {
      out.push(gamma.try_sample(&mut self.rng, self.config.max_iterations)?);
    }
    Ok(Array1::from(out))
  }

  /// Parallel [`GammaSampler::sample_many`].
  ///
  /// Each block of `par_chunk` draws gets its own `StdRng`, seeded from this
  /// sampler's engine before the fan-out. The output depends only on the
  /// engine state and `par_chunk`, not on thread scheduling. It differs from
  /// the sequential stream.
  pub fn sample_many_par<T: FloatExt>(
    &mut self,
    n: i64,
    shape: T,
    scale: T,
  ) -> Result<Array1<T>> {
    let len = check_count(n)?;
    let gamma = Gamma::new(shape, scale)?;
    let chunk = self.config.par_chunk.max(1);
    let n_chunks = len.div_ceil(chunk);
    let mut out = reserve::<T>(n, len)?;
    let mut seeds = reserve::<u64>(n, n_chunks)?;
    let max_iterations = self.config.max_iterations;
    debug!(n = len, chunk, shape = ?shape, scale = ?scale, "sampling gamma sequence in parallel");

    seeds.extend((0..n_chunks).map(|_| self.rng.random::<u64>()));
    out.resize(len, T::zero());
    out
      .par_chunks_mut(chunk)
      .zip(seeds.into_par_iter())
      .try_for_each(|(block, seed)| {
        let mut rng = StdRng::seed_from_u64(seed);
        gamma.try_fill_slice(&mut rng, block, max_iterations)
      })?;

    Ok(Array1::from(out))
  }
}

/// One Gamma(`shape`, `scale`) draw from the thread-local engine.
pub fn sample_gamma(shape: f64, scale: f64) -> Result<f64> {
  GammaSampler::new(rand::rng()).sample_one(shape, scale)
}

/// `n` Gamma(`shape`, `scale`) draws from the thread-local engine.
pub fn sample_gamma_n(n: i64, shape: f64, scale: f64) -> Result<Array1<f64>> {
  GammaSampler::new(rand::rng()).sample_many(n, shape, scale)
}
