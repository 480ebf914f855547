//! # stochastic-gamma
//!
//! $$
//! X \sim \Gamma(k,\theta),\quad \mathbb{E}[X]=k\theta,\quad \operatorname{Var}[X]=k\theta^2
//! $$
//!
//! Gamma random variates by Marsaglia–Tsang acceptance-rejection, as a
//! [`rand_distr::Distribution`] ([`Gamma`]), as an engine-owning sampler
//! ([`GammaSampler`]) and as thread-local free functions
//! ([`sample_gamma`], [`sample_gamma_n`]).
//!
//! ```ignore
//! use stochastic_gamma::GammaSampler;
//!
//! let mut sampler = GammaSampler::seeded(42);
//! let x: f64 = sampler.sample_one(2.0, 1.0)?;
//! let xs = sampler.sample_many(1_000, 0.5, 3.0)?;
//! ```
//!
pub mod distributions;
pub mod error;
pub mod sampler;
pub mod traits;

pub use distributions::gamma::Gamma;
pub use error::GammaError;
pub use error::Result;
pub use sampler::sample_gamma;
pub use sampler::sample_gamma_n;
pub use sampler::GammaSampler;
pub use sampler::SamplerConfig;
pub use traits::FloatExt;
