//! Numerical primitives shared by every closed-form pricer.
//!
//! - [`distributions`]: standard normal CDF and PDF
//! - [`discounting`]: continuous discount factors and the d1/d2 moment terms

pub mod discounting;
pub mod distributions;

pub use discounting::{d1_d2, discount_factor, MomentTerms};
pub use distributions::{norm_cdf, norm_pdf};
