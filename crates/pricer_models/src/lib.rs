//! # Pricer Models (L2: Business Logic)
//!
//! FX option product specifications and closed-form engines.
//!
//! This crate provides:
//! - Product specifications: digital, American, Asian and combination
//!   structures ([`instruments`])
//! - The Garman-Kohlhagen vanilla engine and the digital engine
//!   ([`analytical`])
//! - The combination composer netting vanilla legs into risk reversals and
//!   seagulls ([`combinations`])
//!
//! ## Design Principles
//!
//! - **Tagged unions** for option kind, digital kind, tree type and
//!   combination structure; no trait objects
//! - **Validated constructors** on specifications, engines assume valid input
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, PricingParameters};
//! use pricer_models::analytical::price_and_greeks;
//!
//! let params = PricingParameters::new(1.10, 1.12, 0.5, 0.03, 0.01, 0.15).unwrap();
//! let result = price_and_greeks(&params, OptionKind::Call);
//!
//! assert!(result.price > 0.0);
//! assert!(result.greeks.delta.unwrap() > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod combinations;
pub mod instruments;
