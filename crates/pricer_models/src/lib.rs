//! # Pricer Models (L2: Business Logic)
//!
//! Stochastic processes and analytical reference formulas.
//!
//! This crate provides:
//! - Process models exposing SDE coefficients (lognormal, constant elasticity of variance)
//! - A closed variant set, [`models::ProcessModel`], for static dispatch
//! - Black-Scholes closed-form prices used to validate Monte Carlo estimates
//!
//! ## Design Principles
//!
//! - **Enum-based processes** for static dispatch in the simulation hot loop
//! - **Shared parameter snapshot**: every model reads one `Arc<ParameterSet>`
//! - **Pure coefficients**: models hold no mutable state

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod models;
