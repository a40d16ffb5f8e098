// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **BATS Kernels** - *Bulk-And-Tails Distribution Kernels*
//!
//! Scalar and Arrow-array kernels for the seven-parameter Bulk-And-Tails
//! distribution: a Student-t bulk whose two tails are reshaped independently.
//!
//! The entry point is
//! [`Bats`](kernels::scientific::distributions::univariate::bats::Bats) and the
//! `bats_*` array kernels beside it.

pub mod kernels {
    pub mod scientific {
        #[cfg(feature = "probability_distributions")]
        pub mod distributions;
    }
}

pub mod traits {
    pub mod continuous;
}

pub mod config;

pub mod errors;

pub mod utils;
