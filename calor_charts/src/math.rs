// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounding and logarithms that also work without `std`.
//!
//! `core` has no `f64::floor` or `f64::log10`; `no_std` builds route through `libm`.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("calor_charts requires either the `std` or `libm` feature");

macro_rules! unary {
    ($($name:ident => $libm:ident),* $(,)?) => {
        $(
            #[inline]
            pub(crate) fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$name()
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$libm(x)
                }
            }
        )*
    };
}

unary! {
    floor => floor,
    ceil => ceil,
    round => round,
    log10 => log10,
}

/// `10^exp`.
#[inline]
pub(crate) fn exp10(exp: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        10_f64.powf(exp)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(10.0, exp)
    }
}
