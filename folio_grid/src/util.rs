// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamps `value` to a finite, non-negative number. NaN maps to `0.0`.
#[inline]
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        0.0
    } else if value.is_infinite() {
        f64::MAX
    } else {
        value
    }
}

/// Rounds a non-negative `value` down to a `usize`.
///
/// Negative values and NaN map to `0`; values beyond `usize::MAX` saturate.
#[inline]
pub(crate) fn floor_to_usize(value: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Float-to-int `as` casts saturate and map NaN to zero"
    )]
    let i = value as usize;
    i
}

/// Rounds a non-negative `value` up to a `usize`.
#[inline]
pub(crate) fn ceil_to_usize(value: f64) -> usize {
    let i = floor_to_usize(value);
    if (i as f64) < value {
        i.saturating_add(1)
    } else {
        i
    }
}
