use interop_proc_macros::trace_fn;

use crate::error::{InteropError, Result};
use crate::reduce;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteropStatus {
    Ok = 0,
    InvalidArgument = 1,
}

impl From<&InteropError> for InteropStatus {
    fn from(err: &InteropError) -> Self {
        match err {
            InteropError::InvalidArgument(_) => InteropStatus::InvalidArgument,
        }
    }
}

// (NULL, 0) is the empty sequence
unsafe fn borrow_values<'a>(values: *const libc::c_double, len: libc::size_t) -> Result<&'a [f64]> {
    if values.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        return Err(InteropError::invalid_argument(format!(
            "values is null but len is {len}"
        )));
    }
    Ok(unsafe { std::slice::from_raw_parts(values, len) })
}

/// `*out = multiplier * sum(values[..len])`; `out` is untouched unless the
/// status is `Ok`.
///
/// # Safety
///
/// `values` must be null or point to `len` readable doubles; `out` must be
/// null or point to a writable double.
#[trace_fn]
#[no_mangle]
pub unsafe extern "C" fn numeric_interop_scale_sum(
    multiplier: libc::c_longlong,
    values: *const libc::c_double,
    len: libc::size_t,
    out: *mut libc::c_double,
) -> InteropStatus {
    if out.is_null() {
        return InteropStatus::from(&InteropError::invalid_argument("out is null"));
    }
    let values = match unsafe { borrow_values(values, len) } {
        Ok(values) => values,
        Err(e) => return InteropStatus::from(&e),
    };
    unsafe { *out = reduce::scale_sum(multiplier, values) };
    InteropStatus::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn call(multiplier: i64, values: *const f64, len: usize) -> (InteropStatus, f64) {
        let mut out = -999.0;
        let status = unsafe { numeric_interop_scale_sum(multiplier, values, len, &mut out) };
        (status, out)
    }

    #[test]
    fn test_scale_sum() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(call(3, values.as_ptr(), values.len()), (InteropStatus::Ok, 18.0));
        let halves = [0.5, 0.5];
        assert_eq!(call(-2, halves.as_ptr(), halves.len()), (InteropStatus::Ok, -2.0));
    }

    #[test]
    fn test_null_with_zero_len_is_empty() {
        assert_eq!(call(8, ptr::null(), 0), (InteropStatus::Ok, 0.0));
    }

    #[test]
    fn test_null_with_len_rejected() {
        let (status, out) = call(8, ptr::null(), 3);
        assert_eq!(status, InteropStatus::InvalidArgument);
        assert_eq!(out, -999.0);
    }

    #[test]
    fn test_null_out_rejected() {
        let values = [1.0];
        let status = unsafe { numeric_interop_scale_sum(1, values.as_ptr(), 1, ptr::null_mut()) };
        assert_eq!(status, InteropStatus::InvalidArgument);
    }

    #[test]
    fn test_prefix_only() {
        let values = [1.0, 2.0, 100.0];
        assert_eq!(call(2, values.as_ptr(), 2), (InteropStatus::Ok, 6.0));
    }

    #[test]
    fn test_nan_passes_through() {
        let values = [f64::NAN];
        let (status, out) = call(1, values.as_ptr(), 1);
        assert_eq!(status, InteropStatus::Ok);
        assert!(out.is_nan());
    }

    #[test]
    fn test_status_repr() {
        assert_eq!(InteropStatus::Ok as i32, 0);
        assert_eq!(InteropStatus::InvalidArgument as i32, 1);
    }
}
