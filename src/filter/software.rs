//! Rules on the operating system, language standard and SDK images.

use super::types::RowFilter;
use crate::catalog::names::{
    ACC_GPU_CUDA, ACC_GPU_HIP, CLANG, CLANG_CUDA, CXX_STANDARD, DEVICE_COMPILER, GCC,
    HIPCC, HOST_COMPILER, NVCC, OFF, UBUNTU,
};
use crate::catalog::{CmpOp, NameOp, Row};

/// Software dependency and environment constraints.
///
/// - gcc 6 and older is not packaged for Ubuntu 20.04.
/// - C++20 needs gcc 9 or newer.
/// - `nvcc` before 11.0 stops at C++14; no `nvcc` supports C++20.
/// - clang 11 and 12 are not packaged for Ubuntu 18.04.
/// - CUDA 11.0+ images are not built on Ubuntu 18.04, CUDA before 11.0 not
///   on Ubuntu 20.04.
/// - ROCm images exist only for Ubuntu 20.04.
pub fn software_dependency_filter(row: &Row<'_>) -> bool {
    let host_gcc = row.check_name(HOST_COMPILER, NameOp::Eq, GCC);

    if row.check_version(UBUNTU, CmpOp::Eq, "20.04")
        && host_gcc
        && row.check_version(HOST_COMPILER, CmpOp::Le, "6")
    {
        return false;
    }

    if row.check_version(CXX_STANDARD, CmpOp::Ge, "20")
        && host_gcc
        && row.check_version(HOST_COMPILER, CmpOp::Le, "8")
    {
        return false;
    }

    if row.check_name(DEVICE_COMPILER, NameOp::Eq, NVCC) && row.contains(CXX_STANDARD) {
        if row.check_version(DEVICE_COMPILER, CmpOp::Lt, "11.0")
            && row.check_version(CXX_STANDARD, CmpOp::Gt, "14")
        {
            return false;
        }
        if row.check_version(CXX_STANDARD, CmpOp::Gt, "17") {
            return false;
        }
    }

    if row.check_version(UBUNTU, CmpOp::Eq, "18.04")
        && (row.check_name(HOST_COMPILER, NameOp::Eq, CLANG)
            || row.check_name(HOST_COMPILER, NameOp::Eq, CLANG_CUDA))
        && (row.check_version(HOST_COMPILER, CmpOp::Eq, "11")
            || row.check_version(HOST_COMPILER, CmpOp::Eq, "12"))
    {
        return false;
    }

    let cuda_enabled = row.check_backend_version(ACC_GPU_CUDA, CmpOp::Ne, OFF);

    if row.check_version(UBUNTU, CmpOp::Eq, "18.04")
        && cuda_enabled
        && row.check_backend_version(ACC_GPU_CUDA, CmpOp::Ge, "11.0")
    {
        return false;
    }

    if row.check_version(UBUNTU, CmpOp::Eq, "20.04")
        && cuda_enabled
        && row.check_backend_version(ACC_GPU_CUDA, CmpOp::Lt, "11.0")
    {
        return false;
    }

    if row.check_version(UBUNTU, CmpOp::Ne, "20.04")
        && row.check_name(DEVICE_COMPILER, NameOp::Eq, HIPCC)
        && row.check_backend_version(ACC_GPU_HIP, CmpOp::Ne, OFF)
    {
        return false;
    }

    true
}

/// [`RowFilter`] wrapper of [`software_dependency_filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareDependencyFilter;

impl RowFilter for SoftwareDependencyFilter {
    fn name(&self) -> &str {
        "software-dependency"
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        software_dependency_filter(row)
    }
}
