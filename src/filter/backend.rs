//! Rules between the device compiler and the enabled accelerator backends.

use super::types::RowFilter;
use crate::catalog::names::{
    ACC_GPU_CUDA, ACC_GPU_HIP, CLANG, CLANG_CUDA, DEVICE_COMPILER, GCC, HIPCC, NVCC, OFF,
};
use crate::catalog::{CmpOp, Row};

/// Device compiler / backend compatibility.
///
/// | device compiler | CUDA backend              | HIP backend               |
/// |-----------------|---------------------------|---------------------------|
/// | `gcc`, `clang`  | off                       | off                       |
/// | `nvcc`          | same version as `nvcc`    | off                       |
/// | `clang-cuda`    | on (any version)          | off                       |
/// | `hipcc`         | off                       | same version as `hipcc`   |
///
/// Rows without a device compiler or without a backend set are not
/// constrained.
pub fn compiler_backend_filter(row: &Row<'_>) -> bool {
    let Some(device) = row.value(DEVICE_COMPILER) else {
        return true;
    };

    let cuda_enabled = row.check_backend_version(ACC_GPU_CUDA, CmpOp::Ne, OFF);
    let hip_enabled = row.check_backend_version(ACC_GPU_HIP, CmpOp::Ne, OFF);

    match device.name() {
        GCC | CLANG => !cuda_enabled && !hip_enabled,
        NVCC => {
            !row.check_backend_version(ACC_GPU_CUDA, CmpOp::Ne, device.version()) && !hip_enabled
        }
        CLANG_CUDA => !row.check_backend_version(ACC_GPU_CUDA, CmpOp::Eq, OFF) && !hip_enabled,
        HIPCC => {
            !row.check_backend_version(ACC_GPU_HIP, CmpOp::Ne, device.version()) && !cuda_enabled
        }
        _ => true,
    }
}

/// [`RowFilter`] wrapper of [`compiler_backend_filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CompilerBackendFilter;

impl RowFilter for CompilerBackendFilter {
    fn name(&self) -> &str {
        "compiler-backend"
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        compiler_backend_filter(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names::{ACC_CPU_B_SEQ_T_SEQ, ON};
    use crate::filter::testing::RowFixture;

    fn check(device: (&str, &str), cuda: &str, hip: &str) -> bool {
        RowFixture::new()
            .set(DEVICE_COMPILER, device.0, device.1)
            .backends(&[(ACC_CPU_B_SEQ_T_SEQ, ON), (ACC_GPU_CUDA, cuda), (ACC_GPU_HIP, hip)])
            .eval(compiler_backend_filter)
    }

    #[test]
    fn test_host_compilers_without_gpu() {
        assert!(check((GCC, "9"), OFF, OFF));
        assert!(!check((GCC, "9"), "11.0", OFF));
        assert!(!check((GCC, "9"), OFF, "4.2"));
        assert!(check((CLANG, "12"), OFF, OFF));
        assert!(!check((CLANG, "12"), "11.0", OFF));
        assert!(!check((CLANG, "12"), OFF, "4.2"));
    }

    #[test]
    fn test_nvcc_requires_matching_cuda() {
        assert!(!check((NVCC, "11.0"), "10.2", OFF));
        assert!(check((NVCC, "11.0"), "11.0", OFF));
        assert!(check((NVCC, "11"), "11.0", OFF));
        assert!(!check((NVCC, "11.0"), OFF, OFF));
        assert!(!check((NVCC, "11.0"), "11.0", "4.2"));
    }

    #[test]
    fn test_clang_cuda_requires_cuda() {
        assert!(!check((CLANG_CUDA, "12"), OFF, OFF));
        assert!(check((CLANG_CUDA, "12"), "11.0", OFF));
        assert!(check((CLANG_CUDA, "12"), "10.2", OFF));
        assert!(!check((CLANG_CUDA, "12"), "11.0", "4.2"));
    }

    #[test]
    fn test_hipcc_requires_matching_hip() {
        assert!(check((HIPCC, "4.2"), OFF, "4.2"));
        assert!(!check((HIPCC, "4.2"), OFF, "4.3"));
        assert!(!check((HIPCC, "4.2"), OFF, OFF));
        assert!(!check((HIPCC, "4.2"), "11.0", "4.2"));
    }

    #[test]
    fn test_missing_columns() {
        assert!(RowFixture::new()
            .set(DEVICE_COMPILER, NVCC, "11.0")
            .eval(compiler_backend_filter));
        assert!(RowFixture::new()
            .backends(&[(ACC_GPU_CUDA, "11.0"), (ACC_GPU_HIP, "4.2")])
            .eval(compiler_backend_filter));
    }

    #[test]
    fn test_unknown_device_compiler() {
        assert!(check(("icpx", "2023"), "11.0", "4.2"));
    }
}
