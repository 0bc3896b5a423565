//! Parameter, compiler and backend names with special meaning.

/// Reserved column: compiler for host code.
pub const HOST_COMPILER: &str = "host_compiler";
/// Reserved column: compiler for device code.
pub const DEVICE_COMPILER: &str = "device_compiler";
/// Reserved column: holds backend sets instead of scalar values.
pub const BACKENDS: &str = "backends";

pub const GCC: &str = "gcc";
pub const CLANG: &str = "clang";
pub const NVCC: &str = "nvcc";
pub const CLANG_CUDA: &str = "clang-cuda";
pub const HIPCC: &str = "hipcc";

/// Every compiler name known to the built-in rules.
pub const COMPILERS: [&str; 5] = [GCC, CLANG, NVCC, CLANG_CUDA, HIPCC];

pub const ACC_CPU_B_SEQ_T_SEQ: &str = "alpaka_ACC_CPU_B_SEQ_T_SEQ_ENABLE";
pub const ACC_CPU_B_SEQ_T_THREADS: &str = "alpaka_ACC_CPU_B_SEQ_T_THREADS_ENABLE";
pub const ACC_CPU_B_SEQ_T_FIBERS: &str = "alpaka_ACC_CPU_B_SEQ_T_FIBERS_ENABLE";
pub const ACC_CPU_B_TBB_T_SEQ: &str = "alpaka_ACC_CPU_B_TBB_T_SEQ_ENABLE";
pub const ACC_CPU_B_OMP2_T_SEQ: &str = "alpaka_ACC_CPU_B_OMP2_T_SEQ_ENABLE";
pub const ACC_CPU_B_SEQ_T_OMP2: &str = "alpaka_ACC_CPU_B_SEQ_T_OMP2_ENABLE";
pub const ACC_ANY_BT_OMP5: &str = "alpaka_ACC_ANY_BT_OMP5_ENABLE";
pub const ACC_GPU_CUDA: &str = "alpaka_ACC_GPU_CUDA_ENABLE";
pub const ACC_GPU_HIP: &str = "alpaka_ACC_GPU_HIP_ENABLE";

/// CPU backends, in build-option order.
pub const CPU_BACKENDS: [&str; 7] = [
    ACC_CPU_B_SEQ_T_SEQ,
    ACC_CPU_B_SEQ_T_THREADS,
    ACC_CPU_B_SEQ_T_FIBERS,
    ACC_CPU_B_TBB_T_SEQ,
    ACC_CPU_B_OMP2_T_SEQ,
    ACC_CPU_B_SEQ_T_OMP2,
    ACC_ANY_BT_OMP5,
];

/// All backends, in build-option order.
pub const ALL_BACKENDS: [&str; 9] = [
    ACC_CPU_B_SEQ_T_SEQ,
    ACC_CPU_B_SEQ_T_THREADS,
    ACC_CPU_B_SEQ_T_FIBERS,
    ACC_CPU_B_TBB_T_SEQ,
    ACC_CPU_B_OMP2_T_SEQ,
    ACC_CPU_B_SEQ_T_OMP2,
    ACC_ANY_BT_OMP5,
    ACC_GPU_CUDA,
    ACC_GPU_HIP,
];

/// Backend state: enabled (CPU backends carry no version).
pub const ON: &str = "on";
/// Backend state: disabled.
pub const OFF: &str = "off";

pub const UBUNTU: &str = "ubuntu";
pub const CMAKE: &str = "cmake";
pub const BOOST: &str = "boost";
pub const ALPAKA: &str = "alpaka";
pub const CXX_STANDARD: &str = "cxx_standard";

/// Rolling development tag of the framework.
pub const DEVELOP: &str = "develop";
