//! Standard pin requirements and expectation table.

use super::versions::SoftwareVersions;
use crate::catalog::names::*;
use crate::error::Result;
use crate::job::Job;
use crate::reorder::PinPlan;
use crate::verify::Expectations;

/// Base of synthesized pin jobs: compilers left blank, latest build tools
/// and framework, Ubuntu 20.04, C++17.
pub fn pin_template(versions: &SoftwareVersions) -> Result<Job> {
    Ok(Job::new()
        .with(HOST_COMPILER, "", "")
        .with(DEVICE_COMPILER, "", "")
        .with(CMAKE, CMAKE, versions.latest(CMAKE)?)
        .with(BOOST, BOOST, versions.latest(BOOST)?)
        .with(ALPAKA, ALPAKA, versions.latest(ALPAKA)?)
        .with(UBUNTU, UBUNTU, "20.04")
        .with(CXX_STANDARD, CXX_STANDARD, "17"))
}

/// Eight pins, each against the latest framework release and `develop`:
///
/// 1. gcc 9 with the OpenMP 2 blocks backend;
/// 2. the latest clang with the OpenMP 2 blocks backend;
/// 3. gcc 9 host with the latest `nvcc` and CUDA;
/// 4. the latest `hipcc` with HIP.
pub fn standard_pins(versions: &SoftwareVersions) -> Result<PinPlan> {
    let release = versions.latest_release(ALPAKA)?;
    let develop = versions.latest(ALPAKA)?;
    let clang = versions.latest(CLANG)?;
    let nvcc = versions.latest(NVCC)?;
    let hipcc = versions.latest(HIPCC)?;

    let families = [
        Job::new()
            .with(HOST_COMPILER, GCC, "9")
            .with(DEVICE_COMPILER, GCC, "9")
            .with(ACC_CPU_B_OMP2_T_SEQ, ACC_CPU_B_OMP2_T_SEQ, ON),
        Job::new()
            .with(HOST_COMPILER, CLANG, clang)
            .with(DEVICE_COMPILER, CLANG, clang)
            .with(ACC_CPU_B_OMP2_T_SEQ, ACC_CPU_B_OMP2_T_SEQ, ON),
        Job::new()
            .with(HOST_COMPILER, GCC, "9")
            .with(DEVICE_COMPILER, NVCC, nvcc)
            .with(ACC_GPU_CUDA, ACC_GPU_CUDA, nvcc),
        Job::new()
            .with(HOST_COMPILER, HIPCC, hipcc)
            .with(DEVICE_COMPILER, HIPCC, hipcc)
            .with(ACC_GPU_HIP, ACC_GPU_HIP, hipcc),
    ];

    let mut plan = PinPlan::new(pin_template(versions)?);
    for family in families {
        for framework in [release, develop] {
            plan = plan.with_requirement(family.clone().with(ALPAKA, ALPAKA, framework));
        }
    }
    Ok(plan)
}

/// Facts every generated matrix must contain.
///
/// - host compilers gcc, clang, clang-cuda and hipcc (any version);
///   device compilers the same plus `nvcc`;
/// - the OpenMP 2 blocks backend switched on;
/// - every CUDA and HIP SDK version;
/// - every version of CMake, Boost, the framework, Ubuntu and the C++
///   standard.
pub fn standard_expectations(versions: &SoftwareVersions) -> Expectations {
    let hosts = [GCC, CLANG, CLANG_CUDA, HIPCC];
    let mut e = Expectations::new();
    for name in hosts {
        e.expect_name(HOST_COMPILER, name);
    }
    for name in hosts.into_iter().chain([NVCC]) {
        e.expect_name(DEVICE_COMPILER, name);
    }

    e.expect_versions(ACC_CPU_B_OMP2_T_SEQ, ACC_CPU_B_OMP2_T_SEQ, [ON]);
    e.expect_versions(ACC_GPU_CUDA, ACC_GPU_CUDA, versions.get(NVCC).iter().cloned());
    e.expect_versions(ACC_GPU_HIP, ACC_GPU_HIP, versions.get(HIPCC).iter().cloned());

    for sw in [CMAKE, BOOST, ALPAKA, UBUNTU, CXX_STANDARD] {
        e.expect_versions(sw, sw, versions.get(sw).iter().cloned());
    }
    e
}
