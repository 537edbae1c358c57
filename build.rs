use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Environment variable that disables every hardware lane backend at build time
const FORCE_FALLBACK_ENV: &str = "FASTLOG_FORCE_FALLBACK";

// CPU features we want to detect
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_arch: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "neon" => 0,
            "sse2" => 1,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all lane backends this crate ships an implementation for
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse2",
                target_arch: &["x86", "x86_64"],
                cfg_flag: "sse2",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                target_arch: &["aarch64"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }

    fn matches_target(&self, target_arch: &str) -> bool {
        self.target_arch.contains(&target_arch)
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Features the target is compiled with, as reported by cargo.
// Works for cross builds, where the host CPU says nothing about the target.
struct TargetDetector;
impl CpuFeatureDetector for TargetDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            feature.detected |= enabled.contains(&feature.name);
        }
    }

    fn is_applicable(&self) -> bool {
        true
    }
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                let found = match feature.name {
                    // aarch64 kernels report NEON as "asimd"
                    "neon" => contents.contains("asimd") || contents.contains("neon"),
                    name => contents.contains(name),
                };
                feature.detected |= found;
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                match feature.name {
                    "sse2" => feature.detected |= contents.contains("hw.optional.sse2: 1"),
                    "neon" => feature.detected |= contents.contains("hw.optional.neon: 1"),
                    _ => {}
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// Factory that creates the appropriate detector for the current OS
struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        // Get detectors for all supported platforms
        let detectors = Self::cpu_features_detectors();

        // Find the applicable detector and use it
        for detector in detectors {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn apply(features: &mut [CpuFeature], target_arch: &str, force_fallback: bool) {
        // Sort features by priority (highest first)
        features.sort();

        // Find and use the highest detected feature that the target can run
        // if no feature is detected, use fallback implementation
        let cfg_flag = if force_fallback {
            "fallback"
        } else {
            features
                .iter()
                .find(|cpu_feature| cpu_feature.detected && cpu_feature.matches_target(target_arch))
                .map(|cpu_feature| cpu_feature.cfg_flag)
                .unwrap_or("fallback")
        };

        println!("applying: {cfg_flag}");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse2)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={FORCE_FALLBACK_ENV}");

    let force_fallback = env::var(FORCE_FALLBACK_ENV)
        .map(|value| !value.is_empty() && value != "0")
        .unwrap_or(false);

    let mut features = CpuFeature::features();

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    TargetDetector.detect_features(&mut features);

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    let is_native_build = host == target;

    // Only probe the host CPU for native builds
    if is_native_build {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    PlatformDetector::apply(&mut features, &target_arch, force_fallback);
}
