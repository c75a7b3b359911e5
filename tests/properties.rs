//! Property tests for the kinematics and the line parser.

use proptest::prelude::*;

use stewart_neck::config::KinematicsConfig;
use stewart_neck::kinematics::{compute_targets, raw_targets, Pose};
use stewart_neck::sim::{MemoryLink, SimDelay, SimEngine, SimUptime};
use stewart_neck::{ClampPolicy, Controller, PlatformConfig};

fn pose() -> impl Strategy<Value = Pose> {
    (
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
        any::<i32>(),
    )
        .prop_map(|(angle_x, angle_y, angle_z, height_offset, roll, pitch)| Pose {
            angle_x,
            angle_y,
            angle_z,
            height_offset,
            roll,
            pitch,
            ..Pose::default()
        })
}

fn small_pose() -> impl Strategy<Value = Pose> {
    (-90i32..=90, -90i32..=90, -90i32..=90, -100i32..=100, -45i32..=45, -45i32..=45).prop_map(
        |(angle_x, angle_y, angle_z, height_offset, roll, pitch)| Pose {
            angle_x,
            angle_y,
            angle_z,
            height_offset,
            roll,
            pitch,
            ..Pose::default()
        },
    )
}

proptest! {
    #[test]
    fn enforced_targets_stay_in_window(pose in pose()) {
        let config = KinematicsConfig::default();
        let targets = compute_targets(&pose, &config, ClampPolicy::Enforce);
        for (_, target) in targets.iter() {
            prop_assert!((0..=32_000).contains(&target.value()));
        }
    }

    #[test]
    fn bypass_passes_raw_targets(pose in pose()) {
        let config = KinematicsConfig::default();
        prop_assert_eq!(
            compute_targets(&pose, &config, ClampPolicy::Bypass),
            raw_targets(&pose, &config)
        );
    }

    #[test]
    fn bypass_reaches_below_zero(depth in 1i32..=200) {
        let config = KinematicsConfig::default();
        let targets = compute_targets(&Pose::at_height(-depth), &config, ClampPolicy::Bypass);
        for (_, target) in targets.iter() {
            prop_assert_eq!(target.value(), -depth * 400);
        }
    }

    #[test]
    fn targets_are_deterministic(pose in small_pose()) {
        let config = KinematicsConfig::default();
        prop_assert_eq!(
            compute_targets(&pose, &config, ClampPolicy::Enforce),
            compute_targets(&pose, &config, ClampPolicy::Enforce)
        );
    }

    #[test]
    fn arbitrary_lines_never_panic(line in "[A-Z0-9:,|. Qq-]{0,64}") {
        let mut c = Controller::new(
            PlatformConfig::default(),
            &mut SimEngine::new(),
            MemoryLink::new(),
            MemoryLink::new(),
            SimDelay::new(),
            SimUptime::default(),
        );
        let summary = c.execute_line(&line);
        prop_assert!(summary.rejected <= line.len());
    }
}
