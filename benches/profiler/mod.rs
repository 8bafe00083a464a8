// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Criterion settings shared by every bench target.
///
/// Flamegraphs are written only with `--profile-time`; `PVBOARD_PROFILE_FREQ=0` turns the
/// profiler off entirely.
pub fn criterion() -> Criterion {
    let frequency = env_or::<i32>("PVBOARD_PROFILE_FREQ", 100).clamp(0, 1000);
    let sample_size = env_or::<usize>("PVBOARD_BENCH_SAMPLES", 50).clamp(10, 200);
    let warmup = Duration::from_secs(env_or::<u64>("PVBOARD_BENCH_WARMUP_SECS", 2).clamp(1, 60));
    let measurement =
        Duration::from_secs(env_or::<u64>("PVBOARD_BENCH_MEASURE_SECS", 5).clamp(1, 120));

    let criterion = Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(warmup)
        .measurement_time(measurement);
    if frequency == 0 {
        return criterion;
    }
    criterion.with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
