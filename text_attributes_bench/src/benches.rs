// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Benchmarks
//!
//! This module provides benchmarks for attribute sweeps and list edits.

use crate::get_samples;
use std::hint::black_box;
use tango_bench::{Benchmark, benchmark_fn};
use text_attributes::Attribute;
use text_primitives::{FontDescription, FontWeight};

/// Benchmarks walking every segment of a list and resolving its font, as itemization does.
pub fn sweep() -> Vec<Benchmark> {
    get_samples()
        .iter()
        .map(|sample| {
            benchmark_fn(
                format!("Sweep - {} {}", sample.name, sample.modification),
                |b| {
                    b.iter(|| {
                        let mut iter = sample.list.iterator();
                        let mut segments = 0_usize;
                        loop {
                            let mut desc = FontDescription::new();
                            let font = iter.font(&mut desc);
                            black_box((desc, font));
                            segments += 1;
                            if !iter.advance() {
                                break;
                            }
                        }
                        black_box(segments)
                    })
                },
            )
        })
        .collect()
}

/// Benchmarks the edits an editor performs on a styled paragraph.
pub fn editing() -> Vec<Benchmark> {
    let samples = get_samples();
    let mut benches = Vec::new();
    for sample in samples {
        benches.push(benchmark_fn(
            format!("Change - {} {}", sample.name, sample.modification),
            |b| {
                b.iter(|| {
                    let mut list = sample.list.copy();
                    for start in (0..sample.len).step_by(50) {
                        let attr = Attribute::weight(FontWeight::SEMI_BOLD);
                        list.change(attr.with_range(start, start + 30));
                    }
                    black_box(list)
                })
            },
        ));
        benches.push(benchmark_fn(
            format!("Update - {} {}", sample.name, sample.modification),
            |b| {
                b.iter(|| {
                    let mut list = sample.list.copy();
                    for pos in (0..sample.len).step_by(100).rev() {
                        list.update(pos, 3, 5);
                    }
                    black_box(list)
                })
            },
        ));
        benches.push(benchmark_fn(
            format!("Splice - {} {}", sample.name, sample.modification),
            |b| {
                b.iter(|| {
                    let mut list = sample.list.copy();
                    list.splice(&sample.list, sample.len / 2, sample.len);
                    black_box(list)
                })
            },
        ));
    }
    benches
}
