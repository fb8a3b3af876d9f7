use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motion_edit_core::{resequence, stitch, Motion, Skeleton, StitchConfig};

/// Synthetic walking-scale clip: 25 joints, smooth root travel, per-joint
/// yaw that drifts with frame and joint index.
fn mk_motion(frames: usize, joints: usize) -> Motion {
    let skeleton = Skeleton::new((0..joints).map(|j| format!("joint{j}")).collect());
    let positions = (0..frames)
        .map(|f| {
            (0..joints)
                .map(|j| [f as f32 * 0.02, (f as f32 * 0.1).sin(), j as f32 * 0.05])
                .collect()
        })
        .collect();
    let rotations = (0..frames)
        .map(|f| {
            (0..joints)
                .map(|j| {
                    let half = (f as f32 * 0.015 + j as f32 * 0.2) * 0.5;
                    [0.0, half.sin(), 0.0, half.cos()]
                })
                .collect()
        })
        .collect();
    Motion::new(skeleton, positions, rotations).expect("consistent bench motion")
}

fn bench_resequence(c: &mut Criterion) {
    let motion = mk_motion(240, 25);
    c.bench_function("resequence_240f_stride10_spacing20", |b| {
        b.iter(|| resequence(black_box(&motion), 10, 20).unwrap())
    });
}

fn bench_stitch(c: &mut Criterion) {
    let m1 = mk_motion(120, 25);
    let m2 = mk_motion(120, 25);
    let cfg = StitchConfig::default();
    c.bench_function("stitch_120f_radius20", |b| {
        b.iter(|| stitch(black_box(&m1), 60, black_box(&m2), 20, &cfg).unwrap())
    });
}

criterion_group!(benches, bench_resequence, bench_stitch);
criterion_main!(benches);
