use std::thread;

use crate::helpers::*;

const THREADS: i64 = 8;
const PER_THREAD: i64 = 50;

#[test]
fn test_concurrent_foreground_adds_get_distinct_z() {
    let service = test_service();

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    service.add(square()).unwrap();
                }
            });
        }
    });

    assert_eq!(service.count() as i64, THREADS * PER_THREAD);
    assert_unique_z(&service);
    assert_watermark_covers(&service);
}

#[test]
fn test_concurrent_explicit_adds_at_same_index_stay_unique() {
    let service = test_service();

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    service.add(square().with_z(0)).unwrap();
                }
            });
        }
    });

    let zs: Vec<i64> = all_widgets(&service).iter().map(|w| w.z).collect();
    let expected: Vec<i64> = (0..THREADS * PER_THREAD).collect();
    assert_eq!(zs, expected);
}

#[test]
fn test_mixed_workload_preserves_uniqueness() {
    let service = test_service();
    let seed = add_at(&service, &[0, 1, 2, 3, 4]);

    thread::scope(|s| {
        for t in 0..THREADS {
            let service = &service;
            let seed = &seed;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    match (t + i) % 4 {
                        0 => {
                            service.add(square()).unwrap();
                        }
                        1 => {
                            service.add(square().with_z(i % 7)).unwrap();
                        }
                        2 => {
                            // Readers must never see a duplicate mid-shift.
                            let page = service.get_all(0, usize::MAX, None);
                            let mut zs: Vec<i64> = page.iter().map(|w| w.z).collect();
                            zs.dedup();
                            assert_eq!(zs.len(), page.len());
                        }
                        _ => {
                            let widget = &seed[(i as usize) % seed.len()];
                            service.get_by_id(&widget.id).unwrap();
                        }
                    }
                }
            });
        }
    });

    assert_unique_z(&service);
    assert_watermark_covers(&service);
}
