// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vmath_core::Vec3;
use vmath_geom::{PayloadRay, Ray};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn ray() -> Ray {
    Ray::new(Vec3::ZERO, Vec3::UNIT_Z)
}

fn counting_hook(counter: &Arc<AtomicUsize>) -> impl FnOnce(Box<dyn std::any::Any + Send>) + Send {
    let counter = Arc::clone(counter);
    move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn drop_runs_release_hook_once() {
    init_tracing();
    let released = Arc::new(AtomicUsize::new(0));
    {
        let mut r = PayloadRay::new(ray());
        r.attach(42u32, counting_hook(&released));
        assert_eq!(r.payload::<u32>(), Some(&42));
        assert_eq!(released.load(Ordering::SeqCst), 0);
    }
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn explicit_release_is_not_repeated_on_drop() {
    init_tracing();
    let released = Arc::new(AtomicUsize::new(0));
    let mut r = PayloadRay::from(ray());
    r.attach("material-7", counting_hook(&released));
    r.release();
    r.release();
    assert!(!r.has_payload());
    drop(r);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn replacing_payload_releases_previous_data() {
    init_tracing();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut r = PayloadRay::new(ray());
    for value in [1i32, 2, 3] {
        let seen = Arc::clone(&seen);
        r.attach(value, move |data| {
            if let Ok(v) = data.downcast::<i32>() {
                if let Ok(mut seen) = seen.lock() {
                    seen.push(*v);
                }
            }
        });
    }
    assert_eq!(seen.lock().map(|s| s.clone()).unwrap_or_default(), vec![1, 2]);
    let bare = r.into_ray();
    assert_eq!(bare, ray());
    assert_eq!(seen.lock().map(|s| s.clone()).unwrap_or_default(), vec![1, 2, 3]);
}

#[test]
fn take_payload_skips_hook() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut r = PayloadRay::new(ray());
    r.attach(String::from("owned"), counting_hook(&released));
    if let Some(s) = r.payload_mut::<String>() {
        s.push_str("-edited");
    }
    let data = r.take_payload();
    drop(r);
    assert_eq!(released.load(Ordering::SeqCst), 0);
    let text = data.and_then(|d| d.downcast::<String>().ok());
    assert_eq!(text.as_deref().map(String::as_str), Some("owned-edited"));
}

#[test]
fn wrong_type_downcast_is_none() {
    let mut r = PayloadRay::new(ray());
    r.attach(1.5f32, |_| {});
    assert_eq!(r.payload::<u64>(), None);
    r.ray_mut().depth = 3;
    assert_eq!(r.ray().depth, 3);
}
