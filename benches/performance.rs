use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kanapad::composer::Composer;
use kanapad::kana::{column_keys, digit_keys};
use kanapad::layout::{display_columns, key_size};
use kanapad::slider::{Normalization, SliderGesture, SliderRange, SliderTrack};

fn bench_slider_drag(c: &mut Criterion) {
    let range = SliderRange::new(10.0, 100.0).unwrap();
    let track = SliderTrack::new(100.0, range)
        .unwrap()
        .with_step(1.0)
        .unwrap();

    c.bench_function("slider_drag_sweep_1000_events", |b| {
        b.iter(|| {
            let mut gesture = SliderGesture::default();
            let mut value = 16.0;
            gesture.begin();
            for i in 0..1000 {
                let py = (i as f32 * 0.37) - 120.0;
                gesture.update(&track, black_box(py), &mut value);
            }
            gesture.end();
            black_box(value);
        })
    });

    let quirky = track.with_normalization(Normalization::UpperBound);
    c.bench_function("slider_thumb_offset", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for v in 10..=100 {
                sum += quirky.thumb_offset(black_box(v as f32));
            }
            black_box(sum);
        })
    });
}

fn bench_keypad_frame(c: &mut Criterion) {
    // Work done per frame outside egui: geometry plus walking every key
    c.bench_function("keypad_layout_and_keys", |b| {
        b.iter(|| {
            let size = key_size(black_box(720.0));
            let mut count = digit_keys().count();
            for column in display_columns() {
                count += column_keys(column).filter(|k| !k.is_gap()).count();
            }
            black_box((size, count));
        })
    });
}

fn bench_composer(c: &mut Criterion) {
    c.bench_function("composer_type_500_keys", |b| {
        b.iter(|| {
            let mut composer = Composer::new();
            for i in 0..500 {
                if let Some(key) = column_keys(i % 10).nth(i % 5) {
                    composer.push_key(key);
                }
            }
            black_box(composer.char_count());
        })
    });
}

criterion_group!(benches, bench_slider_drag, bench_keypad_frame, bench_composer);
criterion_main!(benches);
