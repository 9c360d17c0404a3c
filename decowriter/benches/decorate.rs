#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use decowriter::DecoWriter;

fn lines(c: &mut Criterion) {
	let input: Vec<u8> = (0..1024)
		.flat_map(|i| format!("line number {i}\n").into_bytes())
		.collect();

	c.bench_function("decorate many lines", |b| {
		b.iter(|| {
			let mut w = DecoWriter::new(
				Vec::<u8>::with_capacity(64 * 1024),
				"> ",
				" <",
			);
			w.write(black_box(&input)).unwrap();
			w.written()
		});
	});

	c.bench_function("decorate split line", |b| {
		b.iter(|| {
			let mut w = DecoWriter::new(
				Vec::<u8>::with_capacity(64 * 1024),
				"> ",
				" <",
			);
			for chunk in black_box(&input).chunks(7) {
				w.write(chunk).unwrap();
			}
			w.written()
		});
	});
}

criterion_group!(benches, lines);
criterion_main!(benches);
