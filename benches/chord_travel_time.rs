use criterion::{black_box, criterion_group, criterion_main, Criterion};

use straight_ray::{chord_travel_time, Cell, DVec2, Ray};

const GRID_SIZE: usize = 64;
const CELL_SIZE: f64 = 0.5;

fn build_cells() -> Vec<Cell> {
  let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
  for row in 0..GRID_SIZE {
    for column in 0..GRID_SIZE {
      let x = column as f64 * CELL_SIZE;
      let y = row as f64 * CELL_SIZE;
      cells.push(Cell::new(x, y, x + CELL_SIZE, y + CELL_SIZE));
    }
  }
  cells
}

fn build_rays() -> Vec<Ray> {
  let extent = GRID_SIZE as f64 * CELL_SIZE;
  let mut rays = Vec::new();
  for i in 0..16 {
    let t = (i as f64 + 0.5) / 16.0;
    // Oblique rays fanning out from the left edge.
    rays.push(Ray::new(DVec2::new(0.0, t * extent), DVec2::new(extent, (1.0 - t) * extent)));
    // Axis-aligned rays.
    rays.push(Ray::new(DVec2::new(t * extent, 0.0), DVec2::new(t * extent, extent)));
    rays.push(Ray::new(DVec2::new(0.0, t * extent), DVec2::new(extent, t * extent)));
  }
  rays
}

fn bench_chord_travel_time(c: &mut Criterion) {
  let cells = build_cells();
  let rays = build_rays();

  c.bench_function("chord_travel_time_grid", |b| {
    b.iter(|| {
      let mut total = 0.0;
      for ray in &rays {
        for cell in &cells {
          if let Some(time) = chord_travel_time(1.0, cell, ray).time() {
            total += time;
          }
        }
      }
      black_box(total);
    });
  });

  let miss = Ray::new(DVec2::new(-10.0, -10.0), DVec2::new(-5.0, -1.0));
  c.bench_function("chord_travel_time_rejected", |b| {
    b.iter(|| {
      for cell in &cells {
        black_box(chord_travel_time(1.0, cell, black_box(&miss)));
      }
    });
  });
}

criterion_group!(benches, bench_chord_travel_time);
criterion_main!(benches);
