use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vip_core::bgmap::BgMapMemory;
use vip_core::char_table::CharacterTable;
use vip_core::constants::{ByteMask, Eye};
use vip_core::host::{ClipRect, EyeSurface};
use vip_core::world_walker::render_eye;

struct NullSurface;
impl EyeSurface for NullSurface {
    fn set_pixel(&mut self, _x: i32, _y: i32, _palette_index: u8) {}
    fn fill(&mut self, _palette_index: u8, _clip: ClipRect) {}
}

fn bench_full_frame_worlds(c: &mut Criterion) {
    let mut bgmap = BgMapMemory::new();
    let chars = CharacterTable::new();

    // Arrange a handful of full-screen Normal worlds, the common case for a
    // background-heavy scene.
    for world in 0..8u8 {
        let base = vip_core::bgmap::WORLD_ATTR_BASE + (world as u32) * 16;
        bgmap.write(base, 0x8000, ByteMask::Both); // LON set, Normal mode
        bgmap.write(base + 8, 383, ByteMask::Both); // w
        bgmap.write(base + 9, 223, ByteMask::Both); // h
    }

    let gplt = [0xE4u16, 0xE4, 0xE4, 0xE4];
    let jplt = [0xE4u16, 0xE4, 0xE4, 0xE4];
    let spt = [0x3FFu16; 4];

    c.bench_function("render_eye_8_normal_worlds", |b| {
        b.iter(|| {
            let mut surface = NullSurface;
            render_eye(
                black_box(Eye::Left),
                &bgmap,
                &chars,
                &gplt,
                &jplt,
                &spt,
                &mut surface,
                ClipRect::full_screen(),
            );
        })
    });
}

criterion_group!(benches, bench_full_frame_worlds);
criterion_main!(benches);
