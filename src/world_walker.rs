// Per-eye world-list walker (spec.md §4.5): iterates the 32 world
// descriptors from index 31 down to 0, dispatching each to the matching
// rasterizer kernel and tracking the shared SPT object-group cursor.

use crate::bgmap::BgMapMemory;
use crate::char_table::CharacterTable;
use crate::constants::{Eye, WORLD_COUNT};
use crate::host::{ClipRect, EyeSurface};
use crate::rasterizer::{
    draw_affine, draw_normal_or_hbias, fill_overflow_tile, put_object, AffineDrawParams,
    BgDrawParams, Gplt,
};
use crate::world::WorldMode;

/// Render one eye's full world list onto `surface`. `gplt`/`jplt` are
/// register snapshots taken at render-pass start (spec.md §5: a render
/// pass sees a consistent palette, not interleaved writes).
pub fn render_eye(
    eye: Eye,
    bgmap: &BgMapMemory,
    chars: &CharacterTable,
    gplt: &Gplt,
    jplt: &Gplt,
    spt: &[u16; 4],
    surface: &mut dyn EyeSurface,
    clip: ClipRect,
) {
    let right = eye.is_right();
    let mut cur_spt: i32 = 3;

    for world_index in (0..WORLD_COUNT).rev() {
        let wa = bgmap.world_attribute(world_index as u8);
        if wa.end {
            return;
        }

        let this_eye_enabled = if right { wa.ron } else { wa.lon };

        match wa.mode {
            WorldMode::Normal | WorldMode::HBias => {
                let ovr_tile = if wa.ovr {
                    let palette = gplt[((wa.ovr_char >> 14) & 3) as usize];
                    Some(fill_overflow_tile(chars, wa.ovr_char & 0x3FFF, palette))
                } else {
                    None
                };

                if this_eye_enabled {
                    let params = BgDrawParams {
                        right_eye: right,
                        hbias: matches!(wa.mode, WorldMode::HBias),
                        segment: wa.bgmap_base,
                        gx: wa.gx,
                        gp: wa.gp,
                        gy: wa.gy,
                        mx: wa.mx,
                        mp: wa.mp,
                        my: wa.my,
                        w: wa.w,
                        h: wa.h,
                        param_base: wa.param_base,
                        x_mask: wa.x_mask(),
                        y_mask: wa.y_mask(),
                        ovr: wa.ovr,
                        ovr_tile,
                        gplt: *gplt,
                    };
                    draw_normal_or_hbias(&params, bgmap, chars, surface, clip);
                }
            }
            WorldMode::Affine => {
                let ovr_tile = if wa.ovr {
                    let palette = gplt[((wa.ovr_char >> 14) & 3) as usize];
                    Some(fill_overflow_tile(chars, wa.ovr_char & 0x3FFF, palette))
                } else {
                    None
                };

                if this_eye_enabled {
                    let params = AffineDrawParams {
                        right_eye: right,
                        segment: wa.bgmap_base,
                        gx: wa.gx,
                        gp: wa.gp,
                        gy: wa.gy,
                        w: wa.w,
                        h: wa.h,
                        param_base: wa.param_base,
                        x_mask: wa.x_mask(),
                        y_mask: wa.y_mask(),
                        ovr: wa.ovr,
                        ovr_tile,
                        gplt: *gplt,
                    };
                    draw_affine(&params, bgmap, chars, surface, clip);
                }
            }
            WorldMode::Object => {
                if cur_spt == -1 {
                    log::warn!("SPT underflow at world {world_index}, skipping");
                    continue;
                }

                let start = spt[cur_spt as usize] & 0x3FF;
                let end = if cur_spt == 0 { 0x3FF } else { spt[(cur_spt - 1) as usize] & 0x3FF };

                let mut i = start;
                for _ in 0..1024u32 {
                    if i == end {
                        break;
                    }
                    let obj = bgmap.object_attribute(i);
                    let eye_enabled = if right { obj.jron } else { obj.jlon };
                    if eye_enabled {
                        let dx = (obj.jx as i32 + if right { -(obj.jp as i32) } else { obj.jp as i32 }).rem_euclid(512);
                        let palette = jplt[obj.palette as usize];
                        put_object(dx, obj.jy as i32, obj.tile, palette, obj.hflip, obj.vflip, chars, surface, clip);
                    }
                    i = if i == 0 { 0x3FF } else { i - 1 };
                }

                if this_eye_enabled {
                    cur_spt -= 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ByteMask;

    struct NullSurface;
    impl EyeSurface for NullSurface {
        fn set_pixel(&mut self, _x: i32, _y: i32, _palette_index: u8) {}
        fn fill(&mut self, _palette_index: u8, _clip: ClipRect) {}
    }

    fn world_word_addr(world: u8, word: u8) -> u32 {
        crate::bgmap::WORLD_ATTR_BASE + (world as u32) * 16 + word as u32
    }

    #[test]
    fn scenario_s5_stops_at_end_world() {
        let mut bgmap = BgMapMemory::new();
        // World 15: END bit set.
        bgmap.write(world_word_addr(15, 0), 0x0040, ByteMask::Both);
        // World 30: LON set, Normal mode, tiny size so it does nothing visible
        // but must still be visited (not skipped) before world 15 halts the walk.
        bgmap.write(world_word_addr(30, 0), 0x8000, ByteMask::Both);

        let chars = CharacterTable::new();
        let gplt: Gplt = [0, 0, 0, 0];
        let jplt: Gplt = [0, 0, 0, 0];
        let spt = [0x3FFu16; 4];
        let mut surface = NullSurface;

        // Should not panic and should return after world 15's END.
        render_eye(Eye::Left, &bgmap, &chars, &gplt, &jplt, &spt, &mut surface, ClipRect::full_screen());
    }

    #[test]
    fn object_group_walk_visits_expected_count() {
        let mut bgmap = BgMapMemory::new();
        // World 31 in Object mode, LON set.
        bgmap.write(world_word_addr(31, 0), (0b11u16 << 12) | 0x8000, ByteMask::Both);

        let chars = CharacterTable::new();
        let gplt: Gplt = [0, 0, 0, 0];
        let jplt: Gplt = [0, 0, 0, 0];
        let spt = [5u16, 0, 0, 0]; // cur_spt starts at 3, group 3 = (SPT[2]=0, SPT[3]=5]
        let mut surface = NullSurface;

        render_eye(Eye::Left, &bgmap, &chars, &gplt, &jplt, &spt, &mut surface, ClipRect::full_screen());
        // No panics, no infinite loop: success criterion for this smoke test.
    }
}
