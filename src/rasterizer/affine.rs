// draw_affine (spec.md §4.4.4): per-row skew/scale parameters drawn from
// an 8-word stride parameter block (5 words used, 3 reserved).

use super::sample::{sample_bgmap_pixel, OverflowTile};
use super::Gplt;
use crate::bgmap::BgMapMemory;
use crate::char_table::CharacterTable;
use crate::host::{ClipRect, EyeSurface};

pub struct AffineDrawParams {
    pub right_eye: bool,
    pub segment: u8,
    pub gx: i16,
    pub gp: i16,
    pub gy: i16,
    pub w: u16,
    pub h: u16,
    pub param_base: u16,
    pub x_mask: u16,
    pub y_mask: u16,
    pub ovr: bool,
    pub ovr_tile: Option<OverflowTile>,
    pub gplt: Gplt,
}

/// Q7 fixed-point: a raw 16-bit scale register is the scale factor times 512.
fn q7_to_f64(raw: i16) -> f64 {
    raw as f64 / 512.0
}

pub fn draw_affine(
    params: &AffineDrawParams,
    bgmap: &BgMapMemory,
    chars: &CharacterTable,
    surface: &mut dyn EyeSurface,
    clip: ClipRect,
) {
    let right = params.right_eye;

    for y in 0..=params.h as i32 {
        let base = params.param_base as u32 + 8 * y as u32;
        let h_skw = bgmap.read_i16(base) as f64;
        let prlx = bgmap.read_i16(base + 1);
        let v_skw = bgmap.read_i16(base + 2) as f64;
        let h_scl = q7_to_f64(bgmap.read_i16(base + 3));
        let v_scl = q7_to_f64(bgmap.read_i16(base + 4));

        let h_skw = h_skw + if right { -(prlx as f64) } else { prlx as f64 };

        let dy = y + params.gy as i32;

        for x in 0..=params.w as i32 {
            let dx = x + params.gx as i32 + if right { -(params.gp as i32) } else { params.gp as i32 };
            if !clip.contains(dx, dy) {
                continue;
            }

            let sx = (h_skw + h_scl * x as f64).floor() as i32;
            let sy = (v_skw + v_scl * x as f64).floor() as i32;

            let color = if params.ovr && (sx < 0 || sx as u32 > params.x_mask as u32 || sy < 0 || sy as u32 > params.y_mask as u32) {
                params.ovr_tile.and_then(|tile| {
                    let tx = (sx & 7) as usize;
                    let ty = (sy & 7) as usize;
                    tile[ty * 8 + tx]
                })
            } else {
                let masked_x = (sx as u16) & params.x_mask;
                let masked_y = (sy as u16) & params.y_mask;
                sample_bgmap_pixel(bgmap, chars, &params.gplt, params.segment, masked_x as i32, masked_y as i32)
            };

            if let Some(c) = color {
                surface.set_pixel(dx, dy, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ByteMask;

    struct FakeSurface {
        pixels: std::collections::HashMap<(i32, i32), u8>,
    }

    impl EyeSurface for FakeSurface {
        fn set_pixel(&mut self, x: i32, y: i32, palette_index: u8) {
            self.pixels.insert((x, y), palette_index);
        }
        fn fill(&mut self, _palette_index: u8, _clip: ClipRect) {}
    }

    #[test]
    fn identity_transform_matches_plain_sample() {
        let mut chars = CharacterTable::new();
        chars.write_word(0, 0, 0xE4, ByteMask::Both);
        let mut bgmap = BgMapMemory::new();
        bgmap.write(0, 0x0000, ByteMask::Both);
        // h_scl/v_scl = 1.0 in Q7 fixed point -> raw 512.
        bgmap.write(3, 512u16, ByteMask::Both);
        bgmap.write(4, 512u16, ByteMask::Both);

        let params = AffineDrawParams {
            right_eye: false,
            segment: 0,
            gx: 0,
            gp: 0,
            gy: 0,
            w: 7,
            h: 0,
            param_base: 0,
            x_mask: 0xFFFF,
            y_mask: 0xFFFF,
            ovr: false,
            ovr_tile: None,
            gplt: [0xE4, 0, 0, 0],
        };

        let mut surface = FakeSurface {
            pixels: std::collections::HashMap::new(),
        };
        draw_affine(&params, &bgmap, &chars, &mut surface, ClipRect::full_screen());

        assert_eq!(surface.pixels.get(&(2, 0)), Some(&2));
    }
}
