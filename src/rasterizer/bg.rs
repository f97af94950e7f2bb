// draw_normal_or_hbias (spec.md §4.4.3): the Normal and HBias world modes
// share everything but the per-row horizontal bias term, so both are
// handled by one kernel keyed on `hbias`.

use super::sample::{sample_bgmap_pixel, OverflowTile};
use super::Gplt;
use crate::bgmap::BgMapMemory;
use crate::char_table::CharacterTable;
use crate::host::{ClipRect, EyeSurface};

pub struct BgDrawParams {
    pub right_eye: bool,
    pub hbias: bool,
    pub segment: u8,
    pub gx: i16,
    pub gp: i16,
    pub gy: i16,
    pub mx: i16,
    pub mp: i16,
    pub my: i16,
    pub w: u16,
    pub h: u16,
    pub param_base: u16,
    pub x_mask: u16,
    pub y_mask: u16,
    pub ovr: bool,
    pub ovr_tile: Option<OverflowTile>,
    pub gplt: Gplt,
}

pub fn draw_normal_or_hbias(
    params: &BgDrawParams,
    bgmap: &BgMapMemory,
    chars: &CharacterTable,
    surface: &mut dyn EyeSurface,
    clip: ClipRect,
) {
    let right = params.right_eye;

    for y in 0..=params.h as i32 {
        let dy = y + params.gy as i32;
        let sy = y + params.my as i32;

        let hshift = if params.hbias {
            let offset = params.param_base as u32 + 2 * y as u32 + if right { 0 } else { 1 };
            bgmap.read_i16(offset) as i32
        } else {
            0
        };

        for x in 0..=params.w as i32 {
            let dx = x + params.gx as i32 + if right { -(params.gp as i32) } else { params.gp as i32 };
            if !clip.contains(dx, dy) {
                continue;
            }

            let sx = x + params.mx as i32 + hshift + if right { -(params.mp as i32) } else { params.mp as i32 };

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
