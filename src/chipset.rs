// Chipset (spec.md §9 design note): the aggregate that owns every
// sub-state (CharacterTable, BGMapMemory, Framebuffers, VipRegisters,
// IoRegisters, HardwareTimer, ScanlineScheduler) and wires HostBus's
// address decoding to them. External collaborators (host CPU, input
// device, cartridge bus) are never owned here — they're passed in at each
// call site so the core stays agnostic of how the host implements them.

use crate::bgmap::BgMapMemory;
use crate::bus::{self, BusRegion};
use crate::char_table::CharacterTable;
use crate::config::ChipsetConfig;
use crate::constants::{ByteMask, Eye};
use crate::framebuffers::Framebuffers;
use crate::host::{CartridgeBus, ClipRect, EyeSurface, HostCpu, InputDevice};
use crate::io_registers::IoRegisters;
use crate::registers::VipRegisters;
use crate::scheduler::ScanlineScheduler;
use crate::timer::HardwareTimer;
use crate::world_walker::render_eye;

pub struct Chipset {
    pub chars: CharacterTable,
    pub bgmap: BgMapMemory,
    pub framebuffers: Framebuffers,
    pub regs: VipRegisters,
    pub io: IoRegisters,
    pub timer: HardwareTimer,
    pub scheduler: ScanlineScheduler,
    pub config: ChipsetConfig,
}

impl Chipset {
    pub fn new(config: ChipsetConfig) -> Self {
        let mut regs = VipRegisters::new();
        regs.frmcyc = config.default_frmcyc;
        Chipset {
            chars: CharacterTable::new(),
            bgmap: BgMapMemory::new(),
            framebuffers: Framebuffers::new(),
            regs,
            io: IoRegisters::new(),
            timer: HardwareTimer::new(),
            scheduler: ScanlineScheduler::new(),
            config,
        }
    }

    fn byte_mask_for(addr_is_odd: bool) -> ByteMask {
        if addr_is_odd {
            ByteMask::High
        } else {
            ByteMask::Low
        }
    }

    fn low_byte_of(value: u16, is_odd: bool) -> u8 {
        if is_odd {
            (value >> 8) as u8
        } else {
            (value & 0xFF) as u8
        }
    }

    /// Read the live 16-bit value of a VIP register at the given
    /// word-aligned offset, or `None` for a write-only/unknown register.
    fn vip_register_word(&self, word_offset: u32) -> Option<u16> {
        Some(match word_offset {
            0x00 => self.regs.intpnd,
            0x02 => self.regs.intenb,
            0x20 => self.regs.dpstts(self.scheduler.row_num, self.scheduler.displayfb),
            0x24 => self.regs.xpstts(self.scheduler.row_num, self.scheduler.drawfb),
            0x28 => self.regs.ver,
            0x30 => self.regs.spt[0],
            0x32 => self.regs.spt[1],
            0x34 => self.regs.spt[2],
            0x36 => self.regs.spt[3],
            0x40 => self.regs.gplt[0],
            0x42 => self.regs.gplt[1],
            0x44 => self.regs.gplt[2],
            0x46 => self.regs.gplt[3],
            0x48 => self.regs.jplt[0],
            0x4A => self.regs.jplt[1],
            0x4C => self.regs.jplt[2],
            0x4E => self.regs.jplt[3],
            0x50 => self.regs.bkcol,
            0x60 => self.regs.frmcyc,
            0x62 => self.regs.cta,
            0x64 => self.regs.brta,
            0x66 => self.regs.brtb,
            0x68 => self.regs.brtc,
            0x6A => self.regs.rest,
            _ => return None,
        })
    }

    fn write_vip_register_word(&mut self, word_offset: u32, value: u16, cpu: &mut dyn HostCpu) {
        match word_offset {
            0x04 => self.regs.write_intclr(value, cpu),
            0x02 => self.regs.write_intenb(value, cpu),
            0x20 => self.regs.write_dpctrl(value, cpu),
            0x24 => self.regs.write_xpctrl(value, cpu),
            0x30 => self.regs.write_spt(0, value),
            0x32 => self.regs.write_spt(1, value),
            0x34 => self.regs.write_spt(2, value),
            0x36 => self.regs.write_spt(3, value),
            0x40 => self.regs.gplt[0] = value,
            0x42 => self.regs.gplt[1] = value,
            0x44 => self.regs.gplt[2] = value,
            0x46 => self.regs.gplt[3] = value,
            0x48 => self.regs.write_jplt(0, value),
            0x4A => self.regs.write_jplt(1, value),
            0x4C => self.regs.write_jplt(2, value),
            0x4E => self.regs.write_jplt(3, value),
            0x50 => self.regs.write_bkcol(value),
            0x60 => self.regs.frmcyc = value,
            0x62 => self.regs.cta = value,
            0x64 => self.regs.write_brta(value),
            0x66 => self.regs.write_brtb(value),
            0x68 => self.regs.write_brtc(value),
            0x6A => self.regs.write_rest(value),
            0x00 | 0x28 => {
                if self.config.log_unknown_register_access {
                    log::debug!("ignored write to read-only VIP register at offset {word_offset:#04x}");
                }
            }
            _ => {
                if self.config.log_unknown_register_access {
                    log::debug!("write to unknown VIP register offset {word_offset:#04x}");
                }
            }
        }
    }

    /// HostBus byte read (spec.md §4.10).
    pub fn read(&self, addr: u32, cartridge: &mut dyn CartridgeBus) -> u8 {
        match bus::decode(addr) {
            BusRegion::Framebuffer { plane, offset } => self.framebuffers.read(plane, offset),
            BusRegion::CharBank { bank, offset } => {
                let word = self.chars.read_word(bank, (offset / 2) as u16);
                Self::low_byte_of(word, offset & 1 != 0)
            }
            BusRegion::BgMap { byte_offset } => {
                let word = self.bgmap.read(byte_offset / 2);
                Self::low_byte_of(word, byte_offset & 1 != 0)
            }
            BusRegion::VipRegister { offset } => {
                let word_offset = offset & !1;
                match self.vip_register_word(word_offset) {
                    Some(value) => Self::low_byte_of(value, offset & 1 != 0),
                    None => {
                        if self.config.log_unknown_register_access {
                            log::debug!("read from unknown VIP register offset {offset:#04x}");
                        }
                        0xFF
                    }
                }
            }
            BusRegion::IoRegister { offset } => self.io.read(offset, &self.timer),
            BusRegion::MainRam { .. } => 0,
            BusRegion::Cartridge { offset } => cartridge.read(offset),
            BusRegion::Open => {
                if self.config.log_unknown_register_access {
                    log::debug!("read from unmapped address {addr:#010x}");
                }
                0xFF
            }
        }
    }

    /// HostBus byte write (spec.md §4.10).
    pub fn write(
        &mut self,
        addr: u32,
        data: u8,
        cartridge: &mut dyn CartridgeBus,
        input: &mut dyn InputDevice,
        cpu: &mut dyn HostCpu,
    ) {
        match bus::decode(addr) {
            BusRegion::Framebuffer { plane, offset } => self.framebuffers.write(plane, offset, data),
            BusRegion::CharBank { bank, offset } => {
                let mask = Self::byte_mask_for(offset & 1 != 0);
                let shifted = if offset & 1 != 0 { (data as u16) << 8 } else { data as u16 };
                self.chars.write_word(bank, (offset / 2) as u16, shifted, mask);
            }
            BusRegion::BgMap { byte_offset } => {
                let mask = Self::byte_mask_for(byte_offset & 1 != 0);
                let shifted = if byte_offset & 1 != 0 { (data as u16) << 8 } else { data as u16 };
                self.bgmap.write(byte_offset / 2, shifted, mask);
            }
            BusRegion::VipRegister { offset } => {
                let word_offset = offset & !1;
                let is_odd = offset & 1 != 0;
                let previous = self.vip_register_word(word_offset).unwrap_or(0);
                let merged = Self::byte_mask_for(is_odd).merge(previous, if is_odd { (data as u16) << 8 } else { data as u16 });
                self.write_vip_register_word(word_offset, merged, cpu);
            }
            BusRegion::IoRegister { offset } => {
                self.io.write(offset, data, &mut self.timer, input, cpu);
            }
            BusRegion::MainRam { .. } => {}
            BusRegion::Cartridge { offset } => cartridge.write(offset, data),
            BusRegion::Open => {
                if self.config.log_unknown_register_access {
                    log::debug!("write to unmapped address {addr:#010x}");
                }
            }
        }
    }

    /// Advance one scanline on the left-eye clock (spec.md §4.8; Q2: the
    /// right-eye clock is never driven).
    pub fn scanline_tick(&mut self, scanline: u16, cpu: &mut dyn HostCpu) {
        self.scheduler.tick_left(scanline, &mut self.regs, cpu);
    }

    /// Advance the hardware timer by one tick at its configured rate.
    pub fn timer_tick(&mut self, cpu: &mut dyn HostCpu) {
        self.timer.tick(cpu);
    }

    /// Render one eye's full world list into `surface` (spec.md §6 "eye
    /// render entry").
    pub fn render_eye(&self, eye: Eye, surface: &mut dyn EyeSurface) {
        render_eye(
            eye,
            &self.bgmap,
            &self.chars,
            &self.regs.gplt,
            &self.regs.jplt,
            &self.regs.spt,
            surface,
            ClipRect::full_screen(),
        );
    }
}
