// IoRegisters (spec.md §4.11): keypad latch, link-port stubs, and the
// timer register facade exposed at the I/O block's byte offsets.

use crate::host::InputDevice;
use crate::timer::HardwareTimer;

const OFFSET_KLB: u32 = 0x10;
const OFFSET_KHB: u32 = 0x14;
const OFFSET_TLB: u32 = 0x18;
const OFFSET_THB: u32 = 0x1C;
const OFFSET_TCR: u32 = 0x20;
const OFFSET_WCR: u32 = 0x24;
const OFFSET_KCR: u32 = 0x28;

pub struct IoRegisters {
    klb: u8,
    khb: u8,
    wcr: u8,
    kcr: u8,
}

impl IoRegisters {
    pub fn new() -> Self {
        IoRegisters {
            klb: 0,
            khb: 0,
            wcr: 0,
            kcr: 0,
        }
    }

    pub fn read(&self, offset: u32, timer: &HardwareTimer) -> u8 {
        match offset & 0x3F {
            OFFSET_KLB => self.klb,
            OFFSET_KHB => self.khb,
            OFFSET_TLB => (timer.latch & 0xFF) as u8,
            OFFSET_THB => (timer.latch >> 8) as u8,
            OFFSET_TCR => timer.tcr(),
            OFFSET_WCR => self.wcr,
            OFFSET_KCR => self.kcr | 0x4C,
            0x00 | 0x04 | 0x08 | 0x0C => 0,
            _ => 0xFF,
        }
    }

    pub fn write(
        &mut self,
        offset: u32,
        data: u8,
        timer: &mut HardwareTimer,
        input: &mut dyn InputDevice,
        cpu: &mut dyn crate::host::HostCpu,
    ) -> bool {
        match offset & 0x3F {
            OFFSET_TLB => {
                timer.write_tlb(data);
                false
            }
            OFFSET_THB => {
                timer.write_thb(data);
                false
            }
            OFFSET_TCR => timer.write_tcr(data, cpu),
            OFFSET_WCR => {
                self.wcr = data | 0xFC;
                false
            }
            OFFSET_KCR => {
                if data & 0x04 != 0 {
                    let snapshot = input.read_keypad();
                    self.klb = (snapshot & 0xFF) as u8;
                    self.khb = (snapshot >> 8) as u8;
                }
                if data & 0x01 != 0 {
                    self.klb = 0;
                    self.khb = 0;
                }
                self.kcr = (data | 0x48) & 0xFD;
                false
            }
            0x00 | 0x04 | 0x08 | 0x0C => false,
            _ => false,
        }
    }

    /// The strobe-done latch consulted by the periodic pad interrupt
    /// (spec.md §4.11: the top bit, 0x80, of KCR).
    pub fn strobe_done(&self) -> bool {
        self.kcr & 0x80 != 0
    }
}

impl Default for IoRegisters {
    fn default() -> Self {
        Self::new()
    }
}
