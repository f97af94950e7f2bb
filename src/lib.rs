// Virtual Image Processor core library.
//
// Emulates the fixed-function graphics coprocessor of a 1995 dual-screen
// stereoscopic game console: background/affine/object rendering, the VIP
// register file, the interrupt controller, the scanline-driven display
// scheduler, the programmable hardware timer, and the memory-mapped I/O
// dispatch that glues them to a host CPU's address space.

pub mod bgmap;
pub mod bus;
pub mod char_table;
pub mod chipset;
pub mod config;
pub mod constants;
pub mod framebuffers;
pub mod host;
pub mod interrupt;
pub mod io_registers;
pub mod rasterizer;
pub mod registers;
pub mod scheduler;
pub mod timer;
pub mod world;
pub mod world_walker;

pub use bgmap::BgMapMemory;
pub use char_table::CharacterTable;
pub use chipset::Chipset;
pub use config::ChipsetConfig;
pub use constants::{ByteMask, Eye};
pub use framebuffers::Framebuffers;
pub use host::{CartridgeBus, ClipRect, CpuLine, EyeSurface, HostCpu, InputDevice};
pub use interrupt::InterruptController;
pub use io_registers::IoRegisters;
pub use registers::{BrightnessPens, VipRegisters};
pub use scheduler::ScanlineScheduler;
pub use timer::HardwareTimer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chipset_components_can_be_instantiated() {
        let _chipset = Chipset::new(ChipsetConfig::default());
        let _chars = CharacterTable::new();
        let _bgmap = BgMapMemory::new();
        let _framebuffers = Framebuffers::new();
        let _timer = HardwareTimer::new();
        let _scheduler = ScanlineScheduler::new();
    }
}
