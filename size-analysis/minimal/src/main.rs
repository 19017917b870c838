#![no_std]
#![no_main]

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use panic_halt as _;
use segment_counter::{
    Button, ButtonInput, Config, Controller, Digit, NonVolatile, SegmentOutput, SegmentPattern,
    Shared,
};

// ============================================================================
// Minimal Port Implementations
// ============================================================================

/// Zero-size output for measuring library overhead
pub struct MinimalOutput;

impl SegmentOutput for MinimalOutput {
    fn set_segments(&mut self, pattern: SegmentPattern) {
        core::hint::black_box(pattern);
    }

    fn enable_digit(&mut self, digit: Digit) {
        core::hint::black_box(digit);
    }

    fn disable_digit(&mut self, digit: Digit) {
        core::hint::black_box(digit);
    }
}

/// Four bytes of "EEPROM" in RAM
pub struct MinimalStorage([u8; 4]);

impl NonVolatile for MinimalStorage {
    fn read_byte(&mut self, address: u16) -> u8 {
        self.0[address as usize % 4]
    }

    fn write_byte(&mut self, address: u16, value: u8) {
        self.0[address as usize % 4] = value;
    }
}

pub struct MinimalButtons;

impl ButtonInput for MinimalButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        core::hint::black_box(button) == Button::A
    }

    fn enable_edge_interrupt(&mut self) {}

    fn disable_edge_interrupt(&mut self) {}
}

type MinimalController = Controller<MinimalOutput, MinimalStorage, MinimalButtons>;

static DISPLAY: Shared<MinimalController> = Shared::new();

// ============================================================================
// Interrupt Handlers
// ============================================================================

#[exception]
fn SysTick() {
    DISPLAY.with(|display| display.on_tick());
}

#[entry]
fn main() -> ! {
    let mut core = cortex_m::Peripherals::take().unwrap();

    let config = Config::new().layout(segment_counter::StorageLayout::contiguous(0));
    let mut display = Controller::new(config, MinimalOutput, MinimalStorage([0; 4]), MinimalButtons);
    display.restore();
    let _ = display.set_radix(16);
    display.enable_output();
    display.enable_count();
    DISPLAY.install(display);

    // 128 us tick at 8 MHz
    core.SYST.set_clock_source(SystClkSource::Core);
    core.SYST.set_reload(8 * 128 - 1);
    core.SYST.clear_current();
    core.SYST.enable_counter();
    core.SYST.enable_interrupt();

    loop {
        // Stand-in for a pin-change interrupt
        DISPLAY.with(|display| display.on_button_edge());
        cortex_m::asm::wfi();
    }
}
