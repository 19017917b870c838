//! Shared test infrastructure for segment-counter integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use segment_counter::{
    Button, ButtonInput, Config, Controller, Digit, NonVolatile, SegmentOutput, SegmentPattern,
};

// ============================================================================
// Mock Output
// ============================================================================

/// One call made on the output port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEvent {
    Segments(u8),
    On(Digit),
    Off(Digit),
}

/// Mock output port that tracks the lit digits and records every call
pub struct MockOutput {
    segments: SegmentPattern,
    digit1_on: bool,
    digit2_on: bool,
    history: heapless::Vec<OutputEvent, 64>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            segments: SegmentPattern::OFF,
            digit1_on: false,
            digit2_on: false,
            history: heapless::Vec::new(),
        }
    }

    pub fn segments(&self) -> SegmentPattern {
        self.segments
    }

    pub fn is_on(&self, digit: Digit) -> bool {
        match digit {
            Digit::Digit1 => self.digit1_on,
            Digit::Digit2 => self.digit2_on,
        }
    }

    pub fn history(&self) -> &[OutputEvent] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl SegmentOutput for MockOutput {
    fn set_segments(&mut self, pattern: SegmentPattern) {
        self.segments = pattern;
        let _ = self.history.push(OutputEvent::Segments(pattern.bits()));
    }

    fn enable_digit(&mut self, digit: Digit) {
        match digit {
            Digit::Digit1 => self.digit1_on = true,
            Digit::Digit2 => self.digit2_on = true,
        }
        let _ = self.history.push(OutputEvent::On(digit));
    }

    fn disable_digit(&mut self, digit: Digit) {
        match digit {
            Digit::Digit1 => self.digit1_on = false,
            Digit::Digit2 => self.digit2_on = false,
        }
        let _ = self.history.push(OutputEvent::Off(digit));
    }
}

// ============================================================================
// Mock Storage
// ============================================================================

/// RAM-backed EEPROM, erased to 0xFF, counting writes
pub struct MockStorage {
    cells: [u8; 1024],
    writes: usize,
}

impl MockStorage {
    pub fn erased() -> Self {
        Self {
            cells: [0xFF; 1024],
            writes: 0,
        }
    }

    /// Storage holding a previous session at the default addresses
    pub fn with_record(number: u8, output_enabled: u8, count_enabled: u8, direction: u8) -> Self {
        let mut storage = Self::erased();
        storage.cells[500] = number;
        storage.cells[501] = output_enabled;
        storage.cells[502] = count_enabled;
        storage.cells[503] = direction;
        storage
    }

    pub fn cell(&self, address: u16) -> u8 {
        self.cells[address as usize]
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl NonVolatile for MockStorage {
    fn read_byte(&mut self, address: u16) -> u8 {
        self.cells[address as usize]
    }

    fn write_byte(&mut self, address: u16, value: u8) {
        self.cells[address as usize] = value;
        self.writes += 1;
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Button group with controllable press state and edge-interrupt tracking
pub struct MockButtons {
    pressed: [bool; 3],
    edge_enabled: bool,
}

impl MockButtons {
    pub fn new() -> Self {
        Self {
            pressed: [false; 3],
            edge_enabled: true,
        }
    }

    pub fn press(&mut self, button: Button) {
        self.pressed[index(button)] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.pressed[index(button)] = false;
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; 3];
    }

    pub fn edge_enabled(&self) -> bool {
        self.edge_enabled
    }
}

fn index(button: Button) -> usize {
    match button {
        Button::A => 0,
        Button::B => 1,
        Button::C => 2,
    }
}

impl ButtonInput for MockButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.pressed[index(button)]
    }

    fn enable_edge_interrupt(&mut self) {
        self.edge_enabled = true;
    }

    fn disable_edge_interrupt(&mut self) {
        self.edge_enabled = false;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestController = Controller<MockOutput, MockStorage, MockButtons>;

/// Timing that makes every period a small number of ticks:
/// 1 ms tick, 1 tick per digit switch, 5 ticks per count, 3 ticks debounce
pub fn test_config() -> Config {
    Config::new()
        .tick_period_us(1000)
        .digit_switch_ms(1)
        .count_interval_ms(5)
        .debounce_ms(3)
}

pub fn controller() -> TestController {
    Controller::new(
        test_config(),
        MockOutput::new(),
        MockStorage::erased(),
        MockButtons::new(),
    )
}

pub fn controller_with_storage(storage: MockStorage) -> TestController {
    Controller::new(test_config(), MockOutput::new(), storage, MockButtons::new())
}
