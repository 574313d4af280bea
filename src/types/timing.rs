//! Timing constants for the encoded remote-control command.
//!
//! All durations are expressed in cycles of a 1 MHz reference signal, so a
//! cycle count reads directly as microseconds.

use super::pulse::{Pulse, PulsePair};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of output channels (stereo, left == right).
pub const CHANNELS: u16 = 2;

/// Bits per output sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Frequency of the reference signal that pulse cycle counts are measured against.
pub const SIGNAL_FREQUENCY_HZ: u32 = 1_000_000;

/// The command sent: 0xE0E040BF, transmitted most significant bit first.
pub const CODE_WORD: u32 = 0xE0E0_40BF;

/// Number of bits in [`CODE_WORD`].
pub const CODE_BITS: u32 = 32;

/// Silent frames written before and after the command (500 ms each).
pub const SILENCE_FRAMES: u64 = 22050;

/// Leading marker announcing a command.
pub const START_MARKER: PulsePair = PulsePair::new(4909, 4320, SIGNAL_FREQUENCY_HZ);

/// Trailing marker closing a command.
pub const STOP_MARKER: PulsePair = PulsePair::new(717, 717, SIGNAL_FREQUENCY_HZ);

/// Pulse pair for a `1` bit (long gap).
pub const ONE_BIT: PulsePair = PulsePair::new(818, 1425, SIGNAL_FREQUENCY_HZ);

/// Pulse pair for a `0` bit (short gap).
pub const ZERO_BIT: PulsePair = PulsePair::new(818, 325, SIGNAL_FREQUENCY_HZ);

/// Returns the pulse pair encoding a single bit value.
pub fn bit_pair(bit: bool) -> PulsePair {
    if bit {
        ONE_BIT
    } else {
        ZERO_BIT
    }
}

/// Iterates the bits of `code`, most significant first.
pub fn code_bits(code: u32) -> impl Iterator<Item = bool> {
    (0..CODE_BITS).map(move |i| (code >> (CODE_BITS - 1 - i)) & 1 == 1)
}

/// Every distinct pulse used by the encoding, for table-driven checks.
pub fn all_pulses() -> [Pulse; 8] {
    [
        START_MARKER.on,
        START_MARKER.off,
        ONE_BIT.on,
        ONE_BIT.off,
        ZERO_BIT.on,
        ZERO_BIT.off,
        STOP_MARKER.on,
        STOP_MARKER.off,
    ]
}
