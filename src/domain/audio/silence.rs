/// Sample rate of the generated silence, in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Fixed 4-byte marker prepended to every silence buffer.
///
/// This is the bit pattern of a bare MP3 frame sync word, not a complete or
/// valid frame, so strict decoders may reject the buffer. It is kept
/// byte-for-byte because existing consumers expect exactly this layout; a
/// proper encoder would be needed to produce decodable silence frames.
pub const SILENCE_HEADER: [u8; 4] = [0xff, 0xfb, 0x90, 0x04];

/// Generate `duration_secs` of silent audio: the fixed header followed by
/// all-zero 16-bit little-endian mono PCM samples at 44100 Hz.
///
/// Output length is exactly `4 + 2 * floor(duration_secs * 44100)` bytes.
/// Callers always pass a positive duration; non-positive values are not
/// validated.
pub fn generate_silence(duration_secs: f64) -> Vec<u8> {
    let num_samples = (duration_secs * SAMPLE_RATE as f64) as usize;

    let mut buffer = Vec::with_capacity(SILENCE_HEADER.len() + num_samples * 2);
    buffer.extend_from_slice(&SILENCE_HEADER);
    // Zero-valued i16 samples are zero bytes in either endianness.
    buffer.resize(SILENCE_HEADER.len() + num_samples * 2, 0);
    buffer
}
