//! Render-feature flags embedded in model file names
//!
//! The engine does not store these flags inside the model file. A file name
//! beginning with `_` carries them in its second character, which decodes as
//! a base-36 digit (`_7BRIDGE.M3D` has flags 7). Names without the prefix
//! have no flags.

use bitflags::bitflags;

bitflags! {
    /// Render features requested by a model's file name
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ModelFlags: u8 {
        /// Blend the model translucently
        const TRANSLUCENCY = 0x01;
        /// Animate texture coordinates
        const UV_ANIMATION = 0x02;
        /// Respect the texture alpha channel
        const ALPHA_TRANSPARENCY = 0x04;
        /// Treat the key color as fully transparent
        const COLOR_KEYING = 0x10;
    }
}

/// Extracts the render-feature flags from a model file name.
///
/// Returns the empty set when the name is too short to carry flags, does not
/// end in `.M3D` or `.M3X` (case-insensitive), does not start with `_`, or
/// the flag character is not alphanumeric. Bits outside the known set are
/// retained.
#[must_use]
pub fn flags_from_file_name(file_name: &str) -> ModelFlags {
    // Shortest flagged name is "_0.M3D".
    if file_name.len() < 6 {
        return ModelFlags::empty();
    }
    let upper = file_name.to_uppercase();
    if !upper.ends_with(".M3D") && !upper.ends_with(".M3X") {
        return ModelFlags::empty();
    }

    let mut chars = file_name.chars();
    if chars.next() != Some('_') {
        return ModelFlags::empty();
    }

    let bits = match chars.next() {
        Some(c @ '0'..='9') => c as u8 - b'0',
        Some(c @ 'A'..='Z') => c as u8 - b'A' + 10,
        Some(c @ 'a'..='z') => c as u8 - b'a' + 10,
        _ => return ModelFlags::empty(),
    };

    ModelFlags::from_bits_retain(bits)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("", ModelFlags::empty(); "empty")]
    #[test_case("A.M3D", ModelFlags::empty(); "too short")]
    #[test_case("_7FILE.PRJ", ModelFlags::empty(); "wrong extension")]
    #[test_case("KBARREL.M3D", ModelFlags::empty(); "no flag prefix")]
    #[test_case("_0FILE.M3D", ModelFlags::empty(); "zero flags")]
    #[test_case("_4FILE.M3D", ModelFlags::ALPHA_TRANSPARENCY; "alpha only")]
    #[test_case("_6FILE.M3D", ModelFlags::UV_ANIMATION.union(ModelFlags::ALPHA_TRANSPARENCY); "uv and alpha")]
    #[test_case(
        "_7FILE.M3D",
        ModelFlags::TRANSLUCENCY.union(ModelFlags::UV_ANIMATION).union(ModelFlags::ALPHA_TRANSPARENCY);
        "translucent uv alpha"
    )]
    #[test_case("_KFILE.M3D", ModelFlags::ALPHA_TRANSPARENCY.union(ModelFlags::COLOR_KEYING); "keyed")]
    #[test_case("_kfile.m3d", ModelFlags::ALPHA_TRANSPARENCY.union(ModelFlags::COLOR_KEYING); "lowercase")]
    #[test_case("_4FILE.M3X", ModelFlags::ALPHA_TRANSPARENCY; "m3x extension")]
    fn test_flags_from_file_name(name: &str, expected: ModelFlags) {
        assert_eq!(flags_from_file_name(name), expected);
    }

    #[test]
    fn test_unknown_bits_are_retained() {
        // 'Z' decodes to 35 which has bits outside the named set.
        let flags = flags_from_file_name("_ZFILE.M3D");
        assert_eq!(flags.bits(), 35);
        assert!(flags.contains(ModelFlags::TRANSLUCENCY));
    }
}
