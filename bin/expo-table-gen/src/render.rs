use std::io::{self, Write};

use expo_mapping::float;

/// Writes the table as a Rust module, in the format of the tables embedded in `expo-mapping`.
pub fn render<W: Write>(writer: &mut W, scale: i32, thresholds: &[u64]) -> io::Result<()> {
    let size = thresholds.len();

    writeln!(writer, "// Code generated by `expo-table-gen {}`. DO NOT EDIT.", scale)?;
    writeln!(writer)?;
    writeln!(writer, "//! Mantissa thresholds for scale {}.", scale)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "/// Entry `k` is the 52-bit significand of the smallest double not less than `2^(k/{})`.",
        size
    )?;
    writeln!(writer, "pub(super) static THRESHOLDS: [u64; {}] = [", size)?;
    for (position, &threshold) in thresholds.iter().enumerate() {
        writeln!(
            writer,
            "    {:#015x}, // 2^({}/{}) == {}",
            threshold,
            position,
            size,
            float::compose(0, threshold)
        )?;
    }
    writeln!(writer, "];")?;

    writer.flush()
}

#[cfg(test)]
mod tests {
    use expo_mapping::tables::embedded_thresholds;

    use super::*;

    fn rendered(scale: i32) -> String {
        let mut output = Vec::new();
        render(&mut output, scale, embedded_thresholds(scale).unwrap()).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn matches_embedded_sources() {
        assert_eq!(
            rendered(1),
            include_str!("../../../lib/expo-mapping/src/tables/scale01.rs")
        );
        assert_eq!(
            rendered(3),
            include_str!("../../../lib/expo-mapping/src/tables/scale03.rs")
        );
        assert_eq!(
            rendered(10),
            include_str!("../../../lib/expo-mapping/src/tables/scale10.rs")
        );
    }

    #[test]
    fn entry_lines() {
        let output = rendered(2);
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines[5], "pub(super) static THRESHOLDS: [u64; 4] = [");
        assert_eq!(lines[6], "    0x0000000000000, // 2^(0/4) == 1");
        assert_eq!(lines[8], "    0x6a09e667f3bcd, // 2^(2/4) == 1.4142135623730951");
        assert_eq!(lines.last(), Some(&"];"));
    }
}
