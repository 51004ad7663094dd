use clap::ArgMatches;
use log::info;
use bytebuf_lib::buffer::SharedBuffer;
use bytebuf_lib::error::Result;
use bytebuf_lib::helper::sha256_helper::{sha256_from_bytes, sha256_to_hex_string};
use bytebuf_lib::view::DataView;
use crate::field::Field;
use crate::required_number;

const DUMP_BYTES_PER_LINE: usize = 16;

pub fn dump_main(view: &DataView) -> Result<()> {
    info!("dumping {}", view);
    let bytes = view.to_vec()?;
    for line in format_hex_dump(view.offset(), &bytes) {
        println!("{}", line);
    }
    Ok(())
}

/// one line per 16 bytes, prefixed with the absolute position of the first byte
pub fn format_hex_dump(start: usize, bytes: &[u8]) -> Vec<String> {
    bytes.chunks(DUMP_BYTES_PER_LINE)
        .enumerate()
        .map(|(line, chunk)| {
            let hex: Vec<String> = chunk.iter().map(|byte| format!("{:02x}", byte)).collect();
            format!("{:08x}  {}", start + line * DUMP_BYTES_PER_LINE, hex.join(" "))
        })
        .collect()
}

pub fn get_main(view: &DataView, matches: &ArgMatches) -> Result<()> {
    let field: Field = matches.value_of("width").unwrap_or_default().parse()?;
    let index: usize = required_number(matches, "index")?;
    let value = match field {
        Field::Bit => u32::from(view.get_bit(index)?),
        Field::Uint(width) => view.get_uint(width, index)?,
    };
    info!("read {} at {} of {}", field, index, view);
    println!("{}", value);
    Ok(())
}

pub fn digest_main(buffer: &SharedBuffer) -> Result<()> {
    let checksum = sha256_from_bytes(buffer.borrow().raw_bytes());
    println!("{}", sha256_to_hex_string(&checksum));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::read_cli::format_hex_dump;

    #[test]
    fn hex_dump_lines() {
        let bytes: Vec<u8> = (0..18).collect();
        let lines = format_hex_dump(2, &bytes);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "00000002  00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f");
        assert_eq!(lines[1], "00000012  10 11");
    }

    #[test]
    fn empty_dump() {
        assert!(format_hex_dump(0, &[]).is_empty());
    }
}
