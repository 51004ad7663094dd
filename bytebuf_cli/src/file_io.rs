use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use log::debug;
use bytebuf_lib::buffer::{Buffer, SharedBuffer};
use bytebuf_lib::error::Result;

/// read the whole file into a new shared buffer
pub fn load_buffer(path: &Path) -> Result<SharedBuffer> {
    let file = File::open(path)?;
    let buffer = Buffer::from_reader(BufReader::new(file))?;
    debug!("loaded {} bytes from {}", buffer.len(), path.display());
    Ok(buffer.into_shared())
}

/// replace the file contents with the raw bytes of the buffer
pub fn store_buffer(path: &Path, buffer: &Buffer) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(buffer.raw_bytes())?;
    debug!("stored {} bytes to {}", buffer.len(), path.display());
    Ok(())
}
